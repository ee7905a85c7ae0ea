//! Identifiers for faces and board positions.
//!
//! ## Layout
//!
//! - `FaceId`: identity of a distinct card face, `1..=face_count`
//! - `InstanceIndex`: position of a physical card on the board,
//!   `0..deck_size`, assigned after the shuffle
//!
//! The presentation layer maps `InstanceIndex` values to its own render
//! targets. The engine never holds rendering handles.
//!
//! ```
//! use memory_pairs::core::{FaceId, InstanceIndex};
//!
//! let face = FaceId::new(3);
//! assert_eq!(face.raw(), 3);
//!
//! let slot = InstanceIndex::new(7);
//! assert_eq!(slot.as_usize(), 7);
//! assert!(slot.in_bounds(8));
//! assert!(!slot.in_bounds(7));
//! ```

use serde::{Deserialize, Serialize};

/// Identity of a distinct card face.
///
/// Every face appears on exactly two cards per game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FaceId(pub u32);

impl FaceId {
    /// Create a new face ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for FaceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for FaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Face({})", self.0)
    }
}

/// Position of one physical card on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceIndex(pub u32);

impl InstanceIndex {
    /// Create a new instance index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into a board slice.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Check whether this index addresses a card in a deck of `deck_size`.
    #[must_use]
    pub const fn in_bounds(self, deck_size: usize) -> bool {
        (self.0 as usize) < deck_size
    }
}

impl From<u32> for InstanceIndex {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for InstanceIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}
