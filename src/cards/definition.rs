//! Card faces - the distinct identities a deck is built from.
//!
//! A `CardFace` is immutable once the deck provider produces it. The
//! engine duplicates every face into two `CardInstance`s at game start.

use serde::{Deserialize, Serialize};

use crate::core::FaceId;

/// A distinct card image/identity.
///
/// ```
/// use memory_pairs::cards::CardFace;
/// use memory_pairs::core::FaceId;
///
/// let face = CardFace::new(FaceId::new(3), "/img/fruits/03.jpg");
/// assert_eq!(face.id.raw(), 3);
/// assert!(face.matches(&CardFace::new(FaceId::new(3), "elsewhere.png")));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardFace {
    /// Face identity, `1..=face_count`.
    pub id: FaceId,

    /// Reference to the face image, resolved by the presentation layer.
    pub asset_ref: String,
}

impl CardFace {
    /// Create a new card face.
    pub fn new(id: FaceId, asset_ref: impl Into<String>) -> Self {
        Self {
            id,
            asset_ref: asset_ref.into(),
        }
    }

    /// Two faces match when their ids are equal; asset paths are ignored.
    #[must_use]
    pub fn matches(&self, other: &CardFace) -> bool {
        self.id == other.id
    }
}

impl std::fmt::Display for CardFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.id, self.asset_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_matching() {
        let a = CardFace::new(FaceId::new(1), "a.jpg");
        let b = CardFace::new(FaceId::new(2), "a.jpg");
        assert!(a.matches(&a.clone()));
        assert!(!a.matches(&b));
    }

    #[test]
    fn test_face_display() {
        let face = CardFace::new(FaceId::new(7), "/img/07.jpg");
        assert_eq!(format!("{}", face), "Face(7) (/img/07.jpg)");
    }

    #[test]
    fn test_face_serialization() {
        let face = CardFace::new(FaceId::new(12), "/img/fruits/12.jpg");
        let json = serde_json::to_string(&face).unwrap();
        let deserialized: CardFace = serde_json::from_str(&json).unwrap();
        assert_eq!(face, deserialized);
    }
}
