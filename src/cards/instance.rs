//! Card instances - one physical card on the board.
//!
//! `CardInstance` tracks the face-up/face-down/solved state of a single
//! positioned card. There are exactly two instances per `CardFace`.
//!
//! ## State Machine
//!
//! ```text
//! Hidden ──reveal──▶ Revealed ──solve──▶ Solved (terminal)
//!    ▲                  │
//!    └──────hide────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{FaceId, InstanceIndex};

/// Per-card state. Mutually exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    /// Face-down and pickable.
    #[default]
    Hidden,
    /// Face-up, waiting for a second pick or for its deferred evaluation.
    Revealed,
    /// Matched and retained.
    Solved,
}

/// A card instance on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Board position.
    pub index: InstanceIndex,

    /// Face shown when revealed.
    pub face_id: FaceId,

    /// Current state.
    pub state: CardState,
}

impl CardInstance {
    /// Create a face-down card.
    #[must_use]
    pub fn new(index: InstanceIndex, face_id: FaceId) -> Self {
        Self {
            index,
            face_id,
            state: CardState::Hidden,
        }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.state == CardState::Hidden
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.state == CardState::Revealed
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state == CardState::Solved
    }

    /// Turn face-up. Only hidden cards can be revealed.
    pub fn reveal(&mut self) -> bool {
        self.transition(CardState::Hidden, CardState::Revealed)
    }

    /// Turn face-down again after a mismatch.
    pub fn hide(&mut self) -> bool {
        self.transition(CardState::Revealed, CardState::Hidden)
    }

    /// Retain as part of a matched pair.
    pub fn solve(&mut self) -> bool {
        self.transition(CardState::Revealed, CardState::Solved)
    }

    fn transition(&mut self, from: CardState, to: CardState) -> bool {
        if self.state != from {
            return false;
        }
        self.state = to;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> CardInstance {
        CardInstance::new(InstanceIndex::new(4), FaceId::new(2))
    }

    #[test]
    fn test_new_card_is_hidden() {
        let card = card();
        assert!(card.is_hidden());
        assert_eq!(card.index, InstanceIndex::new(4));
        assert_eq!(card.face_id, FaceId::new(2));
    }

    #[test]
    fn test_reveal_then_hide() {
        let mut card = card();
        assert!(card.reveal());
        assert!(card.is_revealed());
        assert!(!card.reveal());

        assert!(card.hide());
        assert!(card.is_hidden());
        assert!(!card.hide());
    }

    #[test]
    fn test_solved_is_terminal() {
        let mut card = card();
        assert!(!card.solve()); // must be revealed first
        card.reveal();
        assert!(card.solve());

        assert!(!card.hide());
        assert!(!card.reveal());
        assert!(card.is_solved());
    }

    #[test]
    fn test_card_instance_serialization() {
        let mut card = card();
        card.reveal();

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: CardInstance = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
