//! Engine error taxonomy.
//!
//! Only two things are errors: bad configuration (fatal at startup) and a
//! card reference outside the board (a collaborator bug). Timing races such
//! as double clicks are absorbed as rejected picks, see
//! [`SelectOutcome`](crate::engine::SelectOutcome).

use thiserror::Error;

use super::ids::InstanceIndex;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Deck or engine configuration cannot produce a playable game.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A pick referenced a card that is not on the board.
    #[error("invalid card reference {index} (deck size {deck_size})")]
    InvalidCardReference {
        index: InstanceIndex,
        deck_size: usize,
    },
}

impl EngineError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}
