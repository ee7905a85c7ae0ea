//! Results of a card pick.

use serde::{Deserialize, Serialize};

/// Why a pick was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// The card is already part of a matched pair.
    AlreadySolved,
    /// The card is already face-up this turn.
    AlreadyRevealed,
    /// Two cards are waiting for their deferred evaluation.
    EvaluationPending,
}

/// What a pick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// First card of the turn revealed; waiting for the second.
    FirstPick,
    /// Second card revealed and it matches the first.
    Matched,
    /// Second card revealed and it differs from the first.
    Mismatched,
    /// Nothing changed.
    Rejected(RejectReason),
}

impl SelectOutcome {
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, SelectOutcome::Rejected(_))
    }

    /// The pick completed a turn (a move was counted).
    #[must_use]
    pub fn completed_turn(&self) -> bool {
        matches!(self, SelectOutcome::Matched | SelectOutcome::Mismatched)
    }
}
