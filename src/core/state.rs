//! Per-play-through state: counters and the current selection.
//!
//! ## GameSession
//!
//! Move, match and collected counters plus the latch that keeps the
//! "game finished" notification to a single emission.
//!
//! ## Selection
//!
//! The 0–2 cards revealed this turn and waiting for evaluation. Stored
//! inline (`SmallVec`) since it never exceeds two entries.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::ids::InstanceIndex;

/// Counters for one play-through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    /// Completed turns (pairs flipped), matching or not.
    pub move_count: u32,

    /// Successful pairs.
    pub match_count: u32,

    /// Cards collected; always `2 * match_count`.
    pub collected_count: u32,

    /// Set once `GameFinished` has been emitted.
    finished: bool,
}

impl GameSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero all counters and re-arm the finished latch.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Count a completed turn.
    pub fn record_move(&mut self) {
        self.move_count += 1;
    }

    /// Count a successful pair.
    pub fn record_match(&mut self) {
        self.match_count += 1;
        self.collected_count += 2;
    }

    /// All cards of a deck of `deck_size` have been collected.
    #[must_use]
    pub fn is_complete(&self, deck_size: usize) -> bool {
        deck_size > 0 && self.collected_count as usize == deck_size
    }

    /// Whether the end of this play-through was already announced.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Latch the finished flag. Returns `true` only the first time.
    pub fn mark_finished(&mut self) -> bool {
        !std::mem::replace(&mut self.finished, true)
    }
}

/// Cards revealed this turn, in pick order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    picks: SmallVec<[InstanceIndex; 2]>,
}

impl Selection {
    /// Maximum number of cards evaluated per turn.
    pub const CAPACITY: usize = 2;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// A pair is waiting for its deferred evaluation.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.picks.len() >= Self::CAPACITY
    }

    #[must_use]
    pub fn contains(&self, index: InstanceIndex) -> bool {
        self.picks.contains(&index)
    }

    /// Add a pick. Returns `false` (and changes nothing) when full.
    pub fn push(&mut self, index: InstanceIndex) -> bool {
        if self.is_full() {
            return false;
        }
        self.picks.push(index);
        true
    }

    /// The two picks, once both are in.
    #[must_use]
    pub fn pair(&self) -> Option<(InstanceIndex, InstanceIndex)> {
        match self.picks.as_slice() {
            [first, second] => Some((*first, *second)),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.picks.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = InstanceIndex> + '_ {
        self.picks.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[InstanceIndex] {
        &self.picks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_counters() {
        let mut session = GameSession::new();
        session.record_move();
        session.record_move();
        session.record_match();

        assert_eq!(session.move_count, 2);
        assert_eq!(session.match_count, 1);
        assert_eq!(session.collected_count, 2);
        assert!(session.is_complete(2));
        assert!(!session.is_complete(4));
    }

    #[test]
    fn test_session_finished_latch() {
        let mut session = GameSession::new();
        assert!(!session.is_finished());
        assert!(session.mark_finished());
        assert!(!session.mark_finished());
        assert!(session.is_finished());

        session.reset();
        assert!(!session.is_finished());
        assert_eq!(session, GameSession::default());
    }

    #[test]
    fn test_empty_deck_never_complete() {
        assert!(!GameSession::new().is_complete(0));
    }

    #[test]
    fn test_selection_capacity() {
        let mut selection = Selection::new();
        assert!(selection.push(InstanceIndex(3)));
        assert!(selection.pair().is_none());
        assert!(selection.push(InstanceIndex(5)));
        assert!(selection.is_full());
        assert!(!selection.push(InstanceIndex(7)));

        assert_eq!(selection.len(), 2);
        assert_eq!(selection.pair(), Some((InstanceIndex(3), InstanceIndex(5))));
        assert!(selection.contains(InstanceIndex(5)));
        assert!(!selection.contains(InstanceIndex(7)));

        selection.clear();
        assert!(selection.is_empty());
    }
}
