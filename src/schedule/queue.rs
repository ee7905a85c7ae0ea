//! Time-ordered queue of deferred effects.
//!
//! Entries are kept sorted by `(due, handle)`. Handles grow monotonically,
//! so entries due at the same instant fire in scheduling order.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::DeferredEffect;

/// Handle for cancelling a scheduled effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimerHandle(pub u64);

impl TimerHandle {
    /// Get the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// A scheduled effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deferred {
    /// Handle returned when this entry was scheduled.
    pub handle: TimerHandle,

    /// Clock time at which the effect fires.
    pub due: Duration,

    /// What to do.
    pub effect: DeferredEffect,
}

/// Deferred-effect scheduler with a virtual clock.
///
/// The host moves the clock forward; the scheduler never reads wall time.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use memory_pairs::events::PulseKind;
/// use memory_pairs::schedule::{DeferredEffect, Scheduler};
///
/// let mut scheduler = Scheduler::new();
/// let late = scheduler.schedule(Duration::from_millis(1000), DeferredEffect::ClearPulse(PulseKind::Match));
/// scheduler.schedule(Duration::from_millis(300), DeferredEffect::Pulse(PulseKind::Match));
///
/// let first = scheduler.pop_due(Duration::from_millis(500)).unwrap();
/// assert_eq!(first.effect, DeferredEffect::Pulse(PulseKind::Match));
/// assert!(scheduler.pop_due(Duration::from_millis(500)).is_none());
///
/// assert!(scheduler.cancel(late));
/// assert!(scheduler.is_empty());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Scheduler {
    /// Pending entries, earliest first.
    entries: Vec<Deferred>,

    /// Current clock time.
    now: Duration,

    /// Next handle value.
    next_id: u64,
}

impl Scheduler {
    /// Create an empty scheduler with the clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `effect` to fire `delay` after the current clock time.
    pub fn schedule(&mut self, delay: Duration, effect: DeferredEffect) -> TimerHandle {
        self.schedule_at(self.now + delay, effect)
    }

    /// Schedule `effect` at an absolute clock time (clamped to now).
    pub fn schedule_at(&mut self, due: Duration, effect: DeferredEffect) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;

        let due = due.max(self.now);
        let pos = self
            .entries
            .partition_point(|e| (e.due, e.handle) <= (due, handle));
        self.entries.insert(pos, Deferred { handle, due, effect });
        handle
    }

    /// Cancel a pending entry. Returns `false` if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.entries.iter().position(|e| e.handle == handle) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    /// Remove and return the earliest entry due at or before `deadline`,
    /// moving the clock to its due time.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<Deferred> {
        if self.entries.first()?.due > deadline {
            return None;
        }
        let entry = self.entries.remove(0);
        self.now = self.now.max(entry.due);
        Some(entry)
    }

    /// Move the clock forward without firing anything.
    pub fn advance_clock_to(&mut self, time: Duration) {
        self.now = self.now.max(time);
    }

    /// Due time of the earliest pending entry.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.entries.first().map(|e| e.due)
    }

    /// Pending entries, earliest first.
    #[must_use]
    pub fn entries(&self) -> &[Deferred] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every pending entry. The clock keeps its value.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InstanceIndex;
    use crate::events::PulseKind;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn reset(a: u32, b: u32) -> DeferredEffect {
        DeferredEffect::ResetMismatch {
            first: InstanceIndex::new(a),
            second: InstanceIndex::new(b),
        }
    }

    #[test]
    fn test_fires_in_due_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(1000), reset(0, 1));
        scheduler.schedule(ms(300), DeferredEffect::Pulse(PulseKind::NoMatch));

        let first = scheduler.pop_due(ms(2000)).unwrap();
        assert_eq!(first.due, ms(300));
        assert_eq!(scheduler.now(), ms(300));

        let second = scheduler.pop_due(ms(2000)).unwrap();
        assert_eq!(second.effect, reset(0, 1));
        assert_eq!(scheduler.now(), ms(1000));
        assert!(scheduler.pop_due(ms(2000)).is_none());
    }

    #[test]
    fn test_ties_fire_in_schedule_order() {
        let mut scheduler = Scheduler::new();
        let a = scheduler.schedule(ms(100), reset(0, 1));
        let b = scheduler.schedule(ms(100), reset(2, 3));

        assert_eq!(scheduler.pop_due(ms(100)).unwrap().handle, a);
        assert_eq!(scheduler.pop_due(ms(100)).unwrap().handle, b);
    }

    #[test]
    fn test_not_due_yet() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(1000), reset(0, 1));

        assert!(scheduler.pop_due(ms(999)).is_none());
        assert_eq!(scheduler.now(), Duration::ZERO);
        assert_eq!(scheduler.next_due(), Some(ms(1000)));
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule(ms(1000), reset(0, 1));

        assert!(scheduler.is_pending(handle));
        assert!(scheduler.cancel(handle));
        assert!(!scheduler.is_pending(handle));
        assert!(!scheduler.cancel(handle));
        assert!(scheduler.pop_due(ms(5000)).is_none());
    }

    #[test]
    fn test_delay_is_relative_to_clock() {
        let mut scheduler = Scheduler::new();
        scheduler.advance_clock_to(ms(500));
        scheduler.schedule(ms(300), DeferredEffect::Pulse(PulseKind::Match));

        assert_eq!(scheduler.next_due(), Some(ms(800)));
    }

    #[test]
    fn test_clock_never_moves_backwards() {
        let mut scheduler = Scheduler::new();
        scheduler.advance_clock_to(ms(500));
        scheduler.advance_clock_to(ms(100));
        assert_eq!(scheduler.now(), ms(500));

        let handle = scheduler.schedule_at(ms(10), DeferredEffect::Pulse(PulseKind::Match));
        assert_eq!(scheduler.entries()[0].handle, handle);
        assert_eq!(scheduler.entries()[0].due, ms(500));
    }

    #[test]
    fn test_clear() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(300), DeferredEffect::Pulse(PulseKind::Match));
        scheduler.schedule(ms(1000), reset(0, 1));
        assert_eq!(scheduler.len(), 2);

        scheduler.clear();
        assert!(scheduler.is_empty());
        assert_eq!(scheduler.next_due(), None);
    }
}
