//! The presentation collaborator.
//!
//! The engine drives a `Presenter`: it asks for the tray anchor once per
//! game and hands over every event in emission order. `EventLog` is the
//! in-memory implementation for hosts that prefer to poll.

use super::event::{EngineEvent, TrayAnchor};

/// Receiver of engine events.
pub trait Presenter {
    /// Current position of the collected-cards tray.
    ///
    /// Called once per `start_game`; the value is forwarded with every
    /// collect request of that play-through.
    fn tray_anchor(&self) -> TrayAnchor;

    /// Handle one event.
    fn notify(&mut self, event: EngineEvent);
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn tray_anchor(&self) -> TrayAnchor {
        (**self).tray_anchor()
    }

    fn notify(&mut self, event: EngineEvent) {
        (**self).notify(event);
    }
}

impl<P: Presenter + ?Sized> Presenter for Box<P> {
    fn tray_anchor(&self) -> TrayAnchor {
        (**self).tray_anchor()
    }

    fn notify(&mut self, event: EngineEvent) {
        (**self).notify(event);
    }
}

/// Presenter that records events for later draining.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<EngineEvent>,
    anchor: TrayAnchor,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `anchor` as the tray position.
    #[must_use]
    pub fn with_anchor(anchor: TrayAnchor) -> Self {
        Self {
            events: Vec::new(),
            anchor,
        }
    }

    /// Move the tray (takes effect at the next game start).
    pub fn set_anchor(&mut self, anchor: TrayAnchor) {
        self.anchor = anchor;
    }

    /// Events recorded since the last drain.
    #[must_use]
    pub fn events(&self) -> &[EngineEvent] {
        &self.events
    }

    pub fn drain(&mut self) -> impl Iterator<Item = EngineEvent> + '_ {
        self.events.drain(..)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Count recorded events matching a predicate.
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&EngineEvent) -> bool,
    {
        self.events.iter().filter(|e| predicate(e)).count()
    }
}

impl Presenter for EventLog {
    fn tray_anchor(&self) -> TrayAnchor {
        self.anchor
    }

    fn notify(&mut self, event: EngineEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InstanceIndex;

    #[test]
    fn test_event_log_records_in_order() {
        let mut log = EventLog::new();
        log.notify(EngineEvent::CardRevealed(InstanceIndex::new(0)));
        log.notify(EngineEvent::CardRevealed(InstanceIndex::new(1)));
        log.notify(EngineEvent::GameFinished);

        assert_eq!(log.len(), 3);
        assert_eq!(
            log.count(|e| matches!(e, EngineEvent::CardRevealed(_))),
            2
        );
        assert_eq!(log.events()[2], EngineEvent::GameFinished);

        let drained: Vec<_> = log.drain().collect();
        assert_eq!(drained.len(), 3);
        assert!(log.is_empty());
    }

    #[test]
    fn test_anchor() {
        let mut log = EventLog::with_anchor(TrayAnchor::new(10.0, 20.0));
        assert_eq!(log.tray_anchor(), TrayAnchor::new(10.0, 20.0));

        log.set_anchor(TrayAnchor::new(1.0, 2.0));
        assert_eq!(log.tray_anchor(), TrayAnchor::new(1.0, 2.0));
    }

    #[test]
    fn test_mut_ref_presenter() {
        fn finish<P: Presenter>(mut presenter: P) {
            presenter.notify(EngineEvent::GameFinished);
        }

        let mut log = EventLog::new();
        finish(&mut log);
        finish(Box::new(&mut log));
        assert_eq!(log.len(), 2);
    }
}
