//! The memory game engine.

use std::time::Duration;

use im::Vector;
use rustc_hash::FxHashSet;
use tracing::{debug, error, info, trace};

use crate::cards::{CardFace, CardInstance, CardState, DeckProvider};
use crate::core::{
    EngineConfig, EngineError, FaceId, GameRng, GameRngState, GameSession, InstanceIndex,
    Selection,
};
use crate::events::{EngineEvent, EventLog, Presenter, PulseKind, TrayAnchor};
use crate::schedule::{Deferred, DeferredEffect, Scheduler, TimerHandle};

use super::outcome::{RejectReason, SelectOutcome};

/// Pairs-matching game engine.
///
/// Owns the board, the current selection, the session counters and the
/// deferred-effect queue for one play-through at a time. All output goes
/// through the presenter `P`.
#[derive(Debug)]
pub struct MemoryGame<P: Presenter> {
    config: EngineConfig,
    presenter: P,
    rng: GameRng,

    /// Board in position order; `cards[i].index == i`.
    cards: Vector<CardInstance>,
    selection: Selection,
    session: GameSession,

    scheduler: Scheduler,
    /// Outstanding mismatch reset, superseded by the next mismatch.
    pending_reset: Option<TimerHandle>,

    tray_anchor: TrayAnchor,
}

impl MemoryGame<EventLog> {
    /// Engine that records its events in an [`EventLog`].
    pub fn recording(config: EngineConfig) -> Result<Self, EngineError> {
        Self::new(config, EventLog::new())
    }
}

impl<P: Presenter> MemoryGame<P> {
    /// Create an engine with an empty board. Call [`start_game`](Self::start_game)
    /// before picking cards.
    pub fn new(config: EngineConfig, presenter: P) -> Result<Self, EngineError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        Ok(Self {
            config,
            presenter,
            rng,
            cards: Vector::new(),
            selection: Selection::new(),
            session: GameSession::new(),
            scheduler: Scheduler::new(),
            pending_reset: None,
            tray_anchor: TrayAnchor::default(),
        })
    }

    // === Game lifecycle ===

    /// Start a new play-through with a deck built from `faces`.
    ///
    /// Every face is placed on the board twice. Any state left over from a
    /// previous play-through, including pending deferred effects, is dropped.
    pub fn start_game(&mut self, faces: &[CardFace]) -> Result<(), EngineError> {
        if faces.is_empty() {
            return Err(EngineError::config("cannot start a game without faces"));
        }
        let mut seen = FxHashSet::default();
        if let Some(dup) = faces.iter().find(|f| !seen.insert(f.id)) {
            return Err(EngineError::config(format!("duplicate face id {}", dup.id)));
        }

        let mut deck: Vec<FaceId> = faces.iter().chain(faces).map(|f| f.id).collect();
        if self.config.shuffle {
            self.rng.shuffle(&mut deck);
        }

        self.cards = deck
            .into_iter()
            .enumerate()
            .map(|(i, face_id)| CardInstance::new(InstanceIndex::new(i as u32), face_id))
            .collect();

        self.scheduler.clear();
        self.pending_reset = None;
        self.selection.clear();
        self.reset();

        self.emit(EngineEvent::Render(self.cards.clone()));
        self.emit_counters();

        self.tray_anchor = self.presenter.tray_anchor();

        info!(
            faces = faces.len(),
            deck_size = self.cards.len(),
            shuffled = self.config.shuffle,
            "started new game"
        );
        Ok(())
    }

    /// Start a new play-through with the faces `provider` lists.
    pub fn start_with_provider(&mut self, provider: &DeckProvider) -> Result<(), EngineError> {
        self.start_game(&provider.list_faces())
    }

    /// Zero the session counters.
    ///
    /// Cards and selection are untouched; [`start_game`](Self::start_game)
    /// rebuilds those and calls this itself.
    pub fn reset(&mut self) {
        self.session.reset();
    }

    // === Turn evaluation ===

    /// Handle a pick of the card at `index`.
    ///
    /// Picks of solved or face-up cards, and picks while a pair is being
    /// evaluated, are ignored and reported as [`SelectOutcome::Rejected`].
    pub fn select_card(&mut self, index: InstanceIndex) -> Result<SelectOutcome, EngineError> {
        let Some(card) = self.cards.get(index.as_usize()) else {
            error!(%index, deck_size = self.cards.len(), "pick outside the board");
            return Err(EngineError::InvalidCardReference {
                index,
                deck_size: self.cards.len(),
            });
        };

        match card.state {
            CardState::Solved => return Ok(self.reject(index, RejectReason::AlreadySolved)),
            CardState::Revealed => return Ok(self.reject(index, RejectReason::AlreadyRevealed)),
            CardState::Hidden => {}
        }
        if self.selection.is_full() {
            return Ok(self.reject(index, RejectReason::EvaluationPending));
        }

        if let Some(card) = self.cards.get_mut(index.as_usize()) {
            card.reveal();
        }
        self.selection.push(index);
        self.emit(EngineEvent::CardRevealed(index));

        let Some((first, second)) = self.selection.pair() else {
            debug!(%index, "first pick");
            return Ok(SelectOutcome::FirstPick);
        };

        let outcome = if self.cards[first.as_usize()].face_id == self.cards[second.as_usize()].face_id {
            self.session.record_match();
            self.scheduler
                .schedule(self.config.short_delay(), DeferredEffect::Pulse(PulseKind::Match));
            self.scheduler.schedule(
                self.config.long_delay(),
                DeferredEffect::CommitMatch { first, second },
            );
            SelectOutcome::Matched
        } else {
            self.scheduler
                .schedule(self.config.short_delay(), DeferredEffect::Pulse(PulseKind::NoMatch));
            if let Some(stale) = self.pending_reset.take() {
                self.scheduler.cancel(stale);
            }
            self.pending_reset = Some(self.scheduler.schedule(
                self.config.long_delay(),
                DeferredEffect::ResetMismatch { first, second },
            ));
            SelectOutcome::Mismatched
        };

        self.session.record_move();
        self.emit_counters();

        debug!(
            %first,
            %second,
            ?outcome,
            moves = self.session.move_count,
            matches = self.session.match_count,
            "pair evaluated"
        );
        Ok(outcome)
    }

    /// Emit `GameFinished` if every card is collected and solved and it has
    /// not been emitted yet this play-through. Returns whether it was emitted.
    pub fn check_game_end(&mut self) -> bool {
        // The last pair is counted at pick time but solved a long tier later.
        if !self.session.is_complete(self.cards.len())
            || !self.cards.iter().all(CardInstance::is_solved)
            || !self.session.mark_finished()
        {
            return false;
        }
        info!(
            moves = self.session.move_count,
            matches = self.session.match_count,
            "game finished"
        );
        self.emit(EngineEvent::GameFinished);
        true
    }

    // === Time ===

    /// Move the clock forward by `elapsed`, applying every deferred effect
    /// that falls due. Returns the number applied.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let deadline = self.scheduler.now() + elapsed;
        let mut fired = 0;
        while let Some(entry) = self.scheduler.pop_due(deadline) {
            self.apply(entry);
            fired += 1;
        }
        self.scheduler.advance_clock_to(deadline);
        fired
    }

    /// Apply every pending deferred effect, moving the clock as far as needed.
    pub fn run_until_idle(&mut self) -> usize {
        let mut fired = 0;
        while let Some(due) = self.scheduler.next_due() {
            while let Some(entry) = self.scheduler.pop_due(due) {
                self.apply(entry);
                fired += 1;
            }
        }
        fired
    }

    /// Time until the next deferred effect falls due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler
            .next_due()
            .map(|due| due.saturating_sub(self.scheduler.now()))
    }

    /// Current engine clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Number of deferred effects still pending.
    #[must_use]
    pub fn pending_effects(&self) -> usize {
        self.scheduler.len()
    }

    /// Pending deferred effects, earliest first.
    #[must_use]
    pub fn scheduled(&self) -> &[Deferred] {
        self.scheduler.entries()
    }

    fn apply(&mut self, entry: Deferred) {
        debug!(
            effect = entry.effect.name(),
            handle = %entry.handle,
            at_ms = entry.due.as_millis() as u64,
            "deferred effect fired"
        );

        match entry.effect {
            DeferredEffect::Pulse(kind) => {
                self.emit(EngineEvent::Pulse(kind));
                let handle = self
                    .scheduler
                    .schedule(self.config.pulse_hold(), DeferredEffect::ClearPulse(kind));
                trace!(%handle, %kind, "pulse clear scheduled");
            }
            DeferredEffect::ClearPulse(kind) => {
                self.emit(EngineEvent::PulseCleared(kind));
            }
            DeferredEffect::CommitMatch { first, second } => {
                for index in [first, second] {
                    if let Some(card) = self.cards.get_mut(index.as_usize()) {
                        card.solve();
                    }
                    self.emit(EngineEvent::CardSolved(index));
                    self.emit(EngineEvent::Collect {
                        index,
                        anchor: self.tray_anchor,
                    });
                }
                self.selection.clear();
                self.check_game_end();
            }
            DeferredEffect::ResetMismatch { first, second } => {
                if self.pending_reset == Some(entry.handle) {
                    self.pending_reset = None;
                }
                for index in [first, second] {
                    if let Some(card) = self.cards.get_mut(index.as_usize()) {
                        card.hide();
                    }
                    self.emit(EngineEvent::CardHidden(index));
                }
                self.selection.clear();
            }
        }
    }

    // === Inspection ===

    /// The board in position order.
    #[must_use]
    pub fn cards(&self) -> &Vector<CardInstance> {
        &self.cards
    }

    #[must_use]
    pub fn card(&self, index: InstanceIndex) -> Option<&CardInstance> {
        self.cards.get(index.as_usize())
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// A pair is waiting for its deferred evaluation; picks are rejected.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.selection.is_full()
    }

    /// `GameFinished` has been emitted for this play-through.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    /// Tray anchor captured at the last game start.
    #[must_use]
    pub fn tray_anchor(&self) -> TrayAnchor {
        self.tray_anchor
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Shuffle RNG state, enough to replay the next deal.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    // === Helpers ===

    fn reject(&self, index: InstanceIndex, reason: RejectReason) -> SelectOutcome {
        debug!(%index, ?reason, "pick ignored");
        SelectOutcome::Rejected(reason)
    }

    fn emit_counters(&mut self) {
        self.emit(EngineEvent::CountersUpdated {
            moves: self.session.move_count,
            matches: self.session.match_count,
        });
    }

    fn emit(&mut self, event: EngineEvent) {
        trace!(event = event.name(), "emit");
        self.presenter.notify(event);
    }
}
