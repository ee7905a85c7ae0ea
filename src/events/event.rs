//! Outbound engine events.
//!
//! Every observable change the presentation layer has to render is an
//! `EngineEvent`. The engine never draws anything itself; it describes what
//! happened and in which order.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::CardInstance;
use crate::core::InstanceIndex;

/// Kind of transient feedback shown after a pair is evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PulseKind {
    Match,
    NoMatch,
}

impl std::fmt::Display for PulseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PulseKind::Match => write!(f, "match"),
            PulseKind::NoMatch => write!(f, "no-match"),
        }
    }
}

/// Target coordinate of the collected-cards tray.
///
/// Owned by the presentation layer. The engine captures it at game start
/// and forwards it untouched with every collect request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrayAnchor {
    pub x: f64,
    pub y: f64,
}

impl TrayAnchor {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A notification for the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// Full board redraw after a shuffle.
    Render(Vector<CardInstance>),

    /// A card was turned face-up.
    CardRevealed(InstanceIndex),

    /// A card was turned face-down after a mismatch.
    CardHidden(InstanceIndex),

    /// A card became part of a matched pair.
    CardSolved(InstanceIndex),

    /// Move or match counters changed.
    CountersUpdated { moves: u32, matches: u32 },

    /// Show the match / no-match feedback.
    Pulse(PulseKind),

    /// Take the match / no-match feedback down again.
    PulseCleared(PulseKind),

    /// Animate a solved card to the tray.
    Collect {
        index: InstanceIndex,
        anchor: TrayAnchor,
    },

    /// Every pair is collected.
    GameFinished,
}

impl EngineEvent {
    /// The card this event is about, if any.
    #[must_use]
    pub fn card(&self) -> Option<InstanceIndex> {
        match self {
            EngineEvent::CardRevealed(index)
            | EngineEvent::CardHidden(index)
            | EngineEvent::CardSolved(index)
            | EngineEvent::Collect { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Short name, used for log fields.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            EngineEvent::Render(_) => "render",
            EngineEvent::CardRevealed(_) => "card_revealed",
            EngineEvent::CardHidden(_) => "card_hidden",
            EngineEvent::CardSolved(_) => "card_solved",
            EngineEvent::CountersUpdated { .. } => "counters_updated",
            EngineEvent::Pulse(_) => "pulse",
            EngineEvent::PulseCleared(_) => "pulse_cleared",
            EngineEvent::Collect { .. } => "collect",
            EngineEvent::GameFinished => "game_finished",
        }
    }
}
