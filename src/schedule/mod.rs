//! Deferred-effect scheduling.
//!
//! Every turn's visible consequences are split into two delay tiers:
//!
//! - **Short tier**: the match / no-match pulse
//! - **Long tier**: the authoritative transition (cards solved and
//!   collected, or turned face-down again)
//!
//! Effects are plain data ([`DeferredEffect`]) queued on a [`Scheduler`]
//! and applied by the engine when the host advances the clock. Handles
//! allow cancelling an entry before it fires.

mod queue;

pub use queue::{Deferred, Scheduler, TimerHandle};

use serde::{Deserialize, Serialize};

use crate::core::InstanceIndex;
use crate::events::PulseKind;

/// An effect the engine applies later.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeferredEffect {
    /// Show match / no-match feedback.
    Pulse(PulseKind),

    /// Take the feedback down.
    ClearPulse(PulseKind),

    /// Solve and collect a matched pair, then check for the end of the game.
    CommitMatch {
        first: InstanceIndex,
        second: InstanceIndex,
    },

    /// Turn a mismatched pair face-down again.
    ResetMismatch {
        first: InstanceIndex,
        second: InstanceIndex,
    },
}

impl DeferredEffect {
    /// Short name, used for log fields.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DeferredEffect::Pulse(_) => "pulse",
            DeferredEffect::ClearPulse(_) => "clear_pulse",
            DeferredEffect::CommitMatch { .. } => "commit_match",
            DeferredEffect::ResetMismatch { .. } => "reset_mismatch",
        }
    }
}
