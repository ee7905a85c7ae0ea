//! Outbound notifications and the presentation collaborator.
//!
//! ## Flow
//!
//! 1. The host implements [`Presenter`] (or uses [`EventLog`])
//! 2. The engine calls `Presenter::notify` for every state change,
//!    immediately for pick results and later for deferred effects
//! 3. The presenter renders; it never mutates engine state

mod event;
mod presenter;

pub use event::{EngineEvent, PulseKind, TrayAnchor};
pub use presenter::{EventLog, Presenter};
