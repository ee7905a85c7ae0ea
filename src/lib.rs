//! # memory-pairs
//!
//! Engine for a pairs-matching ("memory") card game.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The engine never renders. It emits
//!    `EngineEvent`s to a `Presenter` and works with opaque card indices.
//!
//! 2. **Explicit Time**: Pulse and commit effects are queued on a
//!    scheduler with cancellable handles. The host advances the clock.
//!
//! 3. **Races Are Not Errors**: Double clicks and picks during an
//!    evaluation are ignored. Only bad configuration and out-of-range card
//!    references are errors.
//!
//! ## Modules
//!
//! - `core`: Ids, configuration, errors, RNG, session and selection state
//! - `cards`: Card faces, instances and the deck provider
//! - `events`: Outbound events and the presenter trait
//! - `schedule`: Deferred effects and the scheduler
//! - `engine`: The game engine

pub mod core;
pub mod cards;
pub mod events;
pub mod schedule;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    DeckConfig, EngineConfig, EngineError,
    FaceId, InstanceIndex,
    GameRng, GameRngState,
    GameSession, Selection,
};

pub use crate::cards::{CardFace, CardInstance, CardState, DeckProvider};

pub use crate::events::{EngineEvent, EventLog, Presenter, PulseKind, TrayAnchor};

pub use crate::schedule::{Deferred, DeferredEffect, Scheduler, TimerHandle};

pub use crate::engine::{MemoryGame, RejectReason, SelectOutcome};
