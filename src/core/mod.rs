//! Core engine types: ids, configuration, errors, RNG and session state.
//!
//! These are the building blocks the deck provider, scheduler and engine
//! share. Nothing here knows about presentation.

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod state;

pub use config::{DeckConfig, EngineConfig};
pub use error::EngineError;
pub use ids::{FaceId, InstanceIndex};
pub use rng::{GameRng, GameRngState};
pub use state::{GameSession, Selection};
