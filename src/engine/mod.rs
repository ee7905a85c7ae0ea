//! Game engine: turn state machine, scoring and end-of-game detection.
//!
//! ## Turn Flow
//!
//! 1. `select_card` reveals a card and adds it to the selection
//! 2. The second pick is compared with the first; the move counter
//!    increments at once and the evaluation is deferred:
//!    - short tier: match / no-match pulse
//!    - long tier: solve and collect the pair (then check for game end),
//!      or turn both cards face-down again
//! 3. Picks made while a pair is pending are ignored
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use memory_pairs::cards::DeckProvider;
//! use memory_pairs::core::{DeckConfig, EngineConfig, InstanceIndex};
//! use memory_pairs::engine::{MemoryGame, SelectOutcome};
//!
//! let provider = DeckProvider::new(DeckConfig::default().with_face_count(2)).unwrap();
//! let mut game = MemoryGame::recording(EngineConfig::default().without_shuffle()).unwrap();
//! game.start_with_provider(&provider).unwrap();
//!
//! // Unshuffled deck: [1, 2, 1, 2]
//! game.select_card(InstanceIndex::new(0)).unwrap();
//! let outcome = game.select_card(InstanceIndex::new(2)).unwrap();
//! assert_eq!(outcome, SelectOutcome::Matched);
//!
//! game.advance(Duration::from_millis(1000));
//! assert!(game.card(InstanceIndex::new(0)).unwrap().is_solved());
//! ```

mod game;
mod outcome;

pub use game::MemoryGame;
pub use outcome::{RejectReason, SelectOutcome};
