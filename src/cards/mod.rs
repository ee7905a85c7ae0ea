//! Card system: faces, instances, and the deck provider.
//!
//! ## Key Types
//!
//! - `CardFace`: a distinct identity with its asset reference
//! - `CardInstance`: one positioned card and its `CardState`
//! - `DeckProvider`: lists the faces a deck is built from

pub mod definition;
pub mod instance;
pub mod provider;

pub use definition::CardFace;
pub use instance::{CardInstance, CardState};
pub use provider::DeckProvider;
