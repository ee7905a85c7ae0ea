//! Deck provider: the source of distinct card faces.
//!
//! Pure data: listing faces is deterministic and has no side effects.

use crate::core::{DeckConfig, EngineError, FaceId};

use super::definition::CardFace;

/// Supplies the distinct faces a game deck is built from.
///
/// ## Example
///
/// ```
/// use memory_pairs::cards::DeckProvider;
/// use memory_pairs::core::DeckConfig;
///
/// let provider = DeckProvider::new(DeckConfig::default()).unwrap();
/// let faces = provider.list_faces();
///
/// assert_eq!(faces.len(), 16);
/// assert_eq!(faces[2].asset_ref, "/img/fruits/03.jpg");
/// ```
#[derive(Clone, Debug, Default)]
pub struct DeckProvider {
    config: DeckConfig,
}

impl DeckProvider {
    /// Create a provider, rejecting configs with no faces.
    pub fn new(config: DeckConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Number of distinct faces this provider lists.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.config.face_count as usize
    }

    /// Faces `1..=face_count` in id order.
    #[must_use]
    pub fn list_faces(&self) -> Vec<CardFace> {
        (1..=self.config.face_count)
            .map(|id| CardFace::new(FaceId::new(id), self.asset_ref(id)))
            .collect()
    }

    // Ids below 10 get a leading zero; larger ids are written as-is.
    fn asset_ref(&self, id: u32) -> String {
        format!(
            "{}{:02}{}",
            self.config.base_asset_path, id, self.config.extension
        )
    }
}
