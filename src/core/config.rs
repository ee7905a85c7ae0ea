//! Deck and engine configuration.
//!
//! - `DeckConfig`: where face assets live and how many faces a deck uses
//! - `EngineConfig`: deferred-effect delays, shuffle switch and seed
//!
//! Both deserialize with defaults for missing fields, so a host can load a
//! partial JSON/TOML document and get the reference game for the rest.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Default number of distinct faces in a deck.
pub const DEFAULT_FACE_COUNT: u32 = 16;

/// Default short tier: match/no-match pulse.
pub const DEFAULT_SHORT_DELAY_MS: u64 = 300;

/// Default long tier: authoritative Solved / Hidden transition.
pub const DEFAULT_LONG_DELAY_MS: u64 = 1000;

/// Default time a pulse stays up before it is cleared.
pub const DEFAULT_PULSE_HOLD_MS: u64 = 1000;

/// Configuration for the deck provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Directory or URL prefix for face images.
    pub base_asset_path: String,

    /// File extension appended after the zero-padded id.
    pub extension: String,

    /// Number of distinct faces (the deck holds twice as many cards).
    pub face_count: u32,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            base_asset_path: "/img/fruits/".to_string(),
            extension: ".jpg".to_string(),
            face_count: DEFAULT_FACE_COUNT,
        }
    }
}

impl DeckConfig {
    /// Create a deck config with the default asset layout.
    pub fn new(base_asset_path: impl Into<String>, face_count: u32) -> Self {
        Self {
            base_asset_path: base_asset_path.into(),
            face_count,
            ..Self::default()
        }
    }

    /// Set the face count.
    #[must_use]
    pub fn with_face_count(mut self, face_count: u32) -> Self {
        self.face_count = face_count;
        self
    }

    /// Set the asset file extension (including the dot).
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Check the config can produce a deck.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.face_count < 1 {
            return Err(EngineError::config("face count must be at least 1"));
        }
        Ok(())
    }
}

/// Configuration for the game engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Delay before the match/no-match pulse (milliseconds).
    pub short_delay_ms: u64,

    /// Delay before cards are solved or hidden again (milliseconds).
    /// Must be longer than `short_delay_ms`.
    pub long_delay_ms: u64,

    /// How long a pulse stays visible before it is cleared (milliseconds).
    pub pulse_hold_ms: u64,

    /// Shuffle the deck on `start_game`. Disabled decks keep the order
    /// faces were supplied in, followed by the same faces again.
    pub shuffle: bool,

    /// Seed for the shuffle RNG. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            short_delay_ms: DEFAULT_SHORT_DELAY_MS,
            long_delay_ms: DEFAULT_LONG_DELAY_MS,
            pulse_hold_ms: DEFAULT_PULSE_HOLD_MS,
            shuffle: true,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Set a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Keep the supplied deck order.
    #[must_use]
    pub fn without_shuffle(mut self) -> Self {
        self.shuffle = false;
        self
    }

    /// Set both delay tiers.
    #[must_use]
    pub fn with_delays(mut self, short_ms: u64, long_ms: u64) -> Self {
        self.short_delay_ms = short_ms;
        self.long_delay_ms = long_ms;
        self
    }

    /// Set the pulse hold time.
    #[must_use]
    pub fn with_pulse_hold(mut self, hold_ms: u64) -> Self {
        self.pulse_hold_ms = hold_ms;
        self
    }

    #[must_use]
    pub fn short_delay(&self) -> Duration {
        Duration::from_millis(self.short_delay_ms)
    }

    #[must_use]
    pub fn long_delay(&self) -> Duration {
        Duration::from_millis(self.long_delay_ms)
    }

    #[must_use]
    pub fn pulse_hold(&self) -> Duration {
        Duration::from_millis(self.pulse_hold_ms)
    }

    /// Check the tiers are ordered: a turn's pulse fires before its commit.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.short_delay_ms == 0 {
            return Err(EngineError::config("short delay must be positive"));
        }
        if self.long_delay_ms <= self.short_delay_ms {
            return Err(EngineError::config(format!(
                "long delay ({} ms) must exceed short delay ({} ms)",
                self.long_delay_ms, self.short_delay_ms
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_deck_config() {
        let config = DeckConfig::default();
        assert_eq!(config.base_asset_path, "/img/fruits/");
        assert_eq!(config.face_count, 16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deck_config_zero_faces() {
        let config = DeckConfig::default().with_face_count(0);
        assert!(matches!(
            config.validate(),
            Err(EngineError::Configuration(_))
        ));
    }

    #[test]
    fn test_default_engine_config() {
        let config = EngineConfig::default();
        assert_eq!(config.short_delay(), Duration::from_millis(300));
        assert_eq!(config.long_delay(), Duration::from_millis(1000));
        assert!(config.shuffle);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_engine_config_builder() {
        let config = EngineConfig::default()
            .with_seed(9)
            .without_shuffle()
            .with_delays(50, 200)
            .with_pulse_hold(100);

        assert_eq!(config.seed, Some(9));
        assert!(!config.shuffle);
        assert_eq!(config.short_delay_ms, 50);
        assert_eq!(config.long_delay_ms, 200);
        assert_eq!(config.pulse_hold(), Duration::from_millis(100));
    }

    #[test]
    fn test_engine_config_tier_order() {
        assert!(EngineConfig::default().with_delays(500, 500).validate().is_err());
        assert!(EngineConfig::default().with_delays(800, 300).validate().is_err());
        assert!(EngineConfig::default().with_delays(0, 300).validate().is_err());
    }

    #[test]
    fn test_partial_deserialization() {
        let config: EngineConfig = serde_json::from_str(r#"{"seed": 5}"#).unwrap();
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.long_delay_ms, DEFAULT_LONG_DELAY_MS);

        let deck: DeckConfig = serde_json::from_str(r#"{"face_count": 4}"#).unwrap();
        assert_eq!(deck.face_count, 4);
        assert_eq!(deck.extension, ".jpg");
    }
}
