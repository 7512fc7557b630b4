//! Application state shared by every handler.
//!
//! Built once at startup and cloned into each request through axum's
//! `State` extractor. The word lists are immutable after load; the only
//! mutable piece is the gzip cache inside [`AssetCache`].

use std::sync::Arc;
use std::time::Duration;

use diceware_core::WordCollection;

use crate::assets::AssetCache;
use crate::config::ServerConfig;
use crate::error::Result;

// ── Shared state ───────────────────────────────────────────────────

/// Handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loaded dictionaries.
    pub words: Arc<WordCollection>,
    /// Whether requests may ask for the complex dictionary.
    pub extended_enabled: bool,
    /// Response-time floor for `/` and `/gen`. Zero disables padding.
    pub min_response: Duration,
    /// Budget for one generation, measured by the handler.
    pub generation_timeout: Duration,
    /// Compressed static assets.
    pub assets: Arc<AssetCache>,
}

impl AppState {
    /// Build state from already loaded words.
    #[must_use]
    pub fn new(
        words: WordCollection,
        min_response: Duration,
        generation_timeout: Duration,
    ) -> Self {
        let extended_enabled = words.complex().is_some();
        Self {
            words: Arc::new(words),
            extended_enabled,
            min_response,
            generation_timeout,
            assets: Arc::new(AssetCache::new()),
        }
    }

    /// Load the word lists and settings named by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a word list cannot be loaded.
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let words = config.load_words()?;
        Ok(Self::new(
            words,
            config.min_response(),
            config.generation_timeout(),
        ))
    }

    /// Number of words in the simple list.
    #[must_use]
    pub fn simple_word_count(&self) -> usize {
        self.words.simple_count()
    }

    /// Number of words in the complex list, zero when it is not loaded.
    #[must_use]
    pub fn extended_word_count(&self) -> usize {
        self.words.complex_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diceware_core::dictionary::embedded;

    #[test]
    fn extended_follows_loaded_words() {
        let plain = AppState::new(
            embedded::collection(false).unwrap(),
            Duration::ZERO,
            Duration::from_secs(2),
        );
        assert!(!plain.extended_enabled);
        assert_eq!(plain.extended_word_count(), 0);

        let extended = AppState::new(
            embedded::collection(true).unwrap(),
            Duration::ZERO,
            Duration::from_secs(2),
        );
        assert!(extended.extended_enabled);
        assert!(extended.extended_word_count() > extended.simple_word_count());
    }

    #[test]
    fn from_config_applies_durations() {
        let config = ServerConfig {
            min_response_ms: 5,
            generation_timeout_ms: 750,
            ..ServerConfig::default()
        };
        let state = AppState::from_config(&config).unwrap();
        assert_eq!(state.min_response, Duration::from_millis(5));
        assert_eq!(state.generation_timeout, Duration::from_millis(750));
        assert!(!state.extended_enabled);
    }
}
