//! Core data models for translation

use serde::{Deserialize, Serialize};

/// Default target language code (Bengali)
pub const DEFAULT_TARGET_LANG: &str = "bn";

/// A single translation request
///
/// Requests are created per call, consumed immediately and discarded;
/// nothing is cached or persisted between calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Text to translate; may be empty, in which case the pipeline
    /// returns it unchanged without contacting any provider
    pub text: String,
    /// ISO-639-1-like target language code, e.g. "bn" or "en"
    pub target_lang: String,
}

impl TranslationRequest {
    /// Create a request targeting the default language
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target_lang: DEFAULT_TARGET_LANG.to_string(),
        }
    }

    /// Override the target language
    pub fn with_target_lang(mut self, target_lang: impl Into<String>) -> Self {
        self.target_lang = target_lang.into();
        self
    }
}
