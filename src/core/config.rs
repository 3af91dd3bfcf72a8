//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::models::DEFAULT_TARGET_LANG;

/// Configuration for the fallback translation pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Target language used when the caller does not specify one
    pub default_target_lang: String,
    /// Source language passed to providers; "auto" lets providers detect it
    pub source_lang: String,
    /// Per-request timeout applied to every provider call
    pub timeout_ms: u64,
    /// Maximum number of fragments translated concurrently by the batch
    /// and structured helpers
    pub max_concurrent: usize,
    /// Google web translation endpoint
    pub google_endpoint: String,
    /// Lingva instance base URL
    pub lingva_endpoint: String,
    /// MyMemory query endpoint
    pub mymemory_endpoint: String,
    /// LibreTranslate instance base URL
    pub libretranslate_endpoint: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            default_target_lang: DEFAULT_TARGET_LANG.to_string(),
            source_lang: "auto".to_string(),
            timeout_ms: 10_000,
            max_concurrent: 8,
            google_endpoint: "https://translate.googleapis.com/translate_a/single".to_string(),
            lingva_endpoint: "https://lingva.ml".to_string(),
            mymemory_endpoint: "https://api.mymemory.translated.net/get".to_string(),
            libretranslate_endpoint: "https://libretranslate.com".to_string(),
        }
    }
}

impl PipelineConfig {
    /// Load configuration from environment variables, falling back to
    /// the built-in defaults for anything unset
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let default_target_lang = std::env::var("BHASHA_TARGET_LANG")
            .unwrap_or(defaults.default_target_lang);

        let source_lang = std::env::var("BHASHA_SOURCE_LANG")
            .unwrap_or(defaults.source_lang);

        let timeout_ms = std::env::var("REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| defaults.timeout_ms.to_string())
            .parse::<u64>()?;

        let max_concurrent = std::env::var("MAX_CONCURRENT")
            .unwrap_or_else(|_| defaults.max_concurrent.to_string())
            .parse::<usize>()?;

        let google_endpoint = std::env::var("GOOGLE_TRANSLATE_ENDPOINT")
            .unwrap_or(defaults.google_endpoint);

        let lingva_endpoint = std::env::var("LINGVA_ENDPOINT")
            .unwrap_or(defaults.lingva_endpoint);

        let mymemory_endpoint = std::env::var("MYMEMORY_ENDPOINT")
            .unwrap_or(defaults.mymemory_endpoint);

        let libretranslate_endpoint = std::env::var("LIBRETRANSLATE_ENDPOINT")
            .unwrap_or(defaults.libretranslate_endpoint);

        Ok(Self {
            default_target_lang,
            source_lang,
            timeout_ms,
            max_concurrent,
            google_endpoint,
            lingva_endpoint,
            mymemory_endpoint,
            libretranslate_endpoint,
        })
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.default_target_lang.trim().is_empty() {
            return Err(anyhow::anyhow!("default target language is required"));
        }

        if self.source_lang.trim().is_empty() {
            return Err(anyhow::anyhow!("source language is required"));
        }

        if self.timeout_ms == 0 {
            return Err(anyhow::anyhow!("timeout_ms must be greater than 0"));
        }

        if self.max_concurrent == 0 {
            return Err(anyhow::anyhow!("max_concurrent must be greater than 0"));
        }

        for (name, endpoint) in [
            ("google", &self.google_endpoint),
            ("lingva", &self.lingva_endpoint),
            ("mymemory", &self.mymemory_endpoint),
            ("libretranslate", &self.libretranslate_endpoint),
        ] {
            if endpoint.trim().is_empty() {
                return Err(anyhow::anyhow!("{} endpoint is required", name));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_target_lang, "bn");
        assert_eq!(config.source_lang, "auto");
    }

    #[test]
    fn test_validation_rejects_zero_concurrency() {
        let config = PipelineConfig {
            max_concurrent: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_endpoint() {
        let config = PipelineConfig {
            lingva_endpoint: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let config = PipelineConfig {
            timeout_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
