//! Fallback orchestrator: tries providers in fixed priority order
//!
//! The orchestrator never returns an error and never panics. Per-provider
//! failures are logged and the chain advances; when every provider fails,
//! the original text comes back prefixed with [`UNTRANSLATED_PREFIX`] so
//! callers can tell translated output from untranslated fallback.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::core::config::PipelineConfig;
use crate::core::errors::Result;
use crate::core::models::TranslationRequest;
use crate::core::providers::{
    GoogleWebProvider, LibreTranslateProvider, LingvaProvider, MyMemoryProvider,
    TranslationProvider,
};

/// Marker prepended to the original text when every provider fails
pub const UNTRANSLATED_PREFIX: &str = "[untranslated] ";

/// Fallback width used when a translator is built without a config
const DEFAULT_FAN_OUT: usize = 8;

/// Multi-provider translator with sequential fallback
#[derive(Debug, Clone)]
pub struct FallbackTranslator {
    providers: Arc<Vec<Box<dyn TranslationProvider>>>,
    semaphore: Arc<Semaphore>,
    default_target: String,
}

impl FallbackTranslator {
    /// Build the fixed provider chain from configuration
    ///
    /// Chain order: Google web, Lingva, MyMemory, LibreTranslate. Every
    /// provider shares one HTTP client whose timeout bounds each attempt,
    /// so a hung provider fails its slot and the chain advances.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;

        let timeout = Duration::from_millis(config.timeout_ms);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .pool_max_idle_per_host(10)
            .build()?;

        let providers: Vec<Box<dyn TranslationProvider>> = vec![
            Box::new(GoogleWebProvider::new(
                client.clone(),
                config.google_endpoint.clone(),
                config.source_lang.clone(),
            )),
            Box::new(LingvaProvider::new(
                client.clone(),
                config.lingva_endpoint.clone(),
                config.source_lang.clone(),
            )),
            Box::new(MyMemoryProvider::new(
                client.clone(),
                config.mymemory_endpoint.clone(),
                config.source_lang.clone(),
            )),
            Box::new(LibreTranslateProvider::new(
                client,
                config.libretranslate_endpoint.clone(),
                config.source_lang.clone(),
            )),
        ];

        Ok(Self {
            providers: Arc::new(providers),
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
            default_target: config.default_target_lang,
        })
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        let config = PipelineConfig::from_env()?;
        Self::new(config)
    }

    /// Build a translator over an explicit provider chain
    ///
    /// Intended for tests and embedders that need a different chain; the
    /// default constructor keeps the fixed priority order.
    pub fn with_providers(providers: Vec<Box<dyn TranslationProvider>>) -> Self {
        Self {
            providers: Arc::new(providers),
            semaphore: Arc::new(Semaphore::new(DEFAULT_FAN_OUT)),
            default_target: crate::core::models::DEFAULT_TARGET_LANG.to_string(),
        }
    }

    /// Translate one text, trying providers in priority order
    ///
    /// Empty or whitespace-only input is returned unchanged without any
    /// provider call. A success whose payload is empty counts as a failure.
    pub async fn translate(&self, text: &str, target_lang: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        for provider in self.providers.iter() {
            match provider.translate(text, target_lang).await {
                Ok(translation) if !translation.trim().is_empty() => {
                    debug!(
                        provider = provider.name(),
                        chars = text.len(),
                        "translation succeeded"
                    );
                    return translation;
                }
                Ok(_) => {
                    warn!(
                        provider = provider.name(),
                        "empty translation, trying next provider"
                    );
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "provider failed, trying next"
                    );
                }
            }
        }

        warn!(chars = text.len(), "all providers failed, returning marked original");
        format!("{}{}", UNTRANSLATED_PREFIX, text)
    }

    /// Translate one text into the configured default target language
    pub async fn translate_default(&self, text: &str) -> String {
        let target = self.default_target.clone();
        self.translate(text, &target).await
    }

    /// Translate a single request
    pub async fn translate_request(&self, request: &TranslationRequest) -> String {
        self.translate(&request.text, &request.target_lang).await
    }

    /// Translate independent fragments concurrently
    ///
    /// One fallback chain per fragment, all dispatched together and awaited
    /// until every slot settles. Output order matches input order, and one
    /// fragment's total failure never affects the others. Fan-out width is
    /// capped by the configured semaphore.
    pub async fn translate_batch(&self, texts: &[String], target_lang: &str) -> Vec<String> {
        let tasks = texts.iter().map(|text| {
            let semaphore = Arc::clone(&self.semaphore);
            async move {
                // The semaphore is never closed, so acquire only fails if
                // the translator is torn down mid-flight
                let _permit = semaphore.acquire().await.ok();
                self.translate(text, target_lang).await
            }
        });

        join_all(tasks).await
    }

    /// Target language used by [`translate_default`](Self::translate_default)
    pub fn default_target(&self) -> &str {
        &self.default_target
    }
}
