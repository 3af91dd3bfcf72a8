//! Bhasha Translator - multi-provider translation fallback pipeline
//!
//! This library produces a best-effort localized string by trying several
//! independent translation providers in a fixed priority order, with
//! concurrent batch and structure-preserving helpers on top.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod cli;
pub mod core;
pub mod processors;

// Re-export key types for convenience
pub use self::core::{
    config::PipelineConfig,
    errors::TranslationError,
    models::{TranslationRequest, DEFAULT_TARGET_LANG},
    pipeline::{FallbackTranslator, UNTRANSLATED_PREFIX},
    providers::TranslationProvider,
};

pub use self::processors::structured::StructuredTranslator;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
