//! Structure-preserving translation for markdown-like text
//!
//! Lines are classified before anything is dispatched, so structural
//! markers (headers, bullets, list numbers, rules) never reach a
//! translation provider. Payloads are translated concurrently and the
//! document is reassembled in original line order.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, info};

use crate::core::errors::{Result, TranslationError};
use crate::core::pipeline::FallbackTranslator;

/// ATX header marks with their trailing whitespace
fn header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(#{1,6}\s+)").expect("header pattern"))
}

/// Bullet or numbered-list token with its trailing whitespace
fn bullet_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\s*(?:[-*+]|\d+[.)])\s+)").expect("bullet pattern"))
}

/// A classified line of input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Blank or structural-only line, reproduced verbatim
    Keep(String),
    /// Line with a translatable payload behind an untouched prefix
    Translate {
        /// Structural marks kept verbatim (may be empty for plain text)
        prefix: String,
        /// Text sent through the fallback chain
        payload: String,
    },
}

/// Classify one line; must run before any provider dispatch
fn classify_line(line: &str) -> Segment {
    if line.trim().is_empty() {
        return Segment::Keep(line.to_string());
    }

    // Rules, table separators and bare marks carry no translatable text
    if !line.chars().any(char::is_alphanumeric) {
        return Segment::Keep(line.to_string());
    }

    if let Some(caps) = header_re().captures(line) {
        let prefix = caps[1].to_string();
        let payload = line[prefix.len()..].to_string();
        return Segment::Translate { prefix, payload };
    }

    if let Some(caps) = bullet_re().captures(line) {
        let prefix = caps[1].to_string();
        let payload = line[prefix.len()..].to_string();
        return Segment::Translate { prefix, payload };
    }

    Segment::Translate {
        prefix: String::new(),
        payload: line.to_string(),
    }
}

/// Translator for human-authored structured text
#[derive(Debug, Clone)]
pub struct StructuredTranslator {
    translator: FallbackTranslator,
}

impl StructuredTranslator {
    /// Wrap an existing fallback translator
    pub fn new(translator: FallbackTranslator) -> Self {
        Self { translator }
    }

    /// Create from environment configuration
    pub fn from_env() -> Result<Self> {
        let translator = FallbackTranslator::from_env()?;
        Ok(Self::new(translator))
    }

    /// Translate structured content, preserving markers and line order
    pub async fn translate_content(&self, content: &str, target_lang: &str) -> String {
        let segments: Vec<Segment> = content.split('\n').map(classify_line).collect();

        let payloads: Vec<String> = segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Translate { payload, .. } => Some(payload.clone()),
                Segment::Keep(_) => None,
            })
            .collect();

        let translated = self.translator.translate_batch(&payloads, target_lang).await;
        let mut translated = translated.into_iter();

        let lines: Vec<String> = segments
            .into_iter()
            .map(|segment| match segment {
                Segment::Keep(line) => line,
                Segment::Translate { prefix, payload } => match translated.next() {
                    Some(text) => format!("{}{}", prefix, text),
                    // One batch slot exists per dispatched payload
                    None => format!("{}{}", prefix, payload),
                },
            })
            .collect();

        lines.join("\n")
    }

    /// Translate a single text file, writing the result to `output`
    pub async fn translate_file(
        &self,
        input: &Path,
        output: &Path,
        target_lang: &str,
    ) -> Result<()> {
        debug!("Translating: {}", input.display());

        let content = tokio::fs::read_to_string(input)
            .await
            .map_err(|e| TranslationError::FileError {
                path: input.display().to_string(),
                message: e.to_string(),
            })?;

        let translated = self.translate_content(&content, target_lang).await;

        if let Some(parent) = output.parent() {
            if !parent.exists() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| TranslationError::FileError {
                        path: parent.display().to_string(),
                        message: e.to_string(),
                    })?;
            }
        }

        tokio::fs::write(output, translated)
            .await
            .map_err(|e| TranslationError::FileError {
                path: output.display().to_string(),
                message: e.to_string(),
            })?;

        info!("Translated: {} -> {}", input.display(), output.display());
        Ok(())
    }

    /// Find translatable files in a directory
    pub fn find_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Err(TranslationError::FileError {
                path: dir.display().to_string(),
                message: "Not a directory".to_string(),
            });
        }

        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && self.is_translatable_file(&path) {
                files.push(path);
            }
        }

        Ok(files)
    }

    /// Find translatable files recursively
    pub fn find_files_recursive(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Err(TranslationError::FileError {
                path: dir.display().to_string(),
                message: "Not a directory".to_string(),
            });
        }

        let mut files = Vec::new();
        for entry in walkdir::WalkDir::new(dir)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && self.is_translatable_file(path) {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }

    /// Check for a supported text extension
    fn is_translatable_file(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| {
                let ext = ext.to_string_lossy().to_lowercase();
                ext == "md" || ext == "markdown" || ext == "txt"
            })
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::providers::TranslationProvider;
    use async_trait::async_trait;

    /// Provider that answers every fragment with a fixed string
    #[derive(Debug)]
    struct ConstProvider {
        reply: &'static str,
    }

    #[async_trait]
    impl TranslationProvider for ConstProvider {
        fn name(&self) -> &'static str {
            "const"
        }

        async fn translate(&self, _text: &str, _target_lang: &str) -> Result<String> {
            Ok(self.reply.to_string())
        }
    }

    fn const_translator(reply: &'static str) -> StructuredTranslator {
        StructuredTranslator::new(FallbackTranslator::with_providers(vec![Box::new(
            ConstProvider { reply },
        )]))
    }

    #[test]
    fn test_classify_header() {
        assert_eq!(
            classify_line("## Crop calendar"),
            Segment::Translate {
                prefix: "## ".to_string(),
                payload: "Crop calendar".to_string(),
            }
        );
    }

    #[test]
    fn test_classify_bullets_and_numbers() {
        assert_eq!(
            classify_line("- spray in the morning"),
            Segment::Translate {
                prefix: "- ".to_string(),
                payload: "spray in the morning".to_string(),
            }
        );
        assert_eq!(
            classify_line("  2. apply urea"),
            Segment::Translate {
                prefix: "  2. ".to_string(),
                payload: "apply urea".to_string(),
            }
        );
        assert_eq!(
            classify_line("* use neem oil"),
            Segment::Translate {
                prefix: "* ".to_string(),
                payload: "use neem oil".to_string(),
            }
        );
    }

    #[test]
    fn test_classify_structural_only_lines() {
        assert_eq!(classify_line(""), Segment::Keep(String::new()));
        assert_eq!(classify_line("   "), Segment::Keep("   ".to_string()));
        assert_eq!(classify_line("---"), Segment::Keep("---".to_string()));
        assert_eq!(classify_line("***"), Segment::Keep("***".to_string()));
    }

    #[test]
    fn test_classify_plain_text() {
        assert_eq!(
            classify_line("Water the seedlings daily."),
            Segment::Translate {
                prefix: String::new(),
                payload: "Water the seedlings daily.".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_markers_preserved_payloads_replaced() {
        let translator = const_translator("X");
        let result = translator
            .translate_content("# Title\n- item one", "bn")
            .await;
        assert_eq!(result, "# X\n- X");
    }

    #[tokio::test]
    async fn test_blank_lines_and_rules_untouched() {
        let translator = const_translator("X");
        let input = "# Heading\n\n---\n\nSome advice\n";
        let result = translator.translate_content(input, "bn").await;
        assert_eq!(result, "# X\n\n---\n\nX\n");
    }

    #[tokio::test]
    async fn test_line_order_preserved() {
        #[derive(Debug)]
        struct UpperProvider;

        #[async_trait]
        impl TranslationProvider for UpperProvider {
            fn name(&self) -> &'static str {
                "upper"
            }

            async fn translate(&self, text: &str, _target_lang: &str) -> Result<String> {
                Ok(text.to_uppercase())
            }
        }

        let translator = StructuredTranslator::new(FallbackTranslator::with_providers(vec![
            Box::new(UpperProvider),
        ]));

        let result = translator
            .translate_content("first\nsecond\nthird", "en")
            .await;
        assert_eq!(result, "FIRST\nSECOND\nTHIRD");
    }

    #[test]
    fn test_is_translatable_file() {
        let translator = const_translator("X");
        assert!(translator.is_translatable_file(Path::new("advice.md")));
        assert!(translator.is_translatable_file(Path::new("advice.TXT")));
        assert!(translator.is_translatable_file(Path::new("advice.markdown")));
        assert!(!translator.is_translatable_file(Path::new("advice.pdf")));
    }
}
