//! Language identification for submitted text
//!
//! Wraps whatlang's statistical detector and maps its ISO 639-3 output to
//! the two-letter codes the rest of the crate works with.

pub mod mock;

pub use mock::MockLanguageDetector;

use crate::models::DetectedLanguage;
use crate::{Error, Result};

pub trait LanguageDetectionService: Send + Sync {
    fn detect(&self, text: &str) -> Result<DetectedLanguage>;
}

pub struct WhatlangDetector;

impl WhatlangDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WhatlangDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetectionService for WhatlangDetector {
    fn detect(&self, text: &str) -> Result<DetectedLanguage> {
        let info = whatlang::detect(text)
            .ok_or_else(|| Error::LanguageDetection("no language detected".to_string()))?;

        let code_639_3 = info.lang().code();

        // Prefer the two-letter code; a few of whatlang's languages have no
        // 639-1 assignment and keep their three-letter code.
        let (code, name) = match isolang::Language::from_639_3(code_639_3) {
            Some(lang) => (
                lang.to_639_1().unwrap_or(code_639_3).to_string(),
                lang.to_name().to_string(),
            ),
            None => (code_639_3.to_string(), info.lang().eng_name().to_string()),
        };

        Ok(DetectedLanguage { code, name })
    }
}
