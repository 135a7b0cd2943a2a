//! Data models and structures
//!
//! Defines the configuration plus the request options and derived results
//! shared between the pipelines and the web layer.

use serde::{Deserialize, Serialize};

/// Requested summary verbosity. The directive text is embedded verbatim in
/// the summarisation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummaryLength {
    Brief,
    Medium,
    Detailed,
}

impl SummaryLength {
    pub const ALL: [SummaryLength; 3] = [
        SummaryLength::Brief,
        SummaryLength::Medium,
        SummaryLength::Detailed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SummaryLength::Brief => "Brief",
            SummaryLength::Medium => "Medium",
            SummaryLength::Detailed => "Detailed",
        }
    }

    pub fn directive(&self) -> &'static str {
        match self {
            SummaryLength::Brief => "in 2-3 sentences",
            SummaryLength::Medium => "in about 5 sentences",
            SummaryLength::Detailed => "in a detailed paragraph",
        }
    }
}

impl Default for SummaryLength {
    fn default() -> Self {
        SummaryLength::Medium
    }
}

/// Language the summary should be translated into, chosen independently of
/// the detected source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetLanguage {
    #[serde(rename = "Same as input")]
    SameAsInput,
    English,
    Hindi,
    Spanish,
    French,
    German,
    Malayalam,
    Kannada,
    Tamil,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 9] = [
        TargetLanguage::SameAsInput,
        TargetLanguage::English,
        TargetLanguage::Hindi,
        TargetLanguage::Spanish,
        TargetLanguage::French,
        TargetLanguage::German,
        TargetLanguage::Malayalam,
        TargetLanguage::Kannada,
        TargetLanguage::Tamil,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TargetLanguage::SameAsInput => "Same as input",
            TargetLanguage::English => "English",
            TargetLanguage::Hindi => "Hindi",
            TargetLanguage::Spanish => "Spanish",
            TargetLanguage::French => "French",
            TargetLanguage::German => "German",
            TargetLanguage::Malayalam => "Malayalam",
            TargetLanguage::Kannada => "Kannada",
            TargetLanguage::Tamil => "Tamil",
        }
    }

    /// Language name a translation call should target, or `None` when the
    /// summary stays in the input language.
    pub fn translation_target(&self) -> Option<&'static str> {
        match self {
            TargetLanguage::SameAsInput => None,
            other => Some(other.label()),
        }
    }

    /// Fixed speech-synthesis code table for the selectable languages.
    pub fn speech_code(&self) -> Option<&'static str> {
        match self {
            TargetLanguage::SameAsInput => None,
            TargetLanguage::English => Some("en"),
            TargetLanguage::Hindi => Some("hi"),
            TargetLanguage::Spanish => Some("es"),
            TargetLanguage::French => Some("fr"),
            TargetLanguage::German => Some("de"),
            TargetLanguage::Malayalam => Some("ml"),
            TargetLanguage::Kannada => Some("kn"),
            TargetLanguage::Tamil => Some("ta"),
        }
    }
}

impl Default for TargetLanguage {
    fn default() -> Self {
        TargetLanguage::SameAsInput
    }
}

/// Outcome of language identification on the raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedLanguage {
    /// ISO-639-1 code where one exists, otherwise the ISO-639-3 code.
    pub code: String,
    /// English display name.
    pub name: String,
}

/// Word counts and compression ratio derived from the original text and the
/// final summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    pub original_words: usize,
    pub summary_words: usize,
    pub compression_pct: f64,
}

impl SummaryStats {
    pub fn compute(original: &str, summary: &str) -> Self {
        let original_words = word_count(original);
        let summary_words = word_count(summary);
        // Zero-length originals must not fault the ratio.
        let compression_pct = if original_words == 0 {
            0.0
        } else {
            round2(summary_words as f64 / original_words as f64 * 100.0)
        };

        Self {
            original_words,
            summary_words,
            compression_pct,
        }
    }
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Everything the summariser page renders: detected language, the working
/// summary after optional translation, and the derived statistics.
#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub detected: DetectedLanguage,
    pub target: TargetLanguage,
    pub summary: String,
    pub stats: SummaryStats,
}

impl SummaryReport {
    /// Speech-synthesis code: the target's table entry when one exists,
    /// otherwise the first two characters of the detected code. The fallback
    /// is imprecise for three-letter and regioned codes; the speech layer
    /// validates it before calling out.
    pub fn speech_lang(&self) -> String {
        match self.target.speech_code() {
            Some(code) => code.to_string(),
            None => self.detected.code.chars().take(2).collect(),
        }
    }
}

/// PNG bytes ready for inline rendering.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub png: Vec<u8>,
}

impl GeneratedImage {
    pub fn data_uri(&self) -> String {
        use base64::Engine as _;
        format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&self.png)
        )
    }
}

/// MP3 bytes ready for inline playback, tagged with the synthesis language.
#[derive(Debug, Clone)]
pub struct AudioClip {
    pub lang_code: String,
    pub mp3: Vec<u8>,
}

impl AudioClip {
    pub fn data_uri(&self) -> String {
        use base64::Engine as _;
        format!(
            "data:audio/mp3;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&self.mp3)
        )
    }
}

pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash-preview-05-20";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.0-flash-preview-image-generation";

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub text_model: String,
    pub image_model: String,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            api_key: std::env::var("GOOGLE_API_KEY")
                .map_err(|_| crate::Error::Config("GOOGLE_API_KEY not set".to_string()))?,
            text_model: std::env::var("GEMINI_TEXT_MODEL")
                .unwrap_or_else(|_| DEFAULT_TEXT_MODEL.to_string()),
            image_model: std::env::var("GEMINI_IMAGE_MODEL")
                .unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string()),
        })
    }
}
