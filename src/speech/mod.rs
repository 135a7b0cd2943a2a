//! Text-to-speech synthesis for generated summaries
//!
//! Talks to the same unauthenticated translate_tts endpoint the Google
//! Translate web client uses, which returns MP3 audio for short texts.

pub mod client;
pub mod mock;

pub use client::TranslateTtsClient;
pub use mock::MockSpeechClient;

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait SpeechService: Send + Sync {
    async fn synthesize(&self, text: &str, lang: &str) -> Result<Vec<u8>>;
}

/// Language codes the translate_tts endpoint accepts. Mirrors the published
/// Google Translate TTS language list; anything else gets rejected upstream
/// with an opaque error page, so we validate before sending.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "af", "am", "ar", "bg", "bn", "bs", "ca", "cs", "cy", "da", "de", "el", "en", "es", "et", "eu",
    "fi", "fr", "fr-CA", "gl", "gu", "ha", "hi", "hr", "hu", "id", "is", "it", "iw", "ja", "jv",
    "km", "kn", "ko", "la", "lt", "lv", "ml", "mr", "ms", "my", "ne", "nl", "no", "pa", "pl", "pt",
    "pt-PT", "ro", "ru", "si", "sk", "sq", "sr", "su", "sv", "sw", "ta", "te", "th", "tl", "tr",
    "uk", "ur", "vi", "yue", "zh", "zh-CN", "zh-TW",
];

pub fn is_supported(lang: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&lang)
}
