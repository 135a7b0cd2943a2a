//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Gemini API error: {0}")]
    Provider(String),

    #[error("no image data in the response")]
    NoImageData,

    #[error("empty prompt")]
    EmptyPrompt,

    #[error("language detection failed: {0}")]
    LanguageDetection(String),

    #[error("unsupported speech language: {0}")]
    UnsupportedSpeechLanguage(String),

    #[error("speech synthesis error: {0}")]
    Speech(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
