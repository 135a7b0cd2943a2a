//! Gemini Studio - paired web tools built on Gemini's generateContent API
//!
//! Serves two small form-driven apps: a creative image generator that renders
//! model output inline as PNG data URIs, and a multilingual summariser with
//! translation, summary statistics, and spoken-audio playback.

pub mod ai;
pub mod error;
pub mod language;
pub mod models;
pub mod pipeline;
pub mod prompts;
pub mod speech;
pub mod web;

pub use error::{Error, Result};
