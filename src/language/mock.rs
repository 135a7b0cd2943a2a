use super::LanguageDetectionService;
use crate::models::DetectedLanguage;
use crate::{Error, Result};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockLanguageDetector {
    language: Arc<Mutex<Option<DetectedLanguage>>>,
    call_count: Arc<Mutex<usize>>,
    fail: Arc<Mutex<bool>>,
}

impl MockLanguageDetector {
    pub fn new() -> Self {
        Self {
            language: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(0)),
            fail: Arc::new(Mutex::new(false)),
        }
    }

    pub fn with_language(self, code: &str, name: &str) -> Self {
        *self.language.lock().unwrap() = Some(DetectedLanguage {
            code: code.to_string(),
            name: name.to_string(),
        });
        self
    }

    pub fn with_failure(self) -> Self {
        *self.fail.lock().unwrap() = true;
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockLanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetectionService for MockLanguageDetector {
    fn detect(&self, _text: &str) -> Result<DetectedLanguage> {
        *self.call_count.lock().unwrap() += 1;

        if *self.fail.lock().unwrap() {
            return Err(Error::LanguageDetection("no language detected".to_string()));
        }

        Ok(self
            .language
            .lock()
            .unwrap()
            .clone()
            .unwrap_or(DetectedLanguage {
                code: "en".to_string(),
                name: "English".to_string(),
            }))
    }
}
