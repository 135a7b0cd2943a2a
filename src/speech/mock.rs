use super::SpeechService;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockSpeechClient {
    responses: Arc<Mutex<Vec<Vec<u8>>>>,
    requested_langs: Arc<Mutex<Vec<String>>>,
    call_count: Arc<Mutex<usize>>,
    unsupported: Arc<Mutex<bool>>,
    fail: Arc<Mutex<bool>>,
}

impl MockSpeechClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requested_langs: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
            unsupported: Arc::new(Mutex::new(false)),
            fail: Arc::new(Mutex::new(false)),
        }
    }

    pub fn with_audio_response(self, response: Vec<u8>) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    pub fn with_unsupported_language(self) -> Self {
        *self.unsupported.lock().unwrap() = true;
        self
    }

    pub fn with_failure(self) -> Self {
        *self.fail.lock().unwrap() = true;
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn get_requested_langs(&self) -> Vec<String> {
        self.requested_langs.lock().unwrap().clone()
    }
}

impl Default for MockSpeechClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechService for MockSpeechClient {
    async fn synthesize(&self, _text: &str, lang: &str) -> Result<Vec<u8>> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;
        self.requested_langs.lock().unwrap().push(lang.to_string());

        if *self.unsupported.lock().unwrap() {
            return Err(Error::UnsupportedSpeechLanguage(lang.to_string()));
        }
        if *self.fail.lock().unwrap() {
            return Err(Error::Speech("mock speech failure".to_string()));
        }

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // ID3v2 header followed by a sliver of frame data
            Ok(vec![0x49, 0x44, 0x33, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00])
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}
