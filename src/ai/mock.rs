use super::{ImageGenerationService, TextGenerationService};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockTextClient {
    responses: Arc<Mutex<Vec<String>>>,
    received_prompts: Arc<Mutex<Vec<String>>>,
    call_count: Arc<Mutex<usize>>,
    fail: Arc<Mutex<bool>>,
}

impl MockTextClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            received_prompts: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
            fail: Arc::new(Mutex::new(false)),
        }
    }

    pub fn with_response(self, response: String) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    pub fn with_failure(self) -> Self {
        *self.fail.lock().unwrap() = true;
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn get_received_prompts(&self) -> Vec<String> {
        self.received_prompts.lock().unwrap().clone()
    }
}

impl Default for MockTextClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerationService for MockTextClient {
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;
        self.received_prompts
            .lock()
            .unwrap()
            .push(prompt.to_string());

        if *self.fail.lock().unwrap() {
            return Err(Error::Provider("mock text generation failure".to_string()));
        }

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok("A mock summary.".to_string())
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

#[derive(Clone)]
pub struct MockImageClient {
    responses: Arc<Mutex<Vec<Vec<u8>>>>,
    received_prompts: Arc<Mutex<Vec<String>>>,
    call_count: Arc<Mutex<usize>>,
    no_image_data: Arc<Mutex<bool>>,
    fail: Arc<Mutex<bool>>,
}

impl MockImageClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            received_prompts: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
            no_image_data: Arc::new(Mutex::new(false)),
            fail: Arc::new(Mutex::new(false)),
        }
    }

    pub fn with_image_response(self, response: Vec<u8>) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    /// Simulate a text-only model reply that carries no image bytes.
    pub fn with_no_image_data(self) -> Self {
        *self.no_image_data.lock().unwrap() = true;
        self
    }

    pub fn with_failure(self) -> Self {
        *self.fail.lock().unwrap() = true;
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn get_received_prompts(&self) -> Vec<String> {
        self.received_prompts.lock().unwrap().clone()
    }
}

impl Default for MockImageClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerationService for MockImageClient {
    async fn generate_image(&self, prompt: &str) -> Result<Vec<u8>> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;
        self.received_prompts
            .lock()
            .unwrap()
            .push(prompt.to_string());

        if *self.no_image_data.lock().unwrap() {
            return Err(Error::NoImageData);
        }
        if *self.fail.lock().unwrap() {
            return Err(Error::Provider("mock image generation failure".to_string()));
        }

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Return a tiny valid PNG as default
            Ok(vec![
                0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // PNG signature
                0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR chunk
                0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // 1x1 pixel
                0x08, 0x02, 0x00, 0x00, 0x00, 0x90, 0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49,
                0x44, 0x41, // IDAT chunk
                0x54, 0x08, 0x99, 0x63, 0xF8, 0xCF, 0xC0, 0x00, 0x00, 0x03, 0x01, 0x01, 0x00, 0x9C,
                0xE3, 0xBF, 0x59, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, // IEND chunk
                0x44, 0xAE, 0x42, 0x60, 0x82,
            ])
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_text_client_cycles_responses() {
        let client = MockTextClient::new()
            .with_response("First summary".to_string())
            .with_response("Second summary".to_string());

        assert_eq!(client.generate_text("a").await.unwrap(), "First summary");
        assert_eq!(client.generate_text("b").await.unwrap(), "Second summary");
        // Should cycle back
        assert_eq!(client.generate_text("c").await.unwrap(), "First summary");
    }

    #[tokio::test]
    async fn test_mock_text_client_records_prompts() {
        let client = MockTextClient::new();

        client.generate_text("first prompt").await.unwrap();
        client.generate_text("second prompt").await.unwrap();

        assert_eq!(
            client.get_received_prompts(),
            vec!["first prompt".to_string(), "second prompt".to_string()]
        );
        assert_eq!(client.get_call_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_image_client_default_is_valid_png() {
        let client = MockImageClient::new();
        let bytes = client.generate_image("test").await.unwrap();
        assert_eq!(&bytes[..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);

        // Callers re-decode these bytes, so the canned payload must survive
        // a full decode, not just carry the PNG signature.
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (1, 1));
    }

    #[tokio::test]
    async fn test_mock_image_client_no_image_data() {
        let client = MockImageClient::new().with_no_image_data();
        let err = client.generate_image("test").await.unwrap_err();
        assert!(matches!(err, Error::NoImageData));
        assert_eq!(client.get_call_count(), 1);
    }
}
