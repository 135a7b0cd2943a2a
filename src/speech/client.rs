use super::SpeechService;
use crate::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://translate.google.com";

pub struct TranslateTtsClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl TranslateTtsClient {
    pub fn new() -> Self {
        Self::new_with_client(reqwest::Client::new())
    }

    pub fn new_with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }
}

impl Default for TranslateTtsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechService for TranslateTtsClient {
    async fn synthesize(&self, text: &str, lang: &str) -> Result<Vec<u8>> {
        if !super::is_supported(lang) {
            return Err(Error::UnsupportedSpeechLanguage(lang.to_string()));
        }

        let url = format!("{}/translate_tts", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", lang),
                ("q", text),
            ])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send translate_tts request: {}", e);
                e
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Speech(format!(
                "translate_tts returned {}: {}",
                status, body
            )));
        }

        Ok(response.bytes().await?.to_vec())
    }
}
