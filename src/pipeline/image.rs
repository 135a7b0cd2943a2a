use crate::ai::ImageGenerationService;
use crate::models::GeneratedImage;
use crate::{Error, Result};
use image::ImageFormat;
use std::io::Cursor;
use tracing::info;

/// Coordinates prompt validation, image generation, and PNG normalisation.
pub struct ImagePipeline {
    generator: Box<dyn ImageGenerationService>,
}

impl ImagePipeline {
    pub fn new(generator: Box<dyn ImageGenerationService>) -> Self {
        Self { generator }
    }

    /// Generate an image for the prompt. The prompt is forwarded verbatim;
    /// trimming is only used to decide whether there is a prompt at all.
    pub async fn generate(&self, prompt: &str) -> Result<GeneratedImage> {
        if prompt.trim().is_empty() {
            return Err(Error::EmptyPrompt);
        }

        info!("Generating image for prompt ({} chars)", prompt.len());
        let bytes = self.generator.generate_image(prompt).await?;
        info!("Received image ({} bytes)", bytes.len());

        let png = to_png(&bytes)?;

        Ok(GeneratedImage { png })
    }
}

/// PNG payloads pass through untouched after a decode check; anything else
/// the image crate can read gets re-encoded as PNG.
fn to_png(bytes: &[u8]) -> Result<Vec<u8>> {
    if matches!(image::guess_format(bytes), Ok(ImageFormat::Png)) {
        image::load_from_memory(bytes)?;
        return Ok(bytes.to_vec());
    }

    let decoded = image::load_from_memory(bytes)?;
    let mut out = Cursor::new(Vec::new());
    decoded.write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}
