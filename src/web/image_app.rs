use crate::ai::GeminiImageClient;
use crate::models::Config;
use crate::pipeline::ImagePipeline;
use crate::{web, Error};
use axum::extract::{Form, State};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

const CSS: &str = "\
body {
    background: linear-gradient(135deg, #1e1e2f, #3b0f74);
    color: #ddd;
    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    max-width: 720px;
    margin: 0 auto;
    padding: 2rem 1rem;
}
h1 {
    color: #bb86fc;
    text-align: center;
    margin-bottom: 0.5rem;
}
textarea {
    width: 100%;
    min-height: 140px;
    border-radius: 8px;
    border: 1px solid #a47aff;
    background-color: #2a2a3d;
    color: #ddd;
    padding: 10px;
    font-size: 1rem;
    box-sizing: border-box;
}
.generated-image img {
    max-width: 100%;
    border-radius: 20px;
    box-shadow: 0 12px 30px rgba(117, 81, 255, 0.5);
    border: 2px solid #a47aff;
    display: block;
    margin-left: auto;
    margin-right: auto;
}
footer {
    text-align: center;
    font-size: 0.9rem;
    color: #aaa;
    margin-top: 3rem;
}
.prompt-container {
    margin-bottom: 1rem;
}
.generate-btn {
    background-color: #7b5cff;
    color: white;
    font-weight: bold;
    padding: 10px 20px;
    border-radius: 8px;
    border: none;
    cursor: pointer;
}
.generate-btn:hover {
    background-color: #a47aff;
}
.warning {
    background-color: #4d3b00;
    border: 1px solid #b38f00;
    border-radius: 8px;
    padding: 12px;
    margin-top: 1rem;
}
.error {
    background-color: #4d1010;
    border: 1px solid #b34040;
    border-radius: 8px;
    padding: 12px;
    margin-top: 1rem;
}
";

/// Shared state for the image generator app.
#[derive(Clone)]
pub struct ImageAppState {
    pipeline: Arc<ImagePipeline>,
}

impl ImageAppState {
    pub fn new(pipeline: Arc<ImagePipeline>) -> Self {
        Self { pipeline }
    }

    pub fn from_config(config: &Config) -> Self {
        let client = GeminiImageClient::new(config.api_key.clone(), config.image_model.clone());
        Self::new(Arc::new(ImagePipeline::new(Box::new(client))))
    }
}

pub fn create_router(state: ImageAppState) -> Router {
    Router::new()
        .route("/", get(show_form).post(generate))
        .route("/health", get(web::health))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct ImageForm {
    #[serde(default)]
    prompt: String,
}

async fn show_form() -> Html<String> {
    render_page("", None)
}

async fn generate(
    State(state): State<ImageAppState>,
    Form(form): Form<ImageForm>,
) -> Html<String> {
    let request_id = uuid::Uuid::new_v4();
    info!(
        "[{}] Image generation request ({} chars)",
        request_id,
        form.prompt.len()
    );

    let result = match state.pipeline.generate(&form.prompt).await {
        Ok(image) => {
            info!(
                "[{}] Generated image ({} bytes)",
                request_id,
                image.png.len()
            );
            format!(
                "<div class=\"generated-image\">\n<img src=\"{}\" alt=\"Generated Image\" />\n</div>",
                image.data_uri()
            )
        }
        Err(Error::EmptyPrompt) => {
            "<div class=\"warning\">Please enter a prompt to generate an image.</div>".to_string()
        }
        Err(Error::NoImageData) => {
            error!("[{}] Model response carried no image data", request_id);
            "<div class=\"error\">No image data received from the API.</div>".to_string()
        }
        Err(e) => {
            error!("[{}] Image generation failed: {}", request_id, e);
            format!(
                "<div class=\"error\">Error generating image: {}</div>",
                web::escape_html(&e.to_string())
            )
        }
    };

    render_page(&form.prompt, Some(&result))
}

fn render_page(prompt: &str, result: Option<&str>) -> Html<String> {
    let body = format!(
        "<h1>🎨 Creative Image Generator with Gemini</h1>\n\
         <form method=\"post\" action=\"/\">\n\
         <div class=\"prompt-container\">\n\
         <label for=\"prompt\">Enter your creative image prompt below:</label><br/>\n\
         <textarea id=\"prompt\" name=\"prompt\" placeholder=\"Type something like: 'A futuristic city skyline at sunset, vibrant colors'\">{}</textarea>\n\
         </div>\n\
         <button class=\"generate-btn\" type=\"submit\">Generate Image</button>\n\
         </form>\n\
         {}\n\
         <footer>Powered by Google Gemini API</footer>",
        web::escape_html(prompt),
        result.unwrap_or("")
    );

    Html(web::page("Creative Image Generator", CSS, &body))
}
