use crate::ai::GeminiTextClient;
use crate::language::WhatlangDetector;
use crate::models::{Config, SummaryLength, SummaryReport, TargetLanguage};
use crate::pipeline::SummaryPipeline;
use crate::speech::TranslateTtsClient;
use crate::{web, Error};
use axum::extract::{Form, State};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info, warn};

const CSS: &str = "\
body {
    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    max-width: 720px;
    margin: 0 auto;
    padding: 2rem 1rem;
    color: #222;
}
h1 {
    text-align: center;
}
textarea {
    width: 100%;
    min-height: 250px;
    border-radius: 8px;
    border: 1px solid #bbb;
    padding: 10px;
    font-size: 1rem;
    box-sizing: border-box;
}
fieldset {
    border: 1px solid #ddd;
    border-radius: 8px;
    margin: 1rem 0;
}
select {
    padding: 6px;
    font-size: 1rem;
}
button {
    background-color: #ff4b4b;
    color: white;
    font-weight: bold;
    padding: 10px 20px;
    border-radius: 8px;
    border: none;
    cursor: pointer;
}
button:hover {
    background-color: #ff6b6b;
}
code {
    background-color: #f0f2f6;
    border-radius: 4px;
    padding: 1px 5px;
}
.info {
    background-color: #e8f0fe;
    border-left: 4px solid #1a73e8;
    border-radius: 4px;
    padding: 12px;
    margin: 1rem 0;
}
.success {
    background-color: #e6f4ea;
    border-left: 4px solid #34a853;
    border-radius: 4px;
    padding: 12px;
    margin: 1rem 0;
}
.warning {
    background-color: #fef7e0;
    border-left: 4px solid #f9ab00;
    border-radius: 4px;
    padding: 12px;
    margin: 1rem 0;
}
.error {
    background-color: #fce8e6;
    border-left: 4px solid #d93025;
    border-radius: 4px;
    padding: 12px;
    margin: 1rem 0;
}
.summary-text {
    white-space: pre-wrap;
}
audio {
    width: 100%;
    margin-top: 0.5rem;
}
";

/// Shared state for the summariser app.
#[derive(Clone)]
pub struct SummaryAppState {
    pipeline: Arc<SummaryPipeline>,
}

impl SummaryAppState {
    pub fn new(pipeline: Arc<SummaryPipeline>) -> Self {
        Self { pipeline }
    }

    pub fn from_config(config: &Config) -> Self {
        let http_client = reqwest::Client::new();
        let text_gen = GeminiTextClient::new_with_client(
            config.api_key.clone(),
            config.text_model.clone(),
            http_client.clone(),
        );
        let speech = TranslateTtsClient::new_with_client(http_client);

        Self::new(Arc::new(SummaryPipeline::new(
            Box::new(text_gen),
            Box::new(WhatlangDetector::new()),
            Box::new(speech),
        )))
    }
}

pub fn create_router(state: SummaryAppState) -> Router {
    Router::new()
        .route("/", get(show_form).post(summarize))
        .route("/health", get(web::health))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct SummaryForm {
    #[serde(default)]
    text: String,
    #[serde(default)]
    length: SummaryLength,
    #[serde(default)]
    target: TargetLanguage,
}

async fn show_form() -> Html<String> {
    render_page("", SummaryLength::default(), TargetLanguage::default(), None)
}

async fn summarize(
    State(state): State<SummaryAppState>,
    Form(form): Form<SummaryForm>,
) -> Html<String> {
    let request_id = uuid::Uuid::new_v4();
    info!(
        "[{}] Summary request ({} chars, {} length, target {})",
        request_id,
        form.text.len(),
        form.length.label(),
        form.target.label()
    );

    let result = match state.pipeline.summarize(&form.text, form.length, form.target).await {
        Ok(report) => {
            info!(
                "[{}] Summary ready ({} -> {} words)",
                request_id, report.stats.original_words, report.stats.summary_words
            );
            render_report(&state, &report, request_id).await
        }
        Err(Error::EmptyPrompt) => {
            "<div class=\"warning\">Please enter some text first.</div>".to_string()
        }
        Err(e) => {
            error!("[{}] Summarisation failed: {}", request_id, e);
            format!(
                "<div class=\"error\">❌ An error occurred: {}</div>",
                web::escape_html(&e.to_string())
            )
        }
    };

    render_page(&form.text, form.length, form.target, Some(&result))
}

/// All result sections for a finished report. Speech synthesis runs last and
/// failures only replace the audio player, never the summary sections.
async fn render_report(
    state: &SummaryAppState,
    report: &SummaryReport,
    request_id: uuid::Uuid,
) -> String {
    use base64::Engine as _;

    let mut sections = String::new();

    sections.push_str(&format!(
        "<div class=\"info\">🔍 Detected Language: <code>{}</code> ({})</div>\n",
        web::escape_html(&report.detected.name),
        web::escape_html(&report.detected.code)
    ));

    let caption = match report.target.translation_target() {
        Some(language) => format!("📄 Translated Summary ({}):", language),
        None => "📄 Summary:".to_string(),
    };
    sections.push_str(&format!("<div class=\"success\">{}</div>\n", caption));
    sections.push_str(&format!(
        "<p class=\"summary-text\">{}</p>\n",
        web::escape_html(&report.summary)
    ));

    sections.push_str("<hr/>\n<h3>📊 Summary Stats</h3>\n");
    sections.push_str(&format!(
        "<p>🔸 Original Length: <code>{}</code> words</p>\n",
        report.stats.original_words
    ));
    sections.push_str(&format!(
        "<p>🔹 Summary Length: <code>{}</code> words</p>\n",
        report.stats.summary_words
    ));
    sections.push_str(&format!(
        "<p>📉 Compression Ratio: <code>{}%</code></p>\n",
        report.stats.compression_pct
    ));

    let b64 = base64::engine::general_purpose::STANDARD.encode(report.summary.as_bytes());
    sections.push_str(&format!(
        "<a href=\"data:file/txt;base64,{}\" download=\"summary.txt\">📥 Download Summary as TXT</a>\n",
        b64
    ));

    sections.push_str("<hr/>\n<h3>🔊 Listen to Summary</h3>\n");
    sections.push_str(&format!(
        "<p>🔈 Using language code for TTS: <code>{}</code></p>\n",
        web::escape_html(&report.speech_lang())
    ));

    match state.pipeline.speak(report).await {
        Ok(clip) => {
            info!(
                "[{}] Synthesised {} bytes of audio ({})",
                request_id,
                clip.mp3.len(),
                clip.lang_code
            );
            sections.push_str(&format!(
                "<audio controls src=\"{}\"></audio>\n",
                clip.data_uri()
            ));
        }
        Err(e @ Error::UnsupportedSpeechLanguage(_)) => {
            warn!("[{}] TTS language rejected: {}", request_id, e);
            sections.push_str(&format!(
                "<div class=\"error\">⚠️ TTS Language Error: {}. Try selecting English or Hindi.</div>\n",
                web::escape_html(&e.to_string())
            ));
        }
        Err(e) => {
            error!("[{}] Audio generation failed: {}", request_id, e);
            sections.push_str(&format!(
                "<div class=\"error\">⚠️ Audio generation failed. Error: {}</div>\n",
                web::escape_html(&e.to_string())
            ));
        }
    }

    sections
}

fn render_page(
    text: &str,
    length: SummaryLength,
    target: TargetLanguage,
    result: Option<&str>,
) -> Html<String> {
    let mut length_radios = String::new();
    for option in SummaryLength::ALL {
        let checked = if option == length { " checked" } else { "" };
        length_radios.push_str(&format!(
            "<label><input type=\"radio\" name=\"length\" value=\"{0}\"{1}> {0}</label>\n",
            option.label(),
            checked
        ));
    }

    let mut target_options = String::new();
    for option in TargetLanguage::ALL {
        let selected = if option == target { " selected" } else { "" };
        target_options.push_str(&format!(
            "<option value=\"{0}\"{1}>{0}</option>\n",
            option.label(),
            selected
        ));
    }

    let body = format!(
        "<h1>🌐 Multilingual Text Summariser using Gemini 2.5</h1>\n\
         <form method=\"post\" action=\"/\">\n\
         <label for=\"text\">✍️ Enter text in any language:</label><br/>\n\
         <textarea id=\"text\" name=\"text\">{}</textarea>\n\
         <fieldset>\n<legend>📏 Choose Summary Length:</legend>\n{}</fieldset>\n\
         <label for=\"target\">🌐 Translate Summary To:</label>\n\
         <select id=\"target\" name=\"target\">\n{}</select>\n\
         <p><button type=\"submit\">🧠 Summarise</button></p>\n\
         </form>\n\
         {}",
        web::escape_html(text),
        length_radios,
        target_options,
        result.unwrap_or("")
    );

    Html(web::page("Multilingual Text Summariser", CSS, &body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MockTextClient;
    use crate::language::MockLanguageDetector;
    use crate::speech::MockSpeechClient;

    fn state_with(
        text_gen: MockTextClient,
        language: MockLanguageDetector,
        speech: MockSpeechClient,
    ) -> SummaryAppState {
        SummaryAppState::new(Arc::new(SummaryPipeline::new(
            Box::new(text_gen),
            Box::new(language),
            Box::new(speech),
        )))
    }

    fn form(text: &str, length: SummaryLength, target: TargetLanguage) -> Form<SummaryForm> {
        Form(SummaryForm {
            text: text.to_string(),
            length,
            target,
        })
    }

    #[tokio::test]
    async fn test_get_renders_form_with_defaults() {
        let Html(page) = show_form().await;
        assert!(page.contains("🌐 Multilingual Text Summariser using Gemini 2.5"));
        assert!(page.contains("value=\"Medium\" checked"));
        assert!(page.contains("<option value=\"Same as input\" selected>"));
        assert!(page.contains("🧠 Summarise"));
    }

    #[tokio::test]
    async fn test_post_renders_all_summary_sections() {
        let state = state_with(
            MockTextClient::new().with_response("A short summary.".to_string()),
            MockLanguageDetector::new().with_language("en", "English"),
            MockSpeechClient::new(),
        );

        let Html(page) = summarize(
            State(state),
            form(
                "The quick brown fox jumps over the lazy dog.",
                SummaryLength::Brief,
                TargetLanguage::SameAsInput,
            ),
        )
        .await;

        assert!(page.contains("🔍 Detected Language: <code>English</code> (en)"));
        assert!(page.contains("📄 Summary:"));
        assert!(page.contains("A short summary."));
        assert!(page.contains("📊 Summary Stats"));
        assert!(page.contains("🔸 Original Length: <code>9</code> words"));
        assert!(page.contains("🔹 Summary Length: <code>3</code> words"));
        assert!(page.contains("data:file/txt;base64,"));
        assert!(page.contains("download=\"summary.txt\""));
        assert!(page.contains("🔈 Using language code for TTS: <code>en</code>"));
        assert!(page.contains("data:audio/mp3;base64,"));
    }

    #[tokio::test]
    async fn test_post_translated_summary_caption_names_language() {
        let state = state_with(
            MockTextClient::new()
                .with_response("An English summary.".to_string())
                .with_response("एक सारांश।".to_string()),
            MockLanguageDetector::new().with_language("en", "English"),
            MockSpeechClient::new(),
        );

        let Html(page) = summarize(
            State(state),
            form(
                "Some input text.",
                SummaryLength::Medium,
                TargetLanguage::Hindi,
            ),
        )
        .await;

        assert!(page.contains("📄 Translated Summary (Hindi):"));
        assert!(page.contains("एक सारांश।"));
        assert!(page.contains("🔈 Using language code for TTS: <code>hi</code>"));
    }

    #[tokio::test]
    async fn test_post_blank_text_warns_without_calls() {
        let text_gen = MockTextClient::new();
        let probe = text_gen.clone();
        let state = state_with(text_gen, MockLanguageDetector::new(), MockSpeechClient::new());

        let Html(page) = summarize(
            State(state),
            form("   ", SummaryLength::Medium, TargetLanguage::SameAsInput),
        )
        .await;

        assert!(page.contains("Please enter some text first."));
        assert_eq!(probe.get_call_count(), 0);
    }

    #[tokio::test]
    async fn test_post_detection_failure_renders_generic_error() {
        let state = state_with(
            MockTextClient::new(),
            MockLanguageDetector::new().with_failure(),
            MockSpeechClient::new(),
        );

        let Html(page) = summarize(
            State(state),
            form(
                "Some input text.",
                SummaryLength::Medium,
                TargetLanguage::SameAsInput,
            ),
        )
        .await;

        assert!(page.contains("❌ An error occurred:"));
        assert!(!page.contains("📄 Summary:"));
    }

    #[tokio::test]
    async fn test_post_tts_language_error_keeps_summary_sections() {
        let state = state_with(
            MockTextClient::new().with_response("A summary.".to_string()),
            MockLanguageDetector::new().with_language("cmn", "Mandarin Chinese"),
            MockSpeechClient::new().with_unsupported_language(),
        );

        let Html(page) = summarize(
            State(state),
            form(
                "Some input text.",
                SummaryLength::Brief,
                TargetLanguage::SameAsInput,
            ),
        )
        .await;

        assert!(page.contains("📄 Summary:"));
        assert!(page.contains("download=\"summary.txt\""));
        assert!(page.contains("⚠️ TTS Language Error:"));
        assert!(page.contains("Try selecting English or Hindi."));
        assert!(!page.contains("data:audio/mp3;base64,"));
    }

    #[tokio::test]
    async fn test_post_tts_failure_renders_audio_error() {
        let state = state_with(
            MockTextClient::new().with_response("A summary.".to_string()),
            MockLanguageDetector::new().with_language("en", "English"),
            MockSpeechClient::new().with_failure(),
        );

        let Html(page) = summarize(
            State(state),
            form(
                "Some input text.",
                SummaryLength::Brief,
                TargetLanguage::SameAsInput,
            ),
        )
        .await;

        assert!(page.contains("📄 Summary:"));
        assert!(page.contains("⚠️ Audio generation failed. Error:"));
        assert!(!page.contains("data:audio/mp3;base64,"));
    }

    #[tokio::test]
    async fn test_post_retains_form_selections() {
        let state = state_with(
            MockTextClient::new()
                .with_response("An English summary.".to_string())
                .with_response("Un résumé.".to_string()),
            MockLanguageDetector::new().with_language("en", "English"),
            MockSpeechClient::new(),
        );

        let Html(page) = summarize(
            State(state),
            form(
                "Some input text.",
                SummaryLength::Detailed,
                TargetLanguage::French,
            ),
        )
        .await;

        assert!(page.contains("value=\"Detailed\" checked"));
        assert!(page.contains("<option value=\"French\" selected>"));
        assert!(page.contains("Some input text.</textarea>"));
    }
}
