use crate::ai::TextGenerationService;
use crate::language::LanguageDetectionService;
use crate::models::{AudioClip, SummaryLength, SummaryReport, SummaryStats, TargetLanguage};
use crate::speech::SpeechService;
use crate::{prompts, Error, Result};
use std::fs;
use std::io::Write;
use tracing::info;

/// Coordinates detection, summarisation, translation, and speech synthesis.
pub struct SummaryPipeline {
    text_gen: Box<dyn TextGenerationService>,
    language: Box<dyn LanguageDetectionService>,
    speech: Box<dyn SpeechService>,
}

impl SummaryPipeline {
    pub fn new(
        text_gen: Box<dyn TextGenerationService>,
        language: Box<dyn LanguageDetectionService>,
        speech: Box<dyn SpeechService>,
    ) -> Self {
        Self {
            text_gen,
            language,
            speech,
        }
    }

    /// Summarise the input at the requested length, translating afterwards
    /// when a target language is chosen. The input reaches the detector and
    /// the model verbatim; trimming only decides whether there is input.
    pub async fn summarize(
        &self,
        input: &str,
        length: SummaryLength,
        target: TargetLanguage,
    ) -> Result<SummaryReport> {
        if input.trim().is_empty() {
            return Err(Error::EmptyPrompt);
        }

        let detected = self.language.detect(input)?;
        info!("Detected language: {} ({})", detected.name, detected.code);

        let prompt = prompts::render(
            prompts::SUMMARIZE,
            &[("length", length.directive()), ("text", input)],
        );
        let mut summary = self.text_gen.generate_text(&prompt).await?.trim().to_string();
        info!("Generated {} summary ({} chars)", length.label(), summary.len());

        if let Some(language) = target.translation_target() {
            info!("Translating summary to {}", language);
            let prompt = prompts::render(
                prompts::TRANSLATE,
                &[("language", language), ("summary", &summary)],
            );
            summary = self.text_gen.generate_text(&prompt).await?.trim().to_string();
        }

        let stats = SummaryStats::compute(input, &summary);

        Ok(SummaryReport {
            detected,
            target,
            summary,
            stats,
        })
    }

    /// Best-effort speech synthesis for a finished report. The MP3 is spilled
    /// through a temp file, mirroring how TTS tooling writes to disk; the
    /// file is removed when the handle drops.
    pub async fn speak(&self, report: &SummaryReport) -> Result<AudioClip> {
        let lang_code = report.speech_lang();
        info!("Synthesising speech with language code: {}", lang_code);

        let audio = self.speech.synthesize(&report.summary, &lang_code).await?;

        let mut tmp = tempfile::NamedTempFile::new()?;
        tmp.write_all(&audio)?;
        tmp.flush()?;
        let mp3 = fs::read(tmp.path())?;

        Ok(AudioClip { lang_code, mp3 })
    }
}
