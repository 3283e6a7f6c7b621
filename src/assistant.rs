use std::fs;
use std::path::{Path, PathBuf};
use log::{info, warn, error};

use crate::config::DocAssistConfig;
use crate::error::{Error, Result};
use crate::llm::{GeminiClient, TextGenerator};
use crate::matcher::LocalPlagiarismEngine;
use crate::online::{HttpRemoteScorer, OnlineReport, RemoteScorer};
use crate::parser::{is_allowed_file, FileTextResolver, TextResolver};
use crate::prompt::{build_prompt, Feature};
use crate::types::{identifier_of, ComparisonResult};
use crate::utils::TransientDocument;

/// Where a request's document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentInput {
    Pasted(String),
    File(PathBuf),
}

/// Handles one user request end to end: resolve the document, then run
/// a prompt feature, a local corpus scan or an online comparison.
pub struct Assistant {
    config: DocAssistConfig,
    engine: LocalPlagiarismEngine,
    generator: Option<Box<dyn TextGenerator>>,
    scorer: Option<Box<dyn RemoteScorer>>,
}

impl Assistant {
    pub fn new(config: DocAssistConfig) -> Self {
        let engine = LocalPlagiarismEngine::from_config(&config);
        Self {
            config,
            engine,
            generator: None,
            scorer: None,
        }
    }

    /// Build with the HTTP clients the configuration allows.
    /// A missing API key or endpoint only disables that feature.
    pub fn from_config(config: DocAssistConfig) -> Result<Self> {
        let generator: Option<Box<dyn TextGenerator>> = match GeminiClient::new(&config.llm) {
            Ok(client) => Some(Box::new(client)),
            Err(Error::Config(msg)) => {
                warn!("Text generation disabled: {}", msg);
                None
            },
            Err(e) => return Err(e),
        };

        let scorer: Option<Box<dyn RemoteScorer>> = if config.online.is_enabled() {
            Some(Box::new(HttpRemoteScorer::new(&config.online)?))
        } else {
            None
        };

        let mut assistant = Self::new(config);
        assistant.generator = generator;
        assistant.scorer = scorer;
        Ok(assistant)
    }

    pub fn with_generator(mut self, generator: Box<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn with_scorer(mut self, scorer: Box<dyn RemoteScorer>) -> Self {
        self.scorer = Some(scorer);
        self
    }

    /// Copy an admitted upload into the upload directory under its base name.
    pub fn store_upload(&self, source: &Path) -> Result<PathBuf> {
        let filename = identifier_of(source);
        if !is_allowed_file(&filename, &self.config.files.allowed_extensions) {
            return Err(Error::text(format!(
                "file type not allowed: {:?} (allowed: {})",
                source,
                self.config.files.allowed_extensions.join(", ")
            )));
        }
        if filename.starts_with(&self.config.files.transient_prefix) {
            return Err(Error::text(format!(
                "file name must not start with reserved prefix {:?}",
                self.config.files.transient_prefix
            )));
        }

        fs::create_dir_all(&self.config.files.upload_dir)?;
        let destination = self.config.files.upload_dir.join(&filename);
        if source != destination.as_path() {
            fs::copy(source, &destination)?;
        }
        info!("Stored upload {} in {:?}", filename, self.config.files.upload_dir);
        Ok(destination)
    }

    /// Text of the input, `None` when a document yields nothing usable.
    pub fn resolve_input(&self, input: &DocumentInput) -> Result<Option<String>> {
        match input {
            DocumentInput::Pasted(text) => Ok(Some(text.clone()).filter(|t| !t.is_empty())),
            DocumentInput::File(path) => {
                let text = FileTextResolver::new().resolve_text(path)?;
                Ok(text.filter(|t| !t.is_empty()))
            },
        }
    }

    /// Run a prompt feature over `content`. Generation failures come back as
    /// a message for the user rather than an error.
    pub fn respond(&self, feature: Feature, content: &str, rubric: Option<&str>) -> Option<String> {
        if content.is_empty() {
            return None;
        }

        let generator = match &self.generator {
            Some(generator) => generator,
            None => return Some("An error occurred: no text generator configured".to_string()),
        };

        let prompt = build_prompt(feature, content, rubric);
        match generator.generate(&prompt) {
            Ok(text) => Some(text),
            Err(e) => {
                error!("Error generating response for {}: {}", feature, e);
                Some(format!("An error occurred: {}", e))
            }
        }
    }

    /// Compare the input against the documents already in the upload directory.
    ///
    /// Uploaded files join the corpus; pasted text lives in a transient
    /// document that is deleted once the scan returns.
    pub fn compare_local(&self, input: &DocumentInput) -> Result<Vec<ComparisonResult>> {
        let upload_dir = &self.config.files.upload_dir;
        match input {
            DocumentInput::Pasted(text) => {
                if text.is_empty() {
                    return Ok(Vec::new());
                }
                let transient = TransientDocument::persist(
                    upload_dir,
                    &self.config.files.transient_prefix,
                    text,
                )?;
                Ok(self.engine.scan_corpus(text, transient.path(), upload_dir))
            },
            DocumentInput::File(path) => {
                let stored = self.store_upload(path)?;
                let query_text = self.resolve_input(&DocumentInput::File(stored.clone()))?;
                match query_text {
                    Some(text) => Ok(self.engine.scan_corpus(&text, &stored, upload_dir)),
                    None => Ok(Vec::new()),
                }
            },
        }
    }

    pub fn compare_online(&self, input: &DocumentInput) -> Result<OnlineReport> {
        let scorer = self.scorer.as_ref()
            .ok_or_else(|| Error::config("online comparison is disabled (no [online] endpoint)"))?;
        let text = self.resolve_input(input)?
            .ok_or_else(|| Error::text("document has no text to compare"))?;
        scorer.score(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct RecordingGenerator {
        prompts: Rc<RefCell<Vec<String>>>,
        reply: Result<String>,
    }

    impl TextGenerator for RecordingGenerator {
        fn generate(&self, prompt: &str) -> Result<String> {
            self.prompts.borrow_mut().push(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(e) => Err(Error::llm(e.to_string())),
            }
        }
    }

    struct FixedScorer;

    impl RemoteScorer for FixedScorer {
        fn score(&self, text: &str) -> Result<OnlineReport> {
            Ok(OnlineReport { score: text.len() as f64, sources: Vec::new() })
        }
    }

    fn config_in(dir: &Path) -> DocAssistConfig {
        let mut config = DocAssistConfig::default();
        config.files.upload_dir = dir.join("uploads");
        config
    }

    #[test]
    fn respond_sends_few_shot_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let prompts = Rc::new(RefCell::new(Vec::new()));
        let assistant = Assistant::new(config_in(dir.path())).with_generator(Box::new(RecordingGenerator {
            prompts: Rc::clone(&prompts),
            reply: Ok("Key Points:\n• done".to_string()),
        }));

        let answer = assistant.respond(Feature::Summarize, "Essay body", None);
        assert_eq!(answer.as_deref(), Some("Key Points:\n• done"));
        let sent = prompts.borrow();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].ends_with("New Input:\nEssay body"));
    }

    #[test]
    fn respond_reports_generation_errors_as_text() {
        let dir = tempfile::tempdir().unwrap();
        let assistant = Assistant::new(config_in(dir.path())).with_generator(Box::new(RecordingGenerator {
            prompts: Rc::new(RefCell::new(Vec::new())),
            reply: Err(Error::llm("quota exhausted")),
        }));

        let answer = assistant.respond(Feature::Feedback, "Essay body", None).unwrap();
        assert!(answer.starts_with("An error occurred: "));
        assert!(answer.contains("quota exhausted"));
        assert_eq!(assistant.respond(Feature::Feedback, "", None), None);
    }

    #[test]
    fn pasted_text_is_compared_then_removed() {
        let dir = tempfile::tempdir().unwrap();
        let assistant = Assistant::new(config_in(dir.path()));
        let uploads = dir.path().join("uploads");
        fs::create_dir_all(&uploads).unwrap();

        let text = "Photosynthesis converts light energy into chemical energy stored in glucose molecules.";
        fs::write(uploads.join("biology.txt"), text).unwrap();

        let results = assistant.compare_local(&DocumentInput::Pasted(text.to_string())).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].file, "biology.txt");
        assert_eq!(results[0].similarity, 100.0);

        let leftovers: Vec<_> = fs::read_dir(&uploads).unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().starts_with("temp_"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn uploaded_file_joins_corpus_and_skips_itself() {
        let dir = tempfile::tempdir().unwrap();
        let assistant = Assistant::new(config_in(dir.path()));
        let incoming = dir.path().join("submission.txt");
        fs::write(&incoming, "A short original submission with nothing else to match.").unwrap();

        let results = assistant.compare_local(&DocumentInput::File(incoming)).unwrap();
        assert!(results.is_empty());
        assert!(dir.path().join("uploads").join("submission.txt").is_file());
    }

    #[test]
    fn rejects_disallowed_uploads() {
        let dir = tempfile::tempdir().unwrap();
        let assistant = Assistant::new(config_in(dir.path()));
        let incoming = dir.path().join("slides.pptx");
        fs::write(&incoming, "binary-ish").unwrap();

        assert!(assistant.store_upload(&incoming).is_err());
        let reserved = dir.path().join("temp_notes.txt");
        fs::write(&reserved, "text").unwrap();
        assert!(assistant.store_upload(&reserved).is_err());
    }

    #[test]
    fn online_requires_a_scorer() {
        let dir = tempfile::tempdir().unwrap();
        let input = DocumentInput::Pasted("twelve chars".to_string());

        let assistant = Assistant::new(config_in(dir.path()));
        assert!(matches!(assistant.compare_online(&input), Err(Error::Config(_))));

        let assistant = assistant.with_scorer(Box::new(FixedScorer));
        assert_eq!(assistant.compare_online(&input).unwrap().score, 12.0);
    }
}
