//! Question answering over a fixed resume record

use crate::error::{Result, ResumeMatcherError};
use crate::llm::client::LanguageModel;
use crate::llm::prompts::PromptTemplates;
use log::{debug, info};
use std::path::Path;

/// Resume record loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeRecord {
    data: serde_json::Value,
}

impl ResumeRecord {
    /// Load the record. A missing or malformed file is fatal for the Q&A commands.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ResumeMatcherError::RecordLoad(format!("{}: {}", path.display(), e)))?;

        let data = serde_json::from_str(&content)
            .map_err(|e| ResumeMatcherError::RecordLoad(format!("{}: {}", path.display(), e)))?;

        info!("Loaded resume record from {}", path.display());
        Ok(Self { data })
    }

    pub fn from_value(data: serde_json::Value) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &serde_json::Value {
        &self.data
    }
}

/// Answers questions from a borrowed record; one model call per question.
pub struct ResumeQa<'a, M> {
    record: &'a ResumeRecord,
    model: M,
    templates: PromptTemplates,
}

impl<'a, M: LanguageModel> ResumeQa<'a, M> {
    pub fn new(record: &'a ResumeRecord, model: M) -> Self {
        Self {
            record,
            model,
            templates: PromptTemplates::default(),
        }
    }

    pub async fn ask(&self, question: &str) -> Result<String> {
        if question.trim().is_empty() {
            return Err(ResumeMatcherError::MissingInput("Please enter a question.".to_string()));
        }

        let prompt = self.templates.render_resume_question(self.record.data(), question)?;
        debug!("Q&A prompt: {} characters", prompt.len());

        self.model.generate(&prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::NamedTempFile;

    #[derive(Clone, Default)]
    struct EchoModel {
        calls: Arc<AtomicUsize>,
    }

    impl LanguageModel for EchoModel {
        async fn generate(&self, prompt: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(prompt.to_string())
        }

        fn model_name(&self) -> &str {
            "echo"
        }
    }

    struct FailingModel;

    impl LanguageModel for FailingModel {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Err(ResumeMatcherError::ModelCall("quota exceeded".to_string()))
        }

        fn model_name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn test_load_record() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "Jane Doe", "skills": ["Rust", "SQL"]}}"#).unwrap();

        let record = ResumeRecord::load(file.path()).unwrap();
        assert_eq!(record.data()["skills"][0], "Rust");
    }

    #[test]
    fn test_missing_record_is_fatal() {
        let err = ResumeRecord::load(Path::new("no/such/cv.json")).unwrap_err();
        assert!(matches!(err, ResumeMatcherError::RecordLoad(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_malformed_record_is_fatal() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = ResumeRecord::load(file.path()).unwrap_err();
        assert!(err.is_fatal());
    }

    #[tokio::test]
    async fn test_ask_embeds_record_and_question() {
        let record = ResumeRecord::from_value(json!({"education": "MSc Data Science"}));
        let model = EchoModel::default();
        let qa = ResumeQa::new(&record, model.clone());

        let answer = qa.ask("Whats his education ?").await.unwrap();

        assert!(answer.contains("\"education\": \"MSc Data Science\""));
        assert!(answer.ends_with("User: Whats his education ?\nChatbot:"));
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_question_is_embedded_as_typed() {
        let record = ResumeRecord::from_value(json!({"name": "Jane"}));
        let qa = ResumeQa::new(&record, EchoModel::default());

        let prompt = qa.ask("  Where does she work?\t").await.unwrap();
        assert!(prompt.ends_with("User:   Where does she work?\t\nChatbot:"));
    }

    #[tokio::test]
    async fn test_blank_question_makes_no_call() {
        let record = ResumeRecord::from_value(json!({}));
        let model = EchoModel::default();
        let qa = ResumeQa::new(&record, model.clone());

        let err = qa.ask("   ").await.unwrap_err();
        assert!(err.is_warning());
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_model_failure_is_scoped_to_question() {
        let record = ResumeRecord::from_value(json!({"name": "Jane"}));
        let qa = ResumeQa::new(&record, FailingModel);

        let err = qa.ask("Where does she work?").await.unwrap_err();
        assert!(matches!(err, ResumeMatcherError::ModelCall(_)));
        assert!(!err.is_fatal());
    }
}
