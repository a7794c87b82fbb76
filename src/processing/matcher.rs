//! Resume match pipeline: extract, prompt, one model call, score

use crate::cli::validate_file_extension;
use crate::error::{Result, ResumeMatcherError};
use crate::input::text_extractor::TextExtractor;
use crate::llm::client::LanguageModel;
use crate::llm::prompts::{PromptParams, PromptTemplates};
use crate::output::report::{MatchReport, ReportMetadata};
use crate::processing::score::ScoreExtractor;
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// One click of "Analyze Resume"
#[derive(Debug, Clone, Default)]
pub struct MatchRequest {
    pub resume: Option<PathBuf>,
    pub job_description: Option<String>,
}

pub struct MatchPipeline<E, M> {
    extractor: E,
    model: M,
    templates: PromptTemplates,
    scorer: ScoreExtractor,
}

impl<E: TextExtractor, M: LanguageModel> MatchPipeline<E, M> {
    pub fn new(extractor: E, model: M) -> Result<Self> {
        Ok(Self {
            extractor,
            model,
            templates: PromptTemplates::default(),
            scorer: ScoreExtractor::new()?,
        })
    }

    /// Run one analysis. Every failure is scoped to this request.
    pub async fn analyze(&self, request: &MatchRequest) -> Result<MatchReport> {
        let start_time = Instant::now();

        let resume_path = request
            .resume
            .as_deref()
            .ok_or_else(|| ResumeMatcherError::MissingInput("Please upload a PDF resume.".to_string()))?;

        let job_description = request
            .job_description
            .as_deref()
            .filter(|jd| !jd.trim().is_empty())
            .ok_or_else(|| ResumeMatcherError::MissingInput("Please enter a job description.".to_string()))?;

        validate_file_extension(resume_path, &["pdf"])
            .map_err(|e| ResumeMatcherError::InvalidInput(format!("Resume file: {}", e)))?;

        info!("Extracting resume text from {}", resume_path.display());
        let resume_text = self.extractor.extract(resume_path).await?;

        if resume_text.trim().is_empty() {
            return Err(ResumeMatcherError::Extraction(
                "Could not extract text from the PDF. Please check the file.".to_string(),
            ));
        }
        let resume_characters = resume_text.len();
        debug!("Resume text: {} characters", resume_characters);

        let prompt = self.templates.render_match_analysis(&PromptParams {
            resume_content: resume_text,
            job_content: job_description.to_string(),
        });

        info!("Requesting analysis from {}", self.model.model_name());
        let analysis = self.model.generate(&prompt).await?;

        let match_score = self.scorer.extract(&analysis);
        info!("Match score: {}%", match_score);

        let metadata = ReportMetadata::new(
            self.model.model_name(),
            &resume_path.to_string_lossy(),
            resume_characters,
            start_time.elapsed().as_millis() as u64,
        );

        Ok(MatchReport::new(match_score, analysis, metadata))
    }
}
