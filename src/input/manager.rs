//! Input manager for resolving the resume upload and the job description

use crate::error::{Result, ResumeMatcherError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::info;
use std::path::Path;

#[derive(Debug, Default)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Extract text from any supported file, routed by extension.
    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ResumeMatcherError::InvalidInput(
                format!("File does not exist: {}", path.display())
            ));
        }

        match FileType::from_path(path) {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await
            }
            FileType::Unknown => Err(ResumeMatcherError::UnsupportedFormat(
                format!("Unsupported file type for: {}", path.display())
            )),
        }
    }

    /// Resolve the job description from inline text or a text/markdown file.
    ///
    /// Returns `None` when neither source was given; emptiness is judged by the caller.
    pub async fn job_description(&self, inline: Option<String>, file: Option<&Path>) -> Result<Option<String>> {
        if let Some(text) = inline {
            return Ok(Some(text));
        }

        let Some(path) = file else {
            return Ok(None);
        };

        match FileType::from_path(path) {
            FileType::Text | FileType::Markdown => Ok(Some(self.extract_text(path).await?)),
            _ => Err(ResumeMatcherError::UnsupportedFormat(format!(
                "Job description must be a .txt or .md file: {}",
                path.display()
            ))),
        }
    }
}
