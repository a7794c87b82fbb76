//! Text extraction from various file formats

use crate::error::{Result, ResumeMatcherError};
use log::debug;
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

/// Placed between pages so the last word of one page never runs into the next.
const PAGE_SEPARATOR: &str = "\n\n";

impl PdfExtractor {
    /// Extract the text of every page, in page order, separated by a blank line.
    pub fn extract_from_bytes(bytes: &[u8]) -> Result<String> {
        // pdf-extract unwraps on some malformed documents instead of returning an error
        let outcome = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes));

        match outcome {
            Ok(Ok(pages)) => {
                debug!("Extracted {} pages from {} bytes of PDF", pages.len(), bytes.len());
                Ok(pages.join(PAGE_SEPARATOR))
            }
            Ok(Err(e)) => Err(ResumeMatcherError::Extraction(e.to_string())),
            Err(_) => Err(ResumeMatcherError::Extraction("PDF parser aborted on malformed input".to_string())),
        }
    }
}

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ResumeMatcherError::Io)?;

        Self::extract_from_bytes(&bytes).map_err(|e| match e {
            ResumeMatcherError::Extraction(msg) => ResumeMatcherError::Extraction(
                format!("Failed to extract text from PDF '{}': {}", path.display(), msg),
            ),
            other => other,
        })
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await.map_err(ResumeMatcherError::Io)?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await.map_err(ResumeMatcherError::Io)?;
        Ok(markdown_to_text(&markdown_content))
    }
}

/// Flatten Markdown to plain text, one block per line.
pub fn markdown_to_text(markdown: &str) -> String {
    let mut text = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push('\n'),
            Event::End(Tag::Paragraph)
            | Event::End(Tag::Heading(..))
            | Event::End(Tag::Item)
            | Event::End(Tag::CodeBlock(_)) => text.push('\n'),
            _ => {}
        }
    }

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
