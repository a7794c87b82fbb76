//! Report structures for a completed match analysis

use crate::output::gauge::{BandColor, Gauge};
use crate::processing::sections::AnalysisSections;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything the formatters need to present one analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Score scraped from the analysis; 0 also means "none found"
    pub match_score: u32,

    pub gauge: Gauge,

    /// Band the gauge marker falls in
    pub band: BandColor,

    /// Raw model response, unmodified
    pub analysis: String,

    /// Sections recognised in the response, for display
    pub sections: AnalysisSections,

    pub missing_keywords: Vec<String>,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub processing_time_ms: u64,
    pub model: String,
    pub resume_file: String,
    pub resume_characters: usize,
    pub matcher_version: String,
}

impl MatchReport {
    pub fn new(match_score: u32, analysis: String, metadata: ReportMetadata) -> Self {
        let gauge = Gauge::new(match_score);
        let sections = AnalysisSections::parse(&analysis);
        let missing_keywords = sections.missing_keyword_list();

        Self {
            match_score,
            band: gauge.band().color,
            gauge,
            analysis,
            sections,
            missing_keywords,
            metadata,
        }
    }

    /// Resume file name without directories
    pub fn resume_file_name(&self) -> String {
        std::path::Path::new(&self.metadata.resume_file)
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.metadata.resume_file.clone())
    }

    pub fn generated_at_display(&self) -> String {
        self.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }
}

impl ReportMetadata {
    pub fn new(model: &str, resume_file: &str, resume_characters: usize, processing_time_ms: u64) -> Self {
        Self {
            generated_at: Utc::now(),
            processing_time_ms,
            model: model.to_string(),
            resume_file: resume_file.to_string(),
            resume_characters,
            matcher_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
