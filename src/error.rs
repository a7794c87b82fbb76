//! Error handling for the resume matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeMatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("API key not found. Please set {0} in your environment or .env file")]
    MissingCredential(String),

    #[error("{0}")]
    MissingInput(String),

    #[error("PDF extraction error: {0}")]
    Extraction(String),

    #[error("Language model call failed: {0}")]
    ModelCall(String),

    #[error("Failed to load resume record: {0}")]
    RecordLoad(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

impl ResumeMatcherError {
    /// Errors that end the process rather than the current request.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ResumeMatcherError::MissingCredential(_)
                | ResumeMatcherError::RecordLoad(_)
                | ResumeMatcherError::Configuration(_)
        )
    }

    /// Input problems are reported as warnings, everything else as errors.
    pub fn is_warning(&self) -> bool {
        matches!(self, ResumeMatcherError::MissingInput(_))
    }
}

pub type Result<T> = std::result::Result<T, ResumeMatcherError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeMatcherError {
    fn from(err: anyhow::Error) -> Self {
        ResumeMatcherError::ModelCall(err.to_string())
    }
}

impl From<reqwest::Error> for ResumeMatcherError {
    fn from(err: reqwest::Error) -> Self {
        ResumeMatcherError::ModelCall(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        assert!(ResumeMatcherError::MissingCredential("GOOGLE_API_KEY".into()).is_fatal());
        assert!(ResumeMatcherError::RecordLoad("cv.json".into()).is_fatal());
        assert!(!ResumeMatcherError::ModelCall("quota".into()).is_fatal());
        assert!(!ResumeMatcherError::Extraction("empty".into()).is_fatal());
    }

    #[test]
    fn test_missing_input_is_warning() {
        let err = ResumeMatcherError::MissingInput("Please enter a job description.".into());
        assert!(err.is_warning());
        assert_eq!(err.to_string(), "Please enter a job description.");
    }

    #[test]
    fn test_missing_credential_message_names_variable() {
        let err = ResumeMatcherError::MissingCredential("GOOGLE_API_KEY".into());
        assert!(err.to_string().contains("GOOGLE_API_KEY"));
    }
}
