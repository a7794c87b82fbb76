//! Input processing module
//! Handles file detection, text extraction, and resolving the resume and job description

pub mod file_detector;
pub mod text_extractor;
pub mod manager;
