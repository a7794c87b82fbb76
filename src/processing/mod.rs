//! Analysis pipelines and response interpretation

pub mod matcher;
pub mod qa;
pub mod score;
pub mod sections;
