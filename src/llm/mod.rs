//! Language model integration: prompt templates and the hosted model client

pub mod client;
pub mod prompts;

pub use client::{GeminiClient, LanguageModel};
