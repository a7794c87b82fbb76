//! Presentation: gauge, reports, and formatters

pub mod formatter;
pub mod gauge;
pub mod report;
