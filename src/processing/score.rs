//! Match score extraction from free-text model output

use crate::error::{Result, ResumeMatcherError};
use regex::Regex;

/// ASCII digits immediately followed by a percent sign.
const PERCENTAGE_PATTERN: &str = r"([0-9]+)%";

/// Scrapes the match percentage out of an analysis.
///
/// The first `<digits>%` in the text wins, even when it is an unrelated
/// percentage. Text without one scores 0, so a 0 cannot be told apart from
/// "no percentage found".
pub struct ScoreExtractor {
    pattern: Regex,
}

impl ScoreExtractor {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(PERCENTAGE_PATTERN)
            .map_err(|e| ResumeMatcherError::Configuration(format!("Invalid score pattern: {}", e)))?;
        Ok(Self { pattern })
    }

    pub fn extract(&self, text: &str) -> u32 {
        self.pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|digits| parse_saturating(digits.as_str()))
            .unwrap_or(0)
    }
}

/// Parse an ASCII digit run, saturating at `u32::MAX`.
fn parse_saturating(digits: &str) -> u32 {
    digits.bytes().fold(0u32, |acc, b| {
        acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> u32 {
        ScoreExtractor::new().unwrap().extract(text)
    }

    #[test]
    fn test_simple_match() {
        assert_eq!(extract("Match: 87% ..."), 87);
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(extract("50% of people... then 92% match"), 50);
    }

    #[test]
    fn test_no_percentage_defaults_to_zero() {
        assert_eq!(extract("No percentages here"), 0);
        assert_eq!(extract(""), 0);
    }

    #[test]
    fn test_explicit_zero_is_indistinguishable_from_missing() {
        assert_eq!(extract("Percentage Match: 0%"), extract("Percentage Match: n/a"));
    }

    #[test]
    fn test_digits_must_touch_the_percent_sign() {
        assert_eq!(extract("score 75 % overall"), 0);
        assert_eq!(extract("score 75 % overall, really 80%"), 80);
        assert_eq!(extract("100 percent, %"), 0);
    }

    #[test]
    fn test_whole_digit_run_is_taken() {
        assert_eq!(extract("v2.75% of"), 75);
        assert_eq!(extract("**Percentage Match:** 085%"), 85);
        assert_eq!(extract("1234%"), 1234);
    }

    #[test]
    fn test_markdown_heading_output() {
        let analysis = "## Percentage Match\n\n78%\n\n## Missing Keywords\n- Kubernetes (seen in 30% of postings)\n";
        assert_eq!(extract(analysis), 78);
    }

    #[test]
    fn test_overflowing_digits_saturate() {
        assert_eq!(extract("99999999999999999999%"), u32::MAX);
    }

    #[test]
    fn test_non_ascii_digits_are_skipped() {
        assert_eq!(extract("٥٠% then 40%"), 40);
    }
}
