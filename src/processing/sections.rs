//! Best-effort split of the model's answer into its three requested sections

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionKind {
    Match,
    MissingKeywords,
    ProfileSummary,
}

/// The match / missing keywords / profile summary sections, when recognisable.
///
/// Only used for presentation. The score always comes from the raw text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSections {
    pub match_percentage: Option<String>,
    pub missing_keywords: Option<String>,
    pub profile_summary: Option<String>,
}

const MAX_LABEL_LEN: usize = 40;

impl AnalysisSections {
    pub fn parse(text: &str) -> Self {
        let mut buffers: [(SectionKind, String); 3] = [
            (SectionKind::Match, String::new()),
            (SectionKind::MissingKeywords, String::new()),
            (SectionKind::ProfileSummary, String::new()),
        ];
        let mut current: Option<SectionKind> = None;

        for line in text.lines() {
            if let Some((kind, remainder)) = classify_heading(line) {
                current = Some(kind);
                if !remainder.is_empty() {
                    push_line(&mut buffers, kind, remainder);
                }
                continue;
            }

            if let Some(kind) = current {
                push_line(&mut buffers, kind, line);
            }
        }

        let [(_, matched), (_, missing), (_, summary)] = buffers;
        Self {
            match_percentage: non_empty(matched),
            missing_keywords: non_empty(missing),
            profile_summary: non_empty(summary),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.match_percentage.is_none() && self.missing_keywords.is_none() && self.profile_summary.is_none()
    }

    /// Missing keywords split on commas and list bullets.
    pub fn missing_keyword_list(&self) -> Vec<String> {
        let Some(section) = &self.missing_keywords else {
            return Vec::new();
        };

        section
            .lines()
            .flat_map(|line| line.split(','))
            .map(|item| item.trim().trim_start_matches(['-', '*', '•']).trim().trim_matches('*').trim())
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }
}

fn push_line(buffers: &mut [(SectionKind, String); 3], kind: SectionKind, line: &str) {
    if let Some((_, buffer)) = buffers.iter_mut().find(|(k, _)| *k == kind) {
        buffer.push_str(line);
        buffer.push('\n');
    }
}

fn non_empty(buffer: String) -> Option<String> {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Section names as they appear in labels, lowercased.
///
/// Single-word names only match the whole label; longer names also match as
/// the start of one (`Missing Keywords in Resume`).
const SECTION_NAMES: &[(&str, SectionKind)] = &[
    ("percentage match", SectionKind::Match),
    ("match percentage", SectionKind::Match),
    ("jd match", SectionKind::Match),
    ("job description match", SectionKind::Match),
    ("match score", SectionKind::Match),
    ("match", SectionKind::Match),
    ("percentage", SectionKind::Match),
    ("missing keywords", SectionKind::MissingKeywords),
    ("missing keyword", SectionKind::MissingKeywords),
    ("keywords missing", SectionKind::MissingKeywords),
    ("keywords", SectionKind::MissingKeywords),
    ("profile summary", SectionKind::ProfileSummary),
    ("summary", SectionKind::ProfileSummary),
];

/// Recognise heading lines such as `## Missing Keywords`, `**Profile Summary:**`
/// or `1. Percentage Match: 85%`. Returns the section and any text after the label.
///
/// List bullets are never headings, and the label must name a section.
fn classify_heading(line: &str) -> Option<(SectionKind, &str)> {
    let trimmed = line.trim();
    if is_bullet(trimmed) {
        return None;
    }

    let stripped = trimmed.trim_start_matches(|c: char| c == '#' || c == '*' || c == '_' || c.is_whitespace());
    let stripped = strip_list_number(stripped);

    let (label, remainder) = match stripped.split_once(':') {
        Some((label, rest)) => (label, rest.trim().trim_start_matches(['*', '_']).trim()),
        None => (stripped, ""),
    };

    let label = normalize_label(label);
    if label.is_empty() || label.len() > MAX_LABEL_LEN {
        return None;
    }

    SECTION_NAMES
        .iter()
        .find(|(name, _)| {
            label == *name
                || (name.contains(' ') && label.strip_prefix(*name).is_some_and(|rest| rest.starts_with(' ')))
        })
        .map(|(_, kind)| (*kind, remainder))
}

fn is_bullet(line: &str) -> bool {
    line.starts_with(['-', '\u{2022}', '+']) || (line.starts_with('*') && !line.starts_with("**"))
}

/// Lowercase, drop emphasis markers and a trailing `(...)` note, collapse spaces.
fn normalize_label(label: &str) -> String {
    let label = label.trim().trim_end_matches(['*', '_', '#']).trim();
    let label = match label.rfind('(') {
        Some(open) if label.ends_with(')') => &label[..open],
        _ => label,
    };

    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn strip_list_number(text: &str) -> &str {
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 {
        if let Some(rest) = text[digits..].strip_prefix('.') {
            return rest.trim_start();
        }
    }
    text
}
