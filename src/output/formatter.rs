//! Output formatters for match reports

use crate::config::OutputFormat;
use crate::error::{Result, ResumeMatcherError};
use crate::output::gauge::BandColor;
use crate::output::report::MatchReport;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

const GAUGE_TITLE: &str = "Resume Match Score";
const TERMINAL_GAUGE_WIDTH: usize = 40;

/// Trait for formatting match reports
pub trait OutputFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String>;
}

/// Status line shown above a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Warning,
    Error,
}

pub fn banner(kind: BannerKind, message: &str, use_colors: bool) -> String {
    let (icon, plain, color) = match kind {
        BannerKind::Success => ("✅", "[OK]", Color::Green),
        BannerKind::Warning => ("⚠️ ", "[WARN]", Color::Yellow),
        BannerKind::Error => ("❌", "[ERROR]", Color::Red),
    };

    if use_colors {
        format!("{} {}", icon, message.color(color).bold())
    } else {
        format!("{} {}", plain, message)
    }
}

/// Banner for a failed request: missing input is a warning, anything else an error.
pub fn error_banner(err: &ResumeMatcherError, use_colors: bool) -> String {
    let kind = if err.is_warning() { BannerKind::Warning } else { BannerKind::Error };
    banner(kind, &err.to_string(), use_colors)
}

/// Terminal formatter: banner, gauge, raw model response
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for scripting and integration
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Standalone HTML page with an SVG gauge
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>ATS Resume Match Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .banner {
            padding: 12px 16px;
            border-radius: 6px;
            background: #d4edda;
            color: #155724;
            font-weight: bold;
        }
        .gauge { text-align: center; margin: 20px 0; }
        .band-red { color: #dc3545; }
        .band-yellow { color: #b8860b; }
        .band-green { color: #28a745; }
        .section h2 {
            color: #007acc;
            border-bottom: 2px solid #e9ecef;
            padding-bottom: 10px;
        }
        .keywords li { display: inline-block; margin: 4px; padding: 2px 10px; border-radius: 12px; background: #fff3cd; }
        pre.analysis { white-space: pre-wrap; background: #f8f9fa; padding: 15px; border-radius: 6px; }
        .metadata {
            background: #e9ecef;
            padding: 15px;
            border-radius: 6px;
            margin-top: 30px;
            font-size: 0.9em;
            color: #6c757d;
        }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <h1>ATS Resume Checker</h1>
        <div class="banner">Resume Analysis Complete</div>

        <div class="gauge">
            {{ gauge_svg|safe }}
            <p class="{{ band_class }}"><strong>{{ score }}%</strong> match</p>
        </div>

        {% if has_missing_keywords %}
        <div class="section">
            <h2>Missing Keywords</h2>
            <ul class="keywords">
            {% for keyword in missing_keywords %}
                <li>{{ keyword }}</li>
            {% endfor %}
            </ul>
        </div>
        {% endif %}

        {% if has_profile_summary %}
        <div class="section">
            <h2>Profile Summary</h2>
            <p>{{ profile_summary }}</p>
        </div>
        {% endif %}

        <div class="section">
            <h2>Full Analysis</h2>
            <pre class="analysis">{{ analysis }}</pre>
        </div>

        <div class="metadata">
            <p><strong>Generated:</strong> {{ generated_at }} | <strong>Processing time:</strong> {{ processing_time }}ms</p>
            <p><strong>Model:</strong> {{ model }} | <strong>Resume:</strong> {{ resume_file }}</p>
            <p>resume-matcher v{{ version }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    gauge_svg: String,
    score: u32,
    band_class: &'static str,
    has_missing_keywords: bool,
    missing_keywords: Vec<String>,
    has_profile_summary: bool,
    profile_summary: String,
    analysis: String,
    generated_at: String,
    processing_time: u64,
    model: String,
    resume_file: String,
    version: String,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("ATS RESUME CHECKER", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms | Model: {}\n\n",
            report.generated_at_display(),
            report.metadata.processing_time_ms,
            report.metadata.model
        ));
        output.push_str(&banner(BannerKind::Success, "Resume Analysis Complete", self.use_colors));
        output.push('\n');

        output.push_str(&self.format_header(GAUGE_TITLE, 2));
        output.push_str(&report.gauge.render_terminal(TERMINAL_GAUGE_WIDTH, self.use_colors));
        output.push('\n');

        output.push_str(&self.format_header("Analysis", 2));
        output.push_str(report.analysis.trim_end());
        output.push('\n');

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn band_badge(band: BandColor) -> &'static str {
        match band {
            BandColor::Green => "🟢",
            BandColor::Yellow => "🟡",
            BandColor::Red => "🔴",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# ATS Resume Match Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms\n",
                report.generated_at_display(),
                report.metadata.processing_time_ms
            ));
            output.push_str(&format!(
                "**Resume:** `{}` | **Model:** `{}`\n\n",
                report.resume_file_name(),
                report.metadata.model
            ));
        }

        output.push_str(&format!(
            "## {}: {}% {}\n\n",
            GAUGE_TITLE,
            report.match_score,
            Self::band_badge(report.band)
        ));
        output.push_str(&format!("`{}`\n\n", report.gauge.render_terminal(TERMINAL_GAUGE_WIDTH, false)));

        if !report.missing_keywords.is_empty() {
            output.push_str("## Missing Keywords\n\n");
            for keyword in &report.missing_keywords {
                output.push_str(&format!("- {}\n", keyword));
            }
            output.push('\n');
        }

        output.push_str("## Full Analysis\n\n");
        output.push_str(report.analysis.trim_end());
        output.push_str("\n");

        if self.include_metadata {
            output.push_str("\n---\n\n");
            output.push_str(&format!("*Generated by resume-matcher v{}*\n", report.metadata.matcher_version));
        }

        Ok(output)
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &MatchReport) -> HtmlTemplate {
        let band_class = match report.band {
            BandColor::Red => "band-red",
            BandColor::Yellow => "band-yellow",
            BandColor::Green => "band-green",
        };

        HtmlTemplate {
            include_styles: self.include_styles,
            gauge_svg: report.gauge.render_svg(GAUGE_TITLE),
            score: report.match_score,
            band_class,
            has_missing_keywords: !report.missing_keywords.is_empty(),
            missing_keywords: report.missing_keywords.clone(),
            has_profile_summary: report.sections.profile_summary.is_some(),
            profile_summary: report.sections.profile_summary.clone().unwrap_or_default(),
            analysis: report.analysis.clone(),
            generated_at: report.generated_at_display(),
            processing_time: report.metadata.processing_time_ms,
            model: report.metadata.model.clone(),
            resume_file: report.resume_file_name(),
            version: report.metadata.matcher_version.clone(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        self.create_template_data(report)
            .render()
            .map_err(|e| ResumeMatcherError::OutputFormatting(e.to_string()))
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, true, true, true)
    }

    pub fn with_options(use_colors: bool, pretty_json: bool, include_metadata: bool, include_html_styles: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn generate_report(&self, report: &MatchReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");

    match format {
        OutputFormat::Console => format!("{}_match_{}.txt", base_name, timestamp),
        OutputFormat::Json => format!("{}_match_{}.json", base_name, timestamp),
        OutputFormat::Markdown => format!("{}_match_{}.md", base_name, timestamp),
        OutputFormat::Html => format!("{}_match_{}.html", base_name, timestamp),
    }
}
