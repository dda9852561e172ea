//! Report rendering with the Handlebars template engine
//!
//! This module renders analysis reports to Markdown or JSON and saves
//! them to the filesystem.

use handlebars::Handlebars;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::error::{AnalyzerErrorTrait, ErrorCategory};
use crate::models::{AnalysisReport, WordCount};
use crate::utils::{format_percent, sanitize_filename, truncate_text};

/// Default report template
const DEFAULT_TEMPLATE: &str = include_str!("../../templates/report.md.hbs");

const TEMPLATE_NAME: &str = "report";

/// Words listed under "Top words"
const TOP_WORDS_SHOWN: usize = 20;

/// Longest cleaned comment shown in the comment table
const MAX_CLEANED_CHARS: usize = 80;

/// Report errors
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Invalid report template: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Failed to render report: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AnalyzerErrorTrait for ReportError {
    fn is_recoverable(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Template(_) | Self::Render(_) | Self::Json(_) => ErrorCategory::Rendering,
            Self::Io { .. } => ErrorCategory::Storage,
        }
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
}

impl ReportFormat {
    /// File extension for this format
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }
}

/// Template data for rendering
#[derive(Debug, Serialize)]
struct ReportTemplateData {
    subject: String,
    generated_at: String,
    summary: SummaryData,
    interpretations: Vec<String>,
    correlations: Vec<CorrelationData>,
    top_words: Vec<WordCount>,
    wordcloud: Option<String>,
    comments: Vec<CommentData>,
}

#[derive(Debug, Serialize)]
struct SummaryData {
    count: usize,
    mean: String,
    median: String,
    positive: String,
    negative: String,
    neutral: String,
}

#[derive(Debug, Serialize)]
struct CorrelationData {
    column: String,
    value: String,
}

#[derive(Debug, Serialize)]
struct CommentData {
    index: usize,
    score: String,
    cleaned: String,
}

impl From<&AnalysisReport> for ReportTemplateData {
    fn from(report: &AnalysisReport) -> Self {
        let summary = &report.summary;
        Self {
            subject: report.subject.clone(),
            generated_at: report.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            summary: SummaryData {
                count: summary.count,
                mean: format!("{:.3}", summary.mean),
                median: format!("{:.3}", summary.median),
                positive: format_percent(summary.positive_pct),
                negative: format_percent(summary.negative_pct),
                neutral: format_percent(summary.neutral_pct),
            },
            interpretations: report.interpretations.clone(),
            correlations: report
                .correlations
                .iter()
                .map(|(column, value)| CorrelationData {
                    column: column.clone(),
                    value: value.map_or_else(|| "undefined".to_string(), |r| format!("{r:.3}")),
                })
                .collect(),
            top_words: report.top_words.iter().take(TOP_WORDS_SHOWN).cloned().collect(),
            wordcloud: report
                .wordcloud_path
                .as_ref()
                .map(|p| p.display().to_string()),
            comments: report
                .scores
                .iter()
                .zip(report.cleaned.iter())
                .enumerate()
                .map(|(i, (score, cleaned))| CommentData {
                    index: i + 1,
                    score: format!("{score:.3}"),
                    cleaned: truncate_text(cleaned, MAX_CLEANED_CHARS),
                })
                .collect(),
        }
    }
}

/// Report writer with Handlebars template engine
pub struct ReportWriter<'a> {
    /// Handlebars template engine
    handlebars: Handlebars<'a>,

    /// Output directory
    output_dir: PathBuf,
}

impl<'a> ReportWriter<'a> {
    /// Create a new ReportWriter with the default template
    ///
    /// # Arguments
    /// * `output_dir` - Directory to save reports; created if missing
    pub fn new(output_dir: &Path) -> Result<Self, ReportError> {
        let mut handlebars = Self::engine();
        handlebars.register_template_string(TEMPLATE_NAME, DEFAULT_TEMPLATE)?;
        Self::with_engine(handlebars, output_dir)
    }

    /// Create with custom template file
    ///
    /// # Arguments
    /// * `output_dir` - Directory to save reports
    /// * `template_path` - Path to custom Handlebars template
    pub fn with_template(output_dir: &Path, template_path: &Path) -> Result<Self, ReportError> {
        let mut handlebars = Self::engine();
        handlebars.register_template_file(TEMPLATE_NAME, template_path)?;
        Self::with_engine(handlebars, output_dir)
    }

    fn engine() -> Handlebars<'a> {
        let mut handlebars = Handlebars::new();
        // Markdown output, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars
    }

    fn with_engine(handlebars: Handlebars<'a>, output_dir: &Path) -> Result<Self, ReportError> {
        fs::create_dir_all(output_dir).map_err(|source| ReportError::Io {
            path: output_dir.to_path_buf(),
            source,
        })?;

        Ok(Self {
            handlebars,
            output_dir: output_dir.to_path_buf(),
        })
    }

    /// Render a report to Markdown
    pub fn render_markdown(&self, report: &AnalysisReport) -> Result<String, ReportError> {
        let data = ReportTemplateData::from(report);
        Ok(self.handlebars.render(TEMPLATE_NAME, &data)?)
    }

    /// Render a report in the given format
    pub fn render(&self, report: &AnalysisReport, format: ReportFormat) -> Result<String, ReportError> {
        match format {
            ReportFormat::Markdown => self.render_markdown(report),
            ReportFormat::Json => to_json(report),
        }
    }

    /// Save a report as `{subject}_report.{md,json}`
    ///
    /// # Returns
    /// Path to saved file
    pub fn save(&self, report: &AnalysisReport, format: ReportFormat) -> Result<PathBuf, ReportError> {
        let content = self.render(report, format)?;
        let filepath = self.output_dir.join(report_file_name(&report.subject, format));

        let io_err = |source| ReportError::Io {
            path: filepath.clone(),
            source,
        };
        let mut file = File::create(&filepath).map_err(io_err)?;
        file.write_all(content.as_bytes()).map_err(io_err)?;

        tracing::debug!(path = %filepath.display(), "Saved report");
        Ok(filepath)
    }

    /// Get output directory
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

/// Serialize a report as pretty-printed JSON
pub fn to_json(report: &AnalysisReport) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// File name of a saved report
#[must_use]
pub fn report_file_name(subject: &str, format: ReportFormat) -> String {
    format!("{}_report.{}", sanitize_filename(subject), format.extension())
}

/// File name of a saved word cloud
#[must_use]
pub fn wordcloud_file_name(subject: &str) -> String {
    format!("wc_{}.svg", sanitize_filename(subject))
}
