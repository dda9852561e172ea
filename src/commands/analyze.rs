use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use feedback_analyzer::config::Config;
use feedback_analyzer::input::Table;
use feedback_analyzer::models::{AnalysisRequest, CellValue, RatingColumn};
use feedback_analyzer::pipeline::FeedbackAnalyzer;
use feedback_analyzer::report::{wordcloud_file_name, ReportFormat, ReportWriter};

use super::read_pasted;

/// Parameters of the `analyze` command
pub struct AnalyzeParams {
    pub input: PathBuf,
    pub subject: String,
    pub rating_cols: Vec<String>,
    pub output_dir: Option<PathBuf>,
    pub format: String,
}

fn parse_format(format: &str) -> Result<ReportFormat> {
    match format.to_lowercase().as_str() {
        "markdown" | "md" => Ok(ReportFormat::Markdown),
        "json" => Ok(ReportFormat::Json),
        other => anyhow::bail!("Unknown report format '{other}' (expected markdown or json)"),
    }
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Build the request from a CSV table or a pasted-text file
fn build_request(params: &AnalyzeParams) -> Result<AnalysisRequest> {
    let request = AnalysisRequest::new(params.subject.clone());

    if !is_csv(&params.input) {
        if !params.rating_cols.is_empty() {
            tracing::warn!("Rating columns need CSV input, ignoring --rating-col");
        }
        return Ok(request.with_comments(read_pasted(&params.input)?));
    }

    let table = Table::from_csv_path(&params.input)
        .with_context(|| format!("Failed to load table: {}", params.input.display()))?;
    let mut request = request.with_comments(table.comments());

    for name in &params.rating_cols {
        let column = table.require_rating_column(name).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Rating column missing, its correlation is undefined");
            RatingColumn::new(name.as_str(), Vec::<CellValue>::new())
        });
        request = request.with_rating(column);
    }

    Ok(request)
}

pub fn analyze(config: &Config, params: AnalyzeParams) -> Result<()> {
    let format = parse_format(&params.format)?;
    let output_dir = params
        .output_dir
        .clone()
        .unwrap_or_else(|| config.output.dir.clone());

    let request = build_request(&params)?
        .with_wordcloud_path(output_dir.join(wordcloud_file_name(&params.subject)));

    let analyzer = FeedbackAnalyzer::new(config).context("Failed to initialize analyzer")?;
    let report = analyzer.analyze(request).context("Analysis failed")?;

    let writer = match &config.output.report_template {
        Some(template) => ReportWriter::with_template(&output_dir, template),
        None => ReportWriter::new(&output_dir),
    }
    .context("Failed to prepare report writer")?;
    let report_path = writer
        .save(&report, format)
        .context("Failed to save report")?;

    println!("Feedback analysis: {}", report.subject);
    println!("================================");
    for line in &report.interpretations {
        println!("  {line}");
    }
    for (column, value) in &report.correlations {
        match value {
            Some(r) => println!("  Correlation with {column}: {r:.3}"),
            None => println!("  Correlation with {column}: undefined"),
        }
    }
    if let Some(path) = &report.wordcloud_path {
        println!("Word cloud: {}", path.display());
    }
    println!("Report: {}", report_path.display());

    Ok(())
}
