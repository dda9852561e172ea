//! End-to-end pipeline integration tests
//!
//! Tests the complete workflow:
//! 1. Comment intake (pasted text or CSV)
//! 2. Normalization and sentiment scoring
//! 3. Word cloud rendering and saving
//! 4. Interpretation and rating correlation
//! 5. Report rendering and saving

use feedback_analyzer::config::Config;
use feedback_analyzer::input::{split_pasted_comments, Table};
use feedback_analyzer::models::AnalysisRequest;
use feedback_analyzer::pipeline::FeedbackAnalyzer;
use feedback_analyzer::report::{wordcloud_file_name, ReportFormat, ReportWriter};
use tempfile::TempDir;

use crate::common::{create_comments, create_test_request, PASTED_COMMENTS, SURVEY_CSV};

// ============================================================================
// Complete Pipeline Tests
// ============================================================================

#[test]
fn test_pipeline_pasted_comments() {
    // Arrange
    let analyzer = FeedbackAnalyzer::new(&Config::default()).unwrap();
    let comments = split_pasted_comments(PASTED_COMMENTS);
    assert_eq!(comments.len(), 3);

    // Act
    let report = analyzer
        .analyze(AnalysisRequest::new("AI").with_comments(comments))
        .unwrap();

    // Assert
    assert_eq!(
        report.cleaned,
        vec!["great course engaging", "homework terrible", "visit note"]
    );
    assert!(report.scores[0] > 0.0);
    assert!(report.scores[1] < 0.0);
    assert_eq!(report.scores[2], 0.0);
    assert_eq!(
        report.interpretations[1],
        "Positive: 1, Negative: 1, Neutral: 1 (out of 3)"
    );
}

#[test]
fn test_pipeline_csv_with_ratings() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("survey.csv");
    std::fs::write(&csv_path, SURVEY_CSV).unwrap();

    let table = Table::from_csv_path(&csv_path).unwrap();
    let comments = table.comments();
    assert_eq!(comments.len(), 5);
    assert!(comments[2].is_missing());

    let request = AnalysisRequest::new("OT")
        .with_comments(comments)
        .with_rating(table.rating_column("Rating").unwrap())
        .with_rating(table.rating_column("Difficulty").unwrap());

    let analyzer = FeedbackAnalyzer::new(&Config::default()).unwrap();
    let report = analyzer.analyze(request).unwrap();

    assert_eq!(report.scores.len(), 5);
    assert_eq!(report.correlations.len(), 2);
    // Happier comments come with higher ratings and lower difficulty
    assert!(report.correlations["Rating"].unwrap() > 0.5);
    assert!(report.correlations["Difficulty"].unwrap() < -0.5);
}

#[test]
fn test_pipeline_saves_wordcloud_and_report() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.output.dir = temp_dir.path().to_path_buf();

    let subject = "Intro Biology";
    let wc_path = config.output.dir.join(wordcloud_file_name(subject));
    let request = AnalysisRequest::new(subject)
        .with_comments(create_comments(50))
        .with_wordcloud_path(&wc_path);

    let report = FeedbackAnalyzer::new(&config).unwrap().analyze(request).unwrap();
    assert!(wc_path.exists());
    assert_eq!(report.wordcloud_path.as_deref(), Some(wc_path.as_path()));
    assert!(!report.top_words.is_empty());

    let writer = ReportWriter::new(&config.output.dir).unwrap();
    let md = writer.save(&report, ReportFormat::Markdown).unwrap();
    let json = writer.save(&report, ReportFormat::Json).unwrap();

    assert_eq!(md.file_name().unwrap(), "Intro_Biology_report.md");
    let markdown = std::fs::read_to_string(md).unwrap();
    assert!(markdown.contains("# Feedback report: Intro Biology"));
    assert!(markdown.contains("wc_Intro_Biology.svg"));

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(json).unwrap()).unwrap();
    assert_eq!(parsed["summary"]["count"], 50);
    assert_eq!(parsed["scores"].as_array().unwrap().len(), 50);
}

#[test]
fn test_pipeline_reuses_resources() {
    let analyzer = FeedbackAnalyzer::new(&Config::default()).unwrap();

    let first = analyzer.analyze(create_test_request()).unwrap();
    let second = analyzer.analyze(create_test_request()).unwrap();

    assert_eq!(first.scores, second.scores);
    assert_eq!(first.cleaned, second.cleaned);
    assert_eq!(first.correlations, second.correlations);
    assert!(first.correlations["Rating"].unwrap() > 0.0);
}
