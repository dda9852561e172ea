//! Error scenario integration tests
//!
//! Tests failure modes and degraded behavior:
//! 1. Missing or malformed input files
//! 2. Missing linguistic resources
//! 3. Empty word clouds under both policies
//! 4. Unwritable output locations

use feedback_analyzer::config::Config;
use feedback_analyzer::error::{AnalyzerErrorTrait, Error, ErrorCategory};
use feedback_analyzer::input::{InputError, Table};
use feedback_analyzer::models::{AnalysisRequest, Comment, RatingColumn};
use feedback_analyzer::pipeline::FeedbackAnalyzer;
use feedback_analyzer::text::StopwordSource;
use feedback_analyzer::visualize::{EmptyCloudPolicy, VisualizeError};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Input Errors
// ============================================================================

#[test]
fn test_missing_csv_file() {
    let err = Table::from_csv_path(Path::new("/nonexistent/survey.csv")).unwrap_err();
    assert!(matches!(err, InputError::Open { .. }));

    let unified: Error = err.into();
    assert_eq!(unified.category(), ErrorCategory::Storage);
}

#[test]
fn test_unknown_rating_column() {
    let table = Table::from_csv_reader("Comment,Rating\ngood,5\n".as_bytes()).unwrap();
    let err = table.require_rating_column("Score").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unknown column 'Score' (available: Comment, Rating)"
    );
}

// ============================================================================
// Degraded Resources
// ============================================================================

#[test]
fn test_missing_stopword_file_still_analyzes() {
    let mut config = Config::default();
    config.analysis.stopwords = StopwordSource::File;
    config.analysis.stopwords_path = Some(PathBuf::from("/nonexistent/stopwords.txt"));

    let analyzer = FeedbackAnalyzer::new(&config).unwrap();
    let report = analyzer
        .analyze(AnalysisRequest::new("AI").with_comments(["The labs were fun"]))
        .unwrap();
    assert_eq!(report.cleaned, vec!["the lab were fun"]);
}

#[test]
fn test_missing_lexicon_file_uses_builtin() {
    let mut config = Config::default();
    config.analysis.lexicon_path = Some(PathBuf::from("/nonexistent/lexicon.json"));

    let analyzer = FeedbackAnalyzer::new(&config).unwrap();
    assert!(analyzer.scorer().polarity("great") > 0.0);
}

#[test]
fn test_uncoercible_inputs_do_not_fail() {
    let analyzer = FeedbackAnalyzer::new(&Config::default()).unwrap();
    let request = AnalysisRequest::new("AI")
        .with_comments(vec![Comment::Missing, Comment::from(f64::NAN), Comment::from(3.5)])
        .with_rating(RatingColumn::new("Rating", ["x", "y", "z"]));

    let report = analyzer.analyze(request).unwrap();
    assert_eq!(report.scores, vec![0.0, 0.0, 0.0]);
    assert_eq!(report.correlations["Rating"], None);
}

// ============================================================================
// Word Cloud Errors
// ============================================================================

#[test]
fn test_empty_cloud_blank_by_default() {
    let analyzer = FeedbackAnalyzer::new(&Config::default()).unwrap();
    let report = analyzer
        .analyze(AnalysisRequest::new("AI").with_comments(["", "the and"]))
        .unwrap();
    assert!(report.top_words.is_empty());
}

#[test]
fn test_empty_cloud_rejected() {
    let mut config = Config::default();
    config.wordcloud.empty_text = EmptyCloudPolicy::Reject;

    let analyzer = FeedbackAnalyzer::new(&config).unwrap();
    let err = analyzer
        .analyze(AnalysisRequest::new("AI").with_comments(["", "the and"]))
        .unwrap_err();
    assert!(matches!(err, Error::Visualize(VisualizeError::NoWords)));
    assert!(!err.is_recoverable());
}

#[test]
fn test_unwritable_wordcloud_path() {
    let temp_dir = TempDir::new().unwrap();
    // A regular file where a directory is expected
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    let analyzer = FeedbackAnalyzer::new(&Config::default()).unwrap();
    let request = AnalysisRequest::new("AI")
        .with_comments(["Great labs"])
        .with_wordcloud_path(blocker.join("wc_AI.svg"));

    let err = analyzer.analyze(request).unwrap_err();
    assert!(matches!(err, Error::Visualize(VisualizeError::Save { .. })));
    assert_eq!(err.category(), ErrorCategory::Storage);
    assert!(err.is_recoverable());
}
