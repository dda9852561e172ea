//! Tests for comment normalization

use feedback_analyzer::config::AnalysisConfig;
use feedback_analyzer::models::Comment;
use feedback_analyzer::text::{
    LemmatizerKind, LinguisticResources, StopwordSource, TextNormalizer, TokenizerKind,
};
use proptest::prelude::*;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

fn normalizer_from(config: &AnalysisConfig) -> TextNormalizer {
    TextNormalizer::new(Arc::new(LinguisticResources::from_config(config)))
}

#[test]
fn test_normalize_typical_feedback() {
    let normalizer = TextNormalizer::default();
    assert_eq!(
        normalizer.normalize("The professor's explanations were REALLY clear; quizzes felt fair."),
        "professor explanation really clear quiz felt fair"
    );
}

#[test]
fn test_normalize_strips_links_and_emails() {
    let normalizer = TextNormalizer::default();
    assert_eq!(normalizer.normalize("Visit https://x.com now!!!"), "visit");
    assert_eq!(normalizer.normalize("see www.course.org or ta@uni.edu"), "see");
}

#[test]
fn test_normalize_all_preserves_order_and_missing() {
    let normalizer = TextNormalizer::default();
    let comments = vec![
        Comment::text("Great labs"),
        Comment::Missing,
        Comment::text("the"),
    ];
    assert_eq!(normalizer.normalize_all(&comments), vec!["great lab", "", ""]);
}

#[test]
fn test_whitespace_tokenizer_and_no_lemmatizer() {
    let config = AnalysisConfig {
        tokenizer: TokenizerKind::Whitespace,
        lemmatizer: LemmatizerKind::None,
        ..Default::default()
    };
    let normalizer = normalizer_from(&config);
    assert_eq!(normalizer.normalize("The labs, the lectures"), "labs lectures");
}

#[test]
fn test_snowball_lemmatizer() {
    let config = AnalysisConfig {
        lemmatizer: LemmatizerKind::Snowball,
        ..Default::default()
    };
    let normalizer = normalizer_from(&config);
    assert_eq!(normalizer.normalize("running labs"), "run lab");
}

#[test]
fn test_custom_stopword_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# course words").unwrap();
    writeln!(file, "course").unwrap();
    writeln!(file, "lecture").unwrap();

    let config = AnalysisConfig {
        stopwords: StopwordSource::File,
        stopwords_path: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let normalizer = normalizer_from(&config);
    assert_eq!(normalizer.normalize("The course lectures were fun"), "the were fun");
}

#[test]
fn test_no_stopwords() {
    let config = AnalysisConfig {
        stopwords: StopwordSource::None,
        ..Default::default()
    };
    let normalizer = normalizer_from(&config);
    assert_eq!(normalizer.normalize("It was fun"), "it was fun");
}

proptest! {
    #[test]
    fn prop_normalize_is_idempotent(text in "[a-z]{1,12}( [a-z]{1,12}){0,8}") {
        let normalizer = TextNormalizer::default();
        let once = normalizer.normalize(&text);
        prop_assert_eq!(normalizer.normalize(&once), once.clone());
    }

    #[test]
    fn prop_normalize_mixed_ascii_is_idempotent(text in "[a-zA-Z ,.!?']{0,80}") {
        let normalizer = TextNormalizer::default();
        let once = normalizer.normalize(&text);
        prop_assert_eq!(normalizer.normalize(&once), once.clone());
    }

    #[test]
    fn prop_normalized_output_is_clean(text in "\\PC{0,60}") {
        let normalizer = TextNormalizer::default();
        let out = normalizer.normalize(&text);
        prop_assert!(!out.starts_with(' ') && !out.ends_with(' '));
        prop_assert!(!out.contains("  "));
        prop_assert!(out.split(' ').filter(|w| !w.is_empty()).all(|w| w.chars().all(char::is_alphabetic)));
    }
}
