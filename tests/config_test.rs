//! Tests for config module

use feedback_analyzer::config::Config;
use feedback_analyzer::text::{LemmatizerKind, StopwordSource, TokenizerKind};
use feedback_analyzer::visualize::EmptyCloudPolicy;
use serial_test::serial;
use std::path::{Path, PathBuf};

const ENV_VARS: &[&str] = &[
    "FEEDBACK_STOPWORDS",
    "FEEDBACK_STOPWORDS_PATH",
    "FEEDBACK_TOKENIZER",
    "FEEDBACK_LEMMATIZER",
    "FEEDBACK_WORDCLOUD_MAX_WORDS",
    "FEEDBACK_WORDCLOUD_EMPTY",
    "FEEDBACK_WORDCLOUD_SEED",
    "FEEDBACK_WORDCLOUD_COLLOCATIONS",
    "FEEDBACK_OUTPUT_DIR",
    "FEEDBACK_LOG_LEVEL",
];

fn clear_env() {
    for var in ENV_VARS {
        std::env::remove_var(var);
    }
}

#[test]
fn test_config_file_exists() {
    let config_path = Path::new("config.toml");
    assert!(
        config_path.exists(),
        "config.toml should exist in project root"
    );
}

#[test]
fn test_config_toml_matches_defaults() {
    let config = Config::from_file(Path::new("config.toml")).expect("config.toml should parse");
    assert!(config.validate().is_ok());

    let defaults = Config::default();
    assert_eq!(config.wordcloud.max_words, defaults.wordcloud.max_words);
    assert_eq!(config.wordcloud.width, defaults.wordcloud.width);
    assert_eq!(config.wordcloud.empty_text, EmptyCloudPolicy::Blank);
    assert_eq!(config.analysis.tokenizer, TokenizerKind::Bert);
    assert_eq!(config.output.dir, PathBuf::from("output"));
}

#[test]
fn test_malformed_config_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[wordcloud]\nmax_words = \"many\"\n").unwrap();

    let err = Config::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse TOML config file"));
}

#[test]
fn test_load_rejects_invalid_values() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("invalid.toml");
    std::fs::write(&path, "[wordcloud]\nrelative_scaling = 1.5\n").unwrap();

    assert!(Config::load(Some(&path)).is_err());

    std::fs::write(&path, "[wordcloud]\nmin_font_size = 0\n").unwrap();
    let err = Config::load(Some(&path)).unwrap_err();
    assert!(format!("{err:#}").contains("min_font_size"));
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();
    let config = Config::from_env().unwrap();
    assert_eq!(config.analysis.stopwords, StopwordSource::Builtin);
    assert_eq!(config.wordcloud.max_words, 100);
    assert_eq!(config.logging.level, "info");
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    std::env::set_var("FEEDBACK_LEMMATIZER", "Snowball");
    std::env::set_var("FEEDBACK_WORDCLOUD_MAX_WORDS", "30");
    std::env::set_var("FEEDBACK_WORDCLOUD_EMPTY", "reject");
    std::env::set_var("FEEDBACK_OUTPUT_DIR", "/tmp/feedback");
    std::env::set_var("FEEDBACK_WORDCLOUD_COLLOCATIONS", "false");

    let config = Config::from_env().unwrap();
    clear_env();

    assert_eq!(config.analysis.lemmatizer, LemmatizerKind::Snowball);
    assert_eq!(config.wordcloud.max_words, 30);
    assert_eq!(config.wordcloud.empty_text, EmptyCloudPolicy::Reject);
    assert_eq!(config.output.dir, PathBuf::from("/tmp/feedback"));
    assert!(!config.wordcloud.collocations);
}

#[test]
#[serial]
fn test_from_env_ignores_malformed_values() {
    clear_env();
    std::env::set_var("FEEDBACK_WORDCLOUD_MAX_WORDS", "lots");
    std::env::set_var("FEEDBACK_TOKENIZER", "gpt");

    let config = Config::from_env().unwrap();
    clear_env();

    assert_eq!(config.wordcloud.max_words, 100);
    assert_eq!(config.analysis.tokenizer, TokenizerKind::Bert);
}
