//! Configuration management for the feedback analyzer
//!
//! This module handles loading and validating configuration from environment variables,
//! TOML files, and command-line arguments.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::text::{LemmatizerKind, StopwordSource, TokenizerKind};
use crate::visualize::EmptyCloudPolicy;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text normalization and sentiment resources
    pub analysis: AnalysisConfig,

    /// Word cloud rendering
    pub wordcloud: WordCloudConfig,

    /// Output files
    pub output: OutputConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Linguistic resource configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Stopword source (builtin, file, none)
    pub stopwords: StopwordSource,

    /// Stopword list, one word per line; used when `stopwords = "file"`
    pub stopwords_path: Option<PathBuf>,

    /// Word tokenizer (bert, whitespace)
    pub tokenizer: TokenizerKind,

    /// Lemmatizer (morphy, snowball, none)
    pub lemmatizer: LemmatizerKind,

    /// JSON object of `word -> polarity` overrides for the sentiment lexicon
    pub lexicon_path: Option<PathBuf>,
}

/// Word cloud rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WordCloudConfig {
    /// Canvas width in pixels
    pub width: u32,

    /// Canvas height in pixels
    pub height: u32,

    /// Maximum number of words drawn
    pub max_words: usize,

    /// Background fill (any SVG color)
    pub background_color: String,

    /// Largest font size; defaults to the canvas height
    pub max_font_size: Option<u32>,

    /// Smallest font size a word may shrink to before placement stops
    pub min_font_size: u32,

    /// Share of words drawn horizontally (0.0 - 1.0)
    pub prefer_horizontal: f64,

    /// How strongly font size follows frequency (0.0 = rank only, 1.0 = linear)
    pub relative_scaling: f64,

    /// Padding around each word in pixels
    pub margin: u32,

    /// Seed for orientation and color choices
    pub seed: u64,

    /// CSS font family used in the SVG
    pub font_family: String,

    /// Word colors, picked at random per word
    pub palette: Vec<String>,

    /// What to do when the text has no countable words
    pub empty_text: EmptyCloudPolicy,

    /// Count frequent two-word phrases ("office hour") as single terms
    pub collocations: bool,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for reports and word clouds
    pub dir: PathBuf,

    /// Custom Handlebars template for Markdown reports
    pub report_template: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Default for WordCloudConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 200,
            max_words: 100,
            background_color: String::from("white"),
            max_font_size: None,
            min_font_size: 4,
            prefer_horizontal: 0.9,
            relative_scaling: 0.5,
            margin: 2,
            seed: 42,
            font_family: String::from("Helvetica, Arial, sans-serif"),
            palette: [
                "#440154", "#482878", "#3e4989", "#31688e", "#26828e", "#1f9e89", "#35b779",
                "#6ece58", "#b5de2b",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
            empty_text: EmptyCloudPolicy::default(),
            collocations: true,
        }
    }
}

impl WordCloudConfig {
    /// Largest font size, falling back to the canvas height
    #[must_use]
    pub fn effective_max_font_size(&self) -> u32 {
        self.max_font_size.unwrap_or(self.height)
    }

    /// Validate canvas, font and color settings
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            anyhow::bail!("word cloud width and height must be greater than 0");
        }

        if self.max_words == 0 {
            anyhow::bail!("max_words must be greater than 0");
        }

        if self.min_font_size == 0 {
            anyhow::bail!("min_font_size must be greater than 0");
        }

        if self.effective_max_font_size() < self.min_font_size {
            anyhow::bail!("max_font_size must not be smaller than min_font_size");
        }

        if !(0.0..=1.0).contains(&self.prefer_horizontal) {
            anyhow::bail!("prefer_horizontal must be between 0.0 and 1.0");
        }

        if !(0.0..=1.0).contains(&self.relative_scaling) {
            anyhow::bail!("relative_scaling must be between 0.0 and 1.0");
        }

        if self.palette.is_empty() {
            anyhow::bail!("palette must contain at least one color");
        }

        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("output"),
            report_template: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: String::from("text"),
        }
    }
}

/// Parse an environment variable, ignoring unset or malformed values
fn env_parse<T: FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.trim().parse::<T>().ok())
}

/// Parse an environment variable holding a lowercase enum name
fn env_choice<T: DeserializeOwned>(name: &str) -> Option<T> {
    let value = std::env::var(name).ok()?;
    serde_json::from_value(serde_json::Value::String(value.trim().to_lowercase())).ok()
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables keep their default values.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let analysis = AnalysisConfig {
            stopwords: env_choice("FEEDBACK_STOPWORDS").unwrap_or(defaults.analysis.stopwords),
            stopwords_path: std::env::var("FEEDBACK_STOPWORDS_PATH").ok().map(PathBuf::from),
            tokenizer: env_choice("FEEDBACK_TOKENIZER").unwrap_or(defaults.analysis.tokenizer),
            lemmatizer: env_choice("FEEDBACK_LEMMATIZER").unwrap_or(defaults.analysis.lemmatizer),
            lexicon_path: std::env::var("FEEDBACK_LEXICON_PATH").ok().map(PathBuf::from),
        };

        let wordcloud = WordCloudConfig {
            width: env_parse("FEEDBACK_WORDCLOUD_WIDTH").unwrap_or(defaults.wordcloud.width),
            height: env_parse("FEEDBACK_WORDCLOUD_HEIGHT").unwrap_or(defaults.wordcloud.height),
            max_words: env_parse("FEEDBACK_WORDCLOUD_MAX_WORDS")
                .unwrap_or(defaults.wordcloud.max_words),
            background_color: std::env::var("FEEDBACK_WORDCLOUD_BACKGROUND")
                .unwrap_or(defaults.wordcloud.background_color),
            seed: env_parse("FEEDBACK_WORDCLOUD_SEED").unwrap_or(defaults.wordcloud.seed),
            empty_text: env_choice("FEEDBACK_WORDCLOUD_EMPTY")
                .unwrap_or(defaults.wordcloud.empty_text),
            collocations: env_parse("FEEDBACK_WORDCLOUD_COLLOCATIONS")
                .unwrap_or(defaults.wordcloud.collocations),
            ..defaults.wordcloud
        };

        let output = OutputConfig {
            dir: std::env::var("FEEDBACK_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output.dir),
            report_template: std::env::var("FEEDBACK_REPORT_TEMPLATE")
                .ok()
                .map(PathBuf::from),
        };

        let logging = LoggingConfig {
            level: std::env::var("FEEDBACK_LOG_LEVEL").unwrap_or(defaults.logging.level),
            format: std::env::var("FEEDBACK_LOG_FORMAT").unwrap_or(defaults.logging.format),
        };

        Ok(Self {
            analysis,
            wordcloud,
            output,
            logging,
        })
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load from `path` when given, otherwise from the environment, then validate
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::from_env()?,
        };
        config.validate().context("Invalid configuration")?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.analysis.stopwords == StopwordSource::File && self.analysis.stopwords_path.is_none()
        {
            anyhow::bail!("stopwords_path is required when stopwords = \"file\"");
        }

        self.wordcloud.validate()?;

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            anyhow::bail!("log format must be 'text' or 'json'");
        }

        Ok(())
    }
}
