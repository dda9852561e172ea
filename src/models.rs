// Core data structures for the feedback analyzer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// A single feedback comment
///
/// Comments arrive from loosely typed sources (pasted text, spreadsheet
/// cells, JSON payloads). Anything that is not text is coerced to its
/// string form; null-like values become [`Comment::Missing`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Comment {
    /// Comment text, possibly empty
    Text(String),
    /// Missing or null entry
    Missing,
}

impl Comment {
    /// Create a text comment
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Borrow the comment text, `None` for a missing entry
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Missing => None,
        }
    }

    /// Check whether this is a missing entry
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Missing => Ok(()),
        }
    }
}

impl From<&str> for Comment {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Comment {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Option<String>> for Comment {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Missing, Self::Text)
    }
}

impl From<Comment> for Option<String> {
    fn from(comment: Comment) -> Self {
        match comment {
            Comment::Text(text) => Some(text),
            Comment::Missing => None,
        }
    }
}

impl From<f64> for Comment {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            Self::Missing
        } else {
            Self::Text(value.to_string())
        }
    }
}

impl From<i64> for Comment {
    fn from(value: i64) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<serde_json::Value> for Comment {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Missing,
            serde_json::Value::String(text) => Self::Text(text),
            other => Self::Text(other.to_string()),
        }
    }
}

impl From<&CellValue> for Comment {
    fn from(cell: &CellValue) -> Self {
        match cell {
            CellValue::Empty => Self::Missing,
            CellValue::Text(text) => Self::Text(text.clone()),
            CellValue::Number(value) => Self::from(*value),
        }
    }
}

/// Raw value of a tabular cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Numeric cell
    Number(f64),
    /// Free-text cell
    Text(String),
    /// Blank or null cell
    Empty,
}

impl CellValue {
    /// Parse a raw field the way spreadsheet readers type it
    ///
    /// Blank fields are [`CellValue::Empty`], fields that parse as a float
    /// after trimming are [`CellValue::Number`], everything else is text.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if !value.is_nan() => Self::Number(value),
            _ => Self::Text(raw.to_string()),
        }
    }

    /// Coerce to a finite number, `None` when the cell is not numeric
    #[must_use]
    pub fn to_numeric(&self) -> Option<f64> {
        let value = match self {
            Self::Number(value) => *value,
            Self::Text(text) => text.trim().parse::<f64>().ok()?,
            Self::Empty => return None,
        };
        value.is_finite().then_some(value)
    }

    /// Check whether the cell holds no value
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Check whether the cell holds text that is not numeric
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_)) && self.to_numeric().is_none()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
            Self::Empty => Ok(()),
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            Self::Empty
        } else {
            Self::Number(value)
        }
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Option<f64>> for CellValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Empty, Self::from)
    }
}

impl From<serde_json::Value> for CellValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Empty,
            serde_json::Value::Bool(flag) => Self::Number(if flag { 1.0 } else { 0.0 }),
            serde_json::Value::Number(number) => number.as_f64().map_or(Self::Empty, Self::Number),
            serde_json::Value::String(text) => Self::Text(text),
            other => Self::Text(other.to_string()),
        }
    }
}

/// Named numeric rating series aligned by row with the comments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingColumn {
    /// Column name, used as the key of the correlation result
    pub name: String,

    /// Raw cell values, row-aligned with the comments
    pub values: Vec<CellValue>,
}

impl RatingColumn {
    /// Create a rating column from anything convertible to cells
    pub fn new<I, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the column has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Numeric view of the column, non-numeric cells as `None`
    #[must_use]
    pub fn numeric_values(&self) -> Vec<Option<f64>> {
        self.values.iter().map(CellValue::to_numeric).collect()
    }
}

/// Correlation results keyed by rating column name; `None` means undefined
pub type Correlations = BTreeMap<String, Option<f64>>;

/// Aggregate statistics over a batch of polarity scores
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentSummary {
    /// Mean polarity, ignoring NaN entries
    pub mean: f64,

    /// Median polarity, ignoring NaN entries
    pub median: f64,

    /// Number of scores
    pub count: usize,

    /// Fraction of scores above zero
    pub positive_pct: f64,

    /// Fraction of scores below zero
    pub negative_pct: f64,

    /// Fraction of scores equal to zero
    pub neutral_pct: f64,
}

/// Input bundle for one analysis run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Label for the batch (course or subject name)
    pub subject: String,

    /// Raw comments in row order
    pub comments: Vec<Comment>,

    /// Rating columns to correlate against the sentiment scores
    pub ratings: Vec<RatingColumn>,

    /// Where to save the word cloud, if anywhere
    pub wordcloud_path: Option<PathBuf>,
}

impl AnalysisRequest {
    /// Create a request for a subject
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            ..Default::default()
        }
    }

    /// Set the comments
    #[must_use]
    pub fn with_comments<I, C>(mut self, comments: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Comment>,
    {
        self.comments = comments.into_iter().map(Into::into).collect();
        self
    }

    /// Add a rating column
    #[must_use]
    pub fn with_rating(mut self, column: RatingColumn) -> Self {
        self.ratings.push(column);
        self
    }

    /// Save the word cloud to a path
    #[must_use]
    pub fn with_wordcloud_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.wordcloud_path = Some(path.into());
        self
    }
}

/// A word and its frequency as drawn in the word cloud
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Result of one analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub subject: String,
    pub summary: SentimentSummary,
    pub scores: Vec<f64>,
    pub cleaned: Vec<String>,
    pub interpretations: Vec<String>,
    pub correlations: Correlations,
    pub top_words: Vec<WordCount>,
    pub wordcloud_path: Option<PathBuf>,
    pub generated_at: DateTime<Utc>,
}
