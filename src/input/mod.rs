//! Comment intake
//!
//! Two input shapes are supported: pasted text with one comment per line,
//! and CSV tables where one column holds the comments and others hold
//! numeric ratings.

use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::error::{AnalyzerErrorTrait, ErrorCategory};
use crate::models::{CellValue, Comment, RatingColumn};

static EMPTY_CELL: CellValue = CellValue::Empty;

/// Input errors
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown column '{name}' (available: {})", .available.join(", "))]
    UnknownColumn { name: String, available: Vec<String> },
}

impl AnalyzerErrorTrait for InputError {
    fn is_recoverable(&self) -> bool {
        false
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Open { .. } => ErrorCategory::Storage,
            Self::Csv(_) | Self::UnknownColumn { .. } => ErrorCategory::Input,
        }
    }
}

/// Split pasted text into comments, one per non-blank line
///
/// Lines are kept as typed apart from a trailing carriage return.
///
/// # Examples
///
/// ```
/// use feedback_analyzer::input::split_pasted_comments;
///
/// let comments = split_pasted_comments("Great labs\n\n  \nToo fast\r\n");
/// assert_eq!(comments.len(), 2);
/// assert_eq!(comments[1].as_text(), Some("Too fast"));
/// ```
#[must_use]
pub fn split_pasted_comments(text: &str) -> Vec<Comment> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(Comment::from)
        .collect()
}

/// A parsed table with typed cells
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    /// Rows in file order, each padded to the header width
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Read a table from CSV with a header row
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, InputError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut row: Vec<CellValue> = record.iter().map(CellValue::parse).collect();
            row.resize(headers.len().max(row.len()), CellValue::Empty);
            rows.push(row);
        }

        tracing::debug!(columns = headers.len(), rows = rows.len(), "Parsed CSV table");
        Ok(Self { headers, rows })
    }

    /// Read a table from a CSV file
    pub fn from_csv_path(path: &Path) -> Result<Self, InputError> {
        let file = File::open(path).map_err(|source| InputError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_csv_reader(file)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by exact header name
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cells of one column, top to bottom
    pub fn column(&self, index: usize) -> impl Iterator<Item = &CellValue> + '_ {
        self.rows
            .iter()
            .map(move |row| row.get(index).unwrap_or(&EMPTY_CELL))
    }

    /// The comments of this table
    ///
    /// Uses the column picked by [`select_comment_column`]; empty cells
    /// become missing comments so rows stay aligned with rating columns.
    /// Without a text-like column every non-empty cell is taken, row by row.
    #[must_use]
    pub fn comments(&self) -> Vec<Comment> {
        match select_comment_column(self) {
            Some(index) => {
                tracing::debug!(column = %self.headers[index], "Using comment column");
                self.column(index).map(Comment::from).collect()
            }
            None => {
                tracing::debug!("No text column found, flattening all cells");
                self.rows
                    .iter()
                    .flatten()
                    .filter(|cell| !cell.is_empty())
                    .map(|cell| Comment::text(cell.to_string()))
                    .collect()
            }
        }
    }

    /// A column as ratings, `None` when no header matches
    #[must_use]
    pub fn rating_column(&self, name: &str) -> Option<RatingColumn> {
        let index = self.column_index(name)?;
        Some(RatingColumn::new(name, self.column(index).cloned()))
    }

    /// Like [`Table::rating_column`], but an unknown name is an error
    pub fn require_rating_column(&self, name: &str) -> Result<RatingColumn, InputError> {
        self.rating_column(name)
            .ok_or_else(|| InputError::UnknownColumn {
                name: name.to_string(),
                available: self.headers.clone(),
            })
    }
}

/// Pick the column that holds free-text comments
///
/// Returns the first column with at least one non-empty cell where more
/// than half of the non-empty cells are non-numeric text.
#[must_use]
pub fn select_comment_column(table: &Table) -> Option<usize> {
    (0..table.headers.len()).find(|&index| {
        let (filled, text) = table
            .column(index)
            .filter(|cell| !cell.is_empty())
            .fold((0usize, 0usize), |(filled, text), cell| {
                (filled + 1, text + usize::from(cell.is_text()))
            });
        filled > 0 && text * 2 > filled
    })
}
