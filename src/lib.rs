//! feedback-analyzer - Student feedback analysis
//!
//! Cleans free-text course feedback, scores its sentiment, correlates the
//! scores with numeric ratings, draws a word cloud and summarizes the batch
//! in plain language.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and settings
//! - [`text`] - Comment normalization (stopwords, tokenizer, lemmatizer)
//! - [`sentiment`] - Lexicon-based polarity scoring and batch summaries
//! - [`analytics`] - Rating correlation and interpretation
//! - [`visualize`] - Word cloud layout and SVG rendering
//! - [`input`] - Pasted text and CSV intake
//! - [`pipeline`] - The end-to-end [`FeedbackAnalyzer`](pipeline::FeedbackAnalyzer)
//! - [`report`] - Markdown and JSON reports
//! - [`models`] - Core data structures and types
//! - [`utils`] - Common utilities and helpers
//!
//! # Example
//!
//! ```no_run
//! use feedback_analyzer::config::Config;
//! use feedback_analyzer::input::Table;
//! use feedback_analyzer::models::AnalysisRequest;
//! use feedback_analyzer::pipeline::FeedbackAnalyzer;
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let analyzer = FeedbackAnalyzer::new(&config)?;
//!
//!     let table = Table::from_csv_path(Path::new("survey.csv"))?;
//!     let mut request = AnalysisRequest::new("Biology").with_comments(table.comments());
//!     if let Some(column) = table.rating_column("Rating") {
//!         request = request.with_rating(column);
//!     }
//!
//!     let report = analyzer.analyze(request)?;
//!     for line in &report.interpretations {
//!         println!("{line}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod sentiment;
pub mod text;
pub mod utils;
pub mod visualize;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::analytics::{correlate, interpret};
    pub use crate::config::Config;
    pub use crate::error::{AnalyzerErrorTrait, Error, ErrorCategory, Result};
    pub use crate::input::{split_pasted_comments, Table};
    pub use crate::models::{AnalysisReport, AnalysisRequest, Comment, RatingColumn};
    pub use crate::pipeline::FeedbackAnalyzer;
    pub use crate::report::{ReportFormat, ReportWriter};
    pub use crate::sentiment::SentimentScorer;
    pub use crate::text::TextNormalizer;
    pub use crate::visualize::WordCloudRenderer;
}

// Direct re-exports for convenience
pub use models::{AnalysisReport, AnalysisRequest, Comment, RatingColumn, SentimentSummary};
