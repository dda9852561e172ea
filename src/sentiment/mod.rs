//! Lexicon-based sentiment scoring
//!
//! This module provides functionality for:
//! - Scoring the polarity of a single comment in [-1, 1]
//! - Scoring a batch of comments, with missing entries scored 0.0
//! - Summarizing a batch of scores (mean, median, polarity proportions)
//!
//! Scoring works on the raw comment text, not the normalized form, so that
//! negators and intensifiers ("not", "very") stay visible to the model.

pub mod lexicon;

use regex::Regex;
use statrs::statistics::{Data, Median, Statistics};
use std::path::Path;
use std::sync::LazyLock;

use crate::models::{Comment, SentimentSummary};

pub use lexicon::Lexicon;

static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}+(?:'\p{L}+)?").expect("Invalid regex pattern"));

/// How many following tokens a negator can reach
const NEGATION_SCOPE: usize = 3;

/// Applied to a negated sentiment word: flips the sign and dampens it
const NEGATION_FACTOR: f64 = -0.5;

/// Scores comment polarity against a [`Lexicon`]
#[derive(Debug, Clone, Default)]
pub struct SentimentScorer {
    lexicon: Lexicon,
}

impl SentimentScorer {
    #[must_use]
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Build a scorer from an optional lexicon override file
    ///
    /// An unreadable or malformed file leaves the built-in lexicon in place.
    pub fn from_lexicon_path(path: Option<&Path>) -> Self {
        let lexicon = match path {
            Some(path) => Lexicon::with_overrides_from_file(path).unwrap_or_else(|e| {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Lexicon overrides unavailable, using built-in lexicon"
                );
                Lexicon::builtin()
            }),
            None => Lexicon::builtin(),
        };
        Self::new(lexicon)
    }

    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Polarity of one text in [-1, 1]
    ///
    /// Each lexicon word contributes its prior polarity, scaled by directly
    /// preceding intensifiers and multiplied by -0.5 when a negator occurs
    /// within the previous three tokens. The result is the mean
    /// contribution, or 0.0 when the text has no sentiment words.
    ///
    /// # Examples
    ///
    /// ```
    /// use feedback_analyzer::sentiment::SentimentScorer;
    ///
    /// let scorer = SentimentScorer::default();
    /// assert!(scorer.polarity("The labs were great") > 0.0);
    /// assert!(scorer.polarity("The labs were not great") < 0.0);
    /// assert_eq!(scorer.polarity("Room 204 on Tuesdays"), 0.0);
    /// ```
    #[must_use]
    pub fn polarity(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase().replace('\u{2019}', "'");

        let mut contributions = Vec::new();
        let mut negation_left = 0usize;
        let mut intensity: Option<f64> = None;

        for token in WORD_REGEX.find_iter(&lowered).map(|m| m.as_str()) {
            if self.lexicon.is_negator(token) {
                negation_left = NEGATION_SCOPE;
                intensity = None;
                continue;
            }
            if let Some(factor) = self.lexicon.intensity(token) {
                intensity = Some(intensity.unwrap_or(1.0) * factor);
                continue;
            }
            if let Some(prior) = self.lexicon.polarity(token) {
                let mut value = (prior * intensity.unwrap_or(1.0)).clamp(-1.0, 1.0);
                if negation_left > 0 {
                    value *= NEGATION_FACTOR;
                }
                contributions.push(value);
                negation_left = 0;
                intensity = None;
                continue;
            }
            intensity = None;
            negation_left = negation_left.saturating_sub(1);
        }

        if contributions.is_empty() {
            return 0.0;
        }
        let mean = contributions.iter().sum::<f64>() / contributions.len() as f64;
        mean.clamp(-1.0, 1.0)
    }

    /// Polarity of a comment; missing comments score 0.0
    #[must_use]
    pub fn polarity_of(&self, comment: &Comment) -> f64 {
        comment.as_text().map_or(0.0, |text| self.polarity(text))
    }

    /// Score a batch of comments
    ///
    /// Returns one score per comment, in order, plus the batch summary.
    pub fn score(&self, comments: &[Comment]) -> (Vec<f64>, SentimentSummary) {
        let scores: Vec<f64> = comments.iter().map(|c| self.polarity_of(c)).collect();
        let summary = summarize(&scores);

        tracing::debug!(
            count = summary.count,
            mean = summary.mean,
            "Scored comment batch"
        );

        (scores, summary)
    }
}

/// Summarize a batch of polarity scores
///
/// Mean and median skip NaN entries and are 0.0 when nothing remains.
/// The three proportions are computed independently over all entries and
/// are all 0.0 for an empty batch.
#[must_use]
pub fn summarize(scores: &[f64]) -> SentimentSummary {
    let count = scores.len();
    if count == 0 {
        return SentimentSummary::default();
    }

    let valid: Vec<f64> = scores.iter().copied().filter(|s| !s.is_nan()).collect();
    let (mean, median) = if valid.is_empty() {
        (0.0, 0.0)
    } else {
        let mean = valid.iter().mean();
        let median = Data::new(valid).median();
        (mean, median)
    };

    let fraction = |predicate: fn(f64) -> bool| {
        scores.iter().filter(|&&s| predicate(s)).count() as f64 / count as f64
    };

    SentimentSummary {
        mean,
        median,
        count,
        positive_pct: fraction(|s| s > 0.0),
        negative_pct: fraction(|s| s < 0.0),
        neutral_pct: fraction(|s| s == 0.0),
    }
}
