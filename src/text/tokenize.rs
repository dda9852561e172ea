//! Word tokenization for comment normalization
//!
//! Two strategies are available:
//! - [`BertWordTokenizer`] - Unicode-aware split on whitespace and punctuation,
//!   backed by the HuggingFace `tokenizers` pre-tokenizer
//! - [`WhitespaceTokenizer`] - plain whitespace split, also used as the
//!   fallback whenever the primary tokenizer fails

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokenizers::pre_tokenizers::bert::BertPreTokenizer;
use tokenizers::{OffsetReferential, OffsetType, PreTokenizedString, PreTokenizer};

/// Tokenizer failure, always recovered by the caller
#[derive(Debug, Error)]
pub enum TokenizeError {
    #[error("pre-tokenizer failed: {0}")]
    Backend(String),
}

/// Which word tokenizer to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    #[default]
    Bert,
    Whitespace,
}

/// Splits text into word tokens
pub trait WordTokenizer: Send + Sync {
    /// Tokenize text into words
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizeError>;

    /// Tokenizer name for logging
    fn name(&self) -> &'static str;
}

/// Split on Unicode whitespace
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Infallible split, used directly by fallbacks
    pub fn split(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }
}

impl WordTokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizeError> {
        Ok(Self::split(text))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

/// BERT-style pre-tokenization: whitespace, punctuation and CJK characters
/// become token boundaries
#[derive(Debug, Default, Clone, Copy)]
pub struct BertWordTokenizer;

impl WordTokenizer for BertWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizeError> {
        let mut pretokenized = PreTokenizedString::from(text);
        BertPreTokenizer
            .pre_tokenize(&mut pretokenized)
            .map_err(|e| TokenizeError::Backend(e.to_string()))?;

        Ok(pretokenized
            .get_splits(OffsetReferential::Original, OffsetType::Byte)
            .into_iter()
            .map(|(split, _, _)| split.to_string())
            .filter(|split| !split.is_empty())
            .collect())
    }

    fn name(&self) -> &'static str {
        "bert"
    }
}

/// Build the tokenizer for a configured kind
#[must_use]
pub fn build_tokenizer(kind: TokenizerKind) -> Box<dyn WordTokenizer> {
    match kind {
        TokenizerKind::Bert => Box::new(BertWordTokenizer),
        TokenizerKind::Whitespace => Box::new(WhitespaceTokenizer),
    }
}
