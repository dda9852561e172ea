//! Comment normalization
//!
//! Turns a raw feedback comment into a space-separated string of content
//! words: lowercase, no links or punctuation, no stopwords, lemmatized.
//!
//! # Architecture
//!
//! - [`LinguisticResources`] - stopwords, tokenizer and lemmatizer, built
//!   once and shared read-only
//! - [`TextNormalizer`] - the normalization pipeline over those resources
//!
//! Every stage that can fail has a fallback: a missing stopword file gives
//! an empty set, a tokenizer error falls back to whitespace splitting, and a
//! lemmatizer error leaves tokens unchanged. Normalization itself never fails.
//!
//! # Example
//!
//! ```
//! use feedback_analyzer::text::TextNormalizer;
//!
//! let normalizer = TextNormalizer::default();
//! assert_eq!(normalizer.normalize("Visit https://x.com now!!!"), "visit");
//! ```

pub mod lemmatize;
pub mod sanitize;
pub mod stopwords;
pub mod tokenize;

use std::sync::Arc;

use crate::config::AnalysisConfig;
use crate::models::Comment;

pub use lemmatize::{
    build_lemmatizer, LemmatizeError, Lemmatizer, LemmatizerKind, MorphyLemmatizer,
    PassThroughLemmatizer, SnowballLemmatizer,
};
pub use stopwords::{StopwordSource, Stopwords, ENGLISH_STOPWORDS};
pub use tokenize::{
    build_tokenizer, BertWordTokenizer, TokenizeError, TokenizerKind, WhitespaceTokenizer,
    WordTokenizer,
};

/// Process-wide linguistic resources
///
/// Built once from configuration; unavailable resources degrade here, at
/// construction time, rather than during normalization.
pub struct LinguisticResources {
    stopwords: Stopwords,
    tokenizer: Box<dyn WordTokenizer>,
    lemmatizer: Box<dyn Lemmatizer>,
}

impl LinguisticResources {
    /// Assemble resources from explicit parts
    pub fn new(
        stopwords: Stopwords,
        tokenizer: Box<dyn WordTokenizer>,
        lemmatizer: Box<dyn Lemmatizer>,
    ) -> Self {
        Self {
            stopwords,
            tokenizer,
            lemmatizer,
        }
    }

    /// Load resources described by the analysis configuration
    ///
    /// A stopword file that cannot be read yields an empty stopword set.
    pub fn from_config(config: &AnalysisConfig) -> Self {
        let stopwords = match config.stopwords {
            StopwordSource::Builtin => Stopwords::english(),
            StopwordSource::None => Stopwords::empty(),
            StopwordSource::File => match config.stopwords_path.as_deref() {
                Some(path) => Stopwords::from_file(path).unwrap_or_else(|e| {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Stopword file unavailable, continuing without stopwords"
                    );
                    Stopwords::empty()
                }),
                None => {
                    tracing::warn!("Stopword source is 'file' but no path is set");
                    Stopwords::empty()
                }
            },
        };

        let tokenizer = build_tokenizer(config.tokenizer);
        let lemmatizer = build_lemmatizer(config.lemmatizer);

        tracing::debug!(
            stopwords = stopwords.len(),
            tokenizer = tokenizer.name(),
            lemmatizer = lemmatizer.name(),
            "Linguistic resources loaded"
        );

        Self::new(stopwords, tokenizer, lemmatizer)
    }

    #[must_use]
    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    #[must_use]
    pub fn tokenizer(&self) -> &dyn WordTokenizer {
        self.tokenizer.as_ref()
    }

    #[must_use]
    pub fn lemmatizer(&self) -> &dyn Lemmatizer {
        self.lemmatizer.as_ref()
    }
}

impl Default for LinguisticResources {
    fn default() -> Self {
        Self::new(
            Stopwords::english(),
            Box::new(BertWordTokenizer),
            Box::new(MorphyLemmatizer),
        )
    }
}

impl std::fmt::Debug for LinguisticResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinguisticResources")
            .field("stopwords", &self.stopwords.len())
            .field("tokenizer", &self.tokenizer.name())
            .field("lemmatizer", &self.lemmatizer.name())
            .finish()
    }
}

/// Normalizes comments against shared linguistic resources
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    resources: Arc<LinguisticResources>,
}

impl TextNormalizer {
    #[must_use]
    pub fn new(resources: Arc<LinguisticResources>) -> Self {
        Self { resources }
    }

    /// Normalize one raw string
    ///
    /// Steps: lowercase and trim, delete links and e-mails, drop ASCII
    /// punctuation, tokenize, keep alphabetic non-stopwords, lemmatize,
    /// join with single spaces.
    pub fn normalize(&self, raw: &str) -> String {
        let lowered = raw.to_lowercase();
        let text = sanitize::strip_links(lowered.trim());
        let text = sanitize::strip_punctuation(&text);

        let tokens = self.tokenize(&text);
        let stopwords = self.resources.stopwords();
        let tokens: Vec<String> = tokens
            .into_iter()
            .filter(|t| sanitize::is_alphabetic_word(t) && !stopwords.contains(t))
            .collect();

        self.lemmatize(tokens)
            .into_iter()
            .filter(|lemma| !lemma.is_empty() && !stopwords.contains(lemma))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Normalize a comment; a missing comment normalizes to an empty string
    pub fn normalize_comment(&self, comment: &Comment) -> String {
        comment
            .as_text()
            .map(|text| self.normalize(text))
            .unwrap_or_default()
    }

    /// Normalize a batch of comments, preserving order
    pub fn normalize_all(&self, comments: &[Comment]) -> Vec<String> {
        comments.iter().map(|c| self.normalize_comment(c)).collect()
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        let tokenizer = self.resources.tokenizer();
        match tokenizer.tokenize(text) {
            Ok(tokens) => tokens,
            Err(e) => {
                tracing::debug!(
                    tokenizer = tokenizer.name(),
                    error = %e,
                    "Tokenizer failed, falling back to whitespace split"
                );
                WhitespaceTokenizer::split(text)
            }
        }
    }

    fn lemmatize(&self, tokens: Vec<String>) -> Vec<String> {
        let lemmatizer = self.resources.lemmatizer();
        let lemmas: Result<Vec<String>, LemmatizeError> =
            tokens.iter().map(|t| lemmatizer.lemmatize(t)).collect();

        match lemmas {
            Ok(lemmas) => lemmas,
            Err(e) => {
                tracing::debug!(
                    lemmatizer = lemmatizer.name(),
                    error = %e,
                    "Lemmatizer failed, keeping tokens unchanged"
                );
                tokens
            }
        }
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(Arc::new(LinguisticResources::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingTokenizer;

    impl WordTokenizer for FailingTokenizer {
        fn tokenize(&self, _text: &str) -> Result<Vec<String>, TokenizeError> {
            Err(TokenizeError::Backend("model not loaded".to_string()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    struct FailingLemmatizer;

    impl Lemmatizer for FailingLemmatizer {
        fn lemmatize(&self, token: &str) -> Result<String, LemmatizeError> {
            Err(LemmatizeError::Unsupported(token.to_string()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    fn normalizer_with(
        tokenizer: Box<dyn WordTokenizer>,
        lemmatizer: Box<dyn Lemmatizer>,
    ) -> TextNormalizer {
        TextNormalizer::new(Arc::new(LinguisticResources::new(
            Stopwords::english(),
            tokenizer,
            lemmatizer,
        )))
    }

    #[test]
    fn test_normalize_url_and_punctuation() {
        let normalizer = TextNormalizer::default();
        assert_eq!(normalizer.normalize("Visit https://x.com now!!!"), "visit");
    }

    #[test]
    fn test_normalize_removes_stopwords_and_lemmatizes() {
        let normalizer = TextNormalizer::default();
        assert_eq!(
            normalizer.normalize("  The Lectures were GREAT and the assignments helpful. "),
            "lecture great assignment helpful"
        );
    }

    #[test]
    fn test_normalize_drops_non_alphabetic_tokens() {
        let normalizer = TextNormalizer::default();
        assert_eq!(normalizer.normalize("CS101 had 3 quizzes"), "quiz");
    }

    #[test]
    fn test_normalize_email() {
        let normalizer = TextNormalizer::default();
        assert_eq!(normalizer.normalize("Email prof@uni.edu for slides"), "email slide");
    }

    #[test]
    fn test_normalize_empty_result() {
        let normalizer = TextNormalizer::default();
        assert_eq!(normalizer.normalize("it was the"), "");
        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize("!!! ???"), "");
    }

    #[test]
    fn test_normalize_missing_comment() {
        let normalizer = TextNormalizer::default();
        assert_eq!(normalizer.normalize_comment(&Comment::Missing), "");
        assert_eq!(normalizer.normalize_comment(&Comment::from(4.0)), "");
    }

    #[test]
    fn test_tokenizer_failure_falls_back() {
        let normalizer = normalizer_with(Box::new(FailingTokenizer), Box::new(MorphyLemmatizer));
        assert_eq!(normalizer.normalize("Helpful labs"), "helpful lab");
    }

    #[test]
    fn test_lemmatizer_failure_passes_tokens_through() {
        let normalizer = normalizer_with(Box::new(BertWordTokenizer), Box::new(FailingLemmatizer));
        assert_eq!(normalizer.normalize("Helpful labs"), "helpful labs");
    }

    #[test]
    fn test_missing_stopword_file_degrades_to_empty_set() {
        let config = AnalysisConfig {
            stopwords: StopwordSource::File,
            stopwords_path: Some("/nonexistent/stopwords.txt".into()),
            ..Default::default()
        };
        let resources = LinguisticResources::from_config(&config);
        assert!(resources.stopwords().is_empty());

        let normalizer = TextNormalizer::new(Arc::new(resources));
        assert_eq!(normalizer.normalize("the labs"), "the lab");
    }

    #[test]
    fn test_lemma_that_is_a_stopword_is_dropped() {
        let normalizer = TextNormalizer::default();
        // "whys" survives the stopword filter but lemmatizes to "why"
        assert_eq!(normalizer.normalize("whys late"), "late");
    }
}
