//! End-to-end analysis of one batch of comments

use chrono::Utc;
use std::sync::Arc;

use crate::analytics::{correlate, interpret};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{AnalysisReport, AnalysisRequest};
use crate::sentiment::SentimentScorer;
use crate::text::{LinguisticResources, TextNormalizer};
use crate::visualize::WordCloudRenderer;

/// Runs normalization, scoring, word cloud, interpretation and correlation
///
/// Resources are loaded once in [`FeedbackAnalyzer::new`] and reused for
/// every call to [`FeedbackAnalyzer::analyze`].
///
/// # Example
///
/// ```
/// use feedback_analyzer::config::Config;
/// use feedback_analyzer::models::{AnalysisRequest, RatingColumn};
/// use feedback_analyzer::pipeline::FeedbackAnalyzer;
///
/// let analyzer = FeedbackAnalyzer::new(&Config::default()).unwrap();
/// let request = AnalysisRequest::new("Biology")
///     .with_comments(["Great labs", "Boring lectures", "Helpful tutor"])
///     .with_rating(RatingColumn::new("Rating", [5.0, 2.0, 4.0]));
///
/// let report = analyzer.analyze(request).unwrap();
/// assert_eq!(report.scores.len(), 3);
/// assert!(report.correlations["Rating"].is_some());
/// ```
#[derive(Debug)]
pub struct FeedbackAnalyzer {
    normalizer: TextNormalizer,
    scorer: SentimentScorer,
    renderer: WordCloudRenderer,
    max_words: usize,
}

impl FeedbackAnalyzer {
    /// Build the analyzer from configuration
    ///
    /// # Errors
    /// [`Error::Config`] when the configuration fails validation.
    pub fn new(config: &Config) -> Result<Self> {
        config
            .validate()
            .map_err(|e| Error::config(format!("{e:#}")))?;

        let resources = Arc::new(LinguisticResources::from_config(&config.analysis));
        let normalizer = TextNormalizer::new(resources);
        let scorer = SentimentScorer::from_lexicon_path(config.analysis.lexicon_path.as_deref());
        let renderer = WordCloudRenderer::new(config.wordcloud.clone())?;

        Ok(Self {
            normalizer,
            scorer,
            renderer,
            max_words: config.wordcloud.max_words,
        })
    }

    #[must_use]
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    #[must_use]
    pub fn scorer(&self) -> &SentimentScorer {
        &self.scorer
    }

    #[must_use]
    pub fn renderer(&self) -> &WordCloudRenderer {
        &self.renderer
    }

    /// Analyze one batch
    ///
    /// Scores are computed on the raw comments, the word cloud on the
    /// cleaned ones. The interpretation does not include ratings; rating
    /// correlations are reported per column instead.
    ///
    /// # Errors
    /// Fails only when the word cloud cannot be saved, or when the text has
    /// no words and the empty-cloud policy is `reject`.
    pub fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisReport> {
        let AnalysisRequest {
            subject,
            comments,
            ratings,
            wordcloud_path,
        } = request;

        tracing::info!(
            subject = %subject,
            comments = comments.len(),
            ratings = ratings.len(),
            "Analyzing feedback"
        );

        let cleaned = self.normalizer.normalize_all(&comments);
        let (scores, summary) = self.scorer.score(&comments);

        let cloud = self
            .renderer
            .render(&cleaned.join(" "), self.max_words, wordcloud_path.as_deref())?;

        let interpretations = interpret(&scores, None);
        let correlations = correlate(&scores, &ratings);

        tracing::info!(
            subject = %subject,
            mean = summary.mean,
            words = cloud.words.len(),
            "Analysis complete"
        );

        Ok(AnalysisReport {
            subject,
            summary,
            scores,
            cleaned,
            interpretations,
            correlations,
            top_words: cloud.frequencies,
            wordcloud_path,
            generated_at: Utc::now(),
        })
    }
}
