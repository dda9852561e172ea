use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use feedback_analyzer::config::Config;
use feedback_analyzer::models::SentimentSummary;
use feedback_analyzer::sentiment::SentimentScorer;

use super::read_pasted;

#[derive(Serialize)]
struct ScoreOutput {
    scores: Vec<f64>,
    summary: SentimentSummary,
}

pub fn score(config: &Config, input: &Path) -> Result<()> {
    let comments = read_pasted(input)?;
    let scorer = SentimentScorer::from_lexicon_path(config.analysis.lexicon_path.as_deref());
    let (scores, summary) = scorer.score(&comments);

    let json = serde_json::to_string_pretty(&ScoreOutput { scores, summary })
        .context("Failed to serialize scores")?;
    println!("{json}");
    Ok(())
}
