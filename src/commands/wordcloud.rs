use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

use feedback_analyzer::config::Config;
use feedback_analyzer::text::{LinguisticResources, TextNormalizer};
use feedback_analyzer::visualize::WordCloudRenderer;

use super::read_pasted;

pub fn wordcloud(
    config: &Config,
    input: &Path,
    output: &Path,
    max_words: Option<usize>,
) -> Result<()> {
    let comments = read_pasted(input)?;
    let normalizer = TextNormalizer::new(Arc::new(LinguisticResources::from_config(
        &config.analysis,
    )));
    let text = normalizer.normalize_all(&comments).join(" ");

    let renderer = WordCloudRenderer::new(config.wordcloud.clone())
        .context("Failed to load word cloud template")?;
    let cloud = renderer
        .render(
            &text,
            max_words.unwrap_or(config.wordcloud.max_words),
            Some(output),
        )
        .context("Failed to render word cloud")?;

    println!(
        "Drew {} of {} words to {}",
        cloud.words.len(),
        cloud.frequencies.len(),
        output.display()
    );
    Ok(())
}
