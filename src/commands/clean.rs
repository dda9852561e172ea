use feedback_analyzer::config::Config;
use feedback_analyzer::text::{LinguisticResources, TextNormalizer};
use std::sync::Arc;

pub fn clean(config: &Config, text: &str) {
    let resources = LinguisticResources::from_config(&config.analysis);
    let normalizer = TextNormalizer::new(Arc::new(resources));
    println!("{}", normalizer.normalize(text));
}
