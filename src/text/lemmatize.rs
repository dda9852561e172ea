//! Reducing tokens to a dictionary base form
//!
//! The default [`MorphyLemmatizer`] follows the noun detachment rules used
//! by WordNet's morphological processor, with an irregular-form table in
//! place of the dictionary lookup. [`SnowballLemmatizer`] is a more
//! aggressive alternative that also folds verb forms ("running" -> "run").

use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;
use thiserror::Error;

/// Lemmatizer failure, always recovered by passing tokens through
#[derive(Debug, Error)]
pub enum LemmatizeError {
    #[error("cannot lemmatize token {0:?}")]
    Unsupported(String),
}

/// Which lemmatizer to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LemmatizerKind {
    #[default]
    Morphy,
    Snowball,
    None,
}

/// Maps a lowercase token to its base form
pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, token: &str) -> Result<String, LemmatizeError>;

    /// Lemmatizer name for logging
    fn name(&self) -> &'static str;
}

/// Returns tokens unchanged
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThroughLemmatizer;

impl Lemmatizer for PassThroughLemmatizer {
    fn lemmatize(&self, token: &str) -> Result<String, LemmatizeError> {
        Ok(token.to_string())
    }

    fn name(&self) -> &'static str {
        "none"
    }
}

/// Irregular plurals and forms the suffix rules would get wrong
static IRREGULAR_NOUNS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("children", "child"),
        ("men", "man"),
        ("women", "woman"),
        ("people", "people"),
        ("mice", "mouse"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("geese", "goose"),
        ("data", "datum"),
        ("criteria", "criterion"),
        ("phenomena", "phenomenon"),
        ("curricula", "curriculum"),
        ("syllabi", "syllabus"),
        ("stimuli", "stimulus"),
        ("analyses", "analysis"),
        ("theses", "thesis"),
        ("hypotheses", "hypothesis"),
        ("crises", "crisis"),
        ("indices", "index"),
        ("matrices", "matrix"),
        ("appendices", "appendix"),
        ("quizzes", "quiz"),
        ("buses", "bus"),
        ("lives", "life"),
        ("wives", "wife"),
        ("knives", "knife"),
        ("leaves", "leaf"),
        ("halves", "half"),
        ("selves", "self"),
        ("shelves", "shelf"),
        ("movies", "movie"),
        ("cookies", "cookie"),
        ("series", "series"),
        ("species", "species"),
        ("news", "news"),
    ]
    .into_iter()
    .collect()
});

/// Words ending in "s" that are not plural nouns
const NON_PLURAL: &[&str] = &[
    "always", "perhaps", "sometimes", "whereas", "besides", "afterwards", "towards", "yes",
    "thus", "lens", "mathematics", "physics", "economics", "statistics", "ethics", "politics",
    "bias", "canvas", "atlas", "alias", "chaos", "pros", "cons", "species", "series", "news",
];

const MEN_NOT_PLURAL: &[&str] = &[
    "specimen", "abdomen", "omen", "amen", "acumen", "regimen", "stamen", "ramen",
];

/// Dictionary-free noun lemmatizer in the style of WordNet's morphy
#[derive(Debug, Default, Clone, Copy)]
pub struct MorphyLemmatizer;

impl MorphyLemmatizer {
    const MAX_PASSES: usize = 4;

    /// Apply one detachment rule, or none
    fn detach(word: &str) -> Option<String> {
        if let Some(base) = IRREGULAR_NOUNS.get(word) {
            return (*base != word).then(|| (*base).to_string());
        }
        if word.len() <= 3 || NON_PLURAL.contains(&word) {
            return None;
        }

        if word.ends_with("sses")
            || word.ends_with("xes")
            || word.ends_with("ches")
            || word.ends_with("shes")
        {
            return Some(word[..word.len() - 2].to_string());
        }
        if word.len() > 4 && word.ends_with("ies") {
            return Some(format!("{}y", &word[..word.len() - 3]));
        }
        if word.ends_with("men") && !MEN_NOT_PLURAL.contains(&word) {
            return Some(format!("{}man", &word[..word.len() - 3]));
        }
        if word.ends_with('s') && !Self::has_singular_s_ending(word) {
            return Some(word[..word.len() - 1].to_string());
        }
        None
    }

    fn has_singular_s_ending(word: &str) -> bool {
        ["ss", "us", "is", "ous", "ics"]
            .iter()
            .any(|suffix| word.ends_with(suffix))
    }
}

impl Lemmatizer for MorphyLemmatizer {
    fn lemmatize(&self, token: &str) -> Result<String, LemmatizeError> {
        if !token.is_ascii() {
            // Rules are byte-offset based
            return Ok(token.to_string());
        }

        // Run to a fixed point so lemmatizing a lemma is a no-op
        let mut current = token.to_string();
        for _ in 0..Self::MAX_PASSES {
            match Self::detach(&current) {
                Some(next) => current = next,
                None => break,
            }
        }
        Ok(current)
    }

    fn name(&self) -> &'static str {
        "morphy"
    }
}

/// English Snowball stemmer used as a lemmatizer
pub struct SnowballLemmatizer {
    stemmer: Stemmer,
}

impl SnowballLemmatizer {
    #[must_use]
    pub fn english() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl std::fmt::Debug for SnowballLemmatizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowballLemmatizer").finish_non_exhaustive()
    }
}

impl Lemmatizer for SnowballLemmatizer {
    fn lemmatize(&self, token: &str) -> Result<String, LemmatizeError> {
        Ok(self.stemmer.stem(token).into_owned())
    }

    fn name(&self) -> &'static str {
        "snowball"
    }
}

/// Build the lemmatizer for a configured kind
#[must_use]
pub fn build_lemmatizer(kind: LemmatizerKind) -> Box<dyn Lemmatizer> {
    match kind {
        LemmatizerKind::Morphy => Box::new(MorphyLemmatizer),
        LemmatizerKind::Snowball => Box::new(SnowballLemmatizer::english()),
        LemmatizerKind::None => Box::new(PassThroughLemmatizer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemma(word: &str) -> String {
        MorphyLemmatizer.lemmatize(word).unwrap()
    }

    #[test]
    fn test_regular_plurals() {
        assert_eq!(lemma("lectures"), "lecture");
        assert_eq!(lemma("assignments"), "assignment");
        assert_eq!(lemma("classes"), "class");
        assert_eq!(lemma("boxes"), "box");
        assert_eq!(lemma("sketches"), "sketch");
        assert_eq!(lemma("activities"), "activity");
    }

    #[test]
    fn test_irregular_plurals() {
        assert_eq!(lemma("children"), "child");
        assert_eq!(lemma("women"), "woman");
        assert_eq!(lemma("criteria"), "criterion");
        assert_eq!(lemma("quizzes"), "quiz");
        assert_eq!(lemma("analyses"), "analysis");
    }

    #[test]
    fn test_singular_words_untouched() {
        assert_eq!(lemma("class"), "class");
        assert_eq!(lemma("campus"), "campus");
        assert_eq!(lemma("analysis"), "analysis");
        assert_eq!(lemma("various"), "various");
        assert_eq!(lemma("always"), "always");
        assert_eq!(lemma("bus"), "bus");
        assert_eq!(lemma("visit"), "visit");
        assert_eq!(lemma("specimen"), "specimen");
    }

    #[test]
    fn test_fixed_point() {
        for word in ["womens", "classes", "lectures", "series", "data", "ties"] {
            let once = lemma(word);
            assert_eq!(lemma(&once), once, "lemma of {word} is not stable");
        }
    }

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(lemma("cafés"), "cafés");
    }

    #[test]
    fn test_snowball_folds_verbs() {
        let lemmatizer = SnowballLemmatizer::english();
        assert_eq!(lemmatizer.lemmatize("running").unwrap(), "run");
    }

    #[test]
    fn test_pass_through() {
        assert_eq!(PassThroughLemmatizer.lemmatize("lectures").unwrap(), "lectures");
    }
}
