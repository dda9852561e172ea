//! Polarity lexicon for feedback text
//!
//! Words carry a prior polarity in [-1, 1]. Intensifiers scale the next
//! sentiment word, negators flip and dampen it.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

/// Built-in word polarities, tuned for course and teaching feedback
const POLARITY: &[(&str, f64)] = &[
    // positive
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("outstanding", 0.9),
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("fantastic", 0.4),
    ("wonderful", 1.0),
    ("brilliant", 0.9),
    ("best", 1.0),
    ("better", 0.5),
    ("nice", 0.6),
    ("fine", 0.4),
    ("ok", 0.5),
    ("okay", 0.5),
    ("love", 0.5),
    ("loved", 0.7),
    ("like", 0.2),
    ("liked", 0.4),
    ("enjoy", 0.4),
    ("enjoyed", 0.5),
    ("enjoyable", 0.6),
    ("fun", 0.3),
    ("interesting", 0.5),
    ("engaging", 0.6),
    ("helpful", 0.6),
    ("useful", 0.3),
    ("clear", 0.4),
    ("organized", 0.4),
    ("informative", 0.5),
    ("knowledgeable", 0.6),
    ("supportive", 0.6),
    ("patient", 0.4),
    ("friendly", 0.4),
    ("approachable", 0.5),
    ("passionate", 0.5),
    ("inspiring", 0.7),
    ("motivating", 0.5),
    ("valuable", 0.6),
    ("practical", 0.3),
    ("relevant", 0.4),
    ("easy", 0.43),
    ("fair", 0.5),
    ("happy", 0.8),
    ("glad", 0.5),
    ("thanks", 0.2),
    ("thank", 0.2),
    ("perfect", 1.0),
    ("impressive", 1.0),
    ("effective", 0.6),
    ("well", 0.3),
    ("superb", 1.0),
    ("positive", 0.23),
    ("recommend", 0.4),
    ("improved", 0.3),
    // negative
    ("bad", -0.7),
    ("poor", -0.4),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("worst", -1.0),
    ("worse", -0.4),
    ("boring", -1.0),
    ("bored", -0.5),
    ("dull", -0.5),
    ("confusing", -0.3),
    ("confused", -0.4),
    ("unclear", -0.4),
    ("disorganized", -0.5),
    ("difficult", -0.5),
    ("hard", -0.29),
    ("tough", -0.39),
    ("frustrating", -0.6),
    ("frustrated", -0.6),
    ("stressful", -0.5),
    ("overwhelming", -0.4),
    ("useless", -0.5),
    ("pointless", -0.5),
    ("irrelevant", -0.4),
    ("rude", -0.3),
    ("unfair", -0.5),
    ("unhelpful", -0.5),
    ("slow", -0.3),
    ("rushed", -0.4),
    ("late", -0.3),
    ("hate", -0.8),
    ("hated", -0.9),
    ("dislike", -0.5),
    ("disappointing", -0.6),
    ("disappointed", -0.75),
    ("annoying", -0.8),
    ("waste", -0.2),
    ("wrong", -0.5),
    ("lacking", -0.3),
    ("monotonous", -0.4),
    ("tedious", -0.5),
    ("negative", -0.3),
    ("problem", -0.2),
    ("problems", -0.2),
    ("sad", -0.5),
    ("unprepared", -0.4),
];

/// Words that scale the polarity of the next sentiment word
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("highly", 1.3),
    ("super", 1.3),
    ("so", 1.2),
    ("too", 1.2),
    ("quite", 1.1),
    ("pretty", 1.1),
    ("fairly", 0.9),
    ("somewhat", 0.7),
    ("slightly", 0.5),
    ("bit", 0.6),
];

/// Words that flip the polarity of a following sentiment word
const NEGATORS: &[&str] = &["not", "no", "never", "nothing", "hardly", "barely", "neither", "nor"];

/// Contractions typed without the apostrophe
const NEGATED_CONTRACTIONS: &[&str] = &[
    "dont", "doesnt", "didnt", "isnt", "wasnt", "werent", "arent", "cant", "couldnt", "wouldnt",
    "shouldnt", "wont", "havent", "hasnt",
];

/// Word polarities plus modifier tables
#[derive(Debug, Clone)]
pub struct Lexicon {
    polarity: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
}

impl Lexicon {
    /// The built-in lexicon
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            polarity: POLARITY.iter().map(|&(w, p)| (w.to_string(), p)).collect(),
            intensifiers: INTENSIFIERS
                .iter()
                .map(|&(w, m)| (w.to_string(), m))
                .collect(),
        }
    }

    /// Built-in lexicon extended (or overridden) by a JSON object of
    /// `word -> polarity` entries
    pub fn with_overrides_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon file: {}", path.display()))?;
        let overrides: HashMap<String, f64> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse lexicon file: {}", path.display()))?;

        let mut lexicon = Self::builtin();
        lexicon.extend(overrides);
        Ok(lexicon)
    }

    /// Add or replace word polarities; values are clamped to [-1, 1]
    pub fn extend<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        for (word, polarity) in entries {
            if polarity.is_finite() {
                self.polarity
                    .insert(word.to_lowercase(), polarity.clamp(-1.0, 1.0));
            }
        }
    }

    /// Prior polarity of a word
    #[must_use]
    pub fn polarity(&self, word: &str) -> Option<f64> {
        self.polarity.get(word).copied()
    }

    /// Intensity multiplier of a modifier word
    #[must_use]
    pub fn intensity(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }

    /// Whether a word negates what follows
    #[must_use]
    pub fn is_negator(&self, word: &str) -> bool {
        NEGATORS.contains(&word) || word.ends_with("n't") || NEGATED_CONTRACTIONS.contains(&word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.polarity.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polarity.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}
