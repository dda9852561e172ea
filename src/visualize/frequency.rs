//! Word counting for the word cloud

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::WordCount;

static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w[\w']+").expect("Invalid regex pattern"));

/// Likelihood-ratio score a bigram must exceed to count as a phrase
pub const COLLOCATION_THRESHOLD: f64 = 30.0;

/// Lowercased word tokens, possessive `'s` dropped, numbers skipped
fn word_tokens(text: &str) -> Vec<String> {
    WORD_REGEX
        .find_iter(text)
        .filter_map(|m| {
            let lowered = m.as_str().to_lowercase();
            let word = lowered.strip_suffix("'s").unwrap_or(&lowered);
            (!word.is_empty() && !word.chars().all(|c| c.is_numeric())).then(|| word.to_string())
        })
        .collect()
}

fn count<I>(terms: I) -> HashMap<String, usize>
where
    I: IntoIterator<Item = String>,
{
    let mut counts = HashMap::new();
    for term in terms {
        *counts.entry(term).or_default() += 1;
    }
    counts
}

/// Fold plurals into an existing singular
///
/// Returns the merged counts and, for every original term, the term it
/// was counted under.
fn merge_plurals(
    mut counts: HashMap<String, usize>,
) -> (HashMap<String, usize>, HashMap<String, String>) {
    let mut standard: HashMap<String, String> =
        counts.keys().map(|k| (k.clone(), k.clone())).collect();

    let mut plurals: Vec<String> = counts
        .keys()
        .filter(|w| w.ends_with('s') && !w.ends_with("ss") && w.len() > 2)
        .cloned()
        .collect();
    plurals.sort();

    for plural in plurals {
        let singular = &plural[..plural.len() - 1];
        if counts.contains_key(singular) {
            if let Some(n) = counts.remove(&plural) {
                *counts.entry(singular.to_string()).or_default() += n;
                standard.insert(plural.clone(), singular.to_string());
            }
        }
    }

    (counts, standard)
}

fn sorted(counts: HashMap<String, usize>) -> Vec<WordCount> {
    let mut words: Vec<WordCount> = counts
        .into_iter()
        .filter(|&(_, count)| count > 0)
        .map(|(word, count)| WordCount::new(word, count))
        .collect();
    words.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    words
}

/// Count words in `text`, most frequent first
///
/// Words are lowercased, a trailing `'s` is dropped, and purely numeric
/// tokens are skipped. A plural ending in a single `s` is merged into its
/// singular when the singular also occurs. Ties are ordered alphabetically.
///
/// # Examples
///
/// ```
/// use feedback_analyzer::visualize::word_frequencies;
///
/// let counts = word_frequencies("lab labs Lab lecture");
/// assert_eq!(counts[0].word, "lab");
/// assert_eq!(counts[0].count, 3);
/// assert_eq!(counts[1].word, "lecture");
/// ```
#[must_use]
pub fn word_frequencies(text: &str) -> Vec<WordCount> {
    let (counts, _) = merge_plurals(count(word_tokens(text)));
    sorted(counts)
}

/// Count words and two-word phrases in `text`, most frequent first
///
/// Like [`word_frequencies`], but adjacent word pairs that occur together
/// far more often than chance (Dunning log-likelihood above
/// [`COLLOCATION_THRESHOLD`]) are counted as one phrase. Each phrase
/// occurrence is taken away from its two words; words left with no
/// occurrences are dropped.
///
/// # Examples
///
/// ```
/// use feedback_analyzer::visualize::term_frequencies;
///
/// let text = ["lab", "quiz", "exam", "tutor", "slide", "grade", "pace", "group"]
///     .iter()
///     .cycle()
///     .take(24)
///     .map(|w| format!("office hour {w}"))
///     .collect::<Vec<_>>()
///     .join(" ");
/// let counts = term_frequencies(&text);
/// assert_eq!(counts[0].word, "office hour");
/// assert!(counts.iter().all(|c| c.word != "office"));
/// ```
#[must_use]
pub fn term_frequencies(text: &str) -> Vec<WordCount> {
    let tokens = word_tokens(text);
    let total = tokens.len();

    let bigrams = count(tokens.windows(2).map(|pair| format!("{} {}", pair[0], pair[1])));
    let (bigrams, _) = merge_plurals(bigrams);
    let (mut counts, standard) = merge_plurals(count(tokens));
    let unigrams = counts.clone();

    for (phrase, phrase_count) in bigrams {
        let Some((first, second)) = phrase.split_once(' ') else {
            continue;
        };
        let (Some(first), Some(second)) = (standard.get(first), standard.get(second)) else {
            continue;
        };
        let first_count = unigrams.get(first).copied().unwrap_or(0);
        let second_count = unigrams.get(second).copied().unwrap_or(0);

        if collocation_score(phrase_count, first_count, second_count, total)
            > COLLOCATION_THRESHOLD
        {
            for word in [first, second] {
                if let Some(c) = counts.get_mut(word) {
                    *c = c.saturating_sub(phrase_count);
                }
            }
            counts.insert(phrase, phrase_count);
        }
    }

    sorted(counts)
}

/// Dunning log-likelihood ratio of a bigram against independent words
fn collocation_score(pair: usize, first: usize, second: usize, total: usize) -> f64 {
    if total <= first || total <= second {
        return 0.0;
    }
    let (c12, c1, c2, n) = (pair as f64, first as f64, second as f64, total as f64);

    let p = c2 / n;
    let p1 = c12 / c1;
    let p2 = (c2 - c12) / (n - c1);

    let score = log_likelihood(c12, c1, p) + log_likelihood(c2 - c12, n - c1, p)
        - log_likelihood(c12, c1, p1)
        - log_likelihood(c2 - c12, n - c1, p2);
    -2.0 * score
}

fn log_likelihood(k: f64, n: f64, x: f64) -> f64 {
    x.max(1e-10).ln() * k + (1.0 - x).max(1e-10).ln() * (n - k)
}
