//! Plain-language interpretation of polarity scores

use super::correlation::pearson;

/// Scores at or below this are strongly negative
pub const STRONG_NEGATIVE_THRESHOLD: f64 = -0.5;

/// Scores at or above this are strongly positive
pub const STRONG_POSITIVE_THRESHOLD: f64 = 0.5;

/// Line returned for an empty batch
pub const NO_COMMENTS: &str = "No comments provided.";

/// Turn polarity scores into short summary sentences
///
/// Lines, in order: mean polarity, the positive/negative/neutral counts,
/// the strongly negative count (if any), the strongly positive count (if
/// any), and the sentiment/rating correlation when `ratings` has the same
/// length as `scores` and the coefficient is defined. An undefined
/// correlation is left out rather than reported.
///
/// # Examples
///
/// ```
/// use feedback_analyzer::analytics::interpret;
///
/// assert_eq!(interpret(&[], None), vec!["No comments provided.".to_string()]);
///
/// let lines = interpret(&[-0.6, 0.0, 0.7], None);
/// assert_eq!(lines[1], "Positive: 1, Negative: 1, Neutral: 1 (out of 3)");
/// ```
#[must_use]
pub fn interpret(scores: &[f64], ratings: Option<&[f64]>) -> Vec<String> {
    if scores.is_empty() {
        return vec![NO_COMMENTS.to_string()];
    }

    let valid: Vec<f64> = scores.iter().copied().filter(|s| !s.is_nan()).collect();
    let mean = if valid.is_empty() {
        f64::NAN
    } else {
        valid.iter().sum::<f64>() / valid.len() as f64
    };

    let count = |predicate: fn(f64) -> bool| scores.iter().filter(|&&s| predicate(s)).count();
    let positive = count(|s| s > 0.0);
    let negative = count(|s| s < 0.0);
    let neutral = count(|s| s == 0.0);
    let strongly_negative = count(|s| s <= STRONG_NEGATIVE_THRESHOLD);
    let strongly_positive = count(|s| s >= STRONG_POSITIVE_THRESHOLD);

    let mut lines = vec![
        format!("Overall mean polarity: {mean:.3}"),
        format!(
            "Positive: {positive}, Negative: {negative}, Neutral: {neutral} (out of {})",
            scores.len()
        ),
    ];

    if strongly_negative > 0 {
        lines.push(format!(
            "There are {strongly_negative} strongly negative comments (<= -0.5). \
             Consider investigating common themes."
        ));
    }
    if strongly_positive > 0 {
        lines.push(format!(
            "There are {strongly_positive} strongly positive comments (>= 0.5). \
             These can be highlighted."
        ));
    }

    if let Some(ratings) = ratings.filter(|r| r.len() == scores.len()) {
        if let Some(corr) = pearson(scores, ratings) {
            lines.push(format!(
                "Correlation between sentiment and provided ratings: {corr:.3}"
            ));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scores() {
        assert_eq!(interpret(&[], None), vec![NO_COMMENTS]);
        assert_eq!(interpret(&[], Some(&[1.0, 2.0][..])), vec![NO_COMMENTS]);
    }

    #[test]
    fn test_mixed_scores() {
        let lines = interpret(&[-0.6, 0.0, 0.7], None);
        assert_eq!(
            lines,
            vec![
                "Overall mean polarity: 0.033",
                "Positive: 1, Negative: 1, Neutral: 1 (out of 3)",
                "There are 1 strongly negative comments (<= -0.5). Consider investigating common themes.",
                "There are 1 strongly positive comments (>= 0.5). These can be highlighted.",
            ]
        );
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        let lines = interpret(&[-0.5, 0.5], None);
        assert!(lines.iter().any(|l| l.starts_with("There are 1 strongly negative")));
        assert!(lines.iter().any(|l| l.starts_with("There are 1 strongly positive")));
    }

    #[test]
    fn test_mild_scores_have_no_strong_lines() {
        let lines = interpret(&[0.2, -0.1, 0.3], None);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Overall mean polarity: 0.133");
    }

    #[test]
    fn test_correlation_line() {
        let lines = interpret(&[0.1, 0.2, 0.3], Some(&[1.0, 2.0, 3.0][..]));
        assert_eq!(
            lines.last().unwrap(),
            "Correlation between sentiment and provided ratings: 1.000"
        );
    }

    #[test]
    fn test_correlation_omitted_on_length_mismatch() {
        let lines = interpret(&[0.1, 0.2, 0.3], Some(&[1.0, 2.0][..]));
        assert!(lines.iter().all(|l| !l.starts_with("Correlation")));
    }

    #[test]
    fn test_correlation_omitted_when_undefined() {
        let lines = interpret(&[0.1, 0.2, 0.3], Some(&[4.0, 4.0, 4.0][..]));
        assert!(lines.iter().all(|l| !l.starts_with("Correlation")));

        let lines = interpret(&[0.4], Some(&[4.0][..]));
        assert!(lines.iter().all(|l| !l.starts_with("Correlation")));
    }
}
