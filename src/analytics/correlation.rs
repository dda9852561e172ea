//! Sentiment/rating correlation
//!
//! Pearson correlation between the sentiment series and each rating column,
//! computed over pairwise-complete rows. A column with fewer than two usable
//! rows, or with no variance, has an undefined (`None`) coefficient.

use statrs::statistics::Statistics;

use crate::models::{Correlations, RatingColumn};

/// Minimum number of paired observations for a defined coefficient
pub const MIN_PAIRED_OBSERVATIONS: usize = 2;

/// Pearson correlation coefficient of two equally long series
///
/// Uses the population covariance and standard deviations; the degrees of
/// freedom cancel, so this equals the sample formula. Returns `None` for
/// fewer than two pairs, mismatched lengths, zero variance or a non-finite
/// result.
///
/// # Examples
///
/// ```
/// use feedback_analyzer::analytics::pearson;
///
/// let r = pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
/// assert!((r - 1.0).abs() < 1e-12);
/// assert_eq!(pearson(&[1.0], &[2.0]), None);
/// ```
#[must_use]
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < MIN_PAIRED_OBSERVATIONS {
        return None;
    }

    let covariance = xs.iter().population_covariance(ys.iter());
    let sd_x = xs.iter().population_std_dev();
    let sd_y = ys.iter().population_std_dev();

    if !(sd_x > 0.0 && sd_y > 0.0) {
        return None;
    }

    let r = covariance / (sd_x * sd_y);
    r.is_finite().then(|| r.clamp(-1.0, 1.0))
}

/// Pairwise-complete rows of two series with missing values
///
/// Rows past the end of the shorter series count as missing.
#[must_use]
pub fn paired_complete(xs: &[Option<f64>], ys: &[Option<f64>]) -> (Vec<f64>, Vec<f64>) {
    xs.iter()
        .zip(ys.iter())
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .unzip()
}

/// Correlate the sentiment series with one rating column
#[must_use]
pub fn correlate_column(sentiment: &[f64], column: &RatingColumn) -> Option<f64> {
    let sentiment: Vec<Option<f64>> = sentiment
        .iter()
        .map(|&s| s.is_finite().then_some(s))
        .collect();
    let ratings = column.numeric_values();

    let (xs, ys) = paired_complete(&sentiment, &ratings);
    if xs.len() < MIN_PAIRED_OBSERVATIONS {
        tracing::debug!(
            column = %column.name,
            pairs = xs.len(),
            "Too few paired observations for correlation"
        );
        return None;
    }
    pearson(&xs, &ys)
}

/// Correlate the sentiment series with every rating column
///
/// Columns are evaluated independently; an undefined result for one column
/// does not affect the others.
#[must_use]
pub fn correlate(sentiment: &[f64], columns: &[RatingColumn]) -> Correlations {
    columns
        .iter()
        .map(|column| (column.name.clone(), correlate_column(sentiment, column)))
        .collect()
}
