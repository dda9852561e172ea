//! Analytics over polarity scores: rating correlation and interpretation

pub mod correlation;
pub mod interpret;

pub use correlation::{
    correlate, correlate_column, paired_complete, pearson, MIN_PAIRED_OBSERVATIONS,
};
pub use interpret::{
    interpret, NO_COMMENTS, STRONG_NEGATIVE_THRESHOLD, STRONG_POSITIVE_THRESHOLD,
};
