mod analyze;
mod clean;
mod score;
mod wordcloud;

// Re-export command functions for convenience
pub use analyze::{analyze, AnalyzeParams};
pub use clean::clean;
pub use score::score;
pub use wordcloud::wordcloud;

use anyhow::{Context, Result};
use std::path::Path;

use feedback_analyzer::input::split_pasted_comments;
use feedback_analyzer::models::Comment;

/// Read a text file as one comment per non-blank line
fn read_pasted(path: &Path) -> Result<Vec<Comment>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    Ok(split_pasted_comments(&text))
}
