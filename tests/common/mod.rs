//! Common test utilities

use feedback_analyzer::models::{AnalysisRequest, Comment, RatingColumn};

/// A small survey export with a comment column and two rating columns
#[allow(dead_code)]
pub const SURVEY_CSV: &str = "\
Student,Comment,Rating,Difficulty
1,The lectures were great and the labs helpful,5,2
2,Boring slides and the pace was too slow,2,4
3,,3,3
4,I loved the practical examples,5,2
5,Assignments were confusing,n/a,5
";

/// Pasted feedback, one comment per line with a blank line in between
#[allow(dead_code)]
pub const PASTED_COMMENTS: &str = "\
Great course, very engaging!
The homework was terrible.

Visit https://example.com for notes
";

/// Create a request with a few mixed comments and one rating column
#[allow(dead_code)]
pub fn create_test_request() -> AnalysisRequest {
    AnalysisRequest::new("Biology")
        .with_comments(vec![
            Comment::text("The labs were excellent"),
            Comment::text("Lectures were boring"),
            Comment::Missing,
            Comment::text("Helpful tutor, good slides"),
        ])
        .with_rating(RatingColumn::new("Rating", [5.0, 1.0, 3.0, 4.0]))
}

/// Create `n` comments cycling through a few phrasings
#[allow(dead_code)]
pub fn create_comments(n: usize) -> Vec<Comment> {
    const PHRASES: &[&str] = &[
        "The lectures were clear and well organized",
        "Too much homework, the deadlines were stressful",
        "Loved the labs and the helpful teaching assistants",
        "Slides were confusing and the pace was slow",
        "Room 204 on Tuesdays",
    ];
    (0..n)
        .map(|i| Comment::text(format!("{} {i}", PHRASES[i % PHRASES.len()])))
        .collect()
}
