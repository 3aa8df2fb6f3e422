/// Rows of the `high_scores` table.
pub mod high_score;

pub use high_score::*;
