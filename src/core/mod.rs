// Core algorithm exports
pub mod classify;
pub mod explain;
pub mod ranker;
pub mod scoring;

pub use classify::{classify, estimate_admission_probability, PROBABILITY_CEILING};
pub use explain::{build_explanation, Explanation};
pub use ranker::Ranker;
pub use scoring::{calculate_match_score, ScoreBreakdown, SCORE_CEILING};
