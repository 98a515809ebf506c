//! Mentor/mentee compatibility scoring and ranking.

pub mod ranking;
pub mod reasons;
pub mod scoring;
pub mod weights;

pub use ranking::{best_matches_for, rank_matches, MatchError};
pub use reasons::{MatchReason, ReasonKind};
pub use scoring::{calculate_match_score, percentage_of, MatchConfig, MatchResult};
pub use weights::{ScoreWeights, DEFAULT_WEIGHTS};
