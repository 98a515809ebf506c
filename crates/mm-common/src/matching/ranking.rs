use tracing::info;

use super::scoring::{calculate_match_score, MatchConfig, MatchResult};
use crate::Profile;

#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("no profile with uid {0} in the roster")]
    ProfileNotFound(String),
}

/// Score every opposite-role profile in `roster` against `current`, best
/// first. Ties keep roster order; results under the configured minimum
/// percentage are dropped.
pub fn rank_matches(current: &Profile, roster: &[Profile], config: &MatchConfig) -> Vec<MatchResult> {
    let wanted = current.role.opposite();

    let mut results: Vec<MatchResult> = roster
        .iter()
        .filter(|candidate| candidate.role == wanted && candidate.uid != current.uid)
        .map(|candidate| calculate_match_score(current, candidate, config))
        .collect();
    let scored = results.len();

    results.sort_by(|a, b| b.percentage.cmp(&a.percentage));
    results.retain(|result| result.percentage >= config.min_percentage);

    info!(
        uid = %current.uid,
        role = %current.role,
        candidates = scored,
        kept = results.len(),
        min_percentage = config.min_percentage,
        "matches ranked"
    );
    results
}

/// Look the user up by uid in the roster, then rank.
pub fn best_matches_for(uid: &str, roster: &[Profile], config: &MatchConfig) -> Result<Vec<MatchResult>, MatchError> {
    let current = roster
        .iter()
        .find(|profile| profile.uid == uid)
        .ok_or_else(|| MatchError::ProfileNotFound(uid.to_string()))?;
    Ok(rank_matches(current, roster, config))
}
