use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use super::{
    reasons::MatchReason,
    weights::{ScoreWeights, DEFAULT_WEIGHTS},
};
use crate::{profile::display_name, taxonomy::education_rank, Profile};

pub const DEFAULT_MIN_PERCENTAGE: u8 = 10;
/// Age gap (years) at which the age factor saturates.
pub const SOFT_AGE_DIFF_LIMIT: u32 = 25;

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub weights: ScoreWeights,
    /// Results below this percentage are dropped from rankings.
    pub min_percentage: u8,
    /// Reward older mentors (true) or closeness in age (false).
    pub older_mentor_preferred: bool,
    pub soft_age_diff_limit: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
            min_percentage: DEFAULT_MIN_PERCENTAGE,
            older_mentor_preferred: true,
            soft_age_diff_limit: SOFT_AGE_DIFF_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub user: Profile,
    pub score: u32,
    pub percentage: u8,
    pub reasons: Vec<MatchReason>,
}

/// Score `candidate` from the point of view of `current`. The two are
/// expected to hold opposite roles; the mentor side is taken from
/// `current.role`.
pub fn calculate_match_score(current: &Profile, candidate: &Profile, config: &MatchConfig) -> MatchResult {
    let mut scorer = Scorer {
        current,
        candidate,
        config,
        score: 0,
        reasons: Vec::new(),
    };

    scorer.education();
    scorer.county();
    scorer.profession();
    scorer.age();
    scorer.religion();
    scorer.hobbies();
    scorer.skills();
    scorer.industries();

    let Scorer { score, reasons, .. } = scorer;
    let percentage = percentage_of(score, config.weights.sum());

    debug!(
        candidate = %candidate.uid,
        name = %display_name(candidate),
        score,
        percentage,
        reasons = reasons.len(),
        "candidate scored"
    );

    MatchResult {
        user: candidate.clone(),
        score,
        percentage,
        reasons,
    }
}

/// `score / max` as a whole percentage clamped to 0..=100.
pub fn percentage_of(score: u32, max: u32) -> u8 {
    if max == 0 {
        return 0;
    }
    let pct = (score as f64 / max as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

struct Scorer<'a> {
    current: &'a Profile,
    candidate: &'a Profile,
    config: &'a MatchConfig,
    score: u32,
    reasons: Vec<MatchReason>,
}

impl<'a> Scorer<'a> {
    fn add(&mut self, points: u32, reason: Option<MatchReason>) {
        if points == 0 {
            return;
        }
        self.score += points;
        self.reasons.extend(reason);
    }

    fn mentor_and_mentee(&self) -> (&'a Profile, &'a Profile) {
        if self.current.is_mentor() {
            (self.current, self.candidate)
        } else {
            (self.candidate, self.current)
        }
    }

    fn weights(&self) -> &ScoreWeights {
        &self.config.weights
    }

    /// Half the weight per level the mentor is above the mentee.
    fn education(&mut self) {
        let (mentor, mentee) = self.mentor_and_mentee();
        let (Some(mentor_rank), Some(mentee_rank)) = (
            education_rank(&mentor.education_level),
            education_rank(&mentee.education_level),
        ) else {
            return;
        };
        if mentor_rank <= mentee_rank {
            return;
        }
        let gap = f64::from(mentor_rank - mentee_rank);
        let points = (0.5 * f64::from(self.weights().education_level) * gap).round() as u32;
        self.add(points, Some(MatchReason::HigherMentorEducation));
    }

    fn county(&mut self) {
        if same_non_blank(&self.current.county, &self.candidate.county) {
            self.add(self.weights().county, Some(MatchReason::SameCounty));
        }
    }

    fn profession(&mut self) {
        let (current, candidate) = (self.current, self.candidate);
        let weight = self.weights().profession;
        let user_current = current.profession.trim();
        let cand_current = candidate.profession.trim();
        let user_past: Vec<&str> = current.filled_past_professions().collect();
        let cand_past: Vec<&str> = candidate.filled_past_professions().collect();

        let full_match = (!cand_current.is_empty() && user_past.contains(&cand_current))
            || (!user_current.is_empty() && cand_past.contains(&user_current))
            || same_non_blank(user_current, cand_current)
            || user_past.iter().any(|p| cand_past.contains(p));

        if full_match {
            self.add(weight, Some(MatchReason::ProfessionMatched));
            return;
        }

        let user_words = tokens(user_current);
        let cand_words = tokens(cand_current);
        let user_past_words = tokens(&user_past.join(" "));
        let cand_past_words = tokens(&cand_past.join(" "));

        let partial = !user_words.is_disjoint(&cand_past_words)
            || !cand_words.is_disjoint(&user_past_words)
            || !user_words.is_disjoint(&cand_words);

        if partial {
            self.add(weight / 2, Some(MatchReason::ProfessionPartiallyMatched));
        }
    }

    fn age(&mut self) {
        let (mentor, mentee) = self.mentor_and_mentee();
        let (Some(mentor_age), Some(mentee_age)) = (mentor.age_years(), mentee.age_years()) else {
            return;
        };
        let weight = f64::from(self.weights().age);
        let limit = f64::from(self.config.soft_age_diff_limit.max(1));

        if self.config.older_mentor_preferred {
            if mentor_age < mentee_age {
                return;
            }
            let diff = mentor_age - mentee_age;
            let points = (weight * f64::from(diff) / limit).ceil().min(weight) as u32;
            let reason = match diff {
                d if d < 10 => Some(MatchReason::MoreExperiencedMentor),
                d if d < 15 => Some(MatchReason::NotablyMoreExperiencedMentor),
                d if d < 20 => Some(MatchReason::SignificantlyMoreExperiencedMentor),
                _ => None,
            };
            self.add(points, reason);
        } else {
            let diff = mentor_age.abs_diff(mentee_age);
            if diff >= self.config.soft_age_diff_limit {
                return;
            }
            let points = (weight - f64::from(diff) * weight / limit).ceil().max(0.0) as u32;
            let reason = match diff {
                d if d < 5 => Some(MatchReason::VeryCloseInAge),
                d if d < 10 => Some(MatchReason::ModeratelyCloseInAge),
                _ => None,
            };
            self.add(points, reason);
        }
    }

    // Counted but never shown to users.
    fn religion(&mut self) {
        if same_non_blank(&self.current.religion, &self.candidate.religion) {
            self.add(self.weights().religion, None);
        }
    }

    fn hobbies(&mut self) {
        let shared = count_shared(&self.current.hobbies, &self.candidate.hobbies);
        self.add(
            shared as u32 * self.weights().hobbies,
            Some(MatchReason::HobbiesMatched(shared)),
        );
    }

    /// What the mentor offers against what the mentee wants to learn.
    fn skills(&mut self) {
        let shared = if self.current.is_mentor() {
            count_shared(&self.current.skills, &self.candidate.looking_for)
        } else {
            count_shared(&self.current.looking_for, &self.candidate.skills)
        };
        self.add(
            shared as u32 * self.weights().skills,
            Some(MatchReason::SkillsMatched(shared)),
        );
    }

    fn industries(&mut self) {
        let shared = count_shared(&self.current.industries, &self.candidate.industries);
        self.add(
            shared as u32 * self.weights().industries,
            Some(MatchReason::IndustriesMatched(shared)),
        );
    }
}

fn same_non_blank(a: &str, b: &str) -> bool {
    let a = a.trim();
    !a.is_empty() && a == b.trim()
}

/// Entries of `ours` that also appear in `theirs`.
// Blank slots never count as shared.
fn count_shared(ours: &[String], theirs: &[String]) -> usize {
    ours.iter()
        .filter(|item| !item.trim().is_empty() && theirs.contains(item))
        .count()
}

fn tokens(text: &str) -> HashSet<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}
