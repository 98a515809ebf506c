pub mod config;
pub mod form;
pub mod logging;
pub mod matching;
pub mod profile;
pub mod roster;
pub mod search;
pub mod taxonomy;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Which side of the mentoring relationship a profile is on.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    Mentor,
    #[default]
    Mentee,
}

impl Role {
    pub fn opposite(self) -> Role {
        match self {
            Role::Mentor => Role::Mentee,
            Role::Mentee => Role::Mentor,
        }
    }
}

// A saved mentor or mentee profile as held in the roster.
//
// The role is stored once; the `isMentor`/`isMentee` flags of the stored
// document are derived from it (see `roster::ProfileDocument`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "roster::ProfileDocument", into = "roster::ProfileDocument")]
pub struct Profile {
    pub uid: String,
    pub user_ref: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub degree: String,
    pub education_level: String,
    pub county: String,
    pub profession: String,
    pub past_professions: Vec<String>,
    pub linkedin: String,
    pub cal_com: String,
    pub hobbies: Vec<String>,
    pub ethnicity: String,
    pub religion: String,
    pub skills: Vec<String>,
    pub looking_for: Vec<String>,
    pub industries: Vec<String>,
}

impl Profile {
    pub fn is_mentor(&self) -> bool {
        self.role == Role::Mentor
    }

    pub fn is_mentee(&self) -> bool {
        self.role == Role::Mentee
    }

    /// Age as a whole number, if the stored string holds one.
    pub fn age_years(&self) -> Option<u32> {
        self.age.trim().parse().ok()
    }

    /// Past professions with empty editor slots removed.
    pub fn filled_past_professions(&self) -> impl Iterator<Item = &str> {
        self.past_professions
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_round_trips_through_labels() {
        assert_eq!(Role::Mentor.as_ref(), "mentor");
        assert_eq!(Role::from_str("MENTEE").unwrap(), Role::Mentee);
        assert_eq!(Role::Mentor.opposite(), Role::Mentee);
    }

    #[test]
    fn role_flags_follow_role() {
        let profile = Profile {
            role: Role::Mentor,
            ..Profile::default()
        };
        assert!(profile.is_mentor());
        assert!(!profile.is_mentee());
    }

    #[test]
    fn age_years_ignores_garbage() {
        let mut profile = Profile {
            age: " 42 ".into(),
            ..Profile::default()
        };
        assert_eq!(profile.age_years(), Some(42));
        profile.age = "forty".into();
        assert_eq!(profile.age_years(), None);
    }
}
