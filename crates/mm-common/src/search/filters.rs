use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{
    profile::AvailabilityTable,
    taxonomy::is_advanced_degree,
    Profile,
};

/// Filter pills shown above the mentor list.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumString,
    EnumIter,
)]
pub enum NamedFilter {
    #[strum(serialize = "Available now")]
    #[serde(rename = "Available now")]
    AvailableNow,
    #[strum(serialize = "Experienced mentors")]
    #[serde(rename = "Experienced mentors")]
    ExperiencedMentors,
    #[strum(serialize = "Video calls")]
    #[serde(rename = "Video calls")]
    VideoCalls,
    #[strum(serialize = "In-person")]
    #[serde(rename = "In-person")]
    InPerson,
    #[strum(serialize = "Free sessions")]
    #[serde(rename = "Free sessions")]
    FreeSessions,
}

impl NamedFilter {
    pub fn matches(self, profile: &Profile, availability: &AvailabilityTable) -> bool {
        match self {
            NamedFilter::AvailableNow => availability
                .get(&profile.uid)
                .map(|slot| slot.available)
                .unwrap_or(false),
            NamedFilter::ExperiencedMentors => {
                // Raw slot count, blank editor slots included.
                is_advanced_degree(&profile.education_level) || profile.past_professions.len() > 1
            }
            // Any stored link counts, even whitespace.
            NamedFilter::VideoCalls => !profile.cal_com.is_empty(),
            NamedFilter::InPerson => !profile.county.trim().is_empty(),
            // No session pricing exists yet, so every mentor qualifies.
            NamedFilter::FreeSessions => true,
        }
    }
}

/// Case-insensitive free-text match over every searchable profile field.
/// `needle` must already be lowercased.
pub(crate) fn matches_term(profile: &Profile, needle: &str) -> bool {
    fn contains(haystack: &str, needle: &str) -> bool {
        haystack.to_lowercase().contains(needle)
    }
    fn any(values: &[String], needle: &str) -> bool {
        values.iter().any(|v| contains(v, needle))
    }

    contains(&format!("{} {}", profile.first_name, profile.last_name), needle)
        || contains(&profile.profession, needle)
        || contains(&profile.past_professions.join(","), needle)
        || contains(&profile.degree, needle)
        || contains(&profile.education_level, needle)
        || contains(&profile.county, needle)
        || contains(&profile.ethnicity, needle)
        || contains(&profile.religion, needle)
        || contains(&profile.linkedin, needle)
        || any(&profile.skills, needle)
        || any(&profile.hobbies, needle)
        || any(&profile.industries, needle)
        || any(&profile.looking_for, needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Availability;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn labels_round_trip() {
        for filter in NamedFilter::iter() {
            assert_eq!(NamedFilter::from_str(filter.as_ref()).unwrap(), filter);
        }
        assert_eq!(NamedFilter::InPerson.to_string(), "In-person");
        assert!(NamedFilter::from_str("Cheap").is_err());
    }

    #[test]
    fn experienced_needs_degree_or_two_past_role_slots() {
        let mut profile = Profile {
            education_level: "Master's Degree".into(),
            ..Profile::default()
        };
        let table = AvailabilityTable::new();
        assert!(NamedFilter::ExperiencedMentors.matches(&profile, &table));

        profile.education_level = "A-Levels".into();
        profile.past_professions = vec!["Nurse".into()];
        assert!(!NamedFilter::ExperiencedMentors.matches(&profile, &table));

        profile.past_professions.push("".into());
        assert!(NamedFilter::ExperiencedMentors.matches(&profile, &table));
    }

    #[test]
    fn video_calls_accepts_any_stored_link() {
        let table = AvailabilityTable::new();
        let mut profile = Profile::default();
        assert!(!NamedFilter::VideoCalls.matches(&profile, &table));

        profile.cal_com = " ".into();
        assert!(NamedFilter::VideoCalls.matches(&profile, &table));
    }

    #[test]
    fn available_now_reads_side_table() {
        let profile = Profile {
            uid: "m1".into(),
            ..Profile::default()
        };
        let mut table = AvailabilityTable::new();
        assert!(!NamedFilter::AvailableNow.matches(&profile, &table));
        table.insert(
            "m1".into(),
            Availability {
                available: true,
                next_slot: None,
            },
        );
        assert!(NamedFilter::AvailableNow.matches(&profile, &table));
    }

    #[test]
    fn term_matches_list_entries_and_past_roles() {
        let profile = Profile {
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            skills: vec!["Python".into()],
            past_professions: vec!["Naval Officer".into()],
            ..Profile::default()
        };
        assert!(matches_term(&profile, "python"));
        assert!(matches_term(&profile, "naval"));
        assert!(matches_term(&profile, "grace hop"));
        assert!(!matches_term(&profile, "rust"));
    }
}
