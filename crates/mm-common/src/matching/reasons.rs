use std::fmt;

use serde::{Serialize, Serializer};
use strum::{AsRefStr, Display};

/// Grouping used by the match list to pick an icon per reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AsRefStr, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ReasonKind {
    Education,
    AgeClose,
    AgeExperienced,
    Profession,
    Hobbies,
    Industries,
    Skills,
    County,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchReason {
    HigherMentorEducation,
    SameCounty,
    ProfessionMatched,
    ProfessionPartiallyMatched,
    MoreExperiencedMentor,
    NotablyMoreExperiencedMentor,
    SignificantlyMoreExperiencedMentor,
    VeryCloseInAge,
    ModeratelyCloseInAge,
    HobbiesMatched(usize),
    SkillsMatched(usize),
    IndustriesMatched(usize),
}

impl MatchReason {
    pub fn kind(&self) -> ReasonKind {
        match self {
            MatchReason::HigherMentorEducation => ReasonKind::Education,
            MatchReason::SameCounty => ReasonKind::County,
            MatchReason::ProfessionMatched | MatchReason::ProfessionPartiallyMatched => {
                ReasonKind::Profession
            }
            MatchReason::MoreExperiencedMentor
            | MatchReason::NotablyMoreExperiencedMentor
            | MatchReason::SignificantlyMoreExperiencedMentor => ReasonKind::AgeExperienced,
            MatchReason::VeryCloseInAge | MatchReason::ModeratelyCloseInAge => ReasonKind::AgeClose,
            MatchReason::HobbiesMatched(_) => ReasonKind::Hobbies,
            MatchReason::SkillsMatched(_) => ReasonKind::Skills,
            MatchReason::IndustriesMatched(_) => ReasonKind::Industries,
        }
    }
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchReason::HigherMentorEducation => f.write_str("Higher mentor education level"),
            MatchReason::SameCounty => f.write_str("Same county"),
            MatchReason::ProfessionMatched => f.write_str("Desired profession matched"),
            MatchReason::ProfessionPartiallyMatched => {
                f.write_str("Potentially desired profession matched")
            }
            MatchReason::MoreExperiencedMentor => f.write_str("More experienced mentor"),
            MatchReason::NotablyMoreExperiencedMentor => {
                f.write_str("Notably more experienced mentor")
            }
            MatchReason::SignificantlyMoreExperiencedMentor => {
                f.write_str("Significantly more experienced mentor")
            }
            MatchReason::VeryCloseInAge => f.write_str("Very close in age"),
            MatchReason::ModeratelyCloseInAge => f.write_str("Moderately close in age"),
            MatchReason::HobbiesMatched(n) => write!(f, "{n} hobby/interests matched"),
            MatchReason::SkillsMatched(n) => write!(f, "{n} skill(s) matched"),
            MatchReason::IndustriesMatched(1) => f.write_str("1 industry matched"),
            MatchReason::IndustriesMatched(n) => write!(f, "{n} industries matched"),
        }
    }
}

// Rendered as the display text so match results read naturally as JSON.
impl Serialize for MatchReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
