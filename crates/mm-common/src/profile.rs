use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

use crate::{Profile, Role};

/// Every field of a profile that the form can edit or report on.
///
/// Parsed from the camelCase input names used by the stored documents
/// (`"firstName"`, `"lookingFor"`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumString, EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
    Phone,
    Age,
    County,
    Degree,
    EducationLevel,
    Profession,
    PastProfessions,
    Linkedin,
    CalCom,
    Skills,
    Industries,
    Hobbies,
    Ethnicity,
    Religion,
    LookingFor,
}

impl ProfileField {
    /// Multi-value fields are replaced wholesale rather than typed into.
    pub fn is_list(self) -> bool {
        matches!(
            self,
            ProfileField::PastProfessions
                | ProfileField::Skills
                | ProfileField::Industries
                | ProfileField::Hobbies
                | ProfileField::LookingFor
        )
    }

    /// Human readable name used in "still missing" summaries.
    pub fn label(self) -> &'static str {
        match self {
            ProfileField::FirstName => "First Name",
            ProfileField::LastName => "Last Name",
            ProfileField::Email => "Email",
            ProfileField::Phone => "Phone Number",
            ProfileField::Age => "Age",
            ProfileField::County => "County",
            ProfileField::Degree => "Degree/Qualification",
            ProfileField::EducationLevel => "Education Level",
            ProfileField::Profession => "Profession",
            ProfileField::PastProfessions => "Past Professions",
            ProfileField::Linkedin => "LinkedIn Profile",
            ProfileField::CalCom => "Cal.com Link",
            ProfileField::Skills => "Skills",
            ProfileField::Industries => "Industries",
            ProfileField::Hobbies => "Hobbies & Interests",
            ProfileField::Ethnicity => "Ethnicity",
            ProfileField::Religion => "Religion",
            ProfileField::LookingFor => "Learning Goals",
        }
    }

    /// Error shown next to the input when a required field is left blank.
    pub fn required_message(self) -> &'static str {
        match self {
            ProfileField::FirstName => "First name is required",
            ProfileField::LastName => "Last name is required",
            ProfileField::Email => "Email is required",
            ProfileField::Phone => "Phone number is required",
            ProfileField::Age => "Age is required",
            ProfileField::County => "County is required",
            ProfileField::Degree => "Degree/Qualification is required",
            ProfileField::EducationLevel => "Education level is required",
            ProfileField::Profession => "Profession is required",
            ProfileField::PastProfessions => "At least one past profession is required",
            ProfileField::Linkedin => "LinkedIn profile is required for mentors",
            ProfileField::CalCom => "Cal.com link is required",
            ProfileField::Skills => "At least one skill is required",
            ProfileField::Industries => "At least one industry is required",
            ProfileField::Hobbies => "At least one hobby is required",
            ProfileField::Ethnicity => "Ethnicity is required",
            ProfileField::Religion => "Religion is required",
            ProfileField::LookingFor => "At least one learning goal is required",
        }
    }
}

/// The in-progress profile behind the registration and edit forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileDraft {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
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

impl Default for ProfileDraft {
    fn default() -> Self {
        Self {
            role: None,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            age: String::new(),
            degree: String::new(),
            education_level: String::new(),
            county: String::new(),
            profession: String::new(),
            // The editor always shows one past-profession input.
            past_professions: vec![String::new()],
            linkedin: String::new(),
            cal_com: String::new(),
            hobbies: Vec::new(),
            ethnicity: String::new(),
            religion: String::new(),
            skills: Vec::new(),
            looking_for: Vec::new(),
            industries: Vec::new(),
        }
    }
}

impl ProfileDraft {
    /// Pre-fill a draft from a saved profile, e.g. for the edit modal.
    pub fn from_profile(profile: &Profile) -> Self {
        let mut past_professions = profile.past_professions.clone();
        if past_professions.is_empty() {
            past_professions.push(String::new());
        }

        Self {
            role: Some(profile.role),
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            age: profile.age.clone(),
            degree: profile.degree.clone(),
            education_level: profile.education_level.clone(),
            county: profile.county.clone(),
            profession: profile.profession.clone(),
            past_professions,
            linkedin: profile.linkedin.clone(),
            cal_com: profile.cal_com.clone(),
            hobbies: profile.hobbies.clone(),
            ethnicity: profile.ethnicity.clone(),
            religion: profile.religion.clone(),
            skills: profile.skills.clone(),
            looking_for: profile.looking_for.clone(),
            industries: profile.industries.clone(),
        }
    }

    /// Build the profile handed to the save collaborator. Blank
    /// past-profession slots are editor artefacts and are dropped.
    pub fn into_profile(self, uid: impl Into<String>, user_ref: impl Into<String>, role: Role) -> Profile {
        Profile {
            uid: uid.into(),
            user_ref: user_ref.into(),
            role,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            age: self.age,
            degree: self.degree,
            education_level: self.education_level,
            county: self.county,
            profession: self.profession,
            past_professions: self
                .past_professions
                .into_iter()
                .filter(|p| !p.trim().is_empty())
                .collect(),
            linkedin: self.linkedin,
            cal_com: self.cal_com,
            hobbies: self.hobbies,
            ethnicity: self.ethnicity,
            religion: self.religion,
            skills: self.skills,
            looking_for: self.looking_for,
            industries: self.industries,
        }
    }

    pub fn text(&self, field: ProfileField) -> Option<&str> {
        let value = match field {
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Age => &self.age,
            ProfileField::County => &self.county,
            ProfileField::Degree => &self.degree,
            ProfileField::EducationLevel => &self.education_level,
            ProfileField::Profession => &self.profession,
            ProfileField::Linkedin => &self.linkedin,
            ProfileField::CalCom => &self.cal_com,
            ProfileField::Ethnicity => &self.ethnicity,
            ProfileField::Religion => &self.religion,
            _ => return None,
        };
        Some(value.as_str())
    }

    pub fn list(&self, field: ProfileField) -> Option<&[String]> {
        let values = match field {
            ProfileField::PastProfessions => &self.past_professions,
            ProfileField::Skills => &self.skills,
            ProfileField::Industries => &self.industries,
            ProfileField::Hobbies => &self.hobbies,
            ProfileField::LookingFor => &self.looking_for,
            _ => return None,
        };
        Some(values.as_slice())
    }

    /// Returns false when `field` is a list field.
    pub fn set_text(&mut self, field: ProfileField, value: String) -> bool {
        let slot = match field {
            ProfileField::FirstName => &mut self.first_name,
            ProfileField::LastName => &mut self.last_name,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Age => &mut self.age,
            ProfileField::County => &mut self.county,
            ProfileField::Degree => &mut self.degree,
            ProfileField::EducationLevel => &mut self.education_level,
            ProfileField::Profession => &mut self.profession,
            ProfileField::Linkedin => &mut self.linkedin,
            ProfileField::CalCom => &mut self.cal_com,
            ProfileField::Ethnicity => &mut self.ethnicity,
            ProfileField::Religion => &mut self.religion,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// Returns false when `field` is a text field.
    pub fn set_list(&mut self, field: ProfileField, values: Vec<String>) -> bool {
        let slot = match field {
            ProfileField::PastProfessions => &mut self.past_professions,
            ProfileField::Skills => &mut self.skills,
            ProfileField::Industries => &mut self.industries,
            ProfileField::Hobbies => &mut self.hobbies,
            ProfileField::LookingFor => &mut self.looking_for,
            _ => return false,
        };
        *slot = values;
        true
    }

    /// Text fields count once they hold non-whitespace; lists once they hold
    /// an entry. Past professions need at least one non-blank entry.
    pub fn is_filled(&self, field: ProfileField) -> bool {
        match field {
            ProfileField::PastProfessions => self.past_professions.iter().any(|p| !p.trim().is_empty()),
            _ => match (self.text(field), self.list(field)) {
                (Some(text), _) => !text.trim().is_empty(),
                (_, Some(values)) => !values.is_empty(),
                _ => false,
            },
        }
    }
}

/// Booking availability for one mentor, keyed by uid in [`AvailabilityTable`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Availability {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_slot: Option<String>,
}

pub type AvailabilityTable = HashMap<String, Availability>;

/// "First Last" as shown on cards and match lists.
pub fn display_name(profile: &Profile) -> String {
    format!("{} {}", profile.first_name, profile.last_name)
}

/// Name for a booking row whose mentor profile may no longer exist.
pub fn display_name_or_placeholder(profile: Option<&Profile>, id: &str) -> String {
    match profile {
        Some(profile) => display_name(profile),
        None => {
            let short: String = id.chars().take(8).collect();
            format!("Mentor {short}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn field_names_parse_from_input_names() {
        assert_eq!(ProfileField::from_str("firstName").unwrap(), ProfileField::FirstName);
        assert_eq!(ProfileField::from_str("lookingFor").unwrap(), ProfileField::LookingFor);
        assert_eq!(ProfileField::from_str("calCom").unwrap(), ProfileField::CalCom);
        assert!(ProfileField::from_str("favouriteColour").is_err());
    }

    #[test]
    fn every_field_is_either_text_or_list() {
        let draft = ProfileDraft::default();
        for field in ProfileField::iter() {
            let text = draft.text(field).is_some();
            let list = draft.list(field).is_some();
            assert!(text ^ list, "{field:?}");
            assert_eq!(field.is_list(), list);
        }
    }

    #[test]
    fn default_draft_has_one_past_profession_slot() {
        let draft = ProfileDraft::default();
        assert_eq!(draft.past_professions, vec![String::new()]);
        assert!(!draft.is_filled(ProfileField::PastProfessions));
    }

    #[test]
    fn whitespace_does_not_fill_a_field() {
        let mut draft = ProfileDraft::default();
        draft.set_text(ProfileField::FirstName, "   ".into());
        assert!(!draft.is_filled(ProfileField::FirstName));
        draft.set_text(ProfileField::FirstName, "Ada".into());
        assert!(draft.is_filled(ProfileField::FirstName));
    }

    #[test]
    fn setters_reject_the_wrong_shape() {
        let mut draft = ProfileDraft::default();
        assert!(!draft.set_text(ProfileField::Skills, "Python".into()));
        assert!(!draft.set_list(ProfileField::Email, vec!["a@b.c".into()]));
        assert!(draft.set_list(ProfileField::Skills, vec!["Python".into()]));
        assert_eq!(draft.skills, vec!["Python".to_string()]);
    }

    #[test]
    fn into_profile_drops_blank_past_professions() {
        let draft = ProfileDraft {
            first_name: "Grace".into(),
            past_professions: vec!["Engineer".into(), " ".into()],
            ..ProfileDraft::default()
        };
        let profile = draft.into_profile("uid-1", "users/uid-1", Role::Mentor);
        assert_eq!(profile.past_professions, vec!["Engineer".to_string()]);
        assert!(profile.is_mentor());

        let reloaded = ProfileDraft::from_profile(&Profile::default());
        assert_eq!(reloaded.past_professions.len(), 1);
    }

    #[test]
    fn placeholder_name_uses_id_prefix() {
        assert_eq!(display_name_or_placeholder(None, "abcdefghijk"), "Mentor abcdefgh");
        let profile = Profile {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            ..Profile::default()
        };
        assert_eq!(display_name_or_placeholder(Some(&profile), "x"), "Ada Lovelace");
    }
}
