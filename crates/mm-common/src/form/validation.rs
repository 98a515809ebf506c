use serde::Serialize;
use strum::IntoEnumIterator;

use super::progress::required_fields;
use crate::{
    profile::{ProfileDraft, ProfileField},
    Role,
};

pub const MENTEE_MIN_AGE: u32 = 15;
pub const MENTEE_MAX_AGE: u32 = 19;
pub const MENTOR_MIN_AGE: u32 = 18;
pub const MENTOR_MAX_AGE: u32 = 100;

/// Rules on top of the always-on required-field checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRules {
    /// When set, a filled-in age must be a whole number inside the role's
    /// bounds. Off unless the deployment opts in.
    pub enforce_age_range: bool,
    pub mentee_age: (u32, u32),
    pub mentor_age: (u32, u32),
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            enforce_age_range: false,
            mentee_age: (MENTEE_MIN_AGE, MENTEE_MAX_AGE),
            mentor_age: (MENTOR_MIN_AGE, MENTOR_MAX_AGE),
        }
    }
}

/// One optional error per known field. `None` means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub past_professions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cal_com: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industries: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hobbies: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ethnicity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub religion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub looking_for: Option<String>,
}

impl ValidationErrors {
    fn slot(&self, field: ProfileField) -> &Option<String> {
        match field {
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Age => &self.age,
            ProfileField::County => &self.county,
            ProfileField::Degree => &self.degree,
            ProfileField::EducationLevel => &self.education_level,
            ProfileField::Profession => &self.profession,
            ProfileField::PastProfessions => &self.past_professions,
            ProfileField::Linkedin => &self.linkedin,
            ProfileField::CalCom => &self.cal_com,
            ProfileField::Skills => &self.skills,
            ProfileField::Industries => &self.industries,
            ProfileField::Hobbies => &self.hobbies,
            ProfileField::Ethnicity => &self.ethnicity,
            ProfileField::Religion => &self.religion,
            ProfileField::LookingFor => &self.looking_for,
        }
    }

    fn slot_mut(&mut self, field: ProfileField) -> &mut Option<String> {
        match field {
            ProfileField::FirstName => &mut self.first_name,
            ProfileField::LastName => &mut self.last_name,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Age => &mut self.age,
            ProfileField::County => &mut self.county,
            ProfileField::Degree => &mut self.degree,
            ProfileField::EducationLevel => &mut self.education_level,
            ProfileField::Profession => &mut self.profession,
            ProfileField::PastProfessions => &mut self.past_professions,
            ProfileField::Linkedin => &mut self.linkedin,
            ProfileField::CalCom => &mut self.cal_com,
            ProfileField::Skills => &mut self.skills,
            ProfileField::Industries => &mut self.industries,
            ProfileField::Hobbies => &mut self.hobbies,
            ProfileField::Ethnicity => &mut self.ethnicity,
            ProfileField::Religion => &mut self.religion,
            ProfileField::LookingFor => &mut self.looking_for,
        }
    }

    pub fn get(&self, field: ProfileField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: ProfileField, message: impl Into<String>) {
        *self.slot_mut(field) = Some(message.into());
    }

    /// Returns whether an error was present.
    pub fn clear(&mut self, field: ProfileField) -> bool {
        self.slot_mut(field).take().is_some()
    }

    pub fn contains(&self, field: ProfileField) -> bool {
        self.slot(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Present errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = (ProfileField, &str)> + '_ {
        ProfileField::iter().filter_map(move |field| self.get(field).map(|msg| (field, msg)))
    }
}

/// Full validation of a draft. Pure: the same draft and role always give
/// the same result.
pub fn validate(draft: &ProfileDraft, role: Option<Role>, rules: &ValidationRules) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    for field in required_fields(role) {
        if !draft.is_filled(field) {
            errors.set(field, field.required_message());
        }
    }

    if rules.enforce_age_range && draft.is_filled(ProfileField::Age) {
        if let Some(message) = check_age(&draft.age, role, rules) {
            errors.set(ProfileField::Age, message);
        }
    }

    errors
}

fn check_age(raw: &str, role: Option<Role>, rules: &ValidationRules) -> Option<String> {
    let age: u32 = match raw.trim().parse() {
        Ok(age) => age,
        Err(_) => return Some("Age must be a whole number".to_string()),
    };

    let (noun, (min, max)) = match role? {
        Role::Mentee => ("Mentees", rules.mentee_age),
        Role::Mentor => ("Mentors", rules.mentor_age),
    };

    if age < min || age > max {
        Some(format!("{noun} must be aged between {min} and {max}"))
    } else {
        None
    }
}
