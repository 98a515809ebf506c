use serde::Serialize;
use strum::{AsRefStr, Display};

use crate::{
    profile::{ProfileDraft, ProfileField},
    Role,
};

/// Named groups of fields shown as steps of the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AsRefStr, Display)]
pub enum Section {
    #[strum(serialize = "Personal Information")]
    #[serde(rename = "Personal Information")]
    PersonalInformation,
    #[strum(serialize = "Education & Career")]
    #[serde(rename = "Education & Career")]
    EducationAndCareer,
    #[strum(serialize = "Skills & Interests")]
    #[serde(rename = "Skills & Interests")]
    SkillsAndInterests,
    #[strum(serialize = "Additional Information")]
    #[serde(rename = "Additional Information")]
    AdditionalInformation,
    #[strum(serialize = "Professional Background")]
    #[serde(rename = "Professional Background")]
    ProfessionalBackground,
    #[strum(serialize = "Learning Goals")]
    #[serde(rename = "Learning Goals")]
    LearningGoals,
}

const COMMON_SECTIONS: &[Section] = &[
    Section::PersonalInformation,
    Section::EducationAndCareer,
    Section::SkillsAndInterests,
    Section::AdditionalInformation,
];

const MENTOR_SECTIONS: &[Section] = &[
    Section::PersonalInformation,
    Section::EducationAndCareer,
    Section::SkillsAndInterests,
    Section::AdditionalInformation,
    Section::ProfessionalBackground,
];

const MENTEE_SECTIONS: &[Section] = &[
    Section::PersonalInformation,
    Section::EducationAndCareer,
    Section::SkillsAndInterests,
    Section::AdditionalInformation,
    Section::LearningGoals,
];

const PERSONAL_FIELDS: &[ProfileField] = &[
    ProfileField::FirstName,
    ProfileField::LastName,
    ProfileField::Email,
    ProfileField::Phone,
    ProfileField::Age,
    ProfileField::County,
];

const MENTOR_CAREER_FIELDS: &[ProfileField] = &[
    ProfileField::Degree,
    ProfileField::EducationLevel,
    ProfileField::Profession,
    ProfileField::Linkedin,
];

const CAREER_FIELDS: &[ProfileField] = &[
    ProfileField::Degree,
    ProfileField::EducationLevel,
    ProfileField::Profession,
];

const INTEREST_FIELDS: &[ProfileField] = &[
    ProfileField::Skills,
    ProfileField::Industries,
    ProfileField::Hobbies,
];

const ADDITIONAL_FIELDS: &[ProfileField] = &[ProfileField::Ethnicity, ProfileField::Religion];

const LEARNING_GOAL_FIELDS: &[ProfileField] = &[ProfileField::LookingFor];

/// Sections shown for a role. Before a role is picked only the shared ones.
pub fn sections_for(role: Option<Role>) -> &'static [Section] {
    match role {
        Some(Role::Mentor) => MENTOR_SECTIONS,
        Some(Role::Mentee) => MENTEE_SECTIONS,
        None => COMMON_SECTIONS,
    }
}

impl Section {
    /// Fields that must be filled for this section to count as complete.
    /// Past professions are optional, so Professional Background has none.
    pub fn required_fields(self, role: Option<Role>) -> &'static [ProfileField] {
        match self {
            Section::PersonalInformation => PERSONAL_FIELDS,
            Section::EducationAndCareer if role == Some(Role::Mentor) => MENTOR_CAREER_FIELDS,
            Section::EducationAndCareer => CAREER_FIELDS,
            Section::SkillsAndInterests => INTEREST_FIELDS,
            Section::AdditionalInformation => ADDITIONAL_FIELDS,
            Section::ProfessionalBackground => &[],
            Section::LearningGoals => LEARNING_GOAL_FIELDS,
        }
    }
}

/// Every required field for the role, in form order.
pub fn required_fields(role: Option<Role>) -> impl Iterator<Item = ProfileField> {
    sections_for(role)
        .iter()
        .flat_map(move |section| section.required_fields(role).iter().copied())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormProgress {
    pub completed_fields: u32,
    pub total_fields: u32,
}

impl FormProgress {
    pub fn percent(&self) -> u32 {
        if self.total_fields == 0 {
            return 100;
        }
        self.completed_fields * 100 / self.total_fields
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionStatus {
    pub section: Section,
    pub completed: bool,
    pub total: u32,
}

pub fn calculate_progress(draft: &ProfileDraft, role: Option<Role>) -> FormProgress {
    required_fields(role).fold(FormProgress::default(), |mut progress, field| {
        progress.total_fields += 1;
        if draft.is_filled(field) {
            progress.completed_fields += 1;
        }
        progress
    })
}

pub fn section_status(draft: &ProfileDraft, role: Option<Role>) -> Vec<SectionStatus> {
    sections_for(role)
        .iter()
        .map(|&section| {
            let fields = section.required_fields(role);
            SectionStatus {
                section,
                completed: fields.iter().all(|&field| draft.is_filled(field)),
                total: fields.len() as u32,
            }
        })
        .collect()
}

/// Labels of required fields still empty, in form order.
pub fn missing_fields(draft: &ProfileDraft, role: Option<Role>) -> Vec<&'static str> {
    required_fields(role)
        .filter(|&field| !draft.is_filled(field))
        .map(ProfileField::label)
        .collect()
}
