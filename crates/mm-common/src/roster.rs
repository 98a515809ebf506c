//! Boundary between the engines and the document store.
//!
//! Profiles arrive as JSON documents shaped like the stored records
//! (camelCase keys, role given both as `type` and as `isMentor`/`isMentee`
//! flags). Missing keys deserialise to empty values and mistyped ones are
//! coerced, so one odd record never breaks a search.

use std::{fs::File, io::BufReader, io::Read, path::Path};

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::{profile::AvailabilityTable, Profile, Role};

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Stored shape of a profile document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileDocument {
    #[serde(deserialize_with = "lenient_text")]
    pub uid: String,
    #[serde(deserialize_with = "lenient_text")]
    pub user_ref: String,
    #[serde(
        rename = "type",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_role"
    )]
    pub role: Option<Role>,
    #[serde(deserialize_with = "lenient_text")]
    pub first_name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub last_name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub email: String,
    #[serde(deserialize_with = "lenient_text")]
    pub phone: String,
    #[serde(deserialize_with = "lenient_text")]
    pub age: String,
    #[serde(deserialize_with = "lenient_text")]
    pub degree: String,
    #[serde(deserialize_with = "lenient_text")]
    pub education_level: String,
    #[serde(deserialize_with = "lenient_text")]
    pub county: String,
    #[serde(deserialize_with = "lenient_text")]
    pub profession: String,
    #[serde(deserialize_with = "lenient_list")]
    pub past_professions: Vec<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub linkedin: String,
    #[serde(deserialize_with = "lenient_text")]
    pub cal_com: String,
    #[serde(deserialize_with = "lenient_list")]
    pub hobbies: Vec<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub ethnicity: String,
    #[serde(deserialize_with = "lenient_text")]
    pub religion: String,
    #[serde(deserialize_with = "lenient_list")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub looking_for: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub industries: Vec<String>,
    #[serde(deserialize_with = "lenient_flag")]
    pub is_mentor: Option<bool>,
    #[serde(deserialize_with = "lenient_flag")]
    pub is_mentee: Option<bool>,
}

/// Scalars become their string form; null, false, 0 and containers become "".
fn coerce_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Bool(true) => "true".into(),
        Value::Number(n) if n.as_f64() != Some(0.0) => n.to_string(),
        _ => String::new(),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(coerce_text(Value::deserialize(deserializer)?))
}

/// Array entries are coerced one by one and blank slots are kept. A lone
/// non-blank scalar becomes a one-element list; anything else is empty.
fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().map(coerce_text).collect(),
        Value::Null | Value::Object(_) => Vec::new(),
        scalar => {
            let text = coerce_text(scalar);
            if text.is_empty() {
                Vec::new()
            } else {
                vec![text]
            }
        }
    })
}

fn lenient_role<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(serde_json::from_value(Value::deserialize(deserializer)?).ok())
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_bool())
}

impl ProfileDocument {
    /// `type` wins; otherwise the flags decide; otherwise mentee.
    fn resolve_role(&self) -> Role {
        if let Some(role) = self.role {
            return role;
        }
        match (self.is_mentor, self.is_mentee) {
            (Some(true), _) => Role::Mentor,
            (_, Some(false)) if self.is_mentor.is_none() => Role::Mentor,
            _ => Role::Mentee,
        }
    }

    /// True when `type` is set and either flag says otherwise.
    fn flags_disagree(&self) -> bool {
        let Some(declared) = self.role else {
            return false;
        };
        let contradicts =
            |flag: Option<bool>, role: Role| flag.is_some_and(|set| set != (declared == role));
        contradicts(self.is_mentor, Role::Mentor) || contradicts(self.is_mentee, Role::Mentee)
    }
}

impl From<ProfileDocument> for Profile {
    fn from(doc: ProfileDocument) -> Self {
        let role = doc.resolve_role();
        if doc.flags_disagree() {
            warn!(
                uid = %doc.uid,
                ?role,
                is_mentor = ?doc.is_mentor,
                is_mentee = ?doc.is_mentee,
                "profile type disagrees with role flags; using type"
            );
        }

        Profile {
            uid: doc.uid,
            user_ref: doc.user_ref,
            role,
            first_name: doc.first_name,
            last_name: doc.last_name,
            email: doc.email,
            phone: doc.phone,
            age: doc.age,
            degree: doc.degree,
            education_level: doc.education_level,
            county: doc.county,
            profession: doc.profession,
            past_professions: doc.past_professions,
            linkedin: doc.linkedin,
            cal_com: doc.cal_com,
            hobbies: doc.hobbies,
            ethnicity: doc.ethnicity,
            religion: doc.religion,
            skills: doc.skills,
            looking_for: doc.looking_for,
            industries: doc.industries,
        }
    }
}

impl From<Profile> for ProfileDocument {
    fn from(profile: Profile) -> Self {
        let role = profile.role;
        ProfileDocument {
            uid: profile.uid,
            user_ref: profile.user_ref,
            role: Some(role),
            first_name: profile.first_name,
            last_name: profile.last_name,
            email: profile.email,
            phone: profile.phone,
            age: profile.age,
            degree: profile.degree,
            education_level: profile.education_level,
            county: profile.county,
            profession: profile.profession,
            past_professions: profile.past_professions,
            linkedin: profile.linkedin,
            cal_com: profile.cal_com,
            hobbies: profile.hobbies,
            ethnicity: profile.ethnicity,
            religion: profile.religion,
            skills: profile.skills,
            looking_for: profile.looking_for,
            industries: profile.industries,
            is_mentor: Some(role == Role::Mentor),
            is_mentee: Some(role == Role::Mentee),
        }
    }
}

pub fn parse_roster<R: Read>(reader: R) -> Result<Vec<Profile>, RosterError> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn parse_availability<R: Read>(reader: R) -> Result<AvailabilityTable, RosterError> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn load_roster(path: &Path) -> Result<Vec<Profile>, RosterError> {
    let roster = parse_roster(open(path)?)?;
    info!(path = %path.display(), profiles = roster.len(), "loaded roster");
    Ok(roster)
}

pub fn load_availability(path: &Path) -> Result<AvailabilityTable, RosterError> {
    let table = parse_availability(open(path)?)?;
    info!(path = %path.display(), entries = table.len(), "loaded availability");
    Ok(table)
}

/// Read any JSON document, e.g. a saved draft.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, RosterError> {
    Ok(serde_json::from_reader(open(path)?)?)
}

fn open(path: &Path) -> Result<BufReader<File>, RosterError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| RosterError::Open {
            path: path.display().to_string(),
            source,
        })
}
