//! Profile form engine: one mutable draft, its validation errors and the
//! debounced re-validation that follows every edit.
//!
//! Edits clear the touched field's error straight away and push the pending
//! full validation out by the debounce window. The host drives time by
//! calling [`ProfileForm::poll`]; [`ProfileForm::flush`] validates
//! immediately (submit path).

pub mod debounce;
pub mod progress;
pub mod validation;

use std::str::FromStr;

use chrono::Duration;
use tracing::debug;

pub use debounce::{Clock, Debouncer, ManualClock, SystemClock};
pub use progress::{
    calculate_progress, missing_fields, section_status, sections_for, FormProgress, Section,
    SectionStatus,
};
pub use validation::{validate, ValidationErrors, ValidationRules};

use crate::{
    profile::{ProfileDraft, ProfileField},
    Profile, Role,
};

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
const MAX_DEBOUNCE_MS: u64 = 60_000;

#[derive(Debug, Clone)]
pub struct FormConfig {
    pub debounce_ms: u64,
    pub rules: ValidationRules,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            rules: ValidationRules::default(),
        }
    }
}

impl FormConfig {
    fn window(&self) -> Duration {
        Duration::milliseconds(self.debounce_ms.min(MAX_DEBOUNCE_MS) as i64)
    }
}

pub struct ProfileForm<C: Clock = SystemClock> {
    role: Option<Role>,
    draft: ProfileDraft,
    errors: ValidationErrors,
    rules: ValidationRules,
    debounce: Debouncer,
    clock: C,
    validation_passes: u64,
}

impl ProfileForm<SystemClock> {
    pub fn new(role: Option<Role>, config: FormConfig) -> Self {
        Self::with_clock(role, config, SystemClock)
    }
}

impl<C: Clock> ProfileForm<C> {
    pub fn with_clock(role: Option<Role>, config: FormConfig, clock: C) -> Self {
        let draft = ProfileDraft {
            role,
            ..ProfileDraft::default()
        };
        Self {
            role,
            draft,
            errors: ValidationErrors::default(),
            debounce: Debouncer::new(config.window()),
            rules: config.rules,
            clock,
            validation_passes: 0,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Switching role changes which fields are required, so a validation is
    /// scheduled like any other edit.
    pub fn set_role(&mut self, role: Option<Role>) {
        if self.role == role {
            return;
        }
        self.role = role;
        self.draft.role = role;
        self.schedule_validation();
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn validation_errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Sets a text field. Returns false (and changes nothing) for list fields.
    pub fn handle_form_change(&mut self, field: ProfileField, value: impl Into<String>) -> bool {
        if !self.draft.set_text(field, value.into()) {
            debug!(field = field.as_ref(), "text change on list field ignored");
            return false;
        }
        self.touched(field);
        true
    }

    /// Same as [`Self::handle_form_change`] but addressed by input name.
    pub fn handle_form_change_by_name(&mut self, name: &str, value: impl Into<String>) -> bool {
        match ProfileField::from_str(name) {
            Ok(field) => self.handle_form_change(field, value),
            Err(_) => {
                debug!(name, "unknown form field ignored");
                false
            }
        }
    }

    /// Replaces a list field wholesale. Returns false for text fields.
    pub fn handle_array_change(&mut self, field: ProfileField, values: Vec<String>) -> bool {
        if !self.draft.set_list(field, values) {
            debug!(field = field.as_ref(), "list change on text field ignored");
            return false;
        }
        self.touched(field);
        true
    }

    pub fn handle_past_profession_change(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.draft.past_professions.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                self.touched(ProfileField::PastProfessions);
                true
            }
            None => false,
        }
    }

    pub fn add_past_profession(&mut self) {
        self.draft.past_professions.push(String::new());
        self.touched(ProfileField::PastProfessions);
    }

    /// The last remaining slot is never removed.
    pub fn remove_past_profession(&mut self, index: usize) -> bool {
        let slots = &mut self.draft.past_professions;
        if slots.len() <= 1 || index >= slots.len() {
            return false;
        }
        slots.remove(index);
        self.touched(ProfileField::PastProfessions);
        true
    }

    /// Merge a partial draft (camelCase keys) over the current one, e.g. to
    /// restore a saved draft. Keys the draft does not know are ignored.
    pub fn set_form_data(&mut self, partial: serde_json::Value) -> Result<(), serde_json::Error> {
        let mut merged = serde_json::to_value(&self.draft)?;
        if let (Some(target), serde_json::Value::Object(updates)) = (merged.as_object_mut(), partial) {
            target.extend(updates);
        }

        let mut draft: ProfileDraft = serde_json::from_value(merged)?;
        if draft.past_professions.is_empty() {
            draft.past_professions.push(String::new());
        }
        if draft.role.is_some() {
            self.role = draft.role;
        }
        draft.role = self.role;
        self.draft = draft;
        self.schedule_validation();
        Ok(())
    }

    /// Pre-fill from a saved profile (edit flow). Errors start clear.
    pub fn load_profile(&mut self, profile: &Profile) {
        self.draft = ProfileDraft::from_profile(profile);
        self.role = Some(profile.role);
        self.errors = ValidationErrors::default();
        self.debounce.cancel();
    }

    /// Full validation of the current draft without touching form state.
    pub fn validate_profile_form(&self) -> ValidationErrors {
        validate(&self.draft, self.role, &self.rules)
    }

    pub fn calculate_form_progress(&self) -> FormProgress {
        calculate_progress(&self.draft, self.role)
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        missing_fields(&self.draft, self.role)
    }

    pub fn section_status(&self) -> Vec<SectionStatus> {
        section_status(&self.draft, self.role)
    }

    pub fn sections(&self) -> &'static [Section] {
        sections_for(self.role)
    }

    pub fn reset_form(&mut self) {
        self.draft = ProfileDraft {
            role: self.role,
            ..ProfileDraft::default()
        };
        self.errors = ValidationErrors::default();
        if self.debounce.cancel() {
            debug!("pending validation cancelled by reset");
        }
    }

    /// Run the pending validation if its window has elapsed. Returns whether
    /// a validation pass ran.
    pub fn poll(&mut self) -> bool {
        if self.debounce.take_due(self.clock.now()) {
            self.run_validation();
            true
        } else {
            false
        }
    }

    /// Validate now, dropping any pending pass.
    pub fn flush(&mut self) -> &ValidationErrors {
        self.debounce.cancel();
        self.run_validation();
        &self.errors
    }

    pub fn has_pending_validation(&self) -> bool {
        self.debounce.is_pending()
    }

    pub fn validation_passes(&self) -> u64 {
        self.validation_passes
    }

    pub fn is_submittable(&self) -> bool {
        self.validate_profile_form().is_empty()
    }

    fn touched(&mut self, field: ProfileField) {
        self.errors.clear(field);
        self.schedule_validation();
    }

    fn schedule_validation(&mut self) {
        self.debounce.schedule(self.clock.now());
    }

    fn run_validation(&mut self) {
        self.errors = self.validate_profile_form();
        self.validation_passes += 1;
        debug!(
            pass = self.validation_passes,
            errors = self.errors.len(),
            "profile form validated"
        );
    }
}

impl<C: Clock> Drop for ProfileForm<C> {
    fn drop(&mut self) {
        if self.debounce.cancel() {
            debug!("pending validation dropped with form");
        }
    }
}
