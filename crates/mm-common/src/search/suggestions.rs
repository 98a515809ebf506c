use std::collections::HashSet;

use crate::{
    taxonomy::{all_skills, INDUSTRIES, UK_COUNTIES, UK_EDUCATION_LEVELS},
    Profile,
};

pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;

/// Ordered, de-duplicated list of `"Label: value"` strings capped at `limit`.
struct SuggestionSet {
    seen: HashSet<String>,
    items: Vec<String>,
    limit: usize,
}

impl SuggestionSet {
    fn new(limit: usize) -> Self {
        Self {
            seen: HashSet::new(),
            items: Vec::new(),
            limit,
        }
    }

    fn is_full(&self) -> bool {
        self.items.len() >= self.limit
    }

    fn offer(&mut self, label: &str, value: &str, needle: &str) {
        if self.is_full() || value.trim().is_empty() || !value.to_lowercase().contains(needle) {
            return;
        }
        let entry = format!("{label}: {value}");
        if self.seen.insert(entry.clone()) {
            self.items.push(entry);
        }
    }
}

/// Roster-derived suggestions come first, then the static taxonomies, so an
/// option nobody on the roster has can still be suggested.
pub fn generate_suggestions(roster: &[Profile], query: &str, limit: usize) -> Vec<String> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    let mut set = SuggestionSet::new(limit);

    for profile in roster {
        let name = format!("{} {}", profile.first_name, profile.last_name);
        set.offer("Name", name.trim(), &needle);
        set.offer("Profession", &profile.profession, &needle);
        set.offer("Location", &profile.county, &needle);
        set.offer("Education", &profile.education_level, &needle);
    }

    for skill in all_skills() {
        set.offer("Skill", skill, &needle);
    }
    for industry in INDUSTRIES {
        set.offer("Industry", industry, &needle);
    }
    for level in UK_EDUCATION_LEVELS {
        set.offer("Education", level, &needle);
    }
    for county in UK_COUNTIES {
        set.offer("Location", county, &needle);
    }

    set.items
}

/// Value part of a suggestion label: the text after the first `": "`, or
/// the whole label when there is none.
pub fn suggestion_value(label: &str) -> &str {
    match label.split_once(": ") {
        Some((_, value)) if !value.is_empty() => value,
        _ => label,
    }
}
