//! Search and filter state over a roster of mentor profiles.
//!
//! Every input change (roster, availability, search term, selected filter)
//! recomputes the filtered list in full, so readers always see a result
//! consistent with the current inputs.

pub mod filters;
pub mod suggestions;

use std::str::FromStr;

use tracing::debug;

pub use filters::NamedFilter;
pub use suggestions::{generate_suggestions, suggestion_value, DEFAULT_SUGGESTION_LIMIT};

use crate::{profile::AvailabilityTable, Profile};

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub suggestion_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    config: SearchConfig,
    roster: Vec<Profile>,
    availability: AvailabilityTable,
    search_term: String,
    selected_filter: Option<NamedFilter>,
    // Indices into `roster`, in roster order.
    filtered: Vec<usize>,
    suggestions: Vec<String>,
    show_dropdown: bool,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        let mut engine = Self {
            config,
            ..Self::default()
        };
        engine.refilter();
        engine
    }

    pub fn with_roster(config: SearchConfig, roster: Vec<Profile>, availability: AvailabilityTable) -> Self {
        let mut engine = Self {
            config,
            roster,
            availability,
            ..Self::default()
        };
        engine.refilter();
        engine
    }

    pub fn set_roster(&mut self, roster: Vec<Profile>) {
        self.roster = roster;
        self.refilter();
    }

    pub fn set_availability(&mut self, availability: AvailabilityTable) {
        self.availability = availability;
        self.refilter();
    }

    pub fn set_selected_filter(&mut self, filter: Option<NamedFilter>) {
        self.selected_filter = filter;
        self.refilter();
    }

    /// Select a filter by its pill label. Empty or unknown labels clear the
    /// selection.
    pub fn set_selected_filter_label(&mut self, label: &str) {
        let filter = match label.trim() {
            "" => None,
            label => match NamedFilter::from_str(label) {
                Ok(filter) => Some(filter),
                Err(_) => {
                    debug!(label, "unknown filter label; showing all");
                    None
                }
            },
        };
        self.set_selected_filter(filter);
    }

    pub fn roster(&self) -> &[Profile] {
        &self.roster
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected_filter(&self) -> Option<NamedFilter> {
        self.selected_filter
    }

    pub fn search_suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn show_search_dropdown(&self) -> bool {
        self.show_dropdown
    }

    /// Input box changed: new term, fresh suggestions, refiltered list.
    pub fn handle_search_change(&mut self, value: impl Into<String>) {
        self.search_term = value.into();
        self.generate_search_suggestions();
        self.refilter();
    }

    pub fn handle_suggestion_click(&mut self, label: &str) {
        self.search_term = suggestion_value(label).to_string();
        self.show_dropdown = false;
        self.refilter();
    }

    /// Pointer pressed somewhere on the page; only presses outside the
    /// search container close the dropdown.
    pub fn handle_pointer_down(&mut self, inside_search_container: bool) {
        if !inside_search_container {
            self.show_dropdown = false;
        }
    }

    pub fn generate_search_suggestions(&mut self) {
        self.suggestions =
            generate_suggestions(&self.roster, &self.search_term, self.config.suggestion_limit);
        self.show_dropdown = !self.suggestions.is_empty();
    }

    pub fn filtered_mentors(&self) -> Vec<&Profile> {
        self.filtered.iter().map(|&i| &self.roster[i]).collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Roster entries passing `filter`, ignoring the search term. `None`
    /// counts the whole roster.
    pub fn filter_count(&self, filter: Option<NamedFilter>) -> usize {
        match filter {
            None => self.roster.len(),
            Some(filter) => self
                .roster
                .iter()
                .filter(|profile| filter.matches(profile, &self.availability))
                .count(),
        }
    }

    /// Count by pill label: empty means all, unknown labels count zero.
    pub fn filter_count_by_label(&self, label: &str) -> usize {
        if label.is_empty() {
            return self.roster.len();
        }
        match NamedFilter::from_str(label) {
            Ok(filter) => self.filter_count(Some(filter)),
            Err(_) => 0,
        }
    }

    fn refilter(&mut self) {
        let needle = self.search_term.to_lowercase();
        let filter = self.selected_filter;
        let availability = &self.availability;

        self.filtered = self
            .roster
            .iter()
            .enumerate()
            .filter(|(_, profile)| needle.is_empty() || filters::matches_term(profile, &needle))
            .filter(|(_, profile)| filter.map_or(true, |f| f.matches(profile, availability)))
            .map(|(i, _)| i)
            .collect();

        debug!(
            roster = self.roster.len(),
            matched = self.filtered.len(),
            term = %self.search_term,
            filter = ?self.selected_filter,
            "mentor list refiltered"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Availability;
    use crate::Role;

    fn mentor(uid: &str, first: &str) -> Profile {
        Profile {
            uid: uid.into(),
            role: Role::Mentor,
            first_name: first.into(),
            last_name: "Test".into(),
            ..Profile::default()
        }
    }

    fn three_mentors() -> Vec<Profile> {
        let mut a = mentor("a", "Alice");
        a.cal_com = "https://cal.com/alice".into();
        a.skills = vec!["Python".into()];
        vec![a, mentor("b", "Bob"), mentor("c", "Cara")]
    }

    fn uids(engine: &SearchEngine) -> Vec<&str> {
        engine
            .filtered_mentors()
            .into_iter()
            .map(|p| p.uid.as_str())
            .collect()
    }

    #[test]
    fn empty_inputs_return_roster_in_order() {
        let engine = SearchEngine::with_roster(SearchConfig::default(), three_mentors(), AvailabilityTable::new());
        assert_eq!(uids(&engine), vec!["a", "b", "c"]);
        assert_eq!(engine.filter_count_by_label(""), 3);
    }

    #[test]
    fn video_calls_filter() {
        let mut engine = SearchEngine::with_roster(SearchConfig::default(), three_mentors(), AvailabilityTable::new());
        assert_eq!(engine.filter_count(Some(NamedFilter::VideoCalls)), 1);
        engine.set_selected_filter_label("Video calls");
        assert_eq!(uids(&engine), vec!["a"]);
    }

    #[test]
    fn unknown_label_counts_zero() {
        let engine = SearchEngine::with_roster(SearchConfig::default(), three_mentors(), AvailabilityTable::new());
        assert_eq!(engine.filter_count_by_label("Weekend only"), 0);
        assert_eq!(engine.filter_count_by_label("Free sessions"), 3);
    }

    #[test]
    fn search_change_filters_and_suggests() {
        let mut engine = SearchEngine::with_roster(SearchConfig::default(), three_mentors(), AvailabilityTable::new());
        engine.handle_search_change("python");
        assert_eq!(uids(&engine), vec!["a"]);
        assert!(engine
            .search_suggestions()
            .contains(&"Skill: Python".to_string()));
        assert!(engine.show_search_dropdown());

        engine.handle_search_change("");
        assert!(engine.search_suggestions().is_empty());
        assert!(!engine.show_search_dropdown());
        assert_eq!(engine.filtered_len(), 3);
    }

    #[test]
    fn suggestion_click_sets_term_and_closes_dropdown() {
        let mut engine = SearchEngine::with_roster(SearchConfig::default(), three_mentors(), AvailabilityTable::new());
        engine.handle_search_change("bo");
        assert!(engine.show_search_dropdown());
        engine.handle_suggestion_click("Name: Bob Test");
        assert_eq!(engine.search_term(), "Bob Test");
        assert!(!engine.show_search_dropdown());
        assert_eq!(uids(&engine), vec!["b"]);
    }

    #[test]
    fn pointer_inside_keeps_dropdown_open() {
        let mut engine = SearchEngine::with_roster(SearchConfig::default(), three_mentors(), AvailabilityTable::new());
        engine.handle_search_change("py");
        engine.handle_pointer_down(true);
        assert!(engine.show_search_dropdown());
        engine.handle_pointer_down(false);
        assert!(!engine.show_search_dropdown());
    }

    #[test]
    fn availability_change_refilters() {
        let mut engine = SearchEngine::with_roster(SearchConfig::default(), three_mentors(), AvailabilityTable::new());
        engine.set_selected_filter(Some(NamedFilter::AvailableNow));
        assert!(engine.filtered_mentors().is_empty());

        let mut table = AvailabilityTable::new();
        table.insert(
            "c".into(),
            Availability {
                available: true,
                next_slot: Some("Tue 14:00".into()),
            },
        );
        engine.set_availability(table);
        assert_eq!(uids(&engine), vec!["c"]);
    }

    #[test]
    fn term_and_filter_combine() {
        let mut roster = three_mentors();
        roster[1].cal_com = "https://cal.com/bob".into();
        let mut engine = SearchEngine::with_roster(SearchConfig::default(), roster, AvailabilityTable::new());
        engine.set_selected_filter(Some(NamedFilter::VideoCalls));
        assert_eq!(uids(&engine), vec!["a", "b"]);
        engine.handle_search_change("bob");
        assert_eq!(uids(&engine), vec!["b"]);
    }
}
