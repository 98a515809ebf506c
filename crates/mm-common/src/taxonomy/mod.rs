//! Fixed option lists shown in the profile form and searched by the
//! suggestion engine. Everything here is read-only and initialised once.

pub mod counties;
pub mod demographics;
pub mod education;
pub mod hobbies;
pub mod industries;
pub mod skills;

pub use counties::UK_COUNTIES;
pub use demographics::{DEFAULT_ETHNICITY, ETHNICITY_OPTIONS, RELIGION_OPTIONS};
pub use education::{
    degree_placeholder, education_rank, is_advanced_degree, UK_EDUCATION_LEVELS,
};
pub use hobbies::{all_hobbies, HOBBIES_BY_CATEGORY};
pub use industries::INDUSTRIES;
pub use skills::{all_skills, SKILLS_BY_CATEGORY};

/// Options grouped under a display category, in display order.
pub type CategorisedOptions = &'static [(&'static str, &'static [&'static str])];

/// Flatten a categorised list, keeping the first occurrence of each option.
pub(crate) fn flatten_unique(groups: CategorisedOptions) -> Vec<&'static str> {
    let mut seen = std::collections::HashSet::new();
    groups
        .iter()
        .flat_map(|(_, options)| options.iter().copied())
        .filter(|option| seen.insert(*option))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_drops_duplicates_but_keeps_order() {
        const GROUPS: CategorisedOptions = &[("a", &["x", "y"]), ("b", &["y", "z"])];
        assert_eq!(flatten_unique(GROUPS), vec!["x", "y", "z"]);
    }
}
