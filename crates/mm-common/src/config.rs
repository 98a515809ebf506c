//! Environment-driven tunables.
//!
//! | Variable | Default | Used by |
//! |----------|---------|---------|
//! | `MM_DEBOUNCE_MS` | 300 | form re-validation window |
//! | `MM_ENFORCE_AGE_RANGE` | false | form age bounds rule |
//! | `MM_SUGGESTION_LIMIT` | 8 | search dropdown size |
//! | `MM_MIN_MATCH_PERCENTAGE` | 10 | match ranking cut-off |
//! | `MM_OLDER_MENTOR_PREFERRED` | true | age scoring mode |
//!
//! Unparseable values fall back to the default with a warning.

use std::str::FromStr;

use tracing::warn;

use crate::{
    form::{FormConfig, ValidationRules},
    matching::MatchConfig,
    search::SearchConfig,
};

pub const ENV_DEBOUNCE_MS: &str = "MM_DEBOUNCE_MS";
pub const ENV_ENFORCE_AGE_RANGE: &str = "MM_ENFORCE_AGE_RANGE";
pub const ENV_SUGGESTION_LIMIT: &str = "MM_SUGGESTION_LIMIT";
pub const ENV_MIN_MATCH_PERCENTAGE: &str = "MM_MIN_MATCH_PERCENTAGE";
pub const ENV_OLDER_MENTOR_PREFERRED: &str = "MM_OLDER_MENTOR_PREFERRED";

/// All engine settings resolved in one place.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub form: FormConfig,
    pub search: SearchConfig,
    pub matching: MatchConfig,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings from an arbitrary key lookup (tests, CLI overrides).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();

        let form = FormConfig {
            debounce_ms: parse_or(&lookup, ENV_DEBOUNCE_MS, defaults.form.debounce_ms),
            rules: ValidationRules {
                enforce_age_range: bool_or(
                    &lookup,
                    ENV_ENFORCE_AGE_RANGE,
                    defaults.form.rules.enforce_age_range,
                ),
                ..defaults.form.rules
            },
        };

        let search = SearchConfig {
            suggestion_limit: parse_or(
                &lookup,
                ENV_SUGGESTION_LIMIT,
                defaults.search.suggestion_limit,
            ),
        };

        let matching = MatchConfig {
            min_percentage: parse_or(
                &lookup,
                ENV_MIN_MATCH_PERCENTAGE,
                defaults.matching.min_percentage,
            ),
            older_mentor_preferred: bool_or(
                &lookup,
                ENV_OLDER_MENTOR_PREFERRED,
                defaults.matching.older_mentor_preferred,
            ),
            ..defaults.matching
        };

        Settings {
            form,
            search,
            matching,
        }
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Debug,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, ?default, "invalid setting; using default");
            default
        }),
        None => default,
    }
}

fn bool_or<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => {
                warn!(key, value = %raw, default, "invalid boolean setting; using default");
                default
            }
        },
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let settings = Settings::from_lookup(|_| None);
        assert_eq!(settings.form.debounce_ms, 300);
        assert!(!settings.form.rules.enforce_age_range);
        assert_eq!(settings.search.suggestion_limit, 8);
        assert_eq!(settings.matching.min_percentage, 10);
        assert!(settings.matching.older_mentor_preferred);
    }

    #[test]
    fn overrides_are_applied() {
        let settings = Settings::from_lookup(lookup_from(&[
            (ENV_DEBOUNCE_MS, "50"),
            (ENV_ENFORCE_AGE_RANGE, "TRUE"),
            (ENV_SUGGESTION_LIMIT, "3"),
            (ENV_MIN_MATCH_PERCENTAGE, "25"),
            (ENV_OLDER_MENTOR_PREFERRED, "off"),
        ]));
        assert_eq!(settings.form.debounce_ms, 50);
        assert!(settings.form.rules.enforce_age_range);
        assert_eq!(settings.search.suggestion_limit, 3);
        assert_eq!(settings.matching.min_percentage, 25);
        assert!(!settings.matching.older_mentor_preferred);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[
            (ENV_DEBOUNCE_MS, "soon"),
            (ENV_ENFORCE_AGE_RANGE, "maybe"),
        ]));
        assert_eq!(settings.form.debounce_ms, 300);
        assert!(!settings.form.rules.enforce_age_range);
    }
}
