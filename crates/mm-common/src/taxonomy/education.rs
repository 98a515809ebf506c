use std::collections::HashMap;

use lazy_static::lazy_static;

/// UK qualification levels offered in the education picker.
pub const UK_EDUCATION_LEVELS: &[&str] = &[
    "GCSEs",
    "A-Levels",
    "BTEC",
    "Foundation Degree",
    "Bachelor's Degree",
    "Master's Degree",
    "Doctorate/PhD",
    "NVQ/SVQ",
    "Apprenticeship",
    "Other",
];

lazy_static! {
    /// Ordinal used when comparing a mentor's and mentee's education.
    static ref EDUCATION_RANK: HashMap<&'static str, u8> = {
        let mut m = HashMap::new();
        m.insert("GCSEs", 0);
        m.insert("A-Levels", 1); m.insert("BTEC", 1); m.insert("Other", 1);
        m.insert("Foundation Degree", 2);
        m.insert("Bachelor's Degree", 3); m.insert("NVQ/SVQ", 3); m.insert("Apprenticeship", 3);
        m.insert("Master's Degree", 4);
        m.insert("Doctorate/PhD", 5);
        m
    };

    /// Example text shown in the degree field once a level is picked.
    static ref DEGREE_PLACEHOLDERS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("GCSEs", "GCSEs (e.g., Maths, English, Science)");
        m.insert("A-Levels", "A-Levels (e.g., Maths, Physics, Chemistry)");
        m.insert("BTEC", "BTEC (e.g., Business, Engineering, IT)");
        m.insert("Foundation Degree", "Foundation Degree (e.g., Computing, Business)");
        m.insert("Bachelor's Degree", "Bachelor's Degree (e.g., BSc Computer Science)");
        m.insert("Master's Degree", "Master's Degree (e.g., MSc Data Science)");
        m.insert("Doctorate/PhD", "Doctorate/PhD (e.g., PhD in Computer Science)");
        m.insert("NVQ/SVQ", "NVQ/SVQ (e.g., Level 3 Business Administration)");
        m.insert("Apprenticeship", "Apprenticeship (e.g., Software Development)");
        m.insert("Other", "Other Qualification");
        m
    };
}

/// Rank of a known education level; `None` for free text or blanks.
pub fn education_rank(level: &str) -> Option<u8> {
    EDUCATION_RANK.get(level.trim()).copied()
}

/// Master's and doctorate holders count as experienced mentors.
pub fn is_advanced_degree(level: &str) -> bool {
    matches!(level.trim(), "Master's Degree" | "Doctorate/PhD")
}

pub fn degree_placeholder(level: &str) -> Option<&'static str> {
    DEGREE_PLACEHOLDERS.get(level.trim()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_level_has_rank_and_placeholder() {
        for level in UK_EDUCATION_LEVELS {
            assert!(education_rank(level).is_some(), "{level} has no rank");
            assert!(degree_placeholder(level).is_some(), "{level} has no placeholder");
        }
    }

    #[test]
    fn unknown_level_has_no_rank() {
        assert_eq!(education_rank("Hogwarts"), None);
        assert_eq!(education_rank(""), None);
        assert_eq!(education_rank(" Doctorate/PhD "), Some(5));
    }

    #[test]
    fn advanced_degrees() {
        assert!(is_advanced_degree("Master's Degree"));
        assert!(is_advanced_degree("Doctorate/PhD"));
        assert!(!is_advanced_degree("Bachelor's Degree"));
    }
}
