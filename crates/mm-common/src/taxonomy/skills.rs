use once_cell::sync::Lazy;

use super::{flatten_unique, CategorisedOptions};

/// Skills offered by mentors and requested by mentees, grouped for the picker.
pub const SKILLS_BY_CATEGORY: CategorisedOptions = &[
    (
        "Academic",
        &[
            "Mathematics",
            "Physics",
            "Chemistry",
            "Biology",
            "Computer Science",
            "Statistics",
            "Calculus",
            "Algebra",
            "Geometry",
            "Data Science",
        ],
    ),
    (
        "Technology & Programming",
        &[
            "Web Development",
            "Mobile Development",
            "Python",
            "JavaScript",
            "Java",
            "C++",
            "React",
            "Node.js",
            "Database Design",
            "Cloud Computing",
            "Machine Learning",
            "Artificial Intelligence",
            "Cybersecurity",
            "DevOps",
            "UI/UX Design",
            "Software Architecture",
        ],
    ),
    (
        "Business & Professional",
        &[
            "Project Management",
            "Business Strategy",
            "Marketing",
            "Digital Marketing",
            "Social Media Marketing",
            "Public Relations",
            "Sales",
            "Entrepreneurship",
            "Finance",
            "Accounting",
            "Investment",
            "Business Analysis",
            "Human Resources",
            "Leadership",
            "Team Management",
            "Public Speaking",
            "Negotiation",
            "Business Writing",
            "Consulting",
        ],
    ),
    (
        "Creative Arts",
        &[
            "Graphic Design",
            "Web Design",
            "3D Modeling",
            "Animation",
            "Video Editing",
            "Photography",
            "Drawing",
            "Painting",
            "Music Production",
            "Music Theory",
            "Songwriting",
            "Creative Writing",
            "Content Creation",
            "Film Making",
        ],
    ),
    (
        "Languages",
        &[
            "English",
            "Spanish",
            "French",
            "German",
            "Chinese",
            "Japanese",
            "Korean",
            "Arabic",
            "Russian",
            "Portuguese",
            "Italian",
        ],
    ),
    (
        "Soft Skills",
        &[
            "Communication",
            "Time Management",
            "Problem Solving",
            "Critical Thinking",
            "Emotional Intelligence",
            "Conflict Resolution",
            "Teamwork",
            "Adaptability",
            "Work Ethics",
            "Stress Management",
        ],
    ),
    (
        "Specialized Fields",
        &[
            "Data Analytics",
            "Digital Marketing",
            "Product Management",
            "Supply Chain Management",
            "Quality Assurance",
            "Research Methods",
            "Technical Writing",
            "SEO",
            "Blockchain",
            "IoT",
            "Renewable Energy",
            "Environmental Science",
            "Healthcare Management",
        ],
    ),
];

static ALL_SKILLS: Lazy<Vec<&'static str>> = Lazy::new(|| flatten_unique(SKILLS_BY_CATEGORY));

/// Every skill across all categories, in category order, without repeats.
pub fn all_skills() -> &'static [&'static str] {
    &ALL_SKILLS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digital_marketing_listed_once() {
        let count = all_skills()
            .iter()
            .filter(|skill| **skill == "Digital Marketing")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn keeps_category_order() {
        assert_eq!(all_skills().first(), Some(&"Mathematics"));
        assert_eq!(all_skills().last(), Some(&"Healthcare Management"));
    }
}
