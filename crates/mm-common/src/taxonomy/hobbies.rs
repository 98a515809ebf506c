use once_cell::sync::Lazy;

use super::{flatten_unique, CategorisedOptions};

pub const HOBBIES_BY_CATEGORY: CategorisedOptions = &[
    (
        "Art",
        &[
            "Animation",
            "Calligraphy",
            "Digital Art",
            "Drawing",
            "Painting",
            "Photography",
            "Pottery",
            "Sculpture",
            "Street Art",
            "Other Art",
        ],
    ),
    (
        "Collecting",
        &[
            "Coin Collecting",
            "Comic Book Collecting",
            "Record Collecting",
            "Stamp Collecting",
            "Instrument Collecting",
            "Collecting",
        ],
    ),
    (
        "Crafts",
        &[
            "DIY Crafts",
            "Interior Design",
            "Jewelry Making",
            "Knitting",
            "Metalworking",
            "Model Building",
            "Quilting",
            "Sewing",
            "Woodworking",
            "Crocheting",
            "Other Craft",
        ],
    ),
    (
        "Dance",
        &[
            "Ballroom Dancing",
            "Ballet",
            "Salsa Dance",
            "Hip Hop / Street Dance",
            "Jazz Dance",
            "Other Dancing",
        ],
    ),
    (
        "Food and Drink",
        &[
            "Baking",
            "BBQ & Grilling",
            "Bread Making",
            "Cake Decorating",
            "Cooking",
            "Other Food and Drink Prep",
        ],
    ),
    (
        "Games",
        &[
            "Board Games",
            "Video Games",
            "Chess",
            "Dungeons & Dragons",
            "Other Games",
        ],
    ),
    ("Gardening", &["Home Gardening", "Other Gardening"]),
    ("Language", &["Language Learning", "Linguistics"]),
    (
        "Media and Content",
        &[
            "Blogging",
            "Podcasting",
            "Vlogging",
            "Web Design",
            "Streaming",
            "Content Creation",
            "Other Media and Content",
        ],
    ),
    (
        "Mindfulness",
        &["Meditation", "Mindfulness", "Yoga", "Other Mindfulness"],
    ),
    (
        "Music",
        &[
            "Bass",
            "Choir",
            "Drums",
            "Guitar",
            "Piano",
            "Saxophone",
            "Singing",
            "Violin",
            "Composition / Production",
            "Other Instrument(s)",
        ],
    ),
    (
        "Nature",
        &[
            "Bird Watching",
            "Nature Recording",
            "Wildlife Conservation",
            "Other Nature Activities",
        ],
    ),
    (
        "Outdoor Recreation",
        &[
            "Camping",
            "Fishing",
            "Hunting",
            "Kayaking",
            "Mountain Biking",
            "Rock Climbing",
            "Sailing",
            "Scuba Diving",
            "Wildlife Watching",
            "Other Outdoor Recreation",
        ],
    ),
    (
        "Performing Arts",
        &[
            "Acting",
            "Stunts",
            "Stage Skills",
            "Magic",
            "Musical Theater",
            "Stand-up Comedy",
            "Other Performing Arts",
        ],
    ),
    (
        "Science",
        &[
            "Researching Science",
            "Practicing Science",
            "Other Scientific Activities",
        ],
    ),
    (
        "Sports",
        &[
            "Badminton",
            "Baseball",
            "Basketball",
            "Biking",
            "Cricket",
            "Cycling",
            "Football",
            "Golf",
            "Hiking",
            "Ice Skating",
            "Boxing",
            "Martial Arts",
            "Rock Climbing",
            "Roller Skating",
            "Rugby",
            "Running",
            "Skateboarding",
            "Skiing",
            "Snowboarding",
            "Surfing",
            "Swimming",
            "Table Tennis",
            "Tennis",
            "Volleyball",
            "Other Sport(s)",
        ],
    ),
    (
        "Technology",
        &[
            "Creating Technology",
            "Exploring new Technology",
            "Programming",
            "Robotics",
            "Other Technology Interests",
        ],
    ),
    (
        "Travel and Adventure",
        &["Travelling the World", "Travelling the Country"],
    ),
    (
        "Volunteering",
        &[
            "Animal Rescue",
            "Environmental Conservation",
            "Teaching",
            "Other Volunteering",
        ],
    ),
    (
        "Writing",
        &["Creative Writing", "Journalism", "Poetry", "Other Writing"],
    ),
    ("Other", &["Fashion", "Film & TV", "Other"]),
];

static ALL_HOBBIES: Lazy<Vec<&'static str>> =
    Lazy::new(|| flatten_unique(HOBBIES_BY_CATEGORY));

pub fn all_hobbies() -> &'static [&'static str] {
    &ALL_HOBBIES
}
