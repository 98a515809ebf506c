/// Industries a mentor works in or a mentee is interested in.
pub const INDUSTRIES: &[&str] = &[
    "Accounting",
    "Advertising",
    "Aerospace",
    "Agriculture",
    "Architecture",
    "Automotive",
    "Banking",
    "Biotechnology",
    "Business",
    "Charity & Non-Profit",
    "Construction",
    "Consulting",
    "Creative",
    "Cybersecurity",
    "Design",
    "Education",
    "Energy",
    "Engineering",
    "Entertainment",
    "Environmental",
    "Fashion",
    "Finance",
    "Food & Beverage",
    "Gaming",
    "Government & Public Sector",
    "Healthcare",
    "Hospitality",
    "Insurance",
    "Law",
    "Logistics",
    "Manufacturing",
    "Marketing",
    "Media",
    "Medicine",
    "Pharmaceuticals",
    "Property & Real Estate",
    "Recruitment",
    "Retail",
    "Science",
    "Software",
    "Sport",
    "Startups",
    "Technology",
    "Telecommunications",
    "Transport",
    "Travel & Tourism",
];
