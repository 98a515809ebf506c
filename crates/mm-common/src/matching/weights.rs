/// Points each compatibility factor can contribute. Per-item factors
/// (skills, industries, hobbies) award their weight once per shared item;
/// the rest award at most their weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWeights {
    pub profession: u32,
    pub skills: u32,
    pub industries: u32,
    pub education_level: u32,
    pub hobbies: u32,
    pub county: u32,
    pub age: u32,
    pub religion: u32,
}

pub const DEFAULT_WEIGHTS: ScoreWeights = ScoreWeights {
    profession: 20,
    skills: 15,
    industries: 10,
    education_level: 6,
    hobbies: 4,
    county: 4,
    age: 6,
    religion: 2,
};

impl Default for ScoreWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl ScoreWeights {
    /// Denominator for the match percentage.
    pub fn sum(&self) -> u32 {
        self.profession
            + self.skills
            + self.industries
            + self.education_level
            + self.hobbies
            + self.county
            + self.age
            + self.religion
    }
}
