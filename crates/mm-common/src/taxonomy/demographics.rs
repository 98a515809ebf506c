pub const DEFAULT_ETHNICITY: &str = "Prefer not to say";

pub const ETHNICITY_OPTIONS: &[&str] = &[
    DEFAULT_ETHNICITY,
    // Asian backgrounds
    "Asian or Asian British - East",
    "Asian or Asian British - Middle East",
    "Asian or Asian British - South",
    "Asian or Asian British - Other",
    // Black backgrounds
    "Black or Black British - African",
    "Black or Black British - Caribbean",
    "Black or Black British - Other",
    // Latin American backgrounds
    "Latin American - Other",
    "Latin American - Portuguese-speaking",
    "Latin American - Spanish-speaking",
    // Mixed/Multiple ethnic backgrounds
    "Mixed - Asian and Latin American",
    "Mixed - Black and Asian",
    "Mixed - Black and Latin American",
    "Mixed - Other",
    "Mixed - White and Asian",
    "Mixed - White and Black",
    "Mixed - White and Latin American",
    // Other
    "Indigenous",
    "Jewish",
    "Other Ethnic Group",
    "Romani",
    // White backgrounds
    "White - British",
    "White - European",
    "White - Irish",
    "White - Other",
];

pub const RELIGION_OPTIONS: &[&str] = &[
    "Prefer not to say",
    // Abrahamic
    "Christianity - Catholic",
    "Christianity - Protestant",
    "Christianity - Orthodox",
    "Christianity - Coptic",
    "Christianity - Anglican",
    "Christianity - Methodist",
    "Christianity - Baptist",
    "Christianity - Lutheran",
    "Christianity - Presbyterian",
    "Christianity - Pentecostal",
    "Christianity - Evangelical",
    "Christianity - Other",
    "Islam - Sunni",
    "Islam - Shia",
    "Islam - Sufi",
    "Islam - Ahmadiyya",
    "Islam - Other",
    "Judaism - Orthodox",
    "Judaism - Conservative",
    "Judaism - Reform",
    "Judaism - Reconstructionist",
    "Judaism - Hasidic",
    "Judaism - Other",
    "Baháʼí Faith",
    "Druze",
    "Samaritanism",
    "Mandaeism",
    // Indian
    "Hinduism - Vaishnavism",
    "Hinduism - Shaivism",
    "Hinduism - Shaktism",
    "Hinduism - Smartism",
    "Hinduism - ISKCON",
    "Hinduism - Other",
    "Buddhism - Theravada",
    "Buddhism - Mahayana",
    "Buddhism - Vajrayana",
    "Buddhism - Zen",
    "Buddhism - Pure Land",
    "Buddhism - Other",
    "Sikhism",
    "Jainism - Svetambara",
    "Jainism - Digambara",
    // East Asian
    "Taoism",
    "Confucianism",
    "Shinto",
    "Chinese Folk Religion",
    "Korean Shamanism",
    "Caodaism",
    "Chondogyo",
    "Tenrikyo",
    "Seicho-no-Ie",
    "Falun Gong",
    // Iranian/Persian
    "Zoroastrianism",
    "Yazdânism",
    "Manichaeism",
    // African traditional
    "Yoruba Religion",
    "Vodun",
    "Santería",
    "Candomblé",
    "Umbanda",
    "Odinani",
    "Serer Religion",
    "Zulu Traditional",
    "Akan Religion",
    "Dogon Religion",
    // Indigenous
    "Native American Religions",
    "First Nations Spirituality",
    "Australian Aboriginal Religion",
    "Māori Religion",
    "Sami Shamanism",
    "Siberian Shamanism",
    "Aztec Religion",
    "Inca Religion",
    "Maya Religion",
    // Modern movements
    "Scientology",
    "Raëlism",
    "Wicca",
    "Neo-Paganism",
    "New Age",
    "Theosophy",
    "Anthroposophy",
    "Rastafari",
    "Unitarian Universalism",
    "Unity Church",
    // Ancient religions still practised
    "Hellenism",
    "Roman Polytheism",
    "Kemetism",
    "Germanic Heathenry",
    "Celtic Polytheism",
    "Baltic Polytheism",
    "Slavic Native Faith",
    // Non-religious
    "Atheist",
    "Agnostic",
    "Humanist",
    "Secular",
    "Spiritual but not religious",
    "Religious but not affiliated",
    "Questioning/Seeking",
    "Prefer not to practice",
    // Other
    "Multiple Religious Beliefs",
    "Syncretic Beliefs",
    "Personal Religion/Philosophy",
    "Other",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn options_are_unique() {
        let ethnicities: HashSet<_> = ETHNICITY_OPTIONS.iter().collect();
        assert_eq!(ethnicities.len(), ETHNICITY_OPTIONS.len());
        let religions: HashSet<_> = RELIGION_OPTIONS.iter().collect();
        assert_eq!(religions.len(), RELIGION_OPTIONS.len());
    }

    #[test]
    fn default_ethnicity_comes_first() {
        assert_eq!(ETHNICITY_OPTIONS[0], DEFAULT_ETHNICITY);
    }
}
