use std::rc::Rc;

use chrono::{Duration, TimeZone, Utc};
use mm_common::{
    config::Settings,
    form::{FormConfig, ManualClock, ProfileForm, Section},
    matching::{rank_matches, MatchConfig},
    profile::{AvailabilityTable, ProfileField},
    roster::parse_roster,
    search::{NamedFilter, SearchConfig, SearchEngine},
    Profile, Role,
};

const ROSTER: &str = r#"[
    {
        "uid": "mentor-a", "type": "mentor", "firstName": "Alice", "lastName": "Shaw",
        "age": "34", "educationLevel": "Master's Degree", "county": "Kent",
        "profession": "Data Scientist", "skills": ["Python", "Statistics"],
        "industries": ["Technology"], "hobbies": ["Chess"],
        "calCom": "https://cal.com/alice"
    },
    {
        "uid": "mentor-b", "isMentor": true, "firstName": "Ben", "lastName": "Okafor",
        "age": "41", "educationLevel": "Bachelor's Degree", "county": "Essex",
        "profession": "Accountant", "skills": ["Excel"], "industries": ["Finance"]
    },
    {
        "uid": "mentor-c", "type": "mentor", "firstName": "Chloe", "lastName": "Park",
        "pastProfessions": ["Nurse", "Paramedic"], "skills": ["First Aid"]
    },
    {
        "uid": "mentee-1", "type": "mentee", "firstName": "Dev", "lastName": "Patel",
        "age": "17", "educationLevel": "A-Levels", "county": "Kent",
        "profession": "Student", "lookingFor": ["Python", "Statistics"],
        "industries": ["Technology"], "hobbies": ["Chess"]
    }
]"#;

fn roster() -> Vec<Profile> {
    parse_roster(ROSTER.as_bytes()).unwrap()
}

fn mentors() -> Vec<Profile> {
    roster().into_iter().filter(Profile::is_mentor).collect()
}

fn form(role: Role) -> (ProfileForm<Rc<ManualClock>>, Rc<ManualClock>) {
    let clock = Rc::new(ManualClock::new(Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap()));
    let form = ProfileForm::with_clock(Some(role), FormConfig::default(), Rc::clone(&clock));
    (form, clock)
}

#[test]
fn linkedin_error_depends_on_role_and_value() {
    let (mut mentee, _) = form(Role::Mentee);
    assert!(!mentee.validate_profile_form().contains(ProfileField::Linkedin));

    let (mut mentor, _) = form(Role::Mentor);
    assert!(mentor.validate_profile_form().contains(ProfileField::Linkedin));
    mentor.handle_form_change(ProfileField::Linkedin, "https://linkedin.com/in/x");
    assert!(!mentor.validate_profile_form().contains(ProfileField::Linkedin));

    mentee.handle_form_change(ProfileField::Linkedin, "");
    assert!(!mentee.validate_profile_form().contains(ProfileField::Linkedin));
}

#[test]
fn list_errors_track_emptiness_for_both_roles() {
    for role in [Role::Mentor, Role::Mentee] {
        let (mut form, _) = form(role);
        for field in [ProfileField::Skills, ProfileField::Industries, ProfileField::Hobbies] {
            assert!(form.validate_profile_form().contains(field));
            form.handle_array_change(field, vec!["Something".into()]);
            assert!(!form.validate_profile_form().contains(field));
            form.handle_array_change(field, Vec::new());
            assert!(form.validate_profile_form().contains(field));
        }
    }
}

#[test]
fn progress_totals_and_sections() {
    let (mentor, _) = form(Role::Mentor);
    let (mentee, _) = form(Role::Mentee);

    let education_total = |form: &ProfileForm<Rc<ManualClock>>| {
        form.section_status()
            .into_iter()
            .find(|s| s.section == Section::EducationAndCareer)
            .map(|s| s.total)
            .unwrap()
    };
    assert_eq!(education_total(&mentor), education_total(&mentee) + 1);

    let goals = mentee
        .section_status()
        .into_iter()
        .find(|s| s.section == Section::LearningGoals)
        .unwrap();
    assert_eq!(goals.total, 1);

    for form in [&mentor, &mentee] {
        let progress = form.calculate_form_progress();
        assert!(progress.completed_fields <= progress.total_fields);
    }
}

#[test]
fn repeated_array_change_is_stable() {
    let (mut form, _) = form(Role::Mentee);
    let skills = vec!["Rust".to_string()];
    form.handle_array_change(ProfileField::Skills, skills.clone());
    let first = (form.validate_profile_form(), form.calculate_form_progress());
    form.handle_array_change(ProfileField::Skills, skills);
    let second = (form.validate_profile_form(), form.calculate_form_progress());
    assert_eq!(first, second);
}

#[test]
fn single_past_profession_slot_is_kept() {
    let (mut form, _) = form(Role::Mentor);
    form.handle_past_profession_change(0, "some value");
    assert!(!form.remove_past_profession(0));
    assert_eq!(form.draft().past_professions, vec!["some value".to_string()]);
}

#[test]
fn out_of_range_mentee_age_is_accepted_by_default() {
    let (mut form, _) = form(Role::Mentee);
    form.handle_form_change(ProfileField::Age, "17");
    form.handle_form_change(ProfileField::Age, "25");
    assert!(!form.flush().contains(ProfileField::Age));
}

#[test]
fn typing_burst_validates_once_after_pause() {
    let (mut form, clock) = form(Role::Mentee);
    for value in ["d", "de", "dev", "dev@", "dev@x.io"] {
        form.handle_form_change(ProfileField::Email, value);
        clock.advance(Duration::milliseconds(120));
        form.poll();
    }
    assert_eq!(form.validation_passes(), 0);

    clock.advance(Duration::milliseconds(300));
    assert!(form.poll());
    assert_eq!(form.validation_passes(), 1);
    assert!(!form.validation_errors().contains(ProfileField::Email));
}

#[test]
fn empty_search_returns_roster_in_order() {
    let engine = SearchEngine::with_roster(SearchConfig::default(), mentors(), AvailabilityTable::new());
    assert_eq!(engine.filter_count_by_label(""), 3);
    let uids: Vec<_> = engine.filtered_mentors().iter().map(|p| p.uid.clone()).collect();
    assert_eq!(uids, vec!["mentor-a", "mentor-b", "mentor-c"]);
}

#[test]
fn video_calls_filter_counts_one() {
    let mut engine = SearchEngine::with_roster(SearchConfig::default(), mentors(), AvailabilityTable::new());
    assert_eq!(engine.filter_count_by_label("Video calls"), 1);
    engine.set_selected_filter(Some(NamedFilter::VideoCalls));
    let uids: Vec<_> = engine.filtered_mentors().iter().map(|p| p.uid.clone()).collect();
    assert_eq!(uids, vec!["mentor-a"]);
}

#[test]
fn python_term_matches_skill_and_taxonomy() {
    let mut engine = SearchEngine::with_roster(SearchConfig::default(), mentors(), AvailabilityTable::new());
    engine.handle_search_change("python");
    assert_eq!(engine.filtered_len(), 1);
    assert!(engine.search_suggestions().iter().any(|s| s == "Skill: Python"));

    let mut empty = SearchEngine::new(SearchConfig::default());
    empty.handle_search_change("python");
    assert!(empty.search_suggestions().iter().any(|s| s == "Skill: Python"));
}

#[test]
fn experienced_filter_counts_degrees_and_careers() {
    let engine = SearchEngine::with_roster(SearchConfig::default(), mentors(), AvailabilityTable::new());
    assert_eq!(engine.filter_count(Some(NamedFilter::ExperiencedMentors)), 2);
    assert_eq!(engine.filter_count(Some(NamedFilter::FreeSessions)), 3);
    assert_eq!(engine.filter_count(Some(NamedFilter::InPerson)), 2);
}

#[test]
fn mentee_matches_are_ranked_and_bounded() {
    let roster = roster();
    let me = roster.iter().find(|p| p.uid == "mentee-1").unwrap();
    let results = rank_matches(me, &roster, &MatchConfig::default());

    assert_eq!(results.first().map(|r| r.user.uid.as_str()), Some("mentor-a"));
    assert!(results.iter().all(|r| r.user.is_mentor()));
    assert!(results.iter().all(|r| (10..=100).contains(&r.percentage)));
    assert!(results.windows(2).all(|w| w[0].percentage >= w[1].percentage));
}

#[test]
fn settings_flow_into_engines() {
    let settings = Settings::from_lookup(|key| match key {
        "MM_SUGGESTION_LIMIT" => Some("2".into()),
        "MM_MIN_MATCH_PERCENTAGE" => Some("0".into()),
        _ => None,
    });

    let mut engine = SearchEngine::new(settings.search);
    engine.handle_search_change("a");
    assert_eq!(engine.search_suggestions().len(), 2);

    let roster = roster();
    let me = roster.iter().find(|p| p.uid == "mentee-1").unwrap();
    assert_eq!(rank_matches(me, &roster, &settings.matching).len(), 3);
}

#[test]
fn one_mistyped_record_does_not_sink_the_roster() {
    let roster = parse_roster(
        r#"[
            {"uid": "m1", "type": "mentor", "firstName": "Ada", "calCom": null, "age": 34,
             "educationLevel": "A-Levels", "pastProfessions": ["Nurse", ""]},
            {"uid": "m2", "type": "mentor", "firstName": "Bo", "pastProfessions": "Nurse"}
        ]"#
        .as_bytes(),
    )
    .unwrap();

    let mut engine = SearchEngine::with_roster(SearchConfig::default(), roster, AvailabilityTable::new());
    assert_eq!(engine.filter_count(None), 2);
    assert_eq!(engine.filter_count(Some(NamedFilter::VideoCalls)), 0);
    assert_eq!(engine.filter_count(Some(NamedFilter::ExperiencedMentors)), 1);

    engine.handle_search_change("nurse");
    assert_eq!(engine.filtered_len(), 2);
}
