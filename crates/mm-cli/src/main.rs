use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::{Parser, Subcommand, ValueEnum};
use dotenvy::dotenv;
use mm_common::{
    config::Settings,
    form::ProfileForm,
    logging::{init_tracing, LoggingConfig},
    matching::{best_matches_for, MatchError},
    profile::{display_name, display_name_or_placeholder, AvailabilityTable},
    roster::{load_availability, load_json, load_roster, RosterError},
    search::{NamedFilter, SearchEngine},
    taxonomy::{self, CategorisedOptions},
    Role,
};
use serde_json::{json, Value};
use strum::IntoEnumIterator;
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "mm-match",
    about = "Validate profile drafts, search mentor rosters and rank matches"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate a saved profile draft and report progress
    Validate {
        /// Draft JSON (camelCase keys, as saved by the form)
        #[arg(long)]
        draft: PathBuf,

        /// Role to validate for; defaults to the draft's `type`
        #[arg(long)]
        role: Option<Role>,

        /// Enforce the per-role age bounds (also `MM_ENFORCE_AGE_RANGE`)
        #[arg(long)]
        enforce_age_range: bool,
    },

    /// Filter a roster by free text and a named filter
    Search {
        #[arg(long, env = "MM_ROSTER_PATH")]
        roster: PathBuf,

        /// Availability side-table keyed by uid
        #[arg(long, env = "MM_AVAILABILITY_PATH")]
        availability: Option<PathBuf>,

        #[arg(long, default_value = "")]
        term: String,

        /// One of the filter pill labels, e.g. "Video calls"
        #[arg(long)]
        filter: Option<NamedFilter>,
    },

    /// Rank opposite-role profiles for one user
    Matches {
        #[arg(long, env = "MM_ROSTER_PATH")]
        roster: PathBuf,

        #[arg(long)]
        uid: String,

        #[arg(long)]
        min_percentage: Option<u8>,

        /// Prefer mentors close in age instead of older ones
        #[arg(long)]
        close_age: bool,
    },

    /// Print one of the fixed option lists
    Options {
        #[arg(value_enum)]
        list: OptionList,

        /// Keep display categories where the list has them
        #[arg(long)]
        grouped: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OptionList {
    Skills,
    Hobbies,
    Industries,
    Counties,
    Education,
    Ethnicity,
    Religion,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error(transparent)]
    Match(#[from] MatchError),
    #[error("invalid draft: {0}")]
    Draft(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

fn run(cli: Cli, settings: Settings) -> Result<Value, CliError> {
    match cli.command {
        Command::Validate {
            draft,
            role,
            enforce_age_range,
        } => validate(draft, role, enforce_age_range, settings),
        Command::Search {
            roster,
            availability,
            term,
            filter,
        } => search(roster, availability, term, filter, settings),
        Command::Matches {
            roster,
            uid,
            min_percentage,
            close_age,
        } => {
            let mut config = settings.matching;
            if let Some(min) = min_percentage {
                config.min_percentage = min;
            }
            if close_age {
                config.older_mentor_preferred = false;
            }
            let roster = load_roster(&roster)?;
            let results = best_matches_for(&uid, &roster, &config)?;
            let rows: Vec<Value> = results
                .iter()
                .map(|result| {
                    json!({
                        "uid": result.user.uid,
                        "name": display_name(&result.user),
                        "percentage": result.percentage,
                        "score": result.score,
                        "reasons": result.reasons,
                    })
                })
                .collect();
            Ok(json!({ "uid": uid, "matches": rows }))
        }
        Command::Options { list, grouped } => Ok(options(list, grouped)),
    }
}

fn validate(
    path: PathBuf,
    role: Option<Role>,
    enforce_age_range: bool,
    settings: Settings,
) -> Result<Value, CliError> {
    let mut config = settings.form;
    if enforce_age_range {
        config.rules.enforce_age_range = true;
    }

    let saved: Value = load_json(&path)?;
    let mut form = ProfileForm::new(role, config);
    form.set_form_data(saved)?;
    if role.is_some() {
        form.set_role(role);
    }
    let errors = form.flush().clone();
    info!(path = %path.display(), errors = errors.len(), "draft validated");

    let draft = form.draft();
    Ok(json!({
        "role": form.role(),
        "valid": errors.is_empty(),
        "errors": errors,
        "progress": form.calculate_form_progress(),
        "missingFields": form.missing_fields(),
        "sections": form.section_status(),
        "degreePlaceholder": taxonomy::degree_placeholder(&draft.education_level),
    }))
}

fn search(
    roster_path: PathBuf,
    availability_path: Option<PathBuf>,
    term: String,
    filter: Option<NamedFilter>,
    settings: Settings,
) -> Result<Value, CliError> {
    let roster = load_roster(&roster_path)?;
    let availability = match availability_path {
        Some(path) => load_availability(&path)?,
        None => AvailabilityTable::new(),
    };

    let mut engine = SearchEngine::with_roster(settings.search, roster, availability.clone());
    engine.set_selected_filter(filter);
    engine.handle_search_change(term);

    let counts: serde_json::Map<String, Value> = NamedFilter::iter()
        .map(|f| (f.to_string(), json!(engine.filter_count(Some(f)))))
        .collect();
    let results: Vec<Value> = engine
        .filtered_mentors()
        .into_iter()
        .map(|profile| json!({ "uid": profile.uid, "name": display_name(profile) }))
        .collect();

    let mut slots: Vec<(&String, _)> = availability.iter().collect();
    slots.sort_by(|a, b| a.0.cmp(b.0));
    let availability: Vec<Value> = slots
        .into_iter()
        .map(|(uid, slot)| {
            let profile = engine.roster().iter().find(|p| &p.uid == uid);
            json!({
                "mentor": display_name_or_placeholder(profile, uid),
                "available": slot.available,
                "nextSlot": slot.next_slot,
            })
        })
        .collect();

    Ok(json!({
        "term": engine.search_term(),
        "filter": engine.selected_filter(),
        "total": engine.filter_count(None),
        "counts": counts,
        "results": results,
        "suggestions": engine.search_suggestions(),
        "availability": availability,
    }))
}

fn options(list: OptionList, grouped: bool) -> Value {
    let categorised = |groups: CategorisedOptions| -> Value {
        groups
            .iter()
            .map(|(category, options)| (category.to_string(), json!(options)))
            .collect::<serde_json::Map<_, _>>()
            .into()
    };

    match (list, grouped) {
        (OptionList::Skills, true) => categorised(taxonomy::SKILLS_BY_CATEGORY),
        (OptionList::Skills, false) => json!(taxonomy::all_skills()),
        (OptionList::Hobbies, true) => categorised(taxonomy::HOBBIES_BY_CATEGORY),
        (OptionList::Hobbies, false) => json!(taxonomy::all_hobbies()),
        (OptionList::Industries, _) => json!(taxonomy::INDUSTRIES),
        (OptionList::Counties, _) => json!(taxonomy::UK_COUNTIES),
        (OptionList::Education, _) => json!(taxonomy::UK_EDUCATION_LEVELS),
        (OptionList::Ethnicity, _) => json!({
            "default": taxonomy::DEFAULT_ETHNICITY,
            "options": taxonomy::ETHNICITY_OPTIONS,
        }),
        (OptionList::Religion, _) => json!(taxonomy::RELIGION_OPTIONS),
    }
}

fn print(value: &Value) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

fn main() {
    dotenv().ok();
    init_tracing("mm-match", &LoggingConfig::from_env());

    let cli = Cli::parse();
    let settings = Settings::from_env();

    if let Err(err) = run(cli, settings).and_then(|value| print(&value)) {
        eprintln!("mm-match failed: {err}");
        std::process::exit(1);
    }
}
