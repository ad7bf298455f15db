mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, OutputArgs, PreviewArgs, ScoreArgs};
use pairscore::config::{self, Config, LoadedConfig};
use pairscore::core::answers::{self, AnswersMap};
use pairscore::core::preview::generate_profile_preview;
use pairscore::core::profile::CompatibilityProfile;
use pairscore::core::report::{self, PreviewReport, ProfileReport};
use pairscore::core::{self as scoring, TipSelection};
use pairscore::utils::fs as fs_utils;
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Score(args) => run_score(args),
        Commands::Preview(args) => run_preview(args),
        Commands::Init(args) => {
            let path = match args.config {
                Some(path) => path,
                None => std::env::current_dir()?.join(config::CONFIG_FILE_NAME),
            };
            config::write_default_config(&path)?;
            println!("created {}", path.display());
            Ok(0)
        }
    }
}

fn load_config(output: &OutputArgs) -> Result<LoadedConfig> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(output.config.as_deref(), &cwd)?;
    match &loaded.source {
        Some(path) => debug!(path = %path.display(), "loaded config"),
        None => debug!("no config file found, using defaults"),
    }
    debug!(
        min_answers = loaded.config.scoring.min_answers,
        tips = %loaded.config.tips.selection,
        "resolved config"
    );

    if !loaded.config.general.color {
        colored::control::set_override(false);
    }
    Ok(loaded)
}

fn load_answers(path: &Path) -> Result<AnswersMap> {
    let content = fs_utils::read_input(path)?;
    let parsed = answers::parse_answers(&content)
        .with_context(|| format!("failed parsing answers from {}", fs_utils::display_source(path)))?;
    info!(
        source = %fs_utils::display_source(path),
        count = parsed.len(),
        "loaded answers"
    );
    Ok(parsed)
}

fn load_profile(path: &Path) -> Result<CompatibilityProfile> {
    let content = fs_utils::read_input(path)?;
    CompatibilityProfile::from_json(&content)
        .with_context(|| format!("failed parsing profile from {}", fs_utils::display_source(path)))
}

fn score_answers(answers: &AnswersMap, cfg: &Config, tips: TipSelection) -> CompatibilityProfile {
    let options = scoring::ScoringOptions {
        tips,
        ..cfg.scoring_options()
    };
    debug!(?options, "scoring answers");

    let profile = scoring::calculate_compatibility_profile_with(answers, &options);
    if profile.is_default() {
        eprintln!(
            "warning: only {} answers supplied (need {}); showing the default profile",
            answers.len(),
            options.min_answers
        );
    }
    profile
}

fn run_score(args: ScoreArgs) -> Result<i32> {
    let loaded = load_config(&args.output)?;
    let answers = load_answers(&args.answers)?;

    let tips = match (args.seed, args.random_tips) {
        (Some(seed), _) => TipSelection::Seeded(seed),
        (None, true) => TipSelection::Random,
        (None, false) => loaded.config.tips.tip_selection(),
    };
    let profile = score_answers(&answers, &loaded.config, tips);

    if args.output.json || loaded.config.general.json {
        let json_report = ProfileReport::from(&profile);
        println!("{}", serde_json::to_string_pretty(&json_report)?);
    } else {
        report::print_human(&profile);
    }

    Ok(0)
}

fn run_preview(args: PreviewArgs) -> Result<i32> {
    let loaded = load_config(&args.output)?;

    let profile = match (&args.profile, &args.answers) {
        (Some(path), _) => load_profile(path)?,
        (None, Some(path)) => {
            let answers = load_answers(path)?;
            score_answers(&answers, &loaded.config, loaded.config.tips.tip_selection())
        }
        (None, None) => {
            let answers = load_answers(Path::new(fs_utils::STDIN_MARKER))?;
            score_answers(&answers, &loaded.config, loaded.config.tips.tip_selection())
        }
    };
    let preview = generate_profile_preview(&profile);

    if args.output.json || loaded.config.general.json {
        let json_report = PreviewReport::from(&preview);
        println!("{}", serde_json::to_string_pretty(&json_report)?);
    } else {
        report::print_preview(&preview);
    }

    Ok(0)
}
