//! # smu-courses
//!
//! Operator preview of the "Latest Courses" panel. Runs the same pipeline the
//! landing page runs, against the configured Moodle, and prints the cards.
//!
//! ## Usage
//!
//! ```bash
//! MOODLE_URL=https://lms.example.ac.tz MOODLE_TOKEN=... smu-courses
//! smu-courses --env-file .env.production --format json
//! ```
//!
//! Exit codes: 0 on success (including an empty course list), 1 when retrieval
//! failed, 2 when configuration is missing.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};

use smu_courses::config::{MOODLE_TOKEN_VAR, MOODLE_URL_VAR};
use smu_courses::present::PLACEHOLDER_CARDS;
use smu_courses::{CourseCard, CoursePanel, ReqwestTransport, SiteConfig};

#[derive(Parser, Debug)]
#[command(name = "smu-courses")]
#[command(about = "Preview the latest courses shown on the SMU landing page")]
#[command(version)]
struct Args {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Load settings from this file instead of ./.env
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn load_env_file(path: Option<&PathBuf>) -> Result<()> {
    match path {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("Failed to load env file {}", path.display()))?;
        }
        None => {
            // A missing ./.env is normal; settings may come from the shell.
            if let Ok(path) = dotenvy::dotenv() {
                debug!("loaded {}", path.display());
            }
        }
    }
    Ok(())
}

fn print_text(panel: &CoursePanel) {
    match panel {
        CoursePanel::Loading => {
            println!("Loading ({PLACEHOLDER_CARDS} placeholder cards)");
        }
        CoursePanel::ConfigurationMissing { settings } => {
            println!("Moodle Configuration Required");
            println!("Add these variables to your environment:");
            println!("  {MOODLE_URL_VAR}=your_moodle_url");
            println!("  {MOODLE_TOKEN_VAR}=your_moodle_token");
            println!("Missing: {}", settings.join(", "));
        }
        CoursePanel::Failed => {
            println!("Failed to load courses. Please verify your Moodle API token and try again.");
        }
        CoursePanel::Empty => {
            println!("No courses available at the moment.");
        }
        CoursePanel::Ready(cards) => {
            for card in cards {
                print_card(card);
            }
        }
    }
}

fn print_card(card: &CourseCard) {
    println!("[{}] {}", card.category, card.title);
    println!("    {}", card.description);
    println!("    image: {}", card.image);
    println!("    link:  {}", card.link);
    println!();
}

fn print_json(panel: &CoursePanel) -> Result<()> {
    let value = match panel {
        CoursePanel::Loading => serde_json::json!({ "state": "loading" }),
        CoursePanel::ConfigurationMissing { settings } => {
            serde_json::json!({ "state": "configuration_missing", "settings": settings })
        }
        CoursePanel::Failed => serde_json::json!({ "state": "failed" }),
        CoursePanel::Empty => serde_json::json!({ "state": "empty", "courses": [] }),
        CoursePanel::Ready(cards) => serde_json::json!({ "state": "ready", "courses": cards }),
    };
    let out = serde_json::to_string_pretty(&value).context("Failed to serialize output")?;
    println!("{out}");
    Ok(())
}

async fn run(args: Args) -> Result<ExitCode> {
    load_env_file(args.env_file.as_ref())?;

    let site = SiteConfig::from_env();
    info!(configured = site.is_complete(), "resolving latest courses");

    let panel = CoursePanel::resolve(&site, ReqwestTransport::new()).await;

    match args.format {
        Format::Text => print_text(&panel),
        Format::Json => print_json(&panel)?,
    }

    Ok(match panel {
        CoursePanel::ConfigurationMissing { .. } => ExitCode::from(2),
        CoursePanel::Failed => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[smu-courses][error] {e:#}");
            ExitCode::FAILURE
        }
    }
}
