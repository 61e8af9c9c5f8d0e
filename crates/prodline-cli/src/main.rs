//! prodline CLI - Manufacturing Project Timeline Engine
//!
//! Loads a project file, expands it into scheduled tasks, and prints the
//! task table or a text timeline.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use prodline_core::date::{self, Frame};
use prodline_core::{Factory, Project};
use prodline_engine::{expand_project, TemplateCatalog};
use prodline_timeline::{window_days, TextTimeline};

#[derive(Parser)]
#[command(name = "prodline")]
#[command(author, version, about = "Manufacturing project timeline engine", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand a project into its scheduled task list
    Expand {
        /// Project file (JSON: project + factories)
        #[arg(value_name = "FILE")]
        file: std::path::PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Status date; lenient formats accepted (defaults to today)
        #[arg(long, value_name = "DATE")]
        as_of: Option<String>,
    },

    /// Render a text timeline for a project
    Timeline {
        /// Project file (JSON: project + factories)
        #[arg(value_name = "FILE")]
        file: std::path::PathBuf,

        /// Days in the visible window, starting at the project start
        #[arg(long, default_value_t = 42)]
        days: usize,

        /// Status date; lenient formats accepted (defaults to today)
        #[arg(long, value_name = "DATE")]
        as_of: Option<String>,
    },
}

/// On-disk shape of a project file.
#[derive(Deserialize)]
struct ProjectFile {
    project: Project,
    #[serde(default)]
    factories: Vec<Factory>,
}

/// Resolve the status date, accepting anything the lenient parser does.
fn status_date(as_of: Option<String>) -> NaiveDate {
    match as_of {
        Some(raw) => date::normalize(raw, Frame::Local),
        None => Frame::Local.today(),
    }
}

fn load(path: &std::path::Path) -> Result<ProjectFile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let catalog = TemplateCatalog::standard();

    match cli.command {
        Commands::Expand { file, format, as_of } => {
            let input = load(&file)?;
            let today = status_date(as_of);
            let tasks = expand_project(&input.project, &input.factories, &catalog, today);

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tasks)?),
                OutputFormat::Table => print!("{}", TextTimeline::new().render_table(&tasks)),
            }
        }
        Commands::Timeline { file, days, as_of } => {
            let input = load(&file)?;
            let today = status_date(as_of);
            let tasks = expand_project(&input.project, &input.factories, &catalog, today);
            let window = window_days(input.project.start_date, days);
            print!("{}", TextTimeline::new().render(&tasks, &window));
        }
    }

    Ok(())
}
