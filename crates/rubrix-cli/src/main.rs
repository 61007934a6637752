//! # rubrix CLI entry point
//!
//! Parses command-line arguments, builds the API client and dispatches to
//! subcommand handlers.

use std::io::IsTerminal as _;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rubrix_cli::grade::{run_grade, GradeArgs};
use rubrix_cli::report::{
    run_assessments, run_lesson, run_rubric, run_summary, AssessmentsArgs, ReportArgs,
};
use rubrix_cli::roster::{run_roster, RosterArgs};
use rubrix_cli::session::{run_session, SessionArgs};
use rubrix_client::config::env_timeout_secs;
use rubrix_client::{ApiConfig, RubrixClient};

/// Rubrix: basketball skill assessment from the terminal.
///
/// Pick a group, see its roster and record a 1-5 grade per student and
/// criterion against the assessment API.
#[derive(Parser, Debug)]
#[command(name = "rubrix", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// API base URL. Overrides RUBRIX_API_URL.
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Request timeout in seconds. Overrides RUBRIX_TIMEOUT_SECS.
    #[arg(long, global = true, value_name = "N")]
    timeout_secs: Option<u64>,

    /// Never colour the selected grade buttons.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive grading session.
    Session(SessionArgs),

    /// Load and print a group's roster.
    Roster(RosterArgs),

    /// Record one grade for a student in a group.
    Grade(GradeArgs),

    /// Print the grade label and colour table.
    Legend,

    /// List stored assessments.
    Assessments(AssessmentsArgs),

    /// Class-wide assessment summary.
    Summary(ReportArgs),

    /// Rubric header: title, criteria and class size.
    Rubric(ReportArgs),

    /// The active lesson with its groups and rotation timer.
    Lesson(ReportArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<u8> {
    if let Commands::Legend = cli.command {
        print!("{}", rubrix_cli::render::legend());
        return Ok(0);
    }

    let config = config(&cli)?;
    tracing::debug!(
        base_url = %config.base_url,
        timeout_secs = config.timeout_secs,
        "api config"
    );
    let client = RubrixClient::new(config).context("failed to build HTTP client")?;
    let color =
        !cli.no_color && std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal();

    match &cli.command {
        Commands::Session(args) => run_session(args, &rubrix_cli::controller(client), color).await,
        Commands::Roster(args) => run_roster(args, &rubrix_cli::controller(client), color).await,
        Commands::Grade(args) => run_grade(args, &rubrix_cli::controller(client)).await,
        Commands::Assessments(args) => run_assessments(args, &client).await,
        Commands::Summary(args) => run_summary(args, &client).await,
        Commands::Rubric(args) => run_rubric(args, &client).await,
        Commands::Lesson(args) => run_lesson(args, &client).await,
        Commands::Legend => Ok(0),
    }
}

/// Environment configuration with command-line overrides applied.
fn config(cli: &Cli) -> anyhow::Result<ApiConfig> {
    let mut config = match &cli.api_url {
        Some(url) => ApiConfig::new(url)?,
        None => ApiConfig::from_env()?,
    };
    config.timeout_secs = cli.timeout_secs.unwrap_or_else(env_timeout_secs);
    Ok(config)
}
