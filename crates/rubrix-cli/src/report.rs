//! # Report Subcommands
//!
//! Read-only views of what the API has stored: assessments (all or per
//! student), the class summary, the rubric header and the active lesson.
//! Each prints text by default or JSON with `--json`.

use anyhow::{Context, Result};
use clap::Args;
use rubrix_client::RubrixClient;
use rubrix_core::StudentId;

use crate::render;

/// Arguments for the `rubrix assessments` subcommand.
#[derive(Args, Debug)]
pub struct AssessmentsArgs {
    /// Only this student's assessments.
    #[arg(long, value_name = "STUDENT")]
    pub student: Option<String>,

    /// Print JSON.
    #[arg(long)]
    pub json: bool,
}

/// Shared flag for the other reports.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Print JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the assessments subcommand.
///
/// Returns exit code 1 when `--student` names a student the API does not
/// know.
pub async fn run_assessments(args: &AssessmentsArgs, client: &RubrixClient) -> Result<u8> {
    let records = match &args.student {
        Some(raw) => {
            let id = student_id(raw)?;
            match client.assessments().for_student(&id).await? {
                Some(history) => {
                    if !args.json {
                        println!("{} ({})", history.student.name, history.student.id);
                    }
                    history.assessments
                }
                None => {
                    eprintln!("! Student not found: {raw}");
                    return Ok(1);
                }
            }
        }
        None => client.assessments().list().await?.assessments,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        print!("{}", render::records(&records));
    }
    Ok(0)
}

pub async fn run_summary(args: &ReportArgs, client: &RubrixClient) -> Result<u8> {
    let summary = client
        .class()
        .summary()
        .await
        .context("failed to load class summary")?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", render::summary(&summary));
    }
    Ok(0)
}

pub async fn run_rubric(args: &ReportArgs, client: &RubrixClient) -> Result<u8> {
    let rubric = client
        .class()
        .rubric()
        .await
        .context("failed to load rubric")?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&rubric)?);
    } else {
        print!("{}", render::rubric(&rubric));
    }
    Ok(0)
}

pub async fn run_lesson(args: &ReportArgs, client: &RubrixClient) -> Result<u8> {
    let lesson = client
        .class()
        .active_lesson()
        .await
        .context("failed to load active lesson")?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&lesson)?);
    } else {
        print!("{}", render::lesson(&lesson));
    }
    Ok(0)
}

/// Interpret a typed student identifier: all digits without a leading zero
/// is numeric, anything else is kept as text.
fn student_id(raw: &str) -> Result<StudentId> {
    let raw = raw.trim();
    if !raw.starts_with('0') {
        if let Ok(n) = raw.parse::<u64>() {
            return Ok(StudentId::Number(n));
        }
    }
    Ok(StudentId::text(raw)?)
}
