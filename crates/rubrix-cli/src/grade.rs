//! # Grade Subcommand
//!
//! Records a single assessment without entering the interactive session:
//! load the group, then submit, exactly as pressing a grade button would.

use anyhow::Result;
use clap::Args;

use crate::Controller;

/// Arguments for the `rubrix grade` subcommand.
#[derive(Args, Debug)]
pub struct GradeArgs {
    /// Group letter (A-D). The assessment note names this group.
    #[arg(value_name = "GROUP")]
    pub group: String,

    /// Student identifier as shown on the roster.
    #[arg(value_name = "STUDENT")]
    pub student: String,

    /// dribbling, passing, shooting or defense.
    #[arg(value_name = "CRITERION")]
    pub criterion: String,

    /// Numeric grade 1-5 (1 = 1+ Exc+, 5 = 4 Low).
    #[arg(value_name = "GRADE")]
    pub grade: String,
}

/// Execute the grade subcommand.
///
/// Returns exit code: 0 when the API acknowledged the assessment, 1 when a
/// request failed. Invalid input is an error.
pub async fn run_grade(args: &GradeArgs, ctl: &Controller) -> Result<u8> {
    // Validate everything typed before the roster request goes out.
    let _: rubrix_core::Criterion = args.criterion.parse()?;
    let _: rubrix_core::Grade = args.grade.parse()?;

    match ctl.select_group_str(&args.group).await {
        Ok(_) => {}
        Err(e) if e.is_rejected_locally() => return Err(e.into()),
        Err(_) => return Ok(1),
    }

    match ctl
        .submit_str(&args.student, &args.criterion, &args.grade)
        .await
    {
        Ok(key) => {
            tracing::debug!(%key, "grade recorded");
            Ok(0)
        }
        Err(e) if e.is_rejected_locally() => Err(e.into()),
        Err(_) => Ok(1),
    }
}
