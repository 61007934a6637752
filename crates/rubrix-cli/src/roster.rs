//! # Roster Subcommand
//!
//! Loads one group's roster through the session controller and prints it
//! the way the interactive session shows it.

use anyhow::Result;
use clap::Args;

use crate::Controller;

/// Arguments for the `rubrix roster` subcommand.
#[derive(Args, Debug)]
pub struct RosterArgs {
    /// Group letter (A-D).
    #[arg(value_name = "GROUP")]
    pub group: String,

    /// Print the roster as JSON instead of the grade grid.
    #[arg(long)]
    pub json: bool,
}

/// Execute the roster subcommand.
///
/// Returns exit code: 0 on success, 1 if the roster could not be loaded.
pub async fn run_roster(args: &RosterArgs, ctl: &Controller, color: bool) -> Result<u8> {
    match ctl.select_group_str(&args.group).await {
        Ok(_) => {}
        Err(e) if e.is_rejected_locally() => return Err(e.into()),
        // Already reported through the notifier.
        Err(_) => return Ok(1),
    }

    let out = ctl.with_session(|session| -> Result<String> {
        if args.json {
            Ok(serde_json::to_string_pretty(session.students())? + "\n")
        } else {
            Ok(crate::render::screen(session, color))
        }
    })?;
    print!("{out}");
    Ok(0)
}
