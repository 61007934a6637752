//! # rubrix-cli: Terminal Front-End for Rubrix
//!
//! Provides the `rubrix` command-line interface. The interactive `session`
//! subcommand is the terminal rendition of the assessment page: pick a
//! group, then press a grade for each student and criterion.
//!
//! ## Subcommands
//!
//! - `rubrix session`: interactive grading session.
//! - `rubrix roster <GROUP>`: print a group's roster.
//! - `rubrix grade <GROUP> <STUDENT> <CRITERION> <GRADE>`: record one grade.
//! - `rubrix legend`: the grade label and colour table.
//! - `rubrix assessments`, `rubrix summary`, `rubrix rubric`,
//!   `rubrix lesson`: read-only reports.
//!
//! ```bash
//! rubrix --api-url http://127.0.0.1:8000 roster B
//! rubrix grade B 012 shooting 3
//! ```

pub mod grade;
pub mod render;
pub mod report;
pub mod roster;
pub mod session;

use rubrix_client::RubrixClient;
use rubrix_session::{Notice, Notifier, SessionController};

/// Controller type used by every subcommand.
pub type Controller = SessionController<RubrixClient, TerminalNotifier>;

/// Prints notices to the terminal: errors to stderr, confirmations to
/// stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        if notice.is_error() {
            eprintln!("! {notice}");
        } else {
            println!("{notice}");
        }
    }
}

/// Build a controller over `client` that reports to the terminal.
pub fn controller(client: RubrixClient) -> Controller {
    SessionController::new(client, TerminalNotifier)
}
