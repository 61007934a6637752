//! # Interactive Session
//!
//! A line-oriented rendition of the assessment page. The screen is redrawn
//! after every command that changes what would be visible.
//!
//! ```text
//! > group B
//! > grade 012 shooting 3
//! > back
//! ```

use std::io::Write as _;

use anyhow::{bail, Result};
use clap::Args;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::{render, Controller};

/// Arguments for the `rubrix session` subcommand.
#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Start with this group loaded.
    #[arg(long, value_name = "GROUP")]
    pub group: Option<String>,
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Groups,
    Group(String),
    Back,
    Grade {
        student: String,
        criterion: String,
        grade: String,
    },
    Show,
    Legend,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  groups                              show the group picker
  group <A-D>                         load a group's roster
  back                                return to the group picker
  grade <student> <criterion> <1-5>   record a grade
  show                                redraw the screen
  legend                              grade labels and colours
  quit                                leave the session
";

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&verb, rest)) = words.split_first() else {
        return Ok(None);
    };

    let cmd = match (verb.to_ascii_lowercase().as_str(), rest) {
        ("groups", []) => Command::Groups,
        ("group", [g]) => Command::Group(g.to_string()),
        ("back", []) => Command::Back,
        ("grade", [student, criterion, grade]) => Command::Grade {
            student: student.to_string(),
            criterion: criterion.to_string(),
            grade: grade.to_string(),
        },
        ("show", []) => Command::Show,
        ("legend", []) => Command::Legend,
        ("help" | "?", []) => Command::Help,
        ("quit" | "exit" | "q", []) => Command::Quit,
        ("group", _) => bail!("usage: group <A-D>"),
        ("grade", _) => bail!("usage: grade <student> <criterion> <1-5>"),
        _ => bail!("unknown command: {line} (try `help`)"),
    };
    Ok(Some(cmd))
}

/// Execute the session subcommand, reading commands from stdin.
pub async fn run_session(args: &SessionArgs, ctl: &Controller, color: bool) -> Result<u8> {
    if let Some(group) = &args.group {
        if let Err(e) = ctl.select_group_str(group).await {
            if e.is_rejected_locally() {
                return Err(e.into());
            }
        }
    }
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    drive(ctl, stdin, color).await
}

/// Run the command loop over `input` until it ends or the user quits.
pub async fn drive<R>(ctl: &Controller, input: R, color: bool) -> Result<u8>
where
    R: AsyncBufRead + Unpin,
{
    redraw(ctl, color);
    let mut lines = input.lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        let cmd = match parse_command(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("! {e}");
                continue;
            }
        };

        match cmd {
            Command::Quit => break,
            Command::Help => print!("{HELP}"),
            Command::Legend => print!("{}", render::legend()),
            Command::Show => redraw(ctl, color),
            Command::Groups | Command::Back => {
                ctl.clear_group();
                redraw(ctl, color);
            }
            Command::Group(raw) => match ctl.select_group_str(&raw).await {
                Ok(_) => redraw(ctl, color),
                Err(e) if e.is_rejected_locally() => eprintln!("! {e}"),
                Err(_) => {}
            },
            Command::Grade {
                student,
                criterion,
                grade,
            } => match ctl.submit_str(&student, &criterion, &grade).await {
                Ok(_) => redraw(ctl, color),
                Err(e) if e.is_rejected_locally() => eprintln!("! {e}"),
                Err(_) => {}
            },
        }
    }
    Ok(0)
}

fn redraw(ctl: &Controller, color: bool) {
    let screen = ctl.with_session(|session| render::screen(session, color));
    print!("{screen}");
}
