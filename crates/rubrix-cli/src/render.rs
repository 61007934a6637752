//! # Text Rendering
//!
//! Turns session state and API reports into terminal text. Every function
//! returns a `String` so output can be asserted in tests; callers print.
//!
//! With colour enabled a selected grade button is drawn in its
//! [`ButtonStyle`] colours using 24-bit ANSI escapes. Without colour the
//! selection is shown by angle brackets.

use std::fmt::Write as _;

use rubrix_client::assessments::AssessmentRecord;
use rubrix_client::class::{ActiveLesson, ClassSummary, Rubric};
use rubrix_core::{grade_style, ButtonStyle, Criterion, Grade, Group, Student};
use rubrix_session::{Session, View};

pub const TITLE: &str = "Basketball Assessment";
pub const SUBTITLE: &str = "Year 7 • 28 Students • 4 Groups";

/// Page header.
pub fn header() -> String {
    format!("🏀 {TITLE}\n{SUBTITLE}\n")
}

/// The group picker.
pub fn picker() -> String {
    let mut out = String::new();
    for group in Group::all() {
        let _ = writeln!(out, "  Group {group}   {} students", Group::NOMINAL_SIZE);
    }
    out
}

/// The whole screen for the current session state.
pub fn screen(session: &Session, color: bool) -> String {
    let mut out = header();
    out.push('\n');

    match session.view() {
        View::GroupSelection => {
            out.push_str(&picker());
            if session.loading() {
                out.push_str("\nLoading students...\n");
            }
        }
        View::Roster { group } => {
            let _ = writeln!(out, "Group {group}");
            let _ = writeln!(out, "{} students", session.students().len());
            out.push('\n');
            if session.loading() {
                out.push_str("Loading students...\n");
            } else {
                for student in session.students() {
                    out.push_str(&student_card(session, student, color));
                    out.push('\n');
                }
            }
        }
    }
    out
}

/// One student with a grade row per criterion.
pub fn student_card(session: &Session, student: &Student, color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", student.name, student.id);
    for criterion in Criterion::all() {
        let _ = write!(out, "  {:<10}", criterion.title());
        for grade in Grade::all() {
            let selected = session.is_selected(&student.id, *criterion, *grade);
            let style = session.button_style(&student.id, *criterion, *grade);
            out.push(' ');
            out.push_str(&button(*grade, style, selected, color));
        }
        out.push('\n');
    }
    out
}

/// One grade button. Unselected buttons keep the terminal's own colours.
pub fn button(grade: Grade, style: ButtonStyle, selected: bool, color: bool) -> String {
    let face = format!("{} {}", grade.label(), grade.tag());
    match (selected, color) {
        (false, _) => format!("[{face:^9}]"),
        (true, false) => format!("<{face:^9}>"),
        (true, true) => {
            let (br, bg, bb) = rgb(style.background);
            let (fr, fg, fb) = rgb(style.foreground);
            format!("\x1b[48;2;{br};{bg};{bb}m\x1b[38;2;{fr};{fg};{fb}m[{face:^9}]\x1b[0m")
        }
    }
}

/// The grade presentation table.
pub fn legend() -> String {
    let mut out = String::from("grade  label  tag    colour  hex\n");
    for grade in Grade::all() {
        let color = grade.color();
        let _ = writeln!(
            out,
            "{:<6} {:<6} {:<6} {:<7} {}",
            grade.value(),
            grade.label(),
            grade.tag(),
            color.name(),
            color.hex()
        );
    }
    out
}

/// Stored assessments, one per line.
pub fn records(records: &[AssessmentRecord]) -> String {
    if records.is_empty() {
        return "No assessments recorded yet\n".to_string();
    }
    let mut out = String::new();
    for record in records {
        let style = record.style();
        let name = record.student_name.as_deref().unwrap_or("?");
        let _ = write!(
            out,
            "{:<5} {:<18} {:<10} {} ({})",
            record.student_id.to_string(),
            name,
            record.criterion,
            style.label.unwrap_or("?"),
            style.tag.unwrap_or("unknown grade"),
        );
        if let Some(ts) = record.timestamp {
            let _ = write!(out, "  {}", ts.format("%Y-%m-%d %H:%M"));
        }
        out.push('\n');
    }
    out
}

pub fn summary(summary: &ClassSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Students:    {}", summary.total_students);
    let _ = writeln!(out, "Assessments: {}", summary.total_assessments);
    if let Some(message) = &summary.message {
        let _ = writeln!(out, "{message}");
    }
    if let Some(avg) = summary.class_average {
        let style = grade_style(avg.round() as i64);
        let _ = writeln!(
            out,
            "Class average: {avg:.2} (≈ {})",
            style.label.unwrap_or("?")
        );
    }
    for group in Group::all() {
        if let Some(stats) = summary.group(*group) {
            let _ = writeln!(
                out,
                "  Group {group}: {} assessments, average {:.2}",
                stats.total_assessments, stats.avg_grade
            );
        }
    }
    if !summary.criteria_assessed.is_empty() {
        let _ = writeln!(out, "Criteria assessed: {}", summary.criteria_assessed.join(", "));
    }
    out
}

pub fn rubric(rubric: &Rubric) -> String {
    format!(
        "{}\nCriteria: {}\n{} students in {} groups\n",
        rubric.title,
        rubric.criteria.join(", "),
        rubric.students,
        rubric.groups
    )
}

pub fn lesson(lesson: &ActiveLesson) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", lesson.lesson_title);
    if let Some(location) = &lesson.location {
        let _ = write!(out, "{location}");
    }
    if let Some(date) = lesson.date {
        let _ = write!(out, ", {date}");
    }
    out.push('\n');
    if let Some(timer) = lesson.timer {
        let _ = writeln!(
            out,
            "Rotation {} ({} min)",
            timer.current_rotation,
            timer.rotation_duration().as_secs() / 60
        );
    }
    for group in &lesson.groups {
        let names: Vec<&str> = group.students.iter().map(|s| s.name.as_str()).collect();
        let _ = writeln!(out, "{}: {}", group.name, names.join(", "));
    }
    out
}

/// `#rrggbb` to channels; malformed input reads as black.
fn rgb(hex: &str) -> (u8, u8, u8) {
    let hex = hex.trim_start_matches('#');
    let channel = |i: usize| {
        hex.get(i..i + 2)
            .and_then(|c| u8::from_str_radix(c, 16).ok())
            .unwrap_or(0)
    };
    (channel(0), channel(2), channel(4))
}
