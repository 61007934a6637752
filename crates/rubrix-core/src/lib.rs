#![deny(missing_docs)]

//! # rubrix-core: Foundational Types for the Rubrix Assessment Client
//!
//! This crate defines the domain vocabulary every other crate in the
//! workspace speaks. It performs no I/O and has no internal crate
//! dependencies: only `serde`, `thiserror` and `chrono`.
//!
//! ## Design Principles
//!
//! 1. **Closed enums for closed sets.** There are exactly four [`Group`]s,
//!    four [`Criterion`]s and five [`Grade`]s. Each is an enum, parsed at the
//!    edge and matched exhaustively everywhere else.
//!
//! 2. **One presentation table.** [`Grade::label`], [`Grade::tag`] and
//!    [`Grade::color`] are the only place grade labels and colours are
//!    defined. [`grade_style`] extends the table to arbitrary integers for
//!    callers that hold an unvalidated value.
//!
//! 3. **Identifiers echo the wire.** [`StudentId`] keeps whatever JSON
//!    representation the API used so that assessments refer to students
//!    exactly as the roster did.
//!
//! 4. **[`ValidationError`] hierarchy.** Structured errors with `thiserror`,
//!    no `.unwrap()` outside tests.

pub mod assessment;
pub mod domain;
pub mod error;
pub mod grade;
pub mod student;

pub use assessment::{group_note, AssessmentKey, NewAssessment};
pub use domain::{Criterion, Group};
pub use error::ValidationError;
pub use grade::{grade_style, ButtonStyle, Grade, GradeColor, GradeStyle};
pub use student::{Student, StudentId};
