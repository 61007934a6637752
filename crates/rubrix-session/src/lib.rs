//! # rubrix-session: Assessment Session State
//!
//! The session is everything the client remembers between user actions:
//! which group is selected, the roster loaded for it, whether a load is in
//! flight, and the last confirmed grade per (student, criterion).
//!
//! ## Layers
//!
//! - [`Session`] is an owned struct with synchronous transitions. It performs
//!   no I/O and can be driven directly in tests.
//! - [`AssessmentApi`] is the seam to the remote API, implemented for
//!   [`rubrix_client::RubrixClient`].
//! - [`Notifier`] receives the user-facing [`Notice`]s.
//! - [`SessionController`] wires the three together: it splits every
//!   operation into "transition, call, transition" and never holds the
//!   session lock across an `.await`.
//!
//! ## Stale roster responses
//!
//! Every group load is stamped with a strictly increasing sequence number.
//! A response whose number is no longer the latest issued is discarded
//! without touching state. Submissions are not stamped: the last
//! acknowledged submission wins.

pub mod api;
pub mod controller;
pub mod error;
pub mod notify;
pub mod state;

pub use api::AssessmentApi;
pub use controller::SessionController;
pub use error::SessionError;
pub use notify::{Notice, Notifier};
pub use state::{LoadOutcome, LoadTicket, Session, View};
