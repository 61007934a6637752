//! User-facing notifications.
//!
//! A notice interrupts the user the way a blocking alert would. The
//! front-end decides how to show it.

/// A message for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// A group roster could not be loaded.
    RosterLoadFailed,
    /// An assessment was acknowledged by the API.
    AssessmentSaved,
    /// An assessment was not acknowledged.
    AssessmentFailed,
}

impl Notice {
    /// Text shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Self::RosterLoadFailed => "Error loading students. Check your connection.",
            Self::AssessmentSaved => "Assessment saved!",
            Self::AssessmentFailed => "Error saving assessment",
        }
    }

    /// Whether the notice reports a failed request.
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::AssessmentSaved)
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Receives notices from the controller.
pub trait Notifier: Send + Sync {
    /// Show `notice` to the user.
    fn notify(&self, notice: Notice);
}

impl<N: Notifier + ?Sized> Notifier for std::sync::Arc<N> {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice)
    }
}
