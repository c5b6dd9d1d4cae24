//! GUI-specific error types.
//!
//! Two kinds of failure exist. [`GuiError`] covers real I/O failures, which are
//! surfaced verbatim to the user. [`FormError`] covers rejected form input:
//! those are expected conditions that re-prompt the user and are never
//! treated as faults.

use std::path::PathBuf;

use thiserror::Error;

/// GUI operation errors.
///
/// These errors are displayed to users as-is, so the `Display` form is the
/// user-facing text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    /// Writing the static HTML export failed.
    #[error("Failed to export: {reason}")]
    Export {
        /// Path that could not be written.
        path: PathBuf,
        /// Description of what went wrong.
        reason: String,
    },
}

impl GuiError {
    /// Create an export error from an I/O failure.
    pub fn export(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Self::Export {
            path: path.into(),
            reason: err.to_string(),
        }
    }

    /// Title used when the error is shown in a notice.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Export { .. } => "Error",
        }
    }
}

/// Rejected form input.
///
/// The `Display` strings are shown to the user in a notice while the form
/// stays open for correction.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    /// Login email lacks "@" or the password is empty.
    #[error("Please enter valid credentials.")]
    InvalidCredentials,

    /// Registration name blank, email lacks "@", or password too short.
    #[error("Please provide valid details. Password must be 6+ chars.")]
    InvalidRegistration,

    /// A required contact field is blank.
    #[error("Please fill all fields.")]
    MissingFields,

    /// Contact email lacks "@" or ".".
    #[error("Please enter a valid email.")]
    InvalidEmail,
}

impl FormError {
    /// Title used when the rejection is shown in a notice.
    pub fn title(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "Error",
            Self::InvalidRegistration | Self::MissingFields | Self::InvalidEmail => "Validation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_error_carries_io_message() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = GuiError::export("out.html", &io);
        assert_eq!(err.to_string(), "Failed to export: access denied");
        assert_eq!(err.title(), "Error");
    }

    #[test]
    fn login_rejection_is_an_error_others_are_validation() {
        assert_eq!(FormError::InvalidCredentials.title(), "Error");
        assert_eq!(FormError::MissingFields.title(), "Validation");
        assert_eq!(FormError::InvalidEmail.title(), "Validation");
    }
}
