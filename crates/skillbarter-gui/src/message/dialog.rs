//! Dialog messages.

use crate::state::{DialogKind, FormField};

/// Messages for the modal forms.
#[derive(Debug, Clone)]
pub enum DialogMessage {
    /// Open an empty dialog, replacing any open one
    Open(DialogKind),

    /// A text field of the open dialog changed
    Edit(FormField, String),

    /// The login "Remember me" box changed
    RememberToggled(bool),

    /// Validate and, on success, close the open dialog
    Submit,

    /// Dismiss the open dialog without submitting
    Close,
}
