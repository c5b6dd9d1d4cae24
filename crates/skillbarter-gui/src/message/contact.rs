//! Contact panel messages.

/// Messages for the contact form and the export button beside it.
#[derive(Debug, Clone)]
pub enum ContactMessage {
    NameChanged(String),
    EmailChanged(String),
    MessageChanged(String),

    /// Validate and acknowledge the form
    Send,

    /// Write the static HTML export
    Export,
}
