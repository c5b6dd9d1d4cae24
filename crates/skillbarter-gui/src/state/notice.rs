//! Modal message box state.

use crate::error::{FormError, GuiError};

/// Severity of a notice, which picks its icon and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A message box blocking the window until acknowledged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub level: NoticeLevel,
}

impl Notice {
    /// Informational notice titled "Message".
    pub fn info(body: impl Into<String>) -> Self {
        Self::titled("Message", body, NoticeLevel::Info)
    }

    /// Notice with an explicit title.
    pub fn titled(title: impl Into<String>, body: impl Into<String>, level: NoticeLevel) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            level,
        }
    }
}

impl From<FormError> for Notice {
    fn from(err: FormError) -> Self {
        let level = match err {
            FormError::InvalidCredentials => NoticeLevel::Error,
            _ => NoticeLevel::Warning,
        };
        Self::titled(err.title(), err.to_string(), level)
    }
}

impl From<GuiError> for Notice {
    fn from(err: GuiError) -> Self {
        Self::titled(err.title(), err.to_string(), NoticeLevel::Error)
    }
}
