//! Modal dialog state.
//!
//! A dialog owns the draft of the form it shows. Closing the dialog drops the
//! draft, so nothing typed into it outlives the dialog.

use crate::error::FormError;
use crate::validation::{validate_login, validate_registration};

/// Which modal form to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Login,
    Register,
    Search,
}

impl DialogKind {
    /// Dialog window title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Login to SkillBarter",
            Self::Register => "Create an account",
            Self::Search => "Search",
        }
    }
}

/// A text field of one of the dialog forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Password,
    Skills,
    Query,
}

/// Login form draft.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
    /// Cosmetic only: nothing is remembered.
    pub remember: bool,
}

/// Registration form draft.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RegisterDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Comma-separated free text, never validated.
    pub skills: String,
}

/// Search form draft.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchDraft {
    pub query: String,
}

/// The open modal dialog together with its draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Login(LoginDraft),
    Register(RegisterDraft),
    Search(SearchDraft),
}

impl Dialog {
    /// Open an empty dialog of the given kind.
    pub fn open(kind: DialogKind) -> Self {
        match kind {
            DialogKind::Login => Self::Login(LoginDraft::default()),
            DialogKind::Register => Self::Register(RegisterDraft::default()),
            DialogKind::Search => Self::Search(SearchDraft::default()),
        }
    }

    pub fn kind(&self) -> DialogKind {
        match self {
            Self::Login(_) => DialogKind::Login,
            Self::Register(_) => DialogKind::Register,
            Self::Search(_) => DialogKind::Search,
        }
    }

    /// Store `value` in `field`.
    ///
    /// Returns `false` (and changes nothing) when the open form has no such
    /// field.
    pub fn edit(&mut self, field: FormField, value: String) -> bool {
        let slot = match (self, field) {
            (Self::Login(d), FormField::Email) => &mut d.email,
            (Self::Login(d), FormField::Password) => &mut d.password,
            (Self::Register(d), FormField::Name) => &mut d.name,
            (Self::Register(d), FormField::Email) => &mut d.email,
            (Self::Register(d), FormField::Password) => &mut d.password,
            (Self::Register(d), FormField::Skills) => &mut d.skills,
            (Self::Search(d), FormField::Query) => &mut d.query,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// Run the form's check. Search always passes.
    pub fn validate(&self) -> Result<(), FormError> {
        match self {
            Self::Login(d) => validate_login(&d.email, &d.password),
            Self::Register(d) => validate_registration(&d.name, &d.email, &d.password),
            Self::Search(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_ignores_foreign_fields() {
        let mut dialog = Dialog::open(DialogKind::Login);
        assert!(!dialog.edit(FormField::Skills, "rust".into()));
        assert!(dialog.edit(FormField::Email, "a@b.com".into()));
        assert_eq!(
            dialog,
            Dialog::Login(LoginDraft {
                email: "a@b.com".into(),
                ..Default::default()
            })
        );
    }

    #[test]
    fn validate_dispatches_on_kind() {
        let mut register = Dialog::open(DialogKind::Register);
        register.edit(FormField::Name, "Jo".into());
        register.edit(FormField::Email, "a@b.com".into());
        register.edit(FormField::Password, "123".into());
        assert_eq!(register.validate(), Err(FormError::InvalidRegistration));
        register.edit(FormField::Password, "123456".into());
        assert!(register.validate().is_ok());

        assert!(Dialog::open(DialogKind::Search).validate().is_ok());
        assert!(Dialog::open(DialogKind::Login).validate().is_err());
    }
}
