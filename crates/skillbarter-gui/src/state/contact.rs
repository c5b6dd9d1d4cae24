//! Contact form draft.

use crate::error::FormError;
use crate::validation::validate_contact;

/// Field values of the contact form embedded in the contact panel.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn validate(&self) -> Result<(), FormError> {
        validate_contact(&self.name, &self.email, &self.message)
    }

    /// Discard all field values.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
