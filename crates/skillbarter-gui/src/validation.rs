//! Form input checks.
//!
//! Each predicate mirrors one form: it only looks at the raw strings and
//! reports the first reason for rejection. Nothing here touches state.

use crate::error::FormError;

/// Minimum password length (in characters) accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Check login credentials.
///
/// Accepted iff the email contains "@" and the password is non-empty.
/// Neither field is trimmed.
pub fn validate_login(email: &str, password: &str) -> Result<(), FormError> {
    if email.contains('@') && !password.is_empty() {
        Ok(())
    } else {
        Err(FormError::InvalidCredentials)
    }
}

/// Check a registration.
///
/// Accepted iff the name is non-blank, the email contains "@" and the
/// password has at least [`MIN_PASSWORD_LEN`] characters.
pub fn validate_registration(name: &str, email: &str, password: &str) -> Result<(), FormError> {
    if name.trim().is_empty()
        || !email.contains('@')
        || password.chars().count() < MIN_PASSWORD_LEN
    {
        return Err(FormError::InvalidRegistration);
    }
    Ok(())
}

/// Check the contact form.
///
/// All fields are trimmed first. Blank fields are reported before a
/// malformed email.
pub fn validate_contact(name: &str, email: &str, message: &str) -> Result<(), FormError> {
    let email = email.trim();
    if name.trim().is_empty() || email.is_empty() || message.trim().is_empty() {
        return Err(FormError::MissingFields);
    }
    if !email.contains('@') || !email.contains('.') {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_login() {
        assert!(validate_login("a@b.com", "x").is_ok());
        assert_eq!(
            validate_login("ab.com", "x"),
            Err(FormError::InvalidCredentials)
        );
        assert_eq!(
            validate_login("a@b.com", ""),
            Err(FormError::InvalidCredentials)
        );
        // Whitespace counts as a password
        assert!(validate_login("@", " ").is_ok());
    }

    #[test]
    fn test_validate_registration() {
        assert!(validate_registration("Jo", "a@b.com", "123456").is_ok());
        assert!(validate_registration("", "a@b.com", "123456").is_err());
        assert!(validate_registration("   ", "a@b.com", "123456").is_err());
        assert!(validate_registration("Jo", "a@b.com", "123").is_err());
        assert!(validate_registration("Jo", "ab.com", "123456").is_err());
    }

    #[test]
    fn password_length_counts_characters_not_bytes() {
        assert!(validate_registration("Jo", "a@b.com", "ééééé").is_err());
        assert!(validate_registration("Jo", "a@b.com", "éééééé").is_ok());
    }

    #[test]
    fn test_validate_contact() {
        assert!(validate_contact("Jo", "a@b.com", "hi").is_ok());
        assert_eq!(
            validate_contact("Jo", "a@b", "hi"),
            Err(FormError::InvalidEmail)
        );
        assert_eq!(
            validate_contact("Jo", "a@b.com", "  "),
            Err(FormError::MissingFields)
        );
        // Blank takes precedence over a malformed email
        assert_eq!(
            validate_contact("", "nope", "hi"),
            Err(FormError::MissingFields)
        );
        assert!(validate_contact("  Jo ", " a@b.com ", " hi ").is_ok());
    }
}
