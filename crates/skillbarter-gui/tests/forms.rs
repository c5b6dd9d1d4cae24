//! Tests for the form predicates and the contact form flow.

use proptest::prelude::*;

use skillbarter_gui::App;
use skillbarter_gui::message::{ContactMessage, Message};
use skillbarter_gui::validation::{
    MIN_PASSWORD_LEN, validate_contact, validate_login, validate_registration,
};
use skillbarter_gui::FormError;

proptest! {
    #[test]
    fn login_accepts_iff_at_sign_and_password(email in ".{0,20}", password in ".{0,10}") {
        let expected = email.contains('@') && !password.is_empty();
        prop_assert_eq!(validate_login(&email, &password).is_ok(), expected);
    }

    #[test]
    fn registration_needs_min_password_chars(password in "[a-z]{0,12}") {
        let result = validate_registration("Jo", "jo@x.io", &password);
        prop_assert_eq!(result.is_ok(), password.chars().count() >= MIN_PASSWORD_LEN);
    }

    #[test]
    fn blank_contact_field_always_reports_missing(
        blank in "[ \t]{0,4}",
        email in ".{0,16}",
    ) {
        prop_assert_eq!(
            validate_contact(&blank, &email, "hello"),
            Err(FormError::MissingFields)
        );
    }

    #[test]
    fn contact_email_without_dot_is_invalid(local in "[a-z]{1,8}", domain in "[a-z]{1,8}") {
        let email = format!("{local}@{domain}");
        prop_assert_eq!(
            validate_contact("Jo", &email, "hi"),
            Err(FormError::InvalidEmail)
        );
    }
}

fn fill_contact(app: &mut App, name: &str, email: &str, message: &str) {
    let _ = app.update(Message::Contact(ContactMessage::NameChanged(name.into())));
    let _ = app.update(Message::Contact(ContactMessage::EmailChanged(email.into())));
    let _ = app.update(Message::Contact(ContactMessage::MessageChanged(
        message.into(),
    )));
}

#[test]
fn test_contact_send_success_clears_form() {
    let mut app = App::default();
    fill_contact(&mut app, "Jo", "jo@x.io", "Hello there");
    let _ = app.update(Message::Contact(ContactMessage::Send));

    let notice = app.state.notice.as_ref().expect("confirmation");
    assert_eq!(notice.body, "Message Sent Successfully!");
    assert!(app.state.contact.name.is_empty());
    assert!(app.state.contact.email.is_empty());
    assert!(app.state.contact.message.is_empty());
}

#[test]
fn test_contact_missing_fields_keeps_input() {
    let mut app = App::default();
    fill_contact(&mut app, "Jo", "jo@x.io", "   ");
    let _ = app.update(Message::Contact(ContactMessage::Send));

    let notice = app.state.notice.as_ref().expect("rejection");
    assert_eq!(notice.title, "Validation");
    assert_eq!(notice.body, "Please fill all fields.");
    assert_eq!(app.state.contact.name, "Jo");
}

#[test]
fn test_contact_invalid_email() {
    let mut app = App::default();
    fill_contact(&mut app, "Jo", "jo@example", "hi");
    let _ = app.update(Message::Contact(ContactMessage::Send));

    assert_eq!(
        app.state.notice.as_ref().map(|n| n.body.as_str()),
        Some("Please enter a valid email.")
    );
    assert_eq!(app.state.contact.email, "jo@example");
}
