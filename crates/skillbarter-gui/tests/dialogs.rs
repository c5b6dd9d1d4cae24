//! Tests for the Login, Register and Search dialogs.

use iced::keyboard::key::Named;
use iced::keyboard::{Key, Modifiers};

use skillbarter_gui::App;
use skillbarter_gui::app::shortcut;
use skillbarter_gui::message::{DialogMessage, Message};
use skillbarter_gui::state::{Dialog, DialogKind, FormField, NoticeLevel};

fn open(app: &mut App, kind: DialogKind) {
    let _ = app.update(Message::Dialog(DialogMessage::Open(kind)));
}

fn edit(app: &mut App, field: FormField, value: &str) {
    let _ = app.update(Message::Dialog(DialogMessage::Edit(field, value.to_string())));
}

fn submit(app: &mut App) {
    let _ = app.update(Message::Dialog(DialogMessage::Submit));
}

#[test]
fn test_login_success_closes_dialog() {
    let mut app = App::default();
    open(&mut app, DialogKind::Login);
    edit(&mut app, FormField::Email, "a@b.com");
    edit(&mut app, FormField::Password, "x");
    submit(&mut app);

    assert!(app.state.dialog.is_none());
    let notice = app.state.notice.as_ref().expect("confirmation");
    assert_eq!(notice.body, "Login successful (demo). Welcome!");
    assert_eq!(notice.level, NoticeLevel::Info);
}

#[test]
fn test_login_failure_keeps_draft() {
    let mut app = App::default();
    open(&mut app, DialogKind::Login);
    edit(&mut app, FormField::Email, "ab.com");
    edit(&mut app, FormField::Password, "secret");
    submit(&mut app);

    let notice = app.state.notice.clone().expect("rejection");
    assert_eq!(notice.title, "Error");
    assert_eq!(notice.body, "Please enter valid credentials.");

    match &app.state.dialog {
        Some(Dialog::Login(draft)) => {
            assert_eq!(draft.email, "ab.com");
            assert_eq!(draft.password, "secret");
        }
        other => panic!("expected login dialog, got {other:?}"),
    }

    // Correct the email and resubmit
    let _ = app.update(Message::DismissNotice);
    edit(&mut app, FormField::Email, "a@b.com");
    submit(&mut app);
    assert!(app.state.dialog.is_none());
}

#[test]
fn test_remember_me_only_applies_to_login() {
    let mut app = App::default();
    open(&mut app, DialogKind::Login);
    let _ = app.update(Message::Dialog(DialogMessage::RememberToggled(true)));
    assert!(matches!(&app.state.dialog, Some(Dialog::Login(d)) if d.remember));

    open(&mut app, DialogKind::Register);
    let _ = app.update(Message::Dialog(DialogMessage::RememberToggled(true)));
    assert!(matches!(app.state.dialog, Some(Dialog::Register(_))));
}

#[test]
fn test_register_success_greets_trimmed_name() {
    let mut app = App::default();
    open(&mut app, DialogKind::Register);
    edit(&mut app, FormField::Name, "  Jo  ");
    edit(&mut app, FormField::Email, "jo@x.io");
    edit(&mut app, FormField::Password, "123456");
    edit(&mut app, FormField::Skills, "guitar, rust");
    submit(&mut app);

    assert!(app.state.dialog.is_none());
    assert_eq!(
        app.state.notice.as_ref().map(|n| n.body.as_str()),
        Some("Account created (demo). Welcome, Jo")
    );
}

#[test]
fn test_register_short_password_rejected() {
    let mut app = App::default();
    open(&mut app, DialogKind::Register);
    edit(&mut app, FormField::Name, "Jo");
    edit(&mut app, FormField::Email, "jo@x.io");
    edit(&mut app, FormField::Password, "12345");
    submit(&mut app);

    let notice = app.state.notice.as_ref().expect("rejection");
    assert_eq!(notice.title, "Validation");
    assert_eq!(
        notice.body,
        "Please provide valid details. Password must be 6+ chars."
    );
    assert!(matches!(app.state.dialog, Some(Dialog::Register(_))));
}

#[test]
fn test_search_lists_canned_results() {
    let mut app = App::default();
    open(&mut app, DialogKind::Search);
    edit(&mut app, FormField::Query, "guitar");
    submit(&mut app);

    assert!(app.state.dialog.is_none());
    let notice = app.state.notice.as_ref().expect("results");
    assert_eq!(notice.title, "Search");
    assert!(notice.body.starts_with("Search results for: guitar"));
    assert!(notice.body.ends_with("- Photography"));
}

#[test]
fn test_empty_search_is_accepted() {
    let mut app = App::default();
    open(&mut app, DialogKind::Search);
    submit(&mut app);
    assert!(app.state.dialog.is_none());
    assert!(app.state.notice.is_some());
}

#[test]
fn test_edit_for_foreign_field_is_ignored() {
    let mut app = App::default();
    open(&mut app, DialogKind::Search);
    edit(&mut app, FormField::Password, "nope");
    assert_eq!(
        app.state.dialog,
        Some(Dialog::open(DialogKind::Search)),
        "search draft must be untouched"
    );
}

#[test]
fn test_reopening_discards_previous_draft() {
    let mut app = App::default();
    open(&mut app, DialogKind::Login);
    edit(&mut app, FormField::Email, "a@b.com");
    let _ = app.update(Message::Dialog(DialogMessage::Close));
    assert!(app.state.dialog.is_none());

    open(&mut app, DialogKind::Login);
    assert_eq!(app.state.dialog, Some(Dialog::open(DialogKind::Login)));
}

#[test]
fn test_escape_closes_notice_before_dialog() {
    let mut app = App::default();
    open(&mut app, DialogKind::Login);
    submit(&mut app);
    assert!(app.state.notice.is_some());

    let escape = Key::Named(Named::Escape);
    let first = shortcut(&app.state, &escape, Modifiers::empty()).expect("escape");
    let _ = app.update(first);
    assert!(app.state.notice.is_none());
    assert!(app.state.dialog.is_some());

    let second = shortcut(&app.state, &escape, Modifiers::empty()).expect("escape");
    let _ = app.update(second);
    assert!(app.state.dialog.is_none());
}
