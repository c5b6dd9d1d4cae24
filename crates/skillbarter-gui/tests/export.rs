//! Tests for the static HTML export.

use tempfile::TempDir;

use skillbarter_gui::App;
use skillbarter_gui::constants::EXPORT_FILE_NAME;
use skillbarter_gui::message::{ContactMessage, Message};
use skillbarter_gui::service::{EXPORT_HTML, write_export};
use skillbarter_gui::state::NoticeLevel;

#[test]
fn test_export_writes_fixed_document() {
    let dir = TempDir::new().unwrap();
    let path = write_export(dir.path()).unwrap();

    assert_eq!(path, dir.path().join(EXPORT_FILE_NAME));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), EXPORT_HTML);
}

#[test]
fn test_export_overwrites_previous_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(EXPORT_FILE_NAME);
    std::fs::write(&path, "stale content that is longer than nothing at all").unwrap();

    write_export(dir.path()).unwrap();
    write_export(dir.path()).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes, EXPORT_HTML.as_bytes());
}

#[test]
fn test_export_button_reports_success() {
    let dir = TempDir::new().unwrap();
    let mut app = App::default();
    app.state.export_dir = dir.path().to_path_buf();

    let _ = app.update(Message::Contact(ContactMessage::Export));

    let notice = app.state.notice.as_ref().expect("confirmation");
    assert_eq!(
        notice.body,
        "Exported to skillbarter_export.html in working directory."
    );
    assert!(dir.path().join(EXPORT_FILE_NAME).exists());
}

#[test]
fn test_export_failure_is_reported() {
    let dir = TempDir::new().unwrap();
    let mut app = App::default();
    app.state.export_dir = dir.path().join("missing");

    let _ = app.update(Message::Contact(ContactMessage::Export));

    let notice = app.state.notice.as_ref().expect("failure notice");
    assert_eq!(notice.title, "Error");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.body.starts_with("Failed to export: "));
}
