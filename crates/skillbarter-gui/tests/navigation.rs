//! Tests for panel switching, shortcuts and the cosmetic widgets.

use iced::keyboard::key::Named;
use iced::keyboard::{Key, Modifiers};

use skillbarter_gui::App;
use skillbarter_gui::app::shortcut;
use skillbarter_gui::content::{FAQ, TESTIMONIALS};
use skillbarter_gui::message::{DialogMessage, FooterLink, Message};
use skillbarter_gui::state::{Dialog, DialogKind, View};
use skillbarter_gui::theme::ThemeMode;

fn press(app: &mut App, key: Key, modifiers: Modifiers) {
    if let Some(message) = shortcut(&app.state, &key, modifiers) {
        let _ = app.update(message);
    }
}

fn char_key(c: &str) -> Key {
    Key::Character(c.into())
}

#[test]
fn test_starts_on_home() {
    let app = App::default();
    assert_eq!(app.state.views.current(), View::Home);
    assert!(app.state.views.is_visible(View::Home));
    assert!(!app.state.has_modal());
}

#[test]
fn test_navigate_shows_exactly_one_panel() {
    let mut app = App::default();
    for view in View::ALL {
        let _ = app.update(Message::Navigate(view));
        assert_eq!(app.state.views.current(), view);
        let visible = View::ALL
            .iter()
            .filter(|v| app.state.views.is_visible(**v))
            .count();
        assert_eq!(visible, 1);
    }
}

#[test]
fn test_navigate_to_current_view_is_a_no_op() {
    let mut app = App::default();
    let _ = app.update(Message::Navigate(View::Contact));
    let _ = app.update(Message::Navigate(View::Contact));
    assert_eq!(app.state.views.current(), View::Contact);
}

#[test]
fn test_ctrl_h_goes_home() {
    let mut app = App::default();
    let _ = app.update(Message::Navigate(View::Modules));
    press(&mut app, char_key("h"), Modifiers::COMMAND);
    assert_eq!(app.state.views.current(), View::Home);
}

#[test]
fn test_plain_h_does_nothing() {
    let mut app = App::default();
    let _ = app.update(Message::Navigate(View::About));
    assert!(shortcut(&app.state, &char_key("h"), Modifiers::empty()).is_none());
}

#[test]
fn test_ctrl_s_opens_search() {
    let mut app = App::default();
    press(&mut app, char_key("s"), Modifiers::COMMAND);
    assert_eq!(
        app.state.dialog.as_ref().map(Dialog::kind),
        Some(DialogKind::Search)
    );
}

#[test]
fn test_shortcuts_ignored_while_modal_open() {
    let mut app = App::default();
    let _ = app.update(Message::Navigate(View::Services));
    let _ = app.update(Message::Dialog(DialogMessage::Open(DialogKind::Login)));

    assert!(shortcut(&app.state, &char_key("h"), Modifiers::COMMAND).is_none());
    assert!(shortcut(&app.state, &char_key("s"), Modifiers::COMMAND).is_none());
    assert_eq!(app.state.views.current(), View::Services);
}

#[test]
fn test_escape_without_modal_does_nothing() {
    let app = App::default();
    assert!(shortcut(&app.state, &Key::Named(Named::Escape), Modifiers::empty()).is_none());
}

#[test]
fn test_toggle_theme_flips_back_and_forth() {
    let mut app = App::default();
    assert_eq!(app.state.theme_mode, ThemeMode::Dark);

    let _ = app.update(Message::ToggleTheme);
    assert_eq!(app.state.theme_mode, ThemeMode::Light);

    let _ = app.update(Message::ToggleTheme);
    assert_eq!(app.state.theme_mode, ThemeMode::Dark);
}

#[test]
fn test_carousel_cycles_through_testimonials() {
    let mut app = App::default();
    let first = app.state.testimonials.current();

    for step in 1..=TESTIMONIALS.len() {
        let _ = app.update(Message::CarouselTick);
        assert_eq!(app.state.testimonials.index(), step % TESTIMONIALS.len());
    }
    assert_eq!(app.state.testimonials.current(), first);
}

#[test]
fn test_faq_toggle_is_independent_per_entry() {
    let mut app = App::default();
    let _ = app.update(Message::ToggleFaq(0));
    let _ = app.update(Message::ToggleFaq(2));

    assert!(app.state.faq.is_expanded(0));
    assert!(!app.state.faq.is_expanded(1));
    assert!(app.state.faq.is_expanded(2));

    let _ = app.update(Message::ToggleFaq(0));
    assert!(!app.state.faq.is_expanded(0));

    // Out of range is ignored
    let _ = app.update(Message::ToggleFaq(FAQ.len()));
    assert_eq!(app.state.faq.expanded_count(), 1);
}

#[test]
fn test_footer_links_open_placeholder_notices() {
    let mut app = App::default();
    let _ = app.update(Message::FooterLink(FooterLink::Terms));
    let notice = app.state.notice.clone().expect("terms notice");
    assert_eq!(notice.title, "Message");
    assert_eq!(notice.body, "Terms and Conditions placeholder.");

    let _ = app.update(Message::DismissNotice);
    let _ = app.update(Message::FooterLink(FooterLink::Privacy));
    assert_eq!(
        app.state.notice.as_ref().map(|n| n.body.as_str()),
        Some("Privacy policy placeholder.")
    );
}

#[test]
fn test_feature_card_opens_detail_notice() {
    let mut app = App::default();
    let feature = &skillbarter_gui::content::SERVICES[0];
    let _ = app.update(Message::FeatureSelected(feature));

    let notice = app.state.notice.as_ref().expect("detail notice");
    assert_eq!(notice.title, "Service — AI Matchmaking");
    assert!(notice.body.contains("Intelligent partner recommendations"));
}
