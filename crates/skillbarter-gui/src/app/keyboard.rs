//! Keyboard shortcut handling.
//!
//! - Cmd/Ctrl+H: Home panel
//! - Cmd/Ctrl+S: Search dialog
//! - Escape: Close the topmost modal (notice, then dialog)

use iced::Task;
use iced::keyboard::key::Named;
use iced::keyboard::{Key, Modifiers};

use super::App;
use crate::message::{DialogMessage, Message};
use crate::state::{AppState, DialogKind};

/// Map a key press to the message it triggers in the given state.
///
/// Navigation shortcuts are ignored while a modal blocks the window.
pub fn shortcut(state: &AppState, key: &Key, modifiers: Modifiers) -> Option<Message> {
    match key.as_ref() {
        Key::Named(Named::Escape) => {
            if state.notice.is_some() {
                Some(Message::DismissNotice)
            } else if state.dialog.is_some() {
                Some(Message::Dialog(DialogMessage::Close))
            } else {
                None
            }
        }

        _ if state.has_modal() => None,

        Key::Character("h") if modifiers.command() => Some(Message::go_home()),

        Key::Character("s") if modifiers.command() => {
            Some(Message::Dialog(DialogMessage::Open(DialogKind::Search)))
        }

        _ => None,
    }
}

impl App {
    /// Handle keyboard shortcuts.
    pub(super) fn handle_key_press(&mut self, key: &Key, modifiers: Modifiers) -> Task<Message> {
        match shortcut(&self.state, key, modifiers) {
            Some(message) => Task::done(message),
            None => Task::none(),
        }
    }
}
