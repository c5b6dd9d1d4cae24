//! Main application module for SkillBarter.
//!
//! This module implements the Iced 0.14.0 application using the builder pattern.
//! The architecture follows the Elm pattern: State → Message → Update → View.
//!
//! - **All state changes happen in `update()`** - Views are pure functions
//! - **Modals are state** - An open dialog or notice is drawn as an overlay
//!   that absorbs input meant for the window beneath it

mod keyboard;
mod subscription;

pub use keyboard::shortcut;

use iced::{Element, Subscription, Task, Theme};

use crate::constants::WINDOW_TITLE;
use crate::content::{PRIVACY_TEXT, TERMS_TEXT};
use crate::handler::{ContactHandler, DialogHandler, MessageHandler};
use crate::message::{FooterLink, Message};
use crate::state::{AppState, Notice, NoticeLevel};
use crate::theme::neon_theme;

// =============================================================================
// APPLICATION
// =============================================================================

/// Main application struct.
///
/// This is the root of the Iced application. It holds the application state
/// and implements the Elm architecture methods.
#[derive(Debug, Default)]
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// Called once at startup. Returns the initial state and any startup tasks.
    pub fn new() -> (Self, Task<Message>) {
        (Self::default(), Task::none())
    }

    /// Update application state in response to a message.
    ///
    /// This is the core of the Elm architecture - all state changes happen here.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Navigation
            // =================================================================
            Message::Navigate(view) => {
                self.state.views.show(view);
                Task::none()
            }

            // =================================================================
            // Cosmetics
            // =================================================================
            Message::ToggleTheme => {
                self.state.theme_mode = self.state.theme_mode.toggled();
                tracing::debug!("Theme switched to {}", self.state.theme_mode);
                Task::none()
            }

            Message::ToggleFaq(index) => {
                self.state.faq.toggle(index);
                Task::none()
            }

            Message::CarouselTick => {
                self.state.testimonials.advance();
                Task::none()
            }

            // =================================================================
            // Forms
            // =================================================================
            Message::Dialog(dialog_msg) => DialogHandler.handle(&mut self.state, dialog_msg),

            Message::Contact(contact_msg) => ContactHandler.handle(&mut self.state, contact_msg),

            // =================================================================
            // Notices
            // =================================================================
            Message::FeatureSelected(feature) => {
                self.state.notify(Notice::titled(
                    feature.detail_title(),
                    feature.detail_body(),
                    NoticeLevel::Info,
                ));
                Task::none()
            }

            Message::FooterLink(link) => {
                let body = match link {
                    FooterLink::Terms => TERMS_TEXT,
                    FooterLink::Privacy => PRIVACY_TEXT,
                };
                self.state.notify(Notice::info(body));
                Task::none()
            }

            Message::DismissNotice => {
                self.state.notice = None;
                Task::none()
            }

            // =================================================================
            // Global events
            // =================================================================
            Message::KeyPressed(key, modifiers) => self.handle_key_press(&key, modifiers),

            Message::Noop => Task::none(),
        }
    }

    /// Render the main window.
    ///
    /// This is a pure function that produces UI based on current state.
    pub fn view(&self) -> Element<'_, Message> {
        crate::view::view_app(&self.state)
    }

    /// Get the window title.
    pub fn title(&self) -> String {
        WINDOW_TITLE.to_string()
    }

    /// Get the theme for the current appearance mode.
    pub fn theme(&self) -> Theme {
        neon_theme(self.state.theme_mode)
    }

    /// Subscribe to runtime events.
    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription(&self.state)
    }
}
