//! Message module for SkillBarter.
//!
//! This module defines the message hierarchy for the Elm-style architecture.
//! All user interactions and events flow through these message types.

pub mod contact;
pub mod dialog;

use iced::keyboard;

use crate::content::Feature;
use crate::state::View;

pub use contact::ContactMessage;
pub use dialog::DialogMessage;

/// Root message enum for the application.
///
/// All user interactions and system events are represented as variants
/// of this enum. The `update` function processes these messages to
/// modify application state.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// Show a different panel
    Navigate(View),

    // =========================================================================
    // Cosmetics
    // =========================================================================
    /// Flip between dark and light appearance
    ToggleTheme,

    /// Expand or collapse an FAQ entry
    ToggleFaq(usize),

    /// Advance the testimonial carousel
    CarouselTick,

    // =========================================================================
    // Forms
    // =========================================================================
    /// Modal dialog messages (Login, Register, Search)
    Dialog(DialogMessage),

    /// Contact panel messages
    Contact(ContactMessage),

    // =========================================================================
    // Notices
    // =========================================================================
    /// A feature card was clicked
    FeatureSelected(&'static Feature),

    /// A footer link was clicked
    FooterLink(FooterLink),

    /// Close the message box
    DismissNotice,

    // =========================================================================
    // Global events
    // =========================================================================
    /// Keyboard event
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// No operation - used for ignored events
    Noop,
}

/// Placeholder pages linked from the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterLink {
    Terms,
    Privacy,
}

impl FooterLink {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Terms => "Terms",
            Self::Privacy => "Privacy",
        }
    }
}

impl Message {
    /// Creates a navigation message to go to the home view.
    pub fn go_home() -> Self {
        Self::Navigate(View::Home)
    }
}
