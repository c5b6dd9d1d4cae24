//! SkillBarter - Website Desktop Edition
//!
//! A single-window desktop rendition of the SkillBarter marketing site: a
//! neon-themed navigation bar switching between six panels, modal Login,
//! Register and Search forms, a contact form and a static HTML export.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message, Update, View).

pub mod app;
pub mod component;
pub mod constants;
pub mod content;
pub mod error;
pub mod handler;
pub mod message;
pub mod service;
pub mod state;
pub mod theme;
pub mod validation;
pub mod view;

pub use app::App;
pub use error::{FormError, GuiError};
