//! Contact panel message handler.
//!
//! Handles:
//! - Contact form field edits
//! - Contact form submission
//! - Static HTML export

use iced::Task;

use super::MessageHandler;
use crate::constants::EXPORT_FILE_NAME;
use crate::content::CONTACT_SUCCESS;
use crate::message::{ContactMessage, Message};
use crate::service::write_export;
use crate::state::{AppState, Notice};

/// Handler for contact panel messages.
pub struct ContactHandler;

impl MessageHandler<ContactMessage> for ContactHandler {
    fn handle(&self, state: &mut AppState, msg: ContactMessage) -> Task<Message> {
        match msg {
            ContactMessage::NameChanged(name) => state.contact.name = name,
            ContactMessage::EmailChanged(email) => state.contact.email = email,
            ContactMessage::MessageChanged(message) => state.contact.message = message,

            ContactMessage::Send => match state.contact.validate() {
                Ok(()) => {
                    tracing::info!("Contact message accepted");
                    state.contact.clear();
                    state.notify(Notice::info(CONTACT_SUCCESS));
                }
                Err(err) => {
                    tracing::debug!("Contact form rejected: {}", err);
                    state.notify(err);
                }
            },

            ContactMessage::Export => match write_export(&state.export_dir) {
                Ok(_) => {
                    state.notify(Notice::info(format!(
                        "Exported to {EXPORT_FILE_NAME} in working directory."
                    )));
                }
                Err(err) => {
                    tracing::warn!("Export failed: {}", err);
                    state.notify(err);
                }
            },
        }
        Task::none()
    }
}
