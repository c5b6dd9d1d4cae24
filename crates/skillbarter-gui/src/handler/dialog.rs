//! Modal dialog message handler.
//!
//! Handles:
//! - Opening and closing the Login, Register and Search dialogs
//! - Field edits routed into the open dialog's draft
//! - Submission: validate, then close with a confirmation or re-prompt

use iced::Task;

use super::MessageHandler;
use crate::content::{LOGIN_SUCCESS, register_success, search_results};
use crate::message::{DialogMessage, Message};
use crate::state::{AppState, Dialog, Notice, NoticeLevel};

/// Handler for modal dialog messages.
pub struct DialogHandler;

impl MessageHandler<DialogMessage> for DialogHandler {
    fn handle(&self, state: &mut AppState, msg: DialogMessage) -> Task<Message> {
        match msg {
            DialogMessage::Open(kind) => {
                tracing::debug!("Opening {:?} dialog", kind);
                state.dialog = Some(Dialog::open(kind));
            }

            DialogMessage::Edit(field, value) => {
                if let Some(dialog) = &mut state.dialog
                    && !dialog.edit(field, value)
                {
                    tracing::debug!("Ignoring {:?} edit for {:?} dialog", field, dialog.kind());
                }
            }

            DialogMessage::RememberToggled(checked) => {
                if let Some(Dialog::Login(draft)) = &mut state.dialog {
                    draft.remember = checked;
                }
            }

            DialogMessage::Submit => handle_submit(state),

            DialogMessage::Close => {
                if let Some(dialog) = state.dialog.take() {
                    tracing::debug!("Closed {:?} dialog without submitting", dialog.kind());
                }
            }
        }
        Task::none()
    }
}

/// Validate the open dialog.
///
/// On success the dialog (and its draft) is dropped and a confirmation is
/// shown. On failure the dialog stays open untouched beneath the rejection
/// notice so the user can correct it.
fn handle_submit(state: &mut AppState) {
    let Some(dialog) = &state.dialog else {
        return;
    };

    if let Err(err) = dialog.validate() {
        tracing::debug!("{:?} dialog rejected: {}", dialog.kind(), err);
        state.notify(err);
        return;
    }

    let confirmation = match dialog {
        Dialog::Login(_) => Notice::info(LOGIN_SUCCESS),
        Dialog::Register(draft) => Notice::info(register_success(draft.name.trim())),
        Dialog::Search(draft) => {
            Notice::titled("Search", search_results(&draft.query), NoticeLevel::Info)
        }
    };

    tracing::info!("{:?} dialog submitted", dialog.kind());
    state.dialog = None;
    state.notify(confirmation);
}
