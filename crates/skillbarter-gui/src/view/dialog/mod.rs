//! Modal form dialogs.
//!
//! Each form renders its body; this module wraps it in the shared modal with
//! Cancel and the form's submit action.

mod login;
mod register;
mod search;

use iced::widget::{button, text};
use iced::{Element, Theme};

use crate::component::modal;
use crate::message::{DialogMessage, Message};
use crate::state::Dialog;
use crate::theme::{MODAL_WIDTH_MD, MODAL_WIDTH_SM, button_primary, button_secondary};

/// Overlay the open dialog on `base`.
pub fn view_dialog<'a>(base: Element<'a, Message>, dialog: &'a Dialog) -> Element<'a, Message> {
    let (body, submit_label, width) = match dialog {
        Dialog::Login(draft) => (login::view_login(draft), "Login", MODAL_WIDTH_MD),
        Dialog::Register(draft) => (register::view_register(draft), "Register", MODAL_WIDTH_MD),
        Dialog::Search(draft) => (search::view_search(draft), "Search", MODAL_WIDTH_SM),
    };

    let close = Message::Dialog(DialogMessage::Close);

    let cancel = action("Cancel", close.clone(), button_secondary);
    let submit = action(
        submit_label,
        Message::Dialog(DialogMessage::Submit),
        button_primary,
    );

    modal(
        base,
        dialog.kind().title(),
        body,
        close,
        vec![cancel, submit],
        width,
    )
}

fn action<'a>(
    label: &'a str,
    on_press: Message,
    style: fn(&Theme, button::Status) -> button::Style,
) -> Element<'a, Message> {
    button(text(label))
        .on_press(on_press)
        .padding([8.0, 16.0])
        .style(style)
        .into()
}
