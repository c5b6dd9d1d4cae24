//! Contact panel.
//!
//! Name, email and message fields with Send and Export buttons.

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use super::home::heading;
use crate::component::form_field;
use crate::content::CONTACT_TITLE;
use crate::message::{ContactMessage, Message};
use crate::state::AppState;
use crate::theme::{SPACING_LG, SPACING_MD, SPACING_XL, SPACING_XS, button_primary, button_secondary};

/// Render the contact panel.
pub fn view_contact(state: &AppState) -> Element<'_, Message> {
    let draft = &state.contact;

    let form = column![
        form_field(
            "Name:",
            &draft.name,
            |v| Message::Contact(ContactMessage::NameChanged(v)),
            false,
        ),
        form_field(
            "Email:",
            &draft.email,
            |v| Message::Contact(ContactMessage::EmailChanged(v)),
            false,
        ),
        form_field(
            "Message:",
            &draft.message,
            |v| Message::Contact(ContactMessage::MessageChanged(v)),
            false,
        ),
    ]
    .spacing(SPACING_MD)
    .width(Length::Fixed(640.0));

    let send = button(
        row![lucide::arrow_right().size(14), text("Send")]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press(Message::Contact(ContactMessage::Send))
    .padding([8.0, 20.0])
    .style(button_primary);

    let export = button(
        row![lucide::download().size(14), text("Export Page to HTML")]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press(Message::Contact(ContactMessage::Export))
    .padding([8.0, 20.0])
    .style(button_secondary);

    container(
        column![
            heading(CONTACT_TITLE),
            form,
            row![send, export].spacing(SPACING_MD),
        ]
        .spacing(SPACING_LG),
    )
    .width(Length::Fill)
    .padding(SPACING_XL)
    .into()
}
