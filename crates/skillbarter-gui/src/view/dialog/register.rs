use iced::widget::column;
use iced::Element;

use super::login::edit;
use crate::component::form_field;
use crate::message::Message;
use crate::state::{FormField, RegisterDraft};
use crate::theme::SPACING_MD;

pub(super) fn view_register(draft: &RegisterDraft) -> Element<'_, Message> {
    column![
        form_field("Full name:", &draft.name, edit(FormField::Name), false),
        form_field("Email:", &draft.email, edit(FormField::Email), false),
        form_field("Password:", &draft.password, edit(FormField::Password), true),
        form_field(
            "Skills (comma separated):",
            &draft.skills,
            edit(FormField::Skills),
            false,
        ),
    ]
    .spacing(SPACING_MD)
    .into()
}
