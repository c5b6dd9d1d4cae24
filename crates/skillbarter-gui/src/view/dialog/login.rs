use iced::widget::{checkbox, column};
use iced::Element;

use crate::component::{form_field, form_row};
use crate::message::{DialogMessage, Message};
use crate::state::{FormField, LoginDraft};
use crate::theme::SPACING_MD;

pub(super) fn view_login(draft: &LoginDraft) -> Element<'_, Message> {
    let remember = checkbox(draft.remember)
        .label("Remember me")
        .on_toggle(|checked| Message::Dialog(DialogMessage::RememberToggled(checked)));

    column![
        form_field("Email:", &draft.email, edit(FormField::Email), false),
        form_field("Password:", &draft.password, edit(FormField::Password), true),
        form_row("", remember),
    ]
    .spacing(SPACING_MD)
    .into()
}

/// Input handler writing into `field` of the open dialog.
pub(super) fn edit(field: FormField) -> impl Fn(String) -> Message {
    move |value| Message::Dialog(DialogMessage::Edit(field, value))
}
