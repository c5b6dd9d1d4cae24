use iced::widget::{column, text, text_input};
use iced::{Element, Length};

use super::login::edit;
use crate::message::{DialogMessage, Message};
use crate::state::{FormField, SearchDraft};
use crate::theme::{SPACING_SM, text_input_default};

pub(super) fn view_search(draft: &SearchDraft) -> Element<'_, Message> {
    column![
        text("Search for skills, topics or users:").size(14),
        text_input("", &draft.query)
            .on_input(edit(FormField::Query))
            .on_submit(Message::Dialog(DialogMessage::Submit))
            .padding(8.0)
            .width(Length::Fill)
            .style(text_input_default),
    ]
    .spacing(SPACING_SM)
    .into()
}
