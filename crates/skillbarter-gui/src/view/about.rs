//! About panel with the FAQ accordion.

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use super::home::heading;
use crate::content::{ABOUT_INTRO, ABOUT_MISSION, ABOUT_TITLE, FAQ};
use crate::message::Message;
use crate::state::AppState;
use crate::theme::{FAQ_WIDTH, SPACING_LG, SPACING_SM, SPACING_XL, button_ghost};

/// Render the about panel.
pub fn view_about(state: &AppState) -> Element<'_, Message> {
    let mut faq = column![text("FAQ").size(20)].spacing(SPACING_SM);
    for (i, entry) in FAQ.iter().enumerate() {
        let expanded = state.faq.is_expanded(i);
        let chevron = if expanded {
            lucide::chevron_down()
        } else {
            lucide::chevron_right()
        };

        faq = faq.push(
            button(
                row![chevron.size(14), text(entry.question).size(15)]
                    .spacing(SPACING_SM)
                    .align_y(Alignment::Center),
            )
            .on_press(Message::ToggleFaq(i))
            .width(Length::Fixed(FAQ_WIDTH))
            .style(button_ghost),
        );
        if expanded {
            faq = faq.push(container(text(entry.answer).size(14)).padding([0.0, 30.0]));
        }
    }

    container(
        column![
            heading(ABOUT_TITLE),
            text(ABOUT_INTRO).size(16),
            text(ABOUT_MISSION).size(16),
            faq,
        ]
        .spacing(SPACING_LG),
    )
    .width(Length::Fill)
    .padding(SPACING_XL)
    .into()
}
