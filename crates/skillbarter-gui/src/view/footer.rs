//! Footer strip.

use iced::widget::{button, container, row, space, text};
use iced::{Alignment, Element, Length};

use crate::constants::COPYRIGHT;
use crate::message::{FooterLink, Message};
use crate::theme::{SPACING_SM, button_ghost, container_footer};

/// Render the footer.
pub fn view_footer<'a>() -> Element<'a, Message> {
    let link = |target: FooterLink| {
        button(text(target.label()).size(13))
            .on_press(Message::FooterLink(target))
            .padding([4.0, 10.0])
            .style(button_ghost)
    };

    container(
        row![
            text(COPYRIGHT).size(13),
            space::horizontal(),
            link(FooterLink::Terms),
            link(FooterLink::Privacy),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([10.0, 20.0])
    .style(container_footer)
    .into()
}
