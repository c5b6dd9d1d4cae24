//! Top navigation bar.
//!
//! Brand on the left; search, theme toggle, login and the panel buttons on
//! the right, all on the purple-to-blue gradient.

use iced::widget::{Text, button, container, row, space, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use crate::constants::APP_NAME;
use crate::message::{DialogMessage, Message};
use crate::state::{AppState, DialogKind, View};
use crate::theme::{
    SPACING_MD, SPACING_SM, SPACING_XS, button_nav, button_nav_active, container_nav,
};

/// Render the navigation bar.
pub fn view_nav_bar(state: &AppState) -> Element<'_, Message> {
    let brand = row![lucide::layers().size(26), text(APP_NAME).size(28)]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center);

    // The toggle names the mode it switches to
    let theme_target = state.theme_mode.toggled();

    let mut actions = row![
        icon_button(
            lucide::search(),
            "Search",
            Message::Dialog(DialogMessage::Open(DialogKind::Search)),
        ),
        icon_button(lucide::lightbulb(), theme_target.label(), Message::ToggleTheme),
        icon_button(
            lucide::user(),
            "Login",
            Message::Dialog(DialogMessage::Open(DialogKind::Login)),
        ),
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center);

    for view in View::ALL {
        let style = if state.views.is_visible(view) {
            button_nav_active
        } else {
            button_nav
        };
        actions = actions.push(
            button(text(view.label()).size(14))
                .on_press(Message::Navigate(view))
                .padding([6.0, 12.0])
                .style(style),
        );
    }

    container(
        row![brand, space::horizontal(), actions]
            .align_y(Alignment::Center)
            .spacing(SPACING_MD),
    )
    .width(Length::Fill)
    .padding([12.0, 18.0])
    .style(container_nav)
    .into()
}

fn icon_button<'a>(icon: Text<'a>, label: &'a str, on_press: Message) -> Element<'a, Message> {
    button(
        row![icon.size(14), text(label).size(14)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press(on_press)
    .padding([6.0, 10.0])
    .style(button_nav)
    .into()
}
