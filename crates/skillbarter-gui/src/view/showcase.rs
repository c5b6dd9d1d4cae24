//! Services and Modules panels.
//!
//! Both are a heading over a grid of feature cards; clicking a card opens its
//! detail notice.

use iced::widget::{column, container};
use iced::{Element, Length};

use super::home::heading;
use crate::component::feature_grid;
use crate::content::{Feature, MODULES, MODULES_TITLE, SERVICES, SERVICES_TITLE};
use crate::message::Message;
use crate::theme::{SPACING_LG, SPACING_XL};

/// Render the services panel.
pub fn view_services<'a>() -> Element<'a, Message> {
    view_showcase(SERVICES_TITLE, &SERVICES)
}

/// Render the modules panel.
pub fn view_modules<'a>() -> Element<'a, Message> {
    view_showcase(MODULES_TITLE, &MODULES)
}

fn view_showcase<'a>(title: &'a str, features: &'static [Feature]) -> Element<'a, Message> {
    container(
        column![
            heading(title),
            feature_grid(features, 3, Message::FeatureSelected),
        ]
        .spacing(SPACING_LG),
    )
    .width(Length::Fill)
    .padding([SPACING_XL - 10.0, SPACING_XL])
    .into()
}
