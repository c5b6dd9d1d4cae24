//! Home panel.
//!
//! Headline, tagline, the three highlight cards, the rotating testimonial and
//! the sign-up call to action.

use iced::widget::{Text, button, column, container, text};
use iced::{Alignment, Element, Length, Theme};

use crate::component::feature_grid;
use crate::content::{HOME_CTA, HOME_FEATURES, HOME_HEADLINE, HOME_TAGLINE};
use crate::message::{DialogMessage, Message};
use crate::state::{AppState, DialogKind};
use crate::theme::{
    NeonColors, SPACING_LG, SPACING_SM, SPACING_XL, SPACING_XXL, button_primary, container_card,
};

/// Render the home panel.
pub fn view_home(state: &AppState) -> Element<'_, Message> {
    let cta = button(text(HOME_CTA).size(16))
        .on_press(Message::Dialog(DialogMessage::Open(DialogKind::Register)))
        .padding([12.0, 28.0])
        .style(button_primary);

    container(
        column![
            heading(HOME_HEADLINE).size(36),
            text(HOME_TAGLINE).size(16).style(secondary),
            feature_grid(&HOME_FEATURES, 3, Message::FeatureSelected),
            view_testimonial(state),
            cta,
        ]
        .spacing(SPACING_LG)
        .align_x(Alignment::Center),
    )
    .padding([SPACING_XL, SPACING_XXL])
    .center_x(Length::Fill)
    .into()
}

fn view_testimonial(state: &AppState) -> Element<'_, Message> {
    let carousel = &state.testimonials;
    let Some(current) = carousel.current() else {
        return column![].into();
    };

    // One dot per testimonial, the shown one filled
    let dots: String = (0..carousel.len())
        .map(|i| if i == carousel.index() { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ");

    let card = column![
        text(format!("\u{201c}{}\u{201d}", current.quote)).size(18),
        text(format!("- {}", current.author)).size(14).style(secondary),
        text(dots).size(12),
    ]
    .spacing(SPACING_SM)
    .width(Length::Fill)
    .align_x(Alignment::Center);

    container(card)
        .padding(SPACING_LG)
        .width(Length::Fixed(560.0))
        .style(container_card)
        .into()
}

/// Panel heading in the accent color.
pub(super) fn heading(content: &str) -> Text<'_> {
    text(content).size(30).style(|theme: &Theme| text::Style {
        color: Some(theme.neon().heading),
    })
}

fn secondary(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.neon().text_secondary),
    }
}
