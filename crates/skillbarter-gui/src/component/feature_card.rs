//! Feature card component.
//!
//! Icon, title and description in a card that acts as one big button.

use iced::widget::{Text, button, column, row, text};
use iced::{Element, Length, Theme};
use iced_fonts::lucide;

use crate::content::{Feature, FeatureIcon};
use crate::theme::{CARD_WIDTH, NeonColors, SPACING_LG, SPACING_MD, SPACING_SM, button_card};

/// Lucide glyph for a feature icon.
pub fn feature_icon<'a>(icon: FeatureIcon) -> Text<'a> {
    match icon {
        FeatureIcon::Scale => lucide::scale(),
        FeatureIcon::Users => lucide::users(),
        FeatureIcon::Calendar => lucide::calendar(),
        FeatureIcon::Cpu => lucide::cpu(),
        FeatureIcon::ShieldCheck => lucide::shield_check(),
        FeatureIcon::CalendarDays => lucide::calendar_days(),
        FeatureIcon::MessageSquare => lucide::message_square(),
        FeatureIcon::CircleCheck => lucide::circle_check(),
        FeatureIcon::ListOrdered => lucide::list_ordered(),
        FeatureIcon::User => lucide::user(),
        FeatureIcon::WandSparkles => lucide::wand_sparkles(),
        FeatureIcon::Calculator => lucide::calculator(),
        FeatureIcon::Timer => lucide::timer(),
        FeatureIcon::ShieldAlert => lucide::shield_alert(),
    }
}

/// A clickable feature card.
pub fn feature_card<'a, M: Clone + 'a>(feature: &'a Feature, on_press: M) -> Element<'a, M> {
    let accent = |theme: &Theme| text::Style {
        color: Some(theme.neon().heading),
    };

    let content = column![
        feature_icon(feature.icon).size(32).style(accent),
        text(feature.title).size(16).style(accent),
        text(feature.description).size(13),
    ]
    .spacing(SPACING_SM)
    .width(Length::Fill);

    button(content)
        .on_press(on_press)
        .padding(SPACING_LG)
        .width(Length::Fixed(CARD_WIDTH))
        .style(button_card)
        .into()
}

/// Lay out cards in rows of `per_row`.
pub fn feature_grid<'a, M: Clone + 'a>(
    features: &'a [Feature],
    per_row: usize,
    on_press: impl Fn(&'a Feature) -> M,
) -> Element<'a, M> {
    let mut grid = column![].spacing(SPACING_MD + 2.0);
    for chunk in features.chunks(per_row.max(1)) {
        let mut line = row![].spacing(SPACING_MD + 2.0);
        for feature in chunk {
            line = line.push(feature_card(feature, on_press(feature)));
        }
        grid = grid.push(line);
    }
    grid.into()
}
