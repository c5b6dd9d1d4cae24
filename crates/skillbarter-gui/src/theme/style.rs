//! Neon theme implementation for SkillBarter.
//!
//! This module provides the custom theme and widget style functions.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::theme::{button_primary, NeonColors};
//!
//! button(text("Send")).style(button_primary)
//! ```

use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Degrees, Gradient, Shadow, Theme, Vector, gradient};

use super::colors::NeonColors;
use super::palette::{ThemeMode, neon_palette};
use super::spacing;

// =============================================================================
// THEME CREATION
// =============================================================================

/// Creates the neon theme for the given mode.
///
/// The theme is rebuilt from state on every frame, so toggling the mode
/// recolors every widget at once.
pub fn neon_theme(theme_mode: ThemeMode) -> Theme {
    Theme::custom(format!("Neon {}", theme_mode.label()), neon_palette(theme_mode))
}

/// Purple-to-blue gradient used behind the navigation bar and hovered nav
/// buttons.
fn neon_gradient(theme: &Theme) -> Background {
    let neon = theme.neon();
    Background::Gradient(Gradient::Linear(
        gradient::Linear::new(Degrees(90.0))
            .add_stop(0.0, neon.gradient_start)
            .add_stop(1.0, neon.gradient_end),
    ))
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - main actions.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let neon = theme.neon();

    let background = match status {
        button::Status::Active => palette.primary.base.color,
        button::Status::Hovered => palette.primary.strong.color,
        button::Status::Pressed => palette.primary.weak.color,
        button::Status::Disabled => neon.border_subtle,
    };

    button::Style {
        background: Some(background.into()),
        text_color: neon.text_on_accent,
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow {
            color: neon.shadow,
            offset: Vector::new(0.0, 1.0),
            blur_radius: 2.0,
        },
        ..Default::default()
    }
}

/// Secondary button style - alternative actions.
///
/// Uses a subtle background with border emphasis.
pub fn button_secondary(theme: &Theme, status: button::Status) -> button::Style {
    let neon = theme.neon();

    let (background, border_color) = match status {
        button::Status::Hovered => (neon.background_card_hover, neon.border_glow),
        button::Status::Pressed => (neon.background_footer, neon.border_glow),
        button::Status::Active | button::Status::Disabled => {
            (neon.background_card, neon.border_subtle)
        }
    };

    button::Style {
        background: Some(background.into()),
        text_color: neon.text_secondary,
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: border_color,
        },
        ..Default::default()
    }
}

/// Ghost button style - minimal visual weight.
///
/// Transparent background with text-only appearance.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let neon = theme.neon();

    button::Style {
        background: match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(neon.background_card_hover.into())
            }
            _ => None,
        },
        text_color: neon.text_secondary,
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}

/// Navigation bar button style.
///
/// White text on the gradient bar; hovering lights up a rounded pill.
pub fn button_nav(theme: &Theme, status: button::Status) -> button::Style {
    let neon = theme.neon();

    button::Style {
        background: match status {
            button::Status::Hovered | button::Status::Pressed => Some(
                Color {
                    a: 0.20,
                    ..neon.text_on_accent
                }
                .into(),
            ),
            _ => None,
        },
        text_color: neon.text_on_accent,
        border: Border {
            radius: spacing::BORDER_RADIUS_LG.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}

/// Navigation button of the panel currently shown.
pub fn button_nav_active(theme: &Theme, _status: button::Status) -> button::Style {
    let neon = theme.neon();

    button::Style {
        background: Some(
            Color {
                a: 0.25,
                ..neon.text_on_accent
            }
            .into(),
        ),
        text_color: neon.text_on_accent,
        border: Border {
            radius: spacing::BORDER_RADIUS_LG.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: neon.text_on_accent,
        },
        ..Default::default()
    }
}

/// Feature card style - the whole card is a button.
pub fn button_card(theme: &Theme, status: button::Status) -> button::Style {
    let neon = theme.neon();

    let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);

    button::Style {
        background: Some(if hovered {
            neon.background_card_hover.into()
        } else {
            neon.background_card.into()
        }),
        text_color: neon.text_secondary,
        border: Border {
            radius: spacing::BORDER_RADIUS_MD.into(),
            width: if hovered {
                spacing::BORDER_WIDTH_MEDIUM
            } else {
                spacing::BORDER_WIDTH_THIN
            },
            color: if hovered {
                neon.border_glow
            } else {
                neon.border_subtle
            },
        },
        shadow: Shadow {
            color: neon.shadow,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Navigation bar - purple to blue gradient.
pub fn container_nav(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(neon_gradient(theme)),
        text_color: Some(theme.neon().text_on_accent),
        ..Default::default()
    }
}

/// Footer strip.
pub fn container_footer(theme: &Theme) -> container::Style {
    let neon = theme.neon();

    container::Style {
        background: Some(neon.background_footer.into()),
        text_color: Some(neon.text_muted),
        ..Default::default()
    }
}

/// Panel body - the window background.
pub fn container_panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.base.color.into()),
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Card container style - elevated surface.
pub fn container_card(theme: &Theme) -> container::Style {
    let neon = theme.neon();

    container::Style {
        background: Some(neon.background_card.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_MD.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: neon.border_subtle,
        },
        text_color: Some(neon.text_secondary),
        ..Default::default()
    }
}

/// Modal container style - dialog overlay.
pub fn container_modal(theme: &Theme) -> container::Style {
    let neon = theme.neon();

    container::Style {
        background: Some(neon.background_elevated.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_MD.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: neon.border_subtle,
        },
        shadow: Shadow {
            color: neon.shadow_strong,
            offset: Vector::new(0.0, 4.0),
            blur_radius: 24.0,
        },
        text_color: Some(neon.text_secondary),
        ..Default::default()
    }
}

/// Semi-transparent backdrop behind modals.
pub fn container_backdrop(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.neon().backdrop.into()),
        ..Default::default()
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

/// Default text input style.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();
    let neon = theme.neon();

    let border_color = match status {
        text_input::Status::Focused { .. } => neon.border_glow,
        text_input::Status::Hovered => neon.text_muted,
        text_input::Status::Active | text_input::Status::Disabled => neon.border_subtle,
    };

    text_input::Style {
        background: neon.background_card.into(),
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: border_color,
        },
        icon: neon.text_muted,
        placeholder: neon.text_muted,
        value: palette.background.base.text,
        selection: Color {
            a: 0.35,
            ..neon.border_glow
        },
    }
}
