//! Neon color extension trait for app-specific colors.
//!
//! Provides an extension trait `NeonColors` that adds SkillBarter-specific
//! color methods to Iced's `Theme`. These are colors not covered by Iced's
//! built-in `ExtendedPalette`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::theme::NeonColors;
//!
//! // In a style closure that receives &Theme:
//! .style(|theme: &Theme| {
//!     let neon = theme.neon();
//!     container::Style {
//!         background: Some(neon.background_card.into()),
//!         ..Default::default()
//!     }
//! })
//! ```

use iced::{Color, Theme};

use super::palette::{NEON_BLUE, NEON_PURPLE};

// =============================================================================
// NEON COLOR SET
// =============================================================================

/// App-specific colors not covered by Iced's ExtendedPalette.
#[derive(Debug, Clone, Copy)]
pub struct NeonColorSet {
    // === Brand ===
    /// Gradient start of the navigation bar
    pub gradient_start: Color,
    /// Gradient end of the navigation bar
    pub gradient_end: Color,
    /// Headline color
    pub heading: Color,

    // === Surfaces ===
    /// Feature cards and form surfaces
    pub background_card: Color,
    /// Hovered feature card
    pub background_card_hover: Color,
    /// Footer strip
    pub background_footer: Color,
    /// Modals
    pub background_elevated: Color,

    // === Borders ===
    /// Default card border
    pub border_subtle: Color,
    /// Hovered/focused border
    pub border_glow: Color,

    // === Text ===
    /// Body copy
    pub text_secondary: Color,
    /// Footer and hints
    pub text_muted: Color,
    /// Text on the gradient and accent backgrounds
    pub text_on_accent: Color,

    // === Special ===
    /// Shadow color for elevation
    pub shadow: Color,
    /// Strong shadow for modals
    pub shadow_strong: Color,
    /// Modal backdrop overlay
    pub backdrop: Color,
}

// =============================================================================
// EXTENSION TRAIT
// =============================================================================

/// Extension trait for SkillBarter-specific colors.
///
/// Use it inside style closures that receive a `&Theme`.
pub trait NeonColors {
    /// Get the neon color set for this theme.
    fn neon(&self) -> NeonColorSet;
}

impl NeonColors for Theme {
    fn neon(&self) -> NeonColorSet {
        let palette = self.extended_palette();
        let is_dark = palette.is_dark;

        NeonColorSet {
            gradient_start: NEON_PURPLE,
            gradient_end: NEON_BLUE,
            heading: palette.primary.base.color,

            background_card: if is_dark {
                Color::from_rgb8(25, 25, 28)
            } else {
                Color::WHITE
            },
            background_card_hover: if is_dark {
                Color::from_rgb8(30, 30, 35)
            } else {
                Color::from_rgb8(240, 248, 255)
            },
            background_footer: if is_dark {
                Color::from_rgb8(18, 18, 22)
            } else {
                Color::from_rgb8(232, 232, 238)
            },
            background_elevated: if is_dark {
                Color::from_rgb8(25, 25, 28)
            } else {
                Color::WHITE
            },

            border_subtle: if is_dark {
                Color::from_rgb8(40, 40, 45)
            } else {
                Color::from_rgb8(220, 220, 228)
            },
            border_glow: palette.primary.base.color,

            text_secondary: if is_dark {
                Color::from_rgb8(224, 224, 224)
            } else {
                Color::from_rgb8(60, 60, 66)
            },
            text_muted: if is_dark {
                Color::from_rgb8(160, 160, 160)
            } else {
                Color::from_rgb8(110, 110, 118)
            },
            text_on_accent: Color::WHITE,

            shadow: Color::from_rgba(0.0, 0.0, 0.0, if is_dark { 0.25 } else { 0.08 }),
            shadow_strong: Color::from_rgba(0.0, 0.0, 0.0, if is_dark { 0.40 } else { 0.16 }),
            backdrop: Color::from_rgba(0.0, 0.0, 0.0, if is_dark { 0.70 } else { 0.50 }),
        }
    }
}
