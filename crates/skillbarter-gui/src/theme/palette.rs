//! Neon color palettes for SkillBarter.
//!
//! Two palettes (dark and light) that integrate with Iced's theme system via
//! the `Palette` type. Dark is the default appearance.

use iced::Color;
use iced::theme::Palette;

// =============================================================================
// BRAND COLORS
// =============================================================================

/// Neon blue accent.
pub const NEON_BLUE: Color = Color::from_rgb8(0, 200, 255);

/// Neon purple accent.
pub const NEON_PURPLE: Color = Color::from_rgb8(170, 0, 255);

// =============================================================================
// THEME MODE
// =============================================================================

/// Theme mode for light/dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// PALETTE CREATION
// =============================================================================

/// Create the Iced Palette for the given theme mode.
pub fn neon_palette(theme_mode: ThemeMode) -> Palette {
    match theme_mode {
        ThemeMode::Dark => dark(),
        ThemeMode::Light => light(),
    }
}

/// Near-black background with light text and the neon blue accent.
fn dark() -> Palette {
    Palette {
        background: Color::from_rgb8(10, 10, 12),
        text: Color::from_rgb8(230, 230, 230),
        primary: NEON_BLUE,
        success: Color::from_rgb(0.35, 0.80, 0.55),
        warning: Color::from_rgb(1.0, 0.75, 0.20),
        danger: Color::from_rgb(0.95, 0.40, 0.40),
    }
}

/// Off-white background with dark text. The accent is deepened for contrast.
fn light() -> Palette {
    Palette {
        background: Color::from_rgb8(245, 245, 248),
        text: Color::from_rgb8(30, 30, 30),
        primary: Color::from_rgb8(0, 130, 200),
        success: Color::from_rgb(0.20, 0.70, 0.40),
        warning: Color::from_rgb(0.95, 0.65, 0.05),
        danger: Color::from_rgb(0.85, 0.25, 0.25),
    }
}
