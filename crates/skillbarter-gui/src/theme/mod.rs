//! Theme module for SkillBarter.
//!
//! This module provides the neon theme with:
//! - Color palettes for dark and light mode (`palette`)
//! - App-specific colors on top of Iced's palette (`colors`)
//! - Spacing constants (`spacing`)
//! - Custom widget styles (`style`)

pub mod colors;
pub mod palette;
pub mod spacing;
pub mod style;

pub use colors::{NeonColorSet, NeonColors};
pub use palette::{NEON_BLUE, NEON_PURPLE, ThemeMode};

pub use spacing::{
    BORDER_RADIUS_MD, CARD_WIDTH, FAQ_WIDTH, FORM_LABEL_WIDTH, MODAL_WIDTH_MD, MODAL_WIDTH_SM,
    SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS, SPACING_XXL,
};

pub use style::{
    button_card, button_ghost, button_nav, button_nav_active, button_primary, button_secondary,
    container_backdrop, container_card, container_footer, container_modal, container_nav,
    container_panel, neon_theme, text_input_default,
};
