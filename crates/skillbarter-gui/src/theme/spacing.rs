//! Spacing constants for consistent layout throughout the application.
//!
//! All spacing values are in pixels (f32) and follow a consistent scale.

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, card gaps
pub const SPACING_LG: f32 = 24.0;

/// Extra large spacing - panel margins
pub const SPACING_XL: f32 = 40.0;

/// Double extra large spacing - hero margins
pub const SPACING_XXL: f32 = 60.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================

/// Small radius - inputs
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Medium radius - cards
pub const BORDER_RADIUS_MD: f32 = 8.0;

/// Large radius - modals, pill buttons
pub const BORDER_RADIUS_LG: f32 = 18.0;

// =============================================================================
// BORDER WIDTHS
// =============================================================================

/// Thin border - card outlines
pub const BORDER_WIDTH_THIN: f32 = 1.0;

/// Medium border - hovered cards, focused inputs
pub const BORDER_WIDTH_MEDIUM: f32 = 2.0;

// =============================================================================
// COMPONENT SIZES
// =============================================================================

/// Modal width - notices
pub const MODAL_WIDTH_SM: f32 = 420.0;

/// Modal width - forms
pub const MODAL_WIDTH_MD: f32 = 480.0;

/// Feature card width
pub const CARD_WIDTH: f32 = 300.0;

/// FAQ column width
pub const FAQ_WIDTH: f32 = 340.0;

/// Width of the label column in forms
pub const FORM_LABEL_WIDTH: f32 = 190.0;
