//! Reusable UI components for SkillBarter.
//!
//! - **Overlays**: `modal`, `notice_modal`
//! - **Form**: `form_field`, `form_row`
//! - **Display**: `feature_card`, `feature_grid`
//! - **Icons**: Use `iced_fonts::lucide::*` directly (see <https://lucide.dev/icons/>)
//!
//! Components are plain functions returning `Element<M>` so they compose with
//! any message type.

mod feature_card;
mod form_field;
mod modal;

pub use feature_card::{feature_card, feature_grid, feature_icon};
pub use form_field::{form_field, form_row};
pub use modal::{modal, notice_modal};

// Re-export font bytes for convenience (load in main.rs)
pub use iced_fonts::LUCIDE_FONT_BYTES;
