//! Application identity constants.
//!
//! Centralized constants for application metadata and the handful of fixed
//! parameters (window size, carousel period, export target) used across the
//! codebase.

use std::time::Duration;

/// Application display name.
pub const APP_NAME: &str = "SkillBarter";

/// Main window title.
pub const WINDOW_TITLE: &str = "⚡ SkillBarter — Website Desktop Edition";

/// Application version from Cargo.toml.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initial window width in logical pixels.
pub const WINDOW_WIDTH: f32 = 1150.0;

/// Initial window height in logical pixels.
pub const WINDOW_HEIGHT: f32 = 820.0;

/// Period between testimonial carousel advances.
pub const CAROUSEL_INTERVAL: Duration = Duration::from_secs(4);

/// File name of the static HTML export, written to the export directory.
pub const EXPORT_FILE_NAME: &str = "skillbarter_export.html";

/// Copyright line shown in the footer.
pub const COPYRIGHT: &str = "©️ 2025 SkillBarter | Desktop Website Edition";
