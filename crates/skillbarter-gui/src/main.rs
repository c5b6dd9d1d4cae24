//! SkillBarter - Website Desktop Edition
//!
//! Application entry point.

use iced::window;
use iced::{Color, Size};
use skillbarter_gui::App;
use skillbarter_gui::component::LUCIDE_FONT_BYTES;
use skillbarter_gui::constants::{APP_NAME, APP_VERSION, WINDOW_HEIGHT, WINDOW_WIDTH};
use skillbarter_gui::theme::{NEON_BLUE, NEON_PURPLE};

/// Edge length of the generated window icon.
const ICON_SIZE: u32 = 64;

pub fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting {} {}", APP_NAME, APP_VERSION);

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window(window::Settings {
            size: Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            icon: load_icon(),
            ..Default::default()
        })
        .font(LUCIDE_FONT_BYTES)
        .run()
}

/// Build the window icon: a horizontal purple-to-blue gradient square.
fn load_icon() -> Option<window::Icon> {
    let rgba = gradient_rgba(ICON_SIZE, NEON_PURPLE, NEON_BLUE);
    match window::icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE) {
        Ok(icon) => Some(icon),
        Err(err) => {
            tracing::warn!("Failed to build window icon: {}", err);
            None
        }
    }
}

fn gradient_rgba(size: u32, from: Color, to: Color) -> Vec<u8> {
    let span = size.saturating_sub(1).max(1) as f32;
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for _y in 0..size {
        for x in 0..size {
            let t = x as f32 / span;
            let mix = |a: f32, b: f32| ((a + (b - a) * t) * 255.0).round() as u8;
            pixels.extend_from_slice(&[mix(from.r, to.r), mix(from.g, to.g), mix(from.b, to.b), 255]);
        }
    }
    pixels
}
