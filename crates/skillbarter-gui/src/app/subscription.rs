//! Application subscriptions.
//!
//! Subscriptions are reactive event sources that run alongside the app.
//!
//! | Subscription | Interval | Condition | Purpose |
//! |--------------|----------|-----------|---------|
//! | Keyboard | Continuous | Always | Global keyboard shortcuts |
//! | Carousel | 4 seconds | Testimonials present | Rotate home testimonials |
//!
//! A subscription is cancelled by no longer returning it from
//! `create_subscription()`; Iced tears down the underlying timer.

use iced::Subscription;
use iced::keyboard;
use iced::time;

use crate::constants::CAROUSEL_INTERVAL;
use crate::message::Message;
use crate::state::AppState;

/// Create all application subscriptions.
pub fn create_subscription(state: &AppState) -> Subscription<Message> {
    Subscription::batch([keyboard_subscription(), carousel_subscription(state)])
}

/// Keyboard event subscription.
///
/// Listens for all key press events to handle global shortcuts.
fn keyboard_subscription() -> Subscription<Message> {
    keyboard::listen().map(|event| match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => Message::KeyPressed(key, modifiers),
        _ => Message::Noop,
    })
}

/// Testimonial carousel timer.
///
/// Ticks are delivered to `update()` on the event loop like any other
/// message. Returns no subscription when there is nothing to rotate.
fn carousel_subscription(state: &AppState) -> Subscription<Message> {
    if state.testimonials.len() > 1 {
        time::every(CAROUSEL_INTERVAL).map(|_| Message::CarouselTick)
    } else {
        Subscription::none()
    }
}
