//! Root application state.

use std::path::PathBuf;

use super::{Accordion, Carousel, ContactDraft, Dialog, Notice, ViewSwitcher};
use crate::content::{FAQ, TESTIMONIALS, Testimonial};
use crate::theme::ThemeMode;

/// All state of the running application.
///
/// Owned by the `App` and mutated only from `update()`.
#[derive(Debug)]
pub struct AppState {
    /// Which panel is shown.
    pub views: ViewSwitcher,
    /// Light/dark appearance.
    pub theme_mode: ThemeMode,
    /// Open modal form, if any.
    pub dialog: Option<Dialog>,
    /// Open message box, if any. Drawn above the dialog.
    pub notice: Option<Notice>,
    /// Home panel testimonial rotation.
    pub testimonials: Carousel<Testimonial>,
    /// About panel FAQ.
    pub faq: Accordion,
    /// Contact panel form.
    pub contact: ContactDraft,
    /// Directory the static export is written to.
    pub export_dir: PathBuf,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            views: ViewSwitcher::default(),
            theme_mode: ThemeMode::default(),
            dialog: None,
            notice: None,
            testimonials: Carousel::new(&TESTIMONIALS),
            faq: Accordion::new(FAQ.len()),
            contact: ContactDraft::default(),
            export_dir: PathBuf::from("."),
        }
    }
}

impl AppState {
    /// Whether a dialog or notice currently blocks the main window.
    pub fn has_modal(&self) -> bool {
        self.dialog.is_some() || self.notice.is_some()
    }

    /// Replace the current notice.
    pub fn notify(&mut self, notice: impl Into<Notice>) {
        self.notice = Some(notice.into());
    }
}
