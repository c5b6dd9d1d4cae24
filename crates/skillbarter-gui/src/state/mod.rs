//! Application state management.
//!
//! All runtime state is transient and UI-local:
//!
//! - **AppState**: Root state owned by the `App`
//! - **ViewSwitcher**: Which panel is shown
//! - **Dialog**: The open modal form and its draft
//! - **Notice**: The open message box
//! - **Carousel** / **Accordion**: Cosmetic widget state on the home and about panels
//! - **ContactDraft**: The contact form embedded in the contact panel

mod accordion;
mod app_state;
mod carousel;
mod contact;
mod dialog;
mod navigation;
mod notice;

pub use accordion::Accordion;
pub use app_state::AppState;
pub use carousel::Carousel;
pub use contact::ContactDraft;
pub use dialog::{Dialog, DialogKind, FormField, LoginDraft, RegisterDraft, SearchDraft};
pub use navigation::{View, ViewSwitcher};
pub use notice::{Notice, NoticeLevel};
