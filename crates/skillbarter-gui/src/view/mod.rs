//! View layer for SkillBarter.
//!
//! Pure functions from `&AppState` to `Element`. The main window is the
//! navigation bar, the active panel and the footer; an open dialog and an
//! open notice are stacked on top, in that order.

mod about;
mod contact;
mod dialog;
mod footer;
mod home;
mod nav_bar;
mod profile;
mod showcase;

use iced::widget::{column, container, scrollable};
use iced::{Element, Length};

use crate::component::notice_modal;
use crate::message::Message;
use crate::state::{AppState, View};
use crate::theme::container_panel;

pub use about::view_about;
pub use contact::view_contact;
pub use dialog::view_dialog;
pub use footer::view_footer;
pub use home::view_home;
pub use nav_bar::view_nav_bar;
pub use profile::view_profile;
pub use showcase::{view_modules, view_services};

/// Render the whole window.
pub fn view_app(state: &AppState) -> Element<'_, Message> {
    let panel = match state.views.current() {
        View::Home => view_home(state),
        View::About => view_about(state),
        View::Services => view_services(),
        View::Modules => view_modules(),
        View::Contact => view_contact(state),
        View::Profile => view_profile(),
    };

    let page = column![
        view_nav_bar(state),
        scrollable(panel).height(Length::Fill).width(Length::Fill),
        view_footer(),
    ];

    let mut root: Element<'_, Message> = container(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container_panel)
        .into();

    if let Some(dialog) = &state.dialog {
        root = view_dialog(root, dialog);
    }

    if let Some(notice) = &state.notice {
        root = notice_modal(root, notice, Message::DismissNotice);
    }

    root
}
