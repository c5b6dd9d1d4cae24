//! Profile panel.

use iced::widget::{column, container, text};
use iced::{Element, Length};

use super::home::heading;
use crate::content::{PROFILE_INFO, PROFILE_TITLE};
use crate::message::Message;
use crate::theme::{SPACING_LG, SPACING_XL};

/// Render the profile placeholder.
pub fn view_profile<'a>() -> Element<'a, Message> {
    container(column![heading(PROFILE_TITLE), text(PROFILE_INFO).size(16)].spacing(SPACING_LG))
        .width(Length::Fill)
        .padding(SPACING_XL)
        .into()
}
