//! Modal dialog overlay component.
//!
//! Provides modal dialogs with backdrop, title, content, and action buttons.

use iced::widget::{button, center, column, container, opaque, row, space, stack, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use crate::state::{Notice, NoticeLevel};
use crate::theme::{
    MODAL_WIDTH_SM, NeonColors, SPACING_LG, SPACING_MD, SPACING_SM, button_ghost, button_primary,
    container_backdrop, container_modal,
};

// =============================================================================
// MODAL DIALOG
// =============================================================================

/// Creates a modal dialog overlay.
///
/// The modal appears centered on top of the base content with a semi-transparent
/// backdrop. The backdrop swallows all input meant for the base, so the window
/// underneath cannot be used until the modal is dismissed. Clicking the backdrop
/// does NOT close the modal - use the close button.
///
/// # Arguments
///
/// * `base` - The background content
/// * `title` - Modal title text
/// * `content` - Modal body content
/// * `on_close` - Message to send when close button is clicked
/// * `actions` - Action buttons for the footer
/// * `width` - Width of the dialog box
pub fn modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: &'a str,
    content: Element<'a, M>,
    on_close: M,
    actions: Vec<Element<'a, M>>,
    width: f32,
) -> Element<'a, M> {
    let backdrop = container(column![])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container_backdrop);

    let header = row![
        text(title).size(18).style(|theme: &Theme| text::Style {
            color: Some(theme.neon().heading),
        }),
        space::horizontal(),
        button(lucide::x().size(18))
            .on_press(on_close)
            .padding([4.0, 8.0])
            .style(button_ghost),
    ]
    .align_y(Alignment::Center);

    let mut action_row = row![space::horizontal()].spacing(SPACING_SM);
    for action in actions {
        action_row = action_row.push(action);
    }

    let dialog = container(
        column![
            header,
            container(content).padding([SPACING_SM, 0.0]),
            action_row,
        ]
        .spacing(SPACING_MD),
    )
    .width(Length::Fixed(width))
    .padding(SPACING_LG)
    .style(container_modal);

    // Stack layers: base -> backdrop -> dialog
    stack![base, opaque(backdrop), center(dialog)].into()
}

/// Creates a message box with a single OK button.
///
/// The icon and its color follow the notice level.
pub fn notice_modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    notice: &'a Notice,
    on_close: M,
) -> Element<'a, M> {
    let level = notice.level;
    let icon = match level {
        NoticeLevel::Info => lucide::info(),
        NoticeLevel::Warning => lucide::triangle_alert(),
        NoticeLevel::Error => lucide::circle_x(),
    }
    .size(22)
    .style(move |theme: &Theme| {
        let palette = theme.extended_palette();
        text::Style {
            color: Some(match level {
                NoticeLevel::Info => palette.primary.base.color,
                NoticeLevel::Warning => palette.warning.base.color,
                NoticeLevel::Error => palette.danger.base.color,
            }),
        }
    });

    let content = row![icon, text(&notice.body).size(14)]
        .spacing(SPACING_MD)
        .align_y(Alignment::Start)
        .into();

    let ok_btn: Element<'a, M> = button(text("OK"))
        .on_press(on_close.clone())
        .padding([8.0, 24.0])
        .style(button_primary)
        .into();

    modal(
        base,
        &notice.title,
        content,
        on_close,
        vec![ok_btn],
        MODAL_WIDTH_SM,
    )
}
