//! Form field components.
//!
//! Labelled inputs laid out as a two-column form.

use iced::widget::{container, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::theme::{FORM_LABEL_WIDTH, SPACING_MD, text_input_default};

/// A labelled text input row.
///
/// # Arguments
///
/// * `label` - Field label text
/// * `value` - Current field value
/// * `on_change` - Message factory for value changes
/// * `secure` - Mask the value (passwords)
pub fn form_field<'a, M: Clone + 'a>(
    label: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> M + 'a,
    secure: bool,
) -> Element<'a, M> {
    let input = text_input("", value)
        .on_input(on_change)
        .secure(secure)
        .padding(8.0)
        .width(Length::Fill)
        .style(text_input_default);

    form_row(label, input)
}

/// Place any widget next to a fixed-width label.
pub fn form_row<'a, M: 'a>(label: &'a str, field: impl Into<Element<'a, M>>) -> Element<'a, M> {
    row![
        container(text(label).size(14)).width(Length::Fixed(FORM_LABEL_WIDTH)),
        field.into(),
    ]
    .spacing(SPACING_MD)
    .align_y(Alignment::Center)
    .into()
}
