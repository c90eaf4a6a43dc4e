// SPDX-License-Identifier: MPL-2.0
//! The single screen: pick button, thumbnail, location line, error line and
//! the optional metadata panel.

use super::design_tokens::{palette, sizing, spacing, typography};
use super::metadata_dump;
use crate::app::Message;
use crate::application::locator::LocateError;
use crate::application::retriever::Retriever;
use crate::i18n::fluent::I18n;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, scrollable, text, Column, Container, Text};
use iced::{alignment, Element, Font, Length, Theme};

/// Context required to render the screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub retriever: &'a Retriever,
    pub thumbnail_size: u32,
    pub show_metadata_dump: bool,
    /// Startup notice (e.g. unreadable settings), already translated.
    pub notice: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let ViewContext {
        i18n,
        retriever,
        thumbnail_size,
        show_metadata_dump,
        notice,
    } = ctx;

    let label = if retriever.is_busy() {
        i18n.tr("pick-button-busy")
    } else {
        i18n.tr("pick-button")
    };
    let pick = button(Text::new(label).size(typography::BODY_LG))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .on_press_maybe((!retriever.is_busy()).then_some(Message::PickImage));

    let mut content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(pick);

    if let Some(notice) = notice {
        content = content.push(colored(notice.to_string(), palette::WARNING_500));
    }

    let edge = Length::Fixed(thumbnail_size as f32);
    content = match retriever.selected_image() {
        Some(image) => content.push(
            Image::new(Handle::from_path(&image.uri))
                .width(edge)
                .height(edge),
        ),
        None => content.push(
            Container::new(colored(i18n.tr("no-image-placeholder"), palette::GRAY_400))
                .width(edge)
                .height(edge)
                .center_x(edge)
                .center_y(edge),
        ),
    };

    if let Some(location) = retriever.location_text() {
        content = content.push(Text::new(location).size(typography::BODY));
    }

    if let Some(err) = retriever.error() {
        content = content.push(colored(error_text(i18n, err), palette::ERROR_500));
    }

    if show_metadata_dump {
        if let Some(asset) = retriever.last_asset() {
            content = content
                .push(Text::new(i18n.tr("metadata-dump-heading")).size(typography::BODY))
                .push(
                    scrollable(
                        Text::new(metadata_dump::render(asset))
                            .font(Font::MONOSPACE)
                            .size(typography::CAPTION),
                    )
                    .height(Length::Fixed(sizing::DUMP_MAX_HEIGHT)),
                );
        }
    }

    Container::new(content.padding(spacing::LG))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

/// Localized text for `err`.
#[must_use]
pub fn error_text(i18n: &I18n, err: &LocateError) -> String {
    match err {
        LocateError::Unexpected(details) => {
            i18n.tr_with_args(err.i18n_key(), &[("details", details.as_str())])
        }
        other => i18n.tr(other.i18n_key()),
    }
}

fn colored<'a>(content: String, color: iced::Color) -> Text<'a> {
    Text::new(content)
        .size(typography::BODY)
        .style(move |_theme: &Theme| text::Style { color: Some(color) })
}
