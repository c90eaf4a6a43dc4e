// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{App, Message};
use crate::ui::locate_screen::{self, ViewContext};
use iced::Element;

pub(super) fn view(app: &App) -> Element<'_, Message> {
    locate_screen::view(ViewContext {
        i18n: &app.i18n,
        retriever: &app.retriever,
        thumbnail_size: app.config.thumbnail_size(),
        show_metadata_dump: app.config.show_metadata_dump(),
        notice: app.notice.as_deref(),
    })
}
