// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.

use super::{App, Message};
use iced::Task;
use std::sync::Arc;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::PickImage => {
            let ticket = app.retriever.begin();
            log::debug!("Starting locate run #{}", ticket.value());
            let locator = Arc::clone(&app.locator);
            Task::perform(
                async move { locator.pick_and_locate().await },
                move |outcome| Message::Located { ticket, outcome },
            )
        }
        Message::Located { ticket, outcome } => {
            app.retriever.complete(ticket, outcome);
            Task::none()
        }
    }
}
