// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::locator::{LocateOutcome, LocatorKind};
use crate::application::retriever::Ticket;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The pick button was pressed.
    PickImage,
    /// A pick-and-locate run finished.
    Located {
        ticket: Ticket,
        outcome: LocateOutcome,
    },
}

/// Runtime flags passed in from the launcher.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP 47 format (e.g. `en-US`, `fr`).
    pub lang: Option<String>,
    /// Location strategy override.
    pub locator: Option<LocatorKind>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
    /// Optional media library directory override.
    pub library_dir: Option<String>,
}
