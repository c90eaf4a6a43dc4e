// SPDX-License-Identifier: MPL-2.0
//! Application root state and wiring.
//!
//! The `App` struct owns the screen state ([`Retriever`]) and the location
//! strategy chosen at startup, and translates messages into runs of that
//! strategy. Collaborators are built once in `App::new` from the config and
//! the resolved library directory.

mod message;
pub mod paths;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::locator::{self, AssetLocator, Collaborators};
use crate::application::retriever::Retriever;
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{DialogPicker, DirectoryIndex, LibraryAccessGate, PromptText};
use iced::{window, Element, Task};
use std::cell::RefCell;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    locator: Arc<dyn AssetLocator>,
    retriever: Retriever,
    /// Translated startup notice, shown above the thumbnail.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locator", &self.locator.kind())
            .field("retriever", &self.retriever)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires a `Fn` boot; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .run()
}

impl App {
    /// Loads preferences and builds the collaborators and location strategy.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.library_dir, flags.config_dir);

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        let notice = config_warning.map(|key| i18n.tr(&key));

        let library = paths::get_library_dir_with_override(None, config.library.directory.clone())
            .unwrap_or_else(|| PathBuf::from("."));
        log::info!("Media library: {}", library.display());

        let locator = locator::build(
            config.locator_kind(flags.locator),
            collaborators(&config, &i18n, library),
            config.pick_options(),
        );

        let app = App {
            i18n,
            config,
            locator,
            retriever: Retriever::new(),
            notice,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

/// Desktop adapters over the library directory.
fn collaborators(config: &Config, i18n: &I18n, library: PathBuf) -> Collaborators {
    let prompt = config.ask_permission().then(|| PromptText {
        title: i18n.tr("permission-prompt-title"),
        description: i18n.tr("permission-prompt-description"),
    });

    Collaborators {
        gate: Arc::new(LibraryAccessGate::new(library.clone(), prompt)),
        picker: Arc::new(DialogPicker::new(
            Some(library.clone()),
            i18n.tr("picker-title"),
        )),
        index: Arc::new(DirectoryIndex::new(library)),
    }
}
