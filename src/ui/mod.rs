// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! The application has one screen, following the Elm-style "state down,
//! messages up" pattern: [`locate_screen`] renders the
//! [`Retriever`](crate::application::retriever::Retriever) state and emits
//! [`Message`](crate::app::Message)s.
//!
//! - [`locate_screen`] - Pick button, thumbnail, location and error lines
//! - [`metadata_dump`] - JSON rendering of asset metadata for the diagnostic panel
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod locate_screen;
pub mod metadata_dump;
