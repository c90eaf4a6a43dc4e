// SPDX-License-Identifier: MPL-2.0
//! `geo_lens` shows where a picture was taken.
//!
//! The user picks an image; its location is read either from the EXIF payload
//! the picker returns or from the metadata a media index keeps for the newest
//! photo, and shown as `Latitude: <lat>, Longitude: <lon>`.
//!
//! # Layers
//!
//! - [`domain`] - value types (locations, EXIF maps, asset records)
//! - [`application`] - collaborator ports, location strategies, screen state
//! - [`infrastructure`] - desktop adapters (file dialog, library directory, EXIF reader)
//! - [`app`] and [`ui`] - the Iced application
//! - [`config`], [`i18n`], [`error`] - preferences, localization, errors

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
mod test_utils;
