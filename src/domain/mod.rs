// SPDX-License-Identifier: MPL-2.0
//! Domain layer - plain value types with no external dependencies.
//!
//! # Modules
//!
//! - [`location`]: [`Location`](location::Location) and its [`Coordinate`](location::Coordinate) axes
//! - [`asset`]: picked images, EXIF maps and media-library records

pub mod asset;
pub mod location;

pub use asset::{AssetHandle, AssetInfo, AssetRef, ExifMap, ExifValue, MediaType, SelectedImage};
pub use location::{Coordinate, Location, ParseLocationError};
