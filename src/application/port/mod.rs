// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for the collaborators of the location workflow.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, so the workflow can be driven by the
//! desktop adapters or by in-memory fakes in tests.
//!
//! # Available Ports
//!
//! - [`permission`]: media-library access gate
//! - [`picker`]: interactive image selection
//! - [`media_index`]: searchable catalog of library assets
//!
//! # Design Notes
//!
//! - All traits are `Send + Sync` so a strategy can hold them behind `Arc`
//! - Methods return [`BoxFuture`] so the traits stay object safe; callers
//!   drive the futures from an Iced `Task`

pub mod media_index;
pub mod permission;
pub mod picker;

use std::fmt;

pub use futures_util::future::BoxFuture;
pub use media_index::{AssetQuery, MediaIndex, SortBy};
pub use permission::PermissionGate;
pub use picker::{ContentType, ImagePicker, PickOptions, PickResult, PickedAsset};

/// Failure raised by a collaborator call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortError {
    /// The underlying platform service failed (dialog, filesystem, ...).
    Platform(String),
    /// The referenced asset is not known to the media index.
    AssetNotFound(String),
}

impl fmt::Display for PortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortError::Platform(msg) => write!(f, "{msg}"),
            PortError::AssetNotFound(id) => write!(f, "Asset not found: {id}"),
        }
    }
}

impl std::error::Error for PortError {}

impl From<crate::error::Error> for PortError {
    fn from(err: crate::error::Error) -> Self {
        PortError::Platform(err.to_string())
    }
}

impl From<std::io::Error> for PortError {
    fn from(err: std::io::Error) -> Self {
        PortError::Platform(format!("I/O Error: {err}"))
    }
}

pub type PortResult<T> = std::result::Result<T, PortError>;
