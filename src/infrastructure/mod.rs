// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains the desktop implementations of the port traits defined
//! in `application::port`.
//!
//! # Available Adapters
//!
//! - [`library_gate`]: access gate for the library directory (implements [`PermissionGate`])
//! - [`dialog_picker`]: native file dialog via `rfd` (implements [`ImagePicker`])
//! - [`directory_index`]: library directory as a media index (implements [`MediaIndex`])
//! - [`exif_reader`]: `kamadak-exif` extraction shared by the picker and the index
//!
//! [`PermissionGate`]: crate::application::port::PermissionGate
//! [`ImagePicker`]: crate::application::port::ImagePicker
//! [`MediaIndex`]: crate::application::port::MediaIndex

pub mod dialog_picker;
pub mod directory_index;
pub mod exif_reader;
pub mod extensions;
pub mod library_gate;

pub use dialog_picker::DialogPicker;
pub use directory_index::DirectoryIndex;
pub use library_gate::{LibraryAccessGate, PromptText};

use crate::application::port::{PortError, PortResult};

/// Runs filesystem work off the async executor.
pub(crate) async fn blocking<T, F>(work: F) -> PortResult<T>
where
    F: FnOnce() -> PortResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| PortError::Platform(format!("Background task failed: {e}")))?
}
