// SPDX-License-Identifier: MPL-2.0
//! Permission gate for the library directory.
//!
//! Desktop platforms have no media-library permission of their own, so access
//! is granted in two steps: the user confirms once per session through a
//! native yes/no dialog (optional), then the directory must be readable. The
//! gate never writes: a library that does not exist yet counts as readable
//! and is created by the first import.

use super::blocking;
use crate::application::port::{BoxFuture, PermissionGate, PortResult};
use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

/// Localized text of the confirmation dialog.
#[derive(Debug, Clone, Default)]
pub struct PromptText {
    pub title: String,
    pub description: String,
}

pub struct LibraryAccessGate {
    library: PathBuf,
    prompt: Option<PromptText>,
    confirmed: AtomicBool,
}

impl LibraryAccessGate {
    /// Creates a gate; `prompt` of `None` skips the confirmation dialog.
    #[must_use]
    pub fn new(library: impl Into<PathBuf>, prompt: Option<PromptText>) -> Self {
        Self {
            library: library.into(),
            prompt,
            confirmed: AtomicBool::new(false),
        }
    }

    async fn request(&self) -> PortResult<bool> {
        if !self.confirmed.load(Ordering::Acquire) {
            if let Some(prompt) = &self.prompt {
                let answer = AsyncMessageDialog::new()
                    .set_level(MessageLevel::Info)
                    .set_title(prompt.title.as_str())
                    .set_description(prompt.description.as_str())
                    .set_buttons(MessageButtons::YesNo)
                    .show()
                    .await;
                if answer != MessageDialogResult::Yes {
                    log::info!("User declined media library access");
                    return Ok(false);
                }
            }
            self.confirmed.store(true, Ordering::Release);
        }

        let library = self.library.clone();
        blocking(move || Ok(is_readable(&library))).await
    }
}

impl PermissionGate for LibraryAccessGate {
    fn request_access(&self) -> BoxFuture<'_, PortResult<bool>> {
        Box::pin(self.request())
    }
}

/// Checks the library can be listed, treating a missing one as empty.
fn is_readable(library: &Path) -> bool {
    if !library.exists() {
        log::debug!("Library {} does not exist yet", library.display());
        return true;
    }
    match fs::read_dir(library) {
        Ok(_) => true,
        Err(err) => {
            log::warn!("Library {} is not readable: {err}", library.display());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn readable_library_is_granted() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let gate = LibraryAccessGate::new(temp_dir.path(), None);
        assert_eq!(gate.request_access().await, Ok(true));
    }

    #[tokio::test]
    async fn missing_library_is_granted_without_creating_it() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let library = temp_dir.path().join("Pictures");
        let gate = LibraryAccessGate::new(&library, None);

        assert_eq!(gate.request_access().await, Ok(true));
        assert!(!library.exists());
    }

    #[tokio::test]
    async fn library_path_that_is_a_file_is_denied() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let file = temp_dir.path().join("not-a-dir");
        fs::write(&file, b"x").expect("write");

        let gate = LibraryAccessGate::new(&file, None);
        assert_eq!(gate.request_access().await, Ok(false));
    }
}
