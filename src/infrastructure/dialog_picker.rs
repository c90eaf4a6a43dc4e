// SPDX-License-Identifier: MPL-2.0
//! Image picker backed by the native file dialog.

use super::extensions::IMAGE_EXTENSIONS;
use super::{blocking, exif_reader};
use crate::application::port::{
    BoxFuture, ContentType, ImagePicker, PickOptions, PickResult, PickedAsset, PortError,
    PortResult,
};
use std::path::PathBuf;

/// Opens an `rfd` file dialog, starting in the library directory when it exists.
///
/// The dialog has no crop step, so `allow_editing` is ignored, and the original
/// file is always returned, which satisfies any requested quality.
#[derive(Debug, Clone)]
pub struct DialogPicker {
    start_dir: Option<PathBuf>,
    title: String,
}

impl DialogPicker {
    #[must_use]
    pub fn new(start_dir: Option<PathBuf>, title: impl Into<String>) -> Self {
        Self {
            start_dir,
            title: title.into(),
        }
    }

    async fn pick(&self, options: PickOptions) -> PortResult<PickResult> {
        if options.allow_editing {
            log::warn!("The file dialog has no editing step; allow_editing is ignored");
        }

        let mut dialog = rfd::AsyncFileDialog::new().set_title(self.title.as_str());
        dialog = match options.content_type {
            ContentType::Images => dialog.add_filter("Images", IMAGE_EXTENSIONS),
        };
        if let Some(dir) = &self.start_dir {
            if dir.exists() {
                dialog = dialog.set_directory(dir);
            }
        }

        let Some(handle) = dialog.pick_file().await else {
            return Ok(PickResult::canceled());
        };
        let path = handle.path().to_path_buf();
        let uri = path.to_string_lossy().into_owned();

        let exif = if options.include_metadata {
            blocking(move || exif_reader::read_exif_map(&path).map_err(PortError::from)).await?
        } else {
            None
        };

        Ok(PickResult::picked(PickedAsset { uri, exif }))
    }
}

impl ImagePicker for DialogPicker {
    fn launch_selection(&self, options: PickOptions) -> BoxFuture<'_, PortResult<PickResult>> {
        Box::pin(self.pick(options))
    }
}
