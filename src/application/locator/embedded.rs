// SPDX-License-Identifier: MPL-2.0
//! Strategy that reads coordinates from the picker's EXIF payload.

use super::{acquire_selection, finish, AssetLocator, LocateError, LocateOutcome, LocatorKind, Stage};
use crate::application::port::{BoxFuture, ImagePicker, PermissionGate, PickOptions};
use crate::domain::ExifMap;
use std::sync::Arc;

/// Locates the picked image through its embedded GPS tags.
pub struct ExifLocator {
    gate: Arc<dyn PermissionGate>,
    picker: Arc<dyn ImagePicker>,
    options: PickOptions,
}

impl ExifLocator {
    #[must_use]
    pub fn new(
        gate: Arc<dyn PermissionGate>,
        picker: Arc<dyn ImagePicker>,
        options: PickOptions,
    ) -> Self {
        Self {
            gate,
            picker,
            options: PickOptions {
                include_metadata: true,
                ..options
            },
        }
    }

    async fn run(&self) -> LocateOutcome {
        let image =
            match acquire_selection(self.gate.as_ref(), self.picker.as_ref(), self.options).await
            {
                Ok(image) => image,
                Err(err) => return LocateOutcome::aborted(err),
            };

        Stage::ResolvingLocation.enter();
        let result = image
            .exif
            .as_ref()
            .and_then(ExifMap::location)
            .ok_or(LocateError::NoLocationData);

        finish(LocateOutcome {
            image: Some(image),
            result,
            asset: None,
        })
    }
}

impl AssetLocator for ExifLocator {
    fn pick_and_locate(&self) -> BoxFuture<'_, LocateOutcome> {
        Box::pin(self.run())
    }

    fn kind(&self) -> LocatorKind {
        LocatorKind::Exif
    }
}
