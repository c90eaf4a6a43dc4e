// SPDX-License-Identifier: MPL-2.0
//! Interactive image selection port.

use super::{BoxFuture, PortResult};
use crate::config::defaults::{DEFAULT_PICKER_QUALITY, MAX_PICKER_QUALITY, MIN_PICKER_QUALITY};
use crate::domain::ExifMap;

/// Kind of content the picker may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    #[default]
    Images,
}

/// Options passed to [`ImagePicker::launch_selection`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickOptions {
    pub content_type: ContentType,
    /// Offer a crop/edit step after selection.
    pub allow_editing: bool,
    /// Requested quality in `0.0..=1.0`.
    pub quality: f32,
    /// Ask the picker to return the EXIF payload with the selection.
    pub include_metadata: bool,
}

impl PickOptions {
    /// Returns a copy with `quality` clamped into `0.0..=1.0`.
    #[must_use]
    pub fn normalized(self) -> Self {
        let quality = if self.quality.is_nan() {
            DEFAULT_PICKER_QUALITY
        } else {
            self.quality.clamp(MIN_PICKER_QUALITY, MAX_PICKER_QUALITY)
        };
        Self { quality, ..self }
    }
}

impl Default for PickOptions {
    fn default() -> Self {
        Self {
            content_type: ContentType::Images,
            allow_editing: false,
            quality: DEFAULT_PICKER_QUALITY,
            include_metadata: true,
        }
    }
}

/// One picked file.
#[derive(Debug, Clone, PartialEq)]
pub struct PickedAsset {
    pub uri: String,
    pub exif: Option<ExifMap>,
}

/// What the picker returned.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PickResult {
    pub canceled: bool,
    pub assets: Vec<PickedAsset>,
}

impl PickResult {
    #[must_use]
    pub fn canceled() -> Self {
        Self {
            canceled: true,
            assets: Vec::new(),
        }
    }

    #[must_use]
    pub fn picked(asset: PickedAsset) -> Self {
        Self {
            canceled: false,
            assets: vec![asset],
        }
    }

    /// Returns the first picked asset unless the selection was canceled or empty.
    #[must_use]
    pub fn into_first(self) -> Option<PickedAsset> {
        if self.canceled {
            return None;
        }
        self.assets.into_iter().next()
    }
}

/// Lets the user choose an image.
pub trait ImagePicker: Send + Sync {
    fn launch_selection(&self, options: PickOptions) -> BoxFuture<'_, PortResult<PickResult>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_clamps_quality() {
        let high = PickOptions {
            quality: 3.5,
            ..PickOptions::default()
        };
        assert_eq!(high.normalized().quality, 1.0);

        let low = PickOptions {
            quality: -1.0,
            ..PickOptions::default()
        };
        assert_eq!(low.normalized().quality, 0.0);

        let nan = PickOptions {
            quality: f32::NAN,
            ..PickOptions::default()
        };
        assert_eq!(nan.normalized().quality, 1.0);
    }

    #[test]
    fn canceled_result_has_no_first_asset() {
        assert_eq!(PickResult::canceled().into_first(), None);
        assert_eq!(PickResult::default().into_first(), None);
    }

    #[test]
    fn picked_result_returns_first_asset() {
        let asset = PickedAsset {
            uri: "/photos/a.jpg".into(),
            exif: None,
        };
        assert_eq!(PickResult::picked(asset.clone()).into_first(), Some(asset));
    }
}
