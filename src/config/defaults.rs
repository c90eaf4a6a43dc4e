// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Picker**: Options passed to the image picker
//! - **Display**: Thumbnail size and diagnostic output

// ==========================================================================
// Picker Defaults
// ==========================================================================

/// Default picker quality (1.0 = original file, no re-encoding).
pub const DEFAULT_PICKER_QUALITY: f32 = 1.0;

/// Minimum picker quality.
pub const MIN_PICKER_QUALITY: f32 = 0.0;

/// Maximum picker quality.
pub const MAX_PICKER_QUALITY: f32 = 1.0;

/// Whether the picker offers an editing step by default.
pub const DEFAULT_ALLOW_EDITING: bool = false;

/// Whether the picker returns EXIF metadata by default.
pub const DEFAULT_INCLUDE_METADATA: bool = true;

// ==========================================================================
// Permission Defaults
// ==========================================================================

/// Whether the user is asked before the media library is opened.
pub const DEFAULT_ASK_PERMISSION: bool = true;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Edge length of the square thumbnail, in logical pixels.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 200;

/// Smallest accepted thumbnail edge.
pub const MIN_THUMBNAIL_SIZE: u32 = 32;

/// Largest accepted thumbnail edge.
pub const MAX_THUMBNAIL_SIZE: u32 = 1024;

/// Whether the raw metadata panel is shown.
pub const DEFAULT_SHOW_METADATA_DUMP: bool = false;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_bounds_contain_default() {
        assert!((MIN_PICKER_QUALITY..=MAX_PICKER_QUALITY).contains(&DEFAULT_PICKER_QUALITY));
    }

    #[test]
    fn thumbnail_bounds_contain_default() {
        assert!((MIN_THUMBNAIL_SIZE..=MAX_THUMBNAIL_SIZE).contains(&DEFAULT_THUMBNAIL_SIZE));
        assert_eq!(DEFAULT_THUMBNAIL_SIZE, 200);
    }
}
