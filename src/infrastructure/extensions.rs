// SPDX-License-Identifier: MPL-2.0
//! Supported file extensions.

use std::path::Path;

/// Image file extensions offered by the picker and indexed by the library.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "heic", "heif",
];

/// Checks if a file has a supported image extension (case-insensitive).
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_extensions_match_case_insensitively() {
        assert!(is_supported_image(Path::new("/a/IMG_0001.JPG")));
        assert!(is_supported_image(Path::new("photo.heic")));
    }

    #[test]
    fn other_files_are_rejected() {
        assert!(!is_supported_image(Path::new("clip.mp4")));
        assert!(!is_supported_image(Path::new("README")));
    }
}
