// SPDX-License-Identifier: MPL-2.0
//! Media index backed by a library directory.
//!
//! Every supported image directly inside the directory is an asset; its id is
//! the file name. Registering a file that lives elsewhere copies it into the
//! library, which is the desktop counterpart of importing into a photo library.

use super::{blocking, exif_reader};
use super::extensions::is_supported_image;
use crate::application::port::{AssetQuery, BoxFuture, MediaIndex, PortError, PortResult};
use crate::domain::{AssetHandle, AssetInfo, AssetRef, ExifMap, MediaType};
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

#[derive(Debug, Clone)]
pub struct DirectoryIndex {
    root: PathBuf,
}

impl DirectoryIndex {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lists assets matching `query`, newest first, synchronously.
    ///
    /// A library directory that does not exist yet is empty.
    pub fn scan(&self, query: AssetQuery) -> Result<Vec<AssetRef>> {
        if !self.root.exists() {
            log::debug!("Library {} does not exist yet", self.root.display());
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.is_file() && is_supported_image(&path) {
                let created = creation_time(&path);
                entries.push((path, created));
            }
        }

        // Ties fall back to the file name so listings are stable.
        entries.sort_by(|(a_path, a_time), (b_path, b_time)| {
            b_time
                .cmp(a_time)
                .then_with(|| b_path.file_name().cmp(&a_path.file_name()))
        });

        Ok(entries
            .into_iter()
            .take(query.limit)
            .filter_map(|(path, created)| asset_ref(&path, created))
            .collect())
    }

    /// Imports `uri` into the library when it is not already there.
    pub fn register(&self, uri: &str) -> Result<AssetHandle> {
        let source = PathBuf::from(uri);
        if !source.is_file() {
            return Err(Error::Io(format!("Not a file: {uri}")));
        }

        if self.contains(&source) {
            return handle_for(&source);
        }

        let file_name = source
            .file_name()
            .ok_or_else(|| Error::Io(format!("No file name: {uri}")))?;
        fs::create_dir_all(&self.root)?;
        let target = unique_target(&self.root, Path::new(file_name));
        fs::copy(&source, &target)?;
        log::info!("Imported {} as {}", source.display(), target.display());

        handle_for(&target)
    }

    /// Reads the full metadata of the asset named by `handle`.
    pub fn describe(&self, handle: &AssetHandle) -> PortResult<AssetInfo> {
        let path = self.root.join(&handle.id);
        if handle.id.contains(['/', '\\']) || !path.is_file() {
            return Err(PortError::AssetNotFound(handle.id.clone()));
        }

        let fs_metadata = fs::metadata(&path)?;
        let exif = exif_reader::read_exif_map(&path)?.unwrap_or_else(ExifMap::new);
        let (width, height) = match image_rs::image_dimensions(&path) {
            Ok((w, h)) => (Some(w), Some(h)),
            Err(_) => (None, None),
        };

        Ok(AssetInfo {
            id: handle.id.clone(),
            uri: path.to_string_lossy().into_owned(),
            filename: handle.id.clone(),
            media_type: MediaType::Photo,
            width,
            height,
            creation_time: creation_time(&path),
            modification_time: fs_metadata.modified().ok(),
            location: exif.location(),
            exif,
        })
    }

    fn contains(&self, path: &Path) -> bool {
        match (path.canonicalize(), self.root.canonicalize()) {
            (Ok(file), Ok(root)) => file.parent() == Some(root.as_path()),
            _ => false,
        }
    }
}

impl MediaIndex for DirectoryIndex {
    fn list_assets(&self, query: AssetQuery) -> BoxFuture<'_, PortResult<Vec<AssetRef>>> {
        let index = self.clone();
        Box::pin(async move { blocking(move || index.scan(query).map_err(PortError::from)).await })
    }

    fn register_asset(&self, uri: String) -> BoxFuture<'_, PortResult<AssetHandle>> {
        let index = self.clone();
        Box::pin(async move {
            blocking(move || index.register(&uri).map_err(PortError::from)).await
        })
    }

    fn get_asset_metadata(&self, handle: AssetHandle) -> BoxFuture<'_, PortResult<AssetInfo>> {
        let index = self.clone();
        Box::pin(async move { blocking(move || index.describe(&handle)).await })
    }
}

/// Creation time, falling back to modification time where the platform lacks it.
fn creation_time(path: &Path) -> Option<SystemTime> {
    let metadata = fs::metadata(path).ok()?;
    metadata.created().or_else(|_| metadata.modified()).ok()
}

fn asset_ref(path: &Path, creation_time: Option<SystemTime>) -> Option<AssetRef> {
    let filename = path.file_name()?.to_string_lossy().into_owned();
    Some(AssetRef {
        id: filename.clone(),
        uri: path.to_string_lossy().into_owned(),
        filename,
        creation_time,
    })
}

fn handle_for(path: &Path) -> Result<AssetHandle> {
    path.file_name()
        .map(|name| AssetHandle {
            id: name.to_string_lossy().into_owned(),
        })
        .ok_or_else(|| Error::Io(format!("No file name: {}", path.display())))
}

/// Picks `dir/name`, or `dir/stem-N.ext` if that is taken.
fn unique_target(dir: &Path, name: &Path) -> PathBuf {
    let candidate = dir.join(name);
    if !candidate.exists() {
        return candidate;
    }

    let stem = name
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = name.extension().map(|e| e.to_string_lossy().into_owned());

    (1..)
        .map(|n| match &ext {
            Some(ext) => dir.join(format!("{stem}-{n}.{ext}")),
            None => dir.join(format!("{stem}-{n}")),
        })
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}
