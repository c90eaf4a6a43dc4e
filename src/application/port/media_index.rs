// SPDX-License-Identifier: MPL-2.0
//! Media index port: listing, registering and describing library assets.

use super::{BoxFuture, PortResult};
use crate::domain::{AssetHandle, AssetInfo, AssetRef, MediaType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Newest first.
    #[default]
    CreationTimeDesc,
}

/// Listing query for [`MediaIndex::list_assets`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetQuery {
    pub limit: usize,
    pub media_type: MediaType,
    pub sort_by: SortBy,
}

impl AssetQuery {
    /// The single most recently created photo.
    #[must_use]
    pub fn most_recent_photo() -> Self {
        Self {
            limit: 1,
            media_type: MediaType::Photo,
            sort_by: SortBy::CreationTimeDesc,
        }
    }
}

/// Searchable catalog of stored media.
pub trait MediaIndex: Send + Sync {
    fn list_assets(&self, query: AssetQuery) -> BoxFuture<'_, PortResult<Vec<AssetRef>>>;

    /// Imports `uri` into the library if needed and returns its identifier.
    fn register_asset(&self, uri: String) -> BoxFuture<'_, PortResult<AssetHandle>>;

    fn get_asset_metadata(&self, handle: AssetHandle) -> BoxFuture<'_, PortResult<AssetInfo>>;
}
