// SPDX-License-Identifier: MPL-2.0
//! Strategy that resolves coordinates through the media index.

use super::{acquire_selection, finish, AssetLocator, LocateError, LocateOutcome, LocatorKind, Stage};
use crate::application::port::{
    AssetQuery, BoxFuture, ImagePicker, MediaIndex, PermissionGate, PickOptions,
};
use crate::domain::AssetInfo;
use std::sync::Arc;

/// Which asset a [`LibraryLocator`] registers and reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LibrarySource {
    /// The newest photo already in the index.
    #[default]
    Newest,
    /// The picked image itself, imported into the index if needed.
    Picked,
}

/// Locates images through the media index.
///
/// The lookup runs after the pick: the chosen asset (see [`LibrarySource`])
/// is registered to obtain its library id, then its metadata is fetched by
/// that id and the `location` field is used.
pub struct LibraryLocator {
    gate: Arc<dyn PermissionGate>,
    picker: Arc<dyn ImagePicker>,
    index: Arc<dyn MediaIndex>,
    options: PickOptions,
    source: LibrarySource,
}

impl LibraryLocator {
    #[must_use]
    pub fn new(
        gate: Arc<dyn PermissionGate>,
        picker: Arc<dyn ImagePicker>,
        index: Arc<dyn MediaIndex>,
        options: PickOptions,
    ) -> Self {
        Self {
            gate,
            picker,
            index,
            options,
            source: LibrarySource::default(),
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: LibrarySource) -> Self {
        self.source = source;
        self
    }

    async fn run(&self) -> LocateOutcome {
        let image =
            match acquire_selection(self.gate.as_ref(), self.picker.as_ref(), self.options).await
            {
                Ok(image) => image,
                Err(err) => return LocateOutcome::aborted(err),
            };

        Stage::ResolvingLocation.enter();
        let outcome = match self.resolve_asset(&image.uri).await {
            Ok(asset) => LocateOutcome {
                image: Some(image),
                result: asset.location.ok_or(LocateError::NoLocationData),
                asset: Some(asset),
            },
            Err(err) => LocateOutcome {
                image: Some(image),
                result: Err(err),
                asset: None,
            },
        };

        finish(outcome)
    }

    async fn resolve_asset(&self, picked_uri: &str) -> Result<AssetInfo, LocateError> {
        let uri = match self.source {
            LibrarySource::Newest => self.newest_uri().await?,
            LibrarySource::Picked => picked_uri.to_string(),
        };

        let handle = self.index.register_asset(uri).await?;
        log::debug!("Registered asset {}", handle.id);

        Ok(self.index.get_asset_metadata(handle).await?)
    }

    async fn newest_uri(&self) -> Result<String, LocateError> {
        self.index
            .list_assets(AssetQuery::most_recent_photo())
            .await?
            .into_iter()
            .next()
            .map(|newest| newest.uri)
            .ok_or(LocateError::NoAssetsFound)
    }
}

impl AssetLocator for LibraryLocator {
    fn pick_and_locate(&self) -> BoxFuture<'_, LocateOutcome> {
        Box::pin(self.run())
    }

    fn kind(&self) -> LocatorKind {
        match self.source {
            LibrarySource::Newest => LocatorKind::Library,
            LibrarySource::Picked => LocatorKind::Import,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{PortError, SortBy};
    use crate::domain::{AssetRef, Location, MediaType};
    use crate::test_utils::fakes::{asset_info, FakeGate, FakeIndex, FakePicker};

    fn newest_ref() -> AssetRef {
        AssetRef {
            id: "IMG_0042.jpg".into(),
            uri: "/library/IMG_0042.jpg".into(),
            filename: "IMG_0042.jpg".into(),
            creation_time: None,
        }
    }

    fn locator(gate: FakeGate, index: FakeIndex) -> (LibraryLocator, Arc<FakeIndex>) {
        let index = Arc::new(index);
        let locator = LibraryLocator::new(
            Arc::new(gate),
            Arc::new(FakePicker::picking("/downloads/pick.jpg", None)),
            index.clone(),
            PickOptions::default(),
        );
        (locator, index)
    }

    #[tokio::test]
    async fn index_location_is_used() {
        let info = asset_info("IMG_0042.jpg", Some(Location::new(10_i64, 20_i64)));
        let (locator, index) = locator(
            FakeGate::granting(),
            FakeIndex::new(vec![newest_ref()], Ok(info.clone())),
        );

        let outcome = locator.pick_and_locate().await;

        let location = outcome.result.expect("location");
        assert_eq!(location.to_string(), "Latitude: 10, Longitude: 20");
        assert_eq!(outcome.asset, Some(info));
        assert_eq!(outcome.image.map(|i| i.uri), Some("/downloads/pick.jpg".into()));
        assert_eq!(index.registered(), vec!["/library/IMG_0042.jpg".to_string()]);
    }

    #[tokio::test]
    async fn queries_single_newest_photo() {
        let info = asset_info("IMG_0042.jpg", None);
        let (locator, index) = locator(
            FakeGate::granting(),
            FakeIndex::new(vec![newest_ref()], Ok(info)),
        );

        locator.pick_and_locate().await;

        let query = index.last_query().expect("query recorded");
        assert_eq!(query.limit, 1);
        assert_eq!(query.media_type, MediaType::Photo);
        assert_eq!(query.sort_by, SortBy::CreationTimeDesc);
    }

    #[tokio::test]
    async fn empty_index_reports_no_assets() {
        let (locator, index) = locator(
            FakeGate::granting(),
            FakeIndex::new(Vec::new(), Ok(asset_info("unused", None))),
        );

        let outcome = locator.pick_and_locate().await;

        assert_eq!(outcome.result, Err(LocateError::NoAssetsFound));
        assert!(outcome.image.is_some());
        assert!(index.registered().is_empty());
    }

    #[tokio::test]
    async fn asset_without_location_reports_no_location_data() {
        let info = asset_info("IMG_0042.jpg", None);
        let (locator, _) = locator(
            FakeGate::granting(),
            FakeIndex::new(vec![newest_ref()], Ok(info.clone())),
        );

        let outcome = locator.pick_and_locate().await;

        assert_eq!(outcome.result, Err(LocateError::NoLocationData));
        assert_eq!(outcome.asset, Some(info));
        assert!(outcome.image.is_some());
    }

    #[tokio::test]
    async fn metadata_failure_keeps_picked_image() {
        let (locator, _) = locator(
            FakeGate::granting(),
            FakeIndex::new(
                vec![newest_ref()],
                Err(PortError::AssetNotFound("IMG_0042.jpg".into())),
            ),
        );

        let outcome = locator.pick_and_locate().await;

        assert_eq!(
            outcome.result,
            Err(LocateError::Unexpected("Asset not found: IMG_0042.jpg".into()))
        );
        assert!(outcome.image.is_some());
        assert_eq!(outcome.asset, None);
    }

    #[tokio::test]
    async fn denied_permission_never_touches_index() {
        let (locator, index) = locator(
            FakeGate::denying(),
            FakeIndex::new(vec![newest_ref()], Ok(asset_info("IMG_0042.jpg", None))),
        );

        let outcome = locator.pick_and_locate().await;

        assert_eq!(outcome, LocateOutcome::aborted(LocateError::PermissionDenied));
        assert!(index.last_query().is_none());
    }

    #[tokio::test]
    async fn picked_source_registers_the_pick_without_listing() {
        let info = asset_info("pick.jpg", Some(Location::new(48.8566, 2.3522)));
        let (locator, index) = locator(
            FakeGate::granting(),
            FakeIndex::new(Vec::new(), Ok(info.clone())),
        );
        let locator = locator.with_source(LibrarySource::Picked);

        let outcome = locator.pick_and_locate().await;

        assert_eq!(outcome.result, Ok(Location::new(48.8566, 2.3522)));
        assert_eq!(outcome.asset, Some(info));
        assert_eq!(index.registered(), vec!["/downloads/pick.jpg".to_string()]);
        assert!(index.last_query().is_none());
    }

    #[tokio::test]
    async fn picked_source_without_location_reports_no_location_data() {
        let (locator, _) = locator(
            FakeGate::granting(),
            FakeIndex::new(Vec::new(), Ok(asset_info("pick.jpg", None))),
        );
        let outcome = locator
            .with_source(LibrarySource::Picked)
            .pick_and_locate()
            .await;

        assert_eq!(outcome.result, Err(LocateError::NoLocationData));
        assert!(outcome.image.is_some());
    }

    #[test]
    fn kind_follows_source() {
        let (locator, _) = locator(
            FakeGate::granting(),
            FakeIndex::new(Vec::new(), Ok(asset_info("unused", None))),
        );
        assert_eq!(locator.kind(), LocatorKind::Library);
        assert_eq!(
            locator.with_source(LibrarySource::Picked).kind(),
            LocatorKind::Import
        );
    }
}
