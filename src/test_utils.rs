// SPDX-License-Identifier: MPL-2.0
//! Test utilities: float assertions and in-memory collaborators.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Default epsilon for f64 comparisons.
pub const F64_EPSILON: f64 = 1e-10;

/// Scripted collaborators that record how they were called.
pub mod fakes {
    use crate::application::port::{
        AssetQuery, BoxFuture, ImagePicker, MediaIndex, PermissionGate, PickOptions, PickResult,
        PickedAsset, PortResult,
    };
    use crate::domain::{AssetHandle, AssetInfo, AssetRef, ExifMap, Location, MediaType};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    pub struct FakeGate {
        response: PortResult<bool>,
        calls: AtomicUsize,
    }

    impl FakeGate {
        pub fn granting() -> Self {
            Self::with(Ok(true))
        }

        pub fn denying() -> Self {
            Self::with(Ok(false))
        }

        pub fn failing(err: crate::application::port::PortError) -> Self {
            Self::with(Err(err))
        }

        fn with(response: PortResult<bool>) -> Self {
            Self {
                response,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl PermissionGate for FakeGate {
        fn request_access(&self) -> BoxFuture<'_, PortResult<bool>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Box::pin(std::future::ready(self.response.clone()))
        }
    }

    pub struct FakePicker {
        response: PortResult<PickResult>,
        calls: AtomicUsize,
        last_options: Mutex<Option<PickOptions>>,
    }

    impl FakePicker {
        pub fn returning(response: PortResult<PickResult>) -> Self {
            Self {
                response,
                calls: AtomicUsize::new(0),
                last_options: Mutex::new(None),
            }
        }

        pub fn canceling() -> Self {
            Self::returning(Ok(PickResult::canceled()))
        }

        pub fn picking(uri: &str, exif: Option<ExifMap>) -> Self {
            Self::returning(Ok(PickResult::picked(PickedAsset {
                uri: uri.to_string(),
                exif,
            })))
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn last_options(&self) -> Option<PickOptions> {
            *self.last_options.lock().unwrap()
        }
    }

    impl ImagePicker for FakePicker {
        fn launch_selection(&self, options: PickOptions) -> BoxFuture<'_, PortResult<PickResult>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_options.lock().unwrap() = Some(options);
            Box::pin(std::future::ready(self.response.clone()))
        }
    }

    pub struct FakeIndex {
        assets: Vec<AssetRef>,
        metadata: PortResult<AssetInfo>,
        registered: Mutex<Vec<String>>,
        last_query: Mutex<Option<AssetQuery>>,
    }

    impl FakeIndex {
        pub fn new(assets: Vec<AssetRef>, metadata: PortResult<AssetInfo>) -> Self {
            Self {
                assets,
                metadata,
                registered: Mutex::new(Vec::new()),
                last_query: Mutex::new(None),
            }
        }

        pub fn registered(&self) -> Vec<String> {
            self.registered.lock().unwrap().clone()
        }

        pub fn last_query(&self) -> Option<AssetQuery> {
            *self.last_query.lock().unwrap()
        }
    }

    impl MediaIndex for FakeIndex {
        fn list_assets(&self, query: AssetQuery) -> BoxFuture<'_, PortResult<Vec<AssetRef>>> {
            *self.last_query.lock().unwrap() = Some(query);
            let assets = self.assets.iter().take(query.limit).cloned().collect();
            Box::pin(std::future::ready(Ok(assets)))
        }

        fn register_asset(&self, uri: String) -> BoxFuture<'_, PortResult<AssetHandle>> {
            let id = uri.rsplit('/').next().unwrap_or(&uri).to_string();
            self.registered.lock().unwrap().push(uri);
            Box::pin(std::future::ready(Ok(AssetHandle { id })))
        }

        fn get_asset_metadata(&self, _handle: AssetHandle) -> BoxFuture<'_, PortResult<AssetInfo>> {
            Box::pin(std::future::ready(self.metadata.clone()))
        }
    }

    pub fn asset_info(id: &str, location: Option<Location>) -> AssetInfo {
        AssetInfo {
            id: id.to_string(),
            uri: format!("/library/{id}"),
            filename: id.to_string(),
            media_type: MediaType::Photo,
            width: Some(4032),
            height: Some(3024),
            creation_time: None,
            modification_time: None,
            location,
            exif: ExifMap::new(),
        }
    }
}
