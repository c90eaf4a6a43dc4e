// SPDX-License-Identifier: MPL-2.0
//! Image location strategies.
//!
//! Both strategies share the same front half (permission, then picker) and
//! differ in where the coordinates come from:
//!
//! - [`ExifLocator`]: reads GPS tags from the EXIF payload returned by the picker
//! - [`LibraryLocator`]: asks the media index for the newest photo, registers
//!   it and reads the `location` field of its metadata
//! - [`LibraryLocator`] with [`LibrarySource::Picked`]: imports the picked
//!   image into the media index and reads its metadata the same way
//!
//! The strategy is picked once at startup from [`LocatorKind`] and used
//! through the [`AssetLocator`] trait object.

mod embedded;
mod library;

pub use embedded::ExifLocator;
pub use library::{LibraryLocator, LibrarySource};

use super::port::{BoxFuture, ImagePicker, MediaIndex, PermissionGate, PickOptions, PortError};
use crate::domain::{AssetInfo, Location, SelectedImage};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

// =============================================================================
// LocateError
// =============================================================================

/// Reasons a pick did not produce a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocateError {
    /// The media-library permission was refused.
    PermissionDenied,
    /// The picker was dismissed or returned nothing.
    SelectionCanceled,
    /// The media index holds no photo.
    NoAssetsFound,
    /// The image (or asset) carries no GPS data.
    NoLocationData,
    /// A collaborator call failed.
    Unexpected(String),
}

impl LocateError {
    /// Returns the i18n message key for this error.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            LocateError::PermissionDenied => "error-permission-denied",
            LocateError::SelectionCanceled => "error-no-image-selected",
            LocateError::NoAssetsFound => "error-no-assets-found",
            LocateError::NoLocationData => "error-no-location-data",
            LocateError::Unexpected(_) => "error-fetching-location",
        }
    }
}

impl fmt::Display for LocateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocateError::PermissionDenied => {
                write!(f, "Permission to access the media library is required!")
            }
            LocateError::SelectionCanceled => write!(f, "No image selected."),
            LocateError::NoAssetsFound => write!(f, "No photos found in the media library."),
            LocateError::NoLocationData => write!(f, "No location data available."),
            LocateError::Unexpected(msg) => write!(f, "Error fetching image location: {msg}"),
        }
    }
}

impl std::error::Error for LocateError {}

impl From<PortError> for LocateError {
    fn from(err: PortError) -> Self {
        LocateError::Unexpected(err.to_string())
    }
}

// =============================================================================
// LocateOutcome
// =============================================================================

/// Everything one `pick_and_locate` run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct LocateOutcome {
    /// Newly picked image, `None` when the run stopped before a selection.
    pub image: Option<SelectedImage>,
    pub result: Result<Location, LocateError>,
    /// Metadata of the asset the location was read from (library strategy only).
    pub asset: Option<AssetInfo>,
}

impl LocateOutcome {
    /// A run that ended before anything was picked.
    #[must_use]
    pub fn aborted(error: LocateError) -> Self {
        Self {
            image: None,
            result: Err(error),
            asset: None,
        }
    }
}

// =============================================================================
// Stage
// =============================================================================

/// Progress of a single run, logged at every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    PermissionRequested,
    Denied,
    Picking,
    Canceled,
    ResolvingLocation,
    LocationFound,
    LocationAbsent,
    Failed,
}

impl Stage {
    pub(crate) fn enter(self) {
        log::debug!("locate stage: {self:?}");
    }
}

// =============================================================================
// AssetLocator
// =============================================================================

/// A complete pick-and-locate strategy.
pub trait AssetLocator: Send + Sync {
    /// Runs permission, selection and location lookup once.
    ///
    /// Never fails: every error is folded into the returned outcome.
    fn pick_and_locate(&self) -> BoxFuture<'_, LocateOutcome>;

    fn kind(&self) -> LocatorKind;
}

/// Which strategy to build at startup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LocatorKind {
    /// Read GPS tags from the picker's EXIF payload.
    #[default]
    Exif,
    /// Look the location up in the media index.
    Library,
    /// Import the picked image into the media index, then look it up.
    Import,
}

impl FromStr for LocatorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exif" => Ok(LocatorKind::Exif),
            "library" => Ok(LocatorKind::Library),
            "import" => Ok(LocatorKind::Import),
            other => Err(format!("unknown locator: {other}")),
        }
    }
}

impl fmt::Display for LocatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocatorKind::Exif => write!(f, "exif"),
            LocatorKind::Library => write!(f, "library"),
            LocatorKind::Import => write!(f, "import"),
        }
    }
}

/// Collaborators a strategy is built from.
pub struct Collaborators {
    pub gate: Arc<dyn PermissionGate>,
    pub picker: Arc<dyn ImagePicker>,
    pub index: Arc<dyn MediaIndex>,
}

/// Builds the strategy selected by `kind`.
#[must_use]
pub fn build(
    kind: LocatorKind,
    collaborators: Collaborators,
    options: PickOptions,
) -> Arc<dyn AssetLocator> {
    log::info!("Using {kind} locator");
    let Collaborators {
        gate,
        picker,
        index,
    } = collaborators;
    match kind {
        LocatorKind::Exif => Arc::new(ExifLocator::new(gate, picker, options)),
        LocatorKind::Library => Arc::new(LibraryLocator::new(gate, picker, index, options)),
        LocatorKind::Import => Arc::new(
            LibraryLocator::new(gate, picker, index, options).with_source(LibrarySource::Picked),
        ),
    }
}

/// Shared front half of both strategies: permission, then picker.
///
/// Returns the picked image or the error that ended the run.
pub(crate) async fn acquire_selection(
    gate: &dyn PermissionGate,
    picker: &dyn ImagePicker,
    options: PickOptions,
) -> Result<SelectedImage, LocateError> {
    Stage::PermissionRequested.enter();
    let granted = gate.request_access().await.map_err(|err| {
        log::error!("Permission request failed: {err}");
        LocateError::from(err)
    })?;
    if !granted {
        Stage::Denied.enter();
        log::info!("Media library access denied");
        return Err(LocateError::PermissionDenied);
    }

    Stage::Picking.enter();
    let result = picker
        .launch_selection(options.normalized())
        .await
        .map_err(|err| {
            log::error!("Image selection failed: {err}");
            LocateError::from(err)
        })?;

    match result.into_first() {
        Some(asset) => Ok(SelectedImage {
            uri: asset.uri,
            exif: asset.exif,
        }),
        None => {
            Stage::Canceled.enter();
            log::info!("Image selection canceled");
            Err(LocateError::SelectionCanceled)
        }
    }
}

/// Logs the final stage of a run that got as far as a selection.
pub(crate) fn finish(outcome: LocateOutcome) -> LocateOutcome {
    match &outcome.result {
        Ok(location) => {
            Stage::LocationFound.enter();
            log::info!("Image location: {location}");
        }
        Err(LocateError::NoLocationData) => {
            Stage::LocationAbsent.enter();
            log::info!("No location data available for this image");
        }
        Err(err) => {
            Stage::Failed.enter();
            log::error!("Error fetching image location: {err}");
        }
    }
    Stage::Idle.enter();
    outcome
}
