// SPDX-License-Identifier: MPL-2.0
//! Selection and media-library asset types.
//!
//! These are plain data containers shared by the picker, the media index and
//! the screen state. Nothing here touches the filesystem.

use super::location::{Coordinate, Location};
use std::collections::BTreeMap;
use std::time::SystemTime;

pub const GPS_LATITUDE: &str = "GPSLatitude";
pub const GPS_LATITUDE_REF: &str = "GPSLatitudeRef";
pub const GPS_LONGITUDE: &str = "GPSLongitude";
pub const GPS_LONGITUDE_REF: &str = "GPSLongitudeRef";

// =============================================================================
// ExifMap
// =============================================================================

/// A single EXIF value as exposed to the rest of the application.
#[derive(Debug, Clone, PartialEq)]
pub enum ExifValue {
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<ExifValue>),
}

impl ExifValue {
    /// Interprets the value as a coordinate in decimal degrees.
    ///
    /// Accepts plain numbers, numeric text and `[degrees, minutes, seconds]` lists.
    fn as_coordinate(&self) -> Option<Coordinate> {
        match self {
            ExifValue::Integer(value) => Some(Coordinate::Integer(*value)),
            ExifValue::Float(value) => Some(Coordinate::Float(*value)),
            ExifValue::Text(text) => text.parse().ok(),
            ExifValue::List(parts) if parts.len() >= 3 => {
                let part = |i: usize| parts[i].as_coordinate().map(|c| c.degrees());
                let (degrees, minutes, seconds) = (part(0)?, part(1)?, part(2)?);
                Some(Coordinate::Float(degrees + minutes / 60.0 + seconds / 3600.0))
            }
            ExifValue::List(_) => None,
        }
    }

    fn as_text(&self) -> Option<&str> {
        match self {
            ExifValue::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

impl From<&str> for ExifValue {
    fn from(value: &str) -> Self {
        ExifValue::Text(value.to_string())
    }
}

impl From<f64> for ExifValue {
    fn from(value: f64) -> Self {
        ExifValue::Float(value)
    }
}

impl From<i64> for ExifValue {
    fn from(value: i64) -> Self {
        ExifValue::Integer(value)
    }
}

/// EXIF tag name to value, ordered by tag name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExifMap(BTreeMap<String, ExifValue>);

impl ExifMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: impl Into<String>, value: impl Into<ExifValue>) {
        self.0.insert(tag.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&ExifValue> {
        self.0.get(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ExifValue)> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the GPS location, if both latitude and longitude tags are present
    /// and form a finite position inside WGS84 bounds.
    ///
    /// A southern or western reference flips a positive value. Values that are
    /// already negative are left alone.
    #[must_use]
    pub fn location(&self) -> Option<Location> {
        let latitude = self.signed_axis(GPS_LATITUDE, GPS_LATITUDE_REF, 'S')?;
        let longitude = self.signed_axis(GPS_LONGITUDE, GPS_LONGITUDE_REF, 'W')?;
        Some(Location::new(latitude, longitude)).filter(Location::is_valid)
    }

    fn signed_axis(&self, tag: &str, ref_tag: &str, negative_ref: char) -> Option<Coordinate> {
        let value = self.get(tag)?.as_coordinate()?;
        let flips = self
            .get(ref_tag)
            .and_then(ExifValue::as_text)
            .is_some_and(|r| r.trim().starts_with(negative_ref));

        if flips && value.degrees() > 0.0 {
            Some(value.negated())
        } else {
            Some(value)
        }
    }
}

impl<K: Into<String>, V: Into<ExifValue>> FromIterator<(K, V)> for ExifMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// =============================================================================
// Selection
// =============================================================================

/// The image the user picked most recently.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedImage {
    /// Local path of the picked file.
    pub uri: String,
    /// EXIF payload, when the picker was asked for it and the file carries any.
    pub exif: Option<ExifMap>,
}

// =============================================================================
// Media library
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaType {
    #[default]
    Photo,
}

impl MediaType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Photo => "photo",
        }
    }
}

/// One entry of a media index listing.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRef {
    pub id: String,
    pub uri: String,
    pub filename: String,
    pub creation_time: Option<SystemTime>,
}

/// Library identifier obtained by registering a uri.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetHandle {
    pub id: String,
}

/// Full metadata of an indexed asset.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetInfo {
    pub id: String,
    pub uri: String,
    pub filename: String,
    pub media_type: MediaType,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub creation_time: Option<SystemTime>,
    pub modification_time: Option<SystemTime>,
    pub location: Option<Location>,
    pub exif: ExifMap,
}
