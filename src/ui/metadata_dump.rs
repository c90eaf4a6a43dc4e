// SPDX-License-Identifier: MPL-2.0
//! JSON rendering of asset metadata for the diagnostic panel.
//!
//! Keys follow the camelCase naming media libraries use for their asset
//! records. Timestamps are RFC 3339 in UTC.

use crate::domain::{AssetInfo, Coordinate, ExifMap, ExifValue, Location};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Map, Value};
use std::time::SystemTime;

/// Converts `asset` into a JSON object.
#[must_use]
pub fn to_json(asset: &AssetInfo) -> Value {
    json!({
        "id": asset.id,
        "uri": asset.uri,
        "filename": asset.filename,
        "mediaType": asset.media_type.as_str(),
        "width": asset.width,
        "height": asset.height,
        "creationTime": asset.creation_time.map(timestamp),
        "modificationTime": asset.modification_time.map(timestamp),
        "location": asset.location.map(location),
        "exif": exif(&asset.exif),
    })
}

/// Pretty-printed form of [`to_json`].
#[must_use]
pub fn render(asset: &AssetInfo) -> String {
    serde_json::to_string_pretty(&to_json(asset)).unwrap_or_else(|err| {
        log::warn!("Failed to render metadata of {}: {err}", asset.id);
        String::new()
    })
}

fn timestamp(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn location(location: Location) -> Value {
    json!({
        "latitude": coordinate(location.latitude()),
        "longitude": coordinate(location.longitude()),
    })
}

fn coordinate(value: Coordinate) -> Value {
    match value {
        Coordinate::Integer(v) => Value::from(v),
        Coordinate::Float(v) => Value::from(v),
    }
}

fn exif(map: &ExifMap) -> Value {
    map.iter()
        .map(|(tag, value)| (tag.clone(), exif_value(value)))
        .collect::<Map<String, Value>>()
        .into()
}

fn exif_value(value: &ExifValue) -> Value {
    match value {
        ExifValue::Integer(v) => Value::from(*v),
        ExifValue::Float(v) => Value::from(*v),
        ExifValue::Text(text) => Value::from(text.as_str()),
        ExifValue::List(items) => items.iter().map(exif_value).collect(),
    }
}
