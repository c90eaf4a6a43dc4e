// SPDX-License-Identifier: MPL-2.0
//! EXIF extraction into an [`ExifMap`].
//!
//! Fields of the primary image are copied under their tag names. GPS
//! latitude/longitude rationals (degrees, minutes, seconds) are converted to
//! decimal degrees; the hemisphere references are kept as plain letters so
//! [`ExifMap::location`] can sign them.

use crate::domain::{ExifMap, ExifValue};
use crate::error::{Error, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Reads the EXIF payload of an image file.
///
/// Returns `Ok(None)` when the file has no readable EXIF data; only failing to
/// open the file is an error.
pub fn read_exif_map<P: AsRef<Path>>(path: P) -> Result<Option<ExifMap>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::Io(e.to_string()))?;
    let mut reader = BufReader::new(file);

    match exif::Reader::new().read_from_container(&mut reader) {
        Ok(exif) => Ok(Some(exif_to_map(&exif))),
        Err(err) => {
            log::debug!("No EXIF in {}: {err}", path.display());
            Ok(None)
        }
    }
}

/// Converts parsed EXIF data into an [`ExifMap`].
pub fn exif_to_map(exif: &exif::Exif) -> ExifMap {
    let mut map = ExifMap::new();

    for field in exif.fields().filter(|f| f.ifd_num == exif::In::PRIMARY) {
        let value = match field.tag {
            exif::Tag::GPSLatitude | exif::Tag::GPSLongitude => {
                match parse_gps_coordinate(&field.value) {
                    Some(degrees) => ExifValue::Float(degrees),
                    None => continue,
                }
            }
            _ => convert_value(field),
        };
        map.insert(field.tag.to_string(), value);
    }

    map
}

fn convert_value(field: &exif::Field) -> ExifValue {
    match &field.value {
        exif::Value::Short(values) if values.len() == 1 => ExifValue::Integer(i64::from(values[0])),
        exif::Value::Long(values) if values.len() == 1 => ExifValue::Integer(i64::from(values[0])),
        _ => ExifValue::Text(
            field
                .display_value()
                .to_string()
                .trim_matches('"')
                .to_string(),
        ),
    }
}

/// Parse GPS coordinate from EXIF rational values (degrees, minutes, seconds).
///
/// A part with a zero denominator makes the whole coordinate unreadable.
fn parse_gps_coordinate(value: &exif::Value) -> Option<f64> {
    let parts: Vec<f64> = match value {
        exif::Value::Rational(rationals) if rationals.len() >= 3 => rationals[..3]
            .iter()
            .map(|r| (r.denom != 0).then(|| r.to_f64()))
            .collect::<Option<_>>()?,
        exif::Value::SRational(rationals) if rationals.len() >= 3 => rationals[..3]
            .iter()
            .map(|r| (r.denom != 0).then(|| r.to_f64()))
            .collect::<Option<_>>()?,
        _ => return None,
    };
    Some(parts[0] + parts[1] / 60.0 + parts[2] / 3600.0)
}
