// SPDX-License-Identifier: MPL-2.0
//! Geographic location value types.
//!
//! A [`Location`] is always derived from metadata (EXIF or a media index
//! lookup), never typed in by the user. Each axis is a [`Coordinate`] that
//! keeps the numeric form the source reported, so an index that reports
//! `10` renders as `10` while an EXIF float `37.0` renders as `37.0`.

use std::fmt;
use std::str::FromStr;

// =============================================================================
// Coordinate
// =============================================================================

/// One axis of a location, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coordinate {
    /// Whole number of degrees as reported by the source.
    Integer(i64),
    /// Fractional degrees.
    Float(f64),
}

impl Coordinate {
    /// Returns the value in decimal degrees.
    #[must_use]
    pub fn degrees(&self) -> f64 {
        match *self {
            Coordinate::Integer(value) => value as f64,
            Coordinate::Float(value) => value,
        }
    }

    /// Returns whether the value is a finite number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.degrees().is_finite()
    }

    /// Flips the sign, keeping the numeric form.
    #[must_use]
    pub fn negated(self) -> Self {
        match self {
            Coordinate::Integer(value) => Coordinate::Integer(-value),
            Coordinate::Float(value) => Coordinate::Float(-value),
        }
    }
}

impl From<f64> for Coordinate {
    fn from(value: f64) -> Self {
        Coordinate::Float(value)
    }
}

impl From<i64> for Coordinate {
    fn from(value: i64) -> Self {
        Coordinate::Integer(value)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Integer(value) => write!(f, "{value}"),
            // Whole floats keep a fractional part ("37.0"), never an exponent.
            Coordinate::Float(value) if value.is_finite() && value.fract() == 0.0 => {
                write!(f, "{value}.0")
            }
            Coordinate::Float(value) => write!(f, "{value}"),
        }
    }
}

impl FromStr for Coordinate {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(value) = s.parse::<i64>() {
            return Ok(Coordinate::Integer(value));
        }
        s.parse::<f64>()
            .map(Coordinate::Float)
            .map_err(|_| ParseLocationError::InvalidNumber(s.to_string()))
    }
}

// =============================================================================
// Location
// =============================================================================

/// Latitude/longitude pair extracted from an image or asset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    latitude: Coordinate,
    longitude: Coordinate,
}

impl Location {
    #[must_use]
    pub fn new(latitude: impl Into<Coordinate>, longitude: impl Into<Coordinate>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    #[must_use]
    pub fn latitude(&self) -> Coordinate {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> Coordinate {
        self.longitude
    }

    /// Returns `(latitude, longitude)` in decimal degrees.
    #[must_use]
    pub fn degrees(&self) -> (f64, f64) {
        (self.latitude.degrees(), self.longitude.degrees())
    }

    /// Returns whether both axes are finite and inside WGS84 bounds.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let (lat, lon) = self.degrees();
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon)
    }
}

/// Formats as `Latitude: <lat>, Longitude: <lon>`.
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{LATITUDE_LABEL}{}{SEPARATOR}{LONGITUDE_LABEL}{}",
            self.latitude, self.longitude
        )
    }
}

const LATITUDE_LABEL: &str = "Latitude: ";
const LONGITUDE_LABEL: &str = "Longitude: ";
const SEPARATOR: &str = ", ";

impl FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .trim()
            .strip_prefix(LATITUDE_LABEL)
            .ok_or(ParseLocationError::MissingLatitude)?;
        let (lat, lon) = rest
            .split_once(SEPARATOR)
            .ok_or(ParseLocationError::MissingLongitude)?;
        let lon = lon
            .strip_prefix(LONGITUDE_LABEL)
            .ok_or(ParseLocationError::MissingLongitude)?;

        Ok(Location {
            latitude: lat.parse()?,
            longitude: lon.parse()?,
        })
    }
}

/// Errors from parsing a formatted location line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseLocationError {
    MissingLatitude,
    MissingLongitude,
    InvalidNumber(String),
}

impl fmt::Display for ParseLocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseLocationError::MissingLatitude => write!(f, "missing latitude"),
            ParseLocationError::MissingLongitude => write!(f, "missing longitude"),
            ParseLocationError::InvalidNumber(raw) => write!(f, "invalid coordinate: {raw}"),
        }
    }
}

impl std::error::Error for ParseLocationError {}
