use crate::distance;
use crate::error::{Error, Result};
use crate::format::format_coordinate;
use crate::parse;
use crate::types::{Axis, Format, Unit};
use std::fmt;
use std::str::FromStr;

/// A validated GPS coordinate pair
///
/// Latitude and longitude are stored in decimal degrees and are always within
/// `-90..=90` and `-180..=180` respectively. Every constructor and setter
/// validates its input before anything is stored, so a failed call never
/// leaves a partially updated point behind.
///
/// The default point is the origin (`0,0`).
///
/// # Example
///
/// ```
/// use gps_point::{Format, Point};
///
/// let point: Point = "22° 57′ 8.7″ S, 43° 12′ 42″ W".parse()?;
/// assert_eq!(point.get_latitude(Format::DecimalDegrees), "-22.95242");
/// assert_eq!(point.get(Format::DecimalMinutes), "22°0.95242S,43°0.21167W");
/// # Ok::<(), gps_point::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    latitude: f64,
    longitude: f64,
}

impl Point {
    /// Create a point from decimal degrees
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let latitude = parse::check_range(latitude, Axis::Latitude, &latitude.to_string())?;
        let longitude = parse::check_range(longitude, Axis::Longitude, &longitude.to_string())?;

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a point from zero, one or two coordinate arguments
    ///
    /// Without arguments the origin is returned. With one or two arguments
    /// this behaves like [`Point::set`].
    pub fn from_args(args: &[&str]) -> Result<Self> {
        let mut point = Self::default();
        if !args.is_empty() {
            point.set(args)?;
        }
        Ok(point)
    }

    /// Set both coordinates
    ///
    /// Accepts either one `"latitude,longitude"` argument or two separate
    /// arguments. Both coordinates have to use the same notation. Nothing is
    /// stored unless both of them are valid.
    pub fn set(&mut self, args: &[&str]) -> Result<&mut Self> {
        let (latitude, longitude) = parse::split_pair(args)?;
        let (lat_token, lon_token) = parse::detect_pair(&latitude, &longitude)?;

        let latitude = parse::resolve_token(lat_token, Axis::Latitude, &latitude)?;
        let longitude = parse::resolve_token(lon_token, Axis::Longitude, &longitude)?;

        self.latitude = latitude;
        self.longitude = longitude;
        Ok(self)
    }

    /// Set the latitude, leaving the longitude untouched
    pub fn set_latitude(&mut self, latitude: &str) -> Result<&mut Self> {
        self.latitude = parse_axis(latitude, Axis::Latitude)?;
        Ok(self)
    }

    /// Set the longitude, leaving the latitude untouched
    pub fn set_longitude(&mut self, longitude: &str) -> Result<&mut Self> {
        self.longitude = parse_axis(longitude, Axis::Longitude)?;
        Ok(self)
    }

    /// Copy of this point with the latitude replaced
    pub fn with_latitude(self, latitude: &str) -> Result<Self> {
        Ok(Self {
            latitude: parse_axis(latitude, Axis::Latitude)?,
            ..self
        })
    }

    /// Copy of this point with the longitude replaced
    pub fn with_longitude(self, longitude: &str) -> Result<Self> {
        Ok(Self {
            longitude: parse_axis(longitude, Axis::Longitude)?,
            ..self
        })
    }

    /// Latitude in decimal degrees
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Both coordinates in the given notation, separated by a comma
    pub fn get(&self, format: Format) -> String {
        format!(
            "{},{}",
            self.get_latitude(format),
            self.get_longitude(format)
        )
    }

    pub fn get_latitude(&self, format: Format) -> String {
        format_coordinate(self.latitude, Axis::Latitude, format)
    }

    pub fn get_longitude(&self, format: Format) -> String {
        format_coordinate(self.longitude, Axis::Longitude, format)
    }

    /// Great-circle distance to `other`, rounded to two decimals
    pub fn distance_to(&self, other: &Point, unit: Unit) -> f64 {
        distance::distance(self, other, unit)
    }
}

fn parse_axis(input: &str, axis: Axis) -> Result<f64> {
    parse::parse_coordinate(&parse::normalize(input), axis)
}

impl FromStr for Point {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_args(&[s])
    }
}

impl TryFrom<(f64, f64)> for Point {
    type Error = Error;

    fn try_from((latitude, longitude): (f64, f64)) -> Result<Self> {
        Self::new(latitude, longitude)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get(Format::DecimalDegrees))
    }
}
