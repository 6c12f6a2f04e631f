use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Coordinate axis a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Largest allowed magnitude in degrees (90 for latitude, 180 for longitude)
    pub fn limit(self) -> f64 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        }
    }

    /// Orientation used when formatting a value of the given sign
    ///
    /// Negative values map to south/west, everything else (including zero)
    /// to north/east.
    pub fn orientation_for(self, value: f64) -> Orientation {
        match (self, value < 0.0) {
            (Axis::Latitude, false) => Orientation::North,
            (Axis::Latitude, true) => Orientation::South,
            (Axis::Longitude, false) => Orientation::East,
            (Axis::Longitude, true) => Orientation::West,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

/// Hemisphere letter attached to decimal minutes and DMS coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    North,
    South,
    East,
    West,
}

impl Orientation {
    /// Parse from the `N`, `S`, `E` or `W` letter
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(Orientation::North),
            'S' => Some(Orientation::South),
            'E' => Some(Orientation::East),
            'W' => Some(Orientation::West),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Orientation::North => 'N',
            Orientation::South => 'S',
            Orientation::East => 'E',
            Orientation::West => 'W',
        }
    }

    /// `-1.0` for south and west, `1.0` otherwise
    pub fn sign(self) -> f64 {
        match self {
            Orientation::South | Orientation::West => -1.0,
            Orientation::North | Orientation::East => 1.0,
        }
    }

    /// N/S only apply to latitude, E/W only to longitude
    pub fn is_valid_for(self, axis: Axis) -> bool {
        match self {
            Orientation::North | Orientation::South => axis == Axis::Latitude,
            Orientation::East | Orientation::West => axis == Axis::Longitude,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Textual coordinate notation
///
/// Used both as the result of notation detection on input and to select the
/// output notation when formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// `-22.95242`
    #[default]
    DecimalDegrees,
    /// `22°0.95242S`
    DecimalMinutes,
    /// `22°57'8.7"S`
    DegreesMinutesSeconds,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::DecimalDegrees => "decimal_degrees",
            Format::DecimalMinutes => "decimal_minutes",
            Format::DegreesMinutesSeconds => "degrees_minutes_seconds",
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "decimal_degrees" | "dd" => Ok(Format::DecimalDegrees),
            "decimal_minutes" | "dm" => Ok(Format::DecimalMinutes),
            "degrees_minutes_seconds" | "dms" => Ok(Format::DegreesMinutesSeconds),
            _ => Err(Error::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Distance unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    #[default]
    Kilometers,
    Meters,
}

impl Unit {
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Kilometers => "kilometers",
            Unit::Meters => "meters",
        }
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kilometers" | "kilometer" | "km" => Ok(Unit::Kilometers),
            "meters" | "meter" | "m" => Ok(Unit::Meters),
            _ => Err(Error::InvalidUnit(s.to_string())),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
