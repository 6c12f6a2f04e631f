use crate::types::{Axis, Orientation};

/// Errors raised while parsing, validating or converting coordinates
///
/// Every variant carries the offending input so the `Display` output alone is
/// enough to tell the caller what went wrong.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Invalid number of arguments (expected 1 or 2, got {0})")]
    InvalidArgumentCount(usize),

    #[error("Argument \"{0}\" is not a comma separated coordinate pair")]
    InvalidArgumentFormat(String),

    #[error("Coordinates \"{latitude}\" and \"{longitude}\" are not in the same format")]
    FormatMismatch { latitude: String, longitude: String },

    #[error("Coordinate \"{0}\" is not set on a valid format")]
    InvalidCoordinate(String),

    #[error("Orientation \"{orientation}\" is not valid for {axis}")]
    InvalidOrientation {
        orientation: Orientation,
        axis: Axis,
    },

    #[error("Coordinate \"{value}\" exceeds {axis} limits")]
    OutOfRange { value: String, axis: Axis },

    #[error("Format \"{0}\" is not valid")]
    InvalidFormat(String),

    #[error("Unit \"{0}\" is not valid")]
    InvalidUnit(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn messages_name_the_offending_value() {
        let err = Error::OutOfRange {
            value: "-100.52".to_string(),
            axis: Axis::Latitude,
        };
        assert_snapshot!(err, @r#"Coordinate "-100.52" exceeds latitude limits"#);

        let err = Error::InvalidOrientation {
            orientation: Orientation::South,
            axis: Axis::Longitude,
        };
        assert_snapshot!(err, @r#"Orientation "S" is not valid for longitude"#);

        let err = Error::InvalidArgumentCount(3);
        assert_snapshot!(err, @"Invalid number of arguments (expected 1 or 2, got 3)");
    }
}
