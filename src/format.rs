//! Coordinate output in the supported notations

use crate::types::{Axis, Format};
use crate::utils::decimal::{PRECISION, round, to_trimmed_string};

/// Format a decimal-degree `value` of the given `axis`
///
/// ```
/// use gps_point::format::format_coordinate;
/// use gps_point::{Axis, Format};
///
/// let value = -22.952416666666664;
/// assert_eq!(format_coordinate(value, Axis::Latitude, Format::DecimalDegrees), "-22.95242");
/// assert_eq!(format_coordinate(value, Axis::Latitude, Format::DecimalMinutes), "22°0.95242S");
/// assert_eq!(format_coordinate(value, Axis::Latitude, Format::DegreesMinutesSeconds), "22°57'8.7\"S");
/// ```
pub fn format_coordinate(value: f64, axis: Axis, format: Format) -> String {
    match format {
        Format::DecimalDegrees => to_decimal_degrees(value),
        Format::DecimalMinutes => to_decimal_minutes(value, axis),
        Format::DegreesMinutesSeconds => to_degrees_minutes_seconds(value, axis),
    }
}

fn to_decimal_degrees(value: f64) -> String {
    to_trimmed_string(value, PRECISION)
}

/// `D°MO`, where `M` is the fractional part of the degrees
fn to_decimal_minutes(value: f64, axis: Axis) -> String {
    let magnitude = value.abs();
    let mut degrees = magnitude.trunc();
    let mut fraction = round(magnitude - degrees, PRECISION);
    if fraction >= 1.0 {
        degrees += 1.0;
        fraction = 0.0;
    }

    format!(
        "{degrees}°{}{}",
        to_trimmed_string(fraction, PRECISION),
        axis.orientation_for(value)
    )
}

/// `D°M'S"O`, carrying rounded-up seconds into minutes and minutes into degrees
fn to_degrees_minutes_seconds(value: f64, axis: Axis) -> String {
    let magnitude = value.abs();
    let mut degrees = magnitude.trunc();
    let decimal_minutes = (magnitude - degrees) * 60.0;
    let mut minutes = decimal_minutes.trunc();
    let mut seconds = round((decimal_minutes - minutes) * 60.0, PRECISION);

    if seconds >= 60.0 {
        minutes += 1.0;
        seconds = 0.0;
    }
    if minutes >= 60.0 {
        degrees += 1.0;
        minutes = 0.0;
    }

    format!(
        "{degrees}°{minutes}'{}\"{}",
        to_trimmed_string(seconds, PRECISION),
        axis.orientation_for(value)
    )
}
