//! Coordinate text parsing
//!
//! Raw input goes through three steps before it ends up in a [`Point`]:
//!
//! 1. [`normalize`] canonicalizes unicode prime glyphs and strips whitespace
//! 2. [`Token::detect`] matches the token against the supported notations
//! 3. [`parse_coordinate`] resolves the token for an axis and range checks it
//!
//! [`Point`]: crate::Point

mod grammar;

pub use self::grammar::Token;

use crate::error::{Error, Result};
use crate::types::Axis;

/// Canonicalize a raw coordinate token
///
/// Replaces `′` (U+2032) with `'` and `″` (U+2033) with `"`, and removes all
/// whitespace. Never fails; unsupported input is rejected later on.
///
/// ```
/// use gps_point::parse::normalize;
///
/// assert_eq!(normalize("22° 57′ 8.7″ S"), "22°57'8.7\"S");
/// ```
pub fn normalize(token: &str) -> String {
    token
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '\u{2032}' => '\'',
            '\u{2033}' => '"',
            c => c,
        })
        .collect()
}

/// Split raw arguments into normalized `(latitude, longitude)` tokens
///
/// Accepts either a single `"lat,lon"` argument or two separate arguments.
pub fn split_pair(args: &[&str]) -> Result<(String, String)> {
    match *args {
        [pair] => {
            let mut parts = pair.split(',');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(latitude), Some(longitude), None) => {
                    Ok((normalize(latitude), normalize(longitude)))
                }
                _ => Err(Error::InvalidArgumentFormat(pair.to_string())),
            }
        }
        [latitude, longitude] => Ok((normalize(latitude), normalize(longitude))),
        _ => Err(Error::InvalidArgumentCount(args.len())),
    }
}

/// Detect both tokens of a pair and make sure they share one notation
pub fn detect_pair(latitude: &str, longitude: &str) -> Result<(Token, Token)> {
    let lat_token = Token::parse(latitude)?;
    let lon_token = Token::parse(longitude)?;

    if lat_token.format() != lon_token.format() {
        return Err(Error::FormatMismatch {
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
        });
    }

    Ok((lat_token, lon_token))
}

/// Parse a normalized token into validated decimal degrees for `axis`
pub fn parse_coordinate(token: &str, axis: Axis) -> Result<f64> {
    resolve_token(Token::parse(token)?, axis, token)
}

/// Resolve an already detected token and range check the result
///
/// `raw` is the text reported in the error if the value is out of range.
pub(crate) fn resolve_token(token: Token, axis: Axis, raw: &str) -> Result<f64> {
    let value = token.resolve(axis)?;
    check_range(value, axis, raw)
}

/// Reject values whose magnitude exceeds the axis limit
pub(crate) fn check_range(value: f64, axis: Axis, raw: &str) -> Result<f64> {
    if value.is_nan() || value.abs() > axis.limit() {
        return Err(Error::OutOfRange {
            value: raw.to_string(),
            axis,
        });
    }

    Ok(value)
}
