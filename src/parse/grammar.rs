use crate::error::{Error, Result};
use crate::types::{Axis, Format, Orientation};
use nom::IResult;
use nom::branch::alt;
use nom::character::complete::{char, digit1, one_of};
use nom::combinator::{all_consuming, map, map_opt, map_res, opt, recognize};
use nom::sequence::{pair, tuple};

/// A coordinate token matched against one of the supported notations
///
/// Tokens are produced from normalized input (see [`normalize`]) and still
/// carry the raw components. Use [`Token::resolve`] to turn them into a
/// validated decimal-degree value for a given axis.
///
/// [`normalize`]: crate::parse::normalize
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// `-?\d+(\.\d+)?`
    DecimalDegrees(f64),
    /// `\d+°\d+(\.\d+)?[NSEW]`
    DecimalMinutes {
        degrees: f64,
        minutes: f64,
        orientation: Orientation,
    },
    /// `\d+°\d+'\d+(\.\d+)?"[NSEW]`
    DegreesMinutesSeconds {
        degrees: f64,
        minutes: f64,
        seconds: f64,
        orientation: Orientation,
    },
}

impl Token {
    /// Match a normalized token against the three notations
    ///
    /// The whole input has to be consumed by one of the grammars, otherwise
    /// `None` is returned.
    pub fn detect(input: &str) -> Option<Self> {
        let mut parser = alt((
            all_consuming(decimal_degrees),
            all_consuming(decimal_minutes),
            all_consuming(degrees_minutes_seconds),
        ));

        parser(input).ok().map(|(_, token)| token)
    }

    /// Like [`Token::detect`], but failing with [`Error::InvalidCoordinate`]
    pub fn parse(input: &str) -> Result<Self> {
        Self::detect(input).ok_or_else(|| Error::InvalidCoordinate(input.to_string()))
    }

    /// Notation family of this token
    pub fn format(&self) -> Format {
        match self {
            Token::DecimalDegrees(_) => Format::DecimalDegrees,
            Token::DecimalMinutes { .. } => Format::DecimalMinutes,
            Token::DegreesMinutesSeconds { .. } => Format::DegreesMinutesSeconds,
        }
    }

    /// Orientation letter, if the notation carries one
    pub fn orientation(&self) -> Option<Orientation> {
        match self {
            Token::DecimalDegrees(_) => None,
            Token::DecimalMinutes { orientation, .. }
            | Token::DegreesMinutesSeconds { orientation, .. } => Some(*orientation),
        }
    }

    /// Convert into signed decimal degrees for the given axis
    ///
    /// Fails if the orientation letter does not belong to `axis`. The range of
    /// the result is not checked here.
    pub fn resolve(&self, axis: Axis) -> Result<f64> {
        if let Some(orientation) = self.orientation() {
            if !orientation.is_valid_for(axis) {
                return Err(Error::InvalidOrientation { orientation, axis });
            }
        }

        let value = match *self {
            Token::DecimalDegrees(value) => value,
            // the minutes component is added as-is, `48°0.85828N` is 48.85828
            Token::DecimalMinutes {
                degrees,
                minutes,
                orientation,
            } => (degrees + minutes) * orientation.sign(),
            Token::DegreesMinutesSeconds {
                degrees,
                minutes,
                seconds,
                orientation,
            } => (degrees + minutes / 60.0 + seconds / 3600.0) * orientation.sign(),
        };

        Ok(value)
    }
}

fn unsigned_integer(i: &str) -> IResult<&str, f64> {
    map_res(digit1, |s: &str| s.parse::<f64>())(i)
}

fn unsigned_decimal(i: &str) -> IResult<&str, f64> {
    map_res(
        recognize(pair(digit1, opt(pair(char('.'), digit1)))),
        |s: &str| s.parse::<f64>(),
    )(i)
}

fn orientation_letter(i: &str) -> IResult<&str, Orientation> {
    map_opt(one_of("NSEW"), Orientation::from_char)(i)
}

fn decimal_degrees(i: &str) -> IResult<&str, Token> {
    let signed = recognize(tuple((opt(char('-')), digit1, opt(pair(char('.'), digit1)))));
    map(map_res(signed, |s: &str| s.parse::<f64>()), Token::DecimalDegrees)(i)
}

fn decimal_minutes(i: &str) -> IResult<&str, Token> {
    let (i, (degrees, _, minutes, orientation)) =
        tuple((unsigned_integer, char('°'), unsigned_decimal, orientation_letter))(i)?;

    Ok((
        i,
        Token::DecimalMinutes {
            degrees,
            minutes,
            orientation,
        },
    ))
}

fn degrees_minutes_seconds(i: &str) -> IResult<&str, Token> {
    let (i, (degrees, _, minutes, _, seconds, _, orientation)) = tuple((
        unsigned_integer,
        char('°'),
        unsigned_integer,
        char('\''),
        unsigned_decimal,
        char('"'),
        orientation_letter,
    ))(i)?;

    Ok((
        i,
        Token::DegreesMinutesSeconds {
            degrees,
            minutes,
            seconds,
            orientation,
        },
    ))
}
