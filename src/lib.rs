#![doc = include_str!("../README.md")]

pub use crate::distance::EARTH_RADIUS_KM;
pub use crate::error::Error;
pub use crate::types::*;

pub mod distance;
mod error;
pub mod format;
pub mod parse;
mod types;
pub mod utils;
