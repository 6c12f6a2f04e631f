mod enums;
mod point;

pub use enums::*;
pub use point::*;
