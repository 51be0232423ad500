//! Errors for coordinate parsing and hexagon settings.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum HexError {
    /// A string that does not denote a pair of integer coordinates.
    MalformedCoordinates {
        input: String,
    },
    /// The radii of a hexagon must be finite and positive.
    InvalidDimensions {
        x_radius: f32,
        y_radius: f32,
    },
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexError::MalformedCoordinates { input } =>
                write!(f, "malformed coordinates: {:?}", input),
            HexError::InvalidDimensions { x_radius, y_radius } =>
                write!(f, "invalid hexagon dimensions: x radius {}, y radius {}",
                    x_radius, y_radius),
        }
    }
}

impl Error for HexError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let e = HexError::MalformedCoordinates { input: "1;2".into() };
        assert_eq!(e.to_string(), "malformed coordinates: \"1;2\"");
        let e = HexError::InvalidDimensions { x_radius: 0., y_radius: 1. };
        assert_eq!(e.to_string(), "invalid hexagon dimensions: x radius 0, y radius 1");
    }
}
