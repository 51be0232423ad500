//! Geometry of regular hexagons in a 2d cartesian coordinate system.

use nalgebra::geometry::Point2;

#[cfg(feature = "serde")]
use serde::{ Deserialize, Serialize };

use crate::error::HexError;
use crate::grid::Axial;

/// The angle (in radians) of the equilateral triangles that
/// a hexagon is composed of, i.e. 60 degrees in radians.
pub const ANGLE_RADIANS: f32 = 1.0471975512;

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    FlatTop,
    PointyTop
}

/// Which rows (pointy-top) or columns (flat-top) of a grid are
/// shoved by half a hexagon in offset coordinates.
///
/// Guide: [Offset Coordinates]
///
/// [Offset Coordinates]: https://www.redblobgames.com/grids/hexagons/#coordinates-offset
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Parity {
    Odd,
    Even
}

/// A rotational sense, e.g. for walking along a ring.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Rotation {
    /// Clockwise.
    CW,
    /// Counterclockwise.
    CCW
}

/// A fraction in the unit interval `[0,1]`.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Frac1(f32);

impl Frac1 {
    /// Create a new fraction in the unit interval [0,1].
    /// If the numerator is greater than the denominator or if
    /// the denominator is zero, a panic is triggered.
    pub(crate) fn new(numer: f32, denom: f32) -> Frac1 {
        if numer > denom {
            panic!("numer > denom");
        }
        if denom == 0. {
            panic!("denom == 0");
        }
        Frac1(numer / denom)
    }
}

impl From<Frac1> for f32 {
    fn from(Frac1(f): Frac1) -> f32 { f }
}

/// The radii of the ellipse a hexagon is inscribed in. For regular
/// hexagons both radii are equal to the side length.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Ellipse {
    x_radius: f32,
    y_radius: f32,
}

impl Ellipse {
    pub fn new(x_radius: f32, y_radius: f32) -> Result<Ellipse, HexError> {
        let valid = |r: f32| r.is_finite() && r > 0.;
        if valid(x_radius) && valid(y_radius) {
            Ok(Ellipse { x_radius, y_radius })
        } else {
            Err(HexError::InvalidDimensions { x_radius, y_radius })
        }
    }

    /// The dimensions of a regular hexagon with the given side length.
    pub fn circle(radius: f32) -> Result<Ellipse, HexError> {
        Self::new(radius, radius)
    }

    pub fn x_radius(&self) -> f32 { self.x_radius }
    pub fn y_radius(&self) -> f32 { self.y_radius }
}

impl Default for Ellipse {
    fn default() -> Ellipse {
        Ellipse { x_radius: 1., y_radius: 1. }
    }
}

/// The settings shared by all hexagons of a grid.
///
/// Traversals never interpret the settings themselves. They only matter
/// for the offset coordinates of a [`Hex`](crate::grid::Hex) and for
/// projecting hexagons onto the plane.
#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub struct HexSettings {
    orientation: Orientation,
    offset: Parity,
    dimensions: Ellipse,
}

impl Default for Orientation {
    fn default() -> Orientation { Orientation::PointyTop }
}

impl Default for Parity {
    fn default() -> Parity { Parity::Odd }
}

impl HexSettings {
    pub fn new(orientation: Orientation, offset: Parity, dimensions: Ellipse) -> HexSettings {
        HexSettings { orientation, offset, dimensions }
    }

    pub fn with_orientation(self, orientation: Orientation) -> HexSettings {
        HexSettings { orientation, ..self }
    }

    pub fn with_offset(self, offset: Parity) -> HexSettings {
        HexSettings { offset, ..self }
    }

    pub fn with_dimensions(self, dimensions: Ellipse) -> HexSettings {
        HexSettings { dimensions, ..self }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn offset(&self) -> Parity {
        self.offset
    }

    pub fn dimensions(&self) -> Ellipse {
        self.dimensions
    }

    pub fn width(&self) -> f32 {
        match self.orientation {
            Orientation::FlatTop   => 2. * self.dimensions.x_radius,
            Orientation::PointyTop => f32::sqrt(3.) * self.dimensions.x_radius,
        }
    }

    pub fn height(&self) -> f32 {
        match self.orientation {
            Orientation::FlatTop   => f32::sqrt(3.) * self.dimensions.y_radius,
            Orientation::PointyTop => 2. * self.dimensions.y_radius,
        }
    }

    /// The center of the hexagon with the given coordinates, such that
    /// the hexagon at the origin is centered at `(0,0)`.
    pub fn to_point(&self, a: Axial) -> Point2<f32> {
        let Ellipse { x_radius, y_radius } = self.dimensions;
        let (q, r) = (a.q as f32, a.r as f32);
        match self.orientation {
            Orientation::PointyTop => Point2::new(
                x_radius * f32::sqrt(3.) * (q + r / 2.),
                y_radius * 3. / 2. * r),
            Orientation::FlatTop => Point2::new(
                x_radius * 3. / 2. * q,
                y_radius * f32::sqrt(3.) * (r + q / 2.)),
        }
    }

    /// The corners of a hexagon centered at the given point, clockwise
    /// on a plane whose y-axis points downwards.
    pub fn corners(&self, center: Point2<f32>) -> [Point2<f32>; 6] {
        let off = match self.orientation {
            Orientation::FlatTop   => 0.,
            Orientation::PointyTop => ANGLE_RADIANS / 2.,
        };
        [ self.corner(center, 0, off)
        , self.corner(center, 1, off)
        , self.corner(center, 2, off)
        , self.corner(center, 3, off)
        , self.corner(center, 4, off)
        , self.corner(center, 5, off)
        ]
    }

    fn corner(&self, center: Point2<f32>, i: u8, off: f32) -> Point2<f32> {
        let angle_rad = ANGLE_RADIANS * i as f32 - off;
        let x = center.x + self.dimensions.x_radius * angle_rad.cos();
        let y = center.y + self.dimensions.y_radius * angle_rad.sin();
        Point2::new(x, y)
    }
}
