//! Rings, spirals and lines.

use crate::geo::Rotation;
use crate::grid::{ Axial, DirIndex, pointy };
use crate::grid::coords;

use super::{ Traverser, start_at };

/// The corner at which ring walks begin, unless told otherwise.
const CORNER: pointy::Direction = pointy::Direction::NorthWest;

/// The hexagons at a fixed distance from a center.
///
/// The walk begins at the corner of the ring in direction `NorthWest`
/// of the center and proceeds clockwise, beginning with a step
/// towards `East`. Every hexagon is emitted after stepping onto it,
/// so the corner comes last. A ring of radius 0 is its center.
#[derive(Clone, Copy, Debug)]
pub struct Ring {
    center: Axial,
    radius: u32,
    corner: usize,
    rotation: Rotation,
}

pub fn ring(center: Axial, radius: u32) -> Ring {
    Ring { center, radius, corner: CORNER.index(), rotation: Rotation::CW }
}

impl Ring {
    pub fn rotation(self, rotation: Rotation) -> Ring {
        Ring { rotation, ..self }
    }

    /// Begin the walk at the corner in the given direction.
    pub fn starting_at<D: DirIndex>(self, corner: D) -> Ring {
        Ring { corner: corner.index(), ..self }
    }
}

impl Traverser for Ring {
    fn coordinates(&self, _cursor: Option<Axial>) -> Vec<Axial> {
        if self.radius == 0 {
            return vec![self.center]
        }
        coords::walk_ring(self.center, self.corner, self.radius, self.rotation).collect()
    }
}

/// The hexagons within a distance of a center: the center, followed
/// by the rings of increasing radius, each walked like a [`Ring`].
#[derive(Clone, Copy, Debug)]
pub struct Spiral {
    center: Option<Axial>,
    radius: u32,
    corner: usize,
    rotation: Rotation,
}

pub fn spiral(center: Axial, radius: u32) -> Spiral {
    Spiral::new(radius).around(center)
}

impl Spiral {
    /// A spiral around the cursor.
    pub fn new(radius: u32) -> Spiral {
        Spiral { center: None, radius, corner: CORNER.index(), rotation: Rotation::CW }
    }

    pub fn around(self, center: Axial) -> Spiral {
        Spiral { center: Some(center), ..self }
    }

    pub fn rotation(self, rotation: Rotation) -> Spiral {
        Spiral { rotation, ..self }
    }

    pub fn starting_at<D: DirIndex>(self, corner: D) -> Spiral {
        Spiral { corner: corner.index(), ..self }
    }
}

impl Traverser for Spiral {
    fn coordinates(&self, cursor: Option<Axial>) -> Vec<Axial> {
        let center = start_at(self.center, cursor);
        let mut coords = Vec::with_capacity(coords::num_in_range(self.radius));
        coords.extend(coords::walk_range(center, self.corner, self.radius, self.rotation));
        coords
    }
}

/// The hexagons along a straight line, including both ends.
#[derive(Clone, Copy, Debug)]
pub struct Line {
    start: Option<Axial>,
    stop: Axial,
}

pub fn line(start: Axial, stop: Axial) -> Line {
    Line::to(stop).from(start)
}

impl Line {
    /// A line from the cursor.
    pub fn to(stop: Axial) -> Line {
        Line { start: None, stop }
    }

    pub fn from(self, start: Axial) -> Line {
        Line { start: Some(start), ..self }
    }
}

impl Traverser for Line {
    fn coordinates(&self, cursor: Option<Axial>) -> Vec<Axial> {
        coords::beeline(start_at(self.start, cursor), self.stop).collect()
    }
}
