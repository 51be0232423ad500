//! Directions in the cube coordinate system.
//!
//! Both orientations share the same six unit displacements, indexed
//! clockwise. Only the compass names differ: what is `East` for a
//! pointy-top hexagon is `SouthEast` for a flat-top hexagon.

use super::vec::CubeVec;
use crate::geo::Rotation;

/// A direction towards one of the six adjacent hexagons, identified
/// by its index into the clockwise sequence of displacements.
pub trait DirIndex: Copy {
    fn index(self) -> usize;

    fn vector(self) -> CubeVec {
        CubeVec::nth(self.index())
    }
}

impl DirIndex for usize {
    fn index(self) -> usize {
        self % 6
    }
}

/// Directions for hexagons with flat-top orientation in
/// the cube coordinate system.
pub mod flat {
    use super::*;
    use num_derive::FromPrimitive;
    use num_traits::cast::FromPrimitive;

    /// Directions for adjacent neighbours.
    #[derive(PartialEq, Eq, Hash, Copy, Clone, PartialOrd, Ord)]
    #[derive(FromPrimitive, Debug)]
    pub enum Direction {
        NorthEast = 0,
        SouthEast = 1,
        South     = 2,
        SouthWest = 3,
        NorthWest = 4,
        North     = 5
    }

    impl DirIndex for Direction {
        fn index(self) -> usize {
            self as usize
        }
    }

    impl Direction {
        /// All directions in clockwise order, beginning with `NorthEast`.
        pub fn all() -> impl Iterator<Item=Direction> {
            (0 .. 6).filter_map(Direction::from_usize)
        }

        pub fn rotate(self, r: Rotation, n: usize) -> Direction {
            let i = match r {
                Rotation::CW  => self.index() + n % 6,
                Rotation::CCW => self.index() + 6 - n % 6,
            };
            Direction::from_usize(i % 6).unwrap_or(self)
        }

        pub fn opposite(self) -> Direction {
            self.rotate(Rotation::CW, 3)
        }
    }

}

/// Directions for hexagons with pointy-top orientation in
/// the cube coordinate system.
pub mod pointy {
    use super::*;
    use num_derive::FromPrimitive;
    use num_traits::cast::FromPrimitive;

    /// Directions for adjacent neighbours.
    #[derive(PartialEq, Eq, Hash, Copy, Clone, PartialOrd, Ord)]
    #[derive(Debug, FromPrimitive)]
    pub enum Direction {
        NorthEast = 0,
        East      = 1,
        SouthEast = 2,
        SouthWest = 3,
        West      = 4,
        NorthWest = 5
    }

    impl DirIndex for Direction {
        fn index(self) -> usize {
            self as usize
        }
    }

    impl Direction {
        /// All directions in clockwise order, beginning with `NorthEast`.
        pub fn all() -> impl Iterator<Item=Direction> {
            (0 .. 6).filter_map(Direction::from_usize)
        }

        pub fn rotate(self, r: Rotation, n: usize) -> Direction {
            let i = match r {
                Rotation::CW  => self.index() + n % 6,
                Rotation::CCW => self.index() + 6 - n % 6,
            };
            Direction::from_usize(i % 6).unwrap_or(self)
        }

        pub fn opposite(self) -> Direction {
            self.rotate(Rotation::CW, 3)
        }
    }

}
