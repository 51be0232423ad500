//! Displacements of cube coordinates.

use nalgebra::Vector3;
use either::Either;

use std::ops::{ Add, Sub, Mul, Neg };

use crate::geo::Rotation;
use super::dir::DirIndex;

/// Vectors for the displacement to a neighbouring (adjacent) cube coordinate
/// along one of the sides of a hexagon, in clockwise order, beginning with
/// the displacement that corresponds to axial `(1,-1)`.
const CUBE_DIR_VECTORS: [[i32; 3]; 6] =
    [ [ 1, 0, -1], [ 1, -1, 0], [0, -1,  1]
    , [-1, 0,  1], [-1,  1, 0], [0,  1, -1]
    ];

/// A displacement of cube coordinates.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CubeVec(pub(super) Vector3<i32>);

impl CubeVec {
    pub fn new_xz(x: i32, z: i32) -> CubeVec {
        CubeVec(Vector3::new(x, -x - z, z))
    }

    pub fn new_xy(x: i32, y: i32) -> CubeVec {
        CubeVec(Vector3::new(x, y, -x - y))
    }

    pub fn x(&self) -> i32 { self.0.x }
    pub fn y(&self) -> i32 { self.0.y }
    pub fn z(&self) -> i32 { self.0.z }

    /// The unit displacements to the neighbours of a hexagon,
    /// in the order of the direction indices.
    pub fn directions() -> impl DoubleEndedIterator<Item=CubeVec> + ExactSizeIterator + Clone {
        CUBE_DIR_VECTORS.iter().map(|v| CubeVec(Vector3::from(*v)))
    }

    pub fn direction<D: DirIndex>(d: D) -> CubeVec {
        Self::nth(d.index())
    }

    pub(crate) fn nth(i: usize) -> CubeVec {
        CubeVec(Vector3::from(CUBE_DIR_VECTORS[i % 6]))
    }

    /// The directions to walk along a ring whose walk begins at the corner
    /// in direction `d` from the center, as per the given rotation.
    pub fn walk_directions<D>(d: D, r: Rotation) -> impl Iterator<Item=CubeVec>
        where D: DirIndex
    {
        let dirs = Self::directions();
        match r {
            Rotation::CW  => Either::Left(
                dirs.cycle().skip((d.index() + 2) % 6).take(6)
            ),
            Rotation::CCW => Either::Right(
                dirs.rev().cycle().skip((7 - d.index()) % 6).take(6)
            )
        }
    }

    /// Rotate the vector `n` times by 60 degrees in the given direction.
    pub fn rotate(&self, r: Rotation, n: usize) -> CubeVec {
        match r {
            Rotation::CW  => self.rotate(Rotation::CCW, (6 - n % 6) % 6),
            Rotation::CCW => match n % 6 {
                0 => *self,
                1 => CubeVec::new_xy(-self.0.y, -self.0.z),
                2 => CubeVec::new_xy( self.0.z,  self.0.x),
                3 => CubeVec::new_xy(-self.0.x, -self.0.y),
                4 => CubeVec::new_xy( self.0.y,  self.0.z),
                _ => CubeVec::new_xy(-self.0.z, -self.0.x),
            }
        }
    }
}

impl Add<CubeVec> for CubeVec {
    type Output = CubeVec;

    fn add(self, other: CubeVec) -> Self::Output {
        CubeVec(self.0 + other.0)
    }
}

impl Sub<CubeVec> for CubeVec {
    type Output = CubeVec;

    fn sub(self, other: CubeVec) -> CubeVec {
        CubeVec(self.0 - other.0)
    }
}

impl Neg for CubeVec {
    type Output = CubeVec;

    fn neg(self) -> CubeVec {
        CubeVec(-self.0)
    }
}

impl Mul<i32> for CubeVec {
    type Output = CubeVec;

    fn mul(self, s: i32) -> CubeVec {
        CubeVec(self.0 * s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::dir::pointy::Direction;
    use quickcheck::*;
    use rand::Rng;

    impl Arbitrary for CubeVec {
        fn arbitrary<G: Gen>(g: &mut G) -> CubeVec {
            let (x, y) = (g.gen::<i16>(), g.gen::<i16>());
            CubeVec::new_xy(x as i32, y as i32)
        }
    }

    #[test]
    fn test_cube_vectors_valid() {
        for [x,y,z] in &CUBE_DIR_VECTORS {
            assert!(x + y + z == 0)
        }
    }

    #[test]
    fn test_directions_clockwise() {
        // Each direction is the previous one rotated clockwise by 60 degrees.
        let dirs = CubeVec::directions().collect::<Vec<_>>();
        for i in 0 .. 6 {
            assert_eq!(dirs[i].rotate(Rotation::CW, 1), dirs[(i + 1) % 6]);
        }
    }

    #[test]
    fn test_walk_directions() {
        let cw = CubeVec::walk_directions(Direction::NorthWest, Rotation::CW)
            .collect::<Vec<_>>();
        assert_eq!(cw, vec![
            Direction::East, Direction::SouthEast, Direction::SouthWest,
            Direction::West, Direction::NorthWest, Direction::NorthEast,
        ].into_iter().map(CubeVec::direction).collect::<Vec<_>>());

        let ccw = CubeVec::walk_directions(Direction::NorthWest, Rotation::CCW)
            .collect::<Vec<_>>();
        assert_eq!(ccw, vec![
            Direction::SouthWest, Direction::SouthEast, Direction::East,
            Direction::NorthEast, Direction::NorthWest, Direction::West,
        ].into_iter().map(CubeVec::direction).collect::<Vec<_>>());
    }

    #[test]
    fn prop_vec_rotate() {
        fn prop(v: CubeVec, n: usize) -> bool {
            v.rotate(Rotation::CW, n) == v.rotate(Rotation::CCW, 6 - n % 6)
                && v.rotate(Rotation::CW, 6) == v
        }
        quickcheck(prop as fn(_,_) -> _)
    }
}
