//! Cube coordinates.

pub mod dir;
pub mod vec;

pub use self::dir::{ DirIndex, flat, pointy };
pub use self::vec::*;

use nalgebra::geometry::Point3;

use std::fmt;
use std::ops::{ Add, Sub };

use super::Coords;
use crate::geo::Frac1;

/// Cube coordinates, i.e. points in 3d space, satisfying `x + y + z = 0`.
///
/// Cube coordinates are points on a diagonal plane that "cuts through"
/// a cube grid (a cube made of many smaller cubes). The cubes intersecting
/// the plane project regular hexagons onto the plane, allowing to see the
/// plane as a hexagonal grid whereby the coordinates of each hexagon can be
/// identified with the coordinates of the cube it is projected from.
/// This yields a coordinate system that simplifies many algorithms and
/// thus serves as the canonical coordinate system for any grid (see [`Coords`]).
///
/// Guide: [Cube coordinates]
///
/// [Cube coordinates]: https://www.redblobgames.com/grids/hexagons/#coordinates-cube
/// [`Coords`]: ../trait.Coords.html
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Cube {
    p: Point3<i32>,
}

impl Cube {
    pub fn origin() -> Cube {
        Self::mk(0, 0, 0)
    }

    pub fn new_xz(x: i32, z: i32) -> Cube {
        Self::mk(x, -x - z, z)
    }

    pub fn new_xy(x: i32, y: i32) -> Cube {
        Self::mk(x, y, -x - y)
    }

    pub fn new_yz(y: i32, z: i32) -> Cube {
        Self::mk(-y - z, y, z)
    }

    pub fn x(&self) -> i32 { self.p.x }
    pub fn y(&self) -> i32 { self.p.y }
    pub fn z(&self) -> i32 { self.p.z }

    /// Iterate over the neighbouring (adjacent) cube coordinates,
    /// in the order of the direction indices.
    pub fn neighbours(self) -> impl Iterator<Item=Cube> + Clone {
        CubeVec::directions().map(move |v| self + v)
    }

    /// The adjacent cube coordinates in the given direction.
    pub fn neighbour<D: DirIndex>(self, d: D) -> Cube {
        self + d.vector()
    }

    /// The distance to another cube coordinate.
    pub fn distance(self, other: Cube) -> u32 {
        let v = self - other;
        ( v.x().abs() as u32 +
          v.y().abs() as u32 +
          v.z().abs() as u32 ) / 2
    }

    pub fn lerp(self, other: Cube, t: Frac1) -> Cube {
        let x = lerp(self.x(), other.x(), t);
        let y = lerp(self.y(), other.y(), t);
        let z = lerp(self.z(), other.z(), t);
        Self::round(x, y, z)
    }

    /// Round to the nearest cube coordinate.
    pub(crate) fn round(x: f32, y: f32, z: f32) -> Cube {
        let (rx, ry, rz) = (x.round(), y.round(), z.round());
        let (dx, dy, dz) = ((x - rx).abs(), (y - ry).abs(), (z - rz).abs());
        if dx > dy && dx > dz {
            Cube::mk(-(ry+rz) as i32, ry as i32, rz as i32)
        }
        else if dy > dz {
            Cube::mk(rx as i32, -(rx+rz) as i32, rz as i32)
        }
        else {
            Cube::mk(rx as i32, ry as i32, -(rx+ry) as i32)
        }
    }

    fn mk(x: i32, y: i32, z: i32) -> Cube {
        debug_assert!(x + y + z == 0);
        Cube { p: Point3::new(x, y, z) }
    }

    /// Validity check for the cube coordinates, i.e. that they
    /// represent a point in the plane defined by `x + y + z = 0`.
    #[cfg(test)]
    fn is_valid(&self) -> bool {
        self.x() + self.y() + self.z() == 0
    }
}

impl Coords for Cube {}

/// Linear interpolation.
fn lerp(ai: i32, bi: i32, fr: Frac1) -> f32 {
    let (a, b, t) = (ai as f32, bi as f32, f32::from(fr));
    a + (b - a) * t
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.p.x, self.p.y, self.p.z)
    }
}

impl Add<CubeVec> for Cube {
    type Output = Cube;

    fn add(self, v: CubeVec) -> Cube {
        Cube { p: self.p + v.0 }
    }
}

impl Sub<Cube> for Cube {
    type Output = CubeVec;

    fn sub(self, other: Cube) -> CubeVec {
        CubeVec(self.p - other.p)
    }
}

impl Sub<CubeVec> for Cube {
    type Output = Cube;

    fn sub(self, v: CubeVec) -> Cube {
        self + (-v)
    }
}
