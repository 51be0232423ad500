
use indexmap::IndexSet;

use std::fmt::{ Debug, Display };
use std::hash::Hash;
use std::marker::PhantomData;

use crate::geo::{ self, HexSettings, Rotation };
use super::*;

/// Coordinates on a grid. A grid coordinate system must support
/// conversion to and from cube coordinates.
pub trait Coords:
    From<Cube> + Into<Cube> + Eq + Copy + Debug + Display + Hash {
}

/// Iterate over the neighbouring (adjacent) coordinates, in the
/// order of the direction indices.
pub fn neighbours<C: Coords>(c: C) -> impl Iterator<Item=C> + Clone {
    c.into().neighbours().map(C::from)
}

/// The adjacent coordinates in the given direction.
pub fn neighbour<C: Coords, D: DirIndex>(c: C, d: D) -> C {
    C::from(c.into().neighbour(d))
}

/// The distance between two coordinates.
pub fn distance<C: Coords>(from: C, to: C) -> u32 {
    from.into().distance(to.into())
}

/// The distance between two offset coordinates on a grid with
/// the given settings.
pub fn offset_distance(settings: &HexSettings, from: Offset, to: Offset) -> u32 {
    distance(from.to_axial(settings), to.to_axial(settings))
}

/// The shortest path to another coordinate, i.e. along
/// a straight line, always including the start coordinate.
pub fn beeline<C: Coords>(from: C, to: C) -> impl ExactSizeIterator<Item=C> {
    LineIterator {
        distance: distance(from, to),
        start: from,
        end: to,
        current: 0
    }
}

pub struct LineIterator<C> {
    distance: u32,
    current: u32,
    start: C,
    end: C,
}

impl<C: Coords> Iterator for LineIterator<C> {
    type Item = C;

    fn next(&mut self) -> Option<C> {
        if self.current > self.distance {
            return None
        }
        let next = if self.distance == 0 {
            self.start
        } else {
            let frac = geo::Frac1::new(self.current as f32, self.distance as f32);
            C::from(self.start.into().lerp(self.end.into(), frac))
        };
        self.current += 1;
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.distance + 1 - self.current) as usize;
        (remaining, Some(remaining))
    }
}

impl<C: Coords> ExactSizeIterator for LineIterator<C> {}

/// The number of coordinates that are within the given range.
pub fn num_in_range(r: u32) -> usize {
    num_in_ring(r) * (r as usize + 1) / 2 + 1
}

/// The number of coordinates that are in the ring of
/// a given radius.
pub fn num_in_ring(r: u32) -> usize {
    6 * (r as usize)
}

/// The coordinates that are within the given range and reachable,
/// in the order of discovery. A coordinate is reachable if it
/// satisfies the predicate and is adjacent to a reachable coordinate
/// that is closer to `c` in steps, starting with `c` itself.
pub fn range_reachable<C: Coords, F>(c: C, r: u32, f: F) -> IndexSet<C>
where F: Fn(C) -> bool {
    let mut reachable = IndexSet::new();
    let mut fringe = Vec::new();
    reachable.insert(c);
    fringe.push(c);
    for _ in 0 .. r {
        let mut fringe_i = Vec::new();
        for c in fringe {
            for cn in neighbours(c) {
                if !reachable.contains(&cn) && f(cn) {
                    reachable.insert(cn);
                    fringe_i.push(cn);
                }
            }
        }
        if fringe_i.is_empty() {
            break
        }
        fringe = fringe_i;
    }
    reachable
}

/// Iterate over the coordinates in the ring at a given distance
/// from `c`. The walk begins at the corner of the ring in the given
/// direction from `c` and proceeds as per the given `Rotation`,
/// yielding every coordinate after stepping onto it, so that the
/// corner comes last. A ring of radius 0 is empty.
pub fn walk_ring<C: Coords, D>(c: C, dir: D, rad: u32, rot: Rotation) -> RingIterator<C>
where D: DirIndex {
    let mut dirs = [CubeVec::new_xy(0, 0); 6];
    for (slot, v) in dirs.iter_mut().zip(CubeVec::walk_directions(dir, rot)) {
        *slot = v;
    }
    RingIterator {
        radius: rad,
        pos: c.into() + dir.vector() * rad as i32,
        dirs,
        side: 0,
        steps: 0,
        coords: PhantomData,
    }
}

pub struct RingIterator<C> {
    pos: Cube,
    dirs: [CubeVec; 6],
    side: usize,
    radius: u32,
    steps: u32,
    coords: PhantomData<C>,
}

impl<C: Coords> Iterator for RingIterator<C> {
    type Item = C;

    fn next(&mut self) -> Option<C> {
        if self.radius == 0 || self.side >= self.dirs.len() {
            return None
        }
        self.pos = self.pos + self.dirs[self.side];
        self.steps += 1;
        if self.steps == self.radius {
            self.side += 1;
            self.steps = 0;
        }
        Some(C::from(self.pos))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.radius == 0 {
            0
        } else {
            (self.dirs.len() - self.side) * self.radius as usize - self.steps as usize
        };
        (remaining, Some(remaining))
    }
}

impl<C: Coords> ExactSizeIterator for RingIterator<C> {}

/// Iterate over the coordinates within the given range, beginning
/// with `c` and followed by the rings of increasing radius, each
/// walked as per [`walk_ring`].
pub fn walk_range<C: Coords, D>(c: C, dir: D, rad: u32, rot: Rotation) -> impl Iterator<Item=C>
where D: DirIndex {
    let rings = (1 ..= rad).flat_map(move |i| walk_ring(c, dir, i, rot));
    std::iter::once(c).chain(rings)
}
