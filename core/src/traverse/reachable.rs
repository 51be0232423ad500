
use crate::geo::Rotation;
use crate::grid::{ Axial, Obstacles, pointy };
use crate::grid::coords;

use super::{ Traverser, start_at };

/// The hexagons reachable from a start within a number of steps,
/// without entering an obstacle.
///
/// The result begins with the start, which is never checked against
/// the obstacles. Without obstacles, the result is the spiral around
/// the start. Otherwise hexagons are given in the order of discovery
/// of a breadth-first search that visits the neighbours of each
/// hexagon in the order of the direction indices.
#[derive(Clone, Copy)]
pub struct Reachable<'a> {
    start: Option<Axial>,
    distance: u32,
    obstacles: Option<&'a dyn Obstacles>,
}

pub fn reachable<'a>(start: Axial, distance: u32) -> Reachable<'a> {
    Reachable::within(distance).from(start)
}

impl<'a> Reachable<'a> {
    /// The hexagons reachable from the cursor.
    pub fn within(distance: u32) -> Reachable<'a> {
        Reachable { start: None, distance, obstacles: None }
    }

    pub fn from(self, start: Axial) -> Reachable<'a> {
        Reachable { start: Some(start), ..self }
    }

    pub fn avoiding(self, obstacles: &'a dyn Obstacles) -> Reachable<'a> {
        Reachable { obstacles: Some(obstacles), ..self }
    }
}

impl<'a> Traverser for Reachable<'a> {
    fn coordinates(&self, cursor: Option<Axial>) -> Vec<Axial> {
        let start = start_at(self.start, cursor);
        if self.distance == 0 {
            return vec![start]
        }
        match self.obstacles {
            None => coords::walk_range(start, pointy::Direction::NorthWest,
                self.distance, Rotation::CW).collect(),
            Some(o) => coords::range_reachable(start, self.distance, |c| !o.has_hex(c))
                .into_iter()
                .collect()
        }
    }
}
