
use crate::grid::{ Axial, Obstacles };
use crate::search::{ self, Tree, Uniform };

use super::{ Traverser, start_at };

/// A shortest path from a start to a target, avoiding obstacles.
///
/// The path includes both ends and is empty if the target cannot be
/// reached or the search gives up, which it does once more than
/// `max_queue_size` hexagons await expansion.
#[derive(Clone, Copy)]
pub struct PathFind<'a> {
    start: Option<Axial>,
    target: Axial,
    obstacles: Option<&'a dyn Obstacles>,
    max_queue_size: usize,
    step_cost: u32,
}

pub fn path_find<'a>(start: Axial, target: Axial) -> PathFind<'a> {
    PathFind::to(target).from(start)
}

impl<'a> PathFind<'a> {
    pub const DEFAULT_MAX_QUEUE_SIZE: usize = 1000;

    /// A path from the cursor.
    pub fn to(target: Axial) -> PathFind<'a> {
        PathFind {
            start: None,
            target,
            obstacles: None,
            max_queue_size: Self::DEFAULT_MAX_QUEUE_SIZE,
            step_cost: 1,
        }
    }

    pub fn from(self, start: Axial) -> PathFind<'a> {
        PathFind { start: Some(start), ..self }
    }

    pub fn avoiding(self, obstacles: &'a dyn Obstacles) -> PathFind<'a> {
        PathFind { obstacles: Some(obstacles), ..self }
    }

    pub fn max_queue_size(self, max_queue_size: usize) -> PathFind<'a> {
        PathFind { max_queue_size, ..self }
    }

    pub fn step_cost(self, step_cost: u32) -> PathFind<'a> {
        PathFind { step_cost, ..self }
    }

    fn context(&self) -> Uniform<'a> {
        let ctx = Uniform::new()
            .with_step_cost(self.step_cost)
            .with_max_frontier(self.max_queue_size);
        match self.obstacles {
            Some(o) => ctx.avoiding(o),
            None => ctx
        }
    }

    /// The search tree, telling an unreachable target apart from
    /// an aborted search.
    pub fn tree(&self, cursor: Option<Axial>) -> Tree<Axial> {
        let start = start_at(self.start, cursor);
        search::astar::tree(start, Some(self.target), &mut self.context())
    }
}

impl<'a> Traverser for PathFind<'a> {
    fn coordinates(&self, cursor: Option<Axial>) -> Vec<Axial> {
        let start = start_at(self.start, cursor);
        search::astar::path(start, self.target, &mut self.context())
            .map(|p| p.into_iter().map(|n| n.coords).collect())
            .unwrap_or_default()
    }
}
