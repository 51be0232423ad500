
pub mod astar;

use crate::grid::{ Axial, Coords, Obstacles };
use crate::grid::coords;

use std::collections::HashMap;
use std::collections::VecDeque;

/// The context of a search defines the cost and bounds of the search space.
pub trait Context<C: Coords> {
    /// Paths whose accumulated cost exceeds the maximum are not explored.
    fn max_cost(&self) -> u32 {
        u32::MAX
    }

    /// The search is aborted once the frontier grows beyond this size.
    fn max_frontier(&self) -> usize {
        usize::MAX
    }

    /// An estimate of the cost from one coordinate to another, which
    /// must never overestimate for the search to find shortest paths.
    fn heuristic(&mut self, from: C, to: C) -> u32 {
        coords::distance(from, to)
    }

    /// The cost of a step between adjacent coordinates, or `None`
    /// if the step is impossible.
    fn cost(&mut self, from: C, to: C) -> Option<u32>;
}

/// How a search terminated.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    /// The goal coordinates were reached.
    Found,
    /// The frontier ran empty before a goal was reached.
    Exhausted,
    /// The frontier outgrew the bound of the context.
    Overflow,
}

/// A tree is constructed as the result of a search on a grid.
/// The root node of the tree is the start coordinates of the search
/// and the paths to the leaves are paths on the grid from the start
/// coordinates to other grid coordinates.
#[derive(Debug)]
pub struct Tree<C> {
    root: C,
    parents: HashMap<C, C>,
    costs: HashMap<C, u32>,
    outcome: Outcome,
}

/// A node in a path of a search tree.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Node<C> {
    pub coords: C,
    /// The accumulated cost from the root.
    pub cost: u32,
}

impl<C> Node<C> {
    fn new(coords: C, cost: u32) -> Node<C> {
        Node { coords, cost }
    }
}

pub type Path<C> = VecDeque<Node<C>>;

impl<C: Coords> Tree<C> {
    pub fn root(&self) -> C {
        self.root
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The lowest accumulated cost found for the given coordinates,
    /// if they have been reached.
    pub fn cost(&self, c: C) -> Option<u32> {
        self.costs.get(&c).copied()
    }

    /// All coordinates reached by the search.
    pub fn reached(&self) -> impl Iterator<Item=C> + '_ {
        self.costs.keys().copied()
    }

    /// Trace a path from the given goal back to the root of the tree. The path
    /// is returned in the natural (i.e. reverse) order from start to goal.
    pub fn path(&self, goal: C) -> Option<Path<C>> {
        let mut path = VecDeque::with_capacity(coords::distance(self.root, goal) as usize + 1);
        path.push_front(Node::new(goal, self.cost(goal)?));
        let mut current = goal;
        while current != self.root {
            let parent = *self.parents.get(&current)?;
            path.push_front(Node::new(parent, self.cost(parent)?));
            current = parent;
        }
        Some(path)
    }
}

/// A search context with a uniform cost for every step that does
/// not enter an obstacle.
#[derive(Clone, Copy)]
pub struct Uniform<'a> {
    obstacles: Option<&'a dyn Obstacles>,
    step_cost: u32,
    max_frontier: usize,
}

impl<'a> Default for Uniform<'a> {
    fn default() -> Uniform<'a> {
        Uniform { obstacles: None, step_cost: 1, max_frontier: usize::MAX }
    }
}

impl<'a> Uniform<'a> {
    pub fn new() -> Uniform<'a> {
        Self::default()
    }

    pub fn avoiding(self, obstacles: &'a dyn Obstacles) -> Uniform<'a> {
        Uniform { obstacles: Some(obstacles), ..self }
    }

    pub fn with_step_cost(self, step_cost: u32) -> Uniform<'a> {
        Uniform { step_cost, ..self }
    }

    pub fn with_max_frontier(self, max_frontier: usize) -> Uniform<'a> {
        Uniform { max_frontier, ..self }
    }
}

impl<'a, C: Coords> Context<C> for Uniform<'a> {
    fn max_frontier(&self) -> usize {
        self.max_frontier
    }

    fn heuristic(&mut self, from: C, to: C) -> u32 {
        coords::distance(from, to).saturating_mul(self.step_cost)
    }

    fn cost(&mut self, _from: C, to: C) -> Option<u32> {
        match self.obstacles {
            Some(o) if o.has_hex(Axial::from(to.into())) => None,
            _ => Some(self.step_cost)
        }
    }
}

/// A search context with individual costs for entering hexagons,
/// given by a function that yields `None` for impassable hexagons.
///
/// The distance heuristic is scaled by the minimum cost, which
/// should not exceed the cost of any passable hexagon.
pub struct Costs<F> {
    entry_cost: F,
    min_cost: u32,
    max_cost: u32,
    max_frontier: usize,
}

impl<F> Costs<F>
where F: FnMut(Axial) -> Option<u32> {
    pub fn new(entry_cost: F) -> Costs<F> {
        Costs {
            entry_cost,
            min_cost: 1,
            max_cost: u32::MAX,
            max_frontier: usize::MAX,
        }
    }

    pub fn with_min_cost(self, min_cost: u32) -> Costs<F> {
        Costs { min_cost, ..self }
    }

    pub fn with_max_cost(self, max_cost: u32) -> Costs<F> {
        Costs { max_cost, ..self }
    }

    pub fn with_max_frontier(self, max_frontier: usize) -> Costs<F> {
        Costs { max_frontier, ..self }
    }
}

impl<C: Coords, F> Context<C> for Costs<F>
where F: FnMut(Axial) -> Option<u32> {
    fn max_cost(&self) -> u32 {
        self.max_cost
    }

    fn max_frontier(&self) -> usize {
        self.max_frontier
    }

    fn heuristic(&mut self, from: C, to: C) -> u32 {
        coords::distance(from, to).saturating_mul(self.min_cost)
    }

    fn cost(&mut self, _from: C, to: C) -> Option<u32> {
        (self.entry_cost)(Axial::from(to.into()))
    }
}
