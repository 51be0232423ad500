//! Hexagonal grids with overlaid coordinate systems.

pub mod axial;
pub mod coords;
pub mod cube;
pub mod hex;
pub mod offset;

pub use self::axial::*;
pub use self::coords::*;
pub use self::cube::*;
pub use self::hex::*;
pub use self::offset::*;

use indexmap::IndexMap;

use std::collections::HashSet;
use std::hash::BuildHasher;

use crate::traverse::Traverser;

/// A member of a grid, i.e. anything with axial coordinates.
pub trait Cell {
    fn axial(&self) -> Axial;
}

impl Cell for Axial {
    fn axial(&self) -> Axial {
        *self
    }
}

/// The obstacles of a traversal. Coordinates for which `has_hex`
/// returns `true` are never entered.
pub trait Obstacles {
    fn has_hex(&self, c: Axial) -> bool;
}

impl<S: BuildHasher> Obstacles for HashSet<Axial, S> {
    fn has_hex(&self, c: Axial) -> bool {
        self.contains(&c)
    }
}

/// A grid is an arrangement of hexagonal cells, each with unique
/// coordinates. The cells are kept in insertion order.
#[derive(Clone, Debug)]
pub struct Grid<T: Cell> {
    cells: IndexMap<Axial, T>,
}

impl<T: Cell> Default for Grid<T> {
    fn default() -> Grid<T> {
        Grid { cells: IndexMap::new() }
    }
}

impl<T: Cell> Grid<T> {
    pub fn new() -> Grid<T> {
        Self::default()
    }

    /// Create a grid from a sequence of cells. Of several cells with
    /// the same coordinates only the first is kept.
    pub fn from_cells<I>(cells: I) -> Grid<T>
    where I: IntoIterator<Item=T> {
        let mut grid = Grid::new();
        for c in cells {
            grid.cells.entry(c.axial()).or_insert(c);
        }
        grid
    }

    /// Create a grid with a cell for each of the given coordinates,
    /// without duplicates.
    pub fn from_coordinates<C, I, F>(create: F, coords: I) -> Grid<T>
    where C: Coords,
          I: IntoIterator<Item=C>,
          F: FnMut(Axial) -> T
    {
        let mut create = create;
        let mut grid = Grid::new();
        for c in coords {
            let a = Axial::from(c.into());
            if !grid.cells.contains_key(&a) {
                grid.cells.insert(a, create(a));
            }
        }
        grid
    }

    /// Create a grid from the cells produced by a traversal that
    /// starts at the given cursor, if it has no start of its own.
    pub fn from_traverser<R, F>(create: F, traverser: &R, cursor: Option<Axial>) -> Grid<T>
    where R: Traverser + ?Sized,
          F: FnMut(Axial) -> T
    {
        Self::from_coordinates(create, traverser.coordinates(cursor))
    }

    pub fn has_hex<C: Coords>(&self, c: C) -> bool {
        self.cells.contains_key(&Axial::from(c.into()))
    }

    pub fn get_hex<C: Coords>(&self, c: C) -> Option<&T> {
        self.cells.get(&Axial::from(c.into()))
    }

    pub fn get_hex_mut<C: Coords>(&mut self, c: C) -> Option<&mut T> {
        self.cells.get_mut(&Axial::from(c.into()))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over the cells in insertion order.
    pub fn iter(&self) -> impl Iterator<Item=&T> + '_ {
        self.cells.values()
    }

    pub fn coordinates(&self) -> impl Iterator<Item=Axial> + '_ {
        self.cells.keys().copied()
    }

    /// Insert the given cells, replacing existing cells with the
    /// same coordinates in place.
    pub fn set_hexes<I>(&mut self, cells: I)
    where I: IntoIterator<Item=T> {
        for c in cells {
            self.cells.insert(c.axial(), c);
        }
    }

    /// The cells of this grid along a traversal from the given cursor,
    /// in the order of the traversal. Coordinates without a cell are skipped.
    pub fn traverse<'a, R>(&'a self, traverser: &R, cursor: Option<Axial>)
        -> impl Iterator<Item=&'a T> + 'a
    where R: Traverser + ?Sized {
        traverser.coordinates(cursor).into_iter().filter_map(move |a| self.cells.get(&a))
    }

    /// Rebuild the grid from the result of applying the given
    /// operations to its cells, e.g.
    ///
    /// ```
    /// # use hexpath::grid::{ Axial, Grid };
    /// let mut grid = Grid::from_coordinates(|a| a, vec![(0, 0), (1, 0), (2, 0)]
    ///     .into_iter().map(Axial::from));
    /// grid.update(|cells| cells.filter(|c| c.q != 1));
    /// assert_eq!(grid.len(), 2);
    /// ```
    pub fn update<F, I>(&mut self, ops: F)
    where F: FnOnce(indexmap::map::IntoValues<Axial, T>) -> I,
          I: IntoIterator<Item=T>
    {
        let cells = std::mem::take(&mut self.cells);
        *self = Grid::from_cells(ops(cells.into_values()));
    }

    /// Apply the given operations to the cells along a traversal from
    /// the given cursor and insert the results into the grid. Cells of
    /// the grid take the place of the cells created by the traversal
    /// where present.
    pub fn update_along<R, F, O, I>(&mut self, traverser: &R, cursor: Option<Axial>, create: F, ops: O)
    where R: Traverser + ?Sized,
          F: FnMut(Axial) -> T,
          O: FnOnce(std::vec::IntoIter<T>) -> I,
          I: IntoIterator<Item=T>,
          T: Clone
    {
        let mut create = create;
        let cells = traverser.coordinates(cursor).into_iter()
            .map(|a| self.cells.get(&a).cloned().unwrap_or_else(|| create(a)))
            .collect::<Vec<_>>();
        self.set_hexes(ops(cells.into_iter()));
    }
}

impl<T: Cell> Obstacles for Grid<T> {
    fn has_hex(&self, c: Axial) -> bool {
        self.cells.contains_key(&c)
    }
}

impl<T: Cell> IntoIterator for Grid<T> {
    type Item = T;
    type IntoIter = indexmap::map::IntoValues<Axial, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_values()
    }
}
