//! Traversals of a grid, i.e. ordered sequences of hexagons.
//!
//! A [`Traverser`] is invoked with a hex factory and an optional
//! cursor. Traversers without an explicit start begin at the cursor
//! or, lacking one, at the origin. Traversers can be chained with
//! [`Traverser::then`], passing the last hexagon of one traversal as
//! the cursor of the next.

pub mod path_find;
pub mod reachable;
pub mod ring;

pub use self::path_find::*;
pub use self::reachable::*;
pub use self::ring::*;

use crate::grid::Axial;

pub trait Traverser {
    /// The coordinates of the traversal, in order.
    fn coordinates(&self, cursor: Option<Axial>) -> Vec<Axial>;

    /// Create a hexagon for each of the coordinates of the traversal.
    fn traverse<T, F>(&self, create: F, cursor: Option<Axial>) -> Vec<T>
    where Self: Sized,
          F: FnMut(Axial) -> T
    {
        self.coordinates(cursor).into_iter().map(create).collect()
    }

    /// Continue this traversal with another, which begins at the last
    /// hexagon of this traversal unless it has an explicit start.
    fn then<R: Traverser>(self, next: R) -> Chain<Self, R>
    where Self: Sized {
        Chain { first: self, second: next }
    }
}

impl<R: Traverser + ?Sized> Traverser for &R {
    fn coordinates(&self, cursor: Option<Axial>) -> Vec<Axial> {
        (**self).coordinates(cursor)
    }
}

/// A fixed sequence of coordinates is a traversal that ignores the cursor.
impl Traverser for [Axial] {
    fn coordinates(&self, _cursor: Option<Axial>) -> Vec<Axial> {
        self.to_vec()
    }
}

impl Traverser for Vec<Axial> {
    fn coordinates(&self, _cursor: Option<Axial>) -> Vec<Axial> {
        self.clone()
    }
}

/// Two traversals, one after the other.
#[derive(Clone, Debug)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A: Traverser, B: Traverser> Traverser for Chain<A, B> {
    fn coordinates(&self, cursor: Option<Axial>) -> Vec<Axial> {
        let mut coords = self.first.coordinates(cursor);
        let cursor = coords.last().copied().or(cursor);
        coords.extend(self.second.coordinates(cursor));
        coords
    }
}

/// The start of a traversal without an explicit start.
pub(crate) fn start_at(start: Option<Axial>, cursor: Option<Axial>) -> Axial {
    start.or(cursor).unwrap_or_default()
}
