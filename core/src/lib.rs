//! Hexagonal grid coordinates, traversal and path finding.
//!
//! Hexagons are addressed by [axial coordinates](grid::Axial), with
//! offset coordinates derived from the [settings](geo::HexSettings)
//! of a grid. [Traversers](traverse::Traverser) produce ordered
//! sequences of hexagons (rings, spirals, lines, reachable areas and
//! shortest paths) that can be fed back into a [`grid::Grid`].

pub mod error;
pub mod geo;
pub mod grid;
pub mod search;
pub mod traverse;

pub use crate::error::HexError;
