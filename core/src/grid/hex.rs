//! Hexagons as the addressable units of a grid.

use nalgebra::geometry::Point2;

use std::fmt;
use std::hash::{ Hash, Hasher };

use crate::geo::{ HexSettings, Orientation };
use super::*;

/// A hexagon on a grid, identified by its axial coordinates.
///
/// The offset coordinates are derived from the settings of the grid
/// when the hexagon is created. A `Hex` is immutable: moving it
/// yields a new `Hex` with the same settings. Two hexagons are equal
/// if and only if their axial coordinates are equal.
#[derive(Clone, Copy, Debug)]
pub struct Hex {
    axial: Axial,
    offset: Offset,
    settings: HexSettings,
}

impl Hex {
    pub fn new<C: Coords>(c: C, settings: HexSettings) -> Hex {
        let axial = Axial::from(c.into());
        let offset = Offset::of(axial, &settings);
        Hex { axial, offset, settings }
    }

    /// A hex factory for traversals, creating hexagons with the
    /// given settings.
    pub fn factory(settings: HexSettings) -> impl Fn(Axial) -> Hex + Copy {
        move |a| Hex::new(a, settings)
    }

    pub fn from_offset(o: Offset, settings: HexSettings) -> Hex {
        Hex::new(o.to_axial(&settings), settings)
    }

    pub fn axial(&self) -> Axial { self.axial }
    pub fn offset(&self) -> Offset { self.offset }
    pub fn q(&self) -> i32 { self.axial.q }
    pub fn r(&self) -> i32 { self.axial.r }
    pub fn s(&self) -> i32 { self.axial.s() }
    pub fn col(&self) -> i32 { self.offset.col }
    pub fn row(&self) -> i32 { self.offset.row }

    pub fn settings(&self) -> &HexSettings {
        &self.settings
    }

    pub fn orientation(&self) -> Orientation {
        self.settings.orientation()
    }

    /// The adjacent hexagon in the given direction.
    pub fn neighbour<D: DirIndex>(&self, d: D) -> Hex {
        Hex::new(coords::neighbour(self.axial, d), self.settings)
    }

    pub fn distance(&self, other: &Hex) -> u32 {
        coords::distance(self.axial, other.axial)
    }

    pub fn center(&self) -> Point2<f32> {
        self.settings.to_point(self.axial)
    }

    pub fn corners(&self) -> [Point2<f32>; 6] {
        self.settings.corners(self.center())
    }
}

impl PartialEq for Hex {
    fn eq(&self, other: &Hex) -> bool {
        self.axial == other.axial
    }
}

impl Eq for Hex {}

impl Hash for Hex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.axial.hash(state)
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.axial)
    }
}

impl Cell for Hex {
    fn axial(&self) -> Axial {
        self.axial
    }
}

/// A hexagon with attached state, e.g. a movement cost.
#[derive(Clone, Debug)]
pub struct Tile<S> {
    pub hex: Hex,
    pub state: S,
}

impl<S> Tile<S> {
    pub fn new(hex: Hex, state: S) -> Tile<S> {
        Tile { hex, state }
    }
}

impl<S> Cell for Tile<S> {
    fn axial(&self) -> Axial {
        self.hex.axial
    }
}
