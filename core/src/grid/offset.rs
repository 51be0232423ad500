//! Offset coordinates.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{ Deserialize, Serialize };

use crate::geo::{ HexSettings, Orientation, Parity };
use super::*;

/// Offset coordinates, i.e. columns and rows of a grid whose every
/// other row (pointy-top) or column (flat-top) is shoved by half
/// a hexagon. Which ones are shoved is determined by the [`Parity`].
///
/// Guide: [Offset Coordinates]
///
/// [Offset Coordinates]: https://www.redblobgames.com/grids/hexagons/#coordinates-offset
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Offset {
    pub col: i32,
    pub row: i32,
}

impl Offset {
    pub fn new(col: i32, row: i32) -> Offset {
        Offset { col, row }
    }

    /// The offset coordinates of the given coordinates on a grid
    /// with the given settings.
    pub fn of<C: Coords>(c: C, settings: &HexSettings) -> Offset {
        axial_to_offset(Axial::from(c.into()), settings.orientation(), settings.offset())
    }

    /// The axial coordinates of these offset coordinates on a grid
    /// with the given settings.
    pub fn to_axial(self, settings: &HexSettings) -> Axial {
        offset_to_axial(self, settings.orientation(), settings.offset())
    }
}

// `x >> 1` halves rounding down; even parity adds the low bit to round up.
pub fn axial_to_offset(a: Axial, o: Orientation, p: Parity) -> Offset {
    match (o, p) {
        (Orientation::PointyTop, Parity::Odd) => {
            let col = a.q + (a.r >> 1);
            Offset { col, row: a.r }
        }
        (Orientation::PointyTop, Parity::Even) => {
            let col = a.q + (a.r >> 1) + (a.r & 1);
            Offset { col, row: a.r }
        }
        (Orientation::FlatTop, Parity::Odd) => {
            let row = a.r + (a.q >> 1);
            Offset { col: a.q, row }
        }
        (Orientation::FlatTop, Parity::Even) => {
            let row = a.r + (a.q >> 1) + (a.q & 1);
            Offset { col: a.q, row }
        }
    }
}

pub fn offset_to_axial(o: Offset, orientation: Orientation, p: Parity) -> Axial {
    match (orientation, p) {
        (Orientation::PointyTop, Parity::Odd) => {
            let q = o.col - (o.row >> 1);
            Axial { q, r: o.row }
        }
        (Orientation::PointyTop, Parity::Even) => {
            let q = o.col - (o.row >> 1) - (o.row & 1);
            Axial { q, r: o.row }
        }
        (Orientation::FlatTop, Parity::Odd) => {
            let r = o.row - (o.col >> 1);
            Axial { q: o.col, r }
        }
        (Orientation::FlatTop, Parity::Even) => {
            let r = o.row - (o.col >> 1) - (o.col & 1);
            Axial { q: o.col, r }
        }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}
