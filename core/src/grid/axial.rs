
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{ Deserialize, Serialize };

use crate::error::HexError;
use super::*;

/// Axial coordinates, the canonical address of a hexagon on a grid,
/// independent of the orientation of the hexagons. The third cube
/// coordinate `s = -q - r` is implicit.
///
/// Guide: [Axial Coordinates]
///
/// [Axial Coordinates]: https://www.redblobgames.com/grids/hexagons/#coordinates-axial
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Axial {
    pub q: i32,
    pub r: i32
}

impl Axial {
    pub fn new(q: i32, r: i32) -> Axial {
        Axial { q, r }
    }

    pub fn s(&self) -> i32 {
        -self.q - self.r
    }
}

impl Coords for Axial {}

impl fmt::Display for Axial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.q, self.r)
    }
}

/// Parses `q,r`, optionally enclosed in parentheses, i.e. the
/// inverse of the `Display` implementation.
impl FromStr for Axial {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Axial, HexError> {
        let malformed = || HexError::MalformedCoordinates { input: s.to_string() };
        let t = s.trim();
        let t = t.strip_prefix('(')
            .and_then(|t| t.strip_suffix(')'))
            .unwrap_or(t);
        let mut parts = t.split(',').map(|p| p.trim().parse::<i32>());
        match (parts.next(), parts.next(), parts.next()) {
            (Some(Ok(q)), Some(Ok(r)), None) => Ok(Axial { q, r }),
            _ => Err(malformed())
        }
    }
}

impl From<Cube> for Axial {
    fn from(c: Cube) -> Axial {
        Axial { q: c.x(), r: c.z() }
    }
}

impl From<Axial> for Cube {
    fn from(a: Axial) -> Cube {
        Cube::new_xz(a.q, a.r)
    }
}

impl From<(i32, i32)> for Axial {
    fn from((q, r): (i32, i32)) -> Axial {
        Axial { q, r }
    }
}

impl From<[i32; 2]> for Axial {
    fn from([q, r]: [i32; 2]) -> Axial {
        Axial { q, r }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::*;

    #[test]
    fn prop_from_to_cube_identity() {
        fn prop(c: Cube) -> bool {
            Cube::from(Axial::from(c)) == c
        }
        quickcheck(prop as fn(_)  -> _);
    }

    #[test]
    fn prop_display_parse_identity() {
        fn prop(q: i32, r: i32) -> bool {
            let a = Axial::new(q, r);
            a.to_string().parse::<Axial>() == Ok(a)
                && format!("{},{}", q, r).parse::<Axial>() == Ok(a)
        }
        quickcheck(prop as fn(_,_) -> _);
    }

    #[test]
    fn parse_malformed() {
        for s in &["", "1", "1,2,3", "a,b", "(1,2", "1;2", "1.5,2"] {
            assert_eq!(s.parse::<Axial>(),
                Err(HexError::MalformedCoordinates { input: s.to_string() }));
        }
        assert_eq!(" ( -1, 2 ) ".parse::<Axial>(), Ok(Axial::new(-1, 2)));
    }

    #[test]
    fn implicit_s() {
        let a = Axial::new(2, -5);
        assert_eq!(a.s(), 3);
        assert_eq!(Cube::from(a).y(), a.s());
    }
}
