use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

use crate::error::GridError;

/// Cell of a rectangular grid, zero-indexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoord {
    pub row: i32,
    pub col: i32,
}

impl GridCoord {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Axial hex coordinate. The implicit third axis is `s = -q - r`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxialCoord {
    pub q: i32,
    pub r: i32,
}

impl AxialCoord {
    pub fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    pub fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Widens to `i64` cube form, so `s` never overflows.
    pub fn as_cube(&self) -> CubeCoord {
        let (q, r) = (i64::from(self.q), i64::from(self.r));
        CubeCoord::new(q, r, -q - r)
    }
}

impl fmt::Display for AxialCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

impl TryFrom<CubeCoord> for AxialCoord {
    type Error = GridError;

    fn try_from(c: CubeCoord) -> Result<Self, Self::Error> {
        let q = i32::try_from(c.q).map_err(|_| GridError::out_of_range("q", c.q))?;
        let r = i32::try_from(c.r).map_err(|_| GridError::out_of_range("r", c.r))?;
        Ok(Self::new(q, r))
    }
}

/// Cube hex coordinate, `q + r + s == 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CubeCoord {
    pub q: i64,
    pub r: i64,
    pub s: i64,
}

impl CubeCoord {
    pub fn new(q: i64, r: i64, s: i64) -> Self {
        debug_assert_eq!(q + r + s, 0, "cube coordinate off the q + r + s = 0 plane");
        Self { q, r, s }
    }

    /// Hex distance from the origin.
    pub fn length(&self) -> i64 {
        (self.q.abs() + self.r.abs() + self.s.abs()) / 2
    }
}

impl From<AxialCoord> for CubeCoord {
    fn from(a: AxialCoord) -> Self {
        a.as_cube()
    }
}

impl Add for CubeCoord {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.q + rhs.q, self.r + rhs.r, self.s + rhs.s)
    }
}

impl Sub for CubeCoord {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.q - rhs.q, self.r - rhs.r, self.s - rhs.s)
    }
}

impl Mul<i64> for CubeCoord {
    type Output = Self;

    fn mul(self, factor: i64) -> Self {
        Self::new(self.q * factor, self.r * factor, self.s * factor)
    }
}
