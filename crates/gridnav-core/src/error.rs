//! Error types for grid mutation and coordinate key parsing.
//!
//! Only programmer errors are errors here. A search that finds no path is a
//! normal outcome and is reported through `Option` / empty results instead.

use std::fmt;

use crate::coord::Coord;

/// A rejected write to a grid.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// The coordinate is outside the grid (or not a valid cube coordinate).
    InvalidCoord(Coord),
    /// A movement-cost override that is NaN, zero or negative.
    InvalidCost { coord: Coord, cost: f64 },
    /// A grid-wide step cost that is NaN, zero or negative.
    InvalidDefaultCost(f64),
}

impl GridError {
    /// The coordinate the failed write targeted, if it was a per-cell write.
    pub fn coord(&self) -> Option<Coord> {
        match self {
            Self::InvalidCoord(c) => Some(*c),
            Self::InvalidCost { coord, .. } => Some(*coord),
            Self::InvalidDefaultCost(_) => None,
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoord(c) => write!(f, "invalid coordinate: {c}"),
            Self::InvalidCost { coord, cost } => {
                write!(f, "invalid movement cost {cost} at {coord}: must be positive")
            }
            Self::InvalidDefaultCost(cost) => {
                write!(f, "invalid default movement cost {cost}: must be positive")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A canonical coordinate key that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCoordError {
    /// Wrong number of comma-separated components.
    Arity {
        key: String,
        expected: usize,
        found: usize,
    },
    /// A component is not an integer.
    Component { key: String, component: String },
}

impl fmt::Display for ParseCoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arity {
                key,
                expected,
                found,
            } => write!(
                f,
                "coordinate key \"{key}\": expected {expected} components, found {found}"
            ),
            Self::Component { key, component } => write!(
                f,
                "coordinate key \"{key}\": \"{component}\" is not an integer"
            ),
        }
    }
}

impl std::error::Error for ParseCoordError {}
