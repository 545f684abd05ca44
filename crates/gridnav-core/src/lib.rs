//! **gridnav-core** — square and hexagonal grid primitives.
//!
//! This crate provides the coordinate systems and grid containers that the
//! pathfinding in `gridnav-paths` runs on:
//!
//! - [`GridCoord`] offset coordinates and [`SquareGrid`] (4-way or 8-way
//!   adjacency, per-cell cost overrides, corner or center anchoring)
//! - [`HexCoord`] cube coordinates and [`HexGrid`] (flat or pointy layout,
//!   rings, spirals, lines)
//! - the [`Grid`] trait both implement, which is all a search needs
//!
//! Grids are plain owned values with no interior mutability. Mutate them
//! between searches, not during.

pub mod cancel;
pub mod config;
pub mod coord;
pub mod error;
pub mod geom;
pub mod grid;
pub mod hex;
pub mod square;

pub use cancel::CancelToken;
pub use config::{Heuristic, HexGridConfig, NeighborMode, Orientation, OriginMode, SquareGridConfig};
pub use coord::{CUBE_TOLERANCE, Coord, FracHex, GridCoord, HexCoord};
pub use error::{GridError, ParseCoordError};
pub use geom::{Rect, Vec2};
pub use grid::Grid;
pub use hex::HexGrid;
pub use square::SquareGrid;
