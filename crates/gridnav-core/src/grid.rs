use std::fmt::Debug;
use std::hash::Hash;

use crate::config::Heuristic;
use crate::geom::Vec2;

/// Capability interface shared by [`SquareGrid`](crate::SquareGrid) and
/// [`HexGrid`](crate::HexGrid).
///
/// Searches in `gridnav-paths` only ever talk to a grid through this trait,
/// so they work the same on either layout.
pub trait Grid {
    /// The coordinate family of this grid.
    type Coord: Copy + Eq + Hash + Debug;

    /// Whether `c` addresses a cell of this grid.
    fn is_valid_coord(&self, c: Self::Coord) -> bool;

    /// Whether `c` can be entered. Always `false` for invalid coordinates.
    fn is_walkable(&self, c: Self::Coord) -> bool;

    /// Cost of stepping from `from` to the adjacent `to`.
    ///
    /// Returns `f64::INFINITY` when there is no edge: either end invalid,
    /// `to` not walkable, or the two cells not adjacent.
    fn movement_cost(&self, from: Self::Coord, to: Self::Coord) -> f64;

    /// Append the in-bounds neighbours of `c` into `buf`. The caller clears
    /// `buf` before calling. Walkability is not checked.
    fn neighbors(&self, c: Self::Coord, buf: &mut Vec<Self::Coord>);

    /// Estimate of the cost from `from` to `to` for A*.
    ///
    /// Implementations decide whether `heuristic` applies to them.
    fn estimate(&self, from: Self::Coord, to: Self::Coord, heuristic: Heuristic) -> f64;

    /// World-space center of the cell.
    fn cell_to_world(&self, c: Self::Coord) -> Vec2;

    /// The cell containing `pos`. Not clamped to the grid.
    fn world_to_cell(&self, pos: Vec2) -> Self::Coord;
}
