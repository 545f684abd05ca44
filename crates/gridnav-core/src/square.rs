//! Rectangular grid of square cells.

use std::collections::HashMap;
use std::f64::consts::SQRT_2;

use crate::config::{Heuristic, NeighborMode, OriginMode, SquareGridConfig};
use crate::coord::{Coord, GridCoord};
use crate::error::GridError;
use crate::geom::{Rect, RectIter, Vec2};
use crate::grid::Grid;

/// A `width x height` grid of square cells carrying optional payloads of
/// type `T`.
///
/// Storage is sparse: a cell with no payload is empty but still in bounds,
/// a cell with no walkability entry is walkable, and a cell with no cost
/// override costs 1 to enter cardinally and √2 diagonally.
#[derive(Debug, Clone)]
pub struct SquareGrid<T> {
    bounds: Rect,
    cell_size: f64,
    origin: Vec2,
    origin_mode: OriginMode,
    neighbor_mode: NeighborMode,
    cells: HashMap<GridCoord, T>,
    walkable: HashMap<GridCoord, bool>,
    costs: HashMap<GridCoord, f64>,
}

impl<T> SquareGrid<T> {
    /// Create a grid with unit cells anchored at the world origin.
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_config(SquareGridConfig {
            width,
            height,
            ..Default::default()
        })
    }

    /// Create a grid from a full configuration.
    pub fn with_config(cfg: SquareGridConfig) -> Self {
        debug_assert!(cfg.cell_size > 0.0, "cell_size must be positive");
        Self {
            bounds: Rect::sized(cfg.width.max(0), cfg.height.max(0)),
            cell_size: cfg.cell_size,
            origin: cfg.origin,
            origin_mode: cfg.origin_mode,
            neighbor_mode: cfg.neighbor_mode,
            cells: HashMap::new(),
            walkable: HashMap::new(),
            costs: HashMap::new(),
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// The in-bounds rectangle `[0, width) x [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn origin_mode(&self) -> OriginMode {
        self.origin_mode
    }

    #[inline]
    pub fn neighbor_mode(&self) -> NeighborMode {
        self.neighbor_mode
    }

    /// Switch between 4-way and 8-way adjacency.
    pub fn set_neighbor_mode(&mut self, mode: NeighborMode) {
        self.neighbor_mode = mode;
    }

    /// Number of in-bounds cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Row-major iterator over every in-bounds coordinate.
    pub fn coords(&self) -> RectIter {
        self.bounds.iter()
    }

    fn check(&self, c: GridCoord) -> Result<(), GridError> {
        if self.bounds.contains(c) {
            Ok(())
        } else {
            Err(GridError::InvalidCoord(Coord::Square(c)))
        }
    }

    /// Half the grid's world-space extent, applied in `Center` mode.
    fn center_offset(&self) -> Vec2 {
        match self.origin_mode {
            OriginMode::Corner => Vec2::ZERO,
            OriginMode::Center => Vec2::new(
                self.bounds.width() as f64 * self.cell_size / 2.0,
                self.bounds.height() as f64 * self.cell_size / 2.0,
            ),
        }
    }

    // -----------------------------------------------------------------------
    // Payloads
    // -----------------------------------------------------------------------

    /// The payload at `c`, or `None` if the cell is empty or out of bounds.
    pub fn get_cell(&self, c: GridCoord) -> Option<&T> {
        self.cells.get(&c)
    }

    /// Mutable access to the payload at `c`.
    pub fn get_cell_mut(&mut self, c: GridCoord) -> Option<&mut T> {
        self.cells.get_mut(&c)
    }

    /// Store `value` at `c`, returning the previous payload.
    pub fn set_cell(&mut self, c: GridCoord, value: T) -> Result<Option<T>, GridError> {
        self.check(c)?;
        Ok(self.cells.insert(c, value))
    }

    /// Remove and return the payload at `c`.
    pub fn clear_cell(&mut self, c: GridCoord) -> Option<T> {
        self.cells.remove(&c)
    }

    /// Remove every payload. Walkability and costs are kept.
    pub fn clear_all_cells(&mut self) {
        self.cells.clear();
    }

    /// Iterator over occupied cells, in no particular order.
    pub fn occupied(&self) -> impl Iterator<Item = (GridCoord, &T)> {
        self.cells.iter().map(|(c, v)| (*c, v))
    }

    // -----------------------------------------------------------------------
    // Walkability and costs
    // -----------------------------------------------------------------------

    /// Mark `c` as walkable or blocked.
    pub fn set_walkable(&mut self, c: GridCoord, walkable: bool) -> Result<(), GridError> {
        self.check(c)?;
        self.walkable.insert(c, walkable);
        Ok(())
    }

    /// Override the cost of entering `c` from any adjacent cell.
    ///
    /// The override replaces both the cardinal and the diagonal default.
    pub fn set_movement_cost(&mut self, c: GridCoord, cost: f64) -> Result<(), GridError> {
        self.check(c)?;
        if cost.is_nan() || cost <= 0.0 {
            return Err(GridError::InvalidCost {
                coord: Coord::Square(c),
                cost,
            });
        }
        self.costs.insert(c, cost);
        Ok(())
    }

    /// Drop the cost override at `c`, returning it.
    pub fn clear_movement_cost(&mut self, c: GridCoord) -> Option<f64> {
        self.costs.remove(&c)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Distance between two cells under the current neighbour mode:
    /// Manhattan in 4-way, Chebyshev in 8-way.
    #[inline]
    pub fn step_distance(&self, a: GridCoord, b: GridCoord) -> i32 {
        match self.neighbor_mode {
            NeighborMode::Four => a.manhattan(b),
            NeighborMode::Eight => a.chebyshev(b),
        }
    }

    /// In-bounds cells within `range` steps of `center` (center included),
    /// row-major.
    pub fn cells_in_range(&self, center: GridCoord, range: i32) -> Vec<GridCoord> {
        if range < 0 {
            return Vec::new();
        }
        Rect::around(center, range)
            .intersect(self.bounds)
            .iter()
            .filter(|&c| self.step_distance(center, c) <= range)
            .collect()
    }

    /// The in-bounds neighbours of `c`: N, E, S, W, then NE, SE, SW, NW in
    /// 8-way mode.
    pub fn neighbors_of(&self, c: GridCoord) -> Vec<GridCoord> {
        let mut buf = Vec::with_capacity(8);
        self.push_neighbors(c, &mut buf);
        buf
    }

    fn push_neighbors(&self, c: GridCoord, buf: &mut Vec<GridCoord>) {
        let bounds = self.bounds;
        buf.extend(c.neighbors_4().into_iter().filter(|&n| bounds.contains(n)));
        if self.neighbor_mode == NeighborMode::Eight {
            buf.extend(c.diagonals().into_iter().filter(|&n| bounds.contains(n)));
        }
    }
}

impl<T> Grid for SquareGrid<T> {
    type Coord = GridCoord;

    #[inline]
    fn is_valid_coord(&self, c: GridCoord) -> bool {
        self.bounds.contains(c)
    }

    fn is_walkable(&self, c: GridCoord) -> bool {
        self.bounds.contains(c) && self.walkable.get(&c).copied().unwrap_or(true)
    }

    fn movement_cost(&self, from: GridCoord, to: GridCoord) -> f64 {
        if !self.is_valid_coord(from) || !self.is_walkable(to) {
            return f64::INFINITY;
        }
        let diagonal = match ((to.x - from.x).abs(), (to.y - from.y).abs()) {
            (1, 0) | (0, 1) => false,
            (1, 1) if self.neighbor_mode == NeighborMode::Eight => true,
            _ => return f64::INFINITY,
        };
        match self.costs.get(&to) {
            Some(&cost) => cost,
            None if diagonal => SQRT_2,
            None => 1.0,
        }
    }

    fn neighbors(&self, c: GridCoord, buf: &mut Vec<GridCoord>) {
        self.push_neighbors(c, buf);
    }

    fn estimate(&self, from: GridCoord, to: GridCoord, heuristic: Heuristic) -> f64 {
        let dx = (to.x - from.x).abs() as f64;
        let dy = (to.y - from.y).abs() as f64;
        match heuristic {
            Heuristic::Manhattan => dx + dy,
            Heuristic::Euclidean => dx.hypot(dy),
            Heuristic::Chebyshev => dx.max(dy),
        }
    }

    fn cell_to_world(&self, c: GridCoord) -> Vec2 {
        let half = self.cell_size / 2.0;
        let local = Vec2::new(
            c.x as f64 * self.cell_size + half,
            c.y as f64 * self.cell_size + half,
        );
        local - self.center_offset() + self.origin
    }

    fn world_to_cell(&self, pos: Vec2) -> GridCoord {
        let local = (pos - self.origin + self.center_offset()) / self.cell_size;
        GridCoord::new(local.x.floor() as i32, local.y.floor() as i32)
    }
}
