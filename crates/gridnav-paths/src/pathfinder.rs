use gridnav_core::{Grid, Vec2};

use crate::config::PathfinderConfig;

/// Path queries against one borrowed grid.
///
/// The pathfinder never mutates the grid and keeps no state between calls;
/// every query builds its own open list and cost tables. Holding a shared
/// borrow means the grid cannot change while a `Pathfinder` for it is alive,
/// so edit the grid first, then build (or [`set_grid`](Self::set_grid)) the
/// pathfinder and query.
pub struct Pathfinder<'g, G: Grid> {
    pub(crate) grid: &'g G,
    pub(crate) config: PathfinderConfig,
}

impl<'g, G: Grid> Pathfinder<'g, G> {
    /// Create a pathfinder with the default configuration.
    pub fn new(grid: &'g G) -> Self {
        Self::with_config(grid, PathfinderConfig::default())
    }

    /// Create a pathfinder with an explicit configuration.
    pub fn with_config(grid: &'g G, config: PathfinderConfig) -> Self {
        Self { grid, config }
    }

    /// The grid being searched.
    #[inline]
    pub fn grid(&self) -> &'g G {
        self.grid
    }

    /// Point the pathfinder at another grid of the same kind.
    pub fn set_grid(&mut self, grid: &'g G) {
        self.grid = grid;
    }

    #[inline]
    pub fn config(&self) -> &PathfinderConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PathfinderConfig) {
        self.config = config;
    }

    /// Total movement cost along `path`.
    ///
    /// Zero for paths of fewer than two cells; `f64::INFINITY` if any two
    /// consecutive cells are not connected by an edge.
    pub fn path_cost(&self, path: &[G::Coord]) -> f64 {
        path.windows(2)
            .map(|w| self.grid.movement_cost(w[0], w[1]))
            .sum()
    }

    /// World-space cell centers along `path`, for drawing debug lines.
    pub fn path_to_world(&self, path: &[G::Coord]) -> Vec<Vec2> {
        path.iter().map(|&c| self.grid.cell_to_world(c)).collect()
    }
}

impl<G: Grid> Clone for Pathfinder<'_, G> {
    fn clone(&self) -> Self {
        Self {
            grid: self.grid,
            config: self.config,
        }
    }
}

impl<G: Grid> std::fmt::Debug for Pathfinder<'_, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pathfinder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
