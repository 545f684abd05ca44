use std::collections::HashSet;
use std::f64::consts::SQRT_2;
use std::hash::Hash;

use gridnav_core::Heuristic;

/// Iteration budget used by [`Pathfinder::can_reach`](crate::Pathfinder::can_reach)
/// when the configured budget is larger.
pub const CAN_REACH_ITERATIONS: usize = 100;

/// Tunables for a [`Pathfinder`](crate::Pathfinder).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathfinderConfig {
    /// Informational. Whether diagonal steps exist is decided by the grid's
    /// neighbour mode and movement costs.
    pub allow_diagonals: bool,
    /// Informational. Diagonal step costs come from the grid.
    pub diagonal_cost: f64,
    /// Heuristic for square grids. Hex grids always use cube distance.
    pub heuristic: Heuristic,
    /// Maximum number of nodes A* expands before giving up.
    pub max_iterations: usize,
}

impl Default for PathfinderConfig {
    fn default() -> Self {
        Self {
            allow_diagonals: false,
            diagonal_cost: SQRT_2,
            heuristic: Heuristic::Manhattan,
            max_iterations: 1000,
        }
    }
}

/// Per-call restrictions for [`Pathfinder::find_path_with`](crate::Pathfinder::find_path_with).
#[derive(Debug, Clone, PartialEq)]
pub struct FindPathOptions<C: Eq + Hash> {
    /// Cells the path must not enter.
    pub avoid: HashSet<C>,
    /// Upper bound on the accumulated cost of any partial path.
    pub max_cost: Option<f64>,
}

impl<C: Eq + Hash> Default for FindPathOptions<C> {
    fn default() -> Self {
        Self {
            avoid: HashSet::new(),
            max_cost: None,
        }
    }
}

impl<C: Eq + Hash> FindPathOptions<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add cells to avoid.
    pub fn avoiding(mut self, cells: impl IntoIterator<Item = C>) -> Self {
        self.avoid.extend(cells);
        self
    }

    /// Bound the total path cost.
    pub fn with_max_cost(mut self, max_cost: f64) -> Self {
        self.max_cost = Some(max_cost);
        self
    }

    #[inline]
    pub(crate) fn exceeds(&self, cost: f64) -> bool {
        self.max_cost.is_some_and(|max| cost > max)
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = PathfinderConfig {
            heuristic: Heuristic::Chebyshev,
            max_iterations: 42,
            ..Default::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: PathfinderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
