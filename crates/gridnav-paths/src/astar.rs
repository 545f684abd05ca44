use std::collections::{BinaryHeap, HashMap, HashSet};

use gridnav_core::Grid;

use crate::config::{CAN_REACH_ITERATIONS, FindPathOptions};
use crate::node::OpenEntry;
use crate::pathfinder::Pathfinder;

impl<G: Grid> Pathfinder<'_, G> {
    /// Shortest path from `start` to `end` using A*.
    ///
    /// Returns the full path (both endpoints included) or `None` if either
    /// endpoint is invalid or blocked, no path exists, or the search ran out
    /// of [`max_iterations`](crate::PathfinderConfig::max_iterations).
    pub fn find_path(&self, start: G::Coord, end: G::Coord) -> Option<Vec<G::Coord>> {
        self.find_path_with(start, end, &FindPathOptions::default())
    }

    /// [`find_path`](Self::find_path) with cells to avoid and a cost cap.
    pub fn find_path_with(
        &self,
        start: G::Coord,
        end: G::Coord,
        options: &FindPathOptions<G::Coord>,
    ) -> Option<Vec<G::Coord>> {
        self.astar(start, end, options, self.config.max_iterations)
    }

    /// Whether a path from `start` to `end` is found within a small budget
    /// (at most [`CAN_REACH_ITERATIONS`] expansions).
    ///
    /// A `false` answer can mean the path is merely long; run
    /// [`find_path`](Self::find_path) for a definite result.
    pub fn can_reach(
        &self,
        start: G::Coord,
        end: G::Coord,
        options: &FindPathOptions<G::Coord>,
    ) -> bool {
        let budget = self.config.max_iterations.min(CAN_REACH_ITERATIONS);
        self.astar(start, end, options, budget).is_some()
    }

    fn astar(
        &self,
        start: G::Coord,
        end: G::Coord,
        options: &FindPathOptions<G::Coord>,
        max_iterations: usize,
    ) -> Option<Vec<G::Coord>> {
        let grid = self.grid;
        if !grid.is_valid_coord(start) || !grid.is_valid_coord(end) {
            return None;
        }
        if !grid.is_walkable(start) || !grid.is_walkable(end) {
            return None;
        }
        if start == end {
            return Some(vec![start]);
        }

        let heuristic = self.config.heuristic;
        let mut open: BinaryHeap<OpenEntry<G::Coord>> = BinaryHeap::new();
        let mut closed: HashSet<G::Coord> = HashSet::new();
        let mut g_score: HashMap<G::Coord, f64> = HashMap::new();
        let mut came_from: HashMap<G::Coord, G::Coord> = HashMap::new();
        let mut seq = 0u64;

        g_score.insert(start, 0.0);
        open.push(OpenEntry {
            coord: start,
            g: 0.0,
            f: grid.estimate(start, end, heuristic),
            seq,
        });

        let mut nbuf = Vec::with_capacity(8);
        let mut iterations = 0usize;

        while let Some(current) = open.pop() {
            // Skip entries superseded by a cheaper push or already expanded.
            if closed.contains(&current.coord)
                || g_score.get(&current.coord).is_some_and(|&g| current.g > g)
            {
                continue;
            }

            if iterations >= max_iterations {
                log::debug!(
                    "A* gave up after {iterations} iterations ({} open)",
                    open.len() + 1
                );
                return None;
            }
            iterations += 1;

            if current.coord == end {
                log::trace!("A* found a path in {iterations} iterations");
                return Some(reconstruct(&came_from, end));
            }

            closed.insert(current.coord);

            nbuf.clear();
            grid.neighbors(current.coord, &mut nbuf);

            for &n in nbuf.iter() {
                if closed.contains(&n) || options.avoid.contains(&n) || !grid.is_walkable(n) {
                    continue;
                }
                let step = grid.movement_cost(current.coord, n);
                if step == f64::INFINITY {
                    continue;
                }
                let tentative = current.g + step;
                if options.exceeds(tentative) {
                    continue;
                }
                if g_score.get(&n).is_some_and(|&g| tentative >= g) {
                    continue;
                }

                g_score.insert(n, tentative);
                came_from.insert(n, current.coord);
                seq += 1;
                open.push(OpenEntry {
                    coord: n,
                    g: tentative,
                    f: tentative + grid.estimate(n, end, heuristic),
                    seq,
                });
            }
        }

        None
    }
}

fn reconstruct<C: Copy + Eq + std::hash::Hash>(came_from: &HashMap<C, C>, end: C) -> Vec<C> {
    let mut path = vec![end];
    let mut cur = end;
    while let Some(&prev) = came_from.get(&cur) {
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    path
}
