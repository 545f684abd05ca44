use std::collections::{HashMap, VecDeque};

use gridnav_core::{CancelToken, Grid};

use crate::node::PathNode;
use crate::pathfinder::Pathfinder;

impl<G: Grid> Pathfinder<'_, G> {
    /// Every cell reachable from `start` with total movement cost at most
    /// `max_cost`, `start` included, in discovery order.
    ///
    /// Returns an empty list if `start` is not a valid coordinate. There is
    /// no iteration cap: termination relies on the grid being finite, so a
    /// non-finite `max_cost` floods the whole connected region.
    pub fn get_reachable_cells(&self, start: G::Coord, max_cost: f64) -> Vec<G::Coord> {
        self.reachable_costs(start, max_cost)
            .into_iter()
            .map(|n| n.pos)
            .collect()
    }

    /// Like [`get_reachable_cells`](Self::get_reachable_cells), with the
    /// cheapest cost found to each cell.
    pub fn reachable_costs(&self, start: G::Coord, max_cost: f64) -> Vec<PathNode<G::Coord>> {
        self.flood(start, max_cost, None).unwrap_or_default()
    }

    /// [`get_reachable_cells`](Self::get_reachable_cells) that checks
    /// `cancel` before each expansion and returns `None` once it is set.
    ///
    /// A call that runs to completion returns exactly what
    /// `get_reachable_cells` would.
    pub fn reachable_cells_cancellable(
        &self,
        start: G::Coord,
        max_cost: f64,
        cancel: &CancelToken,
    ) -> Option<Vec<G::Coord>> {
        self.flood(start, max_cost, Some(cancel))
            .map(|nodes| nodes.into_iter().map(|n| n.pos).collect())
    }

    fn flood(
        &self,
        start: G::Coord,
        max_cost: f64,
        cancel: Option<&CancelToken>,
    ) -> Option<Vec<PathNode<G::Coord>>> {
        let grid = self.grid;
        if !grid.is_valid_coord(start) {
            return Some(Vec::new());
        }
        if !max_cost.is_finite() {
            log::debug!("reachability flood with unbounded cost {max_cost}");
        }

        let mut best: HashMap<G::Coord, f64> = HashMap::new();
        let mut order: Vec<G::Coord> = Vec::new();
        let mut queue: VecDeque<(G::Coord, f64)> = VecDeque::new();

        best.insert(start, 0.0);
        order.push(start);
        queue.push_back((start, 0.0));

        let mut nbuf = Vec::with_capacity(8);

        while let Some((current, cost)) = queue.pop_front() {
            if cancel.is_some_and(|c| c.is_cancelled()) {
                log::debug!("reachability flood cancelled after {} cells", order.len());
                return None;
            }
            // A cheaper route to this cell was queued after this entry.
            if best.get(&current).is_some_and(|&b| cost > b) {
                continue;
            }

            nbuf.clear();
            grid.neighbors(current, &mut nbuf);

            for &n in nbuf.iter() {
                let step = grid.movement_cost(current, n);
                if step == f64::INFINITY {
                    continue;
                }
                let total = cost + step;
                if total > max_cost {
                    continue;
                }
                match best.get(&n) {
                    Some(&b) if total >= b => continue,
                    Some(_) => {}
                    None => order.push(n),
                }
                best.insert(n, total);
                queue.push_back((n, total));
            }
        }

        Some(
            order
                .into_iter()
                .map(|pos| PathNode {
                    pos,
                    cost: best[&pos],
                })
                .collect(),
        )
    }
}
