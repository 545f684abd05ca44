//! Pathfinding over any [`gridnav_core::Grid`].
//!
//! [`Pathfinder`] borrows one grid and answers path queries against it:
//!
//! - **A\*** shortest path with an iteration budget ([`Pathfinder::find_path`],
//!   [`Pathfinder::find_path_with`])
//! - a cheap reachability probe ([`Pathfinder::can_reach`])
//! - a cost-bounded flood fill ([`Pathfinder::get_reachable_cells`],
//!   [`Pathfinder::reachable_costs`])
//!
//! The same code runs on square and hex grids; it only sees the grid through
//! the `Grid` trait. A search that finds nothing returns `None` or an empty
//! list, never an error.

mod astar;
mod config;
mod node;
mod pathfinder;
mod reachable;

pub use config::{CAN_REACH_ITERATIONS, FindPathOptions, PathfinderConfig};
pub use node::PathNode;
pub use pathfinder::Pathfinder;
