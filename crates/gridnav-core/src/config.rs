//! Construction parameters for [`SquareGrid`](crate::SquareGrid) and
//! [`HexGrid`](crate::HexGrid), plus the small enums they use.

use crate::geom::Vec2;

/// Where a square grid's world-space `origin` sits relative to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OriginMode {
    /// `origin` is the top-left corner of cell (0, 0).
    #[default]
    Corner,
    /// `origin` is the geometric center of the whole grid.
    Center,
}

/// Which cells count as adjacent on a square grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NeighborMode {
    /// Cardinal moves only (N, E, S, W).
    #[default]
    Four,
    /// Cardinal and diagonal moves.
    Eight,
}

/// Hex layout orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Flat edge on top; columns of hexes.
    Flat,
    /// Corner on top; rows of hexes.
    #[default]
    Pointy,
}

/// A* heuristic for square grids. Hex grids always use cube distance.
///
/// Manhattan is admissible on 4-way grids whose costs are all at least 1.
/// It overestimates once diagonal steps exist, and every choice overestimates
/// when cost overrides drop below 1. Paths found with an overestimating
/// heuristic are still valid, just not guaranteed to be the cheapest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// `|dx| + |dy|`
    #[default]
    Manhattan,
    /// `sqrt(dx² + dy²)`
    Euclidean,
    /// `max(|dx|, |dy|)`
    Chebyshev,
}

/// Shape and layout of a [`SquareGrid`](crate::SquareGrid).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SquareGridConfig {
    pub width: i32,
    pub height: i32,
    /// World units per cell edge.
    pub cell_size: f64,
    pub origin: Vec2,
    pub origin_mode: OriginMode,
    pub neighbor_mode: NeighborMode,
}

impl Default for SquareGridConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            cell_size: 1.0,
            origin: Vec2::ZERO,
            origin_mode: OriginMode::Corner,
            neighbor_mode: NeighborMode::Four,
        }
    }
}

/// Shape and layout of a [`HexGrid`](crate::HexGrid).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexGridConfig {
    /// Maximum cube distance from the center hex.
    pub radius: i32,
    /// Distance from a hex center to any of its corners, in world units.
    pub hex_size: f64,
    pub orientation: Orientation,
    /// World position of the center hex.
    pub origin: Vec2,
    /// Cost of every step between adjacent walkable hexes.
    pub default_movement_cost: f64,
}

impl Default for HexGridConfig {
    fn default() -> Self {
        Self {
            radius: 5,
            hex_size: 1.0,
            orientation: Orientation::Pointy,
            origin: Vec2::ZERO,
            default_movement_cost: 1.0,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn square_config_round_trip() {
        let cfg = SquareGridConfig {
            width: 7,
            origin_mode: OriginMode::Center,
            neighbor_mode: NeighborMode::Eight,
            ..Default::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SquareGridConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn hex_config_round_trip() {
        let cfg = HexGridConfig {
            orientation: Orientation::Flat,
            origin: Vec2::new(3.0, -1.5),
            ..Default::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: HexGridConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
