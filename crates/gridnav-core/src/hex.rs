//! Hexagonal grid in cube coordinates, bounded by a radius around the
//! center hex.

use std::collections::HashMap;
use std::f64::consts::PI;

use crate::config::{Heuristic, HexGridConfig, Orientation};
use crate::coord::{Coord, FracHex, HexCoord};
use crate::error::GridError;
use crate::geom::Vec2;
use crate::grid::Grid;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Forward (hex → pixel) and inverse (pixel → hex) matrices of a layout,
/// plus the angle of the first corner in sixths of a turn.
struct Layout {
    f: [f64; 4],
    b: [f64; 4],
    start_angle: f64,
}

const POINTY: Layout = Layout {
    f: [SQRT_3, SQRT_3 / 2.0, 0.0, 3.0 / 2.0],
    b: [SQRT_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0],
    start_angle: 0.5,
};

const FLAT: Layout = Layout {
    f: [3.0 / 2.0, 0.0, SQRT_3 / 2.0, SQRT_3],
    b: [2.0 / 3.0, 0.0, -1.0 / 3.0, SQRT_3 / 3.0],
    start_angle: 0.0,
};

impl Orientation {
    fn layout(self) -> &'static Layout {
        match self {
            Orientation::Pointy => &POINTY,
            Orientation::Flat => &FLAT,
        }
    }
}

/// A hexagon-shaped grid of hexes within `radius` of the center `(0, 0, 0)`,
/// carrying optional payloads of type `T`.
///
/// Every step between adjacent walkable hexes costs the same configured
/// amount; per-hex cost overrides are not supported.
#[derive(Debug, Clone)]
pub struct HexGrid<T> {
    radius: i32,
    hex_size: f64,
    orientation: Orientation,
    origin: Vec2,
    default_movement_cost: f64,
    cells: HashMap<HexCoord, T>,
    walkable: HashMap<HexCoord, bool>,
}

impl<T> HexGrid<T> {
    /// Create a pointy-top grid of unit hexes centered on the world origin.
    pub fn new(radius: i32) -> Self {
        Self::build(HexGridConfig {
            radius,
            ..Default::default()
        })
    }

    /// Create a grid from a full configuration.
    ///
    /// Fails with [`GridError::InvalidDefaultCost`] if
    /// `default_movement_cost` is NaN, zero or negative, the same values
    /// [`SquareGrid::set_movement_cost`](crate::SquareGrid::set_movement_cost)
    /// rejects.
    pub fn with_config(cfg: HexGridConfig) -> Result<Self, GridError> {
        let cost = cfg.default_movement_cost;
        if cost.is_nan() || cost <= 0.0 {
            return Err(GridError::InvalidDefaultCost(cost));
        }
        Ok(Self::build(cfg))
    }

    fn build(cfg: HexGridConfig) -> Self {
        debug_assert!(cfg.hex_size > 0.0, "hex_size must be positive");
        Self {
            radius: cfg.radius,
            hex_size: cfg.hex_size,
            orientation: cfg.orientation,
            origin: cfg.origin,
            default_movement_cost: cfg.default_movement_cost,
            cells: HashMap::new(),
            walkable: HashMap::new(),
        }
    }

    #[inline]
    pub fn radius(&self) -> i32 {
        self.radius
    }

    #[inline]
    pub fn hex_size(&self) -> f64 {
        self.hex_size
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn default_movement_cost(&self) -> f64 {
        self.default_movement_cost
    }

    /// Number of hexes in the grid, `3r(r+1) + 1`.
    pub fn len(&self) -> usize {
        if self.radius < 0 {
            return 0;
        }
        let r = self.radius as usize;
        3 * r * (r + 1) + 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.radius < 0
    }

    /// Every hex of the grid, center first, then ring by ring.
    pub fn coords(&self) -> Vec<HexCoord> {
        if self.radius < 0 {
            return Vec::new();
        }
        HexCoord::ORIGIN.spiral(self.radius)
    }

    fn check(&self, h: HexCoord) -> Result<(), GridError> {
        if self.is_valid_coord(h) {
            Ok(())
        } else {
            Err(GridError::InvalidCoord(Coord::Hex(h)))
        }
    }

    // -----------------------------------------------------------------------
    // Payloads
    // -----------------------------------------------------------------------

    /// The payload at `h`, or `None` if the hex is empty or out of bounds.
    pub fn get_cell(&self, h: HexCoord) -> Option<&T> {
        self.cells.get(&h)
    }

    /// Mutable access to the payload at `h`.
    pub fn get_cell_mut(&mut self, h: HexCoord) -> Option<&mut T> {
        self.cells.get_mut(&h)
    }

    /// Store `value` at `h`, returning the previous payload.
    pub fn set_cell(&mut self, h: HexCoord, value: T) -> Result<Option<T>, GridError> {
        self.check(h)?;
        Ok(self.cells.insert(h, value))
    }

    /// Remove and return the payload at `h`.
    pub fn clear_cell(&mut self, h: HexCoord) -> Option<T> {
        self.cells.remove(&h)
    }

    /// Remove every payload. Walkability is kept.
    pub fn clear_all_cells(&mut self) {
        self.cells.clear();
    }

    /// Iterator over occupied hexes, in no particular order.
    pub fn occupied(&self) -> impl Iterator<Item = (HexCoord, &T)> {
        self.cells.iter().map(|(h, v)| (*h, v))
    }

    /// Mark `h` as walkable or blocked.
    pub fn set_walkable(&mut self, h: HexCoord, walkable: bool) -> Result<(), GridError> {
        self.check(h)?;
        self.walkable.insert(h, walkable);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Geometry
    // -----------------------------------------------------------------------

    /// Cube distance between two hexes.
    #[inline]
    pub fn distance(&self, a: HexCoord, b: HexCoord) -> i32 {
        a.distance(b)
    }

    /// Hexes at exactly `radius` from `center`. Not clipped to the grid.
    pub fn ring(&self, center: HexCoord, radius: i32) -> Vec<HexCoord> {
        center.ring(radius)
    }

    /// `center` plus every ring up to `radius`. Not clipped to the grid.
    pub fn spiral(&self, center: HexCoord, radius: i32) -> Vec<HexCoord> {
        center.spiral(radius)
    }

    /// Straight line of hexes from `from` to `to`. Not clipped to the grid.
    pub fn line(&self, from: HexCoord, to: HexCoord) -> Vec<HexCoord> {
        from.line_to(to)
    }

    /// Grid hexes within `range` of `center`, spiral order.
    pub fn cells_in_range(&self, center: HexCoord, range: i32) -> Vec<HexCoord> {
        if range < 0 {
            return Vec::new();
        }
        center
            .spiral(range)
            .into_iter()
            .filter(|&h| self.is_valid_coord(h))
            .collect()
    }

    /// In-grid neighbours of `h`, in [`HexCoord::DIRECTIONS`] order.
    pub fn neighbors_of(&self, h: HexCoord) -> Vec<HexCoord> {
        let mut buf = Vec::with_capacity(6);
        self.neighbors(h, &mut buf);
        buf
    }

    /// The six world-space corners of `h`, for drawing its outline.
    pub fn corners(&self, h: HexCoord) -> [Vec2; 6] {
        let center = self.cell_to_world(h);
        let start = self.orientation.layout().start_angle;
        std::array::from_fn(|i| {
            let angle = 2.0 * PI * (start + i as f64) / 6.0;
            center + Vec2::new(angle.cos(), angle.sin()) * self.hex_size
        })
    }
}

impl<T> Grid for HexGrid<T> {
    type Coord = HexCoord;

    #[inline]
    fn is_valid_coord(&self, h: HexCoord) -> bool {
        h.is_cube() && h.length() <= self.radius
    }

    fn is_walkable(&self, h: HexCoord) -> bool {
        self.is_valid_coord(h) && self.walkable.get(&h).copied().unwrap_or(true)
    }

    fn movement_cost(&self, from: HexCoord, to: HexCoord) -> f64 {
        if !self.is_valid_coord(from) || !self.is_walkable(to) || from.distance(to) != 1 {
            return f64::INFINITY;
        }
        self.default_movement_cost
    }

    fn neighbors(&self, h: HexCoord, buf: &mut Vec<HexCoord>) {
        buf.extend(
            h.neighbors()
                .into_iter()
                .filter(|n| n.length() <= self.radius),
        );
    }

    /// Always cube distance scaled by the step cost; `heuristic` only
    /// applies to square grids.
    fn estimate(&self, from: HexCoord, to: HexCoord, _heuristic: Heuristic) -> f64 {
        from.distance(to) as f64 * self.default_movement_cost
    }

    fn cell_to_world(&self, h: HexCoord) -> Vec2 {
        let m = &self.orientation.layout().f;
        let q = h.q as f64;
        let r = h.r as f64;
        Vec2::new(m[0] * q + m[1] * r, m[2] * q + m[3] * r) * self.hex_size + self.origin
    }

    fn world_to_cell(&self, pos: Vec2) -> HexCoord {
        let m = &self.orientation.layout().b;
        let p = (pos - self.origin) / self.hex_size;
        FracHex::new(m[0] * p.x + m[1] * p.y, m[2] * p.x + m[3] * p.y).round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn validity_requires_cube_and_radius() {
        let g: HexGrid<()> = HexGrid::new(2);
        assert!(g.is_valid_coord(HexCoord::ORIGIN));
        assert!(g.is_valid_coord(HexCoord::new(2, -2)));
        assert!(!g.is_valid_coord(HexCoord::new(3, -1)));
        assert!(!g.is_valid_coord(HexCoord::cube(1, 0, 0)));
        assert_eq!(g.len(), 19);
        assert_eq!(g.coords().len(), 19);
        assert!(g.coords().iter().all(|&h| g.is_valid_coord(h)));
    }

    #[test]
    fn set_cell_outside_radius_fails() {
        let mut g: HexGrid<char> = HexGrid::new(1);
        assert!(g.set_cell(HexCoord::new(1, 0), 'a').is_ok());
        let err = g.set_cell(HexCoord::new(2, 0), 'b').unwrap_err();
        assert_eq!(err, GridError::InvalidCoord(Coord::Hex(HexCoord::new(2, 0))));
        assert!(g.set_cell(HexCoord::cube(0, 0, 1), 'c').is_err());
        assert_eq!(g.get_cell(HexCoord::new(2, 0)), None);
        assert_eq!(g.clear_cell(HexCoord::new(1, 0)), Some('a'));
    }

    #[test]
    fn neighbors_clip_at_radius() {
        let g: HexGrid<()> = HexGrid::new(2);
        assert_eq!(g.neighbors_of(HexCoord::ORIGIN).len(), 6);
        // corner hex of the big hexagon
        assert_eq!(g.neighbors_of(HexCoord::new(2, 0)).len(), 3);
        // edge hex
        assert_eq!(g.neighbors_of(HexCoord::new(2, -1)).len(), 4);
    }

    #[test]
    fn movement_cost_only_for_adjacent_walkable() {
        let mut g: HexGrid<()> = HexGrid::with_config(HexGridConfig {
            radius: 3,
            default_movement_cost: 2.5,
            ..Default::default()
        })
        .unwrap();
        let a = HexCoord::ORIGIN;
        assert_eq!(g.movement_cost(a, HexCoord::new(1, 0)), 2.5);
        assert_eq!(g.movement_cost(a, HexCoord::new(2, 0)), f64::INFINITY);
        assert_eq!(g.movement_cost(a, a), f64::INFINITY);
        g.set_walkable(HexCoord::new(0, 1), false).unwrap();
        assert!(!g.is_walkable(HexCoord::new(0, 1)));
        assert_eq!(g.movement_cost(a, HexCoord::new(0, 1)), f64::INFINITY);
        assert_eq!(
            g.movement_cost(HexCoord::new(3, 0), HexCoord::new(4, 0)),
            f64::INFINITY
        );
        assert!(g.set_walkable(HexCoord::new(4, 0), false).is_err());
    }

    #[test]
    fn with_config_rejects_bad_step_cost() {
        for cost in [0.0, -1.0, f64::NAN] {
            let err = HexGrid::<()>::with_config(HexGridConfig {
                radius: 2,
                default_movement_cost: cost,
                ..Default::default()
            })
            .unwrap_err();
            assert!(matches!(err, GridError::InvalidDefaultCost(_)));
            assert_eq!(err.coord(), None);
        }
        let g = HexGrid::<()>::with_config(HexGridConfig {
            default_movement_cost: 0.25,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(g.default_movement_cost(), 0.25);
    }

    #[test]
    fn pointy_world_round_trip() {
        let g: HexGrid<()> = HexGrid::with_config(HexGridConfig {
            radius: 4,
            hex_size: 12.0,
            origin: Vec2::new(50.0, 20.0),
            ..Default::default()
        })
        .unwrap();
        assert!(approx(
            g.cell_to_world(HexCoord::new(1, 0)),
            Vec2::new(50.0 + 12.0 * SQRT_3, 20.0)
        ));
        for h in g.coords() {
            assert_eq!(g.world_to_cell(g.cell_to_world(h)), h);
        }
    }

    #[test]
    fn flat_world_round_trip() {
        let g: HexGrid<()> = HexGrid::with_config(HexGridConfig {
            radius: 4,
            hex_size: 5.0,
            orientation: Orientation::Flat,
            ..Default::default()
        })
        .unwrap();
        assert!(approx(
            g.cell_to_world(HexCoord::new(1, 0)),
            Vec2::new(7.5, 5.0 * SQRT_3 / 2.0)
        ));
        for h in g.coords() {
            let p = g.cell_to_world(h);
            assert_eq!(g.world_to_cell(p), h);
            // points just inside the hex still land in it
            assert_eq!(g.world_to_cell(p + Vec2::new(1.0, -1.0)), h);
        }
    }

    #[test]
    fn world_to_cell_is_not_clamped() {
        let g: HexGrid<()> = HexGrid::new(1);
        let far = g.world_to_cell(Vec2::new(100.0, 0.0));
        assert!(far.is_cube());
        assert!(!g.is_valid_coord(far));
    }

    #[test]
    fn corners_sit_on_circumradius() {
        for orientation in [Orientation::Pointy, Orientation::Flat] {
            let g: HexGrid<()> = HexGrid::with_config(HexGridConfig {
                hex_size: 3.0,
                orientation,
                ..Default::default()
            })
            .unwrap();
            let h = HexCoord::new(1, -1);
            let center = g.cell_to_world(h);
            let corners = g.corners(h);
            for c in corners {
                assert!((c.distance(center) - 3.0).abs() < 1e-9);
            }
            // adjacent corners are one side length apart
            assert!((corners[0].distance(corners[1]) - 3.0).abs() < 1e-9);
        }
        let flat: HexGrid<()> = HexGrid::with_config(HexGridConfig {
            orientation: Orientation::Flat,
            ..Default::default()
        })
        .unwrap();
        assert!(approx(flat.corners(HexCoord::ORIGIN)[0], Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn range_is_clipped_to_grid() {
        let g: HexGrid<()> = HexGrid::new(2);
        assert_eq!(g.cells_in_range(HexCoord::ORIGIN, 1).len(), 7);
        assert_eq!(g.cells_in_range(HexCoord::ORIGIN, 5).len(), 19);
        let edge: HashSet<_> = g.cells_in_range(HexCoord::new(2, 0), 1).into_iter().collect();
        assert_eq!(edge.len(), 4);
        assert!(g.cells_in_range(HexCoord::ORIGIN, -1).is_empty());
    }

    #[test]
    fn ring_and_line_delegate() {
        let g: HexGrid<()> = HexGrid::new(3);
        assert_eq!(g.ring(HexCoord::ORIGIN, 2).len(), 12);
        assert_eq!(g.ring(HexCoord::new(1, 1), 0), vec![HexCoord::new(1, 1)]);
        assert_eq!(g.spiral(HexCoord::ORIGIN, 1).len(), 7);
        let line = g.line(HexCoord::new(-3, 0), HexCoord::new(3, 0));
        assert_eq!(line.len(), 7);
        assert_eq!(g.distance(HexCoord::new(-3, 0), HexCoord::new(3, 0)), 6);
    }

    #[test]
    fn estimate_ignores_selector() {
        let g: HexGrid<()> = HexGrid::new(5);
        let a = HexCoord::ORIGIN;
        let b = HexCoord::new(3, -1);
        for h in [Heuristic::Manhattan, Heuristic::Euclidean, Heuristic::Chebyshev] {
            assert_eq!(g.estimate(a, b, h), 3.0);
        }
    }
}
