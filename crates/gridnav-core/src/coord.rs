//! Coordinate families: [`GridCoord`] for square grids, [`HexCoord`] (cube
//! coordinates) for hexagonal grids, and the [`Coord`] tagged union.
//!
//! Every coordinate has a canonical string key (`"x,y"` or `"q,r,s"`) that
//! round-trips through [`FromStr`]. Grids key their storage by the coordinate
//! value itself, so two coordinates with equal components always address the
//! same cell.

use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use crate::error::ParseCoordError;

/// Tolerance used when checking the `q + r + s = 0` invariant on fractional
/// cube coordinates.
pub const CUBE_TOLERANCE: f64 = 1e-3;

fn parse_components<const N: usize>(key: &str) -> Result<[i32; N], ParseCoordError> {
    let parts: Vec<&str> = key.split(',').collect();
    if parts.len() != N {
        return Err(ParseCoordError::Arity {
            key: key.to_string(),
            expected: N,
            found: parts.len(),
        });
    }
    let mut out = [0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .trim()
            .parse()
            .map_err(|_| ParseCoordError::Component {
                key: key.to_string(),
                component: part.to_string(),
            })?;
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// GridCoord
// ---------------------------------------------------------------------------

/// A cell on a square grid. X grows right, Y grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
}

impl GridCoord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a coordinate shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The four cardinal neighbours: north, east, south, west.
    #[inline]
    pub fn neighbors_4(self) -> [GridCoord; 4] {
        [
            Self::new(self.x, self.y - 1),
            Self::new(self.x + 1, self.y),
            Self::new(self.x, self.y + 1),
            Self::new(self.x - 1, self.y),
        ]
    }

    /// The four diagonal neighbours: north-east, south-east, south-west,
    /// north-west.
    #[inline]
    pub fn diagonals(self) -> [GridCoord; 4] {
        [
            Self::new(self.x + 1, self.y - 1),
            Self::new(self.x + 1, self.y + 1),
            Self::new(self.x - 1, self.y + 1),
            Self::new(self.x - 1, self.y - 1),
        ]
    }

    /// All eight neighbours, cardinals first (N, E, S, W, NE, SE, SW, NW).
    #[inline]
    pub fn neighbors_8(self) -> [GridCoord; 8] {
        let [n, e, s, w] = self.neighbors_4();
        let [ne, se, sw, nw] = self.diagonals();
        [n, e, s, w, ne, se, sw, nw]
    }

    /// Manhattan (L1) distance.
    #[inline]
    pub fn manhattan(self, other: Self) -> i32 {
        let d = self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y));
        i32::try_from(d).unwrap_or(i32::MAX)
    }

    /// Chebyshev (L∞) distance.
    #[inline]
    pub fn chebyshev(self, other: Self) -> i32 {
        let d = self.x.abs_diff(other.x).max(self.y.abs_diff(other.y));
        i32::try_from(d).unwrap_or(i32::MAX)
    }

    /// Canonical map key, `"x,y"`.
    pub fn key(self) -> String {
        format!("{},{}", self.x, self.y)
    }
}

impl PartialOrd for GridCoord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GridCoord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for GridCoord {
    type Err = ParseCoordError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let [x, y] = parse_components::<2>(key)?;
        Ok(Self::new(x, y))
    }
}

impl From<(i32, i32)> for GridCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for GridCoord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for GridCoord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for GridCoord {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

// ---------------------------------------------------------------------------
// HexCoord
// ---------------------------------------------------------------------------

/// A cell on a hexagonal grid in cube coordinates.
///
/// Valid cube coordinates satisfy `q + r + s == 0`. [`HexCoord::new`] derives
/// `s` and always produces a valid coordinate; [`HexCoord::cube`] takes all
/// three components verbatim so callers can represent (and grids can reject)
/// broken triples.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
    pub s: i32,
}

impl HexCoord {
    /// The center hex (0, 0, 0).
    pub const ORIGIN: Self = Self { q: 0, r: 0, s: 0 };

    /// The six unit directions, counter-clockwise starting east.
    pub const DIRECTIONS: [HexCoord; 6] = [
        Self::cube(1, 0, -1),
        Self::cube(1, -1, 0),
        Self::cube(0, -1, 1),
        Self::cube(-1, 0, 1),
        Self::cube(-1, 1, 0),
        Self::cube(0, 1, -1),
    ];

    /// Create a coordinate from axial `(q, r)`, deriving `s = -q - r`.
    #[inline]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r, s: -q - r }
    }

    /// Create a coordinate from all three cube components, unchecked.
    #[inline]
    pub const fn cube(q: i32, r: i32, s: i32) -> Self {
        Self { q, r, s }
    }

    /// Whether `q + r + s == 0`.
    #[inline]
    pub const fn is_cube(self) -> bool {
        self.q as i64 + self.r as i64 + self.s as i64 == 0
    }

    /// Neighbour in direction `dir` (taken modulo 6).
    #[inline]
    pub fn neighbor(self, dir: usize) -> Self {
        self + Self::DIRECTIONS[dir % 6]
    }

    /// All six neighbours in [`HexCoord::DIRECTIONS`] order.
    #[inline]
    pub fn neighbors(self) -> [HexCoord; 6] {
        Self::DIRECTIONS.map(|d| self + d)
    }

    /// Distance from the origin, saturating at `i32::MAX`.
    #[inline]
    pub fn length(self) -> i32 {
        cube_length(self.q as i64, self.r as i64, self.s as i64)
    }

    /// Cube distance, `(|Δq| + |Δr| + |Δs|) / 2`, saturating at `i32::MAX`.
    #[inline]
    pub fn distance(self, other: Self) -> i32 {
        cube_length(
            self.q as i64 - other.q as i64,
            self.r as i64 - other.r as i64,
            self.s as i64 - other.s as i64,
        )
    }

    /// The hexes at exactly `radius` steps from `self`, walked edge by edge.
    ///
    /// Returns `6 * radius` coordinates, or just `[self]` for radius 0.
    pub fn ring(self, radius: i32) -> Vec<HexCoord> {
        if radius <= 0 {
            return vec![self];
        }
        let mut out = Vec::with_capacity(6 * radius as usize);
        let mut hex = self + Self::DIRECTIONS[4] * radius;
        for dir in 0..6 {
            for _ in 0..radius {
                out.push(hex);
                hex = hex.neighbor(dir);
            }
        }
        out
    }

    /// `self` followed by every ring from 1 to `radius` (a filled disk).
    pub fn spiral(self, radius: i32) -> Vec<HexCoord> {
        let radius = radius.max(0);
        let r = radius as usize;
        let cap = r
            .checked_mul(r + 1)
            .and_then(|n| n.checked_mul(3))
            .map_or(0, |n| n + 1);
        let mut out = Vec::with_capacity(cap);
        out.push(self);
        for k in 1..=radius {
            out.extend(self.ring(k));
        }
        out
    }

    /// The `distance + 1` hexes on the straight line from `self` to `other`,
    /// both endpoints included.
    pub fn line_to(self, other: Self) -> Vec<HexCoord> {
        let n = self.distance(other);
        if n == 0 {
            return vec![self];
        }
        let a = FracHex::from(self);
        let b = FracHex::from(other);
        (0..=n)
            .map(|i| a.lerp(b, i as f64 / n as f64).round())
            .collect()
    }

    /// Canonical map key, `"q,r,s"`.
    pub fn key(self) -> String {
        format!("{},{},{}", self.q, self.r, self.s)
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.s)
    }
}

impl FromStr for HexCoord {
    type Err = ParseCoordError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let [q, r, s] = parse_components::<3>(key)?;
        Ok(Self::cube(q, r, s))
    }
}

// Computed in i64 so far-away or malformed coordinates cannot overflow.
fn cube_length(dq: i64, dr: i64, ds: i64) -> i32 {
    let n = (dq.abs() + dr.abs() + ds.abs()) / 2;
    i32::try_from(n).unwrap_or(i32::MAX)
}

impl Add for HexCoord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::cube(self.q + rhs.q, self.r + rhs.r, self.s + rhs.s)
    }
}

impl Sub for HexCoord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::cube(self.q - rhs.q, self.r - rhs.r, self.s - rhs.s)
    }
}

impl Mul<i32> for HexCoord {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::cube(self.q * rhs, self.r * rhs, self.s * rhs)
    }
}

// ---------------------------------------------------------------------------
// FracHex
// ---------------------------------------------------------------------------

/// A fractional cube coordinate, produced by pixel conversion and line
/// interpolation before rounding back to a [`HexCoord`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FracHex {
    pub q: f64,
    pub r: f64,
    pub s: f64,
}

impl FracHex {
    /// Create from axial `(q, r)`, deriving `s`.
    #[inline]
    pub fn new(q: f64, r: f64) -> Self {
        Self { q, r, s: -q - r }
    }

    /// Whether `q + r + s` is within [`CUBE_TOLERANCE`] of zero.
    #[inline]
    pub fn is_cube(self) -> bool {
        (self.q + self.r + self.s).abs() <= CUBE_TOLERANCE
    }

    /// Component-wise linear interpolation.
    #[inline]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            q: self.q + (other.q - self.q) * t,
            r: self.r + (other.r - self.r) * t,
            s: self.s + (other.s - self.s) * t,
        }
    }

    /// Round to the nearest hex.
    ///
    /// Each component is rounded on its own; the one that moved the most is
    /// then recomputed from the other two so that `q + r + s == 0` holds
    /// exactly.
    pub fn round(self) -> HexCoord {
        let mut q = self.q.round();
        let mut r = self.r.round();
        let mut s = self.s.round();

        let dq = (q - self.q).abs();
        let dr = (r - self.r).abs();
        let ds = (s - self.s).abs();

        if dq > dr && dq > ds {
            q = -r - s;
        } else if dr > ds {
            r = -q - s;
        } else {
            s = -q - r;
        }

        HexCoord::cube(q as i32, r as i32, s as i32)
    }
}

impl From<HexCoord> for FracHex {
    fn from(h: HexCoord) -> Self {
        Self {
            q: h.q as f64,
            r: h.r as f64,
            s: h.s as f64,
        }
    }
}

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// Either kind of coordinate, for code that must hold both families at once
/// (error reports, mixed lookup tables).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Coord {
    Square(GridCoord),
    Hex(HexCoord),
}

impl Coord {
    /// Canonical map key: `"x,y"` or `"q,r,s"`.
    pub fn key(self) -> String {
        match self {
            Self::Square(c) => c.key(),
            Self::Hex(h) => h.key(),
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Square(c) => c.fmt(f),
            Self::Hex(h) => h.fmt(f),
        }
    }
}

impl FromStr for Coord {
    type Err = ParseCoordError;

    /// Two components decode to a square coordinate, three to a hex one.
    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key.split(',').count() {
            2 => GridCoord::from_str(key).map(Self::Square),
            3 => HexCoord::from_str(key).map(Self::Hex),
            found => Err(ParseCoordError::Arity {
                key: key.to_string(),
                expected: 2,
                found,
            }),
        }
    }
}

impl From<GridCoord> for Coord {
    fn from(c: GridCoord) -> Self {
        Self::Square(c)
    }
}

impl From<HexCoord> for Coord {
    fn from(h: HexCoord) -> Self {
        Self::Hex(h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn grid_key_round_trip() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let c = GridCoord::new(rng.random_range(-1000..1000), rng.random_range(-1000..1000));
            assert_eq!(c.key().parse::<GridCoord>().unwrap(), c);
        }
        assert_eq!(GridCoord::new(-3, 12).key(), "-3,12");
    }

    #[test]
    fn grid_keys_are_injective() {
        let keys: HashSet<String> = (0..20)
            .flat_map(|y| (0..20).map(move |x| GridCoord::new(x, y).key()))
            .collect();
        assert_eq!(keys.len(), 400);
    }

    #[test]
    fn hex_key_round_trip() {
        let h = HexCoord::new(2, -5);
        assert_eq!(h.key(), "2,-5,3");
        assert_eq!("2,-5,3".parse::<HexCoord>().unwrap(), h);
    }

    #[test]
    fn bad_keys_are_rejected() {
        assert!(matches!(
            "1,2,3".parse::<GridCoord>(),
            Err(ParseCoordError::Arity { found: 3, .. })
        ));
        assert!(matches!(
            "1,x".parse::<GridCoord>(),
            Err(ParseCoordError::Component { .. })
        ));
        assert!("".parse::<HexCoord>().is_err());
    }

    #[test]
    fn coord_union_dispatches_on_arity() {
        assert_eq!(
            "4,5".parse::<Coord>().unwrap(),
            Coord::Square(GridCoord::new(4, 5))
        );
        assert_eq!(
            "1,-1,0".parse::<Coord>().unwrap(),
            Coord::Hex(HexCoord::new(1, -1))
        );
        assert!("1".parse::<Coord>().is_err());
        let c = Coord::from(HexCoord::new(0, 2));
        assert_eq!(c.key().parse::<Coord>().unwrap(), c);
    }

    #[test]
    fn neighbor_order() {
        let c = GridCoord::new(5, 5);
        let n = c.neighbors_8();
        assert_eq!(n[0], GridCoord::new(5, 4));
        assert_eq!(n[1], GridCoord::new(6, 5));
        assert_eq!(n[4], GridCoord::new(6, 4));
        assert_eq!(n[7], GridCoord::new(4, 4));
    }

    #[test]
    fn square_distances() {
        let a = GridCoord::new(0, 0);
        let b = GridCoord::new(3, -4);
        assert_eq!(a.manhattan(b), 7);
        assert_eq!(a.chebyshev(b), 4);
    }

    #[test]
    fn hex_new_satisfies_invariant() {
        assert!(HexCoord::new(3, -7).is_cube());
        assert!(!HexCoord::cube(1, 1, 1).is_cube());
        for d in HexCoord::DIRECTIONS {
            assert!(d.is_cube());
            assert_eq!(d.length(), 1);
        }
    }

    #[test]
    fn hex_distance_symmetry() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..300 {
            let a = HexCoord::new(rng.random_range(-20..20), rng.random_range(-20..20));
            let b = HexCoord::new(rng.random_range(-20..20), rng.random_range(-20..20));
            assert_eq!(a.distance(b), b.distance(a));
            assert_eq!(a.distance(a), 0);
            assert!(a.distance(b) >= 0);
        }
    }

    #[test]
    fn ring_sizes_and_distances() {
        let center = HexCoord::new(2, -1);
        assert_eq!(center.ring(0), vec![center]);
        for r in 1..6 {
            let ring = center.ring(r);
            assert_eq!(ring.len(), 6 * r as usize);
            let unique: HashSet<_> = ring.iter().copied().collect();
            assert_eq!(unique.len(), ring.len());
            assert!(ring.iter().all(|h| h.distance(center) == r));
        }
    }

    #[test]
    fn spiral_is_filled_disk() {
        let disk = HexCoord::ORIGIN.spiral(3);
        assert_eq!(disk.len(), 37);
        assert_eq!(disk[0], HexCoord::ORIGIN);
        let unique: HashSet<_> = disk.iter().copied().collect();
        assert_eq!(unique.len(), 37);
        assert!(disk.iter().all(|h| h.length() <= 3));
    }

    #[test]
    fn far_coordinates_do_not_overflow() {
        let far = HexCoord::new(i32::MAX, 0);
        assert!(far.is_cube());
        assert_eq!(far.length(), i32::MAX);
        assert_eq!(HexCoord::new(i32::MIN + 1, 0).length(), i32::MAX);
        assert_eq!(far.distance(HexCoord::new(-i32::MAX, 0)), i32::MAX);
        assert!(!HexCoord::cube(i32::MAX, i32::MAX, 0).is_cube());
        assert!(HexCoord::cube(i32::MAX, i32::MIN, 1).is_cube());
    }

    #[test]
    fn line_has_distance_plus_one_steps() {
        let a = HexCoord::new(0, 0);
        let b = HexCoord::new(4, -2);
        let line = a.line_to(b);
        assert_eq!(line.len(), a.distance(b) as usize + 1);
        assert_eq!(line[0], a);
        assert_eq!(*line.last().unwrap(), b);
        for w in line.windows(2) {
            assert_eq!(w[0].distance(w[1]), 1);
        }
        assert_eq!(a.line_to(a), vec![a]);
    }

    #[test]
    fn cube_round_preserves_invariant() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let f = FracHex::new(rng.random_range(-50.0..50.0), rng.random_range(-50.0..50.0));
            assert!(f.is_cube());
            assert!(f.round().is_cube());
        }
    }

    #[test]
    fn cube_round_sacrifices_largest_error() {
        // q rounds 0.4 -> 0 (err 0.4), r rounds 0.35 -> 0 (err 0.35),
        // s rounds -0.75 -> -1 (err 0.25): q has the largest error and is
        // recomputed from r and s.
        let h = FracHex::new(0.4, 0.35).round();
        assert_eq!(h, HexCoord::cube(1, 0, -1));
        assert_eq!(FracHex::new(2.1, -0.9).round(), HexCoord::new(2, -1));
    }
}
