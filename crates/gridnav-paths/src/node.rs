use std::cmp::Ordering;

/// A position with the accumulated cost of reaching it, returned from
/// reachability queries.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode<C> {
    pub pos: C,
    pub cost: f64,
}

// ---------------------------------------------------------------------------
// Open-list entry for A*
// ---------------------------------------------------------------------------

/// An A* open-list entry, ordered so that `BinaryHeap` (a max-heap) pops the
/// smallest `f` first and, among equal `f`, the entry pushed first.
#[derive(Clone, Copy, Debug)]
pub(crate) struct OpenEntry<C> {
    pub(crate) coord: C,
    pub(crate) g: f64,
    pub(crate) f: f64,
    pub(crate) seq: u64,
}

impl<C> Ord for OpenEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<C> PartialOrd for OpenEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C> PartialEq for OpenEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C> Eq for OpenEntry<C> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn entry(coord: u8, f: f64, seq: u64) -> OpenEntry<u8> {
        OpenEntry {
            coord,
            g: 0.0,
            f,
            seq,
        }
    }

    #[test]
    fn heap_pops_lowest_f_then_oldest() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(1, 5.0, 0));
        heap.push(entry(2, 3.0, 1));
        heap.push(entry(3, 3.0, 2));
        heap.push(entry(4, 4.0, 3));
        let order: Vec<u8> = std::iter::from_fn(|| heap.pop().map(|e| e.coord)).collect();
        assert_eq!(order, vec![2, 3, 4, 1]);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use gridnav_core::{GridCoord, HexCoord};

    #[test]
    fn pathnode_round_trip() {
        let node = PathNode {
            pos: GridCoord::new(3, 7),
            cost: 4.5,
        };
        let json = serde_json::to_string(&node).unwrap();
        let back: PathNode<GridCoord> = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);

        let hex = PathNode {
            pos: HexCoord::new(-1, 2),
            cost: 2.0,
        };
        let json = serde_json::to_string(&hex).unwrap();
        let back: PathNode<HexCoord> = serde_json::from_str(&json).unwrap();
        assert_eq!(hex, back);
    }
}
