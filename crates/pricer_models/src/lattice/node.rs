//! Lattice storage.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest supported number of time points. The grid holds N² nodes.
pub const MAX_TIME_POINTS: usize = 10_000;

/// One cell of the binomial tree.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatticeNode {
    /// Projected price of the underlying at this node.
    pub underlying: f64,
    /// Backward-induced discounted option value at this node.
    pub payoff: f64,
}

/// Square (N × N) grid of [`LatticeNode`], stored row-major.
///
/// Node `(i, j)` is the state after `j` time steps with `i` up-moves, so only
/// the region `0 <= i <= j < N` is populated. Cells with `i > j` stay at their
/// default and are never exposed through [`Lattice::node`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Lattice {
    size: usize,
    nodes: Vec<LatticeNode>,
}

impl Lattice {
    /// Allocates an empty grid for `size` time points.
    ///
    /// Callers bound `size` by [`MAX_TIME_POINTS`].
    pub(crate) fn new(size: usize) -> Self {
        Self {
            size,
            nodes: vec![LatticeNode::default(); size * size],
        }
    }

    /// Number of time points (N).
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns node `(i, j)`, or `None` outside `0 <= i <= j < N`.
    #[inline]
    pub fn node(&self, i: usize, j: usize) -> Option<&LatticeNode> {
        if i <= j && j < self.size {
            self.nodes.get(i * self.size + j)
        } else {
            None
        }
    }

    /// Nodes of time layer `j`, ordered by number of up-moves.
    pub fn layer(&self, j: usize) -> impl Iterator<Item = &LatticeNode> + '_ {
        (0..=j).filter_map(move |i| self.node(i, j))
    }

    #[inline]
    pub(crate) fn at(&self, i: usize, j: usize) -> &LatticeNode {
        debug_assert!(i <= j && j < self.size);
        &self.nodes[i * self.size + j]
    }

    #[inline]
    pub(crate) fn at_mut(&mut self, i: usize, j: usize) -> &mut LatticeNode {
        debug_assert!(i <= j && j < self.size);
        &mut self.nodes[i * self.size + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_triangle_hidden() {
        let lattice = Lattice::new(3);
        assert!(lattice.node(0, 0).is_some());
        assert!(lattice.node(1, 2).is_some());
        assert!(lattice.node(2, 1).is_none());
        assert!(lattice.node(0, 3).is_none());
    }

    #[test]
    fn test_layer_lengths() {
        let lattice = Lattice::new(4);
        assert_eq!(lattice.layer(0).count(), 1);
        assert_eq!(lattice.layer(3).count(), 4);
        assert_eq!(lattice.layer(4).count(), 0);
    }

    #[test]
    fn test_at_mut_writes_through() {
        let mut lattice = Lattice::new(2);
        lattice.at_mut(1, 1).underlying = 110.0;
        assert_eq!(lattice.node(1, 1).unwrap().underlying, 110.0);
        assert_eq!(lattice.at(0, 1).underlying, 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_lattice_serialises_row_major() {
        let mut lattice = Lattice::new(2);
        lattice.at_mut(0, 0).underlying = 100.0;
        let value = serde_json::to_value(&lattice).unwrap();
        assert_eq!(value["size"], 2);
        assert_eq!(value["nodes"].as_array().map(Vec::len), Some(4));
        assert_eq!(value["nodes"][0]["underlying"], 100.0);

        let node: LatticeNode =
            serde_json::from_str(r#"{"underlying":1.5,"payoff":0.5}"#).unwrap();
        assert_eq!(node, LatticeNode { underlying: 1.5, payoff: 0.5 });
    }
}
