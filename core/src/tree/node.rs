//! tree/node.rs
//! Tree nodes and the heap entry wrapper that orders them.

use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    Leaf {
        symbol: u8,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn leaf(symbol: u8, weight: u64) -> Self {
        HuffNode::Leaf { symbol, weight }
    }

    /// Combine two subtrees; `left` is the one popped first.
    /// `None` if the combined weight overflows.
    pub fn merge(left: HuffNode, right: HuffNode) -> Option<Self> {
        Some(HuffNode::Internal {
            weight: left.weight().checked_add(right.weight())?,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn weight(&self) -> u64 {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }
}

/// Heap element: a subtree keyed by `(weight, order)`.
///
/// `order` is the symbol for leaves and `INTERNAL_ORDER_BASE + n` for the
/// n-th merged node, so equal weights resolve the same way on every run.
#[derive(Debug)]
pub struct HeapEntry {
    pub weight: u64,
    pub order: u32,
    pub node: HuffNode,
}

impl HeapEntry {
    pub fn new(node: HuffNode, order: u32) -> Self {
        Self { weight: node.weight(), order, node }
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.order == other.order
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then(self.order.cmp(&other.order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_sums_weights() {
        let n = HuffNode::merge(HuffNode::leaf(b'a', 3), HuffNode::leaf(b'b', 4)).unwrap();
        assert_eq!(n.weight(), 7);
        assert!(!n.is_leaf());
    }

    #[test]
    fn merge_rejects_weight_overflow() {
        assert!(HuffNode::merge(HuffNode::leaf(0, u64::MAX), HuffNode::leaf(1, 1)).is_none());
    }
}
