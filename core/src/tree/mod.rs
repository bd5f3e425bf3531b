//! tree/mod.rs
//! Huffman tree construction from symbol frequencies.
//!
//! Notes:
//! - Leaves enter the heap in ascending symbol order.
//! - Ties on weight break by `HeapEntry::order`, so the same input always
//!   yields the same tree.
//! - A single distinct symbol yields a root-only tree (a bare leaf).

pub mod heap;
pub mod node;

pub use heap::{HeapError, MinHeap};
pub use node::{HeapEntry, HuffNode};

use log::trace;

use crate::constants::INTERNAL_ORDER_BASE;
use crate::frequency::FrequencyTable;
use crate::types::{HuffmanError, PreconditionError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffNode,
}

impl HuffmanTree {
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_frequencies(&FrequencyTable::from_bytes(data))
    }

    /// Build the tree bottom-up: pop the two lightest nodes, merge, push back.
    pub fn from_frequencies(freq: &FrequencyTable) -> Result<Self> {
        if freq.is_empty() {
            return Err(HuffmanError::EmptyInput);
        }

        let mut heap = MinHeap::with_capacity(freq.distinct());
        for (symbol, count) in freq.iter() {
            heap.push(HeapEntry::new(HuffNode::leaf(symbol, count), symbol as u32));
        }

        let mut next_order = INTERNAL_ORDER_BASE;
        while heap.len() > 1 {
            let first = heap.pop()?;
            let second = heap.pop()?;
            trace!(
                "merge w={} (order {}) + w={} (order {})",
                first.weight, first.order, second.weight, second.order
            );
            let merged = HuffNode::merge(first.node, second.node)
                .ok_or(PreconditionError::CountOverflow)?;
            heap.push(HeapEntry::new(merged, next_order));
            next_order += 1;
        }

        let root = heap.into_single()?.node;
        Ok(Self { root })
    }

    pub fn root(&self) -> &HuffNode {
        &self.root
    }

    /// Total weight, equal to the number of symbols the tree was built from.
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    pub fn is_single_leaf(&self) -> bool {
        self.root.is_leaf()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes().filter(|(n, _)| n.is_leaf()).count()
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.nodes().map(|(_, d)| d).max().unwrap_or(0)
    }

    /// Check `weight == left.weight + right.weight` on every internal node.
    pub fn validate(&self) -> bool {
        self.nodes().all(|(n, _)| match n {
            HuffNode::Leaf { .. } => true,
            HuffNode::Internal { weight, left, right } => *weight == left.weight() + right.weight(),
        })
    }

    /// Pre-order walk with an explicit stack, yielding `(node, depth)`.
    fn nodes(&self) -> impl Iterator<Item = (&HuffNode, usize)> + '_ {
        let mut stack = vec![(&self.root, 0usize)];
        std::iter::from_fn(move || {
            let (node, depth) = stack.pop()?;
            if let HuffNode::Internal { left, right, .. } = node {
                stack.push((right.as_ref(), depth + 1));
                stack.push((left.as_ref(), depth + 1));
            }
            Some((node, depth))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_rejected() {
        let err = HuffmanTree::from_bytes(b"").unwrap_err();
        assert!(matches!(err, HuffmanError::EmptyInput));
    }

    #[test]
    fn single_symbol_is_bare_leaf() {
        let tree = HuffmanTree::from_bytes(b"zzzz").unwrap();
        assert!(tree.is_single_leaf());
        assert_eq!(tree.weight(), 4);
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn root_weight_is_input_length() {
        let tree = HuffmanTree::from_bytes(b"aaabbc").unwrap();
        assert_eq!(tree.weight(), 6);
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(tree.depth(), 2);
        assert!(tree.validate());
    }

    #[test]
    fn construction_is_deterministic() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let a = HuffmanTree::from_bytes(data).unwrap();
        let b = HuffmanTree::from_bytes(data).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn equal_weights_merge_lowest_symbols_first() {
        let freq = FrequencyTable::from_counts([(b'c', 1), (b'a', 1), (b'b', 1)]).unwrap();
        let tree = HuffmanTree::from_frequencies(&freq).unwrap();
        // a+b merge first (orders 97, 98), then c (order 99) sorts before the internal node
        match tree.root() {
            HuffNode::Internal { left, right, .. } => {
                assert_eq!(**left, HuffNode::leaf(b'c', 1));
                assert!(!right.is_leaf());
            }
            other => panic!("unexpected root: {:?}", other),
        }
    }

    #[test]
    fn full_alphabet_tree_is_valid() {
        let data: Vec<u8> = (0..=255u8).flat_map(|b| std::iter::repeat(b).take(b as usize + 1)).collect();
        let tree = HuffmanTree::from_bytes(&data).unwrap();
        assert_eq!(tree.leaf_count(), 256);
        assert!(tree.validate());
    }
}
