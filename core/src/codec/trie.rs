//! codec/trie.rs
//! Binary trie over stored codes for O(1)-per-bit decoding.

use crate::codes::CodeTable;
use crate::headers::FormatError;

const NONE: u32 = 0; // the root is never a child, so index 0 doubles as "absent"

#[derive(Clone, Debug, Default)]
struct TrieNode {
    children: [u32; 2],
    symbol: Option<u8>,
}

impl TrieNode {
    fn has_children(&self) -> bool {
        self.children != [NONE, NONE]
    }
}

/// Result of feeding one bit to the trie.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Inside a code; keep reading from this node.
    Partial(u32),
    /// A code completed; the walk is back at the root.
    Symbol(u8),
    /// No code continues with this bit.
    Dead,
}

/// Arena-backed trie. Leaves carry symbols; every code ends at a leaf.
#[derive(Clone, Debug)]
pub struct DecodeTrie {
    nodes: Vec<TrieNode>,
}

impl DecodeTrie {
    pub const ROOT: u32 = 0;

    /// Build from a code table, rejecting codes that are equal to or a
    /// prefix of another code.
    pub fn from_table(table: &CodeTable) -> Result<Self, FormatError> {
        let mut nodes = Vec::with_capacity(2 * table.len());
        nodes.push(TrieNode::default());

        for (symbol, code) in table.iter() {
            if code.is_empty() {
                return Err(FormatError::InvalidCodeLength { symbol, len: 0 });
            }
            let mut at = Self::ROOT as usize;
            for bit in code.bits() {
                if nodes[at].symbol.is_some() {
                    // an earlier code is a prefix of this one
                    return Err(FormatError::ConflictingCode { symbol });
                }
                let next = nodes[at].children[bit as usize];
                at = if next == NONE {
                    let idx = nodes.len();
                    nodes.push(TrieNode::default());
                    nodes[at].children[bit as usize] = idx as u32;
                    idx
                } else {
                    next as usize
                };
            }
            if nodes[at].symbol.is_some() || nodes[at].has_children() {
                return Err(FormatError::ConflictingCode { symbol });
            }
            nodes[at].symbol = Some(symbol);
        }

        Ok(Self { nodes })
    }

    #[inline]
    pub fn step(&self, at: u32, bit: bool) -> Step {
        let next = self.nodes[at as usize].children[bit as usize];
        if next == NONE {
            return Step::Dead;
        }
        match self.nodes[next as usize].symbol {
            Some(symbol) => Step::Symbol(symbol),
            None => Step::Partial(next),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::Code;

    fn table(entries: &[(u8, &str)]) -> CodeTable {
        let mut t = CodeTable::new();
        for (s, c) in entries {
            t.insert(*s, Code::parse(c).unwrap());
        }
        t
    }

    #[test]
    fn walks_to_symbols() {
        let trie = DecodeTrie::from_table(&table(&[(b'a', "0"), (b'b', "10"), (b'c', "11")])).unwrap();
        assert_eq!(trie.step(DecodeTrie::ROOT, false), Step::Symbol(b'a'));
        let Step::Partial(n) = trie.step(DecodeTrie::ROOT, true) else {
            panic!("expected partial step");
        };
        assert_eq!(trie.step(n, false), Step::Symbol(b'b'));
        assert_eq!(trie.step(n, true), Step::Symbol(b'c'));
    }

    #[test]
    fn single_code_has_dead_branch() {
        let trie = DecodeTrie::from_table(&table(&[(b'x', "0")])).unwrap();
        assert_eq!(trie.step(DecodeTrie::ROOT, false), Step::Symbol(b'x'));
        assert_eq!(trie.step(DecodeTrie::ROOT, true), Step::Dead);
    }

    #[test]
    fn full_table_has_one_node_per_tree_node() {
        let trie = DecodeTrie::from_table(&table(&[
            (b'a', "0"),
            (b'b', "100"),
            (b'c', "101"),
            (b'd', "110"),
            (b'e', "111"),
        ]))
        .unwrap();
        // root + 3 internal + 5 leaves = 2 * leaves - 1
        assert_eq!(trie.node_count(), 2 * 5 - 1);
    }

    #[test]
    fn prefix_conflicts_are_rejected() {
        // shorter code inserted first (symbol order)
        let err = DecodeTrie::from_table(&table(&[(b'a', "1"), (b'b', "10")])).unwrap_err();
        assert_eq!(err, FormatError::ConflictingCode { symbol: b'b' });
        // longer code inserted first
        let err = DecodeTrie::from_table(&table(&[(b'a', "10"), (b'b', "1")])).unwrap_err();
        assert_eq!(err, FormatError::ConflictingCode { symbol: b'b' });
        // identical codes
        let err = DecodeTrie::from_table(&table(&[(b'a', "01"), (b'b', "01")])).unwrap_err();
        assert_eq!(err, FormatError::ConflictingCode { symbol: b'b' });
    }
}
