//! codes/generate.rs
//! Derive a code table from a Huffman tree.

use log::debug;

use crate::codes::code::Code;
use crate::codes::table::{CodeStyle, CodeTable};
use crate::constants::{MAX_CODE_LEN, SINGLE_SYMBOL_CODE_LEN};
use crate::tree::{HuffNode, HuffmanTree};
use crate::types::PreconditionError;

/// Walk the tree depth-first, `0` for left and `1` for right.
///
/// Uses an explicit stack; a skewed tree over 256 symbols is 255 deep.
/// A root-only tree gets the 1-bit code `0` so the code is never empty.
pub fn tree_codes(tree: &HuffmanTree) -> Result<CodeTable, PreconditionError> {
    let mut table = CodeTable::new();

    if let HuffNode::Leaf { symbol, .. } = tree.root() {
        let code = Code::empty()
            .widened(SINGLE_SYMBOL_CODE_LEN as usize)
            .ok_or(PreconditionError::CodeTooLong { depth: 1, max: MAX_CODE_LEN })?;
        table.insert(*symbol, code);
        return Ok(table);
    }

    let mut stack: Vec<(&HuffNode, Code)> = vec![(tree.root(), Code::empty())];
    while let Some((node, path)) = stack.pop() {
        match node {
            HuffNode::Leaf { symbol, .. } => {
                table.insert(*symbol, path);
            }
            HuffNode::Internal { left, right, .. } => {
                // depth <= leaf count - 1 <= 255 for byte symbols
                let too_long = PreconditionError::CodeTooLong { depth: path.len() + 1, max: MAX_CODE_LEN };
                let (Some(l), Some(r)) = (path.with_bit(false), path.with_bit(true)) else {
                    return Err(too_long);
                };
                stack.push((right.as_ref(), r));
                stack.push((left.as_ref(), l));
            }
        }
    }
    Ok(table)
}

/// Keep the lengths of `table`, reassign codes canonically.
///
/// Symbols are ordered by (length, symbol). The first gets all zeros; each
/// next code is the previous plus one, widened with zeros to its length.
pub fn canonicalize(table: &CodeTable) -> Result<CodeTable, PreconditionError> {
    let mut order: Vec<(usize, u8)> = table.iter().map(|(s, c)| (c.len(), s)).collect();
    order.sort_unstable();

    let mut out = CodeTable::new();
    let mut prev: Option<Code> = None;
    for (len, symbol) in order {
        let next = match prev {
            None => Code::empty().widened(len),
            Some(p) => p.incremented().and_then(|c| c.widened(len)),
        };
        // Kraft equality of a full tree keeps the increment in range
        let Some(code) = next else {
            debug!("canonical assignment overflowed at symbol {}", symbol);
            return Err(PreconditionError::CanonicalOverflow { symbol });
        };
        out.insert(symbol, code);
        prev = Some(code);
    }
    Ok(out)
}

pub fn generate_codes(tree: &HuffmanTree, style: CodeStyle) -> Result<CodeTable, PreconditionError> {
    let table = tree_codes(tree)?;
    match style {
        CodeStyle::Tree => Ok(table),
        CodeStyle::Canonical => canonicalize(&table),
    }
}
