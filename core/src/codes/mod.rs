//! codes/mod.rs
//! Code assignment over a Huffman tree.
//!
//! Notes:
//! - Codes are prefix-free because they come only from leaves of a full
//!   binary tree; canonical reassignment keeps the lengths and so the property.
//! - The decoder never needs to know the style, codes are stored explicitly.

pub mod code;
pub mod table;
pub mod generate;

pub use code::Code;
pub use table::{CodeStyle, CodeTable};
pub use generate::{canonicalize, generate_codes, tree_codes};
