//! headers/mod.rs
//! Artifact layout ahead of the payload.
//!
//! ```text
//! [ preamble (18) ]  magic, version, flags, crc32, original_len
//! [ code table    ]  size + (symbol, code_length, code_bits) entries
//! [ bit_length (8)]  meaningful payload bits
//! [ payload       ]  ceil(bit_length / 8) bytes, MSB-first
//! ```
//!
//! Notes:
//! - Little-endian for every multi-byte integer.
//! - Bump the version byte when the layout changes.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
