//! Bit-level packing for the artifact payload.
//!
//! Responsibilities:
//! - Pack codes MSB-first into bytes, zero-padding the final byte
//! - Unpack exactly `bit_length` bits, never interpreting padding
//!
//! Non-responsibilities:
//! - Header and code table layout (see `headers`)
//! - Symbol lookup (see `codec::trie`)

pub mod reader;
pub mod writer;

pub use reader::BitReader;
pub use writer::BitWriter;
