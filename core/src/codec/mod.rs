//! codec/mod.rs
//! Whole-artifact encode and decode.
//!
//! Encode: count frequencies, build the tree, assign codes, write the
//! preamble and code table, then pack the payload in a second pass.
//!
//! Decode: parse the preamble and code table, build a trie, walk exactly
//! `bit_length` bits, then check length and checksum.

pub mod types;
pub mod trie;
pub mod encode;
pub mod decode;

pub use types::{ApiConfig, EncodeParams, EncodePlan, EncodedPayload};
pub use trie::{DecodeTrie, Step};
pub use encode::{encode, encode_payload, encode_stream, encode_symbols, plan_encoding, write_prefix};
pub use decode::{
    decode, decode_payload, decode_stream, decode_symbols, parse_artifact, read_artifact_prefix,
    ArtifactPrefix,
};
