//! huffman-core
//!
//! Static Huffman compression of byte streams into a self-describing
//! artifact, and the matching decoder.
//! No CLI, no global state.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Model
pub mod frequency;
pub mod tree;
pub mod codes;

// Wire format
pub mod bitstream;
pub mod headers;
pub mod codec;
pub mod telemetry;

// File-level surface
pub mod io;
pub mod api;

pub use api::{decode_file, encode_file, inspect, read_artifact_header, RunOutput};
pub use codec::{
    decode, decode_payload, decode_stream, encode, encode_payload, encode_stream, parse_artifact,
    ApiConfig, ArtifactPrefix, EncodeParams, EncodedPayload,
};
pub use types::{ErrorKind, HuffmanError, PreconditionError, Result};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::api::{decode_file, encode_file, inspect, RunOutput};
    pub use crate::codec::{decode, encode, ApiConfig, EncodeParams};
    pub use crate::codes::{Code, CodeStyle, CodeTable};
    pub use crate::frequency::FrequencyTable;
    pub use crate::headers::{ArtifactHeader, FormatError};
    pub use crate::io::{InputSource, OutputSink};
    pub use crate::telemetry::TelemetrySnapshot;
    pub use crate::tree::HuffmanTree;
    pub use crate::types::{ErrorKind, HuffmanError};
}
