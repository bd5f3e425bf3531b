use std::io;
use thiserror::Error;

use crate::headers::FormatError;
use crate::tree::HeapError;

/// Coarse error classes callers can branch on without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyInput,
    Io,
    CorruptStream,
    Precondition,
}

/// Unified error for encode and decode.
/// - `From<T>` impls let `?` cross module boundaries.
/// - Every failure aborts the current call; there is no partial success.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// Nothing to encode.
    #[error("empty input: nothing to encode")]
    EmptyInput,

    /// File open/read/write failure on either side.
    #[error("I/O error: {0}")]
    Io(#[source] io::Error),

    /// Artifact does not match the expected layout.
    #[error("corrupt stream: {0}")]
    CorruptStream(#[from] FormatError),

    /// Internal contract violated (e.g. popping an empty heap).
    #[error("precondition violated: {0}")]
    Precondition(#[from] PreconditionError),
}

/// Misuse of an internal component. Never caused by artifact contents.
#[derive(Debug, Error)]
pub enum PreconditionError {
    #[error(transparent)]
    Heap(#[from] HeapError),

    /// Input held a symbol the frequency pass never saw.
    #[error("symbol 0x{0:02x} has no code")]
    MissingCode(u8),

    /// Second pass over the input packed a different number of bits.
    #[error("payload length changed between passes: planned {planned} bits, wrote {written}")]
    PayloadLengthMismatch { planned: u64, written: u64 },

    /// Caller-supplied counts sum past `u64::MAX`.
    #[error("symbol counts overflow u64")]
    CountOverflow,

    /// `sum(count * code_len)` does not fit in the bit length field.
    #[error("payload bit length overflows u64")]
    BitLengthOverflow,

    /// A leaf sits deeper than the longest storable code.
    #[error("tree depth {depth} exceeds the {max}-bit code limit")]
    CodeTooLong { depth: usize, max: usize },

    /// Canonical assignment ran out of codes; lengths violate Kraft equality.
    #[error("canonical code space exhausted at symbol 0x{symbol:02x}")]
    CanonicalOverflow { symbol: u8 },
}

impl HuffmanError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HuffmanError::EmptyInput => ErrorKind::EmptyInput,
            HuffmanError::Io(_) => ErrorKind::Io,
            HuffmanError::CorruptStream(_) => ErrorKind::CorruptStream,
            HuffmanError::Precondition(_) => ErrorKind::Precondition,
        }
    }

    /// Map an I/O error met while parsing an artifact.
    /// Running out of bytes means the artifact is truncated, not that the disk failed.
    pub fn from_parse_io(e: io::Error, context: &'static str) -> Self {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            HuffmanError::CorruptStream(FormatError::Truncated { context })
        } else {
            HuffmanError::Io(e)
        }
    }
}

impl From<HeapError> for HuffmanError {
    fn from(e: HeapError) -> Self {
        HuffmanError::Precondition(PreconditionError::Heap(e))
    }
}

impl From<io::Error> for HuffmanError {
    fn from(e: io::Error) -> Self {
        HuffmanError::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
