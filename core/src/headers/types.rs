//! headers/types.rs
//! Artifact preamble and the structural errors raised while parsing artifacts.
//!
//! Notes:
//! - All multi-byte integers are little-endian.
//! - The preamble is fixed-size (18 bytes); the code table and payload follow.
//! - Unknown flag bits are rejected so newer artifacts fail loudly.

use std::fmt;

use bitflags::bitflags;
use num_enum::TryFromPrimitive;

use crate::constants::{flags, FORMAT_V1, MAGIC_HUF1};
use crate::utils::{enum_name_or_hex, fmt_bytes, fmt_symbol};

/// Fixed preamble size in bytes.
pub const HEADER_LEN_V1: usize = 18;

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum FormatVersion {
    V1 = FORMAT_V1,
}

impl FormatVersion {
    pub fn verify(raw: u8) -> Result<Self, FormatError> {
        FormatVersion::try_from_primitive(raw).map_err(|_| FormatError::UnsupportedVersion { raw })
    }
}

bitflags! {
    /// Presence and behavior bits stored in the preamble.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct HeaderFlags: u8 {
        /// `crc32` holds the CRC32 of the original bytes.
        const HAS_CRC32 = flags::HAS_CRC32;
        /// Codes were assigned canonically.
        const CANONICAL = flags::CANONICAL;
    }
}

/// Artifact preamble.
///
/// ```text
/// [ magic (4) ][ version (1) ][ flags (1) ][ crc32 (4) ][ original_len (8) ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactHeader {
    pub magic: [u8; 4],
    pub version: u8,
    pub flags: HeaderFlags,
    pub crc32: u32,        // 0 unless HAS_CRC32
    pub original_len: u64, // symbols in the original input
}

impl Default for ArtifactHeader {
    fn default() -> Self {
        Self {
            magic: MAGIC_HUF1,
            version: FORMAT_V1,
            flags: HeaderFlags::empty(),
            crc32: 0,
            original_len: 0,
        }
    }
}

impl ArtifactHeader {
    pub const LEN: usize = HEADER_LEN_V1;

    pub fn new(original_len: u64) -> Self {
        Self { original_len, ..Default::default() }
    }

    /// Marks crc32 as present, sets value and flag.
    pub fn set_crc32(&mut self, crc32: u32) {
        self.crc32 = crc32;
        self.flags |= HeaderFlags::HAS_CRC32;
    }

    pub fn set_canonical(&mut self) {
        self.flags |= HeaderFlags::CANONICAL;
    }

    pub fn has_crc32(&self) -> bool {
        self.flags.contains(HeaderFlags::HAS_CRC32)
    }

    pub fn is_canonical(&self) -> bool {
        self.flags.contains(HeaderFlags::CANONICAL)
    }

    pub fn validate(&self) -> Result<(), FormatError> {
        if self.magic != MAGIC_HUF1 {
            return Err(FormatError::InvalidMagic { have: self.magic, need: MAGIC_HUF1 });
        }
        FormatVersion::verify(self.version)?;
        if self.original_len == 0 {
            return Err(FormatError::EmptyPayload);
        }
        Ok(())
    }
}

/// Structural mismatch between an artifact and the format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Input ended inside the named section.
    Truncated { context: &'static str },

    /// Wrong magic marker (expected "HUF1").
    InvalidMagic { have: [u8; 4], need: [u8; 4] },

    /// Version byte not understood by this reader.
    UnsupportedVersion { raw: u8 },

    /// Flag bits outside the known set.
    UnknownFlags { raw: u8 },

    /// Preamble claims zero original bytes.
    EmptyPayload,

    /// Code table size outside 1..=256.
    InvalidTableSize { have: u16 },

    /// Code length outside 1..=255.
    InvalidCodeLength { symbol: u8, len: u8 },

    /// Same symbol listed twice.
    DuplicateSymbol { symbol: u8 },

    /// Code equals, or is a prefix of / prefixed by, an earlier code.
    ConflictingCode { symbol: u8 },

    /// A bit run left the code space at this payload bit offset.
    UnknownCode { bit_offset: u64 },

    /// Payload ended in the middle of a code.
    IncompleteCode { bit_length: u64 },

    /// Bytes follow the payload.
    TrailingData,

    /// Decoded symbol count differs from the preamble.
    LengthMismatch { expected: u64, actual: u64 },

    /// CRC32 over the decoded bytes differs from the preamble.
    ChecksumMismatch { expected: u32, actual: u32 },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use FormatError::*;
        match self {
            Truncated { context } =>
                write!(f, "truncated artifact: unexpected end of {}", context),
            InvalidMagic { have, need } =>
                write!(f, "invalid magic: expected {}, got {}", fmt_bytes(need), fmt_bytes(have)),
            UnsupportedVersion { raw } =>
                write!(f, "unsupported version: {}", enum_name_or_hex::<FormatVersion>(*raw)),
            UnknownFlags { raw } =>
                write!(f, "unknown flag bits: 0x{:02x}", raw),
            EmptyPayload =>
                write!(f, "header declares zero original bytes"),
            InvalidTableSize { have } =>
                write!(f, "invalid code table size: {}", have),
            InvalidCodeLength { symbol, len } =>
                write!(f, "invalid code length {} for symbol {}", len, fmt_symbol(*symbol)),
            DuplicateSymbol { symbol } =>
                write!(f, "symbol {} listed twice in code table", fmt_symbol(*symbol)),
            ConflictingCode { symbol } =>
                write!(f, "code for symbol {} collides with another code", fmt_symbol(*symbol)),
            UnknownCode { bit_offset } =>
                write!(f, "bit run at offset {} matches no code", bit_offset),
            IncompleteCode { bit_length } =>
                write!(f, "payload of {} bits ends inside a code", bit_length),
            TrailingData =>
                write!(f, "unexpected data after payload"),
            LengthMismatch { expected, actual } =>
                write!(f, "decoded length mismatch: expected {}, got {}", expected, actual),
            ChecksumMismatch { expected, actual } =>
                write!(f, "checksum mismatch: expected {:08x}, got {:08x}", expected, actual),
        }
    }
}

impl std::error::Error for FormatError {}
