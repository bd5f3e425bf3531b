/// Magic number for the artifact format.
/// "HUF1" = Huffman artifact, layout v1
pub const MAGIC_HUF1: [u8; 4] = *b"HUF1";
pub const FORMAT_V1: u8 = 1;

/// Number of distinct byte symbols.
pub const SYMBOL_COUNT: usize = 256;

/// Longest code a tree over 256 leaves can produce (fully skewed tree).
pub const MAX_CODE_LEN: usize = SYMBOL_COUNT - 1;

/// Bytes needed to hold `MAX_CODE_LEN` bits.
pub const CODE_BYTES: usize = 32;

/// Code handed to the only symbol of a root-only tree.
pub const SINGLE_SYMBOL_CODE_LEN: u8 = 1;

/// Tie-break base for internal nodes; leaves use their symbol value.
pub const INTERNAL_ORDER_BASE: u32 = SYMBOL_COUNT as u32;

/// Default output paths used by the CLI when none is given.
pub const DEFAULT_ENCODED_PATH: &str = "encoded.dat";
pub const DEFAULT_DECODED_PATH: &str = "decoded.txt";

/// Buffer size for file readers and writers.
pub const IO_BUFFER_SIZE: usize = 64 * 1024; // 64 KiB

/// Flag bitmask for optional header features.
pub mod flags {
    pub const HAS_CRC32: u8 = 0x01;
    pub const CANONICAL: u8 = 0x02;
}
