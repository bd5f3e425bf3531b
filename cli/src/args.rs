//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use huffman_core::constants::{DEFAULT_DECODED_PATH, DEFAULT_ENCODED_PATH};
use huffman_core::prelude::{CodeStyle, EncodeParams};

/// Static Huffman file compressor.
#[derive(Parser, Debug)]
#[command(name = "huffpack", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compress a file into a Huffman artifact
    Encode {
        input: PathBuf,

        #[arg(short, long, default_value = DEFAULT_ENCODED_PATH)]
        output: PathBuf,

        /// Assign canonical codes instead of tree-path codes
        #[arg(long)]
        canonical: bool,

        /// Do not store a CRC32 of the input
        #[arg(long)]
        no_checksum: bool,

        /// Print run statistics as JSON
        #[arg(long)]
        stats: bool,
    },

    /// Restore the original file from an artifact
    Decode {
        input: PathBuf,

        #[arg(short, long, default_value = DEFAULT_DECODED_PATH)]
        output: PathBuf,

        /// Print run statistics as JSON
        #[arg(long)]
        stats: bool,
    },

    /// Print an artifact's header and code table
    Inspect { input: PathBuf },
}

impl Command {
    pub fn encode_params(canonical: bool, no_checksum: bool) -> EncodeParams {
        EncodeParams {
            code_style: if canonical { CodeStyle::Canonical } else { CodeStyle::Tree },
            checksum: !no_checksum,
        }
    }
}
