//! huffpack
//!
//! Encode, decode and inspect Huffman artifacts.
//! Set `RUST_LOG=debug` for pipeline detail.

mod args;

use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use huffman_core::headers::FormatVersion;
use huffman_core::prelude::*;
use huffman_core::utils::{enum_name_or_hex, fmt_bytes, fmt_symbol};

use args::{Cli, Command};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // stderr regardless of the RUST_LOG filter
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

/// One line with the whole context chain.
fn failure_message(e: &anyhow::Error) -> String {
    format!("error: {e:#}")
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Encode { input, output, canonical, no_checksum, stats } => {
            info!("encoding file {}", input.display());
            let params = Command::encode_params(canonical, no_checksum);
            let run = encode_file(
                InputSource::File(input.clone()),
                OutputSink::File(output.clone()),
                params,
                ApiConfig::new(Some(stats)),
            )
            .with_context(|| format!("failed to encode {}", input.display()))?;
            info!("File encoded successfully: {}", output.display());
            if stats {
                print_stats(&run.snapshot)?;
            }
        }
        Command::Decode { input, output, stats } => {
            info!("decoding file {}", input.display());
            let run = decode_file(
                InputSource::File(input.clone()),
                OutputSink::File(output.clone()),
                ApiConfig::new(Some(stats)),
            )
            .with_context(|| format!("failed to decode {}", input.display()))?;
            info!("File decoded successfully: {}", output.display());
            if stats {
                print_stats(&run.snapshot)?;
            }
        }
        Command::Inspect { input } => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            print_inspect(&input, &mut out)?;
            out.flush()?;
        }
    }
    Ok(())
}

fn print_stats(snapshot: &TelemetrySnapshot) -> Result<()> {
    let json = snapshot.to_json().context("failed to render stats")?;
    println!("{json}");
    Ok(())
}

fn print_inspect<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let prefix = inspect(InputSource::File(path.to_path_buf()))
        .with_context(|| format!("failed to read artifact {}", path.display()))?;
    let h = &prefix.header;

    writeln!(out, "magic:        {}", fmt_bytes(&h.magic))?;
    writeln!(out, "version:      {}", enum_name_or_hex::<FormatVersion>(h.version))?;
    writeln!(out, "flags:        {:?}", h.flags)?;
    if h.has_crc32() {
        writeln!(out, "crc32:        0x{:08x}", h.crc32)?;
    }
    writeln!(out, "original_len: {}", h.original_len)?;
    writeln!(out, "bit_length:   {}", prefix.bit_length)?;
    writeln!(out, "codes:        {}", prefix.code_table.len())?;
    for (symbol, code) in prefix.code_table.iter() {
        writeln!(out, "  {:>6}  {:>3}  {}", fmt_symbol(symbol), code.len(), code)?;
    }
    Ok(())
}
