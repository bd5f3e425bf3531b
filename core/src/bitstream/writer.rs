//! bitstream/writer.rs
//! MSB-first bit packer that streams whole bytes to a writer.

use std::io::{self, Write};

use crate::codes::Code;

const FLUSH_AT: usize = 8 * 1024;

/// Packs bits MSB-first. Full bytes are flushed to `inner` in batches, so
/// memory stays bounded no matter how long the payload is.
pub struct BitWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
    acc: u8,
    acc_bits: u8,
    bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(FLUSH_AT),
            acc: 0,
            acc_bits: 0,
            bits_written: 0,
        }
    }

    #[inline]
    pub fn write_bit(&mut self, bit: bool) -> io::Result<()> {
        self.acc = (self.acc << 1) | bit as u8;
        self.acc_bits += 1;
        self.bits_written += 1;
        if self.acc_bits == 8 {
            self.buf.push(self.acc);
            self.acc = 0;
            self.acc_bits = 0;
            if self.buf.len() >= FLUSH_AT {
                self.flush_buf()?;
            }
        }
        Ok(())
    }

    /// Append every bit of `code`.
    pub fn write_code(&mut self, code: &Code) -> io::Result<()> {
        for bit in code.bits() {
            self.write_bit(bit)?;
        }
        Ok(())
    }

    /// Meaningful bits written so far (excludes padding).
    pub fn bits_written(&self) -> u64 {
        self.bits_written
    }

    /// Left-align and zero-fill the last partial byte, flush, and hand back
    /// the writer together with the meaningful bit count.
    pub fn finish(mut self) -> io::Result<(W, u64)> {
        if self.acc_bits > 0 {
            self.buf.push(self.acc << (8 - self.acc_bits));
            self.acc = 0;
            self.acc_bits = 0;
        }
        self.flush_buf()?;
        self.inner.flush()?;
        Ok((self.inner, self.bits_written))
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.inner.write_all(&self.buf)?;
        self.buf.clear();
        Ok(())
    }
}
