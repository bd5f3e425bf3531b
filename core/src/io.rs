//! io.rs
//! Normalized input sources and output sinks for file-level encode/decode.
//!
//! Notes:
//! - Encoding reads its input twice, so inputs are opened as `Read + Seek`;
//!   plain readers are buffered into memory first.
//! - File outputs are written to a hidden sibling and renamed into place by
//!   `OutputHandle::commit`. Dropping an uncommitted handle removes the
//!   partial file, so a failed run never leaves output behind.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Cursor, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::constants::IO_BUFFER_SIZE;

/// Where input bytes come from.
pub enum InputSource {
    Reader(Box<dyn Read + Send>),
    File(PathBuf),
    Memory(Vec<u8>),
}

/// Where output bytes go.
pub enum OutputSink {
    Writer(Box<dyn Write + Send>),
    File(PathBuf),
    /// Collect into a buffer returned by `OutputHandle::commit`.
    Memory,
}

/// Seekable reader over any input source.
pub trait SeekRead: Read + Seek + Send {}
impl<T: Read + Seek + Send> SeekRead for T {}

pub fn open_input(src: InputSource) -> io::Result<Box<dyn SeekRead>> {
    let reader: Box<dyn SeekRead> = match src {
        InputSource::Reader(mut r) => {
            let mut buf = Vec::new();
            r.read_to_end(&mut buf)?;
            Box::new(Cursor::new(buf))
        }
        InputSource::File(p) => Box::new(BufReader::with_capacity(IO_BUFFER_SIZE, File::open(p)?)),
        InputSource::Memory(b) => Box::new(Cursor::new(b)),
    };
    Ok(reader)
}

/// Plain reader over any input source, without buffering readers up front.
pub fn open_input_stream(src: InputSource) -> io::Result<Box<dyn Read + Send>> {
    let reader: Box<dyn Read + Send> = match src {
        InputSource::Reader(r) => r,
        InputSource::File(p) => Box::new(BufReader::with_capacity(IO_BUFFER_SIZE, File::open(p)?)),
        InputSource::Memory(b) => Box::new(Cursor::new(b)),
    };
    Ok(reader)
}

enum Target {
    Writer(Box<dyn Write + Send>),
    File { temp: PathBuf, dest: PathBuf, file: Option<BufWriter<File>> },
    Memory(Vec<u8>),
}

/// Open output that only becomes visible on `commit`.
pub struct OutputHandle {
    target: Target,
}

pub fn open_output(sink: OutputSink) -> io::Result<OutputHandle> {
    let target = match sink {
        OutputSink::Writer(w) => Target::Writer(w),
        OutputSink::Memory => Target::Memory(Vec::new()),
        OutputSink::File(dest) => {
            let temp = temp_sibling(&dest);
            let file = File::create(&temp)?;
            debug!("writing to temporary {}", temp.display());
            Target::File {
                temp,
                dest,
                file: Some(BufWriter::with_capacity(IO_BUFFER_SIZE, file)),
            }
        }
    };
    Ok(OutputHandle { target })
}

impl OutputHandle {
    /// Flush and publish the output. Returns the buffer for `OutputSink::Memory`.
    pub fn commit(mut self) -> io::Result<Option<Vec<u8>>> {
        match &mut self.target {
            Target::Writer(w) => {
                w.flush()?;
                Ok(None)
            }
            Target::Memory(buf) => Ok(Some(std::mem::take(buf))),
            Target::File { temp, dest, file } => {
                if let Some(w) = file.take() {
                    let f = w.into_inner().map_err(|e| e.into_error())?;
                    f.sync_all()?;
                }
                fs::rename(&*temp, &*dest)?;
                debug!("committed {}", dest.display());
                // renamed away; nothing left for Drop to clean up
                self.target = Target::Memory(Vec::new());
                Ok(None)
            }
        }
    }
}

impl Write for OutputHandle {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        match &mut self.target {
            Target::Writer(w) => w.write(data),
            Target::Memory(buf) => {
                buf.extend_from_slice(data);
                Ok(data.len())
            }
            Target::File { file: Some(f), .. } => f.write(data),
            Target::File { file: None, .. } => {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "output already closed"))
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.target {
            Target::Writer(w) => w.flush(),
            Target::Memory(_) => Ok(()),
            Target::File { file: Some(f), .. } => f.flush(),
            Target::File { file: None, .. } => Ok(()),
        }
    }
}

impl Drop for OutputHandle {
    fn drop(&mut self) {
        if let Target::File { temp, file, .. } = &mut self.target {
            drop(file.take());
            if let Err(e) = fs::remove_file(&*temp) {
                if e.kind() != io::ErrorKind::NotFound {
                    warn!("could not remove partial output {}: {e}", temp.display());
                }
            } else {
                warn!("discarded partial output {}", temp.display());
            }
        }
    }
}

fn temp_sibling(dest: &Path) -> PathBuf {
    let name = dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    dest.with_file_name(format!(".{name}.{}.partial", std::process::id()))
}

/// Bytes left between the current position and the end. The position is unchanged.
pub fn remaining_len<R: Seek>(reader: &mut R) -> io::Result<u64> {
    let pos = reader.stream_position()?;
    let end = reader.seek(SeekFrom::End(0))?;
    reader.seek(SeekFrom::Start(pos))?;
    Ok(end - pos)
}
