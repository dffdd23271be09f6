//! Copies a reader into a writer while remembering which side failed.
//!
//! `io::copy()` folds read and write errors together,
//! but "the download dropped" and "the disk is full" are different problems.

use std::io::{self, Read, Write};

/// Which end of a [`pump()`] gave up.
#[derive(Debug)]
pub enum PumpError {
    Read(io::Error),
    Write(io::Error),
}

/// Copies `reader` into `writer` until EOF, returning the number of bytes copied.
pub fn pump<R: Read + ?Sized, W: Write + ?Sized>(
    reader: &mut R,
    writer: &mut W,
) -> Result<u64, PumpError> {
    let mut buf = vec![0u8; 64 * 1024];
    let mut copied: u64 = 0;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(PumpError::Read(e)),
        };
        writer.write_all(&buf[..n]).map_err(PumpError::Write)?;
        copied += n as u64;
    }
    writer.flush().map_err(PumpError::Write)?;
    Ok(copied)
}
