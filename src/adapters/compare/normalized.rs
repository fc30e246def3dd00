//! Line-ending tolerant text comparison
//!
//! A carriage return is transparent: when one is read, the byte after it in
//! the same stream is compared instead. `\r\n` therefore compares equal to
//! `\n`, whichever side uses which convention.
//!
//! Comparison runs only while both streams keep yielding units. As soon as
//! either stream is exhausted (or fails mid-read) the files are reported
//! equivalent, so trailing content in the longer file is never inspected.
//! Existing baselines depend on this, so it must not become a length check.

use std::fs::File;
use std::io::{BufReader, Bytes, Read};
use std::path::Path;

use crate::core::ports::ContentComparer;
use crate::error::{ApprovalError, Result};

/// Compares text while ignoring carriage returns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizedTextComparer;

impl ContentComparer for NormalizedTextComparer {
    fn contents_equivalent(&self, received: &Path, approved: &Path) -> Result<bool> {
        let mut received_units = open(received)?;
        let mut approved_units = open(approved)?;

        loop {
            let r = next_unit(&mut received_units, received);
            let a = next_unit(&mut approved_units, approved);
            let (Some(r), Some(a)) = (r, a) else {
                return Ok(true);
            };
            if r != a {
                return Ok(false);
            }
        }
    }
}

fn open(path: &Path) -> Result<Bytes<BufReader<File>>> {
    File::open(path).map(|f| BufReader::new(f).bytes()).map_err(|e| ApprovalError::io(path, e))
}

/// Next comparison unit, or `None` once the stream is unreadable
fn next_unit<R: Read>(bytes: &mut Bytes<R>, path: &Path) -> Option<u8> {
    match read_byte(bytes, path)? {
        b'\r' => read_byte(bytes, path),
        byte => Some(byte),
    }
}

fn read_byte<R: Read>(bytes: &mut Bytes<R>, path: &Path) -> Option<u8> {
    match bytes.next()? {
        Ok(byte) => Some(byte),
        Err(err) => {
            log::warn!("stopped comparing {} after read error: {err}", path.display());
            None
        },
    }
}
