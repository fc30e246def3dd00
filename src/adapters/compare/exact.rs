//! Byte-for-byte comparison

use std::fs;
use std::path::Path;

use crate::core::ports::ContentComparer;
use crate::error::{ApprovalError, Result};

/// Equivalent iff both files hold the same bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactByteComparer;

impl ContentComparer for ExactByteComparer {
    fn contents_equivalent(&self, received: &Path, approved: &Path) -> Result<bool> {
        let received_len = file_len(received)?;
        let approved_len = file_len(approved)?;
        if received_len != approved_len {
            return Ok(false);
        }

        let received_bytes = fs::read(received).map_err(|e| ApprovalError::io(received, e))?;
        let approved_bytes = fs::read(approved).map_err(|e| ApprovalError::io(approved, e))?;
        Ok(received_bytes == approved_bytes)
    }
}

fn file_len(path: &Path) -> Result<u64> {
    fs::metadata(path).map(|m| m.len()).map_err(|e| ApprovalError::io(path, e))
}
