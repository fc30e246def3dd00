//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `compare/` - Byte and normalized-text comparers
//! - `file/` - Filesystem artifact storage

pub mod compare;
pub mod file;
