//! Core types for fsinspect.
//!
//! This crate provides the data structures shared by the scan, ops and
//! digest crates: the error type, scan configuration, scan results and
//! content digests.

mod config;
mod digest;
mod error;
mod result;

pub use config::{ScanConfig, ScanConfigBuilder};
pub use digest::{ContentDigest, DigestParseError};
pub use error::FsError;
pub use result::{EntryKind, ScanEntry, ScanResult, ScanVisitor};
