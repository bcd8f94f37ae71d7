//! Content identity for fsinspect.
//!
//! Files are streamed through SHA-256 in fixed-size chunks, so memory use
//! does not depend on file size. The result is a [`ContentDigest`] whose
//! hex form is 64 lowercase characters.
//!
//! ```rust,no_run
//! use fsinspect_digest::file_hash;
//!
//! let hex = file_hash("/path/to/file").unwrap();
//! assert_eq!(hex.len(), 64);
//! ```
//!
//! Digests are never cached; every call reads the file again.

mod hasher;

pub use hasher::{content_digest, file_digest, file_hash, CHUNK_SIZE};

// Re-export core types
pub use fsinspect_core::{ContentDigest, FsError};
