//! Streaming SHA-256 hashing of files.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::debug;

use fsinspect_core::{ContentDigest, FsError};

/// Read buffer size used while hashing.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Compute the SHA-256 digest of a file's bytes.
///
/// The file is read in [`CHUNK_SIZE`] chunks and closed on every return
/// path. A read failure partway through is returned as an error; no digest
/// of the bytes read so far is produced.
pub fn file_digest(path: impl AsRef<Path>) -> Result<ContentDigest, FsError> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| FsError::io(path, e))?;

    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];
    let mut total: u64 = 0;

    loop {
        let bytes_read = match file.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(FsError::io(path, e)),
        };
        hasher.update(&buffer[..bytes_read]);
        total += bytes_read as u64;
    }

    let digest = to_content_digest(hasher);
    debug!(path = %path.display(), bytes = total, %digest, "hashed file");
    Ok(digest)
}

/// Compute the SHA-256 digest of a file as lowercase hex.
pub fn file_hash(path: impl AsRef<Path>) -> Result<String, FsError> {
    file_digest(path).map(|d| d.to_hex())
}

/// Compute the SHA-256 digest of in-memory bytes.
pub fn content_digest(content: impl AsRef<[u8]>) -> ContentDigest {
    let mut hasher = Sha256::new();
    hasher.update(content.as_ref());
    to_content_digest(hasher)
}

fn to_content_digest(hasher: Sha256) -> ContentDigest {
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hasher.finalize());
    ContentDigest::new(bytes)
}
