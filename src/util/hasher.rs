// src/util/hasher.rs
use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};

/// Calculate the SHA-256 hash of a file's bytes as a lowercase hex
/// string, the form the Civitai by-hash endpoint accepts.
///
/// Model files are large; the content is streamed through the hasher
/// rather than read into memory.
pub fn sha256_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let mut file =
        File::open(path).with_context(|| format!("Failed to open {} for hashing", path.display()))?;

    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)
        .with_context(|| format!("Failed to read {} for hashing", path.display()))?;

    Ok(format!("{:x}", hasher.finalize()))
}
