//! MD5 digests of packed archives.
//!
//! Files are streamed through the hasher in fixed-size chunks so memory
//! use stays bounded regardless of archive size.

use md5::{Digest, Md5};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Bytes read per chunk.
pub const DIGEST_CHUNK_SIZE: usize = 8192;

/// Calculates the MD5 digest of a file as lowercase hex.
pub fn md5_file(path: &Path) -> io::Result<String> {
    let file = File::open(path)?;
    md5_reader(file)
}

/// Calculates the MD5 digest of everything `reader` yields.
pub fn md5_reader<R: Read>(mut reader: R) -> io::Result<String> {
    let mut hasher = Md5::new();
    let mut buffer = [0u8; DIGEST_CHUNK_SIZE];

    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
