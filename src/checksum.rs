//! MD5 digests written as companion `.md5` files

use crate::error::Result;
use md5::{Digest, Md5};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension appended to the checksummed file's name
pub const CHECKSUM_EXTENSION: &str = "md5";

/// Lowercase hex MD5 of `data`
pub fn digest_hex(data: &[u8]) -> String {
    hex::encode(Md5::digest(data))
}

/// Path of the companion checksum file for `path` (`<path>.md5`)
pub fn checksum_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(CHECKSUM_EXTENSION);
    PathBuf::from(name)
}

/// Write the digest of `data` next to `path`, returning the checksum file.
pub fn write_checksum_file(path: &Path, data: &[u8]) -> Result<PathBuf> {
    let target = checksum_path(path);
    fs::write(&target, digest_hex(data))?;
    Ok(target)
}

/// Hash the file at `path` and write its companion checksum file.
pub fn checksum_file(path: &Path) -> Result<PathBuf> {
    let data = fs::read(path)?;
    write_checksum_file(path, &data)
}
