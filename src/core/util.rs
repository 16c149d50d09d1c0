//! Common utilities

use xxhash_rust::xxh3::xxh3_64;

/// Compute the xxh3 hash of bytes as 16 hex digits
pub fn hash_bytes(data: &[u8]) -> String {
    format!("{:016x}", xxh3_64(data))
}

/// Bytes in one mebibyte, the unit of `--part-size`
pub const MIB: usize = 1024 * 1024;
