//! Cache implementations
//!
//! Provides the Moka in-memory cache and the key derivation used by
//! conditions providers.

mod moka_cache;

use md5::{Digest, Md5};

pub use moka_cache::{MokaCache, MokaCacheConfig};

/// Generate a cache key from a prefix and the queried subject
///
/// The subject (`"lat,lon"` or a station id) is hashed with MD5 so keys have
/// a fixed length regardless of input. Format: `{prefix}_{md5_hex}`.
pub fn generate_cache_key(prefix: &str, subject: &str) -> String {
    let digest = Md5::digest(subject.as_bytes());
    format!("{prefix}_{}", hex::encode(digest))
}
