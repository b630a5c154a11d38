//! SHA-256 hex digests shared by migration checksums and seed digests

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of `bytes`
pub(crate) fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
