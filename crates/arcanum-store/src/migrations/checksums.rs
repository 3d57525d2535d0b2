//! Migration checksums
//!
//! Each applied migration records the SHA-256 of its SQL so an edited
//! migration is detected on the next connect.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of `content`
pub fn compute_checksum(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}
