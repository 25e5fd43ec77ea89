use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// 32-bit seed taken from the leading four bytes (eight hex digits) of the
/// SHA-256 digest of the input text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seed(pub u32);

impl Seed {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

pub fn derive_seed(input: &str) -> Seed {
    let digest = Sha256::digest(input.as_bytes());
    // First 8 hex chars of the digest are exactly its first 4 bytes, big-endian.
    Seed(u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]))
}
