//! The 32-byte object hash digest.
//!
//! A [`Digest`] is the SHA-256 output identifying a value's canonical hash.
//! It is immutable once produced and exposes raw bytes, a 64-character
//! lowercase hex form, bytewise equality, and a total order.
//!
//! The derived ordering compares the raw bytes lexicographically, which is
//! identical to comparing the lowercase hex strings. That order is also the
//! canonical sort key for dictionary entries in the hash engine.

use crate::error::{HashError, HashResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of bytes in a SHA-256 digest.
pub const DIGEST_LEN: usize = 32;

/// A 32-byte object hash digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest(pub [u8; DIGEST_LEN]);

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Digest::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl Digest {
    /// Create a zero-filled digest.
    pub fn zero() -> Self {
        Digest([0u8; DIGEST_LEN])
    }

    /// Decode a digest from its hex form.
    ///
    /// Input is case-insensitive. An odd-length string is accepted by
    /// left-padding a single `0` nibble; after that the string must be
    /// exactly 64 hex characters. Anything else is [`HashError::MalformedHex`].
    pub fn from_hex(hex_str: &str) -> HashResult<Self> {
        let mut hex_str = hex_str.to_ascii_lowercase();
        if hex_str.len() % 2 == 1 {
            hex_str.insert(0, '0');
        }

        if hex_str.len() != 2 * DIGEST_LEN {
            return Err(HashError::MalformedHex(format!(
                "expected {} hex chars, got {}",
                2 * DIGEST_LEN,
                hex_str.len()
            )));
        }

        let bytes = hex::decode(&hex_str)
            .map_err(|e| HashError::MalformedHex(e.to_string()))?;

        let mut arr = [0u8; DIGEST_LEN];
        arr.copy_from_slice(&bytes);
        Ok(Digest(arr))
    }

    /// Encode as a 64-character lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Get the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Digest::from_hex(s)
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(arr: [u8; DIGEST_LEN]) -> Self {
        Digest(arr)
    }
}
