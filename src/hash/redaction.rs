//! Redaction node detection.
//!
//! A dictionary qualifies as a redaction node only if it has exactly three
//! keys and, after case-insensitive matching, they are the configured
//! scheme's data, hash, and redacted-flag keys. Any other dictionary hashes
//! as an ordinary dict, even if some of its keys overlap with a scheme.

use std::collections::BTreeMap;

use super::options::RedactionScheme;
use crate::error::{HashError, HashResult};
use crate::value::Value;

/// The extracted fields of a recognized redaction node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RedactedNode<'a> {
    /// Declared data: the real value when not redacted, an arbitrary
    /// placeholder once redacted.
    pub data: &'a Value,
    /// Hex digest of the original value (authoritative only once redacted).
    pub hash_hex: &'a str,
    /// Whether the data has been replaced by a placeholder.
    pub redacted: bool,
}

/// Structurally match a dictionary against the scheme's key triple.
///
/// Returns `Ok(None)` when the shape does not match. Returns an error only
/// when the three keys match but the `hash` field is not a string or the
/// `redacted` flag is not a boolean.
pub fn detect<'a>(
    dict: &'a BTreeMap<String, Value>,
    scheme: RedactionScheme,
) -> HashResult<Option<RedactedNode<'a>>> {
    if dict.len() != 3 {
        return Ok(None);
    }

    let (data_key, hash_key, redacted_key) = scheme.keys();

    let mut data = None;
    let mut hash = None;
    let mut redacted = None;
    for (key, value) in dict {
        let folded = key.to_uppercase();
        if folded == data_key {
            data = Some(value);
        } else if folded == hash_key {
            hash = Some(value);
        } else if folded == redacted_key {
            redacted = Some(value);
        } else {
            return Ok(None);
        }
    }

    let (Some(data), Some(hash), Some(redacted)) = (data, hash, redacted) else {
        // Three keys, but not one of each (e.g. "hash" and "HASH" together).
        return Ok(None);
    };

    let hash_hex = hash.as_str().ok_or_else(|| {
        HashError::InvalidRedactionShape(format!(
            "hash field must be a hex string, got {}",
            hash.type_name()
        ))
    })?;
    let redacted = redacted.as_bool().ok_or_else(|| {
        HashError::InvalidRedactionShape(format!(
            "redacted field must be a boolean, got {}",
            redacted.type_name()
        ))
    })?;

    Ok(Some(RedactedNode {
        data,
        hash_hex,
        redacted,
    }))
}
