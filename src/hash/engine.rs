//! The recursive hashing core.
//!
//! Every value hashes as `SHA256(tag || payload)`, where the single-byte
//! tag separates types and the payload is built from the value itself (for
//! scalars) or from the digests of its children (for containers). Each
//! computation owns a fresh SHA-256 context and shares no state with any
//! other call.
//!
//! Dictionary entries are canonicalized by sorting the concatenated
//! `digest(key) || digest(value)` buffers bytewise, which is exactly their
//! lowercase-hex-string order. Sorting by digest rather than by key text
//! keeps canonicalization independent of string collation and ties it to
//! the same comparison primitive used everywhere else.

use std::collections::BTreeMap;

use sha2::{Digest as _, Sha256};

use super::float::normalize_float;
use super::options::HashOptions;
use super::redaction::{detect, RedactedNode};
use crate::digest::{Digest, DIGEST_LEN};
use crate::error::{HashError, HashResult};
use crate::value::Value;

/// Tag byte for null.
const TAG_NULL: u8 = b'n';
/// Tag byte for booleans.
const TAG_BOOL: u8 = b'b';
/// Tag byte for integers.
const TAG_INT: u8 = b'i';
/// Tag byte for floats.
const TAG_FLOAT: u8 = b'f';
/// Tag byte for strings.
const TAG_STR: u8 = b'u';
/// Tag byte for lists.
const TAG_LIST: u8 = b'l';
/// Tag byte for dictionaries.
const TAG_DICT: u8 = b'd';

/// Hash a value with [`HashOptions::default`].
pub fn hash(value: &Value) -> HashResult<Digest> {
    hash_with_options(value, &HashOptions::default())
}

/// Hash a value with explicit options.
pub fn hash_with_options(value: &Value, options: &HashOptions) -> HashResult<Digest> {
    hash_value(value, options, 0)
}

/// Hash a JSON document with [`HashOptions::default`].
///
/// Parsing is delegated to serde_json; the digest is computed over the
/// converted value tree.
pub fn hash_json(text: &str) -> HashResult<Digest> {
    hash_json_with_options(text, &HashOptions::default())
}

/// Hash a JSON document with explicit options.
pub fn hash_json_with_options(text: &str, options: &HashOptions) -> HashResult<Digest> {
    let json: serde_json::Value =
        serde_json::from_str(text).map_err(|e| HashError::InvalidJson(e.to_string()))?;
    let value = crate::value::from_json(&json)?;
    hash_with_options(&value, options)
}

/// Recursive dispatch on the value's variant.
fn hash_value(value: &Value, options: &HashOptions, depth: u64) -> HashResult<Digest> {
    if depth > options.max_depth {
        return Err(HashError::NestingTooDeep(options.max_depth));
    }

    match value {
        Value::Null => Ok(hash_tagged(TAG_NULL, b"")),
        Value::Bool(b) => Ok(hash_tagged(TAG_BOOL, if *b { b"1" } else { b"0" })),
        Value::Int(n) => Ok(hash_tagged(TAG_INT, n.to_string().as_bytes())),
        Value::Float(f) => Ok(hash_tagged(TAG_FLOAT, normalize_float(*f)?.as_bytes())),
        Value::Str(s) => Ok(hash_tagged(TAG_STR, s.as_bytes())),
        Value::List(items) => hash_list(items, options, depth),
        Value::Dict(entries) => match detect(entries, options.scheme)? {
            Some(node) => hash_redacted(&node, options, depth),
            None => hash_dict(entries, options, depth),
        },
    }
}

/// `SHA256(tag || payload)` with a fresh context.
fn hash_tagged(tag: u8, payload: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update([tag]);
    hasher.update(payload);
    Digest(hasher.finalize().into())
}

/// Lists hash their children's digests in element order.
fn hash_list(items: &[Value], options: &HashOptions, depth: u64) -> HashResult<Digest> {
    let mut hasher = Sha256::new();
    hasher.update([TAG_LIST]);
    for item in items {
        hasher.update(hash_value(item, options, depth + 1)?.as_bytes());
    }
    Ok(Digest(hasher.finalize().into()))
}

/// Ordinary dictionaries hash their sorted entry buffers.
fn hash_dict(
    entries: &BTreeMap<String, Value>,
    options: &HashOptions,
    depth: u64,
) -> HashResult<Digest> {
    let mut buffers: Vec<[u8; 2 * DIGEST_LEN]> = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let key_digest = hash_tagged(TAG_STR, key.as_bytes());
        let value_digest = hash_value(value, options, depth + 1)?;

        let mut buffer = [0u8; 2 * DIGEST_LEN];
        buffer[..DIGEST_LEN].copy_from_slice(key_digest.as_bytes());
        buffer[DIGEST_LEN..].copy_from_slice(value_digest.as_bytes());
        buffers.push(buffer);
    }

    // Sort over the whole (key digest, value digest) pair, not the key text.
    buffers.sort_unstable();

    let mut hasher = Sha256::new();
    hasher.update([TAG_DICT]);
    for buffer in &buffers {
        hasher.update(buffer);
    }
    Ok(Digest(hasher.finalize().into()))
}

/// Redaction nodes hash as the scalar they stand in for.
///
/// The tag is the declared data's scalar tag; the payload is that scalar's
/// digest (recomputed when unredacted, decoded from the hash field once
/// redacted) followed by 32 zero bytes. A redactor can therefore swap the
/// data for a placeholder without changing the node's digest.
fn hash_redacted(
    node: &RedactedNode<'_>,
    options: &HashOptions,
    depth: u64,
) -> HashResult<Digest> {
    let tag = match node.data {
        Value::Int(_) => TAG_INT,
        Value::Str(_) => TAG_STR,
        Value::Bool(_) => TAG_BOOL,
        Value::Float(_) => TAG_FLOAT,
        other => {
            return Err(HashError::InvalidRedactionShape(format!(
                "redactable data must be a scalar, got {}",
                other.type_name()
            )))
        }
    };

    let data_digest = if node.redacted {
        Digest::from_hex(node.hash_hex)?
    } else {
        let computed = hash_value(node.data, options, depth + 1)?;
        if options.verify_unredacted {
            let declared = Digest::from_hex(node.hash_hex)?;
            if declared != computed {
                return Err(HashError::RedactionHashMismatch {
                    declared: declared.to_hex(),
                    computed: computed.to_hex(),
                });
            }
        }
        computed
    };

    let mut payload = [0u8; 2 * DIGEST_LEN];
    payload[..DIGEST_LEN].copy_from_slice(data_digest.as_bytes());
    Ok(hash_tagged(tag, &payload))
}
