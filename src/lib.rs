//! Structure-sensitive object hashing with verifiable redaction.
//!
//! Computes a deterministic SHA-256 digest over a tree of JSON-like values:
//! two structurally equal values always hash identically regardless of map
//! key order, and any semantic change to the tree changes the digest. A leaf
//! can be replaced by a redaction node that reproduces the original digest,
//! so a document with sensitive fields withheld still verifies against a
//! previously published root hash.
//!
//! # Architecture
//!
//! - [`value`] - the closed value sum type and the serde_json parser seam
//! - [`digest`] - the 32-byte digest with its hex codec and total order
//! - [`hash`] - float normalization, redaction detection, and the recursive
//!   tag-and-digest engine
//! - [`error`] - the closed error enum
//!
//! # Example
//!
//! ```
//! use objecthash::{hash, Value};
//!
//! let secret = hash(&Value::from("secret")).unwrap();
//! assert_eq!(secret.to_hex().len(), 64);
//! assert_eq!(hash(&Value::from("secret")).unwrap(), secret);
//! ```

// Digests must come from the documented error paths, never a panic.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod digest;
pub mod error;
pub mod hash;
pub mod value;

// Re-export commonly used types
pub use digest::{Digest, DIGEST_LEN};
pub use error::{HashError, HashResult};
pub use hash::{
    hash, hash_json, hash_json_with_options, hash_with_options, normalize_float, HashOptions,
    RedactionScheme,
};
pub use value::{from_json, Value};
