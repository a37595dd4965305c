//! Canonical hashing of value trees.
//!
//! The hash subsystem is organized into focused modules:
//!
//! - [`options`] - redaction key scheme, depth limit, producer verification
//! - [`float`] - canonical float normalization
//! - [`redaction`] - structural redaction node detection
//! - [`engine`] - the recursive tag-and-digest core
//!
//! # Example
//!
//! ```
//! use objecthash::hash::hash_json;
//!
//! // Map key order never affects the digest.
//! let a = hash_json("{\"a\":1,\"b\":2}").unwrap();
//! let b = hash_json("{\"b\":2,\"a\":1}").unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a.to_hex().len(), 64);
//! ```

pub mod engine;
pub mod float;
pub mod options;
pub mod redaction;

// Re-export commonly used items
pub use engine::{hash, hash_json, hash_json_with_options, hash_with_options};
pub use float::normalize_float;
pub use options::{HashOptions, RedactionScheme};
pub use redaction::{detect, RedactedNode};
