//! Error handling for object hashing.
//!
//! Every failure mode is a variant of [`HashError`]; a hashing call either
//! returns a complete [`Digest`](crate::Digest) or one of these errors.
//! There are no partial or degraded digests.

use thiserror::Error;

/// All failure modes of the hashing core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// Value tree nesting exceeded the configured depth limit.
    #[error("nesting exceeds the configured depth limit of {0}")]
    NestingTooDeep(u64),

    /// A redaction node is structurally invalid (non-scalar data, or
    /// mistyped `hash`/`redacted` fields).
    #[error("invalid redaction node: {0}")]
    InvalidRedactionShape(String),

    /// A hex string contains non-hex characters or does not decode to
    /// exactly 32 bytes after the odd-length padding rule.
    #[error("malformed hex digest: {0}")]
    MalformedHex(String),

    /// NaN or an infinity was presented to the float normalizer.
    #[error("cannot normalize a non-finite float")]
    NonFiniteFloat,

    /// The float mantissa expansion exceeded its safety cap. This indicates
    /// an internal defect, not bad input.
    #[error("float mantissa expansion exceeded {0} digits")]
    MantissaBoundExceeded(usize),

    /// A JSON number is representable as neither i64 nor f64.
    #[error("unsupported JSON number: {0}")]
    UnsupportedNumber(String),

    /// A JSON document handed to the convenience entry points failed to
    /// parse.
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// Producer verification found a `hash` field that does not match the
    /// recomputed digest of the unredacted data.
    #[error("redaction hash mismatch: declared {declared}, computed {computed}")]
    RedactionHashMismatch {
        /// Hex digest declared in the node's `hash` field.
        declared: String,
        /// Hex digest recomputed from the node's data.
        computed: String,
    },
}

/// Result type for hashing operations.
pub type HashResult<T> = Result<T, HashError>;
