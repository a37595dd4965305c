//! Hashing options.
//!
//! Two redaction key naming schemes exist in the wild and are not
//! cross-compatible within one document, so the recognized scheme is
//! explicit configuration rather than hard-coded. The depth limit bounds
//! recursion over attacker-controlled input instead of relying on the host
//! call stack.

/// Recognized redaction key naming scheme.
///
/// Keys are matched case-insensitively in both schemes. Exactly one scheme
/// is active per hashing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedactionScheme {
    /// `_redact_data` / `hash` / `redacted`.
    #[default]
    Underscore,
    /// `REDACTDATA` / `HASHHEX` / `REDACTED`.
    Uppercase,
}

impl RedactionScheme {
    /// The scheme's key triple (data, hash, redacted flag), uppercased for
    /// case-insensitive matching.
    pub(crate) fn keys(self) -> (&'static str, &'static str, &'static str) {
        match self {
            RedactionScheme::Underscore => ("_REDACT_DATA", "HASH", "REDACTED"),
            RedactionScheme::Uppercase => ("REDACTDATA", "HASHHEX", "REDACTED"),
        }
    }
}

/// Options for a hashing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashOptions {
    /// Redaction key naming scheme recognized by the detector.
    pub scheme: RedactionScheme,
    /// Maximum value tree depth before hashing fails with
    /// [`HashError::NestingTooDeep`](crate::HashError::NestingTooDeep).
    pub max_depth: u64,
    /// When set, the `hash` field of an unredacted node is decoded and
    /// compared against the recomputed digest of its data. Off by default:
    /// that field is informational until the node is actually redacted.
    pub verify_unredacted: bool,
}

impl HashOptions {
    /// Default options: underscore scheme, 128 levels of nesting, no
    /// producer verification.
    pub const fn standard() -> Self {
        Self {
            scheme: RedactionScheme::Underscore,
            max_depth: 128,
            verify_unredacted: false,
        }
    }

    /// Options matching the uppercase key scheme deployments.
    pub const fn uppercase() -> Self {
        Self {
            scheme: RedactionScheme::Uppercase,
            max_depth: 128,
            verify_unredacted: false,
        }
    }
}

impl Default for HashOptions {
    fn default() -> Self {
        Self::standard()
    }
}
