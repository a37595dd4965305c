//! The value model hashed by the engine.
//!
//! - [`types`] - the closed [`Value`] sum type
//! - [`convert`] - the serde_json parser seam
//!
//! # Example
//!
//! ```
//! use objecthash::value::{from_json, Value};
//!
//! let json: serde_json::Value = serde_json::from_str("{\"a\":1}").unwrap();
//! let value = from_json(&json).unwrap();
//! assert_eq!(value.get("a"), Some(&Value::Int(1)));
//! ```

pub mod convert;
pub mod types;

// Re-export commonly used items
pub use convert::from_json;
pub use types::Value;
