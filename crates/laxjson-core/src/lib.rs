//! # laxjson-core
//!
//! A forgiving JSON value model: parse a document into a [`JsonValue`] tree
//! and read it through coercing, never-failing accessors. Missing keys,
//! out-of-range indexes, and wrong variants land on `Null` instead of
//! panicking, and the defaulting accessors substitute `""`/`0`/`0.0`/
//! `false`/empty collections where a coercion is undefined. A strict
//! `Option`/`Result` surface sits alongside for call sites that need to
//! tell absence apart from a real zero.
//!
//! Lexical parsing is `serde_json`'s job; this crate only converts its
//! untyped tree into the typed model and back.
//!
//! ## Quick start
//!
//! ```rust
//! use laxjson_core::parse_str;
//!
//! let doc = parse_str(r#"{"name":"Ada","scores":[95,87,92],"admin":true}"#);
//!
//! assert_eq!(doc["name"].string_value(), "Ada");
//! assert_eq!(doc["scores"][1].int_value(), 87);
//! assert!(doc["admin"].bool_value());
//!
//! // Misses never fail: they land on Null and default.
//! assert!(doc["missing"].is_null());
//! assert_eq!(doc["scores"][9].int_value(), 0);
//! assert_eq!(doc.path("profile.address.city").string_value(), "");
//! ```
//!
//! ## Modules
//!
//! - [`value`]: `JsonValue` tagged union and the insertion-ordered `JsonMap`
//! - [`convert`]: untyped-tree conversion, parse entry points, serde interop
//! - [`access`]: subscripts, dotted paths, and the coercion accessors
//! - [`stringify`]: compact JSON text output
//! - [`error`]: `ParseError` for the strict parse entry points

pub mod access;
pub mod convert;
pub mod error;
pub mod stringify;
pub mod value;

pub use convert::{parse_slice, parse_str, try_parse_slice, try_parse_str};
pub use error::ParseError;
pub use stringify::stringify;
pub use value::{JsonMap, JsonValue};
