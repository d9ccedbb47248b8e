//! # ujson
//!
//! A typed, introspectable JSON value model with an optional canonical
//! array ordering.
//!
//! [`decode`] parses JSON text into an [`Any`] tree that keeps the numeric
//! encoding of every literal: signed integers, unsigned integers above
//! `i64::MAX`, and floats each get their own kind instead of collapsing
//! into a single number type. [`decode_canonical`] additionally reorders
//! every array by the byte-wise lexicographic order of its elements' JSON
//! encodings, which gives semantically-equal documents with unordered
//! arrays an identical encoding.
//!
//! ```rust
//! use ujson::{decode_canonical, Kind};
//!
//! # fn example() -> Result<(), ujson::ParseError> {
//! let value = decode_canonical(br#"{"ids":[3,1,2],"lat":37.7668}"#)?;
//! assert_eq!(value.get("lat").map(ujson::Any::kind), Some(Kind::NumberFloat));
//! let ids = value.get("ids").and_then(ujson::Any::as_array).unwrap();
//! assert_eq!(ids.iter().map(ToString::to_string).collect::<Vec<_>>(), ["1", "2", "3"]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
mod canonical;
mod decode;
mod error;
mod ser;
mod value;

pub use canonical::canonicalize;
pub use decode::{decode, decode_canonical};
pub use error::{EncodeError, ParseError};
pub use value::{Any, Kind, Number};
