//! Pure codec between native dynamic values and the DynamoDB attribute-value
//! wire format.
//!
//! The core lives in [`codec`]: a recursive, bidirectional transformation
//! between an untagged [`Value`] and the tagged single-key [`AttributeValue`]
//! records of the item storage model, with deliberate policies for the
//! ambiguous cases (empty collections collapse to null, mixed sequences fall
//! back to lists, numbers pass through as strings unvalidated).
//!
//! This crate performs no network I/O. Sending the encoded records anywhere
//! is the job of a separate store client; the contract here is only to
//! produce and consume exactly the tagged record shapes.
//!
//! ## Example
//!
//! ```
//! use dynamodb_attr_codec::{deserialize_value, serialize_value, Value};
//!
//! let av = serialize_value(Value::from("hello"));
//! assert_eq!(serde_json::to_string(&av).unwrap(), r#"{"S":"hello"}"#);
//!
//! let decoded = deserialize_value(Value::from(av)).unwrap();
//! assert_eq!(decoded, Value::from("hello"));
//! ```

pub mod codec;
pub mod error;
pub mod item;
pub mod logging;

pub use codec::{
    deserialize_item, deserialize_value, is_attribute_value, serialize_item, serialize_value,
    AttributeValue, Blob, Tag, Value,
};
pub use error::{CodecError, Result};
pub use item::Item;

#[cfg(test)]
mod tests;
