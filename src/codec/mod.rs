//! # Attribute-Value Codec
//!
//! A pure, recursive, bidirectional codec between native dynamic values and
//! the tagged "attribute value" records of the DynamoDB item wire format.
//!
//! ## Components
//!
//! - [`Value`]: the untagged native domain (booleans, numbers, strings,
//!   bytes, sequences, string-keyed maps, absent).
//! - [`AttributeValue`] and [`Tag`]: the tagged wire domain, a closed union
//!   of ten kinds whose serde form is the single-key record of the item
//!   format.
//! - [`serialize_value`] / [`deserialize_value`]: the recursive codec.
//! - [`serialize_item`] / [`deserialize_item`]: the same, applied across
//!   every value of a string-keyed record.
//! - [`is_attribute_value`]: the structural "already encoded?" predicate.
//!
//! Every operation is a pure function: no I/O, no shared mutable state, no
//! input mutation. Recursion depth is bounded by the depth of the input
//! value, so callers feeding pathologically deep structures should guard
//! their own stack budget.
//!
//! ## Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use dynamodb_attr_codec::{deserialize_item, serialize_item, Value};
//!
//! let item = BTreeMap::from([
//!     ("name".to_owned(), Value::from("widget")),
//!     ("sizes".to_owned(), Value::from(vec![Value::from(1.0), Value::from(2.0)])),
//! ]);
//!
//! let encoded = serialize_item(item.clone());
//! let wire: BTreeMap<String, Value> = encoded
//!     .into_iter()
//!     .map(|(k, v)| (k, Value::from(v)))
//!     .collect();
//! assert_eq!(deserialize_item(wire).unwrap(), item);
//! ```

mod attribute;
mod deserialize;
mod serialize;
mod value;

pub use attribute::{is_attribute_value, AttributeValue, Blob, Tag};
pub use deserialize::{deserialize_item, deserialize_value};
pub use serialize::{serialize_item, serialize_value};
pub use value::Value;
