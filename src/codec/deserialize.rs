use std::collections::BTreeMap;
use tracing::debug;

use super::attribute::tag_of;
use super::{Tag, Value};
use crate::error::{CodecError, Result};

/// Decodes a tagged value back into the native domain, tolerantly.
///
/// The input is dynamic rather than typed because callers may hold data in
/// any state of encoding:
///
/// - a raw sequence (a container pre-unwrapped by the caller) decodes
///   element-wise;
/// - a valid tagged value dispatches on its single tag;
/// - any other map decodes value-wise, treating it as an already-native map
///   whose values might still be encoded — partially encoded input decodes
///   as deep as possible instead of failing outright;
/// - bare scalars come back unchanged.
///
/// The only failure path is a recognized tag carrying a payload that the
/// dispatched decode cannot work with, e.g. an `L` whose payload is not a
/// sequence. Binary payloads transported as strings coerce to their bytes.
///
/// # Example
///
/// ```
/// use dynamodb_attr_codec::{deserialize_value, serialize_value, Value};
///
/// let wire = Value::from(serialize_value(Value::from("hello")));
/// assert_eq!(deserialize_value(wire).unwrap(), Value::from("hello"));
/// ```
pub fn deserialize_value(value: Value) -> Result<Value> {
    match value {
        Value::List(elems) => Ok(Value::List(
            elems
                .into_iter()
                .map(deserialize_value)
                .collect::<Result<_>>()?,
        )),
        Value::Map(map) => match tag_of(&map) {
            Some(tag) => {
                let payload = map.into_values().next().unwrap_or(Value::Null);
                decode_tagged(tag, payload)
            }
            None => {
                debug!("map is not a tagged value, decoding its values in place");
                Ok(Value::Map(
                    map.into_iter()
                        .map(|(k, v)| Ok((k, deserialize_value(v)?)))
                        .collect::<Result<_>>()?,
                ))
            }
        },
        other => Ok(other),
    }
}

/// Decodes every value of a string-keyed record, preserving keys.
///
/// The top-level item decoding entry point, the mirror of
/// [`serialize_item`](super::serialize_item): one level of
/// [`deserialize_value`], no tag branching of its own.
pub fn deserialize_item(item: BTreeMap<String, Value>) -> Result<BTreeMap<String, Value>> {
    item.into_iter()
        .map(|(k, v)| Ok((k, deserialize_value(v)?)))
        .collect()
}

fn decode_tagged(tag: Tag, payload: Value) -> Result<Value> {
    match tag {
        Tag::B => coerce_bytes(tag, payload).map(Value::Bytes),
        // the boolean payload comes back unchanged
        Tag::Bool => Ok(payload),
        Tag::Bs => match payload {
            Value::List(elems) => Ok(Value::List(
                elems
                    .into_iter()
                    .map(|elem| coerce_bytes(tag, elem).map(Value::Bytes))
                    .collect::<Result<_>>()?,
            )),
            other => Err(CodecError::invalid_payload(tag, "a sequence", &other)),
        },
        Tag::L => match payload {
            Value::List(elems) => Ok(Value::List(
                elems
                    .into_iter()
                    .map(deserialize_value)
                    .collect::<Result<_>>()?,
            )),
            other => Err(CodecError::invalid_payload(tag, "a sequence", &other)),
        },
        Tag::M => match payload {
            Value::Map(map) => Ok(Value::Map(
                map.into_iter()
                    .map(|(k, v)| Ok((k, deserialize_value(v)?)))
                    .collect::<Result<_>>()?,
            )),
            other => Err(CodecError::invalid_payload(tag, "a map", &other)),
        },
        Tag::N => Ok(Value::Number(parse_number(&payload))),
        Tag::Ns => match payload {
            Value::List(elems) => Ok(Value::List(
                elems
                    .iter()
                    .map(|elem| Value::Number(parse_number(elem)))
                    .collect(),
            )),
            other => Err(CodecError::invalid_payload(tag, "a sequence", &other)),
        },
        // always absent, whatever the marker payload says
        Tag::Null => Ok(Value::Null),
        Tag::S => Ok(payload),
        Tag::Ss => Ok(payload),
    }
}

fn coerce_bytes(tag: Tag, payload: Value) -> Result<Vec<u8>> {
    match payload {
        Value::Bytes(b) => Ok(b),
        // binary transported as a string coerces to its bytes
        Value::String(s) => Ok(s.into_bytes()),
        other => Err(CodecError::invalid_payload(
            tag,
            "bytes or a string",
            &other,
        )),
    }
}

fn parse_number(payload: &Value) -> f64 {
    match payload {
        Value::Number(n) => *n,
        Value::String(s) => parse_number_str(s),
        _ => f64::NAN,
    }
}

/// Parses a number string: single-digit integers (optionally signed) take the
/// integer path, everything else parses as floating point, and unparseable
/// input yields NaN. The narrow integer fast path matches the behavior the
/// wire format's existing consumers rely on; in the `f64` domain both paths
/// agree on the value.
pub(crate) fn parse_number_str(s: &str) -> f64 {
    if is_single_digit_int(s) {
        s.parse::<i64>().map_or(f64::NAN, |i| i as f64)
    } else {
        s.parse::<f64>().unwrap_or(f64::NAN)
    }
}

fn is_single_digit_int(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    digits.len() == 1 && digits.as_bytes()[0].is_ascii_digit()
}
