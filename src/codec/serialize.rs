use std::collections::BTreeMap;
use tracing::debug;

use super::{AttributeValue, Blob, Value};

/// Encodes a native value into its tagged attribute-value form.
///
/// Dispatch is a single exhaustive match over the closed native domain.
/// Sequences pick the narrowest set kind whose element types allow it:
/// all numbers → `NS`, all strings → `SS`, all bytes-or-strings → `BS`,
/// anything else → `L` with element-wise recursion.
///
/// Empty payloads collapse: the empty string, an empty byte sequence, the
/// empty sequence, and a sequence of only empty strings all encode as
/// `NULL`. DynamoDB historically rejects empty string and binary attribute
/// values, and this codec degrades to null instead of failing. The collapse
/// is lossy (it erases the distinction between empty and absent), so each
/// occurrence is logged at debug level.
///
/// A map that is already a valid tagged attribute value passes through
/// unchanged, making encoding idempotent. Encoding never fails.
///
/// # Example
///
/// ```
/// use dynamodb_attr_codec::{serialize_value, AttributeValue, Value};
///
/// assert_eq!(
///     serialize_value(Value::from(vec![Value::from(1.0), Value::from(2.0)])),
///     AttributeValue::Ns(vec!["1".to_owned(), "2".to_owned()]),
/// );
/// assert_eq!(serialize_value(Value::from("")), AttributeValue::Null(true));
/// ```
pub fn serialize_value(value: Value) -> AttributeValue {
    match value {
        Value::Bool(b) => AttributeValue::Bool(b),
        // no range or NaN rejection: the wire format has no numeric type,
        // so whatever the default string conversion produces goes through
        Value::Number(n) => AttributeValue::N(format_number(n)),
        Value::String(s) if s.is_empty() => {
            debug!("empty string collapsed to NULL");
            AttributeValue::Null(true)
        }
        Value::String(s) => AttributeValue::S(s),
        Value::Bytes(b) if b.is_empty() => {
            debug!("empty byte sequence collapsed to NULL");
            AttributeValue::Null(true)
        }
        Value::Bytes(b) => AttributeValue::B(Blob::new(b)),
        Value::List(elems) => serialize_sequence(elems),
        Value::Map(map) => match AttributeValue::from_tagged_map(&map) {
            // already encoded: pass through unchanged
            Some(av) => av,
            None => AttributeValue::M(
                map.into_iter().map(|(k, v)| (k, serialize_value(v))).collect(),
            ),
        },
        Value::Null => AttributeValue::Null(true),
    }
}

/// Encodes every value of a string-keyed record, preserving keys.
///
/// This is the top-level item encoding entry point: it applies
/// [`serialize_value`] one level deep and never branches on tags itself.
pub fn serialize_item(item: BTreeMap<String, Value>) -> BTreeMap<String, AttributeValue> {
    item.into_iter().map(|(k, v)| (k, serialize_value(v))).collect()
}

/// Picks the set kind for a sequence, in fixed order: number homogeneity,
/// then string homogeneity, then bytes-or-string homogeneity, then the
/// recursive list fallback. The empty sequence reaches the string branch
/// vacuously and collapses to `NULL` along with all-empty-string sequences.
fn serialize_sequence(elems: Vec<Value>) -> AttributeValue {
    if !elems.is_empty() {
        if let Some(numbers) = elems
            .iter()
            .map(Value::as_number)
            .collect::<Option<Vec<_>>>()
        {
            return AttributeValue::Ns(numbers.into_iter().map(format_number).collect());
        }
    }

    if let Some(strings) = elems.iter().map(Value::as_str).collect::<Option<Vec<_>>>() {
        if strings.iter().all(|s| s.is_empty()) {
            debug!("sequence with no distinguishable members collapsed to NULL");
            return AttributeValue::Null(true);
        }
        return AttributeValue::Ss(strings.into_iter().map(str::to_owned).collect());
    }

    if let Some(blobs) = elems
        .iter()
        .map(|elem| match elem {
            Value::Bytes(b) => Some(Blob::new(b.clone())),
            Value::String(s) => Some(Blob::new(s.as_bytes().to_vec())),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()
    {
        return AttributeValue::Bs(blobs);
    }

    AttributeValue::L(elems.into_iter().map(serialize_value).collect())
}

/// Canonical string form of a number, as `f64` displays it: integral values
/// print without a fraction (`3`, not `3.0`), and the special values print as
/// `NaN`, `inf` and `-inf`, which the parse path accepts back.
pub(crate) fn format_number(n: f64) -> String {
    n.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_formatting_is_canonical() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-0.5), "-0.5");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn sequence_order_checks_numbers_before_strings() {
        // a sequence of number-looking strings is still a string set
        let av = serialize_value(Value::from(vec![Value::from("1"), Value::from("2")]));
        assert_eq!(av, AttributeValue::Ss(vec!["1".to_owned(), "2".to_owned()]));
    }

    #[test]
    fn mixed_bytes_and_strings_become_a_binary_set() {
        let av = serialize_value(Value::from(vec![
            Value::Bytes(vec![0u8, 1]),
            Value::from("ab"),
        ]));
        assert_eq!(
            av,
            AttributeValue::Bs(vec![Blob::new(vec![0u8, 1]), Blob::new(b"ab".to_vec())])
        );
    }
}
