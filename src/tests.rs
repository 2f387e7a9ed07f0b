//! Codec test suite.
//!
//! These tests pin down the codec's observable contract:
//! - round-trips for every primitive kind
//! - the empty-collapse policy (empty string/bytes/sequence encode as NULL)
//! - set-kind dispatch for homogeneous sequences and the list fallback
//! - idempotence on already-tagged input
//! - tolerant decoding of raw sequences and partially encoded maps
//! - the defensive error for impossible payloads under a recognized tag
//! - the exact single-key JSON wire shapes

use std::collections::BTreeMap;

use crate::{
    deserialize_item, deserialize_value, is_attribute_value, serialize_item, serialize_value,
    AttributeValue, Blob, CodecError, Item, Value,
};

fn record(entries: Vec<(&str, Value)>) -> BTreeMap<String, Value> {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v))
        .collect()
}

/// Encode a native value, then hand the wire form back to the tolerant
/// decoder the way a caller holding dynamic wire data would.
fn round_trip(value: Value) -> Value {
    deserialize_value(Value::from(serialize_value(value))).expect("round trip decode")
}

#[test]
fn round_trip_primitives() {
    assert_eq!(round_trip(Value::from("hello")), Value::from("hello"));
    assert_eq!(round_trip(Value::from(true)), Value::from(true));
    assert_eq!(round_trip(Value::from(false)), Value::from(false));
    assert_eq!(round_trip(Value::from(42.5)), Value::from(42.5));
    assert_eq!(round_trip(Value::from(7)), Value::from(7.0));
    assert_eq!(round_trip(Value::from(-1234.0)), Value::from(-1234.0));
    assert_eq!(
        round_trip(Value::Bytes(b"abc".to_vec())),
        Value::Bytes(b"abc".to_vec())
    );
    assert_eq!(round_trip(Value::Null), Value::Null);
}

#[test]
fn round_trip_special_numbers() {
    assert_eq!(
        serialize_value(Value::from(f64::INFINITY)),
        AttributeValue::N("inf".to_owned())
    );
    assert_eq!(round_trip(Value::from(f64::INFINITY)), Value::from(f64::INFINITY));
    assert_eq!(
        round_trip(Value::from(f64::NEG_INFINITY)),
        Value::from(f64::NEG_INFINITY)
    );

    assert_eq!(
        serialize_value(Value::from(f64::NAN)),
        AttributeValue::N("NaN".to_owned())
    );
    assert!(round_trip(Value::from(f64::NAN))
        .as_number()
        .expect("number")
        .is_nan());
}

#[test]
fn empty_collapse_law() {
    assert_eq!(serialize_value(Value::from("")), AttributeValue::Null(true));
    assert_eq!(
        serialize_value(Value::List(Vec::new())),
        AttributeValue::Null(true)
    );
    assert_eq!(
        serialize_value(Value::Bytes(Vec::new())),
        AttributeValue::Null(true)
    );
    assert_eq!(
        serialize_value(Value::from(vec![Value::from(""), Value::from("")])),
        AttributeValue::Null(true)
    );
}

#[test]
fn homogeneity_dispatch() {
    assert_eq!(
        serialize_value(Value::from(vec![
            Value::from(1.0),
            Value::from(2.0),
            Value::from(3.0),
        ])),
        AttributeValue::Ns(vec!["1".to_owned(), "2".to_owned(), "3".to_owned()])
    );

    assert_eq!(
        serialize_value(Value::from(vec![Value::from("a"), Value::from("b")])),
        AttributeValue::Ss(vec!["a".to_owned(), "b".to_owned()])
    );

    assert_eq!(
        serialize_value(Value::from(vec![Value::from(1.0), Value::from("a")])),
        AttributeValue::L(vec![
            AttributeValue::N("1".to_owned()),
            AttributeValue::S("a".to_owned()),
        ])
    );
}

#[test]
fn string_set_keeps_empty_members_when_any_is_distinguishable() {
    assert_eq!(
        serialize_value(Value::from(vec![Value::from(""), Value::from("a")])),
        AttributeValue::Ss(vec![String::new(), "a".to_owned()])
    );
}

#[test]
fn binary_set_coerces_string_members() {
    let av = serialize_value(Value::from(vec![
        Value::Bytes(vec![1u8, 2]),
        Value::from("xy"),
    ]));
    assert_eq!(
        av,
        AttributeValue::Bs(vec![Blob::new(vec![1u8, 2]), Blob::new(b"xy".to_vec())])
    );
}

#[test]
fn serialize_is_idempotent_on_tagged_input() {
    let tagged = Value::Map(record(vec![("S", Value::from("x"))]));
    assert!(is_attribute_value(&tagged));
    assert_eq!(serialize_value(tagged), AttributeValue::S("x".to_owned()));

    let tagged_set = Value::Map(record(vec![(
        "NS",
        Value::from(vec![Value::from("1"), Value::from("2")]),
    )]));
    assert_eq!(
        serialize_value(tagged_set),
        AttributeValue::Ns(vec!["1".to_owned(), "2".to_owned()])
    );
}

#[test]
fn tagged_map_with_unfitting_payload_encodes_as_plain_map() {
    // a single "S" key whose payload is a number is not actually encoded
    let not_really_tagged = Value::Map(record(vec![("S", Value::from(5.0))]));
    assert_eq!(
        serialize_value(not_really_tagged),
        AttributeValue::M(BTreeMap::from([(
            "S".to_owned(),
            AttributeValue::N("5".to_owned())
        )]))
    );
}

#[test]
fn item_round_trip() {
    let item = record(vec![
        ("a", Value::from(1.0)),
        ("b", Value::from("x")),
        ("c", Value::from(vec![Value::from(1.0), Value::from(2.0)])),
    ]);

    let encoded = serialize_item(item.clone());
    assert_eq!(encoded["a"], AttributeValue::N("1".to_owned()));
    assert_eq!(encoded["b"], AttributeValue::S("x".to_owned()));
    assert_eq!(
        encoded["c"],
        AttributeValue::Ns(vec!["1".to_owned(), "2".to_owned()])
    );

    let wire: BTreeMap<String, Value> = encoded
        .into_iter()
        .map(|(k, v)| (k, Value::from(v)))
        .collect();
    assert_eq!(deserialize_item(wire).expect("decode item"), item);
}

#[test]
fn null_decode_is_total() {
    let null_true = Value::Map(record(vec![("NULL", Value::from(true))]));
    let null_false = Value::Map(record(vec![("NULL", Value::from(false))]));
    assert_eq!(deserialize_value(null_true).unwrap(), Value::Null);
    assert_eq!(deserialize_value(null_false).unwrap(), Value::Null);
}

#[test]
fn nested_structures_recurse_at_every_level() {
    let original = Value::Map(record(vec![(
        "orders",
        Value::from(vec![
            Value::Map(record(vec![
                ("id", Value::from("o-1")),
                ("qty", Value::from(vec![Value::from(2.0), Value::from(5.0)])),
            ])),
            Value::Map(record(vec![
                ("id", Value::from("o-2")),
                ("note", Value::from(vec![Value::from("a"), Value::from(1.0)])),
            ])),
        ]),
    )]));

    let encoded = serialize_value(original.clone());
    // outer map -> M, order list -> L, each order -> M, qty -> NS, note -> L
    match &encoded {
        AttributeValue::M(fields) => match &fields["orders"] {
            AttributeValue::L(orders) => {
                assert!(matches!(orders[0], AttributeValue::M(_)));
                assert!(matches!(orders[1], AttributeValue::M(_)));
            }
            other => panic!("expected L, got {other:?}"),
        },
        other => panic!("expected M, got {other:?}"),
    }

    assert_eq!(
        deserialize_value(Value::from(encoded)).expect("decode"),
        original
    );
}

#[test]
fn deserialize_tolerates_raw_sequences() {
    let wire = Value::from(vec![
        Value::Map(record(vec![("N", Value::from("1"))])),
        Value::Map(record(vec![("S", Value::from("a"))])),
    ]);
    assert_eq!(
        deserialize_value(wire).unwrap(),
        Value::from(vec![Value::from(1.0), Value::from("a")])
    );
}

#[test]
fn deserialize_recurses_into_untagged_maps() {
    // a plain map whose values are still encoded decodes as deep as possible
    let wire = Value::Map(record(vec![
        ("a", Value::Map(record(vec![("S", Value::from("x"))]))),
        ("b", Value::from(true)),
        (
            "c",
            Value::Map(record(vec![
                ("inner", Value::Map(record(vec![("N", Value::from("42"))]))),
                ("plain", Value::from("y")),
            ])),
        ),
    ]));

    assert_eq!(
        deserialize_value(wire).unwrap(),
        Value::Map(record(vec![
            ("a", Value::from("x")),
            ("b", Value::from(true)),
            (
                "c",
                Value::Map(record(vec![
                    ("inner", Value::from(42.0)),
                    ("plain", Value::from("y")),
                ])),
            ),
        ]))
    );
}

#[test]
fn deserialize_coerces_binary_transported_as_string() {
    let wire = Value::Map(record(vec![("B", Value::from("abc"))]));
    assert_eq!(
        deserialize_value(wire).unwrap(),
        Value::Bytes(b"abc".to_vec())
    );

    let set = Value::Map(record(vec![(
        "BS",
        Value::from(vec![Value::from("ab"), Value::Bytes(vec![0u8])]),
    )]));
    assert_eq!(
        deserialize_value(set).unwrap(),
        Value::from(vec![Value::Bytes(b"ab".to_vec()), Value::Bytes(vec![0u8])])
    );
}

#[test]
fn deserialize_rejects_impossible_payloads() {
    let wire = Value::Map(record(vec![("L", Value::from("oops"))]));
    assert_eq!(
        deserialize_value(wire),
        Err(CodecError::InvalidPayload {
            tag: "L",
            expected: "a sequence",
            found: "string",
        })
    );

    let wire = Value::Map(record(vec![("BS", Value::from(1.0))]));
    assert!(matches!(
        deserialize_value(wire),
        Err(CodecError::InvalidPayload { tag: "BS", .. })
    ));

    let wire = Value::Map(record(vec![("M", Value::List(Vec::new()))]));
    assert!(matches!(
        deserialize_value(wire),
        Err(CodecError::InvalidPayload { tag: "M", .. })
    ));
}

#[test]
fn unparseable_number_payloads_decode_to_nan() {
    let wire = Value::Map(record(vec![("N", Value::from("pecan"))]));
    assert!(deserialize_value(wire)
        .unwrap()
        .as_number()
        .expect("number")
        .is_nan());

    // a number set parses element-wise with the same rule
    let wire = Value::Map(record(vec![(
        "NS",
        Value::from(vec![Value::from("7"), Value::from("42"), Value::from("x")]),
    )]));
    let decoded = deserialize_value(wire).unwrap();
    let elems = decoded.as_list().expect("list");
    assert_eq!(elems[0], Value::from(7.0));
    assert_eq!(elems[1], Value::from(42.0));
    assert!(elems[2].as_number().expect("number").is_nan());
}

#[test]
fn wire_json_end_to_end() {
    let item = Item::new()
        .set_string("category", "Electronics")
        .set_string("product_name", "Smartphone")
        .set_number("price", 599.99)
        .set_bool("in_stock", true)
        .set_bytes("thumbnail", b"\x89PNG".to_vec());

    let json = serde_json::to_string(&item.clone().into_attributes()).unwrap();
    let parsed: BTreeMap<String, AttributeValue> = serde_json::from_str(&json).unwrap();
    let restored = Item::from_attributes(parsed);

    assert_eq!(restored.get_string("category"), Some("Electronics"));
    assert_eq!(restored.get_number("price"), Some(599.99));
    assert_eq!(restored.get_bool("in_stock"), Some(true));
    assert_eq!(
        restored.get("thumbnail"),
        Some(&Value::Bytes(b"\x89PNG".to_vec()))
    );
}

#[test]
fn item_operations() {
    let item = Item::new()
        .set_string("key1", "value1")
        .set_number("key2", 42.0);

    assert_eq!(item.get_string("key1"), Some("value1"));
    assert_eq!(item.get_number("key2"), Some(42.0));
    assert_eq!(item.get_string("non_existent"), None);
    assert_eq!(item.get_number("non_existent"), None);
}

#[test]
fn item_null_and_empty_attributes_collapse_on_encode() {
    let item = Item::new().set_null("gone").set_string("empty", "");
    let encoded = item.into_attributes();
    assert_eq!(encoded["gone"], AttributeValue::Null(true));
    assert_eq!(encoded["empty"], AttributeValue::Null(true));
}
