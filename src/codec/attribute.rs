use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

use super::deserialize::parse_number_str;
use super::serialize::format_number;
use super::Value;

/// The closed set of attribute kinds.
///
/// Every well-formed attribute value on the wire is a record with exactly one
/// key, and that key is one of these ten canonical names. The set is closed:
/// dispatching on a `Tag` is exhaustive, and an unrecognized key never reaches
/// the decode path because [`is_attribute_value`] gates it first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Binary: a single byte sequence.
    B,
    /// Boolean.
    Bool,
    /// Binary set: a sequence of byte sequences.
    Bs,
    /// List: a sequence of nested attribute values.
    L,
    /// Map: string keys to nested attribute values.
    M,
    /// Number, carried in its canonical string form.
    N,
    /// Number set: a sequence of number strings.
    Ns,
    /// Null marker, carrying `true` when present.
    Null,
    /// String.
    S,
    /// String set.
    Ss,
}

impl Tag {
    /// Every tag, in canonical wire-key order.
    pub const ALL: [Tag; 10] = [
        Tag::B,
        Tag::Bool,
        Tag::Bs,
        Tag::L,
        Tag::M,
        Tag::N,
        Tag::Ns,
        Tag::Null,
        Tag::S,
        Tag::Ss,
    ];

    /// Returns the canonical wire key for this tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::B => "B",
            Tag::Bool => "BOOL",
            Tag::Bs => "BS",
            Tag::L => "L",
            Tag::M => "M",
            Tag::N => "N",
            Tag::Ns => "NS",
            Tag::Null => "NULL",
            Tag::S => "S",
            Tag::Ss => "SS",
        }
    }

    /// Looks up a tag by its wire key. Returns `None` for anything outside
    /// the ten-key set.
    pub fn from_key(key: &str) -> Option<Tag> {
        match key {
            "B" => Some(Tag::B),
            "BOOL" => Some(Tag::Bool),
            "BS" => Some(Tag::Bs),
            "L" => Some(Tag::L),
            "M" => Some(Tag::M),
            "N" => Some(Tag::N),
            "NS" => Some(Tag::Ns),
            "NULL" => Some(Tag::Null),
            "S" => Some(Tag::S),
            "SS" => Some(Tag::Ss),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A byte-sequence payload.
///
/// JSON has no binary kind, so `B` and `BS` payloads transport as base64
/// strings, matching the DynamoDB wire convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob(Vec<u8>);

impl Blob {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for Blob {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl Serialize for Blob {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(&self.0))
    }
}

impl<'de> Deserialize<'de> for Blob {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(&encoded)
            .map(Blob)
            .map_err(serde::de::Error::custom)
    }
}

/// A tagged attribute value: the wire-side representation of one value in a
/// DynamoDB item.
///
/// The serde representation is externally tagged, so serializing any variant
/// produces exactly the single-key record of the item wire format:
///
/// ```
/// use dynamodb_attr_codec::AttributeValue;
///
/// let av = AttributeValue::S("hello".to_owned());
/// assert_eq!(serde_json::to_string(&av).unwrap(), r#"{"S":"hello"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    B(Blob),
    #[serde(rename = "BOOL")]
    Bool(bool),
    #[serde(rename = "BS")]
    Bs(Vec<Blob>),
    L(Vec<AttributeValue>),
    M(BTreeMap<String, AttributeValue>),
    N(String),
    #[serde(rename = "NS")]
    Ns(Vec<String>),
    #[serde(rename = "NULL")]
    Null(bool),
    S(String),
    #[serde(rename = "SS")]
    Ss(Vec<String>),
}

impl AttributeValue {
    /// Returns the tag identifying this value's kind.
    pub fn tag(&self) -> Tag {
        match self {
            Self::B(_) => Tag::B,
            Self::Bool(_) => Tag::Bool,
            Self::Bs(_) => Tag::Bs,
            Self::L(_) => Tag::L,
            Self::M(_) => Tag::M,
            Self::N(_) => Tag::N,
            Self::Ns(_) => Tag::Ns,
            Self::Null(_) => Tag::Null,
            Self::S(_) => Tag::S,
            Self::Ss(_) => Tag::Ss,
        }
    }

    /// Decodes this attribute value into the native domain.
    ///
    /// Unlike the tolerant [`deserialize_value`](super::deserialize_value),
    /// this is total: the typed payload shapes leave no failure path, and the
    /// closed enum makes an unrecognized tag unrepresentable.
    pub fn decode(&self) -> Value {
        match self {
            Self::B(blob) => Value::Bytes(blob.as_bytes().to_vec()),
            Self::Bool(b) => Value::Bool(*b),
            Self::Bs(blobs) => Value::List(
                blobs
                    .iter()
                    .map(|blob| Value::Bytes(blob.as_bytes().to_vec()))
                    .collect(),
            ),
            Self::L(elems) => Value::List(elems.iter().map(Self::decode).collect()),
            Self::M(map) => {
                Value::Map(map.iter().map(|(k, v)| (k.clone(), v.decode())).collect())
            }
            Self::N(n) => Value::Number(parse_number_str(n)),
            Self::Ns(ns) => Value::List(
                ns.iter().map(|n| Value::Number(parse_number_str(n))).collect(),
            ),
            // the null marker decodes to absent whatever its payload says
            Self::Null(_) => Value::Null,
            Self::S(s) => Value::String(s.clone()),
            Self::Ss(ss) => Value::List(ss.iter().map(|s| Value::String(s.clone())).collect()),
        }
    }

    /// Reconstructs a typed attribute value from a native map already shaped
    /// like one (single recognized tag key with a payload fitting that tag).
    ///
    /// Returns `None` when the payload does not actually fit the tag; callers
    /// treat such a map as not-yet-encoded.
    pub(crate) fn from_tagged_map(map: &BTreeMap<String, Value>) -> Option<Self> {
        let tag = tag_of(map)?;
        Self::from_tag_payload(tag, map.values().next()?)
    }

    fn from_tag_payload(tag: Tag, payload: &Value) -> Option<Self> {
        match tag {
            Tag::B => coerce_blob(payload).map(Self::B),
            Tag::Bool => payload.as_bool().map(Self::Bool),
            Tag::Bs => match payload {
                Value::List(elems) => elems
                    .iter()
                    .map(coerce_blob)
                    .collect::<Option<Vec<_>>>()
                    .map(Self::Bs),
                _ => None,
            },
            Tag::L => match payload {
                Value::List(elems) => elems
                    .iter()
                    .map(|elem| match elem {
                        Value::Map(inner) => Self::from_tagged_map(inner),
                        _ => None,
                    })
                    .collect::<Option<Vec<_>>>()
                    .map(Self::L),
                _ => None,
            },
            Tag::M => match payload {
                Value::Map(entries) => entries
                    .iter()
                    .map(|(k, v)| match v {
                        Value::Map(inner) => {
                            Self::from_tagged_map(inner).map(|av| (k.clone(), av))
                        }
                        _ => None,
                    })
                    .collect::<Option<BTreeMap<_, _>>>()
                    .map(Self::M),
                _ => None,
            },
            Tag::N => match payload {
                Value::String(s) => Some(Self::N(s.clone())),
                Value::Number(n) => Some(Self::N(format_number(*n))),
                _ => None,
            },
            Tag::Ns => match payload {
                Value::List(elems) => elems
                    .iter()
                    .map(|elem| match elem {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(format_number(*n)),
                        _ => None,
                    })
                    .collect::<Option<Vec<_>>>()
                    .map(Self::Ns),
                _ => None,
            },
            Tag::Null => payload.as_bool().map(Self::Null),
            Tag::S => payload.as_str().map(|s| Self::S(s.to_owned())),
            Tag::Ss => match payload {
                Value::List(elems) => elems
                    .iter()
                    .map(|elem| elem.as_str().map(str::to_owned))
                    .collect::<Option<Vec<_>>>()
                    .map(Self::Ss),
                _ => None,
            },
        }
    }
}

fn coerce_blob(payload: &Value) -> Option<Blob> {
    match payload {
        Value::Bytes(b) => Some(Blob::new(b.clone())),
        Value::String(s) => Some(Blob::new(s.as_bytes().to_vec())),
        _ => None,
    }
}

/// Projects a typed attribute value back into the native domain as the tagged
/// single-key map it represents on the wire. This is the untagged view used
/// by the tolerant decode path and by callers holding partially encoded data.
impl From<AttributeValue> for Value {
    fn from(av: AttributeValue) -> Value {
        let tag = av.tag();
        let payload = match av {
            AttributeValue::B(blob) => Value::Bytes(blob.into_bytes()),
            AttributeValue::Bool(b) => Value::Bool(b),
            AttributeValue::Bs(blobs) => Value::List(
                blobs.into_iter().map(|b| Value::Bytes(b.into_bytes())).collect(),
            ),
            AttributeValue::L(elems) => {
                Value::List(elems.into_iter().map(Value::from).collect())
            }
            AttributeValue::M(map) => Value::Map(
                map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            ),
            AttributeValue::N(n) => Value::String(n),
            AttributeValue::Ns(ns) => {
                Value::List(ns.into_iter().map(Value::String).collect())
            }
            AttributeValue::Null(b) => Value::Bool(b),
            AttributeValue::S(s) => Value::String(s),
            AttributeValue::Ss(ss) => {
                Value::List(ss.into_iter().map(Value::String).collect())
            }
        };
        Value::Map(BTreeMap::from([(tag.as_str().to_owned(), payload)]))
    }
}

/// Returns the tag of a single-key map whose key is a canonical tag name.
pub(crate) fn tag_of(map: &BTreeMap<String, Value>) -> Option<Tag> {
    if map.len() != 1 {
        return None;
    }
    map.keys().next().and_then(|key| Tag::from_key(key))
}

/// Structural predicate: is this value already a tagged attribute value?
///
/// True iff the value is a map with exactly one key and that key is one of
/// the ten canonical tag names. The check is not recursive and does not
/// validate the payload shape; it is the dispatch gate for decoding and the
/// idempotence check for encoding.
pub fn is_attribute_value(value: &Value) -> bool {
    match value {
        Value::Map(map) => tag_of(map).is_some(),
        _ => false,
    }
}
