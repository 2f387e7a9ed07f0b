use std::collections::BTreeMap;

use crate::codec::{serialize_item, AttributeValue, Value};

/// A DynamoDB item held in the native domain.
///
/// In DynamoDB, an item is a collection of attributes, each with a name and a
/// value. This builder keeps attributes as native [`Value`]s and bridges to
/// the tagged wire form through the codec, so callers never construct tagged
/// records by hand.
///
/// # Example
///
/// ```
/// use dynamodb_attr_codec::Item;
///
/// let item = Item::new()
///     .set_string("user_id", "12345")
///     .set_string("username", "johndoe")
///     .set_number("age", 30.0);
///
/// let attributes = item.into_attributes();
/// assert_eq!(serde_json::to_string(&attributes["age"]).unwrap(), r#"{"N":"30"}"#);
/// ```
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Item {
    attributes: BTreeMap<String, Value>,
}

impl Item {
    /// Creates a new empty `Item`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute from anything convertible into a [`Value`].
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Sets a string attribute.
    pub fn set_string(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value.into())
    }

    /// Sets a number attribute.
    ///
    /// Numbers encode with high precision as strings on the wire.
    pub fn set_number(self, key: impl Into<String>, value: impl Into<f64>) -> Self {
        self.set(key, value.into())
    }

    /// Sets a boolean attribute.
    pub fn set_bool(self, key: impl Into<String>, value: bool) -> Self {
        self.set(key, value)
    }

    /// Sets a binary attribute.
    pub fn set_bytes(self, key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.set(key, value.into())
    }

    /// Sets an explicitly absent attribute.
    pub fn set_null(self, key: impl Into<String>) -> Self {
        self.set(key, Value::Null)
    }

    /// Gets an attribute.
    ///
    /// Returns `None` if the attribute doesn't exist.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Gets the value of an attribute as a string.
    ///
    /// Returns `None` if the attribute doesn't exist or is not a string.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }

    /// Gets the value of an attribute as a number.
    ///
    /// Returns `None` if the attribute doesn't exist or is not a number.
    pub fn get_number(&self, key: &str) -> Option<f64> {
        self.attributes.get(key).and_then(Value::as_number)
    }

    /// Gets the value of an attribute as a boolean.
    ///
    /// Returns `None` if the attribute doesn't exist or is not a boolean.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.attributes.get(key).and_then(Value::as_bool)
    }

    /// Returns the native attributes of this item.
    pub fn attributes(&self) -> &BTreeMap<String, Value> {
        &self.attributes
    }

    /// Encodes this item into its tagged wire form, consuming it.
    pub fn into_attributes(self) -> BTreeMap<String, AttributeValue> {
        serialize_item(self.attributes)
    }

    /// Decodes a wire-form record into an item.
    pub fn from_attributes(attributes: BTreeMap<String, AttributeValue>) -> Self {
        Self {
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.clone(), v.decode()))
                .collect(),
        }
    }
}

impl From<BTreeMap<String, Value>> for Item {
    fn from(attributes: BTreeMap<String, Value>) -> Self {
        Self { attributes }
    }
}

impl From<Item> for BTreeMap<String, Value> {
    fn from(item: Item) -> Self {
        item.attributes
    }
}
