//! JSON object view over an [`OrderedMap`].

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::map::OrderedMap;
use super::types::Value;

/// A JSON object: string keys mapped to values, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    members: OrderedMap<String, Value>,
}

impl Object {
    /// Create an empty object.
    pub const fn new() -> Self {
        Self {
            members: OrderedMap::new(),
        }
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the object has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Value of the member `key`, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.members.get(key)
    }

    /// Mutable value of the member `key`, if present.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.members.get_mut(key)
    }

    /// Value of the member `key`, creating a `Value::None` member at the end
    /// when it does not exist yet.
    pub fn get_or_create(&mut self, key: &str) -> &mut Value {
        self.members.get_or_insert(key)
    }

    /// Append a member. An existing member with the same key is shadowed,
    /// not replaced; use [`Object::get_or_create`] to overwrite.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.members.insert(key.into(), value.into());
    }

    /// Returns true if a member named `key` exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.members.contains_key(key)
    }

    /// Remove and return the last member.
    pub fn pop(&mut self) -> Option<(String, Value)> {
        self.members.pop()
    }

    /// Iterate over members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.members.iter()
    }

    /// Member names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.members.keys()
    }

    /// The underlying ordered map.
    pub fn as_map(&self) -> &OrderedMap<String, Value> {
        &self.members
    }
}

impl From<OrderedMap<String, Value>> for Object {
    fn from(members: OrderedMap<String, Value>) -> Self {
        Self { members }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = Self::new();
        for (k, v) in iter {
            object.insert(k, v);
        }
        object
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = <OrderedMap<String, Value> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl Serialize for Object {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
