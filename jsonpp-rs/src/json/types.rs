//! The dynamic value model.
//!
//! A [`Value`] holds exactly one payload at a time. Replacing the payload
//! (through [`Value::set`] or plain assignment) drops the old one, and
//! dropping an array or object drops its children first.
//!
//! Strings hold their content exactly as it appeared between the quotes in
//! the source: escape sequences are kept as written, not decoded.

use serde::ser::{Serialize, SerializeSeq, Serializer};

use super::object::Object;

/// Which payload a [`Value`] currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// No payload assigned yet
    None,
    /// Integer or floating point number
    Number,
    /// String
    String,
    /// `true` or `false`
    Boolean,
    /// `null`
    Null,
    /// Array of values
    Array,
    /// Object of key/value members
    Object,
}

impl Kind {
    /// Lowercase name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Kind::None => "none",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Boolean => "boolean",
            Kind::Null => "null",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

/// A number, keeping track of whether it was written as an integer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Integral number
    Int(i64),
    /// Single precision float
    Float(f32),
    /// Double precision float
    Double(f64),
}

impl Number {
    /// Returns true for [`Number::Int`].
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// The integer payload, if this is an `Int`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The value widened to `f64`, whatever the sub-kind.
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(n) => *n as f64,
            Number::Float(f) => f64::from(*f),
            Number::Double(d) => *d,
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Number::Int(n) => serializer.serialize_i64(*n),
            Number::Float(f) => serializer.serialize_f32(*f),
            Number::Double(d) => serializer.serialize_f64(*d),
        }
    }
}

/// A JSON-like value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Freshly created, nothing assigned
    #[default]
    None,
    /// Number with its sub-kind
    Number(Number),
    /// Raw string content
    String(String),
    /// Boolean
    Bool(bool),
    /// `null`
    Null,
    /// Ordered sequence of owned values
    Array(Vec<Value>),
    /// Object with ordered members
    Object(Object),
}

impl Value {
    /// Create a number value.
    pub fn from_number(number: impl Into<Number>) -> Self {
        Value::Number(number.into())
    }

    /// Create a string value.
    pub fn from_string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Create a boolean value.
    pub fn from_bool(b: bool) -> Self {
        Value::Bool(b)
    }

    /// Create an array value.
    pub fn from_array(items: Vec<Value>) -> Self {
        Value::Array(items)
    }

    /// Create an object value.
    pub fn from_object(object: Object) -> Self {
        Value::Object(object)
    }

    /// Create a `null` value.
    pub fn from_null() -> Self {
        Value::Null
    }

    /// Replace the payload, dropping the previous one.
    pub fn set(&mut self, value: impl Into<Value>) -> &mut Self {
        *self = value.into();
        self
    }

    /// Take the payload out, leaving `Value::None` behind.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    /// Extract the payload as `T` if its shape matches the active kind.
    ///
    /// Numbers match on sub-kind: `i64` reads `Int`, `f32` reads `Float`,
    /// `f64` reads `Double`. Use [`Value::as_f64`] to read any number.
    pub fn get<'a, T: FromValue<'a>>(&'a self) -> Option<T> {
        T::from_value(self)
    }

    /// The active kind.
    pub fn kind(&self) -> Kind {
        match self {
            Value::None => Kind::None,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Bool(_) => Kind::Boolean,
            Value::Null => Kind::Null,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Returns the type name as a string for error messages.
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Returns true if nothing has been assigned.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true if this is a number value.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if this is an array value.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true if this is an object value.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns the boolean value if this is a Bool, None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number payload if this is a Number.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the integer if this is an integral Number.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }

    /// Returns any number widened to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(Number::as_f64)
    }

    /// Returns a reference to the string if this is a String, None otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a reference to the array if this is an Array, None otherwise.
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Mutable access to the array payload.
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns a reference to the object if this is an Object, None otherwise.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Mutable access to the object payload.
    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Get a member of an object by key.
    pub fn member(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|o| o.get(key))
    }

    /// Get a value from an array by index.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|a| a.get(index))
    }
}

/// Typed extraction used by [`Value::get`].
pub trait FromValue<'a>: Sized {
    /// Returns `Some` only when `value` holds this shape.
    fn from_value(value: &'a Value) -> Option<Self>;
}

impl<'a> FromValue<'a> for bool {
    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_bool()
    }
}

impl<'a> FromValue<'a> for i64 {
    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_i64()
    }
}

impl<'a> FromValue<'a> for i32 {
    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_i64().and_then(|n| i32::try_from(n).ok())
    }
}

impl<'a> FromValue<'a> for f32 {
    fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Number(Number::Float(f)) => Some(*f),
            _ => None,
        }
    }
}

impl<'a> FromValue<'a> for f64 {
    fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Number(Number::Double(d)) => Some(*d),
            _ => None,
        }
    }
}

impl<'a> FromValue<'a> for &'a Number {
    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_number()
    }
}

impl<'a> FromValue<'a> for &'a str {
    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_str()
    }
}

impl<'a> FromValue<'a> for &'a [Value] {
    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_array().map(Vec::as_slice)
    }
}

impl<'a> FromValue<'a> for &'a Object {
    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_object()
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Int(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Int(i64::from(n))
    }
}

impl From<f32> for Number {
    fn from(f: f32) -> Self {
        Number::Float(f)
    }
}

impl From<f64> for Number {
    fn from(d: f64) -> Self {
        Number::Double(d)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::from_number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::from_number(n)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::from_number(f)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::from_number(d)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::None | Value::Null => serializer.serialize_unit(),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(o) => o.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_none() {
        let v = Value::default();
        assert!(v.is_none());
        assert_eq!(v.kind(), Kind::None);
    }

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(Value::from_number(1i64).kind(), Kind::Number);
        assert_eq!(Value::from_string("s").kind(), Kind::String);
        assert_eq!(Value::from_bool(true).kind(), Kind::Boolean);
        assert_eq!(Value::from_null().kind(), Kind::Null);
        assert_eq!(Value::from_array(vec![]).kind(), Kind::Array);
        assert_eq!(Value::from_object(Object::new()).kind(), Kind::Object);
    }

    #[test]
    fn test_set_replaces_payload() {
        let mut v = Value::from_array(vec![Value::from(1i64), Value::from("x")]);
        v.set(false);
        assert_eq!(v, Value::Bool(false));
        assert!(v.as_array().is_none());

        v.set("text");
        assert_eq!(v.as_str(), Some("text"));
        assert_eq!(v.get::<bool>(), None);
    }

    #[test]
    fn test_get_matches_shape() {
        let int = Value::from(42i64);
        assert_eq!(int.get::<i64>(), Some(42));
        assert_eq!(int.get::<i32>(), Some(42));
        assert_eq!(int.get::<f64>(), None);
        assert_eq!(int.get::<&str>(), None);

        let double = Value::from(2.5f64);
        assert_eq!(double.get::<f64>(), Some(2.5));
        assert_eq!(double.get::<f32>(), None);
        assert_eq!(double.get::<i64>(), None);

        let float = Value::from(1.5f32);
        assert_eq!(float.get::<f32>(), Some(1.5));

        let arr = Value::from(vec![Value::Null]);
        assert_eq!(arr.get::<&[Value]>().map(<[Value]>::len), Some(1));
        assert!(arr.get::<&Object>().is_none());
    }

    #[test]
    fn test_i32_extraction_checks_range() {
        let big = Value::from(i64::MAX);
        assert_eq!(big.get::<i32>(), None);
        assert_eq!(big.get::<i64>(), Some(i64::MAX));
    }

    #[test]
    fn test_as_f64_widens_any_number() {
        assert_eq!(Value::from(3i64).as_f64(), Some(3.0));
        assert_eq!(Value::from(0.5f32).as_f64(), Some(0.5));
        assert_eq!(Value::Null.as_f64(), None);
    }

    #[test]
    fn test_member_and_index() {
        let mut obj = Object::new();
        obj.insert("list", vec![Value::from(1i64), Value::from(2i64)]);
        let v = Value::from(obj);
        assert_eq!(v.member("list").and_then(|l| l.get_index(1)), Some(&Value::from(2i64)));
        assert!(v.member("missing").is_none());
        assert!(v.get_index(0).is_none());
    }

    #[test]
    fn test_take_leaves_none() {
        let mut v = Value::from(true);
        let taken = v.take();
        assert_eq!(taken, Value::Bool(true));
        assert!(v.is_none());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::None.type_name(), "none");
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::Bool(false).type_name(), "boolean");
        assert_eq!(Value::from(0i64).type_name(), "number");
        assert_eq!(Value::from("").type_name(), "string");
        assert_eq!(Value::Array(vec![]).type_name(), "array");
        assert_eq!(Value::Object(Object::new()).type_name(), "object");
    }

    #[test]
    fn test_serialize() {
        let mut obj = Object::new();
        obj.insert("n", 1i64);
        obj.insert("d", 2.5f64);
        obj.insert("list", vec![Value::Null, Value::from(true)]);
        let text = serde_json::to_string(&Value::from(obj)).unwrap();
        assert_eq!(text, r#"{"n":1,"d":2.5,"list":[null,true]}"#);
    }
}
