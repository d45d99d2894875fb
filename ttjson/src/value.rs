//! JSON value representation.

use std::collections::HashMap;
use std::fmt;

/// A decoded JSON value.
///
/// Lists and objects own their children outright; a parsed tree never shares
/// nodes.
#[derive(Clone, PartialEq)]
pub enum Value {
    /// Null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Number written without a fraction or exponent.
    Int(i64),
    /// Number written with a fraction or exponent.
    Double(f64),
    /// String value.
    String(String),
    /// Ordered list of values.
    List(Vec<Value>),
    /// Object (key-value map). Later duplicate keys replace earlier ones.
    Object(HashMap<String, Value>),
}

/// The tag of a [`Value`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Double,
    String,
    List,
    Object,
}

impl ValueKind {
    /// Lower-case type name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Int => "integer",
            ValueKind::Double => "double",
            ValueKind::String => "string",
            ValueKind::List => "list",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Returns which variant is active.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Double(_) => ValueKind::Double,
            Value::String(_) => ValueKind::String,
            Value::List(_) => ValueKind::List,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Returns `true` if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the boolean value if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the float if this is a `Double`.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns either numeric variant as an `f64`.
    ///
    /// Integers beyond 2^53 lose precision.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Double(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a reference to the list if this is a `List`.
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns a reference to the object if this is an `Object`.
    pub fn as_object(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Looks up a member of an object. `None` for missing keys and non-objects.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|obj| obj.get(key))
    }

    /// Looks up an element of a list. `None` when out of range or not a list.
    pub fn index(&self, i: usize) -> Option<&Value> {
        self.as_list().and_then(|items| items.get(i))
    }

    /// Number of children of a list or object, `None` for scalars.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::List(items) => Some(items.len()),
            Value::Object(obj) => Some(obj.len()),
            _ => None,
        }
    }

    /// Takes the list out of a `List`, or hands the value back.
    pub fn into_list(self) -> Result<Vec<Value>, Value> {
        match self {
            Value::List(items) => Ok(items),
            other => Err(other),
        }
    }

    /// Takes the map out of an `Object`, or hands the value back.
    pub fn into_object(self) -> Result<HashMap<String, Value>, Value> {
        match self {
            Value::Object(obj) => Ok(obj),
            other => Err(other),
        }
    }

    /// Takes the text out of a `String`, or hands the value back.
    pub fn into_string(self) -> Result<String, Value> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Double(n) => {
                if n.is_finite() && n.fract() == 0.0 {
                    write!(f, "{:.1}", n)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::String(s) => write!(f, "{:?}", s),
            Value::List(items) => f.debug_list().entries(items).finish(),
            Value::Object(obj) => f.debug_map().entries(obj).finish(),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Double(f)
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
        Value::List(items)
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(obj: HashMap<String, Value>) -> Self {
        Value::Object(obj)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(Value::Null.kind(), ValueKind::Null);
        assert_eq!(Value::from(true).kind(), ValueKind::Bool);
        assert_eq!(Value::from(7i64).kind(), ValueKind::Int);
        assert_eq!(Value::from(0.5).kind(), ValueKind::Double);
        assert_eq!(Value::from("x").kind(), ValueKind::String);
        assert_eq!(Value::from(Vec::<Value>::new()).kind(), ValueKind::List);
        assert_eq!(Value::from(HashMap::<String, Value>::new()).kind(), ValueKind::Object);
        assert_eq!(ValueKind::Double.to_string(), "double");
    }

    #[test]
    fn test_accessors_reject_other_variants() {
        let v = Value::Int(3);
        assert_eq!(v.as_int(), Some(3));
        assert_eq!(v.as_double(), None);
        assert_eq!(v.as_number(), Some(3.0));
        assert_eq!(v.as_str(), None);
        assert_eq!(v.len(), None);
        assert!(!v.is_null());
    }

    #[test]
    fn test_get_and_index() {
        let v = Value::Object(HashMap::from([(
            "a".to_string(),
            Value::List(vec![Value::Int(1), Value::Null]),
        )]));
        assert_eq!(v.get("a").and_then(|a| a.index(1)), Some(&Value::Null));
        assert_eq!(v.get("b"), None);
        assert_eq!(v.index(0), None);
        assert_eq!(v.len(), Some(1));
    }

    #[test]
    fn test_into_payloads() {
        assert_eq!(Value::from("s").into_string(), Ok("s".to_string()));
        assert_eq!(Value::Null.into_list(), Err(Value::Null));
        assert_eq!(
            Value::List(vec![Value::Bool(false)]).into_list(),
            Ok(vec![Value::Bool(false)])
        );
        assert!(Value::Int(1).into_object().is_err());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::String("x".into()));
    }

    #[test]
    fn test_debug() {
        let v = Value::List(vec![
            Value::Null,
            Value::Bool(true),
            Value::Int(-4),
            Value::Double(2.0),
            Value::Double(0.25),
            Value::String("a\"b".into()),
        ]);
        assert_eq!(format!("{:?}", v), "[null, true, -4, 2.0, 0.25, \"a\\\"b\"]");
    }
}
