//! Scalar value and tag types shared by rows

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tag key/value pairs identifying a series.
/// Unordered; see [`crate::fingerprint`] for the canonical ordering used in hashing.
pub type Tags = HashMap<String, String>;

/// A single cell of a value tuple.
///
/// Serialized untagged so that encoded rows carry plain numbers, strings,
/// booleans and nulls. Variant order matters for decoding: integers are tried
/// before floats so `42` stays an `Integer`.
///
/// Non-finite floats do not survive JSON: `NaN` and the infinities are written
/// as `null` and decode as [`Value::Null`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit unsigned integer (only produced for values above `i64::MAX` when decoding)
    UnsignedInteger(u64),
    /// 64-bit floating point
    Float(f64),
    /// Boolean value
    Boolean(bool),
    /// UTF-8 string
    String(String),
    /// Absent value
    Null,
}

impl Value {
    /// Get the type name of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::UnsignedInteger(_) => "unsigned",
            Value::Float(_) => "float",
            Value::Boolean(_) => "boolean",
            Value::String(_) => "string",
            Value::Null => "null",
        }
    }

    /// Check for the absent value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Try to convert to f64
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            Value::Integer(v) => Some(*v as f64),
            Value::UnsignedInteger(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Try to convert to i64
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(v) => Some(*v),
            Value::UnsignedInteger(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Try to get as string reference
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::UnsignedInteger(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_conversions() {
        let v = Value::Float(3.5);
        assert_eq!(v.as_f64(), Some(3.5));
        assert_eq!(v.as_i64(), None);
        assert_eq!(v.type_name(), "float");

        let v = Value::Integer(-42);
        assert_eq!(v.as_i64(), Some(-42));
        assert_eq!(v.as_f64(), Some(-42.0));

        let v = Value::UnsignedInteger(u64::MAX);
        assert_eq!(v.as_i64(), None);

        let v = Value::String("hello".to_string());
        assert_eq!(v.as_str(), Some("hello"));
        assert_eq!(v.as_f64(), None);

        let v = Value::Boolean(true);
        assert_eq!(v.as_bool(), Some(true));

        assert!(Value::Null.is_null());
        assert_eq!(Value::Null.type_name(), "null");
    }

    #[test]
    fn test_value_from_impls() {
        assert!(matches!(Value::from(3.5_f64), Value::Float(_)));
        assert!(matches!(Value::from(42_i64), Value::Integer(42)));
        assert!(matches!(Value::from(42_u64), Value::UnsignedInteger(42)));
        assert!(matches!(Value::from("hello"), Value::String(_)));
        assert!(matches!(Value::from(true), Value::Boolean(true)));
        assert!(Value::from(None::<i64>).is_null());
        assert_eq!(Value::from(Some(7_i64)), Value::Integer(7));
    }

    #[test]
    fn test_value_json_is_untagged() {
        let values = vec![
            Value::Integer(1),
            Value::Float(2.5),
            Value::Boolean(false),
            Value::String("idle".to_string()),
            Value::Null,
        ];

        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[1,2.5,false,"idle",null]"#);

        let decoded: Vec<Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, values);
    }

    #[test]
    fn test_value_json_non_finite_float_becomes_null() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let json = serde_json::to_string(&Value::Float(v)).unwrap();
            assert_eq!(json, "null");

            let decoded: Value = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, Value::Null);
        }
    }

    #[test]
    fn test_value_json_large_unsigned() {
        let decoded: Value = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(decoded, Value::UnsignedInteger(u64::MAX));
    }
}
