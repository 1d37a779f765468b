//! Scalar values carried by bindings and change notifications.
//!
//! Writes are kind-checked against the property's declared kind. Exactly
//! one coercion is permitted: `Int` widens losslessly into a `Float`
//! property. Everything else (including int-to-text) is a
//! [`TypeMismatch`](crate::BindingError::TypeMismatch) — a source never
//! stringifies a value silently.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Absent value.
    Null,
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Double-precision float.
    Float(f64),
    /// Owned text.
    Text(String),
}

/// Discriminant of a [`Value`], used as a property's declared kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// Untyped; a `Null`-declared property accepts any value.
    Null,
    /// Boolean.
    Bool,
    /// Signed integer.
    Int,
    /// Double-precision float.
    Float,
    /// Text.
    Text,
}

impl Value {
    /// Create a text value.
    #[must_use]
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Get the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
        }
    }

    /// Check for `Null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrow the text, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the integer, if any.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the float, if any.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the bool, if any.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Coerce this value into a property of the given declared kind.
    ///
    /// Returns `None` when the write must be rejected. Accepted:
    /// - same kind (identity),
    /// - any value into a `Null`-declared (untyped) property,
    /// - `Null` into any property (clears it),
    /// - `Int` into a `Float` property (lossless widening).
    #[must_use]
    pub fn coerce_to(self, declared: ValueKind) -> Option<Self> {
        match (self, declared) {
            (value, ValueKind::Null) => Some(value),
            (Self::Null, _) => Some(Self::Null),
            (Self::Int(v), ValueKind::Float) => Some(Self::Float(v as f64)),
            (value, kind) if value.kind() == kind => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Text => "text",
        };
        write!(f, "{name}")
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kind() {
        assert_eq!(Value::Null.kind(), ValueKind::Null);
        assert_eq!(Value::Bool(true).kind(), ValueKind::Bool);
        assert_eq!(Value::Int(1).kind(), ValueKind::Int);
        assert_eq!(Value::Float(1.0).kind(), ValueKind::Float);
        assert_eq!(Value::text("x").kind(), ValueKind::Text);
    }

    #[test]
    fn test_coerce_identity() {
        let v = Value::text("hello");
        assert_eq!(v.clone().coerce_to(ValueKind::Text), Some(v));
    }

    #[test]
    fn test_coerce_int_widens_to_float() {
        assert_eq!(
            Value::Int(42).coerce_to(ValueKind::Float),
            Some(Value::Float(42.0))
        );
    }

    #[test]
    fn test_coerce_int_to_text_rejected() {
        assert_eq!(Value::Int(42).coerce_to(ValueKind::Text), None);
    }

    #[test]
    fn test_coerce_float_to_int_rejected() {
        // Narrowing is never silent.
        assert_eq!(Value::Float(1.5).coerce_to(ValueKind::Int), None);
    }

    #[test]
    fn test_coerce_null_clears_any_kind() {
        assert_eq!(Value::Null.coerce_to(ValueKind::Text), Some(Value::Null));
        assert_eq!(Value::Null.coerce_to(ValueKind::Int), Some(Value::Null));
    }

    #[test]
    fn test_coerce_untyped_accepts_anything() {
        assert_eq!(
            Value::text("x").coerce_to(ValueKind::Null),
            Some(Value::text("x"))
        );
        assert_eq!(Value::Int(7).coerce_to(ValueKind::Null), Some(Value::Int(7)));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::text("hi").to_string(), "hi");
        assert_eq!(Value::Int(3).to_string(), "3");
        assert_eq!(Value::Null.to_string(), "null");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ValueKind::Text.to_string(), "text");
        assert_eq!(ValueKind::Float.to_string(), "float");
    }

    #[test]
    fn test_value_from_impls() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(3i64), Value::Int(3));
        assert_eq!(Value::from("s"), Value::text("s"));
    }

    #[test]
    fn test_value_serde_round_trip() {
        let v = Value::Float(2.5);
        let json = serde_json::to_string(&v).unwrap();
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}
