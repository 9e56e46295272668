//! Dynamic value model for mocked contract calls.
//!
//! Mocked contracts exchange [`Value`]s: a small dynamic type covering the
//! on-chain shapes the stubs need — booleans, signed/unsigned integers,
//! strings, field tuples, and tagged ok/err responses. The absent result is
//! [`Value::None`], never a panic or an error.

use std::collections::BTreeMap;

/// A dynamic value passed to or returned from a mocked contract call.
///
/// `Value` is deliberately closed and comparison-friendly: canned responses
/// are built once and asserted against with `assert_eq!`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A boolean.
    Bool(bool),
    /// A signed 128-bit integer.
    Int(i128),
    /// An unsigned 128-bit integer.
    UInt(u128),
    /// A UTF-8 string.
    Str(String),
    /// A named-field tuple. `BTreeMap` keeps field order deterministic.
    Tuple(BTreeMap<String, Value>),
    /// A success response wrapping an inner value.
    Ok(Box<Value>),
    /// A failure response wrapping an inner value.
    Err(Box<Value>),
    /// The absent result. Unmatched contracts and functions resolve here.
    None,
}

impl Value {
    /// Build a success response around `inner`.
    pub fn ok(inner: impl IntoValue) -> Self {
        Value::Ok(Box::new(inner.into_value()))
    }

    /// Build a failure response around `inner`.
    pub fn err(inner: impl IntoValue) -> Self {
        Value::Err(Box::new(inner.into_value()))
    }

    /// Build a tuple value from `(key, value)` pairs.
    pub fn tuple<K, V, I>(fields: I) -> Self
    where
        K: Into<String>,
        V: IntoValue,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Tuple(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into_value()))
                .collect(),
        )
    }

    /// Returns true for [`Value::None`].
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// The inner bool, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The inner unsigned integer, if this is a `UInt`.
    pub fn as_uint(&self) -> Option<u128> {
        match self {
            Value::UInt(n) => Some(*n),
            _ => None,
        }
    }

    /// The inner string slice, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Look up a tuple field by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Tuple(fields) => fields.get(key),
            _ => None,
        }
    }

    /// The wrapped value of an `Ok` response.
    pub fn as_ok(&self) -> Option<&Value> {
        match self {
            Value::Ok(inner) => Some(inner),
            _ => None,
        }
    }
}

/// Conversion of plain Rust values into [`Value`].
///
/// # Default Implementations
///
/// - `bool` / integers / strings → the matching variant
/// - `Option<T>` → inner value, or [`Value::None`]
/// - `Result<T, E>` → [`Value::Ok`] / [`Value::Err`] response
/// - `Value` → as is
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be converted into a `Value`",
    label = "missing `IntoValue` implementation",
    note = "Implement `IntoValue` to use this type as a mocked contract result or argument."
)]
pub trait IntoValue {
    /// Convert `self` into a [`Value`].
    fn into_value(self) -> Value;
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl IntoValue for i128 {
    fn into_value(self) -> Value {
        Value::Int(self)
    }
}

impl IntoValue for i64 {
    fn into_value(self) -> Value {
        Value::Int(self as i128)
    }
}

impl IntoValue for u128 {
    fn into_value(self) -> Value {
        Value::UInt(self)
    }
}

impl IntoValue for u64 {
    fn into_value(self) -> Value {
        Value::UInt(self as u128)
    }
}

impl IntoValue for u8 {
    fn into_value(self) -> Value {
        Value::UInt(self as u128)
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::Str(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::Str(self.to_string())
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Value {
        match self {
            Some(v) => v.into_value(),
            None => Value::None,
        }
    }
}

impl<T: IntoValue, E: IntoValue> IntoValue for Result<T, E> {
    fn into_value(self) -> Value {
        match self {
            Ok(v) => Value::Ok(Box::new(v.into_value())),
            Err(e) => Value::Err(Box::new(e.into_value())),
        }
    }
}
