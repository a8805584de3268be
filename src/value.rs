use serde::ser::{Serialize, SerializeSeq, Serializer};
use smol_str::SmolStr;
use std::fmt;

use crate::types::Symbol;

// ─── Number ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I64(i64),
    F64(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::I64(i) => i as f64,
            Number::F64(f) => f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(i) => write!(f, "{}", i),
            Number::F64(v) if v.is_infinite() => {
                f.write_str(if *v > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // f64's Display already drops the trailing ".0"
            Number::F64(v) => write!(f, "{}", v),
        }
    }
}

// ─── Value ──────────────────────────────────────────────────────────────────

/// A dynamically typed field value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    Str(SmolStr),
    Symbol(Symbol),
    Array(Vec<Value>),
}

impl Value {
    /// Numeric view; only `Number` qualifies.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Inspector rendering used inside containers: strings are quoted.
    pub fn inspect(&self) -> String {
        match self {
            Value::Str(s) => format!("'{}'", s),
            other => other.to_string(),
        }
    }
}

/// Top-level rendering: strings print bare, arrays list inspected items.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::Str(s) => f.write_str(s),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::Array(arr) if arr.is_empty() => f.write_str("[]"),
            Value::Array(arr) => {
                let items: Vec<String> = arr.iter().map(Value::inspect).collect();
                write!(f, "[ {} ]", items.join(", "))
            }
        }
    }
}

// ─── Serialize ──────────────────────────────────────────────────────────────

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Symbols have no JSON form.
            Value::Null | Value::Symbol(_) => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::I64(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::F64(f)) => serializer.serialize_f64(*f),
            Value::Str(s) => serializer.serialize_str(s.as_str()),
            Value::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for v in arr {
                    seq.serialize_element(v)?;
                }
                seq.end()
            }
        }
    }
}

// ─── From impls ─────────────────────────────────────────────────────────────

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(Number::F64(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(Number::I64(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(Number::I64(n as i64))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(SmolStr::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(SmolStr::from(s))
    }
}

impl From<SmolStr> for Value {
    fn from(s: SmolStr) -> Self {
        Value::Str(s)
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Symbol(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_render_without_trailing_fraction() {
        assert_eq!(Value::from(90).to_string(), "90");
        assert_eq!(Value::from(90.0).to_string(), "90");
        assert_eq!(Value::from(99.5).to_string(), "99.5");
        assert_eq!(Value::from(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Value::from(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn strings_quote_only_when_nested() {
        let skills = Value::from(vec!["Fuerza", "Magia"]);
        assert_eq!(Value::from("Fuerza").to_string(), "Fuerza");
        assert_eq!(skills.to_string(), "[ 'Fuerza', 'Magia' ]");
        assert_eq!(Value::Array(Vec::new()).to_string(), "[]");
        assert_eq!(
            Value::from(vec![Value::from(vec![1]), Value::Null]).to_string(),
            "[ [ 1 ], null ]"
        );
    }

    #[test]
    fn symbols_serialize_as_null() {
        let v = Value::from(vec![Value::from(1), Value::from(Symbol::new("id"))]);
        assert_eq!(serde_json::to_string(&v).unwrap(), "[1,null]");
    }

    #[test]
    fn only_numbers_are_numeric() {
        assert!(Value::from(0).is_number());
        assert!(Value::from(f64::NAN).is_number());
        assert!(!Value::from("cien").is_number());
        assert!(!Value::Null.is_number());
        assert_eq!(Value::from("100").as_f64(), None);
    }
}
