//! Values produced by expression evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fully evaluated expression value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// An integer.
    Int(i64),
    /// A floating-point number.
    Real(f64),
    /// A string literal, stored without quotes.
    Str(String),
}

impl Value {
    /// Returns the value as `f64` if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Real(r) => Some(*r),
            Value::Str(_) => None,
        }
    }

    /// Returns the value as `i64`, truncating reals.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Real(r) if r.is_finite() => Some(*r as i64),
            _ => None,
        }
    }
}

/// Renders the value as expression text: strings are re-quoted.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Real(r) => write!(f, "{r}"),
            Value::Str(s) => write!(f, "\"{s}\""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::Real(1.5).to_string(), "1.5");
        assert_eq!(Value::Str("abc".to_string()).to_string(), "\"abc\"");
    }

    #[test]
    fn numeric_conversions() {
        assert_eq!(Value::Int(4).as_f64(), Some(4.0));
        assert_eq!(Value::Real(2.9).as_i64(), Some(2));
        assert_eq!(Value::Real(f64::NAN).as_i64(), None);
        assert_eq!(Value::Str("1".to_string()).as_f64(), None);
    }

    #[test]
    fn serde_roundtrip() {
        for val in [Value::Int(-100), Value::Real(9.81), Value::Str("t".into())] {
            let json = serde_json::to_string(&val).unwrap();
            assert_eq!(serde_json::from_str::<Value>(&json).unwrap(), val);
        }
    }
}
