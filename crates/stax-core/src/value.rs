//! Value: what the language talks about
//!
//! A value is either a single-precision number or a piece of text. Every
//! value carries both a numeric and a textual projection, so words that
//! expect numbers accept text and vice versa.
//!
//! # Numeric projection of text
//!
//! The numeric projection of a `Text` value is its length in characters.
//! This means `==` between a number and a text compares the number with the
//! text's length. The behavior is kept for compatibility with existing
//! scripts; it is most likely not what anyone intended.

use std::fmt;

/// A value on the operand or scratch stack
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Single-precision number
    Number(f32),

    /// Character sequence
    Text(String),
}

impl Value {
    pub fn number(n: f32) -> Self {
        Value::Number(n)
    }

    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    /// Boolean encoding: true is 1, false is 0
    pub fn boolean(b: bool) -> Self {
        Value::Number(if b { 1.0 } else { 0.0 })
    }

    /// Numeric projection (text yields its character count)
    pub fn as_number(&self) -> f32 {
        match self {
            Value::Number(n) => *n,
            Value::Text(s) => s.chars().count() as f32,
        }
    }

    /// Boolean projection: any nonzero numeric projection is true
    pub fn as_bool(&self) -> bool {
        self.as_number() != 0.0
    }

    /// Integer projection, truncating toward zero
    ///
    /// Values outside the `i32` range saturate; NaN becomes 0.
    pub fn as_int(&self) -> i32 {
        self.as_number().trunc() as i32
    }

    /// Textual projection
    pub fn as_text(&self) -> String {
        self.to_string()
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_projections() {
        let v = Value::number(7.0);
        assert_eq!(v.as_number(), 7.0);
        assert_eq!(v.as_text(), "7");
        assert!(v.as_bool());
        assert!(!v.is_text());
    }

    #[test]
    fn test_fractional_rendering() {
        assert_eq!(Value::number(0.5).to_string(), "0.5");
        assert_eq!(Value::number(-3.25).to_string(), "-3.25");
    }

    #[test]
    fn test_text_numeric_projection_is_length() {
        let v = Value::text("hello");
        assert_eq!(v.as_number(), 5.0);
        assert_eq!(v.as_text(), "hello");
        assert!(v.is_text());

        // Counted in characters, not bytes
        assert_eq!(Value::text("héllo").as_number(), 5.0);
        assert!(!Value::text("").as_bool());
    }

    #[test]
    fn test_boolean_encoding() {
        assert_eq!(Value::boolean(true), Value::Number(1.0));
        assert_eq!(Value::boolean(false), Value::Number(0.0));
        assert!(!Value::number(0.0).as_bool());
        assert!(Value::number(-0.25).as_bool());
    }

    #[test]
    fn test_int_truncates_toward_zero() {
        assert_eq!(Value::number(3.9).as_int(), 3);
        assert_eq!(Value::number(-3.9).as_int(), -3);
        assert_eq!(Value::number(f32::NAN).as_int(), 0);
        assert_eq!(Value::number(1e20).as_int(), i32::MAX);
    }
}
