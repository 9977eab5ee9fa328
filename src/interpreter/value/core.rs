use std::fmt;

use crate::{
    ast::LiteralValue,
    util::num::{format_real, i64_to_f64},
};

/// Represents a runtime value in the interpreter.
///
/// Every expression evaluates to one of these. Variables hold them, built-ins
/// receive and return them, and `lang` prints their [`Display`](fmt::Display)
/// form.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Real(f64),
    /// A string of text.
    Str(String),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison and logical operators. In arithmetic and
    /// ordering it behaves as `1` or `0`.
    Bool(bool),
    /// The absence of a value. Returned by `lang`, by loops and by
    /// conditionals that take no branch.
    Null,
}

/// The numeric view of a value, used by arithmetic and comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// An integer operand; booleans land here as `0` or `1`.
    Integer(i64),
    /// A real operand.
    Real(f64),
}

impl Number {
    /// Widens the number to a real.
    #[must_use]
    pub const fn to_f64(self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64(n),
            Self::Real(r) => r,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(n) => Self::Integer(*n),
            LiteralValue::Real(r) => Self::Real(*r),
            LiteralValue::Str(s) => Self::Str(s.clone()),
            LiteralValue::Bool(b) => Self::Bool(*b),
        }
    }
}

impl Value {
    /// Returns the numeric view of the value, if it has one.
    ///
    /// Integers and reals map directly; booleans become `0` or `1`. Strings
    /// and `null` have no numeric view.
    ///
    /// # Example
    /// ```
    /// use nexlang::interpreter::value::core::{Number, Value};
    ///
    /// assert_eq!(Value::Bool(true).as_number(), Some(Number::Integer(1)));
    /// assert_eq!(Value::Real(2.5).as_number(), Some(Number::Real(2.5)));
    /// assert_eq!(Value::from("2").as_number(), None);
    /// ```
    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Integer(n) => Some(Number::Integer(*n)),
            Self::Real(r) => Some(Number::Real(*r)),
            Self::Bool(b) => Some(Number::Integer(i64::from(*b))),
            Self::Str(_) | Self::Null => None,
        }
    }

    /// Converts the value to an `i64` repeat count, if it is integer-like.
    ///
    /// Only integers and booleans qualify; reals do not.
    #[must_use]
    pub const fn as_count(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Bool(b) => Some(*b as i64),
            _ => None,
        }
    }

    /// Decides whether the value counts as true in a condition.
    ///
    /// - `false`, `null`, `0`, `0.0` and `""` are falsy.
    /// - Everything else is truthy, including `NaN` and strings such as
    ///   `"0"` or `"false"`.
    ///
    /// # Example
    /// ```
    /// use nexlang::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Integer(0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(Value::from("0").is_truthy());
    /// assert!(Value::Real(-0.5).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Integer(n) => *n != 0,
            Self::Real(r) => *r != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::Null => false,
        }
    }

    /// Returns the name of the value's type, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{}", format_real(*r)),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_printed_form() {
        assert_eq!(Value::Integer(-7).to_string(), "-7");
        assert_eq!(Value::Real(2.0).to_string(), "2.0");
        assert_eq!(Value::Real(0.5).to_string(), "0.5");
        assert_eq!(Value::from("a b").to_string(), "a b");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::Null.to_string(), "null");
    }

    #[test]
    fn falsy_values() {
        for value in [Value::Bool(false), Value::Null, Value::Integer(0), Value::Real(0.0), Value::from("")] {
            assert!(!value.is_truthy(), "{value:?} should be falsy");
        }
    }

    #[test]
    fn nan_is_truthy() {
        assert!(Value::Real(f64::NAN).is_truthy());
    }

    #[test]
    fn counts_come_from_integers_and_booleans() {
        assert_eq!(Value::Integer(3).as_count(), Some(3));
        assert_eq!(Value::Bool(true).as_count(), Some(1));
        assert_eq!(Value::Real(3.0).as_count(), None);
        assert_eq!(Value::Null.as_count(), None);
    }

    #[test]
    fn literals_convert_without_changing_kind() {
        assert_eq!(Value::from(&LiteralValue::Integer(3)), Value::Integer(3));
        assert_eq!(Value::from(&LiteralValue::Real(3.0)), Value::Real(3.0));
        assert_eq!(Value::from(&LiteralValue::from("x")), Value::from("x"));
    }
}
