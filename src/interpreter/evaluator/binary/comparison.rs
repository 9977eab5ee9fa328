use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{Number, Value},
    },
};

/// Decides whether two values are equal under `==`.
///
/// Numbers compare by value across integers, reals and booleans, strings by
/// content, and `null` only equals `null`. Any other pairing is unequal
/// rather than an error.
///
/// # Example
/// ```
/// use nexlang::interpreter::{evaluator::binary::comparison::values_equal, value::core::Value};
///
/// assert!(values_equal(&Value::Integer(1), &Value::Real(1.0)));
/// assert!(values_equal(&Value::Bool(true), &Value::Integer(1)));
/// assert!(!values_equal(&Value::from("1"), &Value::Integer(1)));
/// ```
#[must_use]
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::Null, Value::Null) => true,
        _ => match (left.as_number(), right.as_number()) {
            (Some(a), Some(b)) => compare_numbers(a, b) == Some(Ordering::Equal),
            _ => false,
        },
    }
}

/// Orders two numbers; `None` when either side is `NaN`.
fn compare_numbers(left: Number, right: Number) -> Option<Ordering> {
    match (left, right) {
        (Number::Integer(a), Number::Integer(b)) => Some(a.cmp(&b)),
        _ => left.to_f64().partial_cmp(&right.to_f64()),
    }
}

/// Orders two values for `<`, `>`, `<=` and `>=`.
///
/// Only number/number and string/string pairs are ordered; strings compare
/// lexicographically by code point.
fn compare_values(op: BinaryOperator,
                  left: &Value,
                  right: &Value,
                  line: usize)
                  -> EvalResult<Option<Ordering>> {
    if let (Value::Str(a), Value::Str(b)) = (left, right) {
        return Ok(Some(a.cmp(b)));
    }

    match (left.as_number(), right.as_number()) {
        (Some(a), Some(b)) => Ok(compare_numbers(a, b)),
        _ => Err(RuntimeError::TypeMismatch { details: format!("'{op}' not supported between {} and {}",
                                                               left.type_name(),
                                                               right.type_name()),
                                              line }),
    }
}

impl Context {
    /// Evaluates an equality or relational comparison.
    ///
    /// Equality never fails. Ordering fails with `TypeMismatch` unless both
    /// operands are numeric or both are strings. A comparison involving
    /// `NaN` is false for every ordering operator.
    ///
    /// # Parameters
    /// - `op`: A comparison operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean.
    ///
    /// # Example
    /// ```
    /// use nexlang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let a = Value::from("apple");
    /// let b = Value::from("banana");
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Less, &a, &b, 1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        let result = match op {
            Equal => values_equal(left, right),
            NotEqual => !values_equal(left, right),
            _ => {
                let ordering = compare_values(op, left, right, line)?;
                match op {
                    Less => ordering == Some(Ordering::Less),
                    Greater => ordering == Some(Ordering::Greater),
                    LessEqual => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
                    GreaterEqual => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
                    _ => unreachable!("non-comparison operator {op}"),
                }
            },
        };

        Ok(Value::Bool(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compare(op: BinaryOperator, left: impl Into<Value>, right: impl Into<Value>) -> EvalResult<Value> {
        Context::eval_comparison(op, &left.into(), &right.into(), 1)
    }

    #[test]
    fn mismatched_equality_is_false() {
        assert_eq!(compare(BinaryOperator::Equal, "3", 3_i64), Ok(Value::Bool(false)));
        assert_eq!(compare(BinaryOperator::NotEqual, Value::Null, 0_i64), Ok(Value::Bool(true)));
        assert_eq!(compare(BinaryOperator::Equal, Value::Null, Value::Null), Ok(Value::Bool(true)));
    }

    #[test]
    fn numbers_order_across_kinds() {
        assert_eq!(compare(BinaryOperator::Less, 2_i64, 2.5), Ok(Value::Bool(true)));
        assert_eq!(compare(BinaryOperator::GreaterEqual, 3.0, 3_i64), Ok(Value::Bool(true)));
        assert_eq!(compare(BinaryOperator::Greater, true, 0_i64), Ok(Value::Bool(true)));
    }

    #[test]
    fn nan_is_unordered() {
        for op in [BinaryOperator::Less, BinaryOperator::LessEqual, BinaryOperator::Greater] {
            assert_eq!(compare(op, f64::NAN, 1_i64), Ok(Value::Bool(false)));
        }
        assert_eq!(compare(BinaryOperator::Equal, f64::NAN, f64::NAN), Ok(Value::Bool(false)));
    }

    #[test]
    fn strings_order_by_code_point() {
        assert_eq!(compare(BinaryOperator::Less, "Z", "a"), Ok(Value::Bool(true)));
        assert_eq!(compare(BinaryOperator::LessEqual, "ab", "ab"), Ok(Value::Bool(true)));
    }

    #[test]
    fn mixed_ordering_is_a_type_error() {
        let err = compare(BinaryOperator::Less, "a", 1_i64).unwrap_err();
        assert_eq!(err.to_string(),
                   "Error on line 1: Type error: '<' not supported between string and integer.");
        assert!(compare(BinaryOperator::Greater, Value::Null, Value::Null).is_err());
    }
}
