use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{Number, Value},
    },
    util::num::i64_to_f64,
};

/// Largest string, in bytes, that concatenation or repetition may produce.
pub const MAX_STRING_LEN: usize = 1 << 24;

impl Context {
    /// Evaluates an arithmetic operation.
    ///
    /// - `string + string` concatenates.
    /// - `string * integer` (either order) repeats the string; a count of zero
    ///   or less yields `""`.
    /// - Otherwise both operands must be numeric. Two integers stay integral
    ///   (division truncates towards zero); any real operand makes the result
    ///   real. Booleans count as `0` and `1`.
    ///
    /// Integer overflow and oversized concatenation or repetition raise
    /// `Overflow`. Dividing by zero falls back to real division and yields
    /// `inf`, `-inf` or `nan`.
    ///
    /// # Parameters
    /// - `op`: One of `Add`, `Sub`, `Mul` or `Div`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use nexlang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let seven = Value::Integer(7);
    /// let two = Value::Integer(2);
    /// assert_eq!(Context::eval_scalar_op(BinaryOperator::Div, &seven, &two, 1).unwrap(),
    ///            Value::Integer(3));
    ///
    /// let ab = Value::from("ab");
    /// assert_eq!(Context::eval_scalar_op(BinaryOperator::Mul, &ab, &two, 1).unwrap(),
    ///            Value::from("abab"));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Mul};

        match (op, left, right) {
            (Add, Value::Str(a), Value::Str(b)) => return concat(a, b, line),
            (Mul, Value::Str(s), count) | (Mul, count, Value::Str(s)) => {
                if let Some(count) = count.as_count() {
                    return repeat(s, count, line);
                }
            },
            _ => {},
        }

        match (left.as_number(), right.as_number()) {
            (Some(a), Some(b)) => numeric(op, a, b, line),
            _ => Err(RuntimeError::TypeMismatch { details: format!("unsupported operand types for '{op}': {} and {}",
                                                                   left.type_name(),
                                                                   right.type_name()),
                                                  line }),
        }
    }
}

/// Joins two strings, refusing results beyond [`MAX_STRING_LEN`].
fn concat(a: &str, b: &str, line: usize) -> EvalResult<Value> {
    match a.len().checked_add(b.len()) {
        Some(len) if len <= MAX_STRING_LEN => Ok(Value::Str(format!("{a}{b}"))),
        _ => Err(RuntimeError::Overflow { line }),
    }
}

/// Repeats `s` `count` times, refusing results beyond [`MAX_STRING_LEN`].
fn repeat(s: &str, count: i64, line: usize) -> EvalResult<Value> {
    let Ok(count) = usize::try_from(count) else {
        return Ok(Value::Str(String::new()));
    };

    match s.len().checked_mul(count) {
        Some(len) if len <= MAX_STRING_LEN => Ok(Value::Str(s.repeat(count))),
        _ => Err(RuntimeError::Overflow { line }),
    }
}

/// Applies an arithmetic operator to two numbers.
fn numeric(op: BinaryOperator, left: Number, right: Number, line: usize) -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    if let (Number::Integer(a), Number::Integer(b)) = (left, right) {
        let result = match op {
            Add => a.checked_add(b),
            Sub => a.checked_sub(b),
            Mul => a.checked_mul(b),
            Div if b == 0 => return Ok(Value::Real(i64_to_f64(a) / 0.0)),
            Div => a.checked_div(b),
            _ => unreachable!("non-arithmetic operator {op}"),
        };
        return result.map(Value::Integer)
                     .ok_or(RuntimeError::Overflow { line });
    }

    let (a, b) = (left.to_f64(), right.to_f64());
    Ok(Value::Real(match op {
                       Add => a + b,
                       Sub => a - b,
                       Mul => a * b,
                       Div => a / b,
                       _ => unreachable!("non-arithmetic operator {op}"),
                   }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(op: BinaryOperator, left: impl Into<Value>, right: impl Into<Value>) -> EvalResult<Value> {
        Context::eval_scalar_op(op, &left.into(), &right.into(), 1)
    }

    #[test]
    fn integer_arithmetic_stays_integral() {
        assert_eq!(apply(BinaryOperator::Add, 2_i64, 3_i64), Ok(Value::Integer(5)));
        assert_eq!(apply(BinaryOperator::Sub, 2_i64, 3_i64), Ok(Value::Integer(-1)));
        assert_eq!(apply(BinaryOperator::Div, -7_i64, 2_i64), Ok(Value::Integer(-3)));
    }

    #[test]
    fn mixed_operands_become_real() {
        assert_eq!(apply(BinaryOperator::Add, 1_i64, 0.5), Ok(Value::Real(1.5)));
        assert_eq!(apply(BinaryOperator::Div, 1.0, 4_i64), Ok(Value::Real(0.25)));
    }

    #[test]
    fn booleans_count_as_integers() {
        assert_eq!(apply(BinaryOperator::Add, true, true), Ok(Value::Integer(2)));
        assert_eq!(apply(BinaryOperator::Mul, "ab", true), Ok(Value::from("ab")));
    }

    #[test]
    fn division_by_zero_is_not_an_error() {
        assert_eq!(apply(BinaryOperator::Div, 1_i64, 0_i64), Ok(Value::Real(f64::INFINITY)));
        assert_eq!(apply(BinaryOperator::Div, -1.0, 0_i64), Ok(Value::Real(f64::NEG_INFINITY)));
        assert!(matches!(apply(BinaryOperator::Div, 0_i64, 0_i64), Ok(Value::Real(r)) if r.is_nan()));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(apply(BinaryOperator::Add, i64::MAX, 1_i64), Err(RuntimeError::Overflow { line: 1 }));
        assert_eq!(apply(BinaryOperator::Div, i64::MIN, -1_i64), Err(RuntimeError::Overflow { line: 1 }));
        assert_eq!(apply(BinaryOperator::Mul, "ab", i64::MAX), Err(RuntimeError::Overflow { line: 1 }));
    }

    #[test]
    fn oversized_concatenation_is_reported() {
        let half = "x".repeat(MAX_STRING_LEN / 2);
        let joined = apply(BinaryOperator::Add, half.as_str(), half.as_str()).unwrap();
        assert!(matches!(joined, Value::Str(ref s) if s.len() == MAX_STRING_LEN));

        let too_long = apply(BinaryOperator::Add, joined, "y");
        assert_eq!(too_long, Err(RuntimeError::Overflow { line: 1 }));
    }

    #[test]
    fn string_repetition_in_either_order() {
        assert_eq!(apply(BinaryOperator::Mul, 3_i64, "-"), Ok(Value::from("---")));
        assert_eq!(apply(BinaryOperator::Mul, "x", -2_i64), Ok(Value::from("")));
    }

    #[test]
    fn strings_only_concatenate_with_strings() {
        let err = apply(BinaryOperator::Add, "a", 1_i64).unwrap_err();
        assert_eq!(err.to_string(),
                   "Error on line 1: Type error: unsupported operand types for '+': string and integer.");
        assert!(apply(BinaryOperator::Sub, "a", "a").is_err());
        assert!(apply(BinaryOperator::Mul, "a", 2.0).is_err());
        assert!(apply(BinaryOperator::Add, Value::Null, 1_i64).is_err());
    }
}
