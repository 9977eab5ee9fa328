use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation. Booleans negate as `0` or `1`; strings
    ///   and `null` are a type error; negating `i64::MIN` overflows.
    /// - `Not`: logical negation of the value's truthiness, always a boolean.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use nexlang::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// // Negation
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Integer(5), 1).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// // Logical not works on any value
    /// let v = Context::eval_unary(UnaryOperator::Not, &Value::from(""), 1).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
            UnaryOperator::Negate => match value {
                Value::Integer(n) => n.checked_neg()
                                      .map(Value::Integer)
                                      .ok_or(RuntimeError::Overflow { line }),
                Value::Real(r) => Ok(Value::Real(-r)),
                Value::Bool(b) => Ok(Value::Integer(-i64::from(*b))),
                Value::Str(_) | Value::Null => {
                    Err(RuntimeError::TypeMismatch { details: format!("bad operand type for unary -: {}",
                                                                      value.type_name()),
                                                     line })
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation() {
        assert_eq!(Context::eval_unary(UnaryOperator::Negate, &Value::Real(1.5), 1),
                   Ok(Value::Real(-1.5)));
        assert_eq!(Context::eval_unary(UnaryOperator::Negate, &Value::Bool(true), 1),
                   Ok(Value::Integer(-1)));
        assert_eq!(Context::eval_unary(UnaryOperator::Negate, &Value::Integer(i64::MIN), 4),
                   Err(RuntimeError::Overflow { line: 4 }));
    }

    #[test]
    fn negating_text_is_a_type_error() {
        let err = Context::eval_unary(UnaryOperator::Negate, &Value::from("x"), 2).unwrap_err();
        assert_eq!(err.to_string(), "Error on line 2: Type error: bad operand type for unary -: string.");
    }

    #[test]
    fn not_uses_truthiness() {
        assert_eq!(Context::eval_unary(UnaryOperator::Not, &Value::Null, 1), Ok(Value::Bool(true)));
        assert_eq!(Context::eval_unary(UnaryOperator::Not, &Value::Integer(7), 1),
                   Ok(Value::Bool(false)));
    }
}
