use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Context, value::core::Value},
};

impl Context {
    /// Evaluates `and` or `or` on two values by their truthiness.
    ///
    /// The result is always a boolean, never one of the operands.
    ///
    /// # Example
    /// ```
    /// use nexlang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let a = Value::from("text");
    /// let b = Value::Integer(0);
    ///
    /// assert_eq!(Context::eval_logic(BinaryOperator::And, &a, &b), Value::Bool(false));
    /// assert_eq!(Context::eval_logic(BinaryOperator::Or, &a, &b), Value::Bool(true));
    /// ```
    #[must_use]
    pub fn eval_logic(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        let (left, right) = (left.is_truthy(), right.is_truthy());

        Value::Bool(match op {
                        BinaryOperator::Or => left || right,
                        _ => left && right,
                    })
    }
}
