use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Converts a literal from the syntax tree into a runtime value.
    #[must_use]
    pub fn eval_literal(value: &LiteralValue) -> Value {
        Value::from(value)
    }

    /// Reads a variable.
    ///
    /// # Errors
    /// `UndefinedVariable` if the name was never assigned.
    ///
    /// # Example
    /// ```
    /// use nexlang::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut ctx = Context::new();
    /// ctx.set_variable("x", Value::Integer(10));
    ///
    /// assert_eq!(ctx.eval_variable("x", 1).unwrap(), Value::Integer(10));
    /// assert!(ctx.eval_variable("y", 1).is_err());
    /// ```
    pub fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.get_variable(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line })
    }
}
