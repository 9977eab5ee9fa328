use crate::{
    ast::{Block, Expr, LiteralValue},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{Number, Value},
    },
    util::num::f64_to_i64_truncated,
};

/// Most iterations a condition loop may run before it is stopped.
pub const MAX_LOOP_ITERATIONS: usize = 100_000;

impl Context {
    /// Evaluates a counted loop, `loop <count> { ... }`.
    ///
    /// A real count is truncated towards zero. A count of zero or less runs
    /// the body no times. The loop has no iteration variable.
    ///
    /// # Returns
    /// Always `Value::Null`.
    ///
    /// # Example
    /// ```
    /// use nexlang::{
    ///     ast::{Block, Expr, LiteralValue, Statement},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let print = Statement::Expression { expr: Expr::FunctionCall { name:      "lang".into(),
    ///                                                                arguments: vec![],
    ///                                                                line:      1, },
    ///                                     line: 1, };
    /// let body = Block { statements: vec![print] };
    ///
    /// let mut context = Context::new();
    /// context.eval_loop_count(&LiteralValue::Real(2.9), &body, 1).unwrap();
    /// assert_eq!(context.output().len(), 2);
    /// ```
    pub fn eval_loop_count(&mut self,
                           count: &LiteralValue,
                           body: &Block,
                           line: usize)
                           -> EvalResult<Value> {
        let count = Value::from(count);
        let iterations = match count.as_number() {
            Some(Number::Integer(n)) => n,
            Some(Number::Real(r)) => f64_to_i64_truncated(r),
            None => {
                return Err(RuntimeError::TypeMismatch { details: format!("loop count must be a number, not {}",
                                                                         count.type_name()),
                                                        line });
            },
        };

        for _ in 0..iterations.max(0) {
            self.eval_block(body)?;
        }

        Ok(Value::Null)
    }

    /// Evaluates a condition loop, `loop (<cond>) { ... }`.
    ///
    /// The condition is evaluated before every iteration; the body runs while
    /// it is truthy. After [`MAX_LOOP_ITERATIONS`] runs of the body the loop
    /// stops silently, as if the condition had become false, and execution
    /// continues with the next statement.
    ///
    /// # Returns
    /// Always `Value::Null`.
    pub fn eval_loop_condition(&mut self,
                               condition: &Expr,
                               body: &Block,
                               line: usize)
                               -> EvalResult<Value> {
        let mut remaining = MAX_LOOP_ITERATIONS;

        while self.eval(condition)?.is_truthy() {
            if remaining == 0 {
                tracing::warn!(line,
                               limit = MAX_LOOP_ITERATIONS,
                               "condition loop stopped at iteration limit");
                break;
            }
            self.eval_block(body)?;
            remaining -= 1;
        }

        Ok(Value::Null)
    }
}
