use crate::{
    ast::{Block, ElseIf, Expr},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates an `ifnex` chain.
    ///
    /// Conditions are tested in order: the `ifnex` condition, then each
    /// `nexlf` condition. The first truthy one runs its body and no later
    /// condition is evaluated. If none is truthy the `nexls` body runs, when
    /// present.
    ///
    /// # Returns
    /// The value of the block that ran, or `Value::Null` if none did.
    pub fn eval_if(&mut self,
                   condition: &Expr,
                   then_branch: &Block,
                   else_ifs: &[ElseIf],
                   else_branch: Option<&Block>)
                   -> EvalResult<Value> {
        if self.eval(condition)?.is_truthy() {
            return self.eval_block(then_branch);
        }

        for clause in else_ifs {
            if self.eval(&clause.condition)?.is_truthy() {
                return self.eval_block(&clause.body);
            }
        }

        match else_branch {
            Some(body) => self.eval_block(body),
            None => Ok(Value::Null),
        }
    }
}
