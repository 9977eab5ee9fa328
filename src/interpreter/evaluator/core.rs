use std::collections::HashMap;

use crate::{
    ast::{Block, Expr, Program, Statement},
    interpreter::value::core::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, crate::error::RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state for one run: a single flat
/// environment of variables and the lines printed so far. Blocks do not
/// introduce scopes, so an assignment inside a loop or conditional body is
/// visible after it.
///
/// ## Usage
///
/// A `Context` is created for every run and dropped at its end. Nothing is
/// shared between runs.
///
/// ```
/// use nexlang::{
///     ast::{Expr, Program, Statement},
///     interpreter::{evaluator::core::Context, value::core::Value},
/// };
///
/// let mut context = Context::new();
/// let assign = Statement::Assignment { name:  "x".into(),
///                                      value: Expr::Literal { value: 2_i64.into(),
///                                                             line:  1, },
///                                      line:  1, };
///
/// context.eval_statement(&assign).unwrap();
/// assert_eq!(context.get_variable("x"), Some(&Value::Integer(2)));
/// ```
#[derive(Debug, Default)]
pub struct Context {
    /// Every variable assigned so far, by name.
    variables: HashMap<String, Value>,
    /// Lines printed by `lang`, in order.
    output:    Vec<String>,
}

impl Context {
    /// Creates an empty context with no variables and no output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs every top-level statement of a program in order.
    ///
    /// Stops at the first runtime error. Output printed before the error
    /// stays in the context and can still be read with
    /// [`output_text`](Self::output_text).
    ///
    /// # Returns
    /// The value of the last top-level statement, or `Value::Null` for an
    /// empty program.
    pub fn run(&mut self, program: &Program) -> EvalResult<Value> {
        self.eval_block(&program.body)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Operands are evaluated left to right, and call arguments in source
    /// order, before the operator or function is applied.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Self::eval_literal(value)),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, &value, *line)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => self.eval_function_call(name, arguments, *line),
        }
    }

    /// Evaluates a single statement.
    ///
    /// # Returns
    /// - Assignments yield the stored value.
    /// - Expression statements yield the expression's value.
    /// - Conditionals yield the value of the branch taken, or `Value::Null`.
    /// - Loops always yield `Value::Null`.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Value> {
        match statement {
            Statement::Assignment { name, value, .. } => {
                let value = self.eval(value)?;
                self.set_variable(name, value.clone());
                Ok(value)
            },
            Statement::If { condition,
                            then_branch,
                            else_ifs,
                            else_branch,
                            .. } => self.eval_if(condition, then_branch, else_ifs, else_branch.as_ref()),
            Statement::LoopCount { count, body, line } => self.eval_loop_count(count, body, *line),
            Statement::LoopCondition { condition,
                                       body,
                                       line, } => self.eval_loop_condition(condition, body, *line),
            Statement::Expression { expr, .. } => self.eval(expr),
        }
    }

    /// Evaluates the statements of a block in order.
    ///
    /// # Returns
    /// The value of the last statement, or `Value::Null` for an empty block.
    pub fn eval_block(&mut self, block: &Block) -> EvalResult<Value> {
        let mut last = Value::Null;
        for statement in &block.statements {
            last = self.eval_statement(statement)?;
        }
        Ok(last)
    }

    /// Looks up a variable without raising an error.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Creates or overwrites a variable.
    pub fn set_variable(&mut self, name: &str, value: Value) {
        tracing::trace!(name, %value, "assign");
        self.variables.insert(name.to_string(), value);
    }

    /// Appends one printed line.
    pub fn print_line(&mut self, line: String) {
        self.output.push(line);
    }

    /// The lines printed so far, in order.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// The lines printed so far joined with `\n`, without a trailing newline.
    #[must_use]
    pub fn output_text(&self) -> String {
        self.output.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::RuntimeError,
        interpreter::{lexer::tokenize, parser::core::parse_program},
    };

    fn run(source: &str) -> (EvalResult<Value>, Context) {
        let tokens = tokenize(source).unwrap();
        let program = parse_program(&tokens).unwrap();
        let mut context = Context::new();
        let result = context.run(&program);
        (result, context)
    }

    #[test]
    fn assignment_overwrites_and_yields_value() {
        let (result, context) = run("nex x = 1\nnex x = \"now text\"");
        assert_eq!(result.unwrap(), Value::from("now text"));
        assert_eq!(context.get_variable("x"), Some(&Value::from("now text")));
    }

    #[test]
    fn empty_program_yields_null() {
        let (result, context) = run("\n\n");
        assert_eq!(result.unwrap(), Value::Null);
        assert!(context.output().is_empty());
    }

    #[test]
    fn blocks_share_one_environment() {
        let (_, context) = run("ifnex (true) { nex inner = 5 }\nnex outer = inner + 1");
        assert_eq!(context.get_variable("outer"), Some(&Value::Integer(6)));
    }

    #[test]
    fn error_keeps_earlier_output() {
        let (result, context) = run("lang(1)\nlang(missing)\nlang(3)");
        assert_eq!(result.unwrap_err(),
                   RuntimeError::UndefinedVariable { name: "missing".into(),
                                                     line: 2, });
        assert_eq!(context.output_text(), "1");
    }

    #[test]
    fn failed_assignment_leaves_variable_untouched() {
        let (result, context) = run("nex x = 1\nnex x = y");
        assert!(result.is_err());
        assert_eq!(context.get_variable("x"), Some(&Value::Integer(1)));
    }
}
