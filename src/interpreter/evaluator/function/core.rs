use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{print, put},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the context (for output), a slice of evaluated argument
/// values and the line number. The line is only used by handlers that raise
/// errors; `lang` and `put` never fail and ignore it.
type BuiltinFn = fn(&mut Context, &[Value], usize) -> EvalResult<Value>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides a string name and a function pointer implementing the
/// builtin. The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name: &'static str,
            func: BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: $func },
            )*
        ];
        /// Names of every built-in function, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "lang" => print::lang,
    "put"  => put::put,
}

/// Finds a builtin by name.
fn lookup(name: &str) -> Option<BuiltinFn> {
    BUILTIN_TABLE.iter()
                 .find(|def| def.name == name)
                 .map(|def| def.func)
}

impl Context {
    /// Evaluates a function call.
    ///
    /// Arguments are evaluated left to right first, so their side effects
    /// happen even when the name turns out to be unknown. The name is then
    /// looked up in the builtin table; there are no user-defined functions.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Unevaluated argument expressions.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The builtin's result, or `UndefinedFunction` for an unknown name.
    ///
    /// # Example
    /// ```
    /// use nexlang::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut ctx = Context::new();
    /// let args = [Expr::Literal { value: "hi".into(),
    ///                             line:  1, }];
    ///
    /// assert_eq!(ctx.eval_function_call("lang", &args, 1).unwrap(), Value::Null);
    /// assert_eq!(ctx.output(), ["hi"]);
    /// assert!(ctx.eval_function_call("shout", &args, 1).is_err());
    /// ```
    pub fn eval_function_call(&mut self,
                              name: &str,
                              arguments: &[Expr],
                              line: usize)
                              -> EvalResult<Value> {
        let values = arguments.iter()
                              .map(|arg| self.eval(arg))
                              .collect::<EvalResult<Vec<_>>>()?;

        let builtin = lookup(name).ok_or_else(|| RuntimeError::UndefinedFunction { name: name.to_string(),
                                                                                  line })?;
        builtin(self, &values, line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_builtin() {
        assert_eq!(BUILTIN_FUNCTIONS, ["lang", "put"]);
        assert!(lookup("print").is_none());
    }

    #[test]
    fn unknown_function_still_evaluates_arguments() {
        let mut ctx = Context::new();
        let inner = Expr::FunctionCall { name:      "lang".into(),
                                         arguments: vec![Expr::Literal { value: 1_i64.into(),
                                                                         line:  1, }],
                                         line:      1, };

        let err = ctx.eval_function_call("missing", &[inner], 3).unwrap_err();

        assert_eq!(err.to_string(), "Error on line 3: Function not found: 'missing'.");
        assert_eq!(ctx.output(), ["1"]);
    }
}
