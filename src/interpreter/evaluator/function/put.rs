use crate::interpreter::{
    evaluator::core::{Context, EvalResult},
    value::core::Value,
};

/// Returns its first argument unchanged, or `""` when called without any.
///
/// Extra arguments are evaluated by the caller and then ignored. `put`
/// prints nothing.
///
/// # Example
/// ```
/// use nexlang::interpreter::{
///     evaluator::{core::Context, function::put::put},
///     value::core::Value,
/// };
///
/// let mut ctx = Context::new();
///
/// assert_eq!(put(&mut ctx, &[Value::Integer(4), Value::Null], 1).unwrap(), Value::Integer(4));
/// assert_eq!(put(&mut ctx, &[], 1).unwrap(), Value::from(""));
/// assert!(ctx.output().is_empty());
/// ```
pub fn put(_context: &mut Context, args: &[Value], _line: usize) -> EvalResult<Value> {
    Ok(args.first()
           .cloned()
           .unwrap_or_else(|| Value::Str(String::new())))
}
