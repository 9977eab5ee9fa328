use crate::interpreter::{
    evaluator::core::{Context, EvalResult},
    value::core::Value,
};

/// Prints its arguments as one output line and returns `null`.
///
/// Arguments are rendered with their `Display` form and joined by single
/// spaces. With no arguments an empty line is printed. The line is collected
/// in the context rather than written to standard output.
///
/// # Example
/// ```
/// use nexlang::interpreter::{
///     evaluator::{core::Context, function::print::lang},
///     value::core::Value,
/// };
///
/// let mut ctx = Context::new();
/// let result = lang(&mut ctx, &[Value::from("x ="), Value::Real(2.0)], 1).unwrap();
///
/// assert_eq!(result, Value::Null);
/// assert_eq!(ctx.output(), ["x = 2.0"]);
/// ```
pub fn lang(context: &mut Context, args: &[Value], _line: usize) -> EvalResult<Value> {
    let line = args.iter()
                   .map(ToString::to_string)
                   .collect::<Vec<_>>()
                   .join(" ");

    context.print_line(line);
    Ok(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_prints_empty_line() {
        let mut ctx = Context::new();
        lang(&mut ctx, &[], 1).unwrap();
        lang(&mut ctx, &[Value::Bool(true), Value::Null], 1).unwrap();
        assert_eq!(ctx.output(), ["", "true null"]);
    }
}
