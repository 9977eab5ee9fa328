use std::fmt;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constant values that can appear directly in
/// source code: numbers, strings and booleans. Integer and real literals are
/// kept apart so that `3` and `3.0` stay distinguishable at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
    /// A string literal with escapes already decoded.
    Str(String),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions produce a value when evaluated. Every variant records the
/// source line it came from so runtime errors can point back at the program.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string or boolean).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (`not`, unary `-`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (arithmetic, comparison or logic).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Function call expression (e.g. `lang("hi")`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, in source order.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Returns the source line the expression starts on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::FunctionCall { line, .. } => *line,
        }
    }
}

/// An ordered sequence of statements.
///
/// Blocks appear as the whole program and as the bodies of conditionals and
/// loops. They do not introduce a scope.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    /// Statements in execution order.
    pub statements: Vec<Statement>,
}

/// One `nexlf (cond) { ... }` clause of a conditional.
#[derive(Debug, Clone, PartialEq)]
pub struct ElseIf {
    /// Condition tested when every earlier branch was skipped.
    pub condition: Expr,
    /// Body run when the condition is truthy.
    pub body:      Block,
}

/// A statement of the language.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `nex <name> = <expr>`.
    Assignment {
        /// Variable being written.
        name:  String,
        /// Expression whose value is stored.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `ifnex (...) { ... }` with its `nexlf` and `nexls` clauses.
    If {
        /// Condition of the leading branch.
        condition:   Expr,
        /// Body of the leading branch.
        then_branch: Block,
        /// Else-if clauses in declaration order.
        else_ifs:    Vec<ElseIf>,
        /// Body of the trailing `nexls`, if present.
        else_branch: Option<Block>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `loop <count> { ... }`.
    LoopCount {
        /// The literal iteration count.
        count: LiteralValue,
        /// Loop body.
        body:  Block,
        /// Line number in the source code.
        line:  usize,
    },
    /// `loop (<cond>) { ... }`.
    LoopCondition {
        /// Condition re-checked before each iteration.
        condition: Expr,
        /// Loop body.
        body:      Block,
        /// Line number in the source code.
        line:      usize,
    },
    /// A bare expression, usually a call such as `lang(x)`.
    Expression {
        /// The expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// The root of a parsed program.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements.
    pub body: Block,
}

/// Binary operators, loosest binding last in the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `and`
    And,
    /// `or`
    Or,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::And => "and",
            Self::Or => "or",
        };
        write!(f, "{symbol}")
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `-x`
    Negate,
    /// `not x`
    Not,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "not"),
        }
    }
}
