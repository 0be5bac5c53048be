use std::{fmt, sync::Arc};

use crate::{
    error::EditError,
    interpreter::{printer::number_text, registry::FunctionRegistry},
};

/// Signature of a function that can be registered and called from an
/// expression.
pub type UnaryFn = dyn Fn(f64) -> f64 + Send + Sync;

/// A handle to a registered `f64 -> f64` function.
///
/// The handle is bound into a [`Expr::UserCall`] node when the expression is
/// parsed. Cloning it is cheap and the node keeps the function alive on its
/// own, so later changes to the registry never reach an already-built tree.
#[derive(Clone)]
pub struct UserFunction(Arc<UnaryFn>);

impl UserFunction {
    /// Wraps a closure or function pointer.
    ///
    /// ## Example
    /// ```
    /// use exprtree::ast::UserFunction;
    ///
    /// let cube = UserFunction::new(|x| x * x * x);
    /// assert_eq!(cube.call(3.0), 27.0);
    /// ```
    pub fn new<F>(function: F) -> Self
        where F: Fn(f64) -> f64 + Send + Sync + 'static
    {
        Self(Arc::new(function))
    }

    /// Invokes the function.
    #[must_use]
    pub fn call(&self, argument: f64) -> f64 {
        (self.0)(argument)
    }
}

impl fmt::Debug for UserFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UserFunction(..)")
    }
}

/// Two handles are equal when they point at the same registered function.
impl PartialEq for UserFunction {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// The six transcendental functions known to the parser.
///
/// Built-in names are checked before the function registry, so a registered
/// function with one of these names can never be called.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BuiltinFunction {
    /// `sin`
    Sin,
    /// `cos`
    Cos,
    /// `tan`
    Tan,
    /// `log`, the natural logarithm.
    Log,
    /// `exp`
    Exp,
    /// `sqrt`
    Sqrt,
}

impl BuiltinFunction {
    /// Every built-in, in declaration order.
    pub const ALL: [Self; 6] = [Self::Sin, Self::Cos, Self::Tan, Self::Log, Self::Exp, Self::Sqrt];

    /// Looks up a built-in by its exact (case-sensitive) name.
    ///
    /// ## Example
    /// ```
    /// use exprtree::ast::BuiltinFunction;
    ///
    /// assert_eq!(BuiltinFunction::from_name("sqrt"), Some(BuiltinFunction::Sqrt));
    /// assert_eq!(BuiltinFunction::from_name("SQRT"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|function| function.name() == name)
    }

    /// The name used in source text.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Exp => "exp",
            Self::Sqrt => "sqrt",
        }
    }

    /// Applies the function with IEEE-754 semantics; out-of-domain inputs
    /// produce `NaN` or an infinity rather than an error.
    #[must_use]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Log => x.ln(),
            Self::Exp => x.exp(),
            Self::Sqrt => x.sqrt(),
        }
    }
}

impl fmt::Display for BuiltinFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// The set of node kinds is closed. Every interior node owns its children,
/// so a tree has no sharing and no cycles. Evaluation
/// ([`Expr::evaluate`]) and printing (`Display`) never modify the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `3.14`.
    NumberLiteral {
        /// The literal's value.
        value: f64,
    },
    /// An identifier resolved at evaluation time: `PI`, `E`, `true` or
    /// `false`. Any other name fails to evaluate.
    NamedConstant {
        /// The identifier.
        name: String,
    },
    /// A prefix operation.
    UnaryOp {
        /// The operator.
        op:      UnaryOperator,
        /// The operand.
        operand: Box<Self>,
    },
    /// An infix operation.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// `condition ? then_branch : else_branch`.
    Conditional {
        /// Must evaluate to a boolean.
        condition:   Box<Self>,
        /// Evaluated when the condition is `true`.
        then_branch: Box<Self>,
        /// Evaluated when the condition is `false`.
        else_branch: Box<Self>,
    },
    /// A call of one of the six built-in functions.
    BuiltinCall {
        /// The function.
        function: BuiltinFunction,
        /// The single argument.
        argument: Box<Self>,
    },
    /// A call of a registered function, bound when the expression was
    /// parsed.
    UserCall {
        /// The name the function was registered under.
        name:     String,
        /// The bound function.
        function: UserFunction,
        /// The single argument.
        argument: Box<Self>,
    },
}

impl Expr {
    /// Returns the text of this node alone, without its children.
    ///
    /// Operators yield their symbol, conditionals `?:`, calls and constants
    /// their name, and literals their number.
    ///
    /// ## Example
    /// ```
    /// use exprtree::parse;
    ///
    /// let tree = parse("1 + sin(2)").unwrap();
    /// let labels: Vec<String> = tree.children().iter().map(|c| c.label()).collect();
    ///
    /// assert_eq!(tree.label(), "+");
    /// assert_eq!(labels, ["1.0", "sin"]);
    /// ```
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::NumberLiteral { value } => number_text(*value),
            Self::NamedConstant { name } | Self::UserCall { name, .. } => name.clone(),
            Self::UnaryOp { op, .. } => op.to_string(),
            Self::BinaryOp { op, .. } => op.to_string(),
            Self::Conditional { .. } => "?:".to_string(),
            Self::BuiltinCall { function, .. } => function.to_string(),
        }
    }

    /// Returns the direct children in source order.
    #[must_use]
    pub fn children(&self) -> Vec<&Self> {
        match self {
            Self::NumberLiteral { .. } | Self::NamedConstant { .. } => Vec::new(),
            Self::UnaryOp { operand, .. } => vec![operand.as_ref()],
            Self::BinaryOp { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            Self::Conditional { condition,
                                then_branch,
                                else_branch, } => {
                vec![condition.as_ref(), then_branch.as_ref(), else_branch.as_ref()]
            },
            Self::BuiltinCall { argument, .. } | Self::UserCall { argument, .. } => {
                vec![argument.as_ref()]
            },
        }
    }

    /// Overwrites the value of a number literal in place.
    ///
    /// Intended for interactive editors; parsing and evaluation never call
    /// it.
    ///
    /// # Errors
    /// Returns [`EditError::NotANumberLiteral`] for any other node.
    ///
    /// ## Example
    /// ```
    /// use exprtree::{Value, parse};
    ///
    /// let mut tree = parse("2").unwrap();
    /// tree.set_number(5.0).unwrap();
    /// assert_eq!(tree.evaluate().unwrap(), Value::Number(5.0));
    /// ```
    pub fn set_number(&mut self, new_value: f64) -> Result<(), EditError> {
        match self {
            Self::NumberLiteral { value } => {
                *value = new_value;
                Ok(())
            },
            other => Err(EditError::NotANumberLiteral { found: other.label() }),
        }
    }

    /// Replaces the function of a call node in place, keeping its argument.
    ///
    /// The name is validated the same way the parser does it: built-ins
    /// first, then the registry. A registered function is bound from
    /// `registry` at the time of the call.
    ///
    /// # Errors
    /// - [`EditError::NotAFunctionCall`] if this node is not a call.
    /// - [`EditError::UnknownFunction`] if `name` is neither a built-in nor
    ///   registered.
    pub fn rebind_function(&mut self,
                           name: &str,
                           registry: &FunctionRegistry)
                           -> Result<(), EditError> {
        let argument = match self {
            Self::BuiltinCall { argument, .. } | Self::UserCall { argument, .. } => {
                std::mem::replace(argument, Box::new(Self::NumberLiteral { value: 0.0 }))
            },
            other => return Err(EditError::NotAFunctionCall { found: other.label() }),
        };

        let rebound = if let Some(function) = BuiltinFunction::from_name(name) {
            Self::BuiltinCall { function, argument }
        } else if let Some(function) = registry.get(name) {
            Self::UserCall { name: name.to_string(),
                             function: function.clone(),
                             argument }
        } else {
            self.restore_argument(argument);
            return Err(EditError::UnknownFunction { name: name.to_string() });
        };

        *self = rebound;
        Ok(())
    }

    fn restore_argument(&mut self, original: Box<Self>) {
        if let Self::BuiltinCall { argument, .. } | Self::UserCall { argument, .. } = self {
            *argument = original;
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Logical NOT (`!x`).
    Not,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            And => "and",
            Or => "or",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}
