use crate::{interpreter::evaluator::scope::ScopeRef, position::Position};

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers every syntactic construct the parser can produce and,
/// because evaluation maps expressions to expressions, it is also the
/// result domain of the evaluator. A fully reduced result is a `Value`,
/// a `Closure`, or `Unit`; everything else still has evaluation work
/// left in it. Each variant records the position of the opening bracket
/// of the form it was parsed from.
///
/// Two variants never come out of the parser: `Closure` is created by
/// evaluating a `Function`, and `Unit` is created by evaluating a `Set`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A 64-bit signed integer literal, `(val 5)`.
    Value {
        /// The integer payload.
        value:    i64,
        /// Position of the form in the source code.
        position: Position,
    },
    /// Reference to a variable by name, `(var x)`.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Position of the form in the source code.
        position: Position,
    },
    /// Integer addition of two subexpressions, `(add L R)`.
    Add {
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the form in the source code.
        position: Position,
    },
    /// Conditional on a strict greater-than comparison,
    /// `(if L R then T else E)`.
    If {
        /// Left operand of the comparison.
        left:        Box<Self>,
        /// Right operand of the comparison.
        right:       Box<Self>,
        /// Expression evaluated when `left > right`.
        then_branch: Box<Self>,
        /// Expression evaluated otherwise, including on equality.
        else_branch: Box<Self>,
        /// Position of the form in the source code.
        position:    Position,
    },
    /// A lexical binding with a body, `(let x = V in B)`.
    Let {
        /// The name being bound.
        name:     String,
        /// The expression whose result is bound.
        value:    Box<Self>,
        /// The expression evaluated with the binding in scope.
        body:     Box<Self>,
        /// Position of the form in the source code.
        position: Position,
    },
    /// A single-parameter function literal, `(function p B)`.
    Function {
        /// The parameter name.
        parameter: String,
        /// The body evaluated when the function is called.
        body:      Box<Self>,
        /// Position of the form in the source code.
        position:  Position,
    },
    /// A function value paired with the scope captured at its definition.
    ///
    /// Produced by evaluating a `Function`; never by the parser. The
    /// captured frame stays alive as long as the closure does, even after
    /// the evaluator has left the region that created it.
    Closure {
        /// The parameter name.
        parameter: String,
        /// The body evaluated when the closure is called.
        body:      Box<Self>,
        /// The scope chain captured where the function was evaluated.
        scope:     ScopeRef,
        /// Position of the function form this closure came from.
        position:  Position,
    },
    /// Application of a function value to one argument, `(call F A)`.
    Call {
        /// The expression expected to reduce to a function value.
        callable: Box<Self>,
        /// The argument expression.
        argument: Box<Self>,
        /// Position of the form in the source code.
        position: Position,
    },
    /// Mutation of the nearest enclosing binding, `(set x V)`.
    Set {
        /// The name of the existing binding to overwrite.
        name:     String,
        /// The expression whose result is stored.
        value:    Box<Self>,
        /// Position of the form in the source code.
        position: Position,
    },
    /// A sequence of expressions evaluated in order, `(block E1 E2 ...)`.
    ///
    /// The parser guarantees at least one element.
    Block {
        /// The expressions of the sequence.
        expressions: Vec<Self>,
        /// Position of the form in the source code.
        position:    Position,
    },
    /// The result of a `set`; carries no payload.
    ///
    /// Produced by evaluating a `Set`; never by the parser.
    Unit {
        /// Position of the set form that produced this result.
        position: Position,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use valet::{ast::Expr, position::Position};
    ///
    /// let expr = Expr::Variable { name:     "x".to_string(),
    ///                             position: Position::new(2, 5), };
    ///
    /// assert_eq!(expr.position(), Position::new(2, 5));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Value { position, .. }
            | Self::Variable { position, .. }
            | Self::Add { position, .. }
            | Self::If { position, .. }
            | Self::Let { position, .. }
            | Self::Function { position, .. }
            | Self::Closure { position, .. }
            | Self::Call { position, .. }
            | Self::Set { position, .. }
            | Self::Block { position, .. }
            | Self::Unit { position } => *position,
        }
    }
}

/// Renders the expression in the canonical source form.
///
/// Rendering a parsed tree produces text that parses back to an equal
/// tree. A `Closure` renders in `(function p B)` form, since its captured
/// scope has no textual spelling.
///
/// # Example
/// ```
/// use valet::parse_source;
///
/// let source = "(let x = (val 1) in (add (var x) (val 2)))";
/// let expression = parse_source(source).unwrap();
///
/// assert_eq!(expression.to_string(), source);
/// ```
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value { value, .. } => write!(f, "(val {value})"),
            Self::Variable { name, .. } => write!(f, "(var {name})"),
            Self::Add { left, right, .. } => write!(f, "(add {left} {right})"),
            Self::If { left,
                       right,
                       then_branch,
                       else_branch,
                       .. } => {
                write!(f, "(if {left} {right} then {then_branch} else {else_branch})")
            },
            Self::Let { name, value, body, .. } => write!(f, "(let {name} = {value} in {body})"),
            Self::Function { parameter, body, .. } | Self::Closure { parameter, body, .. } => {
                write!(f, "(function {parameter} {body})")
            },
            Self::Call { callable, argument, .. } => write!(f, "(call {callable} {argument})"),
            Self::Set { name, value, .. } => write!(f, "(set {name} {value})"),
            Self::Block { expressions, .. } => {
                write!(f, "(block")?;
                for expression in expressions {
                    write!(f, " {expression}")?;
                }
                write!(f, ")")
            },
            Self::Unit { .. } => write!(f, "(unit)"),
        }
    }
}
