use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::scope::ScopeRef,
    position::Position,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The context keeps two concerns separate: which frames exist, owned by
/// the [`ScopeRef`] handles of the frames themselves and of any closures,
/// and which frame is current, tracked by this stack. Entering a let
/// body, a call body, or a block pushes the frame the body runs in;
/// leaving pops it. A popped frame is deallocated only when the last
/// closure holding it lets go.
///
/// ## Usage
///
/// `Context` is created once and reused for evaluating expressions
/// against the same global frame.
pub struct Context {
    /// The stack of entered frames; the last entry is the current one.
    pub scope_stack: Vec<ScopeRef>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with one empty global frame.
    #[must_use]
    pub fn new() -> Self {
        Self { scope_stack: vec![ScopeRef::new()] }
    }

    /// Creates a context that evaluates inside a caller-provided frame.
    ///
    /// Bindings added to `global` beforehand are visible to every
    /// expression evaluated by this context.
    ///
    /// # Example
    /// ```
    /// use valet::{ast::Expr,
    ///             interpreter::evaluator::{core::Context, scope::ScopeRef},
    ///             parse_source,
    ///             position::Position};
    ///
    /// let globals = ScopeRef::new();
    /// globals.add("answer", Expr::Value { value:    42,
    ///                                     position: Position::default(), });
    ///
    /// let mut context = Context::with_global(globals);
    /// let expression = parse_source("(var answer)").unwrap();
    ///
    /// assert_eq!(context.eval(&expression).unwrap().to_string(), "(val 42)");
    /// ```
    #[must_use]
    pub fn with_global(global: ScopeRef) -> Self {
        Self { scope_stack: vec![global] }
    }

    /// Evaluates an expression and returns the resulting expression.
    ///
    /// This is the main entry point for evaluation. Fully reduced results
    /// evaluate to themselves; everything else dispatches on the variant.
    /// A result is always a `Value`, a `Closure`, or `Unit`.
    ///
    /// # Parameters
    /// - `expression`: Expression to evaluate.
    ///
    /// # Returns
    /// The reduced expression.
    ///
    /// # Errors
    /// Any `RuntimeError` raised by the program: an undefined variable, an
    /// operand that is not a value, a callable that is not a function
    /// value, or integer overflow.
    ///
    /// # Example
    /// ```
    /// use valet::{interpreter::evaluator::core::Context, parse_source};
    ///
    /// let expression = parse_source("(add (val 2) (val 3))").unwrap();
    /// let mut context = Context::new();
    ///
    /// let result = context.eval(&expression).unwrap();
    /// assert_eq!(result.to_string(), "(val 5)");
    /// ```
    pub fn eval(&mut self, expression: &Expr) -> EvalResult<Expr> {
        match expression {
            Expr::Value { .. } | Expr::Closure { .. } | Expr::Unit { .. } => {
                Ok(expression.clone())
            },
            Expr::Variable { name, position } => self.eval_variable(name, *position),
            Expr::Add { left, right, position } => self.eval_add(left, right, *position),
            Expr::If { left,
                       right,
                       then_branch,
                       else_branch,
                       .. } => self.eval_if(left, right, then_branch, else_branch),
            Expr::Let { name, value, body, .. } => self.eval_let(name, value, body),
            Expr::Function { parameter, body, position } => {
                self.eval_function(parameter, body, *position)
            },
            Expr::Call { callable, argument, position } => {
                self.eval_call(callable, argument, *position)
            },
            Expr::Set { name, value, position } => self.eval_set(name, value, *position),
            Expr::Block { expressions, position } => self.eval_block(expressions, *position),
        }
    }

    /// Resolves a variable reference.
    ///
    /// # Errors
    /// `UndefinedVariable` when no frame on the chain binds the name.
    fn eval_variable(&self, name: &str, position: Position) -> EvalResult<Expr> {
        self.lookup(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             position })
    }

    /// Evaluates an addition, left operand first.
    ///
    /// # Errors
    /// - `NotAValue` when an operand does not reduce to an integer.
    /// - `Overflow` when the sum leaves the 64-bit range.
    fn eval_add(&mut self, left: &Expr, right: &Expr, position: Position) -> EvalResult<Expr> {
        let left_value = Self::int_value(&self.eval(left)?)?;
        let right_value = Self::int_value(&self.eval(right)?)?;

        let value = left_value.checked_add(right_value)
                              .ok_or(RuntimeError::Overflow { position })?;

        Ok(Expr::Value { value, position })
    }

    /// Evaluates a conditional.
    ///
    /// Both operands are evaluated first, left before right. Exactly one
    /// branch is evaluated afterwards: the then branch when the comparison
    /// is strictly greater, the else branch otherwise, including on
    /// equality.
    fn eval_if(&mut self,
               left: &Expr,
               right: &Expr,
               then_branch: &Expr,
               else_branch: &Expr)
               -> EvalResult<Expr> {
        let left_value = Self::int_value(&self.eval(left)?)?;
        let right_value = Self::int_value(&self.eval(right)?)?;

        if left_value > right_value {
            self.eval(then_branch)
        } else {
            self.eval(else_branch)
        }
    }

    /// Evaluates a binding form.
    ///
    /// The bound expression is evaluated in the current frame, then the
    /// body runs in a fresh child frame holding the one binding. The
    /// binding disappears with the frame when the body is done, unless a
    /// closure captured it.
    fn eval_let(&mut self, name: &str, value: &Expr, body: &Expr) -> EvalResult<Expr> {
        let bound = self.eval(value)?;

        let frame = self.current_scope().child();
        frame.add(name, bound);

        self.eval_in_frame(frame, body)
    }

    /// Evaluates a function literal by capturing the current frame.
    fn eval_function(&self, parameter: &str, body: &Expr, position: Position) -> EvalResult<Expr> {
        Ok(Expr::Closure { parameter: parameter.to_string(),
                           body: Box::new(body.clone()),
                           scope: self.current_scope(),
                           position })
    }

    /// Evaluates a function application.
    ///
    /// The callable is evaluated first and checked before the argument is
    /// touched. The body then runs in a fresh frame holding the parameter
    /// binding; the frame's parent is the closure's captured frame, so the
    /// body sees the definition site's bindings rather than the caller's.
    /// A bare `Function` that somehow reaches this point behaves as if
    /// defined at the call site.
    ///
    /// # Errors
    /// `NotCallable` when the callable reduces to anything other than a
    /// function value; the argument stays unevaluated in that case.
    fn eval_call(&mut self,
                 callable: &Expr,
                 argument: &Expr,
                 position: Position)
                 -> EvalResult<Expr> {
        let function = self.eval(callable)?;

        let (parameter, body, parent) = match function {
            Expr::Closure { parameter, body, scope, .. } => (parameter, body, scope),
            Expr::Function { parameter, body, .. } => (parameter, body, self.current_scope()),
            other => {
                return Err(RuntimeError::NotCallable { expression: other.to_string(),
                                                       position });
            },
        };

        let bound = self.eval(argument)?;

        let frame = parent.child();
        frame.add(&parameter, bound);

        self.eval_in_frame(frame, &body)
    }

    /// Evaluates a mutation of an existing binding.
    ///
    /// The new value is evaluated first, then the nearest enclosing frame
    /// that binds the name is overwritten. A `set` never creates a
    /// binding.
    ///
    /// # Errors
    /// `UndefinedVariable` when no frame on the chain binds the name.
    fn eval_set(&mut self, name: &str, value: &Expr, position: Position) -> EvalResult<Expr> {
        let new_value = self.eval(value)?;

        if self.assign(name, new_value) {
            Ok(Expr::Unit { position })
        } else {
            Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                                  position })
        }
    }

    /// Evaluates a sequencing form inside one fresh frame.
    ///
    /// The result is the last expression's result.
    fn eval_block(&mut self, expressions: &[Expr], position: Position) -> EvalResult<Expr> {
        self.push_scope(self.current_scope().child());
        let result = self.eval_sequence(expressions, position);
        self.pop_scope();

        result
    }

    /// Evaluates block expressions in order within the current frame.
    ///
    /// The parser rejects empty blocks; one that reaches this point anyway
    /// came from a hand-built tree and is reported as unknown.
    fn eval_sequence(&mut self, expressions: &[Expr], position: Position) -> EvalResult<Expr> {
        let Some((last, rest)) = expressions.split_last() else {
            return Err(RuntimeError::UnknownExpression { expression: "(block)".to_string(),
                                                         position });
        };

        for expression in rest {
            self.eval(expression)?;
        }

        self.eval(last)
    }

    /// Evaluates an expression with `frame` as the current frame.
    ///
    /// The frame is pushed around the evaluation and popped on both the
    /// success and the error path, keeping the stack in lock-step.
    fn eval_in_frame(&mut self, frame: ScopeRef, expression: &Expr) -> EvalResult<Expr> {
        self.push_scope(frame);
        let result = self.eval(expression);
        self.pop_scope();

        result
    }
}
