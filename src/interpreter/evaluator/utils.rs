use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::{core::{Context, EvalResult},
                             scope::ScopeRef},
};

impl Context {
    /// Pushes a frame, making it the current one.
    ///
    /// Used for let bodies, call bodies and blocks. The frame is built by
    /// the caller, since its parent is not always the frame that is
    /// current here: a call body's parent is the closure's captured frame.
    ///
    /// # Example
    /// ```
    /// use valet::interpreter::evaluator::core::Context;
    ///
    /// let mut context = Context::new();
    /// let initial = context.scope_stack.len();
    ///
    /// context.push_scope(context.current_scope().child());
    ///
    /// assert_eq!(context.scope_stack.len(), initial + 1);
    /// ```
    pub fn push_scope(&mut self, scope: ScopeRef) {
        self.scope_stack.push(scope);
    }

    /// Removes the current frame from the stack.
    ///
    /// This is called when leaving a let body, a call body or a block.
    /// The frame itself lives on if a closure captured it.
    ///
    /// # Example
    /// ```
    /// use valet::interpreter::evaluator::core::Context;
    ///
    /// let mut context = Context::new();
    /// context.push_scope(context.current_scope().child());
    /// let before = context.scope_stack.len();
    ///
    /// context.pop_scope();
    ///
    /// assert_eq!(context.scope_stack.len(), before - 1);
    /// ```
    pub fn pop_scope(&mut self) {
        self.scope_stack.pop();
    }

    /// Returns a handle to the current frame.
    ///
    /// # Panics
    /// Panics if the stack is empty, which indicates an internal error:
    /// the constructors install a global frame and every pop is paired
    /// with a push.
    #[must_use]
    pub fn current_scope(&self) -> ScopeRef {
        self.scope_stack
            .last()
            .expect("at least the global frame")
            .clone()
    }

    /// Retrieves a variable by walking the chain of frames.
    ///
    /// Lookup begins at the current frame and follows parent links
    /// outward; the first binding found wins. Only the current frame's
    /// chain is consulted, never the stack as a whole, so a call body
    /// sees its closure's definition site rather than its caller.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    ///
    /// # Returns
    /// A clone of the bound expression if found, otherwise `None`.
    ///
    /// # Example
    /// ```
    /// use valet::{ast::Expr,
    ///             interpreter::evaluator::core::Context,
    ///             position::Position};
    ///
    /// let context = Context::new();
    /// context.current_scope().add("x", Expr::Value { value:    5,
    ///                                                position: Position::default(), });
    ///
    /// assert!(context.lookup("x").is_some());
    /// assert!(context.lookup("y").is_none());
    /// ```
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Expr> {
        let mut frame = Some(self.current_scope());

        while let Some(scope) = frame {
            if let Some(value) = scope.get(name) {
                return Some(value);
            }
            frame = scope.parent();
        }

        None
    }

    /// Overwrites the nearest binding of `name` on the current chain.
    ///
    /// Search proceeds from the current frame outward, like `lookup`.
    /// Unlike a binder, this never creates a binding: when no frame on
    /// the chain binds the name, nothing changes.
    ///
    /// # Parameters
    /// - `name`: Variable to update.
    /// - `value`: New value.
    ///
    /// # Returns
    /// `true` when a binding was overwritten, `false` when the name is
    /// unbound on the whole chain.
    ///
    /// # Example
    /// ```
    /// use valet::{ast::Expr,
    ///             interpreter::evaluator::core::Context,
    ///             position::Position};
    ///
    /// let mut context = Context::new();
    /// context.current_scope().add("y", Expr::Value { value:    1,
    ///                                                position: Position::default(), });
    ///
    /// let updated = context.assign("y", Expr::Value { value:    5,
    ///                                                 position: Position::default(), });
    ///
    /// assert!(updated);
    /// assert_eq!(Context::int_value(&context.lookup("y").unwrap()).unwrap(), 5);
    /// ```
    pub fn assign(&mut self, name: &str, value: Expr) -> bool {
        let mut frame = Some(self.current_scope());

        while let Some(scope) = frame {
            if scope.try_set(name, &value) {
                return true;
            }
            frame = scope.parent();
        }

        false
    }

    /// Extracts the integer payload from a fully reduced expression.
    ///
    /// # Errors
    /// `NotAValue`, carrying the offending expression's rendering, when
    /// the expression is anything other than a `Value`.
    ///
    /// # Example
    /// ```
    /// use valet::{ast::Expr,
    ///             interpreter::evaluator::core::Context,
    ///             position::Position};
    ///
    /// let five = Expr::Value { value:    5,
    ///                          position: Position::default(), };
    ///
    /// assert_eq!(Context::int_value(&five).unwrap(), 5);
    /// assert!(Context::int_value(&Expr::Unit { position: Position::default() }).is_err());
    /// ```
    pub fn int_value(expression: &Expr) -> EvalResult<i64> {
        match expression {
            Expr::Value { value, .. } => Ok(*value),
            other => Err(RuntimeError::NotAValue { expression: other.to_string(),
                                                   position:   other.position(), }),
        }
    }
}
