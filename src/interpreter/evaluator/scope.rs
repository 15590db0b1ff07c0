use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::ast::Expr;

/// A single lexical frame: a set of bindings plus a link to the enclosing
/// frame.
///
/// Frames are always handled through [`ScopeRef`]. A frame only knows its
/// own bindings; walking the parent chain is the evaluator's business.
#[derive(Debug, Default, PartialEq)]
pub struct Scope {
    values: HashMap<String, Expr>,
    parent: Option<ScopeRef>,
}

/// A shared, mutable handle to a [`Scope`].
///
/// Cloning a `ScopeRef` is cheap and yields another handle to the same
/// frame. A frame stays alive for as long as any handle to it does, which
/// is what lets a closure keep using its captured frame after the
/// evaluator has left the region of the program that created it.
///
/// Equality between handles is identity, not structure: two handles are
/// equal when they point at the same frame.
///
/// A `set` can store a closure into a frame that the closure's own
/// captured chain reaches, producing a reference cycle that is never
/// reclaimed. Collecting such cycles is out of scope.
///
/// # Example
/// ```
/// use valet::{ast::Expr,
///             interpreter::evaluator::scope::ScopeRef,
///             position::Position};
///
/// let globals = ScopeRef::new();
/// globals.add("x", Expr::Value { value:    1,
///                                position: Position::default(), });
///
/// let inner = globals.child();
///
/// // The child frame has no own binding for `x`, but its parent does.
/// assert_eq!(inner.get("x"), None);
/// assert!(inner.parent().unwrap().get("x").is_some());
/// ```
#[derive(Clone)]
pub struct ScopeRef(Rc<RefCell<Scope>>);

impl ScopeRef {
    /// Creates a root frame with no parent and no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(Scope::default())))
    }

    /// Creates an empty frame whose parent is this one.
    #[must_use]
    pub fn child(&self) -> Self {
        Self(Rc::new(RefCell::new(Scope { values: HashMap::new(),
                                          parent: Some(self.clone()), })))
    }

    /// Looks up a binding in this frame only.
    ///
    /// # Returns
    /// A clone of the bound expression, or `None` when this frame does not
    /// bind the name. Enclosing frames are not consulted.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Expr> {
        self.0.borrow().values.get(name).cloned()
    }

    /// Binds a name in this frame.
    ///
    /// Re-binding a name that already exists in this frame overwrites it.
    /// Language forms never do that, since every binder evaluates its body
    /// in a fresh frame, but the behavior is pinned for trees built by
    /// hand.
    ///
    /// # Example
    /// ```
    /// use valet::{ast::Expr,
    ///             interpreter::evaluator::scope::ScopeRef,
    ///             position::Position};
    ///
    /// let frame = ScopeRef::new();
    /// frame.add("x", Expr::Value { value:    1,
    ///                              position: Position::default(), });
    /// frame.add("x", Expr::Value { value:    2,
    ///                              position: Position::default(), });
    ///
    /// assert_eq!(frame.get("x"),
    ///            Some(Expr::Value { value:    2,
    ///                               position: Position::default(), }));
    /// ```
    pub fn add(&self, name: &str, value: Expr) {
        self.0.borrow_mut().values.insert(name.to_string(), value);
    }

    /// Overwrites a binding in this frame only.
    ///
    /// Takes the value by reference and clones it on a hit, so a caller
    /// probing several frames pays for one clone at most.
    ///
    /// # Returns
    /// `true` when the name was bound here and has been replaced, `false`
    /// when this frame does not bind it. Never creates a binding.
    pub fn try_set(&self, name: &str, value: &Expr) -> bool {
        let mut scope = self.0.borrow_mut();

        match scope.values.get_mut(name) {
            Some(bound) => {
                *bound = value.clone();
                true
            },
            None => false,
        }
    }

    /// The enclosing frame, or `None` for a root frame.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.0.borrow().parent.clone()
    }
}

impl Default for ScopeRef {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ScopeRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Renders the handle's identity only. Frames can be cyclic through
/// captured closures, so their contents are not printed.
impl std::fmt::Debug for ScopeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ScopeRef({:p})", Rc::as_ptr(&self.0))
    }
}
