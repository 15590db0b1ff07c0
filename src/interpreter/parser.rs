/// Core parsing logic for bracketed forms.
///
/// Contains the expression entry point and one parsing routine per form of
/// the grammar.
pub mod core;

/// Utility functions for the parser.
///
/// Provides token expectation helpers and reusable checks used while
/// parsing forms.
pub mod utils;
