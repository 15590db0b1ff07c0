//! # valet
//!
//! valet is a tree-walking interpreter for a small, fully parenthesized
//! expression language. It lexes, parses, and evaluates programs built from
//! integer values, addition, a strict greater-than conditional, `let`
//! bindings, first-class single-parameter functions with lexical closures,
//! `set` mutation, and `block` sequencing. A program is one expression; its
//! result is again an expression, rendered back to canonical text.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{evaluator::core::Context, lexer::tokenize, parser::core::parse_expression},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum that represents the syntactic
/// structure of source code as a tree. The AST is built by the parser,
/// traversed by the evaluator, and doubles as the evaluator's result
/// domain.
///
/// # Responsibilities
/// - Defines expression types for all language constructs.
/// - Attaches source positions to AST nodes for error reporting.
/// - Renders expressions back to their canonical source form.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including source positions for debugging and
/// user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches positions and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, scope handling,
/// and all supporting infrastructure to provide a complete runtime for
/// source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Provides the building blocks behind the crate's entry points.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Source locations for diagnostics.
///
/// This module defines the position type attached to every token and AST
/// node, so errors can point at the row and column of the construct they
/// describe.
///
/// # Responsibilities
/// - Defines the `Position` type and its rendering.
pub mod position;

/// Parses a source text into a single expression.
///
/// The whole input must be exactly one bracketed form; anything left over
/// after it is rejected.
///
/// # Errors
/// Any `ParseError`: an unexpected character, an oversized literal, a
/// grammar violation, an empty block, or trailing tokens.
///
/// # Examples
/// ```
/// use valet::parse_source;
///
/// assert!(parse_source("(val 5)").is_ok());
///
/// // The program must be exactly one expression.
/// assert!(parse_source("(val 1) (val 2)").is_err());
/// ```
pub fn parse_source(source: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    let expression = parse_expression(&mut iter)?;

    if let Some((token, position)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { found:    token.to_string(),
                                                          position: *position, });
    }

    Ok(expression)
}

/// Parses and evaluates a source text, returning the reduced expression.
///
/// This is the main entry point for running a program. The expression is
/// evaluated in a fresh context with one empty global frame; embedders that
/// want to pre-populate the global frame can build a
/// [`Context`](crate::interpreter::evaluator::core::Context) themselves.
///
/// # Errors
/// Returns an error if parsing or evaluation fails: either a `ParseError`
/// or a `RuntimeError`, boxed.
///
/// # Examples
/// ```
/// use valet::eval_source;
///
/// let result = eval_source("(add (val 2) (val 3))").unwrap();
/// assert_eq!(result.to_string(), "(val 5)");
///
/// // An undefined variable is a runtime error.
/// assert!(eval_source("(var x)").is_err());
/// ```
pub fn eval_source(source: &str) -> Result<Expr, Box<dyn std::error::Error>> {
    let expression = parse_source(source)?;

    let mut context = Context::new();

    context.eval(&expression).map_err(Into::into)
}
