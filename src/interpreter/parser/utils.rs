use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
    position::Position,
};

/// Takes the next token, treating exhaustion as an error.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Position)` pairs.
/// - `at`: Position reported when the stream is already exhausted,
///   normally the opening bracket of the form being parsed.
///
/// # Returns
/// The next token with its position.
///
/// # Errors
/// Returns `ParseError::UnexpectedEndOfInput` if no token is left.
pub(in crate::interpreter::parser) fn next_token<'a, I>(tokens: &mut Peekable<I>,
                                                        at: Position)
                                                        -> ParseResult<&'a (Token, Position)>
    where I: Iterator<Item = &'a (Token, Position)>
{
    tokens.next()
          .ok_or(ParseError::UnexpectedEndOfInput { position: at })
}

/// Consumes one specific token, such as a closing bracket or a keyword.
///
/// The expected token doubles as the description in the error message,
/// through its `Display` rendering.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expected token.
/// - `expected`: The exact token the grammar requires here.
/// - `at`: Fallback position for exhaustion, normally the opening bracket
///   of the form being parsed.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token differs from `expected`,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token,
                                                          at: Position)
                                                          -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((token, _)) if token == expected => Ok(()),
        Some((token, position)) => {
            Err(ParseError::UnexpectedToken { expected: expected.to_string(),
                                              found:    token.to_string(),
                                              position: *position, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { position: at }),
    }
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
/// - `at`: Fallback position for exhaustion.
///
/// # Returns
/// A `String` containing the identifier.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              at: Position)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((Token::Identifier(name), _)) => Ok(name.clone()),
        Some((token, position)) => {
            Err(ParseError::UnexpectedToken { expected: "an identifier".to_string(),
                                              found:    token.to_string(),
                                              position: *position, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { position: at }),
    }
}

/// Parses an integer literal and returns its value.
///
/// The next token must be `Token::Integer`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an integer literal.
/// - `at`: Fallback position for exhaustion.
///
/// # Returns
/// The literal's value.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an integer literal,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_integer_literal<'a, I>(tokens: &mut Peekable<I>,
                                                                   at: Position)
                                                                   -> ParseResult<i64>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((Token::Integer(value), _)) => Ok(*value),
        Some((token, position)) => {
            Err(ParseError::UnexpectedToken { expected: "an integer literal".to_string(),
                                              found:    token.to_string(),
                                              position: *position, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { position: at }),
    }
}
