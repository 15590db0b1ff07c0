use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::utils::{expect_token, next_token, parse_identifier, parse_integer_literal},
    },
    position::Position,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. Every expression is a
/// bracketed form: an opening bracket, a keyword selecting the form, the
/// form's body, and a closing bracket. The produced node carries the
/// position of the opening bracket.
///
/// Grammar:
/// ```text
/// expression := "(" form ")"
/// form       := "val" INTEGER
///             | "var" IDENT
///             | "add" expression expression
///             | "if" expression expression "then" expression "else" expression
///             | "let" IDENT "=" expression "in" expression
///             | "function" IDENT expression
///             | "call" expression expression
///             | "set" IDENT expression
///             | "block" expression+
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Position)` pairs.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the stream runs out inside a form.
/// - `UnexpectedToken` if a bracket, keyword, identifier, or literal the
///   grammar requires is missing.
/// - `EmptyBlock` for a block form with no nested expressions.
///
/// # Example
/// ```
/// use valet::interpreter::{lexer::tokenize, parser::core::parse_expression};
///
/// let tokens = tokenize("(add (val 2) (val 3))").unwrap();
/// let expression = parse_expression(&mut tokens.iter().peekable()).unwrap();
///
/// assert_eq!(expression.to_string(), "(add (val 2) (val 3))");
/// ```
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let position = match tokens.next() {
        Some((Token::OpenBracket, position)) => *position,
        Some((token, position)) => {
            return Err(ParseError::UnexpectedToken { expected: Token::OpenBracket.to_string(),
                                                     found:    token.to_string(),
                                                     position: *position, });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { position: Position::default() });
        },
    };

    let expression = match next_token(tokens, position)? {
        (Token::Val, _) => parse_val(tokens, position)?,
        (Token::Var, _) => parse_var(tokens, position)?,
        (Token::Add, _) => parse_add(tokens, position)?,
        (Token::If, _) => parse_if(tokens, position)?,
        (Token::Let, _) => parse_let(tokens, position)?,
        (Token::Function, _) => parse_function(tokens, position)?,
        (Token::Call, _) => parse_call(tokens, position)?,
        (Token::Set, _) => parse_set(tokens, position)?,
        (Token::Block, _) => parse_block(tokens, position)?,
        (token, keyword_position) => {
            return Err(ParseError::UnexpectedToken { expected: "a form keyword".to_string(),
                                                     found:    token.to_string(),
                                                     position: *keyword_position, });
        },
    };

    expect_token(tokens, &Token::CloseBracket, position)?;

    Ok(expression)
}

/// Parses an integer literal form.
///
/// Syntax: `"val" INTEGER`
fn parse_val<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let value = parse_integer_literal(tokens, position)?;

    Ok(Expr::Value { value, position })
}

/// Parses a variable reference form.
///
/// Syntax: `"var" IDENT`
fn parse_var<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let name = parse_identifier(tokens, position)?;

    Ok(Expr::Variable { name, position })
}

/// Parses an addition form.
///
/// Syntax: `"add" expression expression`
fn parse_add<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let left = parse_expression(tokens)?;
    let right = parse_expression(tokens)?;

    Ok(Expr::Add { left: Box::new(left),
                   right: Box::new(right),
                   position })
}

/// Parses a conditional form.
///
/// Syntax: `"if" expression expression "then" expression "else" expression`
///
/// The two leading expressions are the operands of the strict greater-than
/// comparison that selects the branch.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let left = parse_expression(tokens)?;
    let right = parse_expression(tokens)?;

    expect_token(tokens, &Token::Then, position)?;
    let then_branch = parse_expression(tokens)?;

    expect_token(tokens, &Token::Else, position)?;
    let else_branch = parse_expression(tokens)?;

    Ok(Expr::If { left: Box::new(left),
                  right: Box::new(right),
                  then_branch: Box::new(then_branch),
                  else_branch: Box::new(else_branch),
                  position })
}

/// Parses a binding form.
///
/// Syntax: `"let" IDENT "=" expression "in" expression`
fn parse_let<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let name = parse_identifier(tokens, position)?;

    expect_token(tokens, &Token::Assign, position)?;
    let value = parse_expression(tokens)?;

    expect_token(tokens, &Token::In, position)?;
    let body = parse_expression(tokens)?;

    Ok(Expr::Let { name,
                   value: Box::new(value),
                   body: Box::new(body),
                   position })
}

/// Parses a function literal form.
///
/// Syntax: `"function" IDENT expression`
fn parse_function<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let parameter = parse_identifier(tokens, position)?;
    let body = parse_expression(tokens)?;

    Ok(Expr::Function { parameter,
                        body: Box::new(body),
                        position })
}

/// Parses a function application form.
///
/// Syntax: `"call" expression expression`
fn parse_call<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let callable = parse_expression(tokens)?;
    let argument = parse_expression(tokens)?;

    Ok(Expr::Call { callable: Box::new(callable),
                    argument: Box::new(argument),
                    position })
}

/// Parses a mutation form.
///
/// Syntax: `"set" IDENT expression`
fn parse_set<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let name = parse_identifier(tokens, position)?;
    let value = parse_expression(tokens)?;

    Ok(Expr::Set { name,
                   value: Box::new(value),
                   position })
}

/// Parses a sequencing form.
///
/// Syntax: `"block" expression+`
///
/// Nested expressions are parsed until the closing bracket, which is left
/// for the caller to consume. A block with no nested expressions is
/// rejected here, at parse time.
fn parse_block<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut expressions = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::CloseBracket, _)) => break,
            Some(_) => expressions.push(parse_expression(tokens)?),
            None => return Err(ParseError::UnexpectedEndOfInput { position }),
        }
    }

    if expressions.is_empty() {
        return Err(ParseError::EmptyBlock { position });
    }

    Ok(Expr::Block { expressions, position })
}
