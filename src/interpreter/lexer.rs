use logos::Logos;

use crate::{error::ParseError, position::Position};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Keywords win over identifiers on an exact match, so `val` is a keyword
/// while `value` is an identifier.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42` or `-7`.
    #[regex(r"-?[0-9]+", parse_integer)]
    Integer(i64),
    /// `val`
    #[token("val")]
    Val,
    /// `var`
    #[token("var")]
    Var,
    /// `add`
    #[token("add")]
    Add,
    /// `if`
    #[token("if")]
    If,
    /// `then`
    #[token("then")]
    Then,
    /// `else`
    #[token("else")]
    Else,
    /// `let`
    #[token("let")]
    Let,
    /// `in`
    #[token("in")]
    In,
    /// `function`
    #[token("function")]
    Function,
    /// `call`
    #[token("call")]
    Call,
    /// `set`
    #[token("set")]
    Set,
    /// `block`
    #[token("block")]
    Block,
    /// Identifier tokens; variable or parameter names such as `x` or `sum`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `(`
    #[token("(")]
    OpenBracket,
    /// `)`
    #[token(")")]
    CloseBracket,
    /// `=`
    #[token("=")]
    Assign,

    /// Newlines advance the position bookkeeping and are skipped.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset where that line
/// starts, so token positions can report both a row and a column.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Tokenizes an entire source text.
///
/// Runs the lexer to completion, pairing every token with the position
/// where its text started. Lexing stops at the first slice no token rule
/// accepts; there is no recovery.
///
/// # Errors
/// - `ParseError::LiteralTooLarge` when an integer literal is rejected by
///   its callback.
/// - `ParseError::UnexpectedCharacter` for any other rejected slice.
///
/// # Example
/// ```
/// use valet::{interpreter::lexer::{tokenize, Token},
///             position::Position};
///
/// let tokens = tokenize("(val 5)").unwrap();
///
/// assert_eq!(tokens[0], (Token::OpenBracket, Position::new(1, 1)));
/// assert_eq!(tokens[1], (Token::Val, Position::new(1, 2)));
/// assert_eq!(tokens[2], (Token::Integer(5), Position::new(1, 6)));
/// assert_eq!(tokens[3], (Token::CloseBracket, Position::new(1, 7)));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, Position)>, ParseError> {
    let mut lexer = Token::lexer_with_extras(source,
                                             LexerExtras { line:       1,
                                                           line_start: 0, });
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        let position = Position::new(lexer.extras.line, span.start - lexer.extras.line_start + 1);

        if let Ok(token) = token {
            tokens.push((token, position));
        } else {
            let found = lexer.slice().to_string();
            let is_integer = found.contains(|c: char| c.is_ascii_digit())
                             && found.chars().all(|c| c.is_ascii_digit() || c == '-');

            return Err(if is_integer {
                           ParseError::LiteralTooLarge { literal: found, position }
                       } else {
                           ParseError::UnexpectedCharacter { found, position }
                       });
        }
    }

    Ok(tokens)
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "Value({value})"),
            Self::Identifier(name) => write!(f, "Identifier({name})"),
            Self::Val => write!(f, "Keyword(val)"),
            Self::Var => write!(f, "Keyword(var)"),
            Self::Add => write!(f, "Keyword(add)"),
            Self::If => write!(f, "Keyword(if)"),
            Self::Then => write!(f, "Keyword(then)"),
            Self::Else => write!(f, "Keyword(else)"),
            Self::Let => write!(f, "Keyword(let)"),
            Self::In => write!(f, "Keyword(in)"),
            Self::Function => write!(f, "Keyword(function)"),
            Self::Call => write!(f, "Keyword(call)"),
            Self::Set => write!(f, "Keyword(set)"),
            Self::Block => write!(f, "Keyword(block)"),
            Self::OpenBracket => write!(f, "'('"),
            Self::CloseBracket => write!(f, "')'"),
            Self::Assign => write!(f, "'='"),
            Self::NewLine | Self::Ignored => Ok(()),
        }
    }
}
