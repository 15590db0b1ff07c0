/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, reduces expressions against a chain of
/// lexical frames, manages variable state, and produces a fully reduced
/// result expression. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Manages the frame stack, closure capture, and binding mutation.
/// - Reports runtime errors such as undefined variables or calls of
///   non-functions.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// brackets, keywords, identifiers, and integer literals. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Distinguishes keywords from identifiers and parses integer literals.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of the
/// program's bracketed forms. This enables the evaluator to execute user
/// code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes, one per form.
/// - Validates correct grammar and syntax, reporting errors with location
///   info.
/// - Rejects empty blocks before they ever reach evaluation.
pub mod parser;
