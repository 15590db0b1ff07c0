/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context, the dispatch
/// over expression variants, and error propagation.
pub mod core;

/// Lexical frames and their shared handles.
///
/// Defines the scope model: frames of bindings linked to their parents,
/// shared between the evaluator and any closures that captured them.
pub mod scope;

/// Utility functions for evaluation.
///
/// Provides the frame stack operations, chain lookup and assignment, and
/// value extraction shared by the evaluation logic.
pub mod utils;
