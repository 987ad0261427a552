/*!
# Rust Language Module

This Rust module provides the lexical layer of G#: comment handling,
line normalization, o-word reading and operator simplification.
Nothing in here evaluates an expression.

*/

#[macro_use]
mod error;
mod line;
mod operator;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use error::ErrorKind;
pub use line::{read_o_word, Directive, Line, OWord};
pub use operator::simplify_operators;
pub use token::{Category, Command};

/// All valid line numbers start from 1. Line 0 is never executed.
pub type LineNumber = usize;

/// Block numbers following the `O` letter of an o-word.
pub type BlockNumber = u32;
