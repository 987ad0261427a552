/*!
## Rust Machine Module

This Rust module is the G# interpreter. It evaluates expressions,
keeps the parameter memory, resolves o-word blocks when a program
is loaded and steps through the program one output line at a time.

*/

mod block;
mod expr;
mod function;
mod listing;
mod message;
mod operation;
mod param;
mod resolve;
mod runtime;
mod stack;
mod val;

pub use block::{BlockKind, Blocks, CodeBlock, Jump};
pub use function::Function;
pub use listing::{Listing, Region};
pub use message::Messages;
pub use operation::Operation;
pub use runtime::{Options, Runtime};
pub use stack::Stack;
pub use val::format_value;

#[cfg(test)]
mod tests;

/// Highest parameter a program or caller may use.
pub const MAX_PARAMETER: usize = 5602;
/// `#1` to `#30` belong to the current call frame.
pub const LOCAL_PARAMETERS: usize = 30;
/// Intermediate results of one line live above [`MAX_PARAMETER`].
pub const SCRATCH_PARAMETERS: usize = 50;
pub const MAX_STACK_DEPTH: usize = 1000;
/// Receives the value of `return` and `endsub`.
pub const RETURN_VALUE_PARAMETER: usize = 5000;
pub const TOLERANCE_EQUAL: f64 = 0.0001;
/// Decimal places used for parameters in print, debug and log text.
pub const MESSAGE_PRECISION: usize = 4;

const FIRST_SCRATCH_PARAMETER: usize = MAX_PARAMETER + 1;
const LAST_SCRATCH_PARAMETER: usize = MAX_PARAMETER + SCRATCH_PARAMETERS;
