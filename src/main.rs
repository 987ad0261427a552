//! # G#
//!
//! Converts a G# program into plain G-code.
//!

mod term;

fn main() {
    term::main();
}
