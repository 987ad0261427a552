//! # G#
//!
//! A macro language for CNC programs, translated into plain G-code
//! one line at a time.
//!
//! G# is a subset of the LinuxCNC o-code dialect of RS274/NGC: numbered
//! parameters, bracketed expressions, subroutines, conditions and loops.
//! Named parameters and subroutines in other files are not supported.
//!
//! Install with `cargo install gsharp-lang`, then convert a program.
//! ```text
//! gsharp program.ngc output.ngc
//! ```
//!
//! To embed the interpreter, load a program into a
//! [`Runtime`](mach::Runtime) and step it until it finishes.
//! ```
//! let mut runtime = gsharp::mach::Runtime::default();
//! runtime.load("x[1+2]\nm2").unwrap();
//! while let Some(line) = runtime.step().unwrap() {
//!     println!("{}", line);
//! }
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
