//! # Line BASIC
//!
//! A small integer BASIC with numbered lines, in the spirit of the
//! teaching interpreters of the 1970s.
//!
//! Install with `cargo install line-basic` and start it from a terminal.
//! If you get the following, you have achieved success.
//! ```text
//! LINE BASIC
//! READY.
//! █
//! ```
//!
//! The language has seven statements and whole numbers only. Programs
//! run through a tree-walking interpreter that counts how often every
//! statement executes. The counters can be printed after a run as an
//! annotated syntax tree.
//!
//! The library is usable on its own. Load lines into a
//! [`Program`](mach::Program) and hand it to an
//! [`Interpreter`](mach::Interpreter).
//! ```
//! use basic::mach::{Interpreter, Program};
//! let mut program = Program::new();
//! program.load_line(10, "X = 6 * 7").unwrap();
//! program.load_line(20, "PRINT X").unwrap();
//! let mut printed = vec![];
//! Interpreter::new()
//!     .with_output(|s: &str| printed.push(s.to_string()))
//!     .run(&mut program)
//!     .unwrap();
//! assert_eq!(printed, vec!["42"]);
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

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
