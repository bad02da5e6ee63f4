/*!
## Rust Machine Module

This Rust module is the runtime for BASIC: variable memory, the program
store and the interpreter that walks parsed statements.

*/

mod eval;
mod exec;
mod interpreter;
mod io;
mod program;
mod tree;
mod var;

pub use exec::Flow;
pub use interpreter::Interpreter;
pub use io::Input;
pub use io::Output;
pub use io::Script;
pub use program::Program;
pub use var::RuntimeStats;
pub use var::Var;

#[cfg(test)]
mod tests;
