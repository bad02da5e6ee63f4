/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the BASIC language.

*/

pub type LineNumber = u32;
pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod ident;
mod lex;
mod parse;

pub mod ast;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use ident::is_valid_identifier;
pub use lex::lex;
pub use lex::Lexer;
pub use parse::parse_line;
pub use parse::Parser;
