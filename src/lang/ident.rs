// Used by the lexer, the parser and the AST constructors.

use super::token::{Operator, Word};
use std::str::FromStr;

pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// A variable name starts with a letter or underbar, continues with letters,
/// digits or underbars, and is not a reserved word.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if is_identifier_start(c) => {}
        _ => return false,
    }
    if !chars.all(is_identifier_char) {
        return false;
    }
    let upper = name.to_ascii_uppercase();
    Word::from_str(&upper).is_err() && Operator::from_word(&upper).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid() {
        assert!(is_valid_identifier("X"));
        assert!(is_valid_identifier("total_2"));
        assert!(is_valid_identifier("_tmp"));
        assert!(is_valid_identifier("Letter"));
    }

    #[test]
    fn test_invalid() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("2X"));
        assert!(!is_valid_identifier("A-B"));
        assert!(!is_valid_identifier("let"));
        assert!(!is_valid_identifier("Then"));
        assert!(!is_valid_identifier("mod"));
        assert!(!is_valid_identifier("né"));
    }
}
