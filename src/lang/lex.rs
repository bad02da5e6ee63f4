use super::ident::{is_identifier_char, is_identifier_start};
use super::token::*;
use super::Column;
use log::trace;
use std::str::FromStr;

pub fn lex(s: &str) -> Vec<Token> {
    Lexer::new(s).collect()
}

fn is_basic_whitespace(c: char) -> bool {
    c.is_whitespace()
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Tokenizes a single line on demand. The cursor only moves forward except
/// through [`Lexer::reset`] and the save/restore done by [`Lexer::peek_token`].
#[derive(Debug, Clone)]
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    col: Column,
}

impl Lexer {
    pub fn new(s: &str) -> Lexer {
        Lexer {
            chars: s.chars().collect(),
            pos: 0,
            col: 0..0,
        }
    }

    /// Columns of the most recently consumed token.
    pub fn column(&self) -> Column {
        self.col.clone()
    }

    pub fn reset(&mut self) {
        self.pos = 0;
        self.col = 0..0;
    }

    pub fn has_more_tokens(&mut self) -> bool {
        self.skip_whitespace();
        self.pos < self.chars.len()
    }

    pub fn peek_token(&mut self) -> Token {
        let pos = self.pos;
        let col = self.col.clone();
        let token = self.next_token();
        self.pos = pos;
        self.col = col;
        token
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let start = self.pos;
        let token = match self.current() {
            None => Token::EndOfLine,
            Some(c) if is_basic_digit(c) => self.number(),
            Some(c) if is_identifier_start(c) => self.alphabetic(),
            Some(c) if !c.is_ascii() || c.is_ascii_control() => {
                self.pos += 1;
                Token::Invalid(c.to_string())
            }
            Some(_) => self.operator(),
        };
        self.col = start..self.pos;
        trace!("token {:?} at {:?}", token, self.col);
        token
    }

    /// Consumes everything left on the line without tokenizing it.
    pub fn rest(&mut self) -> String {
        let start = self.pos;
        self.pos = self.chars.len();
        self.col = start..self.pos;
        self.chars[start..].iter().collect::<String>().trim().to_string()
    }

    fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current() {
            if !is_basic_whitespace(c) {
                break;
            }
            self.pos += 1;
        }
    }

    fn take_while<F: Fn(char) -> bool>(&mut self, pred: F) -> String {
        let mut s = String::new();
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            s.push(c);
            self.pos += 1;
        }
        s
    }

    fn number(&mut self) -> Token {
        Token::Number(self.take_while(is_basic_digit))
    }

    fn alphabetic(&mut self) -> Token {
        let s = self.take_while(is_identifier_char);
        let upper = s.to_ascii_uppercase();
        if let Ok(word) = Word::from_str(&upper) {
            return Token::Word(word);
        }
        if let Some(op) = Operator::from_word(&upper) {
            return Token::Operator(op);
        }
        Token::Ident(s)
    }

    fn operator(&mut self) -> Token {
        let mut s = String::new();
        let ch = match self.current() {
            Some(ch) => ch,
            None => return Token::EndOfLine,
        };
        self.pos += 1;
        s.push(ch);
        if let Some(pk) = self.current() {
            let pair = match (ch, pk) {
                ('*', '*') => true,
                ('<', '=') | ('<', '>') => true,
                ('>', '=') | ('>', '>') => true,
                ('=', '=') | ('=', '>') => true,
                _ => false,
            };
            if pair {
                self.pos += 1;
                s.push(pk);
            }
        }
        Token::Operator(Operator::from_text(&s))
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Token::EndOfLine => None,
            t => Some(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_does_not_consume() {
        let mut lx = Lexer::new("PRINT x");
        assert_eq!(lx.peek_token(), Token::Word(Word::Print));
        assert_eq!(lx.peek_token(), Token::Word(Word::Print));
        assert_eq!(lx.next_token(), Token::Word(Word::Print));
        assert_eq!(lx.column(), 0..5);
        assert_eq!(lx.next_token(), Token::Ident("x".to_string()));
        assert_eq!(lx.column(), 6..7);
        assert_eq!(lx.next_token(), Token::EndOfLine);
        assert_eq!(lx.next_token(), Token::EndOfLine);
    }

    #[test]
    fn test_reset() {
        let mut lx = Lexer::new("x = 1");
        assert_eq!(lx.next_token(), Token::Ident("x".to_string()));
        lx.reset();
        assert_eq!(lx.next_token(), Token::Ident("x".to_string()));
    }

    #[test]
    fn test_has_more_tokens() {
        let mut lx = Lexer::new("  1   ");
        assert!(lx.has_more_tokens());
        lx.next_token();
        assert!(!lx.has_more_tokens());
        assert!(!Lexer::new(" \t ").has_more_tokens());
    }

    #[test]
    fn test_rest() {
        let mut lx = Lexer::new("REM  hello,  world ");
        lx.next_token();
        assert_eq!(lx.rest(), "hello,  world");
        assert!(!lx.has_more_tokens());
    }
}
