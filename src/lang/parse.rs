use super::{ast::*, lex::Lexer, token::*, Column, Error, LineNumber};
use crate::error;
use log::trace;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// Parses one program line. Blank lines parse to `None`.
pub fn parse_line(line_number: LineNumber, text: &str) -> Result<Option<Statement>> {
    match Parser::new(text).parse() {
        Err(e) => Err(e.in_line_number(line_number)),
        Ok(r) => Ok(r),
    }
}

pub struct Parser {
    lexer: Lexer,
}

impl Parser {
    pub fn new(text: &str) -> Parser {
        Parser {
            lexer: Lexer::new(text),
        }
    }

    pub fn parse(&mut self) -> Result<Option<Statement>> {
        if !self.lexer.has_more_tokens() {
            return Ok(None);
        }
        let statement = match self.next() {
            Token::Word(word) => self.for_word(word)?,
            _ => {
                self.lexer.reset();
                self.r#let()?
            }
        };
        trace!("parsed {:?}", statement);
        Ok(Some(statement))
    }

    fn for_word(&mut self, word: Word) -> Result<Statement> {
        use Word::*;
        match word {
            Rem => Ok(self.rem()),
            Let => self.r#let(),
            Print => self.print(),
            Input => self.input(),
            Goto => self.goto(),
            If => self.r#if(),
            End => Ok(Statement::end()),
            Then => Err(error!(UnknownKeyword, ..&self.column(); &word.to_string())),
        }
    }

    fn column(&self) -> Column {
        self.lexer.column()
    }

    fn next(&mut self) -> Token {
        self.lexer.next_token()
    }

    fn peek(&mut self) -> Token {
        self.lexer.peek_token()
    }

    fn rem(&mut self) -> Statement {
        Statement::rem(&self.lexer.rest())
    }

    fn r#let(&mut self) -> Result<Statement> {
        let var = self.ident("EXPECTED IDENTIFIER IN LET")?;
        let column = self.column();
        self.expect(Operator::Equal, "EXPECTED '=' IN LET")?;
        let expr = self.expression()?;
        self.expect_end()?;
        Statement::r#let(&var, expr).map_err(|e| e.in_column(&column))
    }

    fn print(&mut self) -> Result<Statement> {
        let expr = self.expression()?;
        self.expect_end()?;
        Ok(Statement::print(expr))
    }

    fn input(&mut self) -> Result<Statement> {
        let var = self.ident("EXPECTED IDENTIFIER IN INPUT")?;
        let column = self.column();
        self.expect_end()?;
        Statement::input(&var).map_err(|e| e.in_column(&column))
    }

    fn goto(&mut self) -> Result<Statement> {
        let target = self.line_number("EXPECTED LINE NUMBER IN GOTO")?;
        self.expect_end()?;
        Ok(Statement::goto(target))
    }

    fn r#if(&mut self) -> Result<Statement> {
        let lhs = self.expression()?;
        let op = match self.next() {
            Token::Operator(op) => op,
            _ => {
                return Err(error!(SyntaxError, ..&self.column(); "EXPECTED OPERATOR IN IF"));
            }
        };
        let rhs = self.expression()?;
        match self.next() {
            Token::Word(Word::Then) => {}
            _ => return Err(error!(SyntaxError, ..&self.column(); "EXPECTED THEN IN IF")),
        }
        let target = self.line_number("EXPECTED LINE NUMBER AFTER THEN")?;
        self.expect_end()?;
        Ok(Statement::r#if(lhs, op, rhs, target))
    }

    /// `expression := term (('+'|'-') term)*`
    fn expression(&mut self) -> Result<Expression> {
        let mut lhs = self.term()?;
        loop {
            match self.peek() {
                Token::Operator(op @ Operator::Plus) | Token::Operator(op @ Operator::Minus) => {
                    self.next();
                    let rhs = self.term()?;
                    lhs = Expression::compound(op, lhs, rhs);
                }
                _ => return Ok(lhs),
            }
        }
    }

    /// `term := power (('*'|'/'|'MOD') factor)*`
    ///
    /// The right operand is a factor, not a power, so `2*3**2` needs
    /// parentheses to square the 3.
    fn term(&mut self) -> Result<Expression> {
        let mut lhs = self.power()?;
        loop {
            match self.peek() {
                Token::Operator(op @ Operator::Multiply)
                | Token::Operator(op @ Operator::Divide)
                | Token::Operator(op @ Operator::Modulus) => {
                    self.next();
                    let rhs = self.factor()?;
                    lhs = Expression::compound(op, lhs, rhs);
                }
                _ => return Ok(lhs),
            }
        }
    }

    /// `power := factor ('**' power)?`, right associative.
    fn power(&mut self) -> Result<Expression> {
        let base = self.factor()?;
        if let Token::Operator(Operator::Power) = self.peek() {
            self.next();
            let exponent = self.power()?;
            return Ok(Expression::compound(Operator::Power, base, exponent));
        }
        Ok(base)
    }

    /// `factor := NUMBER | IDENTIFIER | '(' expression ')'`
    fn factor(&mut self) -> Result<Expression> {
        let token = self.next();
        let column = self.column();
        match &token {
            Token::Number(_) => {
                let value = i32::try_from(&token).map_err(|e| e.in_column(&column))?;
                Ok(Expression::constant(value))
            }
            Token::Ident(name) => Expression::var(name).map_err(|e| e.in_column(&column)),
            Token::Operator(Operator::LParen) => {
                let expr = self.expression()?;
                match self.next() {
                    Token::Operator(Operator::RParen) => Ok(expr),
                    _ => Err(error!(MissingParenthesis, ..&column; "MISSING ')'")),
                }
            }
            Token::EndOfLine => Err(error!(SyntaxError, ..&column; "EXPECTED EXPRESSION")),
            _ => Err(error!(SyntaxError, ..&column; &format!("INVALID FACTOR {}", token))),
        }
    }

    fn ident(&mut self, msg: &str) -> Result<String> {
        match self.next() {
            Token::Ident(name) => Ok(name),
            _ => Err(error!(SyntaxError, ..&self.column(); msg)),
        }
    }

    fn line_number(&mut self, msg: &str) -> Result<LineNumber> {
        let token = self.next();
        match token {
            Token::Number(_) => {
                let column = self.column();
                LineNumber::try_from(&token).map_err(|e| e.in_column(&column))
            }
            _ => Err(error!(SyntaxError, ..&self.column(); msg)),
        }
    }

    fn expect(&mut self, op: Operator, msg: &str) -> Result<()> {
        match self.next() {
            Token::Operator(ref t) if *t == op => Ok(()),
            _ => Err(error!(SyntaxError, ..&self.column(); msg)),
        }
    }

    fn expect_end(&mut self) -> Result<()> {
        match self.next() {
            Token::EndOfLine => Ok(()),
            token => Err(error!(SyntaxError, ..&self.column(); &format!("UNEXPECTED {}", token))),
        }
    }
}
