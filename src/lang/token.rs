use super::{Error, LineNumber};
use crate::error;
use std::convert::TryFrom;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    Identifier,
    Keyword,
    Operator,
    EndOfLine,
    Invalid,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Number(String),
    Ident(String),
    Word(Word),
    Operator(Operator),
    EndOfLine,
    Invalid(String),
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Number(_) => TokenKind::Number,
            Token::Ident(_) => TokenKind::Identifier,
            Token::Word(_) => TokenKind::Keyword,
            Token::Operator(_) => TokenKind::Operator,
            Token::EndOfLine => TokenKind::EndOfLine,
            Token::Invalid(_) => TokenKind::Invalid,
        }
    }

    pub fn is_end_of_line(&self) -> bool {
        matches!(self, Token::EndOfLine)
    }

    /// The raw text of the token. Keywords and `MOD` come back uppercased,
    /// identifiers keep the case they were written in.
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Number(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            EndOfLine => Ok(()),
            Invalid(s) => write!(f, "{}", s),
        }
    }
}

impl TryFrom<&Token> for LineNumber {
    type Error = Error;
    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        if let Token::Number(s) = token {
            return s
                .parse::<LineNumber>()
                .map_err(|_| error!(Overflow; &format!("INVALID LINE NUMBER {}", s)));
        }
        Err(error!(SyntaxError; "EXPECTED LINE NUMBER"))
    }
}

impl TryFrom<&Token> for i32 {
    type Error = Error;
    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        if let Token::Number(s) = token {
            return s
                .parse::<i32>()
                .map_err(|_| error!(Overflow; &format!("NUMBER TOO LARGE {}", s)));
        }
        Err(error!(SyntaxError; "EXPECTED NUMBER"))
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    End,
    Goto,
    If,
    Input,
    Let,
    Print,
    Rem,
    Then,
}

impl FromStr for Word {
    type Err = ();

    /// Matches only the uppercase spelling; the lexer uppercases first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Word::*;
        Ok(match s {
            "END" => End,
            "GOTO" => Goto,
            "IF" => If,
            "INPUT" => Input,
            "LET" => Let,
            "PRINT" => Print,
            "REM" => Rem,
            "THEN" => Then,
            _ => return Err(()),
        })
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            End => write!(f, "END"),
            Goto => write!(f, "GOTO"),
            If => write!(f, "IF"),
            Input => write!(f, "INPUT"),
            Let => write!(f, "LET"),
            Print => write!(f, "PRINT"),
            Rem => write!(f, "REM"),
            Then => write!(f, "THEN"),
        }
    }
}

/// Operator tokens are an open set: any character the lexer can't otherwise
/// classify becomes an operator. The ones the language gives meaning to
/// have their own variant.
#[derive(Debug, PartialEq, Clone)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulus,
    Power,
    Equal,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    NotEqual,
    LParen,
    RParen,
    Other(String),
}

impl Operator {
    pub fn from_text(s: &str) -> Operator {
        use Operator::*;
        match s {
            "+" => Plus,
            "-" => Minus,
            "*" => Multiply,
            "/" => Divide,
            "MOD" => Modulus,
            "**" => Power,
            "=" => Equal,
            "<" => Less,
            ">" => Greater,
            "<=" => LessEqual,
            ">=" => GreaterEqual,
            "<>" => NotEqual,
            "(" => LParen,
            ")" => RParen,
            _ => Other(s.to_string()),
        }
    }

    /// Operators spelled with letters. Expects uppercase.
    pub fn from_word(s: &str) -> Option<Operator> {
        match s {
            "MOD" => Some(Operator::Modulus),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Modulus => write!(f, "MOD"),
            Power => write!(f, "**"),
            Equal => write!(f, "="),
            Less => write!(f, "<"),
            Greater => write!(f, ">"),
            LessEqual => write!(f, "<="),
            GreaterEqual => write!(f, ">="),
            NotEqual => write!(f, "<>"),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Other(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        assert_eq!(Word::from_str("REM"), Ok(Word::Rem));
        assert_eq!(Word::from_str("rem"), Err(()));
        assert_eq!(Word::from_str("PICKLES"), Err(()));
    }

    #[test]
    fn test_operator_text() {
        for s in &["+", "-", "*", "/", "MOD", "**", "=", "<", ">", "<=", ">=", "<>", "=="] {
            assert_eq!(Operator::from_text(s).to_string(), *s);
        }
        assert_eq!(Operator::from_text("=>"), Operator::Other("=>".to_string()));
    }

    #[test]
    fn test_line_number() {
        let t = Token::Number("100".to_string());
        assert_eq!(LineNumber::try_from(&t), Ok(100));
        let t = Token::Number("99999999999".to_string());
        assert_eq!(LineNumber::try_from(&t).map_err(|e| e.code()), Err(crate::lang::ErrorCode::Overflow));
        let t = Token::Ident("X".to_string());
        assert!(LineNumber::try_from(&t).is_err());
    }
}
