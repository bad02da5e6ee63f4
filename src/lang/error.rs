use super::{Column, LineNumber};

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: Option<LineNumber>,
    column: Column,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            column: 0..0,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    pub fn text(&self) -> &str {
        &self.message
    }

    pub fn is_parse_error(&self) -> bool {
        use ErrorCode::*;
        matches!(
            self.code,
            SyntaxError | Overflow | InvalidIdentifier | UnknownKeyword | MissingParenthesis
        )
    }

    /// Errors keep the first line number they are given. Runtime errors
    /// pass through the interpreter once per statement.
    pub fn in_line_number(self, line: LineNumber) -> Error {
        if self.line_number.is_some() {
            return self;
        }
        Error {
            line_number: Some(line),
            ..self
        }
    }

    pub fn in_column(self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        Error {
            column: column.clone(),
            ..self
        }
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            message: message.to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError = 2,
    Overflow = 6,
    UndefinedLine = 8,
    DivisionByZero = 11,
    InvalidIdentifier = 24,
    UnknownKeyword = 25,
    MissingParenthesis = 26,
    UndefinedVariable = 27,
    UnknownOperator = 28,
    NoInputProvider = 31,
    InternalError = 51,
    FileNotFound = 53,
    InputFailed = 62,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        use ErrorCode::*;
        match self {
            SyntaxError => "SYNTAX ERROR",
            Overflow => "OVERFLOW",
            UndefinedLine => "UNDEFINED LINE",
            DivisionByZero => "DIVISION BY ZERO",
            InvalidIdentifier => "INVALID IDENTIFIER",
            UnknownKeyword => "UNKNOWN KEYWORD",
            MissingParenthesis => "MISSING PARENTHESIS",
            UndefinedVariable => "UNDEFINED VARIABLE",
            UnknownOperator => "UNKNOWN OPERATOR",
            NoInputProvider => "NO INPUT PROVIDER",
            InternalError => "INTERNAL ERROR",
            FileNotFound => "FILE NOT FOUND",
            InputFailed => "INPUT FAILED",
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" {}", line_number));
        }
        if (0..0) != self.column {
            suffix.push_str(&format!(" ({}..{})", self.column.start, self.column.end));
        }
        let code_str = self.code.as_str();
        if suffix.is_empty() {
            write!(f, "{}", code_str)?;
        } else {
            write!(f, "{} IN{}", code_str, suffix)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

impl From<Error> for std::io::Error {
    fn from(error: Error) -> Self {
        std::io::Error::new(std::io::ErrorKind::Other, error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(error!(SyntaxError).to_string(), "SYNTAX ERROR");
        assert_eq!(
            error!(UndefinedLine, 30; "GOTO 100").to_string(),
            "UNDEFINED LINE IN 30; GOTO 100"
        );
        assert_eq!(
            error!(MissingParenthesis, ..&(4..5); "MISSING ')'").to_string(),
            "MISSING PARENTHESIS IN (4..5); MISSING ')'"
        );
    }

    #[test]
    fn test_first_line_number_sticks() {
        let e = error!(DivisionByZero, 20).in_line_number(40);
        assert_eq!(e.line_number(), Some(20));
        assert_eq!(e.code(), ErrorCode::DivisionByZero);
    }
}
