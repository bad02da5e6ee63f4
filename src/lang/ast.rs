use super::token::Operator;
use super::{is_valid_identifier, Error, LineNumber};
use crate::error;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Statements
///
/// One statement per program line. The line number lives in the
/// [`Program`](crate::mach::Program) store, not in the node.
///
/// The `count` fields are execution counters for the syntax tree display.
/// They never influence evaluation.
#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Rem {
        text: String,
    },
    Let {
        var: Rc<str>,
        expr: Expression,
        count: u32,
    },
    Print {
        expr: Expression,
        count: u32,
    },
    Input {
        var: Rc<str>,
        count: u32,
    },
    Goto {
        target: LineNumber,
        count: u32,
    },
    If {
        lhs: Expression,
        op: Operator,
        rhs: Expression,
        target: LineNumber,
        taken: u32,
        not_taken: u32,
    },
    End {
        count: u32,
    },
}

/// ## Expressions
#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Constant(i32),
    Var(Rc<str>),
    Compound(Operator, Box<Expression>, Box<Expression>),
}

fn valid_ident(name: &str) -> Result<Rc<str>> {
    if is_valid_identifier(name) {
        Ok(name.into())
    } else {
        Err(error!(InvalidIdentifier; name))
    }
}

impl Expression {
    pub fn constant(value: i32) -> Expression {
        Expression::Constant(value)
    }

    pub fn var(name: &str) -> Result<Expression> {
        Ok(Expression::Var(valid_ident(name)?))
    }

    pub fn compound(op: Operator, lhs: Expression, rhs: Expression) -> Expression {
        Expression::Compound(op, Box::new(lhs), Box::new(rhs))
    }

    /// Indented structural dump, two spaces per level. No trailing newline.
    pub fn syntax_tree(&self, indent: usize) -> String {
        let pad = indentation(indent);
        match self {
            Expression::Constant(value) => format!("{}{}", pad, value),
            Expression::Var(name) => format!("{}{}", pad, name),
            Expression::Compound(op, lhs, rhs) => format!(
                "{}{}\n{}\n{}",
                pad,
                op,
                lhs.syntax_tree(indent + 1),
                rhs.syntax_tree(indent + 1)
            ),
        }
    }
}

pub(crate) fn indentation(indent: usize) -> String {
    " ".repeat(indent * 2)
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Expression::Constant(value) => write!(f, "{}", value),
            Expression::Var(name) => write!(f, "{}", name),
            Expression::Compound(op, lhs, rhs) => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}

impl Statement {
    pub fn rem(text: &str) -> Statement {
        Statement::Rem {
            text: text.to_string(),
        }
    }

    pub fn r#let(var: &str, expr: Expression) -> Result<Statement> {
        Ok(Statement::Let {
            var: valid_ident(var)?,
            expr,
            count: 0,
        })
    }

    pub fn print(expr: Expression) -> Statement {
        Statement::Print { expr, count: 0 }
    }

    pub fn input(var: &str) -> Result<Statement> {
        Ok(Statement::Input {
            var: valid_ident(var)?,
            count: 0,
        })
    }

    pub fn goto(target: LineNumber) -> Statement {
        Statement::Goto { target, count: 0 }
    }

    pub fn r#if(lhs: Expression, op: Operator, rhs: Expression, target: LineNumber) -> Statement {
        Statement::If {
            lhs,
            op,
            rhs,
            target,
            taken: 0,
            not_taken: 0,
        }
    }

    pub fn end() -> Statement {
        Statement::End { count: 0 }
    }

    /// Executions so far. For `IF` this is both outcomes together.
    pub fn count(&self) -> u32 {
        use Statement::*;
        match self {
            Rem { .. } => 0,
            Let { count, .. } | Print { count, .. } | Input { count, .. } => *count,
            Goto { count, .. } | End { count } => *count,
            If {
                taken, not_taken, ..
            } => taken + not_taken,
        }
    }

    pub fn reset_counters(&mut self) {
        use Statement::*;
        match self {
            Rem { .. } => {}
            Let { count, .. } | Print { count, .. } | Input { count, .. } => *count = 0,
            Goto { count, .. } | End { count } => *count = 0,
            If {
                taken, not_taken, ..
            } => {
                *taken = 0;
                *not_taken = 0;
            }
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Statement::*;
        match self {
            Rem { text } if text.is_empty() => write!(f, "REM"),
            Rem { text } => write!(f, "REM {}", text),
            Let { var, expr, .. } => write!(f, "LET {} = {}", var, expr),
            Print { expr, .. } => write!(f, "PRINT {}", expr),
            Input { var, .. } => write!(f, "INPUT {}", var),
            Goto { target, .. } => write!(f, "GOTO {}", target),
            If {
                lhs,
                op,
                rhs,
                target,
                ..
            } => write!(f, "IF {} {} {} THEN {}", lhs, op, rhs, target),
            End { .. } => write!(f, "END"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Expression {
        Expression::compound(
            Operator::Plus,
            Expression::constant(1),
            Expression::compound(
                Operator::Multiply,
                Expression::var("X").unwrap(),
                Expression::constant(3),
            ),
        )
    }

    #[test]
    fn test_infix() {
        assert_eq!(sample().to_string(), "(1 + (X * 3))");
    }

    #[test]
    fn test_syntax_tree() {
        assert_eq!(sample().syntax_tree(1), "  +\n    1\n    *\n      X\n      3");
    }

    #[test]
    fn test_invalid_identifiers_rejected() {
        assert!(Expression::var("9lives").is_err());
        assert!(Statement::r#let("PRINT", Expression::constant(1)).is_err());
        let e = Statement::input("a b").unwrap_err();
        assert_eq!(e.code(), crate::lang::ErrorCode::InvalidIdentifier);
    }

    #[test]
    fn test_statement_text() {
        let s = Statement::r#if(
            Expression::var("X").unwrap(),
            Operator::Less,
            Expression::constant(3),
            20,
        );
        assert_eq!(s.to_string(), "IF X < 3 THEN 20");
        assert_eq!(Statement::rem("").to_string(), "REM");
        assert_eq!(Statement::goto(10).to_string(), "GOTO 10");
    }
}
