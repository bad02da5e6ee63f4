use super::Interpreter;
use crate::lang::{ast::Statement, token::Operator, Error, LineNumber};
use log::warn;

type Result<T> = std::result::Result<T, Error>;

/// What a statement asks of the line sequencer once it has executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Fall through to the next declared line.
    Next,
    Jump(LineNumber),
    End,
}

impl Statement {
    pub fn execute(&mut self, interp: &mut Interpreter<'_>) -> Result<Flow> {
        use Statement::*;
        match self {
            Rem { .. } => Ok(Flow::Next),
            Let { var, expr, count } => {
                let value = expr.eval(&mut interp.var)?;
                interp.var.store(var, value);
                *count += 1;
                Ok(Flow::Next)
            }
            Print { expr, count } => {
                let value = expr.eval(&mut interp.var)?;
                interp.print(&value.to_string());
                *count += 1;
                Ok(Flow::Next)
            }
            Input { var, count } => {
                *count += 1;
                loop {
                    let line = interp.read_line()?;
                    match line.trim().parse::<i32>() {
                        Ok(value) => {
                            interp.var.store(var, value);
                            return Ok(Flow::Next);
                        }
                        Err(_) => {
                            warn!("rejected input {:?} for {}", line, var);
                            interp.print("INVALID NUMBER");
                        }
                    }
                }
            }
            Goto { target, count } => {
                *count += 1;
                Ok(Flow::Jump(*target))
            }
            If {
                lhs,
                op,
                rhs,
                target,
                taken,
                not_taken,
            } => {
                let lhs = lhs.eval(&mut interp.var)?;
                let rhs = rhs.eval(&mut interp.var)?;
                if compare(op, lhs, rhs) {
                    *taken += 1;
                    Ok(Flow::Jump(*target))
                } else {
                    *not_taken += 1;
                    Ok(Flow::Next)
                }
            }
            End { count } => {
                *count += 1;
                Ok(Flow::End)
            }
        }
    }
}

/// Only `=`, `<` and `>` can be true. Any other operator the parser let
/// through compares false.
fn compare(op: &Operator, lhs: i32, rhs: i32) -> bool {
    match op {
        Operator::Equal => lhs == rhs,
        Operator::Less => lhs < rhs,
        Operator::Greater => lhs > rhs,
        _ => false,
    }
}
