use super::{Program, RuntimeStats};
use crate::lang::ast::{indentation, Statement};

impl Statement {
    /// Indented structural dump with the execution counters. `LET` also
    /// shows how often its variable has been read.
    pub fn syntax_tree(&self, stats: &RuntimeStats, indent: usize) -> String {
        use Statement::*;
        let pad = indentation(indent);
        let pad1 = indentation(indent + 1);
        match self {
            Rem { text } if text.is_empty() => format!("{}REM\n", pad),
            Rem { text } => format!("{}REM {}\n", pad, text),
            Let { var, expr, count } => format!(
                "{}LET = {}\n{}{} {}\n{}\n",
                pad,
                count,
                pad1,
                var,
                stats.uses(var),
                expr.syntax_tree(indent + 1)
            ),
            Print { expr, count } => format!(
                "{}PRINT {}\n{}\n",
                pad,
                count,
                expr.syntax_tree(indent + 1)
            ),
            Input { var, count } => format!("{}INPUT {}\n{}{}\n", pad, count, pad1, var),
            Goto { target, count } => format!("{}GOTO {}\n{}{}\n", pad, count, pad1, target),
            If {
                lhs,
                op,
                rhs,
                target,
                taken,
                not_taken,
            } => format!(
                "{}IF THEN {} {}\n{}\n{}{}\n{}\n{}{}\n",
                pad,
                not_taken,
                taken,
                lhs.syntax_tree(indent + 1),
                pad1,
                op,
                rhs.syntax_tree(indent + 1),
                pad1,
                target
            ),
            End { count } => format!("{}END {}\n", pad, count),
        }
    }
}

/// Walks lines in ascending order, not execution order. Gaps are skipped.
pub fn syntax_tree(program: &Program, stats: &RuntimeStats) -> String {
    let mut s = String::new();
    for (line_number, statement) in program.statements() {
        s.push_str(&format!("{}\n", line_number));
        s.push_str(&statement.syntax_tree(stats, 0));
        s.push('\n');
    }
    s
}
