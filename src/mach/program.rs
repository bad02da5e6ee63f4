use crate::error;
use crate::lang::{ast::Statement, parse_line, Error, LineNumber};
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

type Result<T> = std::result::Result<T, Error>;

/// ## Program store
///
/// Source text and parsed statements keyed by line number, plus the
/// cursor that says which line runs next. A line with source but no
/// statement is a gap and falls through when executed.
#[derive(Debug, Default)]
pub struct Program {
    source: BTreeMap<LineNumber, String>,
    statements: BTreeMap<LineNumber, Statement>,
    next_line: Option<LineNumber>,
    ended: bool,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    /// Stores the text of a line. A statement parsed from the old text
    /// no longer applies and is dropped.
    pub fn add_source_line(&mut self, line_number: LineNumber, text: &str) {
        self.source.insert(line_number, text.to_string());
        self.statements.remove(&line_number);
    }

    pub fn remove_source_line(&mut self, line_number: LineNumber) {
        self.source.remove(&line_number);
        self.statements.remove(&line_number);
    }

    /// Replaces any statement already at the line. A line without source
    /// gets the statement's own text as its source.
    pub fn set_parsed_statement(&mut self, line_number: LineNumber, statement: Statement) {
        self.source
            .entry(line_number)
            .or_insert_with(|| statement.to_string());
        self.statements.insert(line_number, statement);
    }

    /// Stores the text and its parsed statement. A line that fails to
    /// parse is still stored, as a gap, and the error is returned.
    pub fn load_line(&mut self, line_number: LineNumber, text: &str) -> Result<()> {
        self.add_source_line(line_number, text);
        if let Some(statement) = parse_line(line_number, text)? {
            self.statements.insert(line_number, statement);
        }
        Ok(())
    }

    pub fn source_line(&self, line_number: LineNumber) -> Option<&str> {
        self.source.get(&line_number).map(String::as_str)
    }

    pub fn parsed_statement(&self, line_number: LineNumber) -> Option<&Statement> {
        self.statements.get(&line_number)
    }

    pub fn parsed_statement_mut(&mut self, line_number: LineNumber) -> Option<&mut Statement> {
        self.statements.get_mut(&line_number)
    }

    pub fn first_line_number(&self) -> Option<LineNumber> {
        self.source.keys().next().copied()
    }

    pub fn next_line_number(&self, line_number: LineNumber) -> Option<LineNumber> {
        self.source
            .range((Excluded(line_number), Unbounded))
            .next()
            .map(|(k, _)| *k)
    }

    /// `None` means stop and is always accepted.
    pub fn set_next_line(&mut self, line_number: Option<LineNumber>) -> Result<()> {
        if let Some(n) = line_number {
            if !self.source.contains_key(&n) {
                return Err(error!(UndefinedLine; &format!("NO LINE {}", n)));
            }
        }
        self.next_line = line_number;
        Ok(())
    }

    pub fn next_line(&self) -> Option<LineNumber> {
        self.next_line
    }

    pub fn set_end(&mut self) {
        self.ended = true;
        self.next_line = None;
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Puts the control fields back to their neutral state so the program
    /// can run again.
    pub fn rewind(&mut self) {
        self.ended = false;
        self.next_line = None;
    }

    pub fn clear(&mut self) {
        self.source.clear();
        self.statements.clear();
        self.rewind();
    }

    pub fn reset_counters(&mut self) {
        for statement in self.statements.values_mut() {
            statement.reset_counters();
        }
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = (LineNumber, &str)> {
        self.source.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn statements(&self) -> impl Iterator<Item = (LineNumber, &Statement)> {
        self.statements.iter().map(|(k, v)| (*k, v))
    }

    /// The source as it would be listed: `<line> <text>` per line.
    pub fn listing(&self) -> String {
        self.lines()
            .map(|(line_number, text)| format!("{} {}\n", line_number, text))
            .collect()
    }
}
