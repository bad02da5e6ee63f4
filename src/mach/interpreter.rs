use super::{tree, Flow, Input, Output, Program, Var};
use crate::error;
use crate::lang::Error;
use log::debug;

type Result<T> = std::result::Result<T, Error>;

/// ## Interpreter
///
/// Owns the variable memory and the optional input/output collaborators.
/// A [`Program`] is borrowed for each `run` or `step`; the interpreter
/// keeps no reference to it in between.
pub struct Interpreter<'a> {
    pub(super) var: Var,
    input: Option<Box<dyn Input + 'a>>,
    output: Option<Box<dyn Output + 'a>>,
}

impl<'a> Default for Interpreter<'a> {
    fn default() -> Self {
        Interpreter::new()
    }
}

impl<'a> Interpreter<'a> {
    pub fn new() -> Interpreter<'a> {
        Interpreter {
            var: Var::new(),
            input: None,
            output: None,
        }
    }

    pub fn with_input<I: Input + 'a>(mut self, input: I) -> Interpreter<'a> {
        self.input = Some(Box::new(input));
        self
    }

    pub fn with_output<O: Output + 'a>(mut self, output: O) -> Interpreter<'a> {
        self.output = Some(Box::new(output));
        self
    }

    pub fn var(&self) -> &Var {
        &self.var
    }

    /// Forgets all variables and usage statistics.
    pub fn reset(&mut self) {
        self.var.clear();
    }

    /// Runs from the first line until `END` or the last line.
    /// On error the program is left where the error happened.
    pub fn run(&mut self, program: &mut Program) -> Result<()> {
        self.start(program)?;
        while self.step(program)? {}
        program.rewind();
        Ok(())
    }

    /// Points the program at its first line for stepping.
    pub fn start(&mut self, program: &mut Program) -> Result<()> {
        program.rewind();
        program.set_next_line(program.first_line_number())
    }

    /// Executes the statement on the current line and moves the cursor.
    /// Returns `false` when there is nothing left to execute. A gap counts
    /// as progress.
    pub fn step(&mut self, program: &mut Program) -> Result<bool> {
        if program.is_ended() {
            return Ok(false);
        }
        let current = match program.next_line() {
            Some(line_number) => line_number,
            None => return Ok(false),
        };
        let default_next = program.next_line_number(current);
        program.set_next_line(default_next)?;
        let flow = match program.parsed_statement_mut(current) {
            None => {
                debug!("{} is empty", current);
                return Ok(true);
            }
            Some(statement) => {
                debug!("{} {}", current, statement);
                statement
                    .execute(self)
                    .map_err(|e| e.in_line_number(current))?
            }
        };
        match flow {
            Flow::Next => {}
            Flow::Jump(target) => {
                debug!("{} jumps to {}", current, target);
                program
                    .set_next_line(Some(target))
                    .map_err(|e| e.in_line_number(current))?;
            }
            Flow::End => program.set_end(),
        }
        Ok(true)
    }

    /// Every statement in line order with its counters. Meant for after a run.
    pub fn syntax_tree(&self, program: &Program) -> String {
        tree::syntax_tree(program, self.var.stats())
    }

    pub(super) fn print(&mut self, s: &str) {
        if let Some(output) = self.output.as_mut() {
            output.write_line(s);
        }
    }

    pub(super) fn read_line(&mut self) -> Result<String> {
        match self.input.as_mut() {
            None => Err(error!(NoInputProvider)),
            Some(input) => input
                .read_line()
                .map_err(|e| error!(InputFailed; &e.to_string())),
        }
    }
}
