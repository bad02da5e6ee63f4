#![allow(dead_code)]
use basic::mach::{Interpreter, Program, Script};
use std::cell::RefCell;
use std::rc::Rc;

pub fn program(lines: &[(u32, &str)]) -> Program {
    let mut program = Program::new();
    for (line_number, text) in lines {
        program.load_line(*line_number, text).unwrap();
    }
    program
}

/// An interpreter reading from `input` whose printed lines collect into
/// the returned buffer, one `\n` per line.
pub fn interpreter(input: &[&str]) -> (Interpreter<'static>, Rc<RefCell<String>>) {
    let printed = Rc::new(RefCell::new(String::new()));
    let sink = printed.clone();
    let interpreter = Interpreter::new()
        .with_input(Script::new(input.iter().copied()))
        .with_output(move |s: &str| {
            let mut printed = sink.borrow_mut();
            printed.push_str(s);
            printed.push('\n');
        });
    (interpreter, printed)
}

pub fn exec(program: &mut Program) -> String {
    exec_with_input(program, &[])
}

/// Output of a full run. A failed run ends with `?` and the error.
pub fn exec_with_input(program: &mut Program, input: &[&str]) -> String {
    let (mut interpreter, printed) = interpreter(input);
    let result = interpreter.run(program);
    let mut s = printed.borrow().clone();
    if let Err(error) = result {
        s.push_str(&format!("?{}\n", error));
    }
    s
}
