use crate::mach::{Interpreter, Program, Script};


fn load(lines: &[(u32, &str)]) -> Program {
    let mut program = Program::new();
    for (line_number, text) in lines {
        if let Err(e) = program.load_line(*line_number, text) {
            panic!("{} : {:?}", e, e);
        }
    }
    program
}

fn run(program: &mut Program) -> String {
    run_with_input(program, &[])
}

fn run_with_input(program: &mut Program, input: &[&str]) -> String {
    let mut s = String::new();
    let result = {
        let mut interp = Interpreter::new()
            .with_input(Script::new(input.iter().copied()))
            .with_output(|line: &str| {
                s.push_str(line);
                s.push('\n');
            });
        interp.run(program)
    };
    if let Err(error) = result {
        s.push_str(&format!("?{}\n", error));
    }
    s
}
