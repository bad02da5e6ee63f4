extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::Style;
use basic::error;
use basic::lang::{Error, LineNumber};
use basic::mach::{Interpreter, Program};
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use log::{debug, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const HELP: &str = "\
<line> <statement>  ADD OR REPLACE A LINE
<line>              DELETE A LINE
RUN                 RUN THE PROGRAM
STEP                RUN ONE LINE
LIST                SHOW THE PROGRAM
CLEAR               ERASE THE PROGRAM
LOAD <file>         READ A PROGRAM FROM A FILE
TREE                SHOW THE SYNTAX TREE OF THE LAST RUN
HELP                SHOW THIS
QUIT                EXIT";

struct Options {
    filename: Option<String>,
    tree: bool,
}

impl Options {
    fn from_args() -> Options {
        let mut options = Options {
            filename: None,
            tree: false,
        };
        for arg in std::env::args().skip(1) {
            if arg == "--tree" {
                options.tree = true;
            } else if options.filename.is_none() {
                options.filename = Some(arg);
            } else {
                warn!("ignoring argument {}", arg);
            }
        }
        options
    }
}

pub fn main() {
    let options = Options::from_args();
    if let Some(filename) = options.filename {
        if let Err(error) = batch(&filename, options.tree) {
            eprintln!("?{}", error);
            std::process::exit(1);
        }
        return;
    }
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if let Err(error) = main_loop(interrupted) {
        eprintln!("{}", error);
    }
}

/// Runs a file to completion with standard input and output.
fn batch(filename: &str, tree: bool) -> Result<(), Error> {
    let mut program = load(filename)?;
    let stdin = io::stdin();
    let mut interpreter = Interpreter::new()
        .with_input(move || -> io::Result<String> {
            let mut s = String::new();
            if stdin.lock().read_line(&mut s)? == 0 {
                return Err(io::Error::new(ErrorKind::UnexpectedEof, "INPUT PAST END"));
            }
            Ok(s)
        })
        .with_output(|s: &str| println!("{}", s));
    let result = interpreter.run(&mut program);
    if tree {
        print!("{}", interpreter.syntax_tree(&program));
    }
    result
}

enum Directive {
    Run,
    Step,
    List,
    Clear,
    Load(String),
    Tree,
    Help,
    Quit,
}

impl Directive {
    fn parse(s: &str) -> Result<Directive, Error> {
        let mut words = s.splitn(2, char::is_whitespace);
        let word = words.next().unwrap_or_default().to_ascii_uppercase();
        let rest = words.next().unwrap_or_default().trim();
        let directive = match word.as_str() {
            "RUN" => Directive::Run,
            "STEP" => Directive::Step,
            "LIST" => Directive::List,
            "CLEAR" => Directive::Clear,
            "TREE" => Directive::Tree,
            "HELP" => Directive::Help,
            "QUIT" => Directive::Quit,
            "LOAD" => {
                if rest.is_empty() {
                    return Err(error!(SyntaxError; "MISSING FILE NAME"));
                }
                return Ok(Directive::Load(rest.trim_matches('"').to_string()));
            }
            _ => return Err(error!(SyntaxError; "UNKNOWN COMMAND")),
        };
        if !rest.is_empty() {
            return Err(error!(SyntaxError; &format!("UNEXPECTED {}", rest)));
        }
        Ok(directive)
    }
}

fn main_loop(interrupted: Arc<AtomicBool>) -> io::Result<()> {
    let command = Interface::new("BASIC")?;
    command.set_prompt("> ")?;
    let input = Interface::new("INPUT")?;
    input.set_prompt("? ")?;
    input.set_report_signal(Signal::Interrupt, true);

    let mut program = Program::new();
    let mut interpreter = Interpreter::new()
        .with_input(|| read_input(&input))
        .with_output(|s: &str| {
            if let Err(error) = command.write_fmt(format_args!("{}\n", s)) {
                warn!("{}", error);
            }
        });
    let mut stepping = false;

    command.write_fmt(format_args!("LINE BASIC\nREADY.\n"))?;
    loop {
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        let trimmed = string.trim();
        if trimmed.is_empty() {
            continue;
        }
        command.add_history_unique(string.clone());

        if let Some(result) = split_line_number(trimmed) {
            stepping = false;
            program.rewind();
            match result {
                Ok((line_number, "")) => program.remove_source_line(line_number),
                Ok((line_number, text)) => {
                    if let Err(error) = program.load_line(line_number, text) {
                        print_error(&command, &error)?;
                    }
                }
                Err(error) => print_error(&command, &error)?,
            }
            continue;
        }

        let directive = match Directive::parse(trimmed) {
            Ok(directive) => directive,
            Err(error) => {
                print_error(&command, &error)?;
                continue;
            }
        };
        match directive {
            Directive::Run => {
                stepping = false;
                interrupted.store(false, Ordering::SeqCst);
                interpreter.reset();
                program.reset_counters();
                let mut result = interpreter.start(&mut program);
                while result.is_ok() {
                    if interrupted.swap(false, Ordering::SeqCst) {
                        if let Some(line_number) = program.next_line() {
                            command.write_fmt(format_args!("BREAK IN {}\n", line_number))?;
                        }
                        break;
                    }
                    match interpreter.step(&mut program) {
                        Ok(true) => {}
                        Ok(false) => break,
                        Err(error) => result = Err(error),
                    }
                }
                program.rewind();
                if let Err(error) = result {
                    print_error(&command, &error)?;
                }
            }
            Directive::Step => {
                if !stepping {
                    interpreter.reset();
                    program.reset_counters();
                    if let Err(error) = interpreter.start(&mut program) {
                        print_error(&command, &error)?;
                        continue;
                    }
                    stepping = true;
                }
                let current = program.next_line();
                if let Some(line_number) = current {
                    let text = program.source_line(line_number).unwrap_or_default();
                    command.write_fmt(format_args!("{} {}\n", line_number, text))?;
                }
                match interpreter.step(&mut program) {
                    Ok(true) => {}
                    Ok(false) => {
                        stepping = false;
                        program.rewind();
                        command.write_fmt(format_args!("READY.\n"))?;
                    }
                    Err(error) => {
                        stepping = false;
                        program.rewind();
                        print_error(&command, &error)?;
                    }
                }
            }
            Directive::List => command.write_fmt(format_args!("{}", program.listing()))?,
            Directive::Clear => {
                stepping = false;
                program.clear();
                interpreter.reset();
            }
            Directive::Load(filename) => match load(&filename) {
                Ok(loaded) => {
                    stepping = false;
                    program = loaded;
                    interpreter.reset();
                }
                Err(error) => print_error(&command, &error)?,
            },
            Directive::Tree => {
                command.write_fmt(format_args!("{}", interpreter.syntax_tree(&program)))?
            }
            Directive::Help => command.write_fmt(format_args!("{}\n", HELP))?,
            Directive::Quit => break,
        }
    }
    Ok(())
}

fn read_input(input: &Interface<DefaultTerminal>) -> io::Result<String> {
    match input.read_line()? {
        ReadResult::Input(string) => {
            input.add_history_unique(string.clone());
            Ok(string)
        }
        ReadResult::Signal(_) => {
            input.set_buffer("")?;
            input.lock_reader().cancel_read_line()?;
            Err(io::Error::new(ErrorKind::Interrupted, "BREAK"))
        }
        ReadResult::Eof => Err(io::Error::new(ErrorKind::UnexpectedEof, "INPUT PAST END")),
    }
}

fn print_error(command: &Interface<DefaultTerminal>, error: &Error) -> io::Result<()> {
    command.write_fmt(format_args!(
        "{}\n",
        Style::new().bold().paint(format!("?{}", error))
    ))
}

/// `None` when the text doesn't start with a digit.
fn split_line_number(s: &str) -> Option<Result<(LineNumber, &str), Error>> {
    let digits = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if digits == 0 {
        return None;
    }
    let result = match s[..digits].parse::<LineNumber>() {
        Ok(line_number) => Ok((line_number, s[digits..].trim())),
        Err(_) => Err(error!(Overflow; "LINE NUMBER TOO BIG")),
    };
    Some(result)
}

fn load(filename: &str) -> Result<Program, Error> {
    let mut program = Program::new();
    let reader = match File::open(filename) {
        Ok(file) => BufReader::new(file),
        Err(error) => {
            let msg = error.to_string();
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; msg.as_str())),
                _ => return Err(error!(InternalError; msg.as_str())),
            }
        }
    };
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|error| error!(InternalError; error.to_string().as_str()))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let in_file = || format!("IN LINE {} OF THE FILE", index + 1);
        match split_line_number(trimmed) {
            None => return Err(error!(SyntaxError; &format!("MISSING LINE NUMBER {}", in_file()))),
            Some(Err(_)) => {
                return Err(error!(Overflow; &format!("LINE NUMBER TOO BIG {}", in_file())))
            }
            Some(Ok((line_number, text))) => program.load_line(line_number, text)?,
        }
    }
    debug!("loaded {} lines from {}", program.len(), filename);
    Ok(program)
}
