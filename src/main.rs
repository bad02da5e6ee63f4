//! # BASIC
//!
//! `basic` with no arguments starts the interactive prompt.
//! `basic FILE [--tree]` runs a program and exits.

mod term;

fn main() {
    if let Err(error) = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .env()
        .init()
    {
        eprintln!("{}", error);
    }
    term::main()
}
