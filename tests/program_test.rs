mod common;
use basic::lang::ast::{Expression, Statement};
use basic::mach::{Interpreter, Program};
use common::*;

#[test]
fn test_lines_run_in_order() {
    let mut p = Program::new();
    p.load_line(30, "PRINT 3").unwrap();
    p.load_line(10, "PRINT 1").unwrap();
    p.load_line(20, "PRINT 2").unwrap();
    assert_eq!(exec(&mut p), "1\n2\n3\n");
    assert_eq!(p.listing(), "10 PRINT 1\n20 PRINT 2\n30 PRINT 3\n");
}

#[test]
fn test_gap_falls_through() {
    let mut p = program(&[(10, "X = 1"), (30, "PRINT X")]);
    p.add_source_line(20, "");
    p.add_source_line(25, "this is not parsed");
    let (mut interp, printed) = interpreter(&[]);
    interp.run(&mut p).unwrap();
    assert_eq!(*printed.borrow(), "1\n");
    assert_eq!(interp.var().len(), 1);
}

#[test]
fn test_jump_into_gap() {
    let mut p = program(&[(10, "GOTO 20"), (30, "PRINT 3")]);
    p.add_source_line(20, "");
    assert_eq!(exec(&mut p), "3\n");
}

#[test]
fn test_replace_line() {
    let mut p = program(&[(10, "PRINT 1"), (20, "PRINT 2")]);
    p.load_line(10, "PRINT 100").unwrap();
    p.remove_source_line(20);
    assert_eq!(exec(&mut p), "100\n");
}

#[test]
fn test_set_parsed_statement() {
    let mut p = Program::new();
    p.set_parsed_statement(10, Statement::print(Expression::constant(4)));
    p.set_parsed_statement(20, Statement::end());
    p.set_parsed_statement(30, Statement::print(Expression::constant(5)));
    assert_eq!(p.source_line(10), Some("PRINT 4"));
    assert_eq!(exec(&mut p), "4\n");
}

#[test]
fn test_program_can_run_again() {
    let mut p = program(&[(10, "PRINT 1"), (20, "END"), (30, "PRINT 3")]);
    let (mut interp, printed) = interpreter(&[]);
    interp.run(&mut p).unwrap();
    assert!(!p.is_ended());
    assert_eq!(p.next_line(), None);
    interp.run(&mut p).unwrap();
    assert_eq!(*printed.borrow(), "1\n1\n");
}

#[test]
fn test_clear() {
    let mut p = program(&[(10, "PRINT 1")]);
    p.clear();
    assert!(p.is_empty());
    assert_eq!(p.first_line_number(), None);
    assert_eq!(exec(&mut p), "");
}

#[test]
fn test_usage_counter() {
    let mut p = program(&[
        (10, "A = 2"),
        (20, "B = A * A + A"),
        (30, "PRINT B"),
        (40, "PRINT B"),
    ]);
    let (mut interp, printed) = interpreter(&[]);
    interp.run(&mut p).unwrap();
    assert_eq!(*printed.borrow(), "6\n6\n");
    let stats = interp.var().stats();
    assert_eq!(stats.uses("A"), 3);
    assert_eq!(stats.uses("B"), 2);
    assert_eq!(stats.uses("C"), 0);
}

#[test]
fn test_syntax_tree_after_run() {
    let mut p = program(&[
        (10, "LET X = 1"),
        (20, "PRINT X"),
        (30, "LET X = X + 1"),
        (40, "IF X < 3 THEN 20"),
        (50, "END"),
    ]);
    let (mut interp, _) = interpreter(&[]);
    interp.run(&mut p).unwrap();
    assert_eq!(
        interp.syntax_tree(&p),
        "10\nLET = 1\n  X 6\n  1\n\n\
         20\nPRINT 2\n  X\n\n\
         30\nLET = 2\n  X 6\n  +\n    X\n    1\n\n\
         40\nIF THEN 1 1\n  X\n  <\n  3\n  20\n\n\
         50\nEND 1\n\n"
    );
}

#[test]
fn test_reset_counters() {
    let mut p = program(&[(10, "X = 1"), (20, "IF X = 1 THEN 40"), (40, "END")]);
    let mut interp = Interpreter::new();
    interp.run(&mut p).unwrap();
    interp.run(&mut p).unwrap();
    assert_eq!(p.parsed_statement(10).unwrap().count(), 2);
    p.reset_counters();
    assert_eq!(p.parsed_statement(10).unwrap().count(), 0);
    assert_eq!(p.parsed_statement(20).unwrap().count(), 0);
    assert_eq!(p.source_line(20), Some("IF X = 1 THEN 40"));
}

#[test]
fn test_step() {
    let mut p = program(&[(10, "X = 1"), (20, "X = X + 1"), (30, "GOTO 20")]);
    let mut interp = Interpreter::new();
    interp.start(&mut p).unwrap();
    for _ in 0..9 {
        assert_eq!(interp.step(&mut p), Ok(true));
    }
    assert_eq!(p.next_line(), Some(20));
    assert_eq!(interp.var().get("X"), Some(5));
}

#[test]
fn test_goto_own_line() {
    let mut p = program(&[(10, "GOTO 10"), (20, "PRINT 1")]);
    let mut interp = Interpreter::new();
    interp.start(&mut p).unwrap();
    for _ in 0..3 {
        assert_eq!(interp.step(&mut p), Ok(true));
        assert_eq!(p.next_line(), Some(10));
    }
    assert_eq!(p.parsed_statement(10).unwrap().count(), 3);
}
