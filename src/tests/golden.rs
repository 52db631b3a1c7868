//! End-to-end scenarios driving [`Engine`] over exact stdin-line scripts,
//! asserting the stdout line (or the error) each one produces.

use crate::calc::engine::Engine;
use crate::calc::error::CalcError;
use crate::config::CalculatorConfig;

fn run(lines: &[&str]) -> Vec<Result<Option<String>, CalcError>> {
    let mut engine = Engine::new(CalculatorConfig::default());
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| engine.process_line(i as u64 + 1, line))
        .collect()
}

#[test]
fn zero_then_is_zero_prints_one() {
    assert_eq!(run(&["ZERO", "IS_ZERO"])[1], Ok(Some("1".to_string())));
}

#[test]
fn add_then_sub_then_print() {
    let results = run(&["(1,0)+(1,1)", "(1,0)+(-1,0)", "SUB", "PRINT"]);
    assert_eq!(results[3], Ok(Some("(-1,0)+(-1,1)".to_string())));
}

#[test]
fn clone_is_structurally_equal() {
    assert_eq!(run(&["((1,2),3)", "CLONE", "IS_EQ"])[2], Ok(Some("1".to_string())));
}

#[test]
fn at_substitutes_and_prints() {
    assert_eq!(run(&["(1,2)", "AT 2", "PRINT"])[2], Ok(Some("4".to_string())));
}

#[test]
fn degby_then_deg_agree() {
    let results = run(&["(1,2)+(2,1)", "DEG_BY 0", "DEG"]);
    assert_eq!(results[1], Ok(Some("2".to_string())));
    assert_eq!(results[2], Ok(Some("2".to_string())));
}

#[test]
fn unknown_command_is_an_error() {
    assert_eq!(run(&["WRONG"])[0], Err(CalcError::WrongCommand));
}

#[test]
fn bare_at_is_an_error() {
    assert_eq!(run(&["AT"])[0], Err(CalcError::AtWrongValue));
}

#[test]
fn compose_pops_receiver_from_the_top() {
    let results = run(&["(1,1)", "(1,1)", "(1,0)", "COMPOSE 2", "PRINT"]);
    assert_eq!(results[4], Ok(Some("1".to_string())));
}

#[test]
fn comment_line_counts_toward_line_numbers() {
    let results = run(&["#comment", "ZERO", "PRINT"]);
    assert_eq!(results[0], Ok(None));
    assert_eq!(results[2], Ok(Some("0".to_string())));
}

#[test]
fn underflow_is_reported_and_stack_is_left_untouched() {
    let mut engine = Engine::new(CalculatorConfig::default());
    assert_eq!(engine.process_line(1, "POP"), Err(CalcError::StackUnderflow));
    assert_eq!(engine.stack_len(), 0);
}

#[test]
fn malformed_literal_does_not_push() {
    let mut engine = Engine::new(CalculatorConfig::default());
    assert_eq!(engine.process_line(1, "(1,2"), Err(CalcError::WrongPoly));
    assert_eq!(engine.stack_len(), 0);
}

#[test]
fn compose_underflow_restores_receiver_for_later_commands() {
    let mut engine = Engine::new(CalculatorConfig::default());
    engine.process_line(1, "(1,0)").unwrap();
    assert_eq!(engine.process_line(2, "COMPOSE 5"), Err(CalcError::StackUnderflow));
    assert_eq!(engine.process_line(3, "PRINT"), Ok(Some("1".to_string())));
}
