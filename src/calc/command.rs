//! Command parsing and dispatch.
//!
//! [`Command::parse`] follows `instruction_scan.c`'s exact validation order:
//! a line with no space at all is matched against the fixed no-argument
//! command names (or, for a bare `DEG_BY`/`AT`/`COMPOSE` token, yields that
//! command's own error rather than `WrongCommand`); a line with a space is
//! matched by comparing everything before the space against the three
//! argumented command names, then validating the argument's characters and
//! numeric range. A leading token that matches no known command — with or
//! without an argument — yields [`CalcError::WrongCommand`].
//!
//! [`Command::execute`] applies a parsed command to an [`OperandStack`],
//! following the stack effects of `instructions.c`: binary operations pop
//! the top as the first operand and the second-from-top as the second.

use crate::calc::error::CalcError;
use crate::calc::stack::OperandStack;
use crate::poly::Poly;

/// A single parsed command, ready to run against an [`OperandStack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Push `Constant(0)`.
    Zero,
    /// Print whether the top is a `Const`.
    IsCoeff,
    /// Print whether the top is `Const(0)`.
    IsZero,
    /// Push a clone of the top.
    Clone,
    /// Pop two, push their sum.
    Add,
    /// Pop two, push their product.
    Mul,
    /// Pop one, push its negation.
    Neg,
    /// Pop two, push their difference.
    Sub,
    /// Print whether the top two are structurally equal.
    IsEq,
    /// Print the top's degree.
    Deg,
    /// Pop one, discarding it.
    Pop,
    /// Print the top's canonical text.
    Print,
    /// Print the top's degree in the given variable.
    DegBy(u64),
    /// Pop one, push it evaluated at the given point.
    At(i64),
    /// Pop `k + 1`, push the composed result.
    Compose(u64),
}

impl Command {
    /// Parses a command line (without its trailing newline).
    ///
    /// # Errors
    /// Returns the appropriate [`CalcError`] for an unknown command name or
    /// a malformed/out-of-range argument.
    pub fn parse(line: &str) -> Result<Command, CalcError> {
        match line.find(' ') {
            None => parse_bare(line),
            Some(space_idx) => parse_with_arg(line, space_idx),
        }
    }

    /// Runs this command against `stack`, returning the line of stdout
    /// text to emit, if any.
    ///
    /// # Errors
    /// Returns [`CalcError::StackUnderflow`] if a required operand is
    /// missing, leaving the stack unchanged.
    pub fn execute(self, stack: &mut OperandStack) -> Result<Option<String>, CalcError> {
        match self {
            Command::Zero => {
                stack.push(Poly::zero());
                Ok(None)
            }
            Command::IsCoeff => Ok(Some(bool_str(stack.top()?.is_coeff()))),
            Command::IsZero => Ok(Some(bool_str(stack.top()?.is_zero()))),
            Command::Clone => {
                let clone = stack.top()?.clone();
                stack.push(clone);
                Ok(None)
            }
            Command::Add => {
                let (a, b) = stack.pop_pair()?;
                stack.push(a.add(&b));
                Ok(None)
            }
            Command::Mul => {
                let (a, b) = stack.pop_pair()?;
                stack.push(a.mul(&b));
                Ok(None)
            }
            Command::Sub => {
                let (a, b) = stack.pop_pair()?;
                stack.push(a.sub(&b));
                Ok(None)
            }
            Command::Neg => {
                let p = stack.pop()?;
                stack.push(p.negate());
                Ok(None)
            }
            Command::IsEq => {
                let a = stack.top()?;
                let b = stack.second_from_top()?;
                Ok(Some(bool_str(a == b)))
            }
            Command::Deg => Ok(Some(stack.top()?.deg().to_string())),
            Command::Pop => {
                stack.pop()?;
                Ok(None)
            }
            Command::Print => Ok(Some(stack.top()?.to_string())),
            Command::DegBy(idx) => Ok(Some(stack.top()?.deg_by(idx).to_string())),
            Command::At(x) => {
                let p = stack.pop()?;
                stack.push(p.at(x));
                Ok(None)
            }
            Command::Compose(k) => {
                let k = usize::try_from(k).unwrap_or(usize::MAX);
                let (receiver, q) = stack.pop_compose_args(k)?;
                stack.push(receiver.compose(&q));
                Ok(None)
            }
        }
    }
}

fn bool_str(b: bool) -> String {
    if b { "1".to_string() } else { "0".to_string() }
}

fn parse_bare(line: &str) -> Result<Command, CalcError> {
    match line {
        "ZERO" => Ok(Command::Zero),
        "IS_COEFF" => Ok(Command::IsCoeff),
        "IS_ZERO" => Ok(Command::IsZero),
        "CLONE" => Ok(Command::Clone),
        "ADD" => Ok(Command::Add),
        "MUL" => Ok(Command::Mul),
        "NEG" => Ok(Command::Neg),
        "SUB" => Ok(Command::Sub),
        "IS_EQ" => Ok(Command::IsEq),
        "DEG" => Ok(Command::Deg),
        "POP" => Ok(Command::Pop),
        "PRINT" => Ok(Command::Print),
        "DEG_BY" => Err(CalcError::DegByWrongVariable),
        "AT" => Err(CalcError::AtWrongValue),
        "COMPOSE" => Err(CalcError::ComposeWrongParameter),
        _ => Err(CalcError::WrongCommand),
    }
}

fn parse_with_arg(line: &str, space_idx: usize) -> Result<Command, CalcError> {
    let prefix = &line[..space_idx];
    let arg = &line[space_idx + 1..];
    if prefix == "DEG_BY" {
        parse_unsigned(arg)
            .map(Command::DegBy)
            .map_err(|()| CalcError::DegByWrongVariable)
    } else if prefix == "COMPOSE" {
        parse_unsigned(arg)
            .map(Command::Compose)
            .map_err(|()| CalcError::ComposeWrongParameter)
    } else if prefix == "AT" {
        parse_signed(arg).map(Command::At).map_err(|()| CalcError::AtWrongValue)
    } else {
        Err(CalcError::WrongCommand)
    }
}

fn parse_unsigned(s: &str) -> Result<u64, ()> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(());
    }
    s.parse::<u64>().map_err(|_| ())
}

fn parse_signed(s: &str) -> Result<i64, ()> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(());
    }
    s.parse::<i64>().map_err(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_no_arg_commands_parse() {
        assert_eq!(Command::parse("PRINT"), Ok(Command::Print));
        assert_eq!(Command::parse("ZERO"), Ok(Command::Zero));
    }

    #[test]
    fn unknown_token_is_wrong_command() {
        assert_eq!(Command::parse("WRONG"), Err(CalcError::WrongCommand));
    }

    #[test]
    fn bare_degby_without_space_is_specific_error() {
        assert_eq!(Command::parse("DEG_BY"), Err(CalcError::DegByWrongVariable));
        assert_eq!(Command::parse("AT"), Err(CalcError::AtWrongValue));
        assert_eq!(Command::parse("COMPOSE"), Err(CalcError::ComposeWrongParameter));
    }

    #[test]
    fn degby_with_valid_arg_parses() {
        assert_eq!(Command::parse("DEG_BY 3"), Ok(Command::DegBy(3)));
    }

    #[test]
    fn at_allows_single_leading_minus() {
        assert_eq!(Command::parse("AT -5"), Ok(Command::At(-5)));
    }

    #[test]
    fn degby_rejects_minus() {
        assert_eq!(Command::parse("DEG_BY -5"), Err(CalcError::DegByWrongVariable));
    }

    #[test]
    fn degby_rejects_trailing_garbage() {
        assert_eq!(Command::parse("DEG_BY 3x"), Err(CalcError::DegByWrongVariable));
    }

    #[test]
    fn mismatched_prefix_with_space_is_wrong_command() {
        // "DEG_BYx" doesn't equal "DEG_BY", so the space-prefixed match fails
        // entirely rather than falling through to a DEG_BY-specific error.
        assert_eq!(Command::parse("DEG_BYx 5"), Err(CalcError::WrongCommand));
    }

    #[test]
    fn compose_with_valid_arg_parses() {
        assert_eq!(Command::parse("COMPOSE 2"), Ok(Command::Compose(2)));
    }

    #[test]
    fn add_pops_two_pushes_sum() {
        let mut s = OperandStack::new(4);
        s.push(Poly::from_coeff(2));
        s.push(Poly::from_coeff(3));
        Command::Add.execute(&mut s).unwrap();
        assert_eq!(s.top().unwrap(), &Poly::from_coeff(5));
    }

    #[test]
    fn sub_uses_top_minus_second() {
        let mut s = OperandStack::new(4);
        s.push(Poly::from_coeff(2)); // second-from-top after next push
        s.push(Poly::from_coeff(5)); // top
        Command::Sub.execute(&mut s).unwrap();
        assert_eq!(s.top().unwrap(), &Poly::from_coeff(3));
    }

    #[test]
    fn clone_does_not_consume_original() {
        let mut s = OperandStack::new(4);
        s.push(Poly::from_coeff(9));
        Command::Clone.execute(&mut s).unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.top().unwrap(), &Poly::from_coeff(9));
    }

    #[test]
    fn underflow_on_empty_stack() {
        let mut s = OperandStack::new(4);
        assert_eq!(Command::Pop.execute(&mut s), Err(CalcError::StackUnderflow));
    }
}
