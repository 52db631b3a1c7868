//! The calculator's error taxonomy.
//!
//! A flat, thiserror-derived enum: every variant is a leaf with no wrapped
//! `source` error, since the calculator never chains causes — a `WRONG
//! POLY` either holds or it doesn't. `Display` renders exactly the message
//! half of the `ERROR <n> <MESSAGE>` diagnostic line; the line number is
//! prefixed by the caller, not by this type.

use thiserror::Error;

/// Every way a single input line can fail to execute.
///
/// All variants are non-fatal: on any of these, the operand stack is left
/// unchanged and processing continues with the next line. The one fatal
/// failure mode the specification recognizes — allocation failure — has no
/// variant here, since it is handled by the platform's default allocator
/// abort rather than modeled as a `Result` error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalcError {
    /// The leading token of a command line did not match any known command.
    #[error("WRONG COMMAND")]
    WrongCommand,
    /// A command required more operands than the stack currently holds.
    #[error("STACK UNDERFLOW")]
    StackUnderflow,
    /// A polynomial literal failed structural validation, a numeric literal
    /// in it was out of range, or it was nested deeper than configured.
    #[error("WRONG POLY")]
    WrongPoly,
    /// `DEG_BY`'s argument was missing, non-numeric, or out of range.
    #[error("DEG BY WRONG VARIABLE")]
    DegByWrongVariable,
    /// `AT`'s argument was missing, non-numeric, or out of range.
    #[error("AT WRONG VALUE")]
    AtWrongValue,
    /// `COMPOSE`'s argument was missing, non-numeric, or out of range.
    #[error("COMPOSE WRONG PARAMETER")]
    ComposeWrongParameter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_wire_format() {
        assert_eq!(CalcError::WrongCommand.to_string(), "WRONG COMMAND");
        assert_eq!(CalcError::StackUnderflow.to_string(), "STACK UNDERFLOW");
        assert_eq!(CalcError::WrongPoly.to_string(), "WRONG POLY");
        assert_eq!(CalcError::DegByWrongVariable.to_string(), "DEG BY WRONG VARIABLE");
        assert_eq!(CalcError::AtWrongValue.to_string(), "AT WRONG VALUE");
        assert_eq!(CalcError::ComposeWrongParameter.to_string(), "COMPOSE WRONG PARAMETER");
    }
}
