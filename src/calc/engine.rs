//! Ties the reader, the command dispatcher, and the operand stack together
//! into the single per-line "process to completion" step, independent of
//! the process's actual stdin/stdout.
//!
//! One [`tracing`] span is opened per line, carrying `line_number` and
//! whichever of `command`/`literal` applies; parse and execution errors are
//! logged at `debug` — the user-facing diagnostic is the caller's `ERROR`
//! line, the log is a superset for an operator running this as a batch job.

use tracing::debug;

use crate::calc::command::Command;
use crate::calc::error::CalcError;
use crate::calc::reader::{classify, LineKind};
use crate::calc::stack::OperandStack;
use crate::config::CalculatorConfig;
use crate::poly::Poly;

/// The calculator's full runtime state: its operand stack and the
/// configuration it was built with.
pub struct Engine {
    stack: OperandStack,
    config: CalculatorConfig,
}

impl Engine {
    /// Builds a fresh engine with an empty stack.
    #[must_use]
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            stack: OperandStack::new(config.initial_stack_capacity),
            config,
        }
    }

    /// The number of polynomials currently on the operand stack.
    #[must_use]
    pub fn stack_len(&self) -> usize {
        self.stack.len()
    }

    /// Processes one input line (without its trailing newline), returning
    /// the line of stdout text to emit, if any.
    ///
    /// # Errors
    /// Returns a [`CalcError`] describing why the line could not be
    /// executed; the operand stack is left unchanged in every error case.
    pub fn process_line(&mut self, line_number: u64, line: &str) -> Result<Option<String>, CalcError> {
        let span = tracing::info_span!(
            "line",
            line_number,
            command = tracing::field::Empty,
            literal = tracing::field::Empty
        );
        let _enter = span.enter();

        let result = match classify(line) {
            LineKind::Comment | LineKind::Blank => Ok(None),
            LineKind::Command(text) => {
                tracing::Span::current().record("command", text);
                Command::parse(text).and_then(|cmd| cmd.execute(&mut self.stack))
            }
            LineKind::PolyLiteral(text) => {
                tracing::Span::current().record("literal", text);
                Poly::parse_with_limit(text, self.config.max_nesting_depth).map(|p| {
                    self.stack.push(p);
                    None
                })
            }
        };

        if let Err(err) = &result {
            debug!(%err, "line failed");
        }
        result
    }
}
