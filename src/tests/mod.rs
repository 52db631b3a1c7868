//! Cross-module test suites: end-to-end golden-line scenarios, parser
//! fuzz-style malformed-input checks, and quickcheck property tests of the
//! algebraic invariants.

mod golden;
