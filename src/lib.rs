#![forbid(unsafe_code)]
//! Sparse multivariate polynomial calculator
//!
//! A stack-based calculator over sparse, recursively-nested polynomials with
//! signed 64-bit integer coefficients. A polynomial in `x0, x1, x2, ...` is
//! represented as a constant, or as a sorted sequence of monomials whose
//! coefficients are themselves polynomials in the next variable — so the
//! *n*-th level of nesting is the polynomial's dependence on `x_{n-1}`.
//!
//! # Usage
//! ```
//! use polycalc::poly::Poly;
//!
//! let p: Poly = "(1,0)+(1,1)".parse().unwrap();
//! let q: Poly = "(2,0)".parse().unwrap();
//! let sum = p.add(&q);
//! assert_eq!(sum.to_string(), "(3,0)+(1,1)");
//! ```
//!
//! The [`calc`] module builds the line-oriented calculator on top of `poly`:
//! a growable operand stack, a command dispatcher, and the input reader that
//! together implement the program documented in [`calc::engine`].

pub mod calc;
pub mod config;
pub mod poly;

#[cfg(test)]
mod tests;

pub use calc::engine::Engine;
pub use calc::error::CalcError;
pub use config::CalculatorConfig;
pub use poly::{Coeff, Exp, Mono, Poly};
