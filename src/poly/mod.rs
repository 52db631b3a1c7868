//! Sparse, recursively-nested multivariate polynomials over signed 64-bit
//! integer coefficients.
//!
//! A [`Poly`] is either a constant, or a [`Nested`](Poly::Nested) sequence of
//! [`Mono`]s sorted by strictly increasing exponent, whose coefficients are
//! themselves `Poly`s in the next variable. Depth `0` is `x0`, depth `1` is
//! `x1`, and so on — substituting the outermost variable (see
//! [`query::at`](Poly::at)) peels one layer of nesting.
//!
//! # Canonical form
//!
//! Every public constructor funnels through [`canon::from_monomials`], the
//! single choke point that guarantees:
//! 1. the zero polynomial is always `Constant(0)`, never an empty or
//!    all-zero `Nested`;
//! 2. monomials within a `Nested` have strictly increasing exponents;
//! 3. no monomial carries a (recursively) zero coefficient;
//! 4. every nested coefficient is itself canonical.
//!
//! Because the representation is unique, structural equality
//! ([`PartialEq`]) coincides with algebraic equality.

mod arith;
mod canon;
mod display;
mod parse;
mod query;

pub use canon::from_monomials;

/// A polynomial coefficient.
pub type Coeff = i64;

/// A monomial exponent. Always non-negative in a canonical [`Poly`]; `-1` is
/// reserved for the "zero polynomial has degree -1" sentinel returned by
/// [`Poly::deg`] and [`Poly::deg_by`].
pub type Exp = i32;

/// One term of a [`Poly::Nested`] value: `coeff * x^exp`, where `coeff` is
/// itself a polynomial in the next variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mono {
    /// The exponent this term carries on the current variable.
    pub exp: Exp,
    /// The term's coefficient, a polynomial in the next variable.
    pub coeff: Poly,
}

impl Mono {
    /// Builds a monomial directly. Does not canonicalize — callers that
    /// assemble a `Vec<Mono>` for [`from_monomials`] may freely use this.
    #[must_use]
    pub fn new(exp: Exp, coeff: Poly) -> Self {
        Self { exp, coeff }
    }
}

/// A sparse, recursively-nested multivariate polynomial.
///
/// See the [module documentation](self) for the canonical-form invariants
/// every value of this type upholds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Poly {
    /// A constant, i.e. a polynomial with no dependence on any variable.
    Const(Coeff),
    /// A non-empty, strictly exponent-ordered sequence of monomials in the
    /// outermost variable.
    Nested(Vec<Mono>),
}

impl Poly {
    /// The zero polynomial, `Constant(0)`.
    #[must_use]
    pub fn zero() -> Self {
        Self::Const(0)
    }

    /// A constant polynomial carrying `c`.
    #[must_use]
    pub fn from_coeff(c: Coeff) -> Self {
        Self::Const(c)
    }
}

impl Default for Poly {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_const_zero() {
        assert_eq!(Poly::zero(), Poly::Const(0));
    }

    #[test]
    fn from_coeff_round_trips() {
        assert_eq!(Poly::from_coeff(42), Poly::Const(42));
    }
}
