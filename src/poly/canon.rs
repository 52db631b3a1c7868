//! The canonicalization choke point.
//!
//! [`from_monomials`] is the only place a [`Poly::Nested`] value is ever
//! constructed from a raw monomial list. Every arithmetic operation that
//! might produce a `Nested` result routes its raw, possibly-unsorted,
//! possibly-duplicated, possibly-zero-coefficient monomial list through
//! here, exactly as the reference implementation's `PolyCreateFromMonos`
//! and `PolyAddMonos` do.

use super::arith::add;
use super::{Mono, Poly};

/// Builds a canonical [`Poly`] from an arbitrary sequence of monomials.
///
/// Accepts monomials in any order, with duplicate exponents and zero
/// coefficients; merges duplicate exponents by recursive addition, drops
/// monomials whose merged coefficient is zero, and collapses a single
/// surviving exponent-0 constant monomial down to a bare [`Poly::Const`].
#[must_use]
pub fn from_monomials(mut monos: Vec<Mono>) -> Poly {
    if monos.is_empty() {
        return Poly::zero();
    }

    monos.sort_by_key(|m| m.exp);

    let mut survivors: Vec<Mono> = Vec::with_capacity(monos.len());
    let mut iter = monos.into_iter();
    let mut current = iter.next().expect("checked non-empty above");

    for next in iter {
        if next.exp == current.exp {
            current = Mono::new(current.exp, add(&current.coeff, &next.coeff));
        } else {
            if !current.coeff.is_zero() {
                survivors.push(current);
            }
            current = next;
        }
    }
    if !current.coeff.is_zero() {
        survivors.push(current);
    }

    match survivors.len() {
        0 => Poly::zero(),
        1 if survivors[0].exp == 0 => {
            if let Poly::Const(c) = survivors[0].coeff {
                Poly::Const(c)
            } else {
                Poly::Nested(survivors)
            }
        }
        _ => Poly::Nested(survivors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly::Coeff;

    fn c(v: Coeff) -> Poly {
        Poly::Const(v)
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(from_monomials(vec![]), Poly::zero());
    }

    #[test]
    fn duplicate_exponents_merge() {
        let monos = vec![Mono::new(1, c(2)), Mono::new(1, c(3))];
        assert_eq!(from_monomials(monos), Poly::Nested(vec![Mono::new(1, c(5))]));
    }

    #[test]
    fn merged_zero_coefficient_is_dropped() {
        let monos = vec![Mono::new(1, c(2)), Mono::new(1, c(-2)), Mono::new(2, c(7))];
        assert_eq!(from_monomials(monos), Poly::Nested(vec![Mono::new(2, c(7))]));
    }

    #[test]
    fn single_exp_zero_constant_collapses() {
        let monos = vec![Mono::new(0, c(9))];
        assert_eq!(from_monomials(monos), Poly::Const(9));
    }

    #[test]
    fn unsorted_input_is_sorted() {
        let monos = vec![Mono::new(2, c(1)), Mono::new(0, c(1)), Mono::new(1, c(1))];
        assert_eq!(
            from_monomials(monos),
            Poly::Nested(vec![Mono::new(0, c(1)), Mono::new(1, c(1)), Mono::new(2, c(1))])
        );
    }

    #[test]
    fn all_zero_survivors_collapse_to_zero() {
        let monos = vec![Mono::new(0, c(1)), Mono::new(0, c(-1))];
        assert_eq!(from_monomials(monos), Poly::zero());
    }
}
