//! Predicates and structural queries: `is_coeff`, `is_zero`, `deg`, `deg_by`,
//! `at`, `compose`.
//!
//! Structural equality is derived (`#[derive(PartialEq, Eq)]` on [`Poly`] in
//! the parent module) rather than implemented here — because canonical form
//! is unique, the derived field-by-field comparison already *is* algebraic
//! equality, matching `PolyIsEq` in the reference implementation without
//! needing a hand-written recursive comparator.

use super::{Coeff, Exp, Mono, Poly};

impl Poly {
    /// True iff `self` is the `Const` variant.
    #[must_use]
    pub fn is_coeff(&self) -> bool {
        matches!(self, Poly::Const(_))
    }

    /// True iff `self` is `Const(0)`. By the canonical-form invariants a
    /// `Nested` value is never zero-equivalent, so this never has to look
    /// inside a `Nested` tree.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Poly::Const(0))
    }

    /// The maximum, over all root-to-leaf paths, of the sum of exponents
    /// encountered. `-1` for the zero polynomial; `0` for any other
    /// constant.
    #[must_use]
    pub fn deg(&self) -> Exp {
        if self.is_zero() {
            return -1;
        }
        match self {
            Poly::Const(_) => 0,
            Poly::Nested(monos) => monos
                .iter()
                .map(|m| m.exp + m.coeff.deg())
                .max()
                .unwrap_or(0),
        }
    }

    /// The maximum exponent appearing at nesting depth exactly `var_idx`
    /// (0-indexed, depth 0 = outermost variable). `-1` for the zero
    /// polynomial.
    #[must_use]
    pub fn deg_by(&self, var_idx: u64) -> Exp {
        if self.is_zero() {
            return -1;
        }
        deg_by_at_depth(self, var_idx)
    }

    /// Substitutes `x` into the outermost variable: for `p(x0, x1, ...)`
    /// this returns `p(x, x0, x1, ...)` (every remaining variable shifts
    /// index down by one, since each monomial's nested coefficient already
    /// *is* the polynomial in the next variable).
    #[must_use]
    pub fn at(&self, x: Coeff) -> Poly {
        match self {
            Poly::Const(_) => self.clone(),
            Poly::Nested(monos) => {
                let mut acc = Poly::zero();
                for m in monos {
                    let power = coeff_pow(x, m.exp);
                    let term = m.coeff.scalar_mul(power);
                    acc = acc.add(&term);
                }
                acc
            }
        }
    }

    /// Substitutes `q[i]` for variable `xi` for `i` in `[0, q.len())`, and
    /// the zero polynomial for any higher variable appearing in `self`.
    #[must_use]
    pub fn compose(&self, q: &[Poly]) -> Poly {
        compose_at_depth(self, q, 0)
    }
}

fn deg_by_at_depth(p: &Poly, var_idx: u64) -> Exp {
    match p {
        Poly::Const(_) => 0,
        Poly::Nested(monos) => {
            if var_idx == 0 {
                monos.iter().map(|m| m.exp).max().unwrap_or(0)
            } else {
                monos
                    .iter()
                    .map(|m| deg_by_at_depth(&m.coeff, var_idx - 1))
                    .max()
                    .unwrap_or(0)
            }
        }
    }
}

/// Binary-squared `base^exp` for a plain coefficient scalar, with `0^0 = 1`.
fn coeff_pow(base: Coeff, exp: Exp) -> Coeff {
    if exp == 0 {
        return 1;
    }
    let mut result: Coeff = 1;
    let mut b = base;
    let mut e = exp;
    while e > 0 {
        if e & 1 == 1 {
            result = result.wrapping_mul(b);
        }
        b = b.wrapping_mul(b);
        e >>= 1;
    }
    result
}

/// Binary-squared `base^exp` for a `Poly` base, with `base^0 = Const(1)`
/// even when `base` is the zero polynomial.
fn poly_pow(base: &Poly, exp: Exp) -> Poly {
    if exp == 0 {
        return Poly::from_coeff(1);
    }
    let mut result = Poly::from_coeff(1);
    let mut b = base.clone();
    let mut e = exp;
    while e > 0 {
        if e & 1 == 1 {
            result = result.mul(&b);
        }
        b = b.mul(&b);
        e >>= 1;
    }
    result
}

fn compose_at_depth(p: &Poly, q: &[Poly], depth: usize) -> Poly {
    match p {
        Poly::Const(_) => p.clone(),
        Poly::Nested(monos) => {
            let sub_d = q.get(depth).cloned().unwrap_or_else(Poly::zero);
            let mut acc = Poly::zero();
            for m in monos {
                let composed_coeff = compose_at_depth(&m.coeff, q, depth + 1);
                let substituted_var = poly_pow(&sub_d, m.exp);
                let term = composed_coeff.mul(&substituted_var);
                acc = acc.add(&term);
            }
            acc
        }
    }
}
