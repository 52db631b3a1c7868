//! Addition, negation, subtraction, scalar multiplication, and multiplication.
//!
//! Every function here takes its operands by reference and returns a new,
//! already-canonical `Poly` — mirroring `PolyAdd`/`PolyNeg`/`PolyMulByCoeff`/
//! `MulTwoPolys` in the reference implementation's `poly.c`.

use super::canon::from_monomials;
use super::{Coeff, Mono, Poly};

impl Poly {
    /// `self + other`.
    #[must_use]
    pub fn add(&self, other: &Poly) -> Poly {
        add(self, other)
    }

    /// `-self`.
    #[must_use]
    pub fn negate(&self) -> Poly {
        negate(self)
    }

    /// `self - other`, defined as `self + (-other)`.
    #[must_use]
    pub fn sub(&self, other: &Poly) -> Poly {
        add(self, &negate(other))
    }

    /// `self * other`.
    #[must_use]
    pub fn mul(&self, other: &Poly) -> Poly {
        mul(self, other)
    }

    /// `self * c` for a plain integer scalar `c`.
    #[must_use]
    pub fn scalar_mul(&self, c: Coeff) -> Poly {
        scalar_mul(self, c)
    }
}

pub(super) fn add(p: &Poly, q: &Poly) -> Poly {
    match (p, q) {
        (Poly::Const(a), Poly::Const(b)) => Poly::Const(a.wrapping_add(*b)),
        (Poly::Const(c), Poly::Nested(monos)) | (Poly::Nested(monos), Poly::Const(c)) => {
            add_const_into_nested(*c, monos)
        }
        (Poly::Nested(a), Poly::Nested(b)) => add_nested(a, b),
    }
}

fn add_const_into_nested(c: Coeff, monos: &[Mono]) -> Poly {
    let mut merged: Vec<Mono> = Vec::with_capacity(monos.len() + 1);
    let mut inserted = false;
    for m in monos {
        if m.exp == 0 {
            merged.push(Mono::new(0, add(&m.coeff, &Poly::Const(c))));
            inserted = true;
        } else {
            merged.push(m.clone());
        }
    }
    if !inserted {
        merged.push(Mono::new(0, Poly::Const(c)));
    }
    from_monomials(merged)
}

fn add_nested(a: &[Mono], b: &[Mono]) -> Poly {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].exp.cmp(&b[j].exp) {
            std::cmp::Ordering::Less => {
                merged.push(a[i].clone());
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                merged.push(b[j].clone());
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                merged.push(Mono::new(a[i].exp, add(&a[i].coeff, &b[j].coeff)));
                i += 1;
                j += 1;
            }
        }
    }
    merged.extend_from_slice(&a[i..]);
    merged.extend_from_slice(&b[j..]);
    from_monomials(merged)
}

pub(super) fn negate(p: &Poly) -> Poly {
    match p {
        Poly::Const(c) => Poly::Const(c.wrapping_neg()),
        Poly::Nested(monos) => {
            // Negation preserves exponents and can never turn a nonzero
            // coefficient into zero, so the result is already canonical
            // monomial-for-monomial; no re-canonicalization pass is needed.
            Poly::Nested(
                monos
                    .iter()
                    .map(|m| Mono::new(m.exp, negate(&m.coeff)))
                    .collect(),
            )
        }
    }
}

pub(super) fn scalar_mul(p: &Poly, c: Coeff) -> Poly {
    if c == 0 {
        return Poly::zero();
    }
    match p {
        Poly::Const(a) => Poly::Const(a.wrapping_mul(c)),
        Poly::Nested(monos) => {
            let scaled: Vec<Mono> = monos
                .iter()
                .map(|m| Mono::new(m.exp, scalar_mul(&m.coeff, c)))
                .collect();
            from_monomials(scaled)
        }
    }
}

pub(super) fn mul(p: &Poly, q: &Poly) -> Poly {
    match (p, q) {
        (Poly::Const(a), Poly::Const(b)) => Poly::Const(a.wrapping_mul(*b)),
        (Poly::Const(c), other) | (other, Poly::Const(c)) => scalar_mul(other, *c),
        (Poly::Nested(a), Poly::Nested(b)) => {
            let mut acc = Poly::zero();
            for mi in a {
                for mj in b {
                    let term = Poly::Nested(vec![Mono::new(
                        mi.exp.wrapping_add(mj.exp),
                        mul(&mi.coeff, &mj.coeff),
                    )]);
                    acc = add(&acc, &term);
                }
            }
            acc
        }
    }
}
