//! The canonical-text printer: the inverse of [`parse`](super::parse).
//!
//! `Constant(c)` prints as a signed decimal; `Nested` prints its monomials
//! joined by `+`, each as `(<inner>,<exp>)` with `<inner>` recursing. No
//! extraneous parentheses, no spaces — matching `PrintPoly` in the reference
//! implementation's `instructions.c`.

use std::fmt;

use super::Poly;

impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Poly::Const(c) => write!(f, "{c}"),
            Poly::Nested(monos) => {
                for (i, m) in monos.iter().enumerate() {
                    if i > 0 {
                        write!(f, "+")?;
                    }
                    write!(f, "({},{})", m.coeff, m.exp)?;
                }
                Ok(())
            }
        }
    }
}
