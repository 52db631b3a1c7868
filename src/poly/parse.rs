//! The polynomial-literal parser.
//!
//! Two phases, both grounded on the reference implementation's
//! `IsCorrectPoly` + `Parse`/`ParseMono` split in `poly_execute.c`:
//!
//! 1. [`validate_structure`] walks the byte cursor once, rejecting any
//!    syntactic malformation before a single [`Poly`] node is allocated.
//! 2. [`build`] walks the validated text a second time, splitting on
//!    top-level `+` and the final top-level `,` of each monomial, to build
//!    the tree recursively.
//!
//! A [`CalcError::WrongPoly`] on either phase means no partial `Poly` escapes
//! — since every intermediate value here is a plain owned Rust value, there
//! is nothing to leak or explicitly destroy on the error path, unlike the
//! original's manually-managed heap nodes.

use std::str::FromStr;

use crate::calc::error::CalcError;
use crate::config::DEFAULT_MAX_NESTING_DEPTH;

use super::canon::from_monomials;
use super::{Coeff, Exp, Mono, Poly};

impl Poly {
    /// Parses a polynomial literal, rejecting input nested deeper than
    /// `max_nesting_depth`.
    ///
    /// # Errors
    /// Returns [`CalcError::WrongPoly`] for any structural malformation,
    /// any out-of-range `Coeff`/`Exp` literal, or nesting beyond the
    /// configured limit.
    pub fn parse_with_limit(s: &str, max_nesting_depth: usize) -> Result<Poly, CalcError> {
        let bytes = s.as_bytes();
        validate_structure(bytes)?;
        if bytes.first() == Some(&b'(') {
            build_poly(s, max_nesting_depth, 0)
        } else {
            parse_coeff(s).map(Poly::Const)
        }
    }
}

impl FromStr for Poly {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Poly::parse_with_limit(s, DEFAULT_MAX_NESTING_DEPTH)
    }
}

fn parse_coeff(s: &str) -> Result<Coeff, CalcError> {
    s.parse::<Coeff>().map_err(|_| CalcError::WrongPoly)
}

fn parse_exp(s: &str) -> Result<Exp, CalcError> {
    let e: Exp = s.parse().map_err(|_| CalcError::WrongPoly)?;
    if e < 0 {
        return Err(CalcError::WrongPoly);
    }
    Ok(e)
}

/// Single pass over the raw bytes enforcing every neighbor rule from
/// spec.md §4.4 before any recursive construction is attempted.
fn validate_structure(bytes: &[u8]) -> Result<(), CalcError> {
    if bytes.is_empty() {
        return Err(CalcError::WrongPoly);
    }
    for &b in bytes {
        if !matches!(b, b'+' | b'-' | b'(' | b')' | b',' | b'0'..=b'9') {
            return Err(CalcError::WrongPoly);
        }
    }

    let is_bare_coeff = bytes[0] != b'(';
    if is_bare_coeff {
        // A bare top-level Coeff must be exactly `[-]digit{digit}` — no
        // monomial syntax is permitted anywhere in it.
        let mut i = 0;
        if bytes[0] == b'-' {
            i = 1;
        }
        if i == bytes.len() {
            return Err(CalcError::WrongPoly);
        }
        return if bytes[i..].iter().all(u8::is_ascii_digit) {
            Ok(())
        } else {
            Err(CalcError::WrongPoly)
        };
    }

    if *bytes.last().expect("checked non-empty above") != b')' {
        return Err(CalcError::WrongPoly);
    }

    let mut depth: i64 = 0;
    let mut open_count: u64 = 0;
    let mut close_count: u64 = 0;
    let mut comma_count: u64 = 0;

    for (i, &b) in bytes.iter().enumerate() {
        let prev = i.checked_sub(1).map(|p| bytes[p]);
        let next = bytes.get(i + 1).copied();
        match b {
            b'(' => {
                open_count += 1;
                depth += 1;
                let prev_ok = matches!(prev, None | Some(b'+') | Some(b'('));
                let next_ok = matches!(next, Some(b'(') | Some(b'-') | Some(b'0'..=b'9'));
                if !prev_ok || !next_ok {
                    return Err(CalcError::WrongPoly);
                }
            }
            b')' => {
                close_count += 1;
                depth -= 1;
                if depth < 0 {
                    return Err(CalcError::WrongPoly);
                }
                let prev_ok = matches!(prev, Some(b'0'..=b'9'));
                let next_ok = matches!(next, None | Some(b'+') | Some(b','));
                if !prev_ok || !next_ok {
                    return Err(CalcError::WrongPoly);
                }
            }
            b',' => {
                comma_count += 1;
                let prev_ok = matches!(prev, Some(b')') | Some(b'0'..=b'9'));
                let next_ok = matches!(next, Some(b'0'..=b'9'));
                if !prev_ok || !next_ok {
                    return Err(CalcError::WrongPoly);
                }
            }
            b'-' => {
                let prev_ok = matches!(prev, Some(b'('));
                let next_ok = matches!(next, Some(b'0'..=b'9'));
                if !prev_ok || !next_ok {
                    return Err(CalcError::WrongPoly);
                }
            }
            b'+' => {
                let prev_ok = matches!(prev, Some(b')'));
                let next_ok = matches!(next, Some(b'('));
                if !prev_ok || !next_ok {
                    return Err(CalcError::WrongPoly);
                }
            }
            _ => {}
        }
    }

    if depth != 0 || open_count != close_count || comma_count != close_count {
        return Err(CalcError::WrongPoly);
    }
    Ok(())
}

/// Splits `s` on `+` characters at paren-depth 0.
fn split_top_level_monomials(s: &str) -> Vec<&str> {
    let bytes = s.as_bytes();
    let mut parts = Vec::new();
    let mut depth = 0i64;
    let mut start = 0usize;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => depth -= 1,
            b'+' if depth == 0 => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts
}

/// Locates the final `,` at paren-depth 0 within a single monomial
/// substring `(C,E)` — it separates `C` from `E` because any comma
/// belonging to a nested sub-polynomial is never the last comma in the
/// substring.
fn find_mono_comma(inner: &str) -> Option<usize> {
    let bytes = inner.as_bytes();
    let mut depth = 0i64;
    let mut last = None;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => depth -= 1,
            b',' if depth == 0 => last = Some(i),
            _ => {}
        }
    }
    last
}

fn build_poly(s: &str, max_nesting_depth: usize, depth: usize) -> Result<Poly, CalcError> {
    if depth > max_nesting_depth {
        return Err(CalcError::WrongPoly);
    }
    let monomials = split_top_level_monomials(s)
        .into_iter()
        .map(|m| build_mono(m, max_nesting_depth, depth))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(from_monomials(monomials))
}

fn build_mono(s: &str, max_nesting_depth: usize, depth: usize) -> Result<Mono, CalcError> {
    let inner = s
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or(CalcError::WrongPoly)?;
    let comma = find_mono_comma(inner).ok_or(CalcError::WrongPoly)?;
    let (coeff_part, exp_part) = (&inner[..comma], &inner[comma + 1..]);

    let exp = parse_exp(exp_part)?;
    let coeff = if coeff_part.as_bytes().first() == Some(&b'(') {
        build_poly(coeff_part, max_nesting_depth, depth + 1)?
    } else {
        Poly::Const(parse_coeff(coeff_part)?)
    };
    Ok(Mono::new(exp, coeff))
}
