//! Input-line classification.
//!
//! Mirrors `ReadInput`'s dispatch in the reference implementation's
//! `read_input.c`: the *first* character of a line decides whether it is a
//! comment, blank, command, or polynomial literal. Line numbers start at 1
//! and count every line, including comments and blanks.

/// What a raw input line turned out to be, after looking only at its first
/// character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A `#`-prefixed comment; its contents are ignored entirely.
    Comment,
    /// A line with no content before the newline.
    Blank,
    /// A line beginning with an ASCII letter — a command, with its text.
    Command(&'a str),
    /// Any other line — a polynomial literal, with its text.
    PolyLiteral(&'a str),
}

/// Classifies one line (without its trailing newline) by its first
/// character.
#[must_use]
pub fn classify(line: &str) -> LineKind<'_> {
    match line.as_bytes().first() {
        None => LineKind::Blank,
        Some(b'#') => LineKind::Comment,
        Some(b) if b.is_ascii_alphabetic() => LineKind::Command(line),
        Some(_) => LineKind::PolyLiteral(line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_line_is_blank() {
        assert_eq!(classify(""), LineKind::Blank);
    }

    #[test]
    fn hash_prefixed_line_is_comment() {
        assert_eq!(classify("# a comment"), LineKind::Comment);
    }

    #[test]
    fn letter_prefixed_line_is_command() {
        assert_eq!(classify("PRINT"), LineKind::Command("PRINT"));
    }

    #[test]
    fn other_first_char_is_poly_literal() {
        assert_eq!(classify("(1,0)"), LineKind::PolyLiteral("(1,0)"));
        assert_eq!(classify("-5"), LineKind::PolyLiteral("-5"));
    }
}
