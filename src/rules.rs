//! Deterministic longest-match rules for ASCII runs.
//!
//! Each rule takes the span starting at the current position and returns how
//! many codepoints it consumed. `0` means the rule does not apply.

/// One ASCII letter followed by any number of ASCII letters or digits.
#[inline]
pub fn sequential_letters(span: &[char]) -> usize {
    match span.first() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return 0,
    }
    1 + span[1..]
        .iter()
        .take_while(|c| c.is_ascii_alphanumeric())
        .count()
}

/// One ASCII digit followed by any number of ASCII digits or `.`.
/// `1.2.3` is accepted as a single run; no decimal validation.
#[inline]
pub fn numbers(span: &[char]) -> usize {
    match span.first() {
        Some(c) if c.is_ascii_digit() => {}
        _ => return 0,
    }
    1 + span[1..]
        .iter()
        .take_while(|&&c| c.is_ascii_digit() || c == '.')
        .count()
}

/// Length of the next ASCII token: the letter rule, else the number rule,
/// else exactly one codepoint. Only an empty span yields `0`.
#[inline]
pub fn ascii_run(span: &[char]) -> usize {
    if span.is_empty() {
        return 0;
    }
    let n = sequential_letters(span);
    if n > 0 {
        return n;
    }
    let n = numbers(span);
    if n > 0 {
        return n;
    }
    1
}
