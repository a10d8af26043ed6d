//! Run classifier: splits a codepoint span into ASCII tokens (rule matched)
//! and non-ASCII runs (Viterbi decoded), in source order.

use crate::{
    model::ProbabilityModel,
    rules,
    viterbi::{self, DecodeError},
};

/// Codepoints below this go through the lexical rules.
pub const ASCII_LIMIT: u32 = 0x80;

#[inline(always)]
pub const fn is_rule_codepoint(c: char) -> bool {
    (c as u32) < ASCII_LIMIT
}

/// Tokenize `span` into sub-slices of itself.
pub fn split_runs<'a, M>(
    span: &'a [char],
    model: &M,
    floor: f64,
) -> Result<Vec<&'a [char]>, DecodeError>
where
    M: ProbabilityModel + ?Sized,
{
    let mut out = Vec::with_capacity(span.len());
    split_runs_into(span, model, floor, &mut out)?;
    Ok(out)
}

/// Like [`split_runs`], appending to `out`. On error `out` may hold the
/// tokens produced before the failing run.
pub fn split_runs_into<'a, M>(
    span: &'a [char],
    model: &M,
    floor: f64,
    out: &mut Vec<&'a [char]>,
) -> Result<(), DecodeError>
where
    M: ProbabilityModel + ?Sized,
{
    let mut left = 0;
    let mut right = 0;
    while right < span.len() {
        if !is_rule_codepoint(span[right]) {
            right += 1;
            continue;
        }
        if left != right {
            viterbi::cut(&span[left..right], model, floor, out)?;
        }
        left = right;
        right += rules::ascii_run(&span[left..]);
        out.push(&span[left..right]);
        left = right;
    }
    if left != right {
        viterbi::cut(&span[left..right], model, floor, out)?;
    }
    Ok(())
}
