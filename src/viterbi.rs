//! Viterbi decoding of a non-ASCII run into BEMS states, and word
//! reconstruction from the decoded path.
//!
//! Predecessors are always visited in [`HiddenState::ALL`] order (B, E, M, S)
//! and only a strictly greater weight replaces the running best, so among
//! equally likely predecessors the one with the lowest code wins. The final
//! state is restricted to `End` or `Single`; on an exact tie `End` wins.

use crate::{
    lattice::{Cell, Lattice},
    model::ProbabilityModel,
    state::HiddenState::{self, Begin, End, Single},
};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::{error, trace};

/// Decoded state path. Most non-ASCII runs are short clauses, so the path
/// usually stays inline.
pub type StatePath = SmallVec<[HiddenState; 32]>;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("viterbi decode called on an empty span")]
    EmptySpan,
}

/// Most likely hidden-state sequence for `span`. The result has exactly
/// `span.len()` states and always ends in `End` or `Single`.
pub fn decode<M>(span: &[char], model: &M, floor: f64) -> Result<StatePath, DecodeError>
where
    M: ProbabilityModel + ?Sized,
{
    let Some(&first) = span.first() else {
        error!("viterbi decode rejected an empty span");
        return Err(DecodeError::EmptySpan);
    };

    let mut lattice = Lattice::new(span.len());

    for y in HiddenState::ALL {
        lattice[(0, y)] = Cell {
            weight: model.start(y) + model.emission(y, first, floor),
            prev: None,
        };
    }

    for (x, &c) in span.iter().enumerate().skip(1) {
        for y in HiddenState::ALL {
            let emit = model.emission(y, c, floor);
            let column = lattice.column(x - 1);

            let mut best = Cell {
                weight: column[Begin.index()].weight + model.transition(Begin, y) + emit,
                prev: Some(Begin),
            };
            for p in HiddenState::ALL.into_iter().skip(1) {
                let weight = column[p.index()].weight + model.transition(p, y) + emit;
                if weight > best.weight {
                    best = Cell {
                        weight,
                        prev: Some(p),
                    };
                }
            }
            lattice[(x, y)] = best;
        }
    }

    let last = span.len() - 1;
    let mut state = if lattice[(last, End)].weight >= lattice[(last, Single)].weight {
        End
    } else {
        Single
    };

    let mut path: StatePath = SmallVec::from_elem(Begin, span.len());
    for x in (0..span.len()).rev() {
        path[x] = state;
        if let Some(prev) = lattice[(x, state)].prev {
            state = prev;
        }
    }

    trace!(
        len = span.len(),
        terminal = %path[last],
        weight = lattice[(last, path[last])].weight,
        "decoded span"
    );
    Ok(path)
}

/// Split `span` after every position whose state ends a word (odd code).
///
/// `states` is paired with `span` position by position. A tail not closed by
/// `End`/`Single` is still emitted, so the output always partitions `span`;
/// paths from [`decode`] never have such a tail.
pub fn split_words<'a>(span: &'a [char], states: &[HiddenState], out: &mut Vec<&'a [char]>) {
    debug_assert_eq!(span.len(), states.len());
    let mut left = 0;
    for (i, state) in states.iter().enumerate().take(span.len()) {
        if state.code() % 2 == 1 {
            out.push(&span[left..=i]);
            left = i + 1;
        }
    }
    if left < span.len() {
        out.push(&span[left..]);
    }
}

/// Decode `span` and append its words to `out`.
pub fn cut<'a, M>(
    span: &'a [char],
    model: &M,
    floor: f64,
    out: &mut Vec<&'a [char]>,
) -> Result<(), DecodeError>
where
    M: ProbabilityModel + ?Sized,
{
    let states = decode(span, model, floor)?;
    split_words(span, &states, out);
    Ok(())
}
