//! Probability model accessor.
//!
//! The decoder only ever *reads* a model through [`ProbabilityModel`]. How the
//! tables got into memory (a trained file, a static table, a test fixture) is
//! the caller's business; the caller also owns the model and decides how long
//! it lives. Blanket impls for `&M`, `Box<M>` and `Arc<M>` let a single model
//! be shared by any number of segmenters and threads.

use crate::state::{HiddenState, STATE_COUNT};
use std::{collections::HashMap, sync::Arc};
use thiserror::Error;

/// Log-probability used by trained tables for "never happens".
/// Also the default floor for unseen emissions.
pub const MIN_LOG_PROB: f64 = -3.14e100;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("invalid {table} log-probability for state `{state}`: {value}")]
    NotALogProbability {
        table: &'static str,
        state: HiddenState,
        value: f64,
    },

    #[error("floor must be a finite log-probability, got {0}")]
    InvalidFloor(f64),
}

/// Read-only view of a trained HMM. All values are natural logarithms.
pub trait ProbabilityModel: Send + Sync {
    fn start(&self, state: HiddenState) -> f64;

    fn transition(&self, prev: HiddenState, next: HiddenState) -> f64;

    /// Log-probability of observing `c` in `state`, or `floor` if `c` was
    /// never seen in that state during training.
    fn emission(&self, state: HiddenState, c: char, floor: f64) -> f64;
}

impl<M: ProbabilityModel + ?Sized> ProbabilityModel for &M {
    #[inline(always)]
    fn start(&self, state: HiddenState) -> f64 {
        (**self).start(state)
    }
    #[inline(always)]
    fn transition(&self, prev: HiddenState, next: HiddenState) -> f64 {
        (**self).transition(prev, next)
    }
    #[inline(always)]
    fn emission(&self, state: HiddenState, c: char, floor: f64) -> f64 {
        (**self).emission(state, c, floor)
    }
}

impl<M: ProbabilityModel + ?Sized> ProbabilityModel for Box<M> {
    #[inline(always)]
    fn start(&self, state: HiddenState) -> f64 {
        (**self).start(state)
    }
    #[inline(always)]
    fn transition(&self, prev: HiddenState, next: HiddenState) -> f64 {
        (**self).transition(prev, next)
    }
    #[inline(always)]
    fn emission(&self, state: HiddenState, c: char, floor: f64) -> f64 {
        (**self).emission(state, c, floor)
    }
}

impl<M: ProbabilityModel + ?Sized> ProbabilityModel for Arc<M> {
    #[inline(always)]
    fn start(&self, state: HiddenState) -> f64 {
        (**self).start(state)
    }
    #[inline(always)]
    fn transition(&self, prev: HiddenState, next: HiddenState) -> f64 {
        (**self).transition(prev, next)
    }
    #[inline(always)]
    fn emission(&self, state: HiddenState, c: char, floor: f64) -> f64 {
        (**self).emission(state, c, floor)
    }
}

/// In-memory BEMS model: dense start/transition tables and one sparse
/// emission map per state.
#[derive(Debug, Clone)]
pub struct HmmModel {
    start: [f64; STATE_COUNT],
    transition: [[f64; STATE_COUNT]; STATE_COUNT],
    emission: [HashMap<char, f64>; STATE_COUNT],
}

impl HmmModel {
    pub fn builder() -> HmmModelBuilder {
        HmmModelBuilder::default()
    }

    /// Number of distinct codepoints with a trained emission in `state`.
    pub fn emission_len(&self, state: HiddenState) -> usize {
        self.emission[state.index()].len()
    }
}

impl ProbabilityModel for HmmModel {
    #[inline(always)]
    fn start(&self, state: HiddenState) -> f64 {
        self.start[state.index()]
    }

    #[inline(always)]
    fn transition(&self, prev: HiddenState, next: HiddenState) -> f64 {
        self.transition[prev.index()][next.index()]
    }

    #[inline]
    fn emission(&self, state: HiddenState, c: char, floor: f64) -> f64 {
        self.emission[state.index()]
            .get(&c)
            .copied()
            .unwrap_or(floor)
    }
}

/// Builder for [`HmmModel`]. Unset start and transition entries default to
/// [`MIN_LOG_PROB`]; unset emissions fall through to the caller's floor.
#[derive(Debug, Clone)]
pub struct HmmModelBuilder {
    start: [f64; STATE_COUNT],
    transition: [[f64; STATE_COUNT]; STATE_COUNT],
    emission: [HashMap<char, f64>; STATE_COUNT],
}

impl Default for HmmModelBuilder {
    fn default() -> Self {
        Self {
            start: [MIN_LOG_PROB; STATE_COUNT],
            transition: [[MIN_LOG_PROB; STATE_COUNT]; STATE_COUNT],
            emission: Default::default(),
        }
    }
}

impl HmmModelBuilder {
    pub fn start(mut self, state: HiddenState, log_prob: f64) -> Self {
        self.start[state.index()] = log_prob;
        self
    }

    pub fn transition(mut self, prev: HiddenState, next: HiddenState, log_prob: f64) -> Self {
        self.transition[prev.index()][next.index()] = log_prob;
        self
    }

    pub fn emission(mut self, state: HiddenState, c: char, log_prob: f64) -> Self {
        self.emission[state.index()].insert(c, log_prob);
        self
    }

    pub fn emissions<I>(mut self, state: HiddenState, entries: I) -> Self
    where
        I: IntoIterator<Item = (char, f64)>,
    {
        self.emission[state.index()].extend(entries);
        self
    }

    /// Validate every table entry and freeze the model.
    ///
    /// `NaN` and `+inf` are rejected; any other value, including `-inf`,
    /// is a legal log-probability.
    pub fn build(self) -> Result<HmmModel, ModelError> {
        for state in HiddenState::ALL {
            check("start", state, self.start[state.index()])?;
            for &value in &self.transition[state.index()] {
                check("transition", state, value)?;
            }
            for &value in self.emission[state.index()].values() {
                check("emission", state, value)?;
            }
        }
        Ok(HmmModel {
            start: self.start,
            transition: self.transition,
            emission: self.emission,
        })
    }
}

#[inline]
fn check(table: &'static str, state: HiddenState, value: f64) -> Result<(), ModelError> {
    if value.is_nan() || value == f64::INFINITY {
        return Err(ModelError::NotALogProbability {
            table,
            state,
            value,
        });
    }
    Ok(())
}
