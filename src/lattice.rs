//! Decode lattice: an `x_len × STATE_COUNT` grid of (best weight, best
//! predecessor) cells over a flat buffer. Row-major by position, so one
//! column of the Viterbi recursion is a contiguous slice.

use crate::state::{HiddenState, STATE_COUNT};
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub weight: f64,
    /// `None` only in position 0.
    pub prev: Option<HiddenState>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            weight: f64::NEG_INFINITY,
            prev: None,
        }
    }
}

#[derive(Debug)]
pub struct Lattice {
    cells: Vec<Cell>,
    x_len: usize,
}

impl Lattice {
    pub fn new(x_len: usize) -> Self {
        Self {
            cells: vec![Cell::default(); x_len * STATE_COUNT],
            x_len,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.x_len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.x_len == 0
    }

    #[inline(always)]
    fn offset(&self, x: usize, y: HiddenState) -> usize {
        debug_assert!(x < self.x_len, "lattice position {x} out of {}", self.x_len);
        x * STATE_COUNT + y.index()
    }

    /// All cells at position `x`, indexed by state code.
    #[inline]
    pub fn column(&self, x: usize) -> &[Cell] {
        &self.cells[x * STATE_COUNT..(x + 1) * STATE_COUNT]
    }
}

impl Index<(usize, HiddenState)> for Lattice {
    type Output = Cell;

    #[inline(always)]
    fn index(&self, (x, y): (usize, HiddenState)) -> &Cell {
        &self.cells[self.offset(x, y)]
    }
}

impl IndexMut<(usize, HiddenState)> for Lattice {
    #[inline(always)]
    fn index_mut(&mut self, (x, y): (usize, HiddenState)) -> &mut Cell {
        let offset = self.offset(x, y);
        &mut self.cells[offset]
    }
}
