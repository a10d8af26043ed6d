//! Hidden states of the BEMS tagging scheme.
//!
//! Every codepoint of a non-ASCII run is tagged with its role inside a word:
//!
//! | state    | code | meaning                              |
//! |----------|------|--------------------------------------|
//! | `Begin`  | 0    | first codepoint of a multi-char word |
//! | `End`    | 1    | last codepoint of a multi-char word  |
//! | `Middle` | 2    | interior codepoint                   |
//! | `Single` | 3    | one-codepoint word                   |
//!
//! The codes are not arbitrary: word-terminating states (`End`, `Single`) are
//! odd, so a boundary test is `code & 1 == 1`. The code order is also the
//! enumeration order of every state loop in the decoder, which fixes how
//! ties between equally likely predecessors are broken.

use std::fmt;

/// Number of hidden states.
pub const STATE_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum HiddenState {
    Begin = 0,
    End = 1,
    Middle = 2,
    Single = 3,
}

impl HiddenState {
    /// All states in ascending code order (B, E, M, S).
    pub const ALL: [HiddenState; STATE_COUNT] = [
        HiddenState::Begin,
        HiddenState::End,
        HiddenState::Middle,
        HiddenState::Single,
    ];

    #[inline(always)]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(HiddenState::Begin),
            1 => Some(HiddenState::End),
            2 => Some(HiddenState::Middle),
            3 => Some(HiddenState::Single),
            _ => None,
        }
    }

    /// `true` for `End` and `Single`: a word boundary follows this position.
    #[inline(always)]
    pub const fn ends_word(self) -> bool {
        self.code() & 1 == 1
    }

    /// Single-letter tag as used in trained model files.
    pub const fn tag(self) -> char {
        match self {
            HiddenState::Begin => 'B',
            HiddenState::End => 'E',
            HiddenState::Middle => 'M',
            HiddenState::Single => 'S',
        }
    }

    pub const fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'B' => Some(HiddenState::Begin),
            'E' => Some(HiddenState::End),
            'M' => Some(HiddenState::Middle),
            'S' => Some(HiddenState::Single),
            _ => None,
        }
    }
}

impl fmt::Display for HiddenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
