//! Segmenter facade.
//!
//! ```
//! use hmmseg::{HiddenState, HmmModel, HmmSegmenter};
//!
//! let model = HmmModel::builder()
//!     .start(HiddenState::Begin, -0.26)
//!     .transition(HiddenState::Begin, HiddenState::End, -0.51)
//!     .emission(HiddenState::Begin, '北', -1.0)
//!     .emission(HiddenState::End, '京', -1.0)
//!     .build()?;
//!
//! let seg = HmmSegmenter::new(&model);
//! assert_eq!(seg.segment("北京2024")?, ["北京", "2024"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::{
    classify, codec,
    model::{MIN_LOG_PROB, ModelError, ProbabilityModel},
    viterbi::{self, DecodeError, StatePath},
};
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SegmentError {
    #[error("cannot segment empty input")]
    EmptyInput,

    #[error("input is not valid utf-8: {0}")]
    InvalidUtf8(String),

    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),
}

/// HMM word segmenter over a borrowed or shared [`ProbabilityModel`].
///
/// `M` is typically `&HmmModel` or `Arc<HmmModel>`; the segmenter never
/// mutates it, so one model can back many segmenters on many threads.
#[derive(Debug, Clone)]
pub struct HmmSegmenter<M> {
    model: M,
    floor: f64,
}

impl<M: ProbabilityModel> HmmSegmenter<M> {
    /// Segmenter with the default floor ([`MIN_LOG_PROB`]).
    pub fn new(model: M) -> Self {
        Self {
            model,
            floor: MIN_LOG_PROB,
        }
    }

    pub fn builder(model: M) -> HmmSegmenterBuilder<M> {
        HmmSegmenterBuilder {
            model,
            floor: MIN_LOG_PROB,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Split `text` into words. Fails on empty input.
    pub fn segment(&self, text: &str) -> Result<Vec<String>, SegmentError> {
        let mut out = Vec::new();
        self.segment_into(text, &mut out)?;
        Ok(out)
    }

    /// Append the words of `text` to `out`. On error `out` is unchanged.
    pub fn segment_into(&self, text: &str, out: &mut Vec<String>) -> Result<(), SegmentError> {
        let cps = codec::decode_str(text);
        let words = self.tokenize(&cps)?;
        out.reserve(words.len());
        out.extend(words.into_iter().map(codec::encode));
        Ok(())
    }

    /// Validate `bytes` as UTF-8, then segment.
    pub fn segment_bytes(&self, bytes: &[u8]) -> Result<Vec<String>, SegmentError> {
        let text = codec::validate(bytes).map_err(SegmentError::InvalidUtf8)?;
        self.segment(text)
    }

    /// Codepoint-level entry point: words as owned codepoint vectors.
    pub fn segment_chars(&self, cps: &[char]) -> Result<Vec<Vec<char>>, SegmentError> {
        Ok(self.tokenize(cps)?.into_iter().map(<[char]>::to_vec).collect())
    }

    /// Words as sub-slices of `cps`.
    pub fn tokenize<'a>(&self, cps: &'a [char]) -> Result<Vec<&'a [char]>, SegmentError> {
        if cps.is_empty() {
            return Err(SegmentError::EmptyInput);
        }
        let words = classify::split_runs(cps, &self.model, self.floor).inspect_err(|e| {
            error!(len = cps.len(), error = %e, "segmentation aborted");
        })?;
        debug!(len = cps.len(), words = words.len(), "segmented");
        Ok(words)
    }

    /// Hidden-state path of `text` decoded as a single run, ignoring the
    /// ASCII rules.
    pub fn decode_states(&self, text: &str) -> Result<StatePath, SegmentError> {
        let cps = codec::decode_str(text);
        if cps.is_empty() {
            return Err(SegmentError::EmptyInput);
        }
        Ok(viterbi::decode(&cps, &self.model, self.floor)?)
    }
}

/// Configuration for [`HmmSegmenter`].
#[derive(Debug, Clone)]
pub struct HmmSegmenterBuilder<M> {
    model: M,
    floor: f64,
}

impl<M: ProbabilityModel> HmmSegmenterBuilder<M> {
    /// Log-probability substituted for codepoints a state never emitted.
    pub fn floor(mut self, floor: f64) -> Self {
        self.floor = floor;
        self
    }

    pub fn build(self) -> Result<HmmSegmenter<M>, ModelError> {
        if !self.floor.is_finite() {
            return Err(ModelError::InvalidFloor(self.floor));
        }
        Ok(HmmSegmenter {
            model: self.model,
            floor: self.floor,
        })
    }
}
