pub mod classify;
pub mod codec;
pub mod lattice;
pub mod model;
pub mod rules;
pub mod segmenter;
pub mod state;
pub mod viterbi;

#[cfg(test)]
pub(crate) mod testing;

pub use model::{HmmModel, HmmModelBuilder, MIN_LOG_PROB, ModelError, ProbabilityModel};
pub use segmenter::{HmmSegmenter, HmmSegmenterBuilder, SegmentError};
pub use state::HiddenState;
pub use viterbi::{DecodeError, StatePath};
