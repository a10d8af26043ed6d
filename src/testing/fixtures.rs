//! A tiny hand-trained BEMS model.
//!
//! Transition and start values are rounded from a real jieba-style model.
//! Every emitting codepoint is seen in exactly one state, so any text built
//! from the words below has a single finite-weight path.
//!
//! | word     | tags  |
//! |----------|-------|
//! | 我 爱 的 | S     |
//! | 北京     | B E   |
//! | 中国     | B E   |
//! | 人民     | B E   |
//! | 天安门   | B M E |

use crate::{
    model::{HmmModel, HmmModelBuilder},
    state::HiddenState::{Begin, End, Middle, Single},
};

pub fn toy_model_builder() -> HmmModelBuilder {
    HmmModel::builder()
        .start(Begin, -0.26)
        .start(Single, -1.46)
        .transition(Begin, End, -0.51)
        .transition(Begin, Middle, -0.92)
        .transition(End, Begin, -0.59)
        .transition(End, Single, -0.81)
        .transition(Middle, End, -0.33)
        .transition(Middle, Middle, -1.26)
        .transition(Single, Begin, -0.72)
        .transition(Single, Single, -0.67)
        .emissions(Begin, [('北', -2.0), ('中', -1.8), ('人', -2.1), ('天', -2.4)])
        .emissions(End, [('京', -2.2), ('国', -1.7), ('民', -2.3), ('门', -2.5)])
        .emissions(Middle, [('安', -3.0)])
        .emissions(Single, [('我', -1.2), ('爱', -2.6), ('的', -0.9)])
}

pub fn toy_model() -> HmmModel {
    toy_model_builder()
        .build()
        .expect("toy model tables are valid log-probabilities")
}

pub fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}
