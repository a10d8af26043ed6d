#[cfg(test)]
mod unit_tests {

    use crate::{
        HiddenState, HmmSegmenter, MIN_LOG_PROB, ModelError, SegmentError,
        testing::fixtures::{chars, toy_model},
    };

    #[test]
    fn empty_input_is_rejected() {
        let model = toy_model();
        let seg = HmmSegmenter::new(&model);
        assert_eq!(seg.segment("").unwrap_err(), SegmentError::EmptyInput);
        assert_eq!(seg.segment_chars(&[]).unwrap_err(), SegmentError::EmptyInput);
        assert_eq!(seg.segment_bytes(b"").unwrap_err(), SegmentError::EmptyInput);
        assert_eq!(seg.decode_states("").unwrap_err(), SegmentError::EmptyInput);
    }

    #[test]
    fn letter_run_keeps_trailing_digits() {
        let model = toy_model();
        let seg = HmmSegmenter::new(&model);
        assert_eq!(seg.segment("hello123world").unwrap(), ["hello123world"]);
        assert_eq!(seg.segment("hello123 world").unwrap(), ["hello123", " ", "world"]);
    }

    #[test]
    fn number_then_letters() {
        let model = toy_model();
        let seg = HmmSegmenter::new(&model);
        assert_eq!(seg.segment("3.14test").unwrap(), ["3.14", "test"]);
        assert_eq!(seg.segment("1.2.3").unwrap(), ["1.2.3"]);
    }

    #[test]
    fn default_floor_is_min_log_prob() {
        let model = toy_model();
        let seg = HmmSegmenter::new(&model);
        assert_eq!(seg.floor(), MIN_LOG_PROB);
        let seg = HmmSegmenter::builder(&model).build().unwrap();
        assert_eq!(seg.floor(), MIN_LOG_PROB);
    }

    #[test]
    fn builder_rejects_non_finite_floor() {
        let model = toy_model();
        for floor in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = HmmSegmenter::builder(&model).floor(floor).build().unwrap_err();
            assert!(matches!(err, ModelError::InvalidFloor(_)));
        }
        let seg = HmmSegmenter::builder(&model).floor(-1e9).build().unwrap();
        assert_eq!(seg.floor(), -1e9);
    }

    #[test]
    fn segment_into_appends() {
        let model = toy_model();
        let seg = HmmSegmenter::new(&model);
        let mut out = vec!["prefix".to_string()];
        seg.segment_into("中国", &mut out).unwrap();
        seg.segment_into("abc", &mut out).unwrap();
        assert_eq!(out, ["prefix", "中国", "abc"]);
    }

    #[test]
    fn segment_into_leaves_output_untouched_on_error() {
        let model = toy_model();
        let seg = HmmSegmenter::new(&model);
        let mut out = vec!["keep".to_string()];
        assert!(seg.segment_into("", &mut out).is_err());
        assert_eq!(out, ["keep"]);
    }

    #[test]
    fn invalid_utf8_bytes() {
        let model = toy_model();
        let seg = HmmSegmenter::new(&model);
        let err = seg.segment_bytes(b"\xE4\xB8abc").unwrap_err();
        assert!(matches!(err, SegmentError::InvalidUtf8(_)));
        assert_eq!(seg.segment_bytes("北京abc".as_bytes()).unwrap(), ["北京", "abc"]);
    }

    #[test]
    fn segment_chars_matches_segment() {
        let model = toy_model();
        let seg = HmmSegmenter::new(&model);
        let words = seg.segment_chars(&chars("我爱北京")).unwrap();
        assert_eq!(words, [chars("我"), chars("爱"), chars("北京")]);
    }

    #[test]
    fn decode_states_ignores_ascii_rules() {
        let model = toy_model();
        let seg = HmmSegmenter::new(&model);
        let path = seg.decode_states("天安门").unwrap();
        assert_eq!(
            path.as_slice(),
            &[HiddenState::Begin, HiddenState::Middle, HiddenState::End]
        );
        let path = seg.decode_states("a1").unwrap();
        assert_eq!(path.len(), 2);
        assert!(path[1].ends_word());
    }
}
