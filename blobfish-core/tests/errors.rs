//! Error-surface tests for the public core API.

mod common;

use blobfish_core::{
    DetectorBuilder, DetectorError, DisjointForest, ForestError, MaskColor, MaskSource,
    MaskSourceError, MaskSourceErrorCode,
};
use common::TextMask;

#[test]
fn find_with_id_equal_to_len_is_out_of_range() {
    let mut forest = DisjointForest::new(6);
    let err = forest.find(6).expect_err("id == len is out of range");
    assert_eq!(err, ForestError::OutOfRange { index: 6, len: 6 });
    assert_eq!(err.code().as_str(), "FOREST_OUT_OF_RANGE");
}

#[test]
fn union_with_a_non_root_is_rejected() {
    let mut forest = DisjointForest::new(2);
    let root = forest.union(0, 1).expect("both are roots");
    let child = 1 - root;
    let err = forest.union(root, child).expect_err("child is not a root");
    assert_eq!(err, ForestError::NotARoot { id: child });
    assert_eq!(err.code().as_str(), "FOREST_NOT_A_ROOT");
}

#[test]
fn out_of_bounds_mask_reads_are_reported_with_the_source_name() {
    /// Claims a 2x1 area but fails every read.
    struct Broken;

    impl MaskSource for Broken {
        fn width(&self) -> usize {
            2
        }
        fn height(&self) -> usize {
            1
        }
        fn name(&self) -> &str {
            "broken"
        }
        fn color_at(&self, x: usize, y: usize) -> Result<MaskColor, MaskSourceError> {
            Err(MaskSourceError::OutOfBounds {
                x,
                y,
                width: 0,
                height: 0,
            })
        }
    }

    let detector = DetectorBuilder::new().build().expect("valid blob count");
    let err = detector.run(&Broken).expect_err("reads fail");
    match &err {
        DetectorError::Mask { mask, .. } => assert_eq!(mask.as_ref(), "broken"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(
        err.mask_source_code(),
        Some(MaskSourceErrorCode::OutOfBounds)
    );
}

#[test]
fn successful_runs_report_no_error_codes() {
    let detector = DetectorBuilder::new().build().expect("valid blob count");
    let detection = detector
        .run(&TextMask::from_rows("fine", &["#"]))
        .expect("run succeeds");
    assert_eq!(detection.blob_count(), 1);
}
