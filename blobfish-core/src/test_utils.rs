//! Shared test utilities for `blobfish-core`.

use blobfish_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{
    error::MaskSourceError,
    source::{MaskColor, MaskSource},
};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `BLOBFISH_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// [`MaskSource`] backed by rows of `#` (foreground) and `.` (background).
#[derive(Clone, Debug)]
pub(crate) struct BitmapMask {
    name: &'static str,
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl BitmapMask {
    /// Builds a mask from equal-length rows, `#` marking foreground pixels.
    pub(crate) fn from_rows(name: &'static str, rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            assert_eq!(row.chars().count(), width, "rows must have equal length");
            cells.extend(row.chars().map(|cell| cell == '#'));
        }
        Self {
            name,
            width,
            height,
            cells,
        }
    }

    /// Builds a zero-area mask.
    pub(crate) fn empty(name: &'static str) -> Self {
        Self {
            name,
            width: 0,
            height: 0,
            cells: Vec::new(),
        }
    }
}

impl MaskSource for BitmapMask {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn name(&self) -> &str {
        self.name
    }

    fn color_at(&self, x: usize, y: usize) -> Result<MaskColor, MaskSourceError> {
        if x >= self.width || y >= self.height {
            return Err(MaskSourceError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(if self.cells[y * self.width + x] {
            MaskColor::Foreground
        } else {
            MaskColor::Background
        })
    }
}
