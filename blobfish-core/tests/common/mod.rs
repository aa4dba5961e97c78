//! Shared fixtures for the blobfish-core integration suites.

use blobfish_core::{MaskColor, MaskSource, MaskSourceError};

/// [`MaskSource`] backed by rows of `#` (foreground) and `.` (background).
#[derive(Clone, Debug)]
pub struct TextMask {
    name: &'static str,
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl TextMask {
    /// Builds a mask from equal-length rows, `#` marking foreground pixels.
    #[must_use]
    pub fn from_rows(name: &'static str, rows: &[&str]) -> Self {
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
    #[must_use]
    pub fn empty(name: &'static str) -> Self {
        Self {
            name,
            width: 0,
            height: 0,
            cells: Vec::new(),
        }
    }
}

impl MaskSource for TextMask {
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
