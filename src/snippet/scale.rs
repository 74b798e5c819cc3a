//! Row-major grid placement for rendered snippet variants.

use crate::css::Dimensions;
use crate::error::{Error, Result};

/// Spacing around each item in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    pub top: u32,
    pub left: u32,
}

/// Row-major layout for `count` fixed-size items inside a bounded width.
///
/// All derived values are computed once at construction from the four
/// inputs, so `top`/`left`/`height` are pure and idempotent.
#[derive(Debug, Clone, Copy)]
pub struct RowScale {
    count: usize,
    per_row: usize,
    offset_top: u32,
    offset_left: u32,
}

impl RowScale {
    pub fn new(
        count: usize,
        item: Dimensions,
        parent_width: u32,
        padding: Padding,
    ) -> Result<Self> {
        let slot_width = item.width + 2 * padding.left;
        if slot_width == 0 || parent_width / slot_width == 0 {
            return Err(Error::Configuration(format!(
                "parent width {parent_width} cannot fit an item {} wide with {} padding",
                item.width, padding.left
            )));
        }
        let per_row = (parent_width / slot_width) as usize;

        Ok(RowScale {
            count,
            per_row,
            offset_top: item.height + padding.top,
            offset_left: parent_width / per_row as u32 + padding.left,
        })
    }

    /// Vertical offset of the item at `index`.
    pub fn top(&self, index: usize) -> u32 {
        (index / self.per_row) as u32 * self.offset_top
    }

    /// Horizontal offset of the item at `index`.
    pub fn left(&self, index: usize) -> u32 {
        (index % self.per_row) as u32 * self.offset_left
    }

    /// Total container height for all rows.
    pub fn height(&self) -> u32 {
        self.offset_top * self.count.div_ceil(self.per_row) as u32
    }

    #[cfg(test)]
    pub(crate) fn per_row(&self) -> usize {
        self.per_row
    }
}
