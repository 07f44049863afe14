//! Row packing, aspect fitting and width justification.
//!
//! A row is filled one item at a time. Its height only ever shrinks while it
//! fills: a new item shorter than the row pulls the whole row down to its own
//! height, so nothing is ever scaled past its native resolution during
//! packing. Once the row's items are wider than the container, the grid
//! closes it and [`Row::render`] scales the row down so items plus gaps span
//! the container exactly.

use log::trace;
use smallvec::SmallVec;

use crate::fraction::{Fraction, scale_by};
use crate::item::{Item, ItemId, Size};
use crate::placement::Placement;

/// A horizontal band of items sharing one height.
#[derive(Debug, Clone)]
pub struct Row {
    index: usize,
    width: u32,
    /// Zero means the height has not been established yet.
    height: u32,
    padding: u32,
    /// Sum of display widths, gaps excluded. Wider than a pixel count so
    /// several very wide items cannot overflow it.
    used_width: u64,
    items: SmallVec<[Item; 8]>,
}

/// Geometry produced by rendering a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub index: usize,
    pub top: u32,
    /// Final (justified) row height; zero for an empty row.
    pub height: u32,
    pub placements: Vec<Placement>,
}

impl Row {
    /// Create an empty row that must fit within `width`.
    pub fn new(index: usize, width: u32, padding: u32) -> Self {
        Self {
            index,
            width,
            height: 0,
            padding,
            used_width: 0,
            items: SmallVec::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Row height during packing (before justification).
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn used_width(&self) -> u64 {
        self.used_width
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item, shrinking the row if the item is shorter than it.
    pub fn create_item(&mut self, id: ItemId, intrinsic: Size) {
        let mut item = Item::new(id, intrinsic);

        let item_height = intrinsic.height;
        if item_height > 0 && (self.height == 0 || item_height < self.height) {
            // Shrink the row to avoid upscaling the new item.
            self.adjust_row_height(item_height);
        } else {
            self.fit_item(&mut item);
        }

        trace!(
            "row {}: {} {}x{} displayed at {}x{}",
            self.index,
            id,
            intrinsic.width,
            intrinsic.height,
            item.display.width,
            item.display.height
        );

        self.used_width += u64::from(item.display.width);
        self.items.push(item);
    }

    /// Width left before the row is full. Negative once it overflows.
    pub fn available_width(&self) -> i64 {
        let used = i64::try_from(self.used_width).unwrap_or(i64::MAX);
        i64::from(self.width).saturating_sub(used)
    }

    /// True once the packed items span the whole row width.
    pub fn is_full(&self) -> bool {
        self.available_width() <= 0
    }

    /// Scale `item` to the current row height.
    fn fit_item(&self, item: &mut Item) {
        item.aspect_fit(self.height);
    }

    /// Set the row height and refit every item already in the row.
    ///
    /// Items with an unknown intrinsic size keep their display size, but still
    /// count toward the used width.
    pub fn adjust_row_height(&mut self, height: u32) {
        trace!("row {}: height {} -> {}", self.index, self.height, height);
        self.height = height;

        for item in &mut self.items {
            item.aspect_fit(height);
        }
        self.used_width = self
            .items
            .iter()
            .map(|item| u64::from(item.display.width))
            .sum();
    }

    /// Justify the row at vertical offset `top`.
    ///
    /// Overflowing rows are scaled down so items and gaps span the row width
    /// exactly, with the last item absorbing rounding error. Rows that fall
    /// short are left as packed; they are never stretched.
    pub fn render(&self, top: u32) -> RenderedRow {
        let Some(last) = self.items.len().checked_sub(1) else {
            return RenderedRow {
                index: self.index,
                top,
                height: 0,
                placements: Vec::new(),
            };
        };

        // Reserve room for the gaps between items.
        let gaps = self.padding.saturating_mul(last as u32);
        let target_width = self.width.saturating_sub(gaps);

        let adjustment = if u64::from(target_width) < self.used_width {
            Fraction::new(target_width as i128, self.used_width as i128)
        } else {
            Fraction::ONE
        };
        let height = scale_by(self.height, adjustment);

        let mut placements = Vec::with_capacity(self.items.len());
        let mut left: u32 = 0;

        for (i, item) in self.items.iter().enumerate() {
            let size = if adjustment.is_one() {
                item.display
            } else if i < last {
                Size::new(scale_by(item.display.width, adjustment), height)
            } else {
                // Whatever is left, so rounding never leaves a ragged edge.
                Size::new(self.width.saturating_sub(left), height)
            };

            placements.push(Placement {
                id: item.id,
                row: self.index,
                top,
                left,
                width: size.width,
                height: size.height,
            });

            left = left
                .saturating_add(size.width)
                .saturating_add(self.padding);
        }

        RenderedRow {
            index: self.index,
            top,
            height,
            placements,
        }
    }
}
