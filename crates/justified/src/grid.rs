//! Row assignment and vertical stacking.

use log::{debug, trace};

use crate::item::{ItemId, Size};
use crate::placement::{Layout, RowMetrics};
use crate::row::Row;

/// An ordered stack of rows sharing one container width.
///
/// A grid is built once per layout pass: items are pushed in order, rows are
/// opened as earlier ones fill, and [`Grid::render`] produces the final
/// geometry. Relayout means building a new grid.
#[derive(Debug, Clone)]
pub struct Grid {
    width: u32,
    padding: u32,
    row_padding: u32,
    rows: Vec<Row>,
}

impl Grid {
    /// Create an empty grid. Rows are separated by the same `padding` as items.
    pub fn new(width: u32, padding: u32) -> Self {
        Self {
            width,
            padding,
            row_padding: padding,
            rows: Vec::new(),
        }
    }

    /// Use a different gap between rows than between items.
    pub fn with_row_padding(mut self, row_padding: u32) -> Self {
        self.row_padding = row_padding;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn padding(&self) -> u32 {
        self.padding
    }

    pub fn row_padding(&self) -> u32 {
        self.row_padding
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Append a new row and return it.
    ///
    /// The row's index is its position in the grid.
    pub fn create_row(&mut self) -> &mut Row {
        let index = self.rows.len();
        self.rows.push(Row::new(index, self.width, self.padding));
        &mut self.rows[index]
    }

    /// The row new items go into, created on first use.
    pub fn open_row(&mut self) -> &mut Row {
        if self.rows.is_empty() {
            return self.create_row();
        }
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    /// Add an item to the open row, opening the next row if it fills up.
    pub fn push_item(&mut self, id: ItemId, intrinsic: Size) {
        let width = self.width;
        let row = self.open_row();
        row.create_item(id, intrinsic);

        if row.is_full() {
            debug!(
                "row {} closed with {} items ({}px packed into {}px)",
                row.index(),
                row.len(),
                row.used_width(),
                width
            );
            self.create_row();
        }
    }

    /// Justify every row and stack them top to bottom.
    ///
    /// Empty rows take no space. Row padding only separates rendered rows,
    /// so the total height has no trailing gap. This differs from totals
    /// that add padding after every row: rows of 300 and 249 with padding 2
    /// total 551 here, not 553.
    pub fn render(&self) -> Layout {
        let mut layout = Layout::default();
        let mut top: u32 = 0;

        for row in self.rows.iter().filter(|row| !row.is_empty()) {
            if !layout.rows.is_empty() {
                top = top.saturating_add(self.row_padding);
            }

            let rendered = row.render(top);
            trace!(
                "row {} rendered at top {} with height {}",
                rendered.index, rendered.top, rendered.height
            );

            layout.rows.push(RowMetrics {
                index: rendered.index,
                top: rendered.top,
                height: rendered.height,
                item_count: rendered.placements.len(),
            });
            layout.placements.extend(rendered.placements);
            top = top.saturating_add(rendered.height);
        }

        layout.total_height = top;
        debug!(
            "grid rendered {} items in {} rows, total height {}",
            layout.placements.len(),
            layout.rows.len(),
            layout.total_height
        );
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_row_assigns_sequential_indices() {
        let mut grid = Grid::new(1000, 2);
        for expected in 0..4 {
            assert_eq!(grid.create_row().index(), expected);
        }
        assert_eq!(grid.rows().len(), 4);
    }

    #[test]
    fn open_row_creates_first_row_once() {
        let mut grid = Grid::new(1000, 2);
        grid.open_row();
        grid.open_row();
        assert_eq!(grid.rows().len(), 1);
    }

    #[test]
    fn push_item_opens_new_row_when_full() {
        let mut grid = Grid::new(1000, 2);
        grid.push_item(ItemId(0), Size::new(600, 300));
        assert_eq!(grid.rows().len(), 1);
        grid.push_item(ItemId(1), Size::new(600, 300));
        assert_eq!(grid.rows().len(), 2);
        assert!(grid.rows()[1].is_empty());
        grid.push_item(ItemId(2), Size::new(200, 100));
        assert_eq!(grid.rows()[1].len(), 1);
    }

    #[test]
    fn row_padding_defaults_to_item_padding() {
        let grid = Grid::new(1000, 7);
        assert_eq!(grid.row_padding(), 7);
        let grid = grid.with_row_padding(12);
        assert_eq!(grid.row_padding(), 12);
        assert_eq!(grid.padding(), 7);
    }

    #[test]
    fn render_empty_grid() {
        let grid = Grid::new(1000, 2);
        let layout = grid.render();
        assert!(layout.is_empty());
        assert_eq!(layout.total_height(), 0);
    }

    #[test]
    fn render_skips_trailing_empty_row() {
        let mut grid = Grid::new(1000, 2);
        grid.push_item(ItemId(0), Size::new(600, 300));
        grid.push_item(ItemId(1), Size::new(600, 300));
        let layout = grid.render();
        assert_eq!(layout.rows().len(), 1);
        // (1000 - 2) / 1200 * 300 = 249.5
        assert_eq!(layout.total_height(), 250);
    }

    #[test]
    fn render_uses_row_padding_between_rows() {
        let mut grid = Grid::new(100, 2).with_row_padding(10);
        grid.push_item(ItemId(0), Size::new(100, 50));
        grid.push_item(ItemId(1), Size::new(100, 50));
        let layout = grid.render();
        assert_eq!(layout.rows()[1].top, 60);
        assert_eq!(layout.total_height(), 110);
    }
}
