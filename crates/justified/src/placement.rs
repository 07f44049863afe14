//! Layout output: per-item geometry and the sink that consumes it.

use crate::item::{ItemId, Size};

/// Final geometry of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Identifier the item was created with
    pub id: ItemId,
    /// Index of the row the item landed in
    pub row: usize,
    pub top: u32,
    pub left: u32,
    pub width: u32,
    pub height: u32,
}

impl Placement {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Horizontal position just past the item's right edge.
    pub fn right(&self) -> u32 {
        self.left + self.width
    }
}

/// Vertical extent of one rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowMetrics {
    pub index: usize,
    pub top: u32,
    pub height: u32,
    pub item_count: usize,
}

/// Result of a full layout pass.
///
/// Placements are stored in insertion order, which is also row order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    pub(crate) placements: Vec<Placement>,
    pub(crate) rows: Vec<RowMetrics>,
    pub(crate) total_height: u32,
}

impl Layout {
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Rendered (non-empty) rows, top to bottom.
    pub fn rows(&self) -> &[RowMetrics] {
        &self.rows
    }

    /// Height the container needs to show every row.
    pub fn total_height(&self) -> u32 {
        self.total_height
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Placement for the item created with `id`.
    pub fn get(&self, id: ItemId) -> Option<&Placement> {
        self.placements.iter().find(|p| p.id == id)
    }

    /// Placements belonging to row `index`.
    pub fn row_placements(&self, index: usize) -> impl Iterator<Item = &Placement> {
        self.placements.iter().filter(move |p| p.row == index)
    }

    /// Feed every placement, then the total height, to `sink`.
    pub fn apply<S: GeometrySink + ?Sized>(&self, sink: &mut S) {
        for placement in &self.placements {
            sink.place(placement);
        }
        sink.finish(self.total_height);
    }
}

/// Receiver of computed geometry.
///
/// Whatever paints items (DOM writer, image compositor, terminal preview)
/// implements this; the layout itself never touches a visual surface.
pub trait GeometrySink {
    /// Apply one item's final geometry.
    fn place(&mut self, placement: &Placement);

    /// Called once after every placement with the container height.
    fn finish(&mut self, _total_height: u32) {}
}

impl GeometrySink for Vec<Placement> {
    fn place(&mut self, placement: &Placement) {
        self.push(*placement);
    }
}
