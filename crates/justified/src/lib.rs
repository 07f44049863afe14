//! # justified - justified photo-grid layout
//!
//! Packs a sequence of media items (photos, videos, anything with an
//! intrinsic aspect ratio) into rows that exactly span a container width.
//!
//! ## Architecture
//!
//! - **Item**: intrinsic size plus the display size it is currently fitted to
//! - **Row**: packs items at a shared height and justifies them on render
//! - **Grid**: opens rows as earlier ones fill and stacks them vertically
//!
//! A layout pass has two phases. During assembly, items are pushed in order;
//! each row shrinks to its shortest item so nothing is upscaled, and a row
//! closes once its items are wider than the container. Rendering then scales
//! every overflowing row down until items and gaps fill the width exactly.
//! Rows that never filled are left narrower rather than stretched.
//!
//! ## Usage
//!
//! ```
//! use justified::{LayoutOptions, Size, layout};
//!
//! let options = LayoutOptions::new(1000).with_padding(2);
//! let sizes = [Size::new(400, 300), Size::new(500, 300), Size::new(300, 300)];
//! let result = layout(&options, sizes);
//!
//! assert_eq!(result.rows()[0].height, 249);
//! let last = result.placements().last().unwrap();
//! assert_eq!(last.right(), 1000);
//! ```
//!
//! The output is plain data. Anything that paints it implements
//! [`GeometrySink`] and receives it through [`Layout::apply`].

pub mod fraction;
pub mod grid;
pub mod item;
pub mod log_init;
pub mod placement;
pub mod row;
pub mod testing;

pub use fraction::Fraction;
pub use grid::Grid;
pub use item::{Item, ItemId, Size};
pub use placement::{GeometrySink, Layout, Placement, RowMetrics};
pub use row::{RenderedRow, Row};

/// Gap between items (and rows) when none is configured.
pub const DEFAULT_PADDING: u32 = 2;

/// Container settings for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Width every row must fit.
    pub container_width: u32,
    /// Gap between neighbouring items.
    pub padding: u32,
    /// Gap between rows; `None` reuses `padding`.
    pub row_padding: Option<u32>,
}

impl LayoutOptions {
    pub fn new(container_width: u32) -> Self {
        Self {
            container_width,
            padding: DEFAULT_PADDING,
            row_padding: None,
        }
    }

    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_row_padding(mut self, row_padding: u32) -> Self {
        self.row_padding = Some(row_padding);
        self
    }

    /// Effective gap between rows.
    pub fn row_padding(&self) -> u32 {
        self.row_padding.unwrap_or(self.padding)
    }

    /// An empty grid configured with these options.
    pub fn grid(&self) -> Grid {
        Grid::new(self.container_width, self.padding).with_row_padding(self.row_padding())
    }
}

/// Lay out `sizes` in order.
///
/// Placements come back in input order, identified by input position.
pub fn layout<I>(options: &LayoutOptions, sizes: I) -> Layout
where
    I: IntoIterator,
    I::Item: Into<Size>,
{
    let mut grid = options.grid();
    for (position, size) in sizes.into_iter().enumerate() {
        grid.push_item(ItemId(position), size.into());
    }
    grid.render()
}
