//! # manifest - gallery manifests for justified layouts
//!
//! A manifest describes one gallery: the container it is laid out in and the
//! intrinsic sizes of its photos, in display order.
//!
//! ```rust
//! use manifest::Manifest;
//!
//! let source = r#"
//!     /* 1000px wide with 2px gaps */
//!     gallery {
//!         width: 1000px;
//!         padding: 2;
//!     }
//!
//!     photos {
//!         400x300;
//!         500 x 300;
//!         300x300;
//!         auto;
//!     }
//! "#;
//!
//! let manifest = Manifest::parse(source).expect("valid manifest");
//! assert_eq!(manifest.photos.len(), 4);
//!
//! let layout = manifest.layout();
//! assert_eq!(layout.rows()[0].height, 249);
//! ```
//!
//! ## Format
//!
//! - `gallery { ... }` (required): `width` (required), `padding`
//!   (default 2) and `row-padding` (defaults to `padding`). Values are whole
//!   pixels with an optional `px` suffix.
//! - `photos { ... }` (optional): one `WxH` entry per photo, or `auto` for a
//!   photo whose size is not known yet.
//! - `/* ... */` comments are allowed between tokens.
//!
//! Negative, fractional and out-of-range values are rejected here; the
//! layout crate assumes it only ever sees valid pixels.

pub mod error;
pub mod parser;
pub mod syntax;
pub mod values;

use std::str::FromStr;

use justified::{Grid, ItemId, Layout, LayoutOptions, Size};

pub use error::ManifestError;
pub use parser::parse_manifest;

/// A parsed gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub options: LayoutOptions,
    /// Intrinsic photo sizes in display order.
    pub photos: Vec<Size>,
}

impl Manifest {
    pub fn parse(source: &str) -> Result<Self, ManifestError> {
        parse_manifest(source)
    }

    /// Grid with every photo assigned to a row, ready to render.
    pub fn grid(&self) -> Grid {
        let mut grid = self.options.grid();
        for (position, &size) in self.photos.iter().enumerate() {
            grid.push_item(ItemId(position), size);
        }
        grid
    }

    /// Lay out the photos.
    pub fn layout(&self) -> Layout {
        justified::layout(&self.options, self.photos.iter().copied())
    }
}

impl FromStr for Manifest {
    type Err = ManifestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_manifest(s)
    }
}
