//! Items placed into rows.

use crate::fraction::scale_to_height;

/// A width/height pair in whole pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// Size of an item whose dimensions have not been measured yet.
    pub const UNKNOWN: Size = Size {
        width: 0,
        height: 0,
    };

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if both dimensions are non-zero.
    ///
    /// Items with an unknown dimension are never aspect-rescaled.
    pub fn is_known(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

/// Caller-supplied identifier carried from input to placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub usize);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One media element inside a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    /// Natural size of the media.
    pub intrinsic: Size,
    /// Size after fitting to the row height.
    pub display: Size,
}

impl Item {
    /// New item displayed at its intrinsic size.
    pub fn new(id: ItemId, intrinsic: Size) -> Self {
        Self {
            id,
            intrinsic,
            display: intrinsic,
        }
    }

    /// Rescale the display size to `height`, keeping the aspect ratio.
    ///
    /// Returns false and leaves the display size untouched if the intrinsic
    /// size is unknown.
    pub(crate) fn aspect_fit(&mut self, height: u32) -> bool {
        match scale_to_height(self.intrinsic, height) {
            Some(width) => {
                self.display = Size::new(width, height);
                true
            }
            None => false,
        }
    }
}
