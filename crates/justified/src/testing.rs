//! Test utilities for snapshot testing layouts.
//!
//! Layouts are turned into stable plain text so they can be compared with
//! `insta` snapshots.
//!
//! # Examples
//!
//! ```ignore
//! use justified::testing::LayoutSnapshot;
//!
//! let layout = justified::layout(&options, sizes);
//! insta::assert_snapshot!(LayoutSnapshot::render(&layout));
//! ```

use std::fmt::Write;

use crate::placement::{GeometrySink, Layout, Placement};

/// Collects placements as text lines.
///
/// As a [`GeometrySink`] it records one line per placement plus a closing
/// `total` line; [`LayoutSnapshot::render`] also adds a header for each row.
#[derive(Debug, Default)]
pub struct LayoutSnapshot {
    lines: Vec<String>,
}

impl LayoutSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full text dump of `layout`, grouped by row.
    pub fn render(layout: &Layout) -> String {
        let mut snapshot = Self::new();
        for row in layout.rows() {
            snapshot.lines.push(format!(
                "row {} top={} height={}",
                row.index, row.top, row.height
            ));
            for placement in layout.row_placements(row.index) {
                snapshot.push_placement(placement, "  ");
            }
        }
        snapshot.finish(layout.total_height());
        snapshot.to_text()
    }

    /// Recorded lines joined with newlines.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn push_placement(&mut self, placement: &Placement, indent: &str) {
        let mut line = String::from(indent);
        let _ = write!(
            line,
            "{} @ {},{} {}x{}",
            placement.id, placement.left, placement.top, placement.width, placement.height
        );
        self.lines.push(line);
    }
}

impl GeometrySink for LayoutSnapshot {
    fn place(&mut self, placement: &Placement) {
        self.push_placement(placement, "");
    }

    fn finish(&mut self, total_height: u32) {
        self.lines.push(format!("total={}", total_height));
    }
}
