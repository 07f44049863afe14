pub mod error;

use std::path::Path;

use log::info;

pub use error::{JustifiedError, Result};
pub use justified::{
    GeometrySink, Grid, ItemId, Layout, LayoutOptions, Placement, RowMetrics, Size, layout,
};
pub use manifest::{Manifest, ManifestError};

/// Parse a manifest and lay out its photos.
pub fn arrange_str(source: &str) -> Result<Layout> {
    let manifest = Manifest::parse(source)?;
    Ok(manifest.layout())
}

/// Read a manifest file and lay out its photos.
pub fn arrange_file(path: impl AsRef<Path>) -> Result<Layout> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)?;
    let layout = arrange_str(&source)?;
    info!(
        "{}: {} photos in {} rows, {}px tall",
        path.display(),
        layout.len(),
        layout.rows().len(),
        layout.total_height()
    );
    Ok(layout)
}

/// Lay out a manifest and hand the result to `sink`.
pub fn arrange_into<S: GeometrySink + ?Sized>(source: &str, sink: &mut S) -> Result<()> {
    arrange_str(source)?.apply(sink);
    Ok(())
}

#[cfg(test)]
mod tests {
    use justified::testing::LayoutSnapshot;

    use super::*;

    const WALL: &str = r#"
gallery {
    width: 1000px;
    padding: 2;
    row-padding: 10;
}

photos {
    1000x300;
    400x300;
    500x300;
    300x300;
    200x100;
}
"#;

    #[test]
    fn arrange_manifest_snapshot() {
        let layout = arrange_str(WALL).unwrap();

        insta::assert_snapshot!(LayoutSnapshot::render(&layout), @r"
        row 0 top=0 height=300
          #0 @ 0,0 1000x300
        row 1 top=310 height=249
          #1 @ 0,310 332x249
          #2 @ 334,310 415x249
          #3 @ 751,310 249x249
        row 2 top=569 height=100
          #4 @ 0,569 200x100
        total=669
        ");
    }

    #[test]
    fn arrange_into_sink() {
        let mut placements: Vec<Placement> = Vec::new();
        arrange_into(WALL, &mut placements).unwrap();
        assert_eq!(placements.len(), 5);
        assert_eq!(placements[4].row, 2);
    }

    #[test]
    fn arrange_file_reads_manifest() {
        let path =
            std::env::temp_dir().join(format!("justified-rs-{}.gallery", std::process::id()));
        std::fs::write(&path, WALL).unwrap();

        let from_file = arrange_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(from_file, arrange_str(WALL).unwrap());
    }

    #[test]
    fn arrange_file_missing() {
        let err = arrange_file("/nonexistent/justified-rs/wall.gallery").unwrap_err();
        assert!(matches!(err, JustifiedError::IO(_)));
    }

    #[test]
    fn arrange_invalid_manifest() {
        let err = arrange_str("gallery { padding: 2; }").unwrap_err();
        assert!(matches!(
            err,
            JustifiedError::Manifest(ManifestError::MissingWidth)
        ));
        assert_eq!(err.to_string(), "Manifest error: gallery width is required");
    }
}
