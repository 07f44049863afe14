//! Snapshot tests for rendered layouts.

use justified::testing::LayoutSnapshot;
use justified::{LayoutOptions, layout};

#[test]
fn two_rows_snapshot() {
    let options = LayoutOptions::new(1000).with_padding(2);
    let result = layout(
        &options,
        [(1000, 300), (400, 300), (500, 300), (300, 300)],
    );

    insta::assert_snapshot!(LayoutSnapshot::render(&result), @r"
    row 0 top=0 height=300
      #0 @ 0,0 1000x300
    row 1 top=302 height=249
      #1 @ 0,302 332x249
      #2 @ 334,302 415x249
      #3 @ 751,302 249x249
    total=551
    ");
}

#[test]
fn mixed_heights_snapshot() {
    let options = LayoutOptions::new(600).with_padding(4);
    let result = layout(
        &options,
        [(300, 200), (400, 400), (200, 100), (150, 150), (300, 300)],
    );

    insta::assert_snapshot!(LayoutSnapshot::render(&result), @r"
    row 0 top=0 height=90
      #0 @ 0,0 135x90
      #1 @ 139,0 90x90
      #2 @ 233,0 180x90
      #3 @ 417,0 90x90
      #4 @ 511,0 89x90
    total=90
    ");
}

#[test]
fn sink_records_placements_in_order() {
    let options = LayoutOptions::new(1000).with_padding(2);
    let result = layout(&options, [(200, 100), (0, 0)]);

    let mut sink = LayoutSnapshot::new();
    result.apply(&mut sink);

    insta::assert_snapshot!(sink.to_text(), @r"
    #0 @ 0,0 200x100
    #1 @ 202,0 0x0
    total=100
    ");
}
