//! Lays out a manifest and prints the rows.
//!
//! Run with `cargo run --example wall [path/to/manifest]`. Without a path the
//! bundled `demos/wall.gallery` is used. Debug logs go to `wall.log`.

use justified::log_init::init_logger;
use justified::testing::LayoutSnapshot;
use justified_rs::{Result, arrange_file, arrange_str};
use log::LevelFilter;

const BUNDLED: &str = include_str!("wall.gallery");

fn main() -> Result<()> {
    if let Err(err) = init_logger("wall.log", LevelFilter::Trace) {
        eprintln!("logging disabled: {}", err);
    }

    let layout = match std::env::args().nth(1) {
        Some(path) => arrange_file(path)?,
        None => arrange_str(BUNDLED)?,
    };

    println!("{}", LayoutSnapshot::render(&layout));
    Ok(())
}
