//! Writes a layout out as CSS rules, one per photo.
//!
//! Shows how a renderer plugs into the layout through `GeometrySink`.

use justified_rs::{GeometrySink, Placement, Result, arrange_into};

const GALLERY: &str = r#"
gallery { width: 960px; padding: 2; }
photos {
    400x300; 500x300; 300x300;
    200x100; 640x480; 300x450;
    1024x768; auto; 800x600;
}
"#;

struct CssSink {
    container: &'static str,
    rules: Vec<String>,
}

impl GeometrySink for CssSink {
    fn place(&mut self, p: &Placement) {
        self.rules.push(format!(
            "{} .photo-{} {{ top: {}px; left: {}px; width: {}px; height: {}px; }} /* row {} */",
            self.container, p.id.0, p.top, p.left, p.width, p.height, p.row
        ));
    }

    fn finish(&mut self, total_height: u32) {
        self.rules
            .push(format!("{} {{ height: {}px; }}", self.container, total_height));
    }
}

fn main() -> Result<()> {
    let mut sink = CssSink {
        container: ".photo-grid",
        rules: Vec::new(),
    };
    arrange_into(GALLERY, &mut sink)?;

    for rule in &sink.rules {
        println!("{}", rule);
    }
    Ok(())
}
