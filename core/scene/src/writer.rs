use std::fmt;

use crate::types::{SceneDoc, SceneLine};

impl fmt::Display for SceneLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command)?;
        for param in self.params.values() {
            write!(f, " {}=\"{}\"", param.name, param.value)?;
        }
        Ok(())
    }
}

/// Serializes a document back to scene text, one line per retained command.
/// Whitespace and quoting are normalized; command/parameter content and
/// order round-trip.
pub fn write_scene(doc: &SceneDoc) -> String {
    let mut output = String::new();
    for line in &doc.lines {
        output.push_str(&line.to_string());
        output.push('\n');
    }
    output
}
