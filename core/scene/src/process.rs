use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SceneError};
use crate::reader::parse_scene;
use crate::types::SceneDoc;
use crate::writer::write_scene;

/// Loads and resolves a scene file for the given active language.
pub fn load_scene(path: &Path, lang: char) -> Result<SceneDoc> {
    let filename = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|_| SceneError::FileOpen {
        path: filename.clone(),
    })?;
    parse_scene(&text, &filename, lang)
}

/// Writes a document back to its serialized text form at `path`.
pub fn save_scene(doc: &SceneDoc, path: &Path) -> Result<()> {
    fs::write(path, write_scene(doc)).map_err(|_| SceneError::FileOpen {
        path: path.display().to_string(),
    })
}

pub fn scene_exists(path: &Path) -> bool {
    path.is_file()
}

pub fn scene_decode(input: &Path, output: &Option<PathBuf>, lang: char) -> Result<()> {
    let doc = load_scene(input, lang)?;

    let out_path = match output {
        Some(p) => p.clone(),
        None => input.with_extension("json"),
    };

    let json = serde_json::to_string_pretty(&doc)?;
    fs::write(&out_path, json)?;
    println!("Decoded scene to {:?}", out_path);
    Ok(())
}

pub fn scene_encode(input: &Path, output: &Option<PathBuf>) -> Result<()> {
    let content = fs::read_to_string(input).map_err(|_| SceneError::FileOpen {
        path: input.display().to_string(),
    })?;
    let mut doc: SceneDoc = serde_json::from_str(&content)?;
    doc.reindex();

    let out_path = match output {
        Some(p) => p.clone(),
        None => input.with_extension("txt"),
    };

    save_scene(&doc, &out_path)?;
    println!("Encoded scene to {:?}", out_path);
    Ok(())
}

/// Prints the first line matching `command` in its serialized form.
pub fn scene_get(input: &Path, command: &str, lang: char) -> Result<()> {
    let doc = load_scene(input, lang)?;
    let line = doc.get(command)?;
    println!("{}", line);
    Ok(())
}
