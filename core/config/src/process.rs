use std::path::Path;

use crate::{ConfigFile, Result};

pub fn config_get(file: &Path, section: &str, key: &str) -> Result<()> {
    let mut config = ConfigFile::new(file);
    config.init()?;
    match config.get_string(section, key) {
        Some(value) => println!("{}", value),
        None => println!("(not set)"),
    }
    Ok(())
}

pub fn config_set(file: &Path, section: &str, key: &str, value: &str) -> Result<()> {
    let mut config = ConfigFile::new(file);
    if file.is_file() {
        config.init()?;
    }
    config.set_string(section, key, value);
    config.save()?;
    println!("Set {}.{} in {:?}", section, key, file);
    Ok(())
}
