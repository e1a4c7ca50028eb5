pub mod error;
pub mod process;

pub use error::{ConfigError, Result};

use indexmap::IndexMap;
use std::fs;
use std::path::PathBuf;

/// Sectioned key/value configuration store with explicit load/save.
///
/// Constructed once at startup and passed by reference to whatever needs
/// it; values are set in memory and written back by `save` only when
/// something changed.
#[derive(Debug)]
pub struct ConfigFile {
    path: PathBuf,
    use_current_directory: bool,
    sections: IndexMap<String, IndexMap<String, String>>,
    needs_save: bool,
    loaded: bool,
}

impl ConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            use_current_directory: false,
            sections: IndexMap::new(),
            needs_save: false,
            loaded: false,
        }
    }

    /// When set, load/save use the file name component in the current
    /// working directory instead of the configured path.
    pub fn set_use_current_directory(&mut self, use_current_directory: bool) {
        self.use_current_directory = use_current_directory;
    }

    fn effective_path(&self) -> PathBuf {
        if self.use_current_directory {
            match self.path.file_name() {
                Some(name) => PathBuf::from(name),
                None => self.path.clone(),
            }
        } else {
            self.path.clone()
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Loads the config file, replacing any in-memory contents.
    pub fn init(&mut self) -> Result<()> {
        let text = fs::read_to_string(self.effective_path())?;
        self.sections = parse_config(&text)?;
        self.needs_save = false;
        self.loaded = true;
        Ok(())
    }

    /// Writes the store back out if anything changed since load.
    pub fn save(&mut self) -> Result<()> {
        if !self.needs_save {
            return Ok(());
        }
        fs::write(self.effective_path(), write_config(&self.sections))?;
        self.needs_save = false;
        Ok(())
    }

    pub fn set_string(&mut self, section: &str, key: &str, value: impl Into<String>) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.into());
        self.needs_save = true;
    }

    pub fn get_string(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|s| s.get(key))
            .map(String::as_str)
    }

    pub fn set_int(&mut self, section: &str, key: &str, value: i32) {
        self.set_string(section, key, value.to_string());
    }

    pub fn get_int(&self, section: &str, key: &str) -> Result<Option<i32>> {
        self.get_typed(section, key)
    }

    pub fn set_float(&mut self, section: &str, key: &str, value: f32) {
        self.set_string(section, key, value.to_string());
    }

    pub fn get_float(&self, section: &str, key: &str) -> Result<Option<f32>> {
        self.get_typed(section, key)
    }

    fn get_typed<T: std::str::FromStr>(&self, section: &str, key: &str) -> Result<Option<T>> {
        match self.get_string(section, key) {
            None => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue {
                    section: section.to_string(),
                    key: key.to_string(),
                }),
        }
    }
}

fn parse_config(text: &str) -> Result<IndexMap<String, IndexMap<String, String>>> {
    let mut sections: IndexMap<String, IndexMap<String, String>> = IndexMap::new();
    let mut current = String::new();

    for (number, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }
        if line.starts_with('[') && line.ends_with(']') {
            current = line[1..line.len() - 1].trim().to_string();
            sections.entry(current.clone()).or_default();
            continue;
        }
        let Some(eq) = line.find('=') else {
            return Err(ConfigError::Parse { line: number + 1 });
        };
        let key = line[..eq].trim().to_string();
        let value = line[eq + 1..].trim().to_string();
        sections
            .entry(current.clone())
            .or_default()
            .insert(key, value);
    }

    Ok(sections)
}

fn write_config(sections: &IndexMap<String, IndexMap<String, String>>) -> String {
    let mut output = String::new();
    for (name, entries) in sections {
        output.push_str(&format!("[{}]\n", name));
        for (key, value) in entries {
            output.push_str(&format!("{}={}\n", key, value));
        }
        output.push('\n');
    }
    output
}
