use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SceneError};

/// One named parameter on a scene line. The value is kept as the raw
/// trimmed string; typed interpretation happens at the call site.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SceneParam {
    pub name: String,
    pub value: String,
}

impl SceneParam {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One retained command line with its parameters in source order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SceneLine {
    /// 1-based physical line number in the source file, for diagnostics.
    pub line_number: usize,
    /// Command name with any localization suffix already stripped.
    pub command: String,
    pub params: IndexMap<String, SceneParam>,
    /// Index of this line within its owning document, set by `SceneDoc::add_line`.
    #[serde(skip)]
    pub doc_index: Option<usize>,
}

impl SceneLine {
    pub fn new(line_number: usize, command: impl Into<String>) -> Self {
        Self {
            line_number,
            command: command.into(),
            params: IndexMap::new(),
            doc_index: None,
        }
    }

    pub fn add_param(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let param = SceneParam::new(name, value);
        self.params.insert(param.name.clone(), param);
    }

    /// Raw string value of a parameter, if present.
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(|p| p.value.as_str())
    }
}

/// An ordered collection of scene lines, bound to a filename
/// (empty for an in-memory document).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneDoc {
    pub filename: String,
    pub lines: Vec<SceneLine>,
}

impl SceneDoc {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            lines: Vec::new(),
        }
    }

    /// Appends a line, recording its position within this document.
    pub fn add_line(&mut self, mut line: SceneLine) {
        line.doc_index = Some(self.lines.len());
        self.lines.push(line);
    }

    /// Recomputes each line's position index. Needed after any mutation
    /// that bypasses `add_line`, such as deserialization.
    pub fn reindex(&mut self) {
        for (i, line) in self.lines.iter_mut().enumerate() {
            line.doc_index = Some(i);
        }
    }

    /// Removes every line with the given command and renumbers the rest.
    pub fn remove_command(&mut self, command: &str) {
        self.lines.retain(|line| line.command != command);
        self.reindex();
    }

    /// First line whose command matches, in insertion order.
    pub fn get(&self, command: &str) -> Result<&SceneLine> {
        self.lines
            .iter()
            .find(|line| line.command == command)
            .ok_or_else(|| SceneError::CommandNotFound {
                command: command.to_string(),
            })
    }
}
