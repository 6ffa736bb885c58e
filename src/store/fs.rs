use super::DataStore;
use crate::error::{PromptzError, Result};
use crate::model::{Document, Entry};
use indexmap::IndexMap;
use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store: the whole catalog lives in one YAML file.
pub struct FileStore {
    data_file: PathBuf,
}

impl FileStore {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.data_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(PromptzError::Io)?;
            }
        }
        Ok(())
    }
}

/// Permissive mirror of the on-disk shape. Fields an entry might be missing
/// are `Option` so one bad item never sinks the whole file.
#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    categories: IndexMap<String, Vec<RawEntry>>,
}

#[derive(Deserialize)]
struct RawEntry {
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

/// Decode file text into a [`Document`], filtering out anything malformed.
///
/// Skipped data is logged, never fatal: an unparseable file yields an empty
/// document, an entry without both `label` and `content` is dropped, and a
/// category left with no entries (or named by the empty string) is dropped
/// with it.
fn parse_document(text: &str, source: &Path) -> Document {
    let raw: RawDocument = match serde_yaml::from_str(text) {
        Ok(raw) => raw,
        Err(err) => {
            warn!("ignoring malformed prompt file {}: {}", source.display(), err);
            return Document::default();
        }
    };

    let mut document = Document::default();
    for (name, items) in raw.categories {
        if name.is_empty() {
            warn!(
                "skipping unnamed category in prompt file {}",
                source.display()
            );
            continue;
        }
        let mut entries = Vec::with_capacity(items.len());
        for item in items {
            match (item.label, item.content) {
                (Some(label), Some(content)) => entries.push(Entry { label, content }),
                _ => warn!(
                    "skipping malformed entry in category {:?} of prompt file {}",
                    name,
                    source.display()
                ),
            }
        }
        if entries.is_empty() {
            warn!(
                "skipping empty category {:?} in prompt file {}",
                name,
                source.display()
            );
            continue;
        }
        document.categories.insert(name, entries);
    }
    document
}

impl DataStore for FileStore {
    fn load_document(&self) -> Result<Document> {
        if !self.data_file.exists() {
            return Ok(Document::default());
        }
        let text = match fs::read_to_string(&self.data_file) {
            Ok(text) => text,
            Err(err) => {
                warn!(
                    "could not read prompt file {}: {}",
                    self.data_file.display(),
                    err
                );
                return Ok(Document::default());
            }
        };
        Ok(parse_document(&text, &self.data_file))
    }

    fn save_document(&mut self, document: &Document) -> Result<()> {
        self.ensure_parent_dir()?;
        let text = serde_yaml::to_string(document).map_err(PromptzError::Serialization)?;
        fs::write(&self.data_file, text).map_err(PromptzError::Io)?;
        Ok(())
    }
}
