use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single prompt snippet: a display label and the text it stands for.
///
/// The label must be unique within its owning category; the content is
/// arbitrary text and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub label: String,
    pub content: String,
}

impl Entry {
    pub fn new(label: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            content: content.into(),
        }
    }
}

/// The full persisted structure: category name → ordered entries.
///
/// `IndexMap` keeps categories in insertion order so the file round-trips
/// without reshuffling what the user sees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub categories: IndexMap<String, Vec<Entry>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Category names in document order.
    pub fn category_names(&self) -> Vec<String> {
        self.categories.keys().cloned().collect()
    }

    /// Linear scan for an entry; first match wins.
    pub fn find_entry(&self, category: &str, label: &str) -> Option<&Entry> {
        self.categories
            .get(category)?
            .iter()
            .find(|entry| entry.label == label)
    }

    pub fn label_exists(&self, category: &str, label: &str) -> bool {
        self.find_entry(category, label).is_some()
    }

    /// Append an entry, creating the category if it does not exist yet.
    /// Duplicate-label checks are the caller's job.
    pub fn append_entry(&mut self, category: &str, entry: Entry) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .push(entry);
    }

    /// Remove the entry matching `(category, label)`. Returns whether an
    /// entry was removed. A category left empty is dropped from the map,
    /// preserving the order of the remaining categories.
    pub fn remove_entry(&mut self, category: &str, label: &str) -> bool {
        let Some(entries) = self.categories.get_mut(category) else {
            return false;
        };
        let before = entries.len();
        entries.retain(|entry| entry.label != label);
        let removed = entries.len() < before;
        if entries.is_empty() {
            self.categories.shift_remove(category);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_creates_category_on_demand() {
        let mut doc = Document::new();
        doc.append_entry("Style", Entry::new("Anime", "anime style"));
        assert_eq!(doc.category_names(), vec!["Style"]);
        assert!(doc.label_exists("Style", "Anime"));
    }

    #[test]
    fn remove_drops_emptied_category_and_keeps_order() {
        let mut doc = Document::new();
        doc.append_entry("Style", Entry::new("Anime", ""));
        doc.append_entry("Quality", Entry::new("HQ", ""));
        doc.append_entry("Light", Entry::new("Sunset", ""));

        assert!(doc.remove_entry("Quality", "HQ"));
        assert_eq!(doc.category_names(), vec!["Style", "Light"]);
    }

    #[test]
    fn remove_reports_missing_entry() {
        let mut doc = Document::new();
        doc.append_entry("Style", Entry::new("Anime", ""));
        assert!(!doc.remove_entry("Style", "Ghost"));
        assert!(!doc.remove_entry("Ghost", "Anime"));
        assert_eq!(doc.category_names(), vec!["Style"]);
    }
}
