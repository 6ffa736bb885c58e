use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Remove the entry matching `(category, label)`. Deleting the last entry
/// of a category removes the category itself.
pub fn run<S: DataStore>(store: &mut S, category: &str, label: &str) -> Result<CmdResult> {
    if category.trim().is_empty() || label.trim().is_empty() {
        return Ok(CmdResult::rejected(
            "Select a category and label to delete.",
        ));
    }

    let mut document = store.load_document()?;
    if !document.categories.contains_key(category) {
        return Ok(CmdResult::rejected(format!(
            "Category \"{}\" not found.",
            category
        )));
    }
    if !document.remove_entry(category, label) {
        return Ok(CmdResult::rejected(format!(
            "No entry labeled \"{}\" in category \"{}\".",
            label, category
        )));
    }

    store.save_document(&document)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Prompt \"{}\" deleted from category \"{}\".",
        label, category
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, list};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn deleted_entry_no_longer_listed() {
        let mut store = InMemoryStore::new();
        create::run(&mut store, "Style", "Anime", "a").unwrap();
        create::run(&mut store, "Style", "Oil", "b").unwrap();

        let result = run(&mut store, "Style", "Anime").unwrap();
        assert!(!result.failed());

        let listed = list::entries(&store, "Style").unwrap();
        assert!(!listed.entries.contains_key("Anime"));
        assert!(listed.entries.contains_key("Oil"));
    }

    #[test]
    fn deleting_last_entry_drops_category() {
        let mut store = InMemoryStore::new();
        create::run(&mut store, "Style", "Anime", "a").unwrap();

        run(&mut store, "Style", "Anime").unwrap();

        let cats = list::categories(&store).unwrap();
        assert!(cats.categories.is_empty());
    }

    #[test]
    fn blank_selection_is_rejected() {
        let mut store = InMemoryStore::new();
        assert!(run(&mut store, "", "Anime").unwrap().failed());
        assert!(run(&mut store, "Style", "  ").unwrap().failed());
    }

    #[test]
    fn missing_category_and_label_are_distinct_errors() {
        let mut store = InMemoryStore::new();
        create::run(&mut store, "Style", "Anime", "a").unwrap();

        let no_category = run(&mut store, "Ghost", "Anime").unwrap();
        assert!(no_category.failed());
        assert!(no_category.messages[0].content.contains("Category"));

        let no_label = run(&mut store, "Style", "Ghost").unwrap();
        assert!(no_label.failed());
        assert!(no_label.messages[0].content.contains("No entry"));
    }
}
