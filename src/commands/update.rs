use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Entry;
use crate::store::DataStore;

/// Rename, move, or rewrite an entry.
///
/// Modeled as delete-then-insert: the old `(category, label)` entry is
/// removed and a fresh `{new_label, new_content}` entry is appended under
/// `new_category`. The old category is dropped if the removal emptied it,
/// and the new category is created on demand. A consequence worth knowing:
/// an update that keeps its identity still moves the entry to the end of
/// its category.
///
/// If the new identity differs from the old one and `new_label` is already
/// taken in `new_category`, the update is rejected and the stored document
/// is left untouched.
pub fn run<S: DataStore>(
    store: &mut S,
    old_category: &str,
    old_label: &str,
    new_category: &str,
    new_label: &str,
    new_content: &str,
) -> Result<CmdResult> {
    if new_category.trim().is_empty() {
        return Ok(CmdResult::rejected("New category name must not be empty."));
    }
    if new_label.trim().is_empty() {
        return Ok(CmdResult::rejected("New label must not be empty."));
    }

    let mut document = store.load_document()?;
    if !document.remove_entry(old_category, old_label) {
        return Ok(CmdResult::rejected(format!(
            "No entry labeled \"{}\" in category \"{}\". Select the entry to update first.",
            old_label, old_category
        )));
    }

    let identity_changed = old_category != new_category || old_label != new_label;
    if identity_changed && document.label_exists(new_category, new_label) {
        return Ok(CmdResult::rejected(format!(
            "An entry labeled \"{}\" already exists in category \"{}\".",
            new_label, new_category
        )));
    }

    document.append_entry(new_category, Entry::new(new_label, new_content));
    store.save_document(&document)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Prompt \"{}\" updated in category \"{}\".",
        new_label, new_category
    )));
    Ok(result)
}
