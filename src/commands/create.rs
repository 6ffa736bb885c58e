use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Entry;
use crate::store::DataStore;

/// Create a new entry under `category`, creating the category on demand.
///
/// Category and label are validated on their trimmed form but stored as
/// given. A duplicate label within the category is rejected, never
/// overwritten.
pub fn run<S: DataStore>(
    store: &mut S,
    category: &str,
    label: &str,
    content: &str,
) -> Result<CmdResult> {
    if category.trim().is_empty() {
        return Ok(CmdResult::rejected("Category name must not be empty."));
    }
    if label.trim().is_empty() {
        return Ok(CmdResult::rejected("Label must not be empty."));
    }

    let mut document = store.load_document()?;
    if document.label_exists(category, label) {
        return Ok(CmdResult::rejected(format!(
            "An entry labeled \"{}\" already exists in category \"{}\".",
            label, category
        )));
    }

    document.append_entry(category, Entry::new(label, content));
    store.save_document(&document)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Prompt \"{}\" created in category \"{}\".",
        label, category
    )));
    Ok(result)
}
