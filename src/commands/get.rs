use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

/// Fetch the content behind `(category, label)`.
///
/// Misses resolve to the empty string rather than an error so a host can
/// bind this directly to a text field.
pub fn content<S: DataStore>(store: &S, category: &str, label: &str) -> Result<CmdResult> {
    let document = store.load_document()?;
    let content = document
        .find_entry(category, label)
        .map(|entry| entry.content.clone())
        .unwrap_or_default();
    Ok(CmdResult::default().with_content(content))
}
