use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;
use indexmap::IndexMap;

/// List category names in document order.
pub fn categories<S: DataStore>(store: &S) -> Result<CmdResult> {
    let document = store.load_document()?;
    Ok(CmdResult::default().with_categories(document.category_names()))
}

/// List the entries of one category as an ordered label→content mapping.
/// An absent category yields an empty mapping.
pub fn entries<S: DataStore>(store: &S, category: &str) -> Result<CmdResult> {
    let document = store.load_document()?;
    let entries: IndexMap<String, String> = document
        .categories
        .get(category)
        .map(|entries| {
            entries
                .iter()
                .map(|entry| (entry.label.clone(), entry.content.clone()))
                .collect()
        })
        .unwrap_or_default();
    Ok(CmdResult::default().with_entries(entries))
}
