//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for all promptz operations, regardless of the host
//! embedding it.
//!
//! The facade dispatches to the appropriate command function and returns
//! structured types (`Result<CmdResult>`). It holds no business logic and
//! does no I/O formatting. A host panel takes the returned messages and
//! data and renders them however it likes.
//!
//! `PromptzApi<S: DataStore>` is generic over the storage backend:
//! - Production: `PromptzApi<FileStore>`
//! - Testing: `PromptzApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::store::DataStore;

/// The main API facade for promptz operations.
///
/// All host UIs should interact through this API.
pub struct PromptzApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> PromptzApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Category names in document order.
    pub fn list_categories(&self) -> Result<commands::CmdResult> {
        commands::list::categories(&self.store)
    }

    /// Ordered label→content mapping for one category.
    pub fn list_entries(&self, category: &str) -> Result<commands::CmdResult> {
        commands::list::entries(&self.store, category)
    }

    /// Content behind `(category, label)`, or the empty string on a miss.
    pub fn get_content(&self, category: &str, label: &str) -> Result<commands::CmdResult> {
        commands::get::content(&self.store, category, label)
    }

    pub fn create_entry(
        &mut self,
        category: &str,
        label: &str,
        content: &str,
    ) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, category, label, content)
    }

    pub fn update_entry(
        &mut self,
        old_category: &str,
        old_label: &str,
        new_category: &str,
        new_label: &str,
        new_content: &str,
    ) -> Result<commands::CmdResult> {
        commands::update::run(
            &mut self.store,
            old_category,
            old_label,
            new_category,
            new_label,
            new_content,
        )
    }

    pub fn delete_entry(&mut self, category: &str, label: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, category, label)
    }
}
