use super::DataStore;
use crate::error::Result;
use crate::model::Document;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    document: Document,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load_document(&self) -> Result<Document> {
        Ok(self.document.clone())
    }

    fn save_document(&mut self, document: &Document) -> Result<()> {
        self.document = document.clone();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Entry;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_entry(mut self, category: &str, label: &str, content: &str) -> Self {
            let mut document = self.store.load_document().unwrap();
            document.append_entry(category, Entry::new(label, content));
            self.store.save_document(&document).unwrap();
            self
        }
    }
}
