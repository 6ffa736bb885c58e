//! # Storage Layer
//!
//! This module defines the storage abstraction for promptz. The [`DataStore`]
//! trait allows the rest of the crate to work with different storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** without changing command logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage. The whole catalog lives in one
//!   YAML file whose location is supplied at construction time
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Storage Format
//!
//! For `FileStore`, a single file:
//!
//! ```yaml
//! categories:
//!   Style:
//!     - label: Anime
//!       content: anime style, vivid colors
//!   Quality:
//!     - label: Masterpiece
//!       content: masterpiece, best quality
//! ```
//!
//! Category order and entry order are preserved exactly as written, and
//! non-ASCII text is emitted verbatim.
//!
//! ## Load Never Fails
//!
//! `load_document` treats every data-shaped problem (missing file,
//! unreadable file, broken YAML, a missing `categories` key, individual
//! malformed items) as "no data there", logs a warning, and carries on with
//! whatever remains. Only `save_document` surfaces I/O errors to the caller,
//! because a failed write has no safe local recovery.

use crate::error::Result;
use crate::model::Document;

pub mod fs;
pub mod memory;

/// Abstract interface for catalog storage.
///
/// Implementations own a single persisted [`Document`] and hand out
/// transient copies of it.
pub trait DataStore {
    /// Load the current document. Data-shaped failures recover to an empty
    /// document; they are logged, never returned.
    fn load_document(&self) -> Result<Document>;

    /// Persist the full document, replacing any previous content.
    fn save_document(&mut self, document: &Document) -> Result<()>;
}
