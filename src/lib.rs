//! # Promptz Architecture
//!
//! Promptz is a **UI-agnostic prompt catalog library**. It manages named text
//! snippets ("prompts") grouped into categories and persisted to a single YAML
//! file. Host applications (typically a panel inside an image-generation UI)
//! call into the API facade and render whatever comes back. This crate never
//! formats terminal output and never decides how a snippet gets inserted into
//! a text field.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - The surface a host UI wires its controls to              │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: validation, uniqueness, moves       │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tell, Don't Throw
//!
//! Every operation returns `Result<CmdResult>`, but the `Err` arm is reserved
//! for I/O and serialization failures, which the caller cannot fix by editing
//! a form field. Validation problems (blank category, duplicate label,
//! missing delete target) come back as an error-level [`commands::CmdMessage`]
//! inside an `Ok(CmdResult)`, ready to be shown to the user verbatim. A host
//! UI therefore needs no error-translation layer of its own.
//!
//! ## The Load-Mutate-Save Cycle
//!
//! The persisted [`model::Document`] has no long-lived in-memory identity.
//! Each operation loads a fresh copy, validates against it, mutates it, and
//! writes it back whole. Validation always completes before the save, so a
//! rejected operation leaves the file exactly as it was and retrying is
//! always safe. There is no locking: the design assumes a single interactive
//! user driving one operation at a time. Concurrent writers would silently
//! last-write-win. That is an accepted limitation of this embedding, not a
//! guarantee; wrap the facade in a mutex if that ever changes.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): unit tests of the business logic
//!    against `InMemoryStore`. This is where the lion's share of testing
//!    lives.
//! 2. **Storage** (`tests/fs_store_test.rs`): `FileStore` behavior on real
//!    temp files — ordering round-trips, recovery from corrupt data.
//! 3. **Facade** (`tests/catalog_flow_test.rs`): end-to-end flows through
//!    `PromptzApi<FileStore>`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, the entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types ([`model::Document`], [`model::Entry`])
//! - [`config`]: Data-file location resolution
//! - [`init`]: Convenience wiring for the common file-backed setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
