//! # Storage Layer
//!
//! Documents are persisted whole: a store hands back the raw Terse text of a
//! document and takes it back after editing. Decoding and encoding happen in
//! the layers above, so a store never sees the tree.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one file per document under a root directory
//!   - Names without an extension get the configured one (`.terse`)
//!   - Writes go to a temporary file that is then renamed over the target
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution

use crate::error::Result;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for document storage.
pub trait DocumentStore {
    /// Raw text of a document, `None` if it does not exist yet.
    fn read_document(&self, name: &str) -> Result<Option<String>>;

    /// Create or replace a document.
    fn write_document(&mut self, name: &str, text: &str) -> Result<()>;

    /// Where the document lives (a virtual path for non-file stores).
    fn document_path(&self, name: &str) -> PathBuf;
}
