//! # Storage Layer
//!
//! Two pieces live here:
//!
//! - [`RecordStore`]: the in-memory, ordered list of contacts for the running session.
//!   It is the single source of truth while the program runs.
//! - [`DataStore`]: the persistence abstraction that mirrors the record store on disk.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production JSON file storage
//!   - One pretty-printed JSON array, rewritten wholesale on every save
//!   - No temp file, no backup: a crash mid-write can truncate the file
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Keeps the last saved snapshot, can be told to fail
//!
//! ## Load Policy
//!
//! `load` never fails. A missing file is an empty book, and so is a file that cannot be
//! read or parsed. There is no partial recovery and no way for the caller to tell an
//! empty file from a corrupt one.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── contacts.json          # [{"name", "phone", "email", "category", "id"}, ...]
//! ├── contactz-config.json   # Configuration
//! └── contacts_export_N.csv  # Exports, N = contact count at export time
//! ```

use crate::error::Result;
use crate::model::Contact;

pub mod fs;
pub mod memory;
mod records;

pub use records::RecordStore;

/// Abstract interface for contact persistence.
pub trait DataStore {
    /// Read every persisted contact, in stored order. Degrades to empty on any failure.
    fn load(&self) -> Vec<Contact>;

    /// Replace the persisted contacts with `contacts`.
    fn save(&mut self, contacts: &[Contact]) -> Result<()>;
}
