//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and plays the role of the
//! application controller: it owns the session's [`RecordStore`], keeps it mirrored to
//! the [`DataStore`], and dispatches every user operation to its command module.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Loads** the record store from the data store once, at construction
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Hold UI state**: the current filter, search text and selection are parameters
//! - **I/O to the terminal**: no stdout, stderr or prompts; confirmation is a callback
//! - **Business logic**: that belongs in `commands/*.rs`
//!
//! ## Generic Over DataStore
//!
//! `ContactzApi<S: DataStore>` is generic over the storage backend:
//! - Production: `ContactzApi<FileStore>`
//! - Testing: `ContactzApi<InMemoryStore>`

use crate::commands;
use crate::config::ContactzConfig;
use crate::error::Result;
use crate::model::{Contact, ContactInput};
use crate::query::ContactQuery;
use crate::store::{DataStore, RecordStore};

/// The main API facade for contactz operations.
pub struct ContactzApi<S: DataStore> {
    records: RecordStore,
    store: S,
    paths: commands::ContactzPaths,
    config: ContactzConfig,
}

impl<S: DataStore> ContactzApi<S> {
    pub fn new(store: S, paths: commands::ContactzPaths, config: ContactzConfig) -> Self {
        let records = RecordStore::from(store.load());
        tracing::debug!(count = records.len(), "session started");
        Self {
            records,
            store,
            paths,
            config,
        }
    }

    pub fn add_contact(&mut self, input: ContactInput) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.records, &mut self.store, input, self.config.id_style)
    }

    pub fn edit_contact(
        &mut self,
        selection: Option<usize>,
        input: ContactInput,
    ) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.records, &mut self.store, selection, input)
    }

    pub fn delete_contact<F>(
        &mut self,
        selection: Option<usize>,
        confirm: F,
    ) -> Result<commands::CmdResult>
    where
        F: FnOnce(&Contact) -> bool,
    {
        commands::delete::run(&mut self.records, &mut self.store, selection, confirm)
    }

    pub fn list_contacts(&self, query: &ContactQuery) -> commands::CmdResult {
        commands::list::run(&self.records, query)
    }

    pub fn export_all(&self) -> Result<commands::CmdResult> {
        commands::export::run(&self.records, &self.paths.data_dir)
    }

    pub fn compute_stats(&self) -> commands::CmdResult {
        commands::stats::run(&self.records)
    }

    pub fn pick_random(&self) -> Result<commands::CmdResult> {
        commands::random::run(&self.records, &mut rand::thread_rng())
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn contacts(&self) -> &[Contact] {
        self.records.all()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, ContactStats, ContactzPaths, MessageLevel};
