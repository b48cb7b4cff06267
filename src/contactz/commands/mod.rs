use crate::config::ContactzConfig;
use crate::error::Result;
use crate::model::Contact;
use crate::query::DisplayContact;
use crate::store::{DataStore, RecordStore};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod export;
pub mod list;
pub mod random;
pub mod stats;

/// Where contactz reads and writes its files.
#[derive(Debug, Clone)]
pub struct ContactzPaths {
    pub data_dir: PathBuf,
}

impl ContactzPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_file(&self, config: &ContactzConfig) -> PathBuf {
        self.data_dir.join(&config.data_file)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

/// Per-category tally, in the order categories were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStats {
    pub total: usize,
    pub by_category: Vec<(String, usize)>,
}

impl ContactStats {
    pub fn count_for(&self, category: &str) -> usize {
        self.by_category
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_contacts: Vec<Contact>,
    pub listed_contacts: Vec<DisplayContact>,
    /// Size of the whole record store, independent of any filter.
    pub total: usize,
    pub export_path: Option<PathBuf>,
    pub stats: Option<ContactStats>,
    pub config: Option<ContactzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.affected_contacts = contacts;
        self
    }

    pub fn with_listed_contacts(mut self, contacts: Vec<DisplayContact>) -> Self {
        self.listed_contacts = contacts;
        self
    }

    pub fn with_total(mut self, total: usize) -> Self {
        self.total = total;
        self
    }

    pub fn with_export_path(mut self, path: PathBuf) -> Self {
        self.export_path = Some(path);
        self
    }

    pub fn with_stats(mut self, stats: ContactStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: ContactzConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Write the record store through to the backing store.
///
/// On failure `rollback` is applied to the records first, so memory keeps mirroring disk.
pub(crate) fn persist_or_rollback<S, F>(
    records: &mut RecordStore,
    store: &mut S,
    rollback: F,
) -> Result<()>
where
    S: DataStore,
    F: FnOnce(&mut RecordStore),
{
    if let Err(e) = store.save(records.all()) {
        tracing::error!(error = %e, "saving contacts failed, rolling back");
        rollback(records);
        return Err(e);
    }
    Ok(())
}
