use super::DataStore;
use crate::error::{ContactzError, Result};
use crate::model::Contact;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DEFAULT_DATA_FILE: &str = "contacts.json";

/// JSON file backed storage.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<dir>/<file_name>`.
    pub fn in_dir(dir: &Path, file_name: &str) -> Self {
        Self::new(dir.join(file_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ContactzError::Io)?;
            }
        }
        Ok(())
    }

    fn read_contacts(&self) -> Result<Vec<Contact>> {
        let content = fs::read_to_string(&self.path).map_err(ContactzError::Io)?;
        let contacts: Vec<Contact> =
            serde_json::from_str(&content).map_err(ContactzError::Serialization)?;
        Ok(contacts)
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Vec<Contact> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no contacts file yet");
            return Vec::new();
        }

        match self.read_contacts() {
            Ok(contacts) => {
                debug!(path = %self.path.display(), count = contacts.len(), "loaded contacts");
                contacts
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "contacts file unreadable, starting empty");
                Vec::new()
            }
        }
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(contacts).map_err(ContactzError::Serialization)?;
        fs::write(&self.path, content).map_err(ContactzError::Io)?;
        debug!(path = %self.path.display(), count = contacts.len(), "saved contacts");
        Ok(())
    }
}
