use super::DataStore;
use crate::error::{ContactzError, Result};
use crate::model::Contact;
use std::io;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    saved: Vec<Contact>,
    save_count: usize,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `contacts`, as if loaded from an existing file.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            saved: contacts,
            ..Self::default()
        }
    }

    pub fn saved(&self) -> &[Contact] {
        &self.saved
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Vec<Contact> {
        self.saved.clone()
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        if self.fail_saves {
            return Err(ContactzError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "store is read-only",
            )));
        }
        self.saved = contacts.to_vec();
        self.save_count += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::store::RecordStore;

    pub fn contact(name: &str, phone: &str, category: &str) -> Contact {
        Contact {
            name: name.to_string(),
            phone: phone.to_string(),
            email: String::new(),
            category: category.to_string(),
            id: format!("CT{}", 1000 + phone.len() * 7 + name.len()),
        }
    }

    /// Records plus backing store, pre-populated the way a loaded session would be.
    pub struct StoreFixture {
        pub records: RecordStore,
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
                records: RecordStore::new(),
                store: InMemoryStore::new(),
            }
        }

        pub fn with_contact(mut self, name: &str, phone: &str, category: &str) -> Self {
            self.records.append(contact(name, phone, category));
            self.store.saved = self.records.all().to_vec();
            self
        }

        pub fn with_contacts(mut self, count: usize, category: &str) -> Self {
            for i in 0..count {
                let name = format!("Test Contact {}", i + 1);
                let phone = format!("555-{:04}", i + 1);
                self.records.append(contact(&name, &phone, category));
            }
            self.store.saved = self.records.all().to_vec();
            self
        }

        pub fn failing_saves(mut self) -> Self {
            self.store.fail_saves = true;
            self
        }
    }
}
