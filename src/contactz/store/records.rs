use crate::error::{ContactzError, Result};
use crate::model::Contact;

/// Ordered contacts held for the session.
///
/// No uniqueness rules are enforced here, callers decide what may be appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    contacts: Vec<Contact>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Contact> {
        self.check(index)?;
        Ok(self.contacts.remove(index))
    }

    /// Puts a contact back at `index`, shifting later ones. `index == len` appends.
    pub fn insert(&mut self, index: usize, contact: Contact) -> Result<()> {
        if index > self.contacts.len() {
            return Err(self.out_of_range(index));
        }
        self.contacts.insert(index, contact);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<&Contact> {
        self.contacts
            .get(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Contact> {
        let len = self.contacts.len();
        self.contacts
            .get_mut(index)
            .ok_or(ContactzError::OutOfRange { index, len })
    }

    pub fn all(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn find_by_phone(&self, phone: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.phone == phone)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.contacts.len() {
            Ok(())
        } else {
            Err(self.out_of_range(index))
        }
    }

    fn out_of_range(&self, index: usize) -> ContactzError {
        ContactzError::OutOfRange {
            index,
            len: self.contacts.len(),
        }
    }
}

impl From<Vec<Contact>> for RecordStore {
    fn from(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }
}
