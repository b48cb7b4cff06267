use crate::error::{ContactzError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Tag every generated contact id starts with.
pub const ID_PREFIX: &str = "CT";

pub const DEFAULT_CATEGORY: &str = "General";

/// Categories offered when creating or editing a contact.
///
/// The store itself accepts any string, this list only drives the input side.
pub const CATEGORIES: [&str; 6] = [
    "General",
    "Family",
    "Friends",
    "Work",
    "Business",
    "Emergency",
];

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// A single contact record.
///
/// Field order matters: it is the key order of the persisted JSON objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(default = "default_category")]
    pub category: String,
    pub id: String,
}

impl Contact {
    /// Builds a contact with a freshly generated id.
    pub fn new(input: ContactInput, style: IdStyle) -> Self {
        Self {
            name: input.name,
            phone: input.phone,
            email: input.email,
            category: input.category,
            id: generate_id(style, &mut rand::thread_rng()),
        }
    }

    /// Overwrites every user-editable field. The id is left alone.
    pub fn apply(&mut self, input: ContactInput) {
        self.name = input.name;
        self.phone = input.phone;
        self.email = input.email;
        self.category = input.category;
    }
}

/// User supplied fields for a new or edited contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInput {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub category: String,
}

impl ContactInput {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            category: category.into(),
        }
    }

    /// Prefills an input from an existing record, the way an edit form would.
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            email: contact.email.clone(),
            category: contact.category.clone(),
        }
    }

    /// The input gate: trims text fields and requires a name and a phone.
    pub fn validated(self) -> Result<Self> {
        let name = self.name.trim().to_string();
        let phone = self.phone.trim().to_string();
        if name.is_empty() {
            return Err(ContactzError::MissingField("Name"));
        }
        if phone.is_empty() {
            return Err(ContactzError::MissingField("Phone"));
        }
        let category = if self.category.trim().is_empty() {
            default_category()
        } else {
            self.category
        };
        Ok(Self {
            name,
            phone,
            email: self.email.trim().to_string(),
            category,
        })
    }
}

/// How ids are generated for new contacts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStyle {
    /// `CT` + a v4 UUID in simple form.
    #[default]
    Uuid,
    /// `CT` + a random number in 1000..=9999. Collisions are possible.
    Legacy,
}

impl fmt::Display for IdStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdStyle::Uuid => write!(f, "uuid"),
            IdStyle::Legacy => write!(f, "legacy"),
        }
    }
}

impl FromStr for IdStyle {
    type Err = ContactzError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uuid" => Ok(IdStyle::Uuid),
            "legacy" => Ok(IdStyle::Legacy),
            other => Err(ContactzError::Config(format!(
                "Unknown id style '{}' (expected uuid or legacy)",
                other
            ))),
        }
    }
}

pub fn generate_id<R: Rng + ?Sized>(style: IdStyle, rng: &mut R) -> String {
    match style {
        IdStyle::Uuid => format!("{}{}", ID_PREFIX, Uuid::new_v4().simple()),
        IdStyle::Legacy => format!("{}{}", ID_PREFIX, rng.gen_range(1000..=9999)),
    }
}
