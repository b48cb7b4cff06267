use crate::commands::MessageLevel;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactzError {
    #[error("Phone number already exists: {0}")]
    DuplicatePhone(String),

    #[error("Select a contact first")]
    NoSelection,

    #[error("No contacts yet, add some contacts first")]
    NoContacts,

    #[error("No contact at position {index} (store holds {len})")]
    OutOfRange { index: usize, len: usize },

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl ContactzError {
    /// How a presentation layer should surface this condition.
    pub fn level(&self) -> MessageLevel {
        match self {
            ContactzError::NoContacts => MessageLevel::Info,
            ContactzError::NoSelection => MessageLevel::Warning,
            _ => MessageLevel::Error,
        }
    }
}

pub type Result<T> = std::result::Result<T, ContactzError>;
