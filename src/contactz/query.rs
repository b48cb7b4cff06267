//! # Query Engine
//!
//! Computes the visible subset of the record store for a (category filter, search term)
//! pair. It is a pure function over a snapshot: nothing is cached and nothing is mutated,
//! so callers simply re-run it after every keystroke, filter change or mutation.
//!
//! ## Matching Rules
//!
//! A contact is shown when it passes the category filter AND either the term is empty,
//! the term is a case-insensitive substring of the name, or the term is a (case-sensitive)
//! substring of the phone.
//!
//! ## Positions
//!
//! Every entry carries the contact's position in the record store. Selections made on a
//! filtered view must use that position, never the row number in the view.

use crate::model::Contact;
use std::fmt;
use std::str::FromStr;

/// Sentinel that disables the category filter.
pub const ALL_SENTINEL: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(ALL_SENTINEL) {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Only(s.to_string()))
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "All"),
            CategoryFilter::Only(c) => write!(f, "{}", c),
        }
    }
}

/// The view parameters a presentation layer holds: current filter and search text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactQuery {
    pub category: CategoryFilter,
    pub term: String,
}

impl ContactQuery {
    pub fn new(category: CategoryFilter, term: impl Into<String>) -> Self {
        Self {
            category,
            term: term.into(),
        }
    }

    pub fn all() -> Self {
        Self::default()
    }

    pub fn matches(&self, contact: &Contact) -> bool {
        if !self.category.matches(&contact.category) {
            return false;
        }
        if self.term.is_empty() {
            return true;
        }
        contact
            .name
            .to_lowercase()
            .contains(&self.term.to_lowercase())
            || contact.phone.contains(&self.term)
    }
}

/// A contact as shown in a view, tagged with its record store position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayContact {
    pub index: usize,
    pub contact: Contact,
}

impl DisplayContact {
    /// 1-based number shown to users.
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

pub fn filter_contacts(contacts: &[Contact], query: &ContactQuery) -> Vec<DisplayContact> {
    contacts
        .iter()
        .enumerate()
        .filter(|(_, c)| query.matches(c))
        .map(|(index, c)| DisplayContact {
            index,
            contact: c.clone(),
        })
        .collect()
}

/// Parses a user-facing display number ("3") into a record store position (2).
pub fn parse_display_number(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(format!("Invalid contact number: {}", s)),
    }
}
