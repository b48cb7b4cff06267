use crate::commands::{persist_or_rollback, CmdMessage, CmdResult};
use crate::error::{ContactzError, Result};
use crate::model::{Contact, ContactInput, IdStyle};
use crate::store::{DataStore, RecordStore};
use tracing::info;

pub fn run<S: DataStore>(
    records: &mut RecordStore,
    store: &mut S,
    input: ContactInput,
    id_style: IdStyle,
) -> Result<CmdResult> {
    let input = input.validated()?;

    // Phones are only checked here; edits and loads may still produce duplicates.
    if records.find_by_phone(&input.phone).is_some() {
        return Err(ContactzError::DuplicatePhone(input.phone));
    }

    let contact = Contact::new(input, id_style);
    records.append(contact.clone());
    persist_or_rollback(records, store, |r| {
        r.remove_at(r.len() - 1).ok();
    })?;

    info!(id = %contact.id, "contact added");
    let mut result = CmdResult::default().with_total(records.len());
    result.add_message(CmdMessage::success(format!("Added: {}", contact.name)));
    Ok(result.with_affected_contacts(vec![contact]))
}
