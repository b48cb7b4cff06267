use crate::commands::{persist_or_rollback, CmdMessage, CmdResult};
use crate::error::{ContactzError, Result};
use crate::model::Contact;
use crate::store::{DataStore, RecordStore};
use tracing::info;

/// Remove the selected contact once `confirm` agrees.
///
/// `confirm` is the presentation layer's yes/no prompt; it sees the contact about to go.
pub fn run<S, F>(
    records: &mut RecordStore,
    store: &mut S,
    selection: Option<usize>,
    confirm: F,
) -> Result<CmdResult>
where
    S: DataStore,
    F: FnOnce(&Contact) -> bool,
{
    let index = selection.ok_or(ContactzError::NoSelection)?;

    if !confirm(records.get(index)?) {
        let mut result = CmdResult::default().with_total(records.len());
        result.add_message(CmdMessage::info("Delete cancelled."));
        return Ok(result);
    }

    let removed = records.remove_at(index)?;
    let restore = removed.clone();
    persist_or_rollback(records, store, move |r| {
        r.insert(index, restore).ok();
    })?;

    info!(id = %removed.id, "contact deleted");
    let mut result = CmdResult::default().with_total(records.len());
    result.add_message(CmdMessage::success(format!("Deleted: {}", removed.name)));
    Ok(result.with_affected_contacts(vec![removed]))
}
