use crate::commands::CmdResult;
use crate::query::{filter_contacts, ContactQuery};
use crate::store::RecordStore;

pub fn run(records: &RecordStore, query: &ContactQuery) -> CmdResult {
    let listed = filter_contacts(records.all(), query);
    CmdResult::default()
        .with_listed_contacts(listed)
        .with_total(records.len())
}
