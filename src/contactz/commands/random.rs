use crate::commands::CmdResult;
use crate::error::{ContactzError, Result};
use crate::store::RecordStore;
use rand::seq::SliceRandom;
use rand::Rng;

/// Pick one contact uniformly at random.
pub fn run<R: Rng + ?Sized>(records: &RecordStore, rng: &mut R) -> Result<CmdResult> {
    let picked = records
        .all()
        .choose(rng)
        .cloned()
        .ok_or(ContactzError::NoContacts)?;

    Ok(CmdResult::default()
        .with_total(records.len())
        .with_affected_contacts(vec![picked]))
}
