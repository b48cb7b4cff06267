use crate::commands::{CmdResult, ContactStats};
use crate::store::RecordStore;

pub fn run(records: &RecordStore) -> CmdResult {
    let stats = compute(records);
    CmdResult::default()
        .with_total(stats.total)
        .with_stats(stats)
}

/// Single pass tally; categories keep first-seen order.
pub fn compute(records: &RecordStore) -> ContactStats {
    let mut by_category: Vec<(String, usize)> = Vec::new();
    for contact in records.all() {
        match by_category.iter_mut().find(|(c, _)| *c == contact.category) {
            Some((_, n)) => *n += 1,
            None => by_category.push((contact.category.clone(), 1)),
        }
    }
    ContactStats {
        total: records.len(),
        by_category,
    }
}
