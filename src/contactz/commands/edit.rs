use crate::commands::{persist_or_rollback, CmdMessage, CmdResult};
use crate::error::{ContactzError, Result};
use crate::model::ContactInput;
use crate::store::{DataStore, RecordStore};
use tracing::info;

/// Overwrite the selected contact's fields in place.
///
/// No duplicate-phone check happens here: an edit may give a contact a phone
/// that another contact already has.
pub fn run<S: DataStore>(
    records: &mut RecordStore,
    store: &mut S,
    selection: Option<usize>,
    input: ContactInput,
) -> Result<CmdResult> {
    let index = selection.ok_or(ContactzError::NoSelection)?;
    records.get(index)?;
    let input = input.validated()?;

    let contact = records.get_mut(index)?;
    let previous = contact.clone();
    contact.apply(input);
    let updated = contact.clone();

    persist_or_rollback(records, store, |r| {
        if let Ok(c) = r.get_mut(index) {
            *c = previous;
        }
    })?;

    info!(id = %updated.id, "contact updated");
    let mut result = CmdResult::default().with_total(records.len());
    result.add_message(CmdMessage::success(format!("Updated: {}", updated.name)));
    Ok(result.with_affected_contacts(vec![updated]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn updates_fields_and_keeps_id() {
        let mut fx = StoreFixture::new()
            .with_contact("Ann", "1", "Family")
            .with_contact("Bob", "2", "Work");
        let id = fx.records.all()[1].id.clone();

        run(
            &mut fx.records,
            &mut fx.store,
            Some(1),
            ContactInput::new("Robert", "22", "bob@example.com", "Business"),
        )
        .unwrap();

        let bob = &fx.records.all()[1];
        assert_eq!(bob.id, id);
        assert_eq!(bob.name, "Robert");
        assert_eq!(bob.phone, "22");
        assert_eq!(bob.email, "bob@example.com");
        assert_eq!(bob.category, "Business");
        assert_eq!(fx.store.saved(), fx.records.all());
    }

    #[test]
    fn requires_selection() {
        let mut fx = StoreFixture::new().with_contact("Ann", "1", "Family");
        let err = run(
            &mut fx.records,
            &mut fx.store,
            None,
            ContactInput::new("Ann", "1", "", "Family"),
        )
        .unwrap_err();
        assert!(matches!(err, ContactzError::NoSelection));
    }

    #[test]
    fn allows_duplicate_phone() {
        let mut fx = StoreFixture::new()
            .with_contact("Ann", "1", "Family")
            .with_contact("Bob", "2", "Work");

        run(
            &mut fx.records,
            &mut fx.store,
            Some(1),
            ContactInput::new("Bob", "1", "", "Work"),
        )
        .unwrap();

        assert_eq!(fx.records.all()[0].phone, fx.records.all()[1].phone);
    }

    #[test]
    fn stale_selection_is_out_of_range() {
        let mut fx = StoreFixture::new().with_contact("Ann", "1", "Family");
        let err = run(
            &mut fx.records,
            &mut fx.store,
            Some(3),
            ContactInput::new("X", "9", "", "Work"),
        )
        .unwrap_err();
        assert!(matches!(err, ContactzError::OutOfRange { index: 3, len: 1 }));
    }

    #[test]
    fn failed_save_restores_previous_values() {
        let mut fx = StoreFixture::new()
            .with_contact("Ann", "1", "Family")
            .failing_saves();
        let before = fx.records.clone();

        let err = run(
            &mut fx.records,
            &mut fx.store,
            Some(0),
            ContactInput::new("Anne", "9", "", "Work"),
        )
        .unwrap_err();

        assert!(matches!(err, ContactzError::Io(_)));
        assert_eq!(fx.records, before);
    }
}
