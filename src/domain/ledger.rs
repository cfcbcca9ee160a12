use uuid::Uuid;

use super::cooldown::CooldownEngine;
use super::error::LedgerError;
use super::record::{HotelRecord, RecordFields};

/// Ordered collection of stays.
///
/// Every operation borrows the ledger and returns a new one, so a rejected
/// change leaves the caller's value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    records: Vec<HotelRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[HotelRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &HotelRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Result<&HotelRecord, LedgerError> {
        self.records
            .iter()
            .find(|record| record.id() == id)
            .ok_or(LedgerError::NotFound(id))
    }

    pub fn add(&self, record: HotelRecord) -> Result<Self, LedgerError> {
        validate(&record.fields())?;
        if !CooldownEngine::can_insert(&self.records, &record.name) {
            tracing::debug!(name = %record.name, "rejected duplicate stay");
            return Err(LedgerError::DuplicateName(record.name));
        }

        tracing::debug!(id = %record.id(), name = %record.name, "stay added");
        let mut records = self.records.clone();
        records.push(record);
        Ok(Self { records })
    }

    pub fn update(&self, id: Uuid, fields: RecordFields) -> Result<Self, LedgerError> {
        let index = self
            .records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(LedgerError::NotFound(id))?;

        validate(&fields)?;
        if !CooldownEngine::can_rename(&self.records, id, &fields.name) {
            tracing::debug!(%id, name = %fields.name, "rejected rename to existing name");
            return Err(LedgerError::DuplicateName(fields.name));
        }

        tracing::debug!(%id, name = %fields.name, "stay updated");
        let mut records = self.records.clone();
        records[index].apply(fields);
        Ok(Self { records })
    }

    /// Removing an unknown id returns an identical ledger.
    pub fn remove(&self, id: Uuid) -> Self {
        let records: Vec<HotelRecord> = self
            .records
            .iter()
            .filter(|record| record.id() != id)
            .cloned()
            .collect();

        if records.len() != self.records.len() {
            tracing::debug!(%id, "stay removed");
        }
        Self { records }
    }

    pub fn remove_at(&self, index: usize) -> Self {
        match self.records.get(index) {
            Some(record) => self.remove(record.id()),
            None => self.clone(),
        }
    }
}

fn validate(fields: &RecordFields) -> Result<(), LedgerError> {
    if fields.name.is_empty() {
        return Err(LedgerError::EmptyName);
    }
    if fields.custom_cooldown_days == Some(0) {
        return Err(LedgerError::InvalidCooldown);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fields(name: &str) -> RecordFields {
        RecordFields::new(name, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), None)
    }

    fn ledger_with(names: &[&str]) -> Ledger {
        names.iter().fold(Ledger::new(), |ledger, name| {
            ledger.add(HotelRecord::new(fields(name))).unwrap()
        })
    }

    fn names(ledger: &Ledger) -> Vec<&str> {
        ledger.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let ledger = ledger_with(&["Ritz", "Hilton", "Plaza"]);
        assert_eq!(names(&ledger), vec!["Ritz", "Hilton", "Plaza"]);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_add_rejects_duplicate_name() {
        let ledger = ledger_with(&["Plaza"]);

        let result = ledger.add(HotelRecord::new(fields("Plaza")));
        assert_eq!(result, Err(LedgerError::DuplicateName("Plaza".to_string())));
        assert_eq!(names(&ledger), vec!["Plaza"]);

        let ledger = ledger.add(HotelRecord::new(fields("Plaza Hotel"))).unwrap();
        assert_eq!(names(&ledger), vec!["Plaza", "Plaza Hotel"]);
    }

    #[test]
    fn test_add_does_not_mutate_original() {
        let original = ledger_with(&["Ritz"]);
        let added = original.add(HotelRecord::new(fields("Hilton"))).unwrap();

        assert_eq!(original.len(), 1);
        assert_eq!(added.len(), 2);
    }

    #[test]
    fn test_add_validates_fields() {
        let ledger = Ledger::new();
        assert_eq!(
            ledger.add(HotelRecord::new(fields(""))),
            Err(LedgerError::EmptyName)
        );

        let mut zero = fields("Ritz");
        zero.custom_cooldown_days = Some(0);
        assert_eq!(
            ledger.add(HotelRecord::new(zero)),
            Err(LedgerError::InvalidCooldown)
        );
    }

    #[test]
    fn test_update_rejects_name_of_other_record() {
        let ledger = ledger_with(&["Ritz", "X"]);
        let ritz = ledger.records()[0].id();

        let result = ledger.update(ritz, fields("X"));
        assert_eq!(result, Err(LedgerError::DuplicateName("X".to_string())));
        assert_eq!(names(&ledger), vec!["Ritz", "X"]);
    }

    #[test]
    fn test_update_to_own_name_succeeds() {
        let ledger = ledger_with(&["Ritz", "Hilton"]);
        let ritz = ledger.records()[0].id();

        let mut changed = fields("Ritz");
        changed.custom_cooldown_days = Some(14);
        let updated = ledger.update(ritz, changed).unwrap();

        let record = updated.get(ritz).unwrap();
        assert_eq!(record.name, "Ritz");
        assert_eq!(record.custom_cooldown_days, Some(14));
        assert_eq!(ledger.get(ritz).unwrap().custom_cooldown_days, None);
    }

    #[test]
    fn test_update_rename_keeps_position_and_id() {
        let ledger = ledger_with(&["Ritz", "Hilton", "Plaza"]);
        let hilton = ledger.records()[1].id();

        let updated = ledger.update(hilton, fields("Hilton Garden")).unwrap();
        assert_eq!(names(&updated), vec!["Ritz", "Hilton Garden", "Plaza"]);
        assert_eq!(updated.records()[1].id(), hilton);
    }

    #[test]
    fn test_update_unknown_id() {
        let ledger = ledger_with(&["Ritz"]);
        let missing = Uuid::new_v4();

        assert_eq!(
            ledger.update(missing, fields("Hilton")),
            Err(LedgerError::NotFound(missing))
        );
    }

    #[test]
    fn test_names_differing_in_whitespace_are_distinct() {
        let ledger = ledger_with(&["Plaza", "Plaza "]);
        assert_eq!(names(&ledger), vec!["Plaza", "Plaza "]);
    }

    #[test]
    fn test_remove() {
        let ledger = ledger_with(&["Ritz", "Hilton", "Plaza"]);
        let hilton = ledger.records()[1].id();

        let removed = ledger.remove(hilton);
        assert_eq!(names(&removed), vec!["Ritz", "Plaza"]);
        assert_eq!(ledger.len(), 3);

        // name becomes available again once removed
        assert!(removed.add(HotelRecord::new(fields("Hilton"))).is_ok());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let ledger = ledger_with(&["Ritz"]);
        assert_eq!(ledger.remove(Uuid::new_v4()), ledger);
    }

    #[test]
    fn test_remove_at() {
        let ledger = ledger_with(&["Ritz", "Hilton", "Plaza"]);

        assert_eq!(names(&ledger.remove_at(0)), vec!["Hilton", "Plaza"]);
        assert_eq!(names(&ledger.remove_at(2)), vec!["Ritz", "Hilton"]);
        assert_eq!(ledger.remove_at(3), ledger);
    }
}
