use log::debug;
use shared::{Result, SharedError};
use uuid::Uuid;

/// A record with a store-unique string identifier.
pub trait Keyed {
    fn id(&self) -> &str;
}

/// Generates a caller-side identifier like `"member-2f9c…"`.
///
/// Stores never assign ids themselves; callers do, either from a counter
/// (seed data) or from this helper (interactive creation).
pub fn new_record_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

/// Ordered in-memory collection backing one admin view.
///
/// The store owns ordering and id uniqueness, nothing else: validation
/// happens before records get here, and all querying goes through
/// [`crate::listing`]. Mutations are synchronous and single-writer; an
/// absent id is an error, never a silent no-op.
#[derive(Debug, Clone)]
pub struct RecordStore<R: Keyed> {
    records: Vec<R>,
}

impl<R: Keyed> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Keyed> RecordStore<R> {
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Builds a store from pre-validated seed records, rejecting duplicate ids.
    pub fn seed(records: Vec<R>) -> Result<Self> {
        let mut store = Self::new();
        for record in records {
            store.create(record)?;
        }
        Ok(store)
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Appends a record at the tail; the id must not already be present.
    ///
    /// Append is the one insertion convention used across all domains, so
    /// "newest last" holds uniformly in every view.
    pub fn create(&mut self, record: R) -> Result<()> {
        if self.get(record.id()).is_some() {
            return Err(SharedError::Conflict(format!(
                "duplicate id {}",
                record.id()
            )));
        }
        debug!("store create: {}", record.id());
        self.records.push(record);
        Ok(())
    }

    /// Edits the record matching `id` in place.
    pub fn update(&mut self, id: &str, patch: impl FnOnce(&mut R)) -> Result<()> {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                debug!("store update: {id}");
                patch(record);
                Ok(())
            }
            None => Err(SharedError::NotFound(id.to_string())),
        }
    }

    /// Removes and returns the record matching `id`.
    pub fn delete(&mut self, id: &str) -> Result<R> {
        match self.records.iter().position(|r| r.id() == id) {
            Some(index) => {
                debug!("store delete: {id}");
                Ok(self.records.remove(index))
            }
            None => Err(SharedError::NotFound(id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: String,
        body: String,
    }

    impl Keyed for Note {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn note(id: &str, body: &str) -> Note {
        Note {
            id: id.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_seed_rejects_duplicate_ids() {
        let result = RecordStore::seed(vec![note("n-1", "a"), note("n-1", "b")]);
        assert!(matches!(result, Err(SharedError::Conflict(_))));
    }

    #[test]
    fn test_create_appends_at_tail() {
        let mut store = RecordStore::seed(vec![note("n-1", "a")]).unwrap();
        store.create(note("n-2", "b")).unwrap();
        let ids: Vec<&str> = store.records().iter().map(|n| n.id()).collect();
        assert_eq!(ids, vec!["n-1", "n-2"]);
    }

    #[test]
    fn test_update_edits_in_place() {
        let mut store = RecordStore::seed(vec![note("n-1", "a")]).unwrap();
        store.update("n-1", |n| n.body = "edited".to_string()).unwrap();
        assert_eq!(store.get("n-1").unwrap().body, "edited");
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let mut store = RecordStore::seed(vec![note("n-1", "a")]).unwrap();
        let result = store.update("n-9", |n| n.body.clear());
        assert!(matches!(result, Err(SharedError::NotFound(_))));
    }

    #[test]
    fn test_delete_returns_the_record() {
        let mut store = RecordStore::seed(vec![note("n-1", "a"), note("n-2", "b")]).unwrap();
        let removed = store.delete("n-1").unwrap();
        assert_eq!(removed.body, "a");
        assert_eq!(store.len(), 1);
        assert!(store.get("n-1").is_none());
    }

    #[test]
    fn test_delete_missing_id_is_not_found() {
        let mut store: RecordStore<Note> = RecordStore::new();
        assert!(matches!(store.delete("n-1"), Err(SharedError::NotFound(_))));
    }

    #[test]
    fn test_new_record_id_has_prefix_and_is_unique() {
        let a = new_record_id("member");
        let b = new_record_id("member");
        assert!(a.starts_with("member-"));
        assert_ne!(a, b);
    }
}
