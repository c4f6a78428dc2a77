//! Entity list: ordered, id-keyed records owned by one page.

use crate::models::{Record, RecordId};
use serde::Serialize;

/// Ordered collection of records with unique ids.
///
/// Ids are minted from a counter that only grows, so an id freed by `remove` is never handed
/// out again.
#[derive(Clone, Debug)]
pub struct EntityList<T> {
    items: Vec<T>,
    next_id: RecordId,
}

impl<T: Record> EntityList<T> {
    /// Empty list; the first minted id is 1.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// List holding `items` in the given order. Minting continues after the largest seeded id.
    pub fn seeded(items: Vec<T>) -> Self {
        let next_id = items.iter().map(Record::id).max().map_or(1, |max| max + 1);
        Self { items, next_id }
    }

    /// Id the next `add` will assign.
    pub fn next_id(&self) -> RecordId {
        self.next_id
    }

    /// Append a record built from a freshly minted id. Returns that id.
    pub fn add(&mut self, build: impl FnOnce(RecordId) -> T) -> RecordId {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(build(id));
        id
    }

    /// Remove the record with `id`. Returns false (no-op) if there is none.
    pub fn remove(&mut self, id: RecordId) -> bool {
        let before = self.items.len();
        self.items.retain(|r| r.id() != id);
        self.items.len() != before
    }

    /// Apply `patch` to the record with `id`. Returns false (no-op) if there is none.
    pub fn update(&mut self, id: RecordId, patch: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                patch(record);
                true
            }
            None => false,
        }
    }

    pub fn get(&self) -> &[T] {
        &self.items
    }

    pub fn find(&self, id: RecordId) -> Option<&T> {
        self.items.iter().find(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Record> Default for EntityList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Serialize> Serialize for EntityList<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}
