//! Inline edit controller: one draft at a time, committed into the list or discarded.

use crate::logic::store::EntityList;
use crate::models::{Record, RecordId};
use serde::Serialize;

/// Edit state of a list (or of a single record).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EditSession<D> {
    Idle,
    Editing { id: RecordId, draft: D },
}

/// Drives the `Idle -> Editing -> Idle` cycle for records of type `T`.
#[derive(Clone, Debug)]
pub struct EditController<T: Record> {
    session: EditSession<T::Draft>,
}

impl<T: Record> Default for EditController<T> {
    fn default() -> Self {
        Self {
            session: EditSession::Idle,
        }
    }
}

impl<T: Record> EditController<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &EditSession<T::Draft> {
        &self.session
    }

    pub fn editing_id(&self) -> Option<RecordId> {
        match &self.session {
            EditSession::Editing { id, .. } => Some(*id),
            EditSession::Idle => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id().is_some()
    }

    /// Start editing `id` in `list`, with the draft copied from the record.
    /// Replaces any draft already open. Returns false and changes nothing if `id` is absent.
    pub fn begin(&mut self, list: &EntityList<T>, id: RecordId) -> bool {
        match list.find(id) {
            Some(record) => {
                self.begin_record(record);
                true
            }
            None => false,
        }
    }

    /// Start editing a standalone record (one not held in a list).
    pub fn begin_record(&mut self, record: &T) {
        if let Some(previous) = self.editing_id() {
            log::debug!("Edit of {} replaced by edit of {}", previous, record.id());
        }
        self.session = EditSession::Editing {
            id: record.id(),
            draft: record.draft(),
        };
    }

    /// Mutable access to the open draft.
    pub fn draft_mut(&mut self) -> Option<&mut T::Draft> {
        match &mut self.session {
            EditSession::Editing { draft, .. } => Some(draft),
            EditSession::Idle => None,
        }
    }

    /// Write the draft into its record in `list` and return to Idle.
    /// Returns the id written, or None if idle or the record no longer exists.
    pub fn commit(&mut self, list: &mut EntityList<T>) -> Option<RecordId> {
        match std::mem::replace(&mut self.session, EditSession::Idle) {
            EditSession::Editing { id, draft } => {
                list.update(id, |record| record.apply(draft)).then_some(id)
            }
            EditSession::Idle => None,
        }
    }

    /// Write the draft into a standalone record and return to Idle.
    /// Returns false (and discards the draft) if the session targets a different record.
    pub fn commit_record(&mut self, record: &mut T) -> bool {
        match std::mem::replace(&mut self.session, EditSession::Idle) {
            EditSession::Editing { id, draft } if id == record.id() => {
                record.apply(draft);
                true
            }
            _ => false,
        }
    }

    /// Discard the draft without touching any record.
    pub fn cancel(&mut self) {
        self.session = EditSession::Idle;
    }
}
