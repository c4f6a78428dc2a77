//! Record trait shared by every entity shown in a page list.

/// Integer identifier of a record within its list.
pub type RecordId = u32;

/// An entity held in an [`EntityList`](crate::logic::EntityList).
///
/// `Draft` is the editable subset of the record's fields, copied out when an inline
/// edit begins and written back on commit. Records without inline editing use `()`.
pub trait Record: Clone {
    type Draft: Clone;

    fn id(&self) -> RecordId;

    /// Copy of the fields an inline edit may change.
    fn draft(&self) -> Self::Draft;

    /// Replace the editable fields with `draft`. Other fields stay untouched.
    fn apply(&mut self, draft: Self::Draft);
}

/// Free-text searchable record: the text fields a search query is matched against.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// Record carrying an enumerated status.
pub trait HasStatus {
    type Status: Copy + PartialEq;

    fn status(&self) -> Self::Status;
}

/// Initials for avatar fallbacks: first char of each whitespace-separated word.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}
