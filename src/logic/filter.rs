//! Search and status filtering over page lists. Pure and order preserving.

use crate::models::{HasStatus, Searchable};
use serde::Serialize;
use std::str::FromStr;

/// Sentinel accepted in place of a status to match every record.
pub const ALL_SENTINEL: &str = "all";

/// Status half of a filter: everything, or one status.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter<S> {
    #[default]
    All,
    Only(S),
}

impl<S: Copy + PartialEq> StatusFilter<S> {
    pub fn matches(&self, status: S) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl<S: FromStr> StatusFilter<S> {
    /// Parse `"all"` (or an empty string) as [`StatusFilter::All`], anything else as a status.
    pub fn parse(raw: &str) -> Result<Self, S::Err> {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case(ALL_SENTINEL) {
            return Ok(StatusFilter::All);
        }
        raw.parse().map(StatusFilter::Only)
    }
}

/// Case-insensitive substring match of `query` against any of the record's search fields.
/// The empty query matches everything. Whitespace is part of the query.
pub fn matches_query<T: Searchable>(record: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Records matching `query`, in their original order.
pub fn search<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    records.iter().filter(|r| matches_query(*r, query)).collect()
}

/// Records matching `query` and `status`, in their original order.
pub fn filter<'a, T>(records: &'a [T], query: &str, status: &StatusFilter<T::Status>) -> Vec<&'a T>
where
    T: Searchable + HasStatus,
{
    records
        .iter()
        .filter(|r| status.matches(r.status()) && matches_query(*r, query))
        .collect()
}

/// Records with the given status, in their original order.
pub fn with_status<T: HasStatus>(records: &[T], status: T::Status) -> Vec<&T> {
    records.iter().filter(|r| r.status() == status).collect()
}
