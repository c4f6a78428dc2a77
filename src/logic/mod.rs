//! Page state machinery: list store, inline editing, filtering, forms, search timer.

mod edit;
mod filter;
mod form;
mod search;
mod store;

pub use edit::{EditController, EditSession};
pub use filter::{filter, matches_query, search, with_status, StatusFilter, ALL_SENTINEL};
pub use form::{FormCollector, FormSchema};
pub use search::SearchTimer;
pub use store::EntityList;
