pub mod record;
pub mod view_query;

pub use record::{Category, Record, RecordDraft};
pub use view_query::{CategoryFilter, RecordSummary, SortKey, SortOrder, ViewQuery};
