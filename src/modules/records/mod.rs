pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Category, CategoryFilter, Record, RecordDraft, RecordSummary, SortKey, SortOrder, ViewQuery};
pub use repositories::RecordRepository;
pub use services::{RecordService, RecordsView};
