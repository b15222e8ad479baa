pub mod record_service;
pub mod view_projector;

pub use record_service::{RecordService, RecordsView};
pub use view_projector::{categories_of, project, summarize};
