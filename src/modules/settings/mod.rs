pub mod models;
pub mod repositories;

pub use models::{AppSettings, Theme};
pub use repositories::SettingsRepository;
