pub mod settings_repository;

pub use settings_repository::{SettingsRepository, NOTIFICATION_KEY, THEME_KEY};
