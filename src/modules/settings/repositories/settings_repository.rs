use std::sync::Arc;
use tracing::{debug, info};

use crate::core::{KeyValueStore, Result};
use crate::modules::settings::models::settings::notifications_to_stored;
use crate::modules::settings::models::{AppSettings, Theme};

pub const THEME_KEY: &str = "THEME_SETTING";
pub const NOTIFICATION_KEY: &str = "NOTIFICATION_SETTING";

/// Theme and notification preferences, one store key each.
///
/// Independent of the record collection; shares only the store.
pub struct SettingsRepository {
    store: Arc<dyn KeyValueStore>,
}

impl SettingsRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read both preferences. Absent keys fall back to light theme and
    /// notifications enabled.
    pub async fn load(&self) -> Result<AppSettings> {
        let defaults = AppSettings::default();

        let theme = self
            .store
            .get(THEME_KEY)
            .await?
            .map(|value| Theme::from_stored(&value))
            .unwrap_or(defaults.theme);

        let notifications_enabled = self
            .store
            .get(NOTIFICATION_KEY)
            .await?
            .map(|value| value == notifications_to_stored(true))
            .unwrap_or(defaults.notifications_enabled);

        debug!(%theme, notifications_enabled, "Settings loaded");

        Ok(AppSettings {
            theme,
            notifications_enabled,
        })
    }

    /// Switch between light and dark, returning the new theme
    pub async fn toggle_theme(&self) -> Result<Theme> {
        let theme = self.load().await?.theme.toggled();
        self.store.set(THEME_KEY, theme.as_str()).await?;

        info!(%theme, "Theme changed");
        Ok(theme)
    }

    /// Flip notifications on or off, returning the new state
    pub async fn toggle_notifications(&self) -> Result<bool> {
        let enabled = !self.load().await?.notifications_enabled;
        self.store
            .set(NOTIFICATION_KEY, notifications_to_stored(enabled))
            .await?;

        info!(notifications_enabled = enabled, "Notification setting changed");
        Ok(enabled)
    }
}
