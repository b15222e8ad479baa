/// Integration tests for theme and notification preferences
use gstledger::core::KeyValueStore;
use gstledger::settings::repositories::{NOTIFICATION_KEY, THEME_KEY};
use gstledger::settings::{AppSettings, SettingsRepository, Theme};
use gstledger::storage::InMemoryStore;
use std::sync::Arc;

mod store_setup;
use store_setup::FlakyStore;

#[tokio::test]
async fn test_defaults_when_nothing_stored() {
    let repo = SettingsRepository::new(Arc::new(InMemoryStore::new()));
    assert_eq!(repo.load().await.unwrap(), AppSettings::default());
}

#[tokio::test]
async fn test_reads_stored_values() {
    let store = InMemoryStore::with_entries([(THEME_KEY, "dark"), (NOTIFICATION_KEY, "disabled")]);
    let repo = SettingsRepository::new(Arc::new(store));

    let settings = repo.load().await.unwrap();
    assert_eq!(settings.theme, Theme::Dark);
    assert!(!settings.notifications_enabled);
}

#[tokio::test]
async fn test_toggles_persist() {
    let store = Arc::new(InMemoryStore::new());
    let repo = SettingsRepository::new(store.clone());

    assert_eq!(repo.toggle_theme().await.unwrap(), Theme::Dark);
    assert!(!repo.toggle_notifications().await.unwrap());

    assert_eq!(store.get(THEME_KEY).await.unwrap().as_deref(), Some("dark"));
    assert_eq!(
        store.get(NOTIFICATION_KEY).await.unwrap().as_deref(),
        Some("disabled")
    );

    assert_eq!(repo.toggle_theme().await.unwrap(), Theme::Light);
    assert!(repo.toggle_notifications().await.unwrap());
}

#[tokio::test]
async fn test_settings_do_not_touch_records() {
    let store = Arc::new(InMemoryStore::new());
    let repo = SettingsRepository::new(store.clone());

    repo.toggle_theme().await.unwrap();
    assert_eq!(store.get("GST_RECORDS").await.unwrap(), None);
}

#[tokio::test]
async fn test_write_failure_is_reported() {
    let store = FlakyStore::new();
    let repo = SettingsRepository::new(store.clone());

    store.fail_writes(true);
    assert!(repo.toggle_theme().await.unwrap_err().is_persistence());

    store.fail_writes(false);
    assert_eq!(repo.load().await.unwrap().theme, Theme::Light);
}
