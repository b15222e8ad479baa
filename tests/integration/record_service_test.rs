/// Integration tests for the calculate-save-browse flow
///
/// Tests:
/// - Form input -> calculation -> saved record
/// - Records view (projection, summary, categories) tracks mutations
/// - Validation errors never reach storage
use gstledger::config::storage::DEFAULT_RECORDS_KEY;
use gstledger::config::{AppConfig, Config, StorageBackend, StorageConfig};
use gstledger::core::{KeyValueStore, ValidationError};
use gstledger::records::{
    Category, CategoryFilter, RecordRepository, RecordService, SortKey, SortOrder, ViewQuery,
};
use gstledger::storage::InMemoryStore;
use rust_decimal_macros::dec;
use std::sync::Arc;

mod store_setup;
use store_setup::FlakyStore;

fn service_over(store: Arc<InMemoryStore>) -> RecordService {
    RecordService::new(RecordRepository::with_default_key(store))
}

#[tokio::test]
async fn test_calculate_and_save() {
    let store = Arc::new(InMemoryStore::new());
    let mut service = service_over(store.clone());

    let breakdown = service.calculate("100", "18").unwrap();
    assert_eq!(breakdown.gst_amount, dec!(18));
    assert_eq!(breakdown.total_amount, dec!(118));

    let saved = service
        .save_calculation(&breakdown, "Notebook", Category::Education, true)
        .await
        .unwrap();

    assert_eq!(saved.product_name, "Notebook");
    assert_eq!(saved.total_amount, dec!(118));
    assert!(saved.is_favorite);
    assert!(store.get(DEFAULT_RECORDS_KEY).await.unwrap().is_some());
}

#[tokio::test]
async fn test_blank_product_name_is_rejected_before_storage() {
    let store = Arc::new(InMemoryStore::new());
    let mut service = service_over(store.clone());

    let breakdown = service.calculate("100", "5").unwrap();
    let err = service
        .save_calculation(&breakdown, "   ", Category::General, false)
        .await
        .unwrap_err();

    assert_eq!(err.as_validation(), Some(&ValidationError::EmptyProductName));
    assert_eq!(store.get(DEFAULT_RECORDS_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn test_invalid_form_input_is_a_field_error() {
    let service = service_over(Arc::new(InMemoryStore::new()));

    let err = service.calculate("0", "18").unwrap_err();
    assert_eq!(err.as_validation(), Some(&ValidationError::InvalidAmount));

    let err = service.calculate("100", "150").unwrap_err();
    assert_eq!(err.as_validation(), Some(&ValidationError::InvalidRate));
}

#[tokio::test]
async fn test_view_follows_mutations() {
    let mut service = service_over(Arc::new(InMemoryStore::new()));
    service.refresh().await.unwrap();

    let empty = service.view(&ViewQuery::default());
    assert!(empty.records.is_empty());
    assert_eq!(empty.summary.formatted_total_gst(), "0.00");
    assert_eq!(empty.categories, vec![CategoryFilter::All]);

    let rice = service.calculate("200", "5").unwrap();
    let phone = service.calculate("10000", "18").unwrap();
    let rice = service
        .save_calculation(&rice, "Basmati Rice", Category::Food, false)
        .await
        .unwrap();
    service
        .save_calculation(&phone, "Phone", Category::Electronics, false)
        .await
        .unwrap();

    let view = service.view(&ViewQuery::default());
    assert_eq!(view.summary.count, 2);
    assert_eq!(view.summary.formatted_total_gst(), "1810.00");
    assert_eq!(
        view.categories,
        vec![
            CategoryFilter::All,
            CategoryFilter::Only(Category::Electronics),
            CategoryFilter::Only(Category::Food),
        ]
    );

    let food = service.view(&ViewQuery::new().with_category(Category::Food));
    assert_eq!(food.records.len(), 1);
    assert_eq!(food.summary.formatted_total_gst(), "10.00");

    service.toggle_favorite(&rice.id).await.unwrap();
    let cheapest_first = service.view(&ViewQuery::new().with_sort(SortKey::Amount, SortOrder::Asc));
    assert!(cheapest_first.records[0].is_favorite);

    service.delete(&rice.id).await.unwrap();
    let view = service.view(&ViewQuery::default());
    assert_eq!(view.summary.count, 1);
    assert_eq!(
        view.categories,
        vec![CategoryFilter::All, CategoryFilter::Only(Category::Electronics)]
    );
}

#[tokio::test]
async fn test_failed_save_is_reported_and_view_unchanged() {
    let store = FlakyStore::new();
    let mut service = RecordService::new(RecordRepository::with_default_key(store.clone()));

    let breakdown = service.calculate("100", "12").unwrap();
    store.fail_writes(true);

    let err = service
        .save_calculation(&breakdown, "Soap", Category::General, false)
        .await
        .unwrap_err();

    assert!(err.is_persistence());
    assert!(service.view(&ViewQuery::default()).records.is_empty());
    assert!(service.repository().records().is_empty());
}

#[tokio::test]
async fn test_configured_default_rate_prefills_calculation() {
    let config = Config {
        app: AppConfig {
            default_gst_rate: dec!(12),
            ..AppConfig::default()
        },
        storage: StorageConfig {
            backend: StorageBackend::Memory,
            data_dir: "./data".into(),
            records_key: DEFAULT_RECORDS_KEY.to_string(),
        },
    };
    config.validate().unwrap();

    let mut service = RecordService::from_config(&config);
    assert_eq!(service.default_gst_rate(), dec!(12));

    let breakdown = service.calculate_at_default_rate("1000").unwrap();
    assert_eq!(breakdown.gst_rate, dec!(12));
    assert_eq!(breakdown.total_amount, dec!(1120));

    service
        .save_calculation(&breakdown, "Jacket", Category::Clothing, false)
        .await
        .unwrap();
    assert_eq!(service.repository().records().len(), 1);
}

#[test]
fn test_stock_default_rate_is_eighteen() {
    let service = service_over(Arc::new(InMemoryStore::new()));
    assert_eq!(service.default_gst_rate(), dec!(18));
    assert_eq!(
        service.calculate_at_default_rate("").unwrap_err().as_validation(),
        Some(&ValidationError::InvalidAmount)
    );
}
