use rust_decimal::Decimal;
use tracing::info;

use crate::config::{AppConfig, Config};
use crate::core::Result;
use crate::modules::records::models::{
    Category, CategoryFilter, Record, RecordDraft, RecordSummary, ViewQuery,
};
use crate::modules::records::repositories::RecordRepository;
use crate::modules::records::services::view_projector;
use crate::modules::taxes::{TaxBreakdown, TaxCalculator};

/// Everything the records screen shows for one view query
#[derive(Debug, Clone, PartialEq)]
pub struct RecordsView {
    pub records: Vec<Record>,
    pub summary: RecordSummary,
    pub categories: Vec<CategoryFilter>,
}

/// Service tying the calculator form and the records screen to the repository
pub struct RecordService {
    repository: RecordRepository,
    calculator: TaxCalculator,
    default_gst_rate: Decimal,
}

impl RecordService {
    /// Create a new record service with the stock default rate
    pub fn new(repository: RecordRepository) -> Self {
        Self::with_default_rate(repository, AppConfig::default().default_gst_rate)
    }

    pub fn with_default_rate(repository: RecordRepository, default_gst_rate: Decimal) -> Self {
        Self {
            repository,
            calculator: TaxCalculator::new(),
            default_gst_rate,
        }
    }

    /// Build the service over the configured store, records key and default rate
    pub fn from_config(config: &Config) -> Self {
        let repository = RecordRepository::new(
            config.storage.create_store(),
            config.storage.records_key.clone(),
        );
        Self::with_default_rate(repository, config.app.default_gst_rate)
    }

    pub fn repository(&self) -> &RecordRepository {
        &self.repository
    }

    /// Rate pre-selected on the calculator form
    pub fn default_gst_rate(&self) -> Decimal {
        self.default_gst_rate
    }

    /// Run the calculator on raw form input
    pub fn calculate(&self, base_amount: &str, gst_rate: &str) -> Result<TaxBreakdown> {
        self.calculator.calculate_from_input(base_amount, gst_rate)
    }

    /// Run the calculator on a raw amount at the pre-selected rate
    pub fn calculate_at_default_rate(&self, base_amount: &str) -> Result<TaxBreakdown> {
        self.calculator
            .calculate_from_input(base_amount, &self.default_gst_rate.to_string())
    }

    /// Save a calculation result with the metadata from the save dialog
    ///
    /// # Arguments
    /// * `breakdown` - Result of a prior calculation
    /// * `product_name` - Stored as typed; rejected when blank
    /// * `category` - Category chip picked in the dialog
    /// * `is_favorite` - Initial favourite flag
    ///
    /// # Returns
    /// * `Result<Record>` - The saved record
    pub async fn save_calculation(
        &mut self,
        breakdown: &TaxBreakdown,
        product_name: &str,
        category: Category,
        is_favorite: bool,
    ) -> Result<Record> {
        let draft = RecordDraft::from_breakdown(product_name, breakdown, category, is_favorite);
        let record = self.repository.add(draft).await?;

        info!(
            record_id = record.id.as_str(),
            gst_rate = %record.gst_rate,
            total_amount = %record.total_amount,
            "Calculation saved"
        );

        Ok(record)
    }

    /// Reload from storage, as when the records screen regains focus
    pub async fn refresh(&mut self) -> Result<()> {
        self.repository.load().await?;
        Ok(())
    }

    pub async fn delete(&mut self, id: &str) -> Result<()> {
        self.repository.remove(id).await
    }

    pub async fn toggle_favorite(&mut self, id: &str) -> Result<()> {
        self.repository.toggle_favorite(id).await
    }

    /// Derived view of the cached collection; recomputed on every call
    pub fn view(&self, query: &ViewQuery) -> RecordsView {
        let all = self.repository.records();
        let records = view_projector::project(all, query);
        let summary = view_projector::summarize(&records);

        RecordsView {
            records,
            summary,
            categories: view_projector::categories_of(all),
        }
    }
}
