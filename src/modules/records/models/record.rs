// Saved GST calculation with the metadata the user attached to it
//
// The collection of records is stored as one JSON array. Field names and
// number encoding match what the mobile app writes, so existing blobs load
// unchanged. Derived amounts are stored redundantly and never recomputed.

use chrono::{DateTime, SubsecRound, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{Result, ValidationError};
use crate::modules::taxes::{TaxBreakdown, TaxCalculator};

/// Fixed set of categories a record can be filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    General,
    Food,
    Electronics,
    Clothing,
    Services,
    Healthcare,
    Education,
    Other,
}

impl Category {
    /// All categories in the order the calculator offers them
    pub const ALL: [Category; 8] = [
        Category::General,
        Category::Food,
        Category::Electronics,
        Category::Clothing,
        Category::Services,
        Category::Healthcare,
        Category::Education,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Food => "Food",
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Services => "Services",
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

/// One persisted tax calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Opaque unique id, never reused
    pub id: String,

    /// Creation time, immutable
    #[serde(with = "crate::core::timezone::iso8601_millis")]
    pub date: DateTime<Utc>,

    pub product_name: String,

    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub base_amount: Decimal,

    /// Percentage, 0-100
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub gst_rate: Decimal,

    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub gst_amount: Decimal,

    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_amount: Decimal,

    #[serde(default)]
    pub category: Category,

    /// Only field that changes after creation
    #[serde(default)]
    pub is_favorite: bool,
}

impl Record {
    /// Build a record from a draft with a freshly generated id.
    ///
    /// `date` is truncated to milliseconds, the precision it is stored at.
    pub fn from_draft(draft: RecordDraft, date: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            date: date.trunc_subsecs(3),
            product_name: draft.product_name,
            base_amount: draft.base_amount,
            gst_rate: draft.gst_rate,
            gst_amount: draft.gst_amount,
            total_amount: draft.total_amount,
            category: draft.category,
            is_favorite: draft.is_favorite,
        }
    }

    /// The draft this record was created from
    pub fn to_draft(&self) -> RecordDraft {
        RecordDraft {
            product_name: self.product_name.clone(),
            base_amount: self.base_amount,
            gst_rate: self.gst_rate,
            gst_amount: self.gst_amount,
            total_amount: self.total_amount,
            category: self.category,
            is_favorite: self.is_favorite,
        }
    }

    pub fn matches_search(&self, needle_lowercase: &str) -> bool {
        needle_lowercase.is_empty() || self.product_name.to_lowercase().contains(needle_lowercase)
    }
}

/// Everything needed to create a record except its id and date
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDraft {
    pub product_name: String,
    pub base_amount: Decimal,
    pub gst_rate: Decimal,
    pub gst_amount: Decimal,
    pub total_amount: Decimal,
    pub category: Category,
    pub is_favorite: bool,
}

impl RecordDraft {
    /// Attach user metadata to a calculation result
    pub fn from_breakdown(
        product_name: impl Into<String>,
        breakdown: &TaxBreakdown,
        category: Category,
        is_favorite: bool,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            base_amount: breakdown.base_amount,
            gst_rate: breakdown.gst_rate,
            gst_amount: breakdown.gst_amount,
            total_amount: breakdown.total_amount,
            category,
            is_favorite,
        }
    }

    /// Check the draft before it is persisted.
    ///
    /// The product name must contain something other than whitespace, the
    /// base amount and rate must pass the calculator's checks, and the GST and
    /// total amounts must be exactly what the calculator derives from them.
    pub fn validate(&self) -> Result<()> {
        if self.product_name.trim().is_empty() {
            return Err(ValidationError::EmptyProductName.into());
        }

        let expected = TaxCalculator::new().calculate(self.base_amount, self.gst_rate)?;
        if expected.gst_amount != self.gst_amount || expected.total_amount != self.total_amount {
            return Err(ValidationError::InconsistentAmounts.into());
        }

        Ok(())
    }
}
