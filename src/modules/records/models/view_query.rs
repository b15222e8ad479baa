use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::record::Category;
use crate::core::currency::format_amount;
use crate::core::ValidationError;

/// Field the records list is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Creation timestamp
    #[default]
    Date,
    /// Total amount including GST
    Amount,
    /// Product name
    Name,
}

impl std::str::FromStr for SortKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(SortKey::Date),
            "amount" => Ok(SortKey::Amount),
            "name" => Ok(SortKey::Name),
            _ => Err(ValidationError::UnknownSortKey(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// The other direction, for the sort arrow button
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(ValidationError::UnknownSortOrder(s.to_string())),
        }
    }
}

/// Category chip selection: everything, or one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "All";

    pub fn accepts(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(Self::ALL_LABEL),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_LABEL {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

/// Immutable snapshot of the records screen controls.
///
/// The default is what the screen opens with: no search, all categories,
/// newest first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewQuery {
    pub search_text: String,
    pub category: CategoryFilter,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl ViewQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(self, search_text: impl Into<String>) -> Self {
        Self {
            search_text: search_text.into(),
            ..self
        }
    }

    pub fn with_category(self, category: impl Into<CategoryFilter>) -> Self {
        Self {
            category: category.into(),
            ..self
        }
    }

    pub fn with_sort(self, sort_by: SortKey, sort_order: SortOrder) -> Self {
        Self {
            sort_by,
            sort_order,
            ..self
        }
    }

    pub fn with_sort_order_toggled(self) -> Self {
        let sort_order = self.sort_order.toggled();
        Self { sort_order, ..self }
    }
}

/// Count and GST total over the currently visible records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordSummary {
    pub count: usize,
    pub total_gst_amount: Decimal,
}

impl RecordSummary {
    /// GST total as a fixed 2-decimal string
    pub fn formatted_total_gst(&self) -> String {
        format_amount(self.total_gst_amount)
    }
}
