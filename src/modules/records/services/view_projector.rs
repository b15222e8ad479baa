use rust_decimal::Decimal;
use std::cmp::Ordering;

use crate::modules::records::models::{
    CategoryFilter, Record, RecordSummary, SortKey, SortOrder, ViewQuery,
};

/// Filter and order `records` for display.
///
/// Keeps records whose product name contains the search text (ignoring case)
/// and whose category passes the filter, then sorts them stably by the query's
/// key. Descending order reverses the comparison, so ties keep collection order
/// either way.
pub fn project(records: &[Record], query: &ViewQuery) -> Vec<Record> {
    let needle = query.search_text.to_lowercase();

    let mut visible: Vec<Record> = records
        .iter()
        .filter(|record| record.matches_search(&needle))
        .filter(|record| query.category.accepts(record.category))
        .cloned()
        .collect();

    visible.sort_by(|a, b| {
        let ordering = compare(a, b, query.sort_by);
        match query.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    visible
}

/// Count and GST total of an already projected sequence.
///
/// The total saturates at the largest representable amount.
pub fn summarize(records: &[Record]) -> RecordSummary {
    RecordSummary {
        count: records.len(),
        total_gst_amount: records
            .iter()
            .fold(Decimal::ZERO, |total, record| total.saturating_add(record.gst_amount)),
    }
}

/// Category chips for the collection: `All` first, then each category present
/// in first-seen order.
pub fn categories_of(records: &[Record]) -> Vec<CategoryFilter> {
    let mut categories = vec![CategoryFilter::All];

    for record in records {
        let filter = CategoryFilter::Only(record.category);
        if !categories.contains(&filter) {
            categories.push(filter);
        }
    }

    categories
}

fn compare(a: &Record, b: &Record, sort_by: SortKey) -> Ordering {
    match sort_by {
        SortKey::Date => a.date.cmp(&b.date),
        SortKey::Amount => a.total_amount.cmp(&b.total_amount),
        SortKey::Name => locale_compare(&a.product_name, &b.product_name),
    }
}

/// Case-insensitive comparison with lowercase ahead of uppercase on ties,
/// the way a locale collator orders product names.
fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}
