use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of a single GST calculation.
///
/// Amounts are kept at full precision; rounding happens only when formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBreakdown {
    pub base_amount: Decimal,
    /// Percentage, 0-100
    pub gst_rate: Decimal,
    pub gst_amount: Decimal,
    pub total_amount: Decimal,
}

/// A standard Indian GST slab with what it typically covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GstSlab {
    pub rate: Decimal,
    pub description: &'static str,
}

impl GstSlab {
    /// The five common slabs offered as quick picks on the calculator
    pub fn common() -> [GstSlab; 5] {
        [
            GstSlab {
                rate: Decimal::ZERO,
                description: "Essential goods like fresh fruits, vegetables",
            },
            GstSlab {
                rate: Decimal::from(5),
                description: "Basic necessities, packaged food",
            },
            GstSlab {
                rate: Decimal::from(12),
                description: "Processed food, business hotels",
            },
            GstSlab {
                rate: Decimal::from(18),
                description: "Standard services, electronics",
            },
            GstSlab {
                rate: Decimal::from(28),
                description: "Luxury items, cars, tobacco",
            },
        ]
    }

    /// Slab matching `rate` exactly, if it is one of the common ones
    pub fn find(rate: Decimal) -> Option<GstSlab> {
        Self::common().into_iter().find(|slab| slab.rate == rate)
    }
}
