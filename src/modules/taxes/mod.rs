pub mod models;
pub mod services;

pub use models::{GstSlab, TaxBreakdown};
pub use services::TaxCalculator;
