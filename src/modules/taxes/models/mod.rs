pub mod tax;

pub use tax::{GstSlab, TaxBreakdown};
