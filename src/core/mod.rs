pub mod currency;
pub mod error;
pub mod telemetry;
pub mod timezone;
pub mod traits;

pub use error::{AppError, Result, ValidationError};
pub use traits::KeyValueStore;
