pub mod records;
pub mod settings;
pub mod taxes;
