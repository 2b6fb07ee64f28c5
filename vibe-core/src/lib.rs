pub mod configuration;
pub mod error;
pub mod fuzzy;
pub mod page;
