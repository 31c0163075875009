//! Core conversion logic and types

pub mod convert;
pub mod error;
pub mod rates;

// Re-export main types for cleaner imports
pub use convert::{ConversionRequest, convert};
pub use error::{Error, Result};
pub use rates::RateTable;
