//! Error types for currency conversion

use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal error kinds; the binary maps any of these to exit code 1.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Error reading rates file: {}", path.display())]
    RatesFileUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid rate value {value:?} on line {line}")]
    InvalidRate {
        line: usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Conversion rate not available for {from} to {to}")]
    RateNotFound { from: String, to: String },
}

pub type Result<T> = std::result::Result<T, Error>;
