pub mod core;
pub mod log;

use std::path::Path;
use tracing::{debug, info};

pub use crate::core::{ConversionRequest, Error, RateTable, convert};

/// Rates file location; fixed in source rather than configurable.
pub const DEFAULT_RATES_PATH: &str = "rates.txt";

pub fn run(request: &ConversionRequest) -> crate::core::Result<()> {
    run_with_rates_file(request, DEFAULT_RATES_PATH)
}

pub fn run_with_rates_file<P: AsRef<Path>>(
    request: &ConversionRequest,
    rates_path: P,
) -> crate::core::Result<()> {
    info!("Currency Converter starting...");

    let rates = RateTable::load_from_path(rates_path)?;
    println!("Exchange rates loaded successfully.");
    debug!("Loaded {} rate(s); request: {request:?}", rates.len());

    let converted = convert(request, &rates)?;
    println!("Converted Amount: {:.2} {}", converted, request.target);
    Ok(())
}
