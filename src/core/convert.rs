//! Single-amount currency conversion

use crate::core::error::{Error, Result};
use crate::core::rates::RateTable;
use tracing::debug;

/// One conversion: an amount plus a source and target currency code.
///
/// Codes are upper-cased on construction; there is no check that they are
/// real ISO codes.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount: f64,
    pub source: String,
    pub target: String,
}

impl ConversionRequest {
    pub fn new(amount: f64, source: &str, target: &str) -> Self {
        ConversionRequest {
            amount,
            source: source.to_uppercase(),
            target: target.to_uppercase(),
        }
    }
}

/// Converts the requested amount using a single exact-pair lookup.
///
/// Source equal to target is the identity regardless of table contents.
/// There is no inverse-pair fallback and no transitive derivation.
pub fn convert(request: &ConversionRequest, rates: &RateTable) -> Result<f64> {
    let ConversionRequest {
        amount,
        source,
        target,
    } = request;

    if source.eq_ignore_ascii_case(target) {
        debug!("No conversion needed ({source} -> {target})");
        return Ok(*amount);
    }

    debug!("Attempting conversion of {amount} ({source} -> {target})");
    match rates.rate(source, target) {
        Some(rate) => {
            let converted = amount * rate;
            debug!("Converted {amount} from {source} to {target} at rate {rate}: {converted}");
            Ok(converted)
        }
        None => Err(Error::RateNotFound {
            from: source.clone(),
            to: target.clone(),
        }),
    }
}
