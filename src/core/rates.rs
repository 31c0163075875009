//! Exchange rate table loaded from a `FROM_TO=rate` text file

use crate::core::error::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// In-memory mapping from a rate pair key (`"USD_INR"`) to its multiplier.
///
/// Built once at startup and read-only afterwards. Codes are not validated
/// beyond upper-casing; nonsense keys load fine and simply never match.
#[derive(Debug, Default, Clone)]
pub struct RateTable {
    rates: HashMap<String, f64>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a rate table from the given file path.
    ///
    /// A missing or unreadable file is fatal. Parsing rules per line:
    /// lines without `=` are skipped; otherwise the line is split at the
    /// first `=`, the left part trimmed and upper-cased into the key, the
    /// right part trimmed and parsed as `f64`. Duplicate keys keep the
    /// last value.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents =
            fs::read_to_string(path.as_ref()).map_err(|e| Error::RatesFileUnavailable {
                path: path.as_ref().to_path_buf(),
                source: e,
            })?;

        let table = contents.parse::<Self>()?;
        debug!(
            "Loaded {} rate(s) from {}",
            table.len(),
            path.as_ref().display()
        );
        Ok(table)
    }

    /// Looks up the rate for `from`→`to`. Codes are upper-cased before
    /// building the pair key.
    pub fn rate(&self, from: &str, to: &str) -> Option<f64> {
        self.rates.get(&pair_key(from, to)).copied()
    }

    pub fn insert(&mut self, from: &str, to: &str, rate: f64) {
        self.rates.insert(pair_key(from, to), rate);
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl FromStr for RateTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut rates = HashMap::new();
        for (index, line) in s.lines().enumerate() {
            let Some((key, value)) = line.split_once('=') else {
                // Blank lines and comments have no '='; skip them.
                continue;
            };

            let key = key.trim().to_uppercase();
            let value = value.trim();
            let rate = value.parse::<f64>().map_err(|e| Error::InvalidRate {
                line: index + 1,
                value: value.to_string(),
                source: e,
            })?;
            rates.insert(key, rate);
        }
        Ok(RateTable { rates })
    }
}

fn pair_key(from: &str, to: &str) -> String {
    format!("{}_{}", from.to_uppercase(), to.to_uppercase())
}
