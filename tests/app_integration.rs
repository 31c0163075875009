use fxconv::core::Error;
use fxconv::{ConversionRequest, RateTable, run_with_rates_file};
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;
use tracing::info;

fn write_rates_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp rates file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp rates file");
    file
}

#[test_log::test]
fn test_full_conversion_flow() {
    let rates = write_rates_file("USD_INR=82.0\nUSD_EUR = 0.92\n");
    let request = ConversionRequest::new(100.0, "usd", "inr");

    info!(?request, "Running conversion against temp rates file");
    let result = run_with_rates_file(&request, rates.path());

    assert!(result.is_ok(), "Conversion should succeed: {result:?}");
}

#[test_log::test]
fn test_identity_conversion_with_empty_rates_file() {
    let rates = write_rates_file("");
    let request = ConversionRequest::new(42.0, "USD", "usd");

    let result = run_with_rates_file(&request, rates.path());

    assert!(result.is_ok(), "X->X must succeed with any table: {result:?}");
}

#[test_log::test]
fn test_missing_rates_file_fails() {
    let request = ConversionRequest::new(100.0, "USD", "INR");

    let result = run_with_rates_file(&request, "/nonexistent/path/rates.txt");

    let err = result.unwrap_err();
    assert!(matches!(err, Error::RatesFileUnavailable { .. }));
    assert!(err.to_string().contains("rates file"));
}

#[test_log::test]
fn test_missing_pair_names_both_currencies() {
    let rates = write_rates_file("USD_INR=82.0\n");
    let request = ConversionRequest::new(50.0, "USD", "EUR");

    let result = run_with_rates_file(&request, rates.path());

    let err = result.unwrap_err();
    assert!(matches!(err, Error::RateNotFound { .. }));
    let message = err.to_string();
    assert!(message.contains("USD"), "message must name the source: {message}");
    assert!(message.contains("EUR"), "message must name the target: {message}");
}

#[test_log::test]
fn test_malformed_rate_value_fails_the_load() {
    let rates = write_rates_file("USD_INR=82.0\nUSD_EUR=not-a-number\n");
    let request = ConversionRequest::new(100.0, "USD", "INR");

    let result = run_with_rates_file(&request, rates.path());

    assert!(matches!(result, Err(Error::InvalidRate { line: 2, .. })));
}

#[test_log::test]
fn test_loader_skips_blank_lines_and_keeps_last_duplicate() {
    let rates = write_rates_file("\nUSD_INR=82.0\n\n# weekly refresh\nUSD_INR=83.0\n");

    let table = RateTable::load_from_path(rates.path()).unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.rate("USD", "INR"), Some(83.0));
}

#[test_log::test]
fn test_sample_rates_file_in_repo_loads() {
    let contents = fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/rates.txt"))
        .expect("Sample rates.txt should ship at the repo root");

    let table: RateTable = contents.parse().unwrap();

    assert!(!table.is_empty());
    assert!(table.rate("USD", "INR").is_some());
}
