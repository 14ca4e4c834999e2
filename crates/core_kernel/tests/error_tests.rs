//! Tests for core_kernel error types

use chrono::NaiveDate;
use core_kernel::error::CoreError;
use core_kernel::money::MoneyError;
use core_kernel::temporal::TemporalError;

#[test]
fn test_core_error_validation() {
    let error = CoreError::validation("Check-out must be after check-in");

    match error {
        CoreError::Validation(msg) => assert_eq!(msg, "Check-out must be after check-in"),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_error_from_money_error() {
    let money_error = MoneyError::CurrencyMismatch("INR".to_string(), "USD".to_string());
    let core_error: CoreError = money_error.into();

    assert!(matches!(core_error, CoreError::Money(_)));
}

#[test]
fn test_core_error_from_temporal_error() {
    let day = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();
    let core_error: CoreError = TemporalError::InvalidStay {
        check_in: day,
        check_out: day,
    }
    .into();

    assert!(core_error.to_string().contains("check-out 2024-12-20"));
}

#[test]
fn test_core_error_configuration() {
    let error = CoreError::configuration("API_BASE is not a URL");

    match error {
        CoreError::Configuration(msg) => assert_eq!(msg, "API_BASE is not a URL"),
        _ => panic!("Expected Configuration error"),
    }
}
