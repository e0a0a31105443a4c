//! 입력 검증기 회귀 테스트. 규칙 단계 순서와 경계값을 확인한다.
mod common;

use common::{raw_with, sample_input, sample_raw};
use rental_property_analyzer::property::{
    validate, Field, ValidatedInput, ValidationError, ValidationRule,
};
use serde_json::{json, Value};

#[test]
fn sample_input_is_accepted() {
    let input = validate(&sample_raw()).expect("valid");
    assert_eq!(input.address, "12 Elm Street");
    assert_eq!(input.number_of_units, 2);
    assert_eq!(input.length_of_mortgage, 30);
    assert_eq!(input.purchase_price, 200_000.0);
}

#[test]
fn missing_address_is_rejected_first() {
    let mut raw = sample_raw();
    raw.remove(Field::Address);
    let err = validate(&raw).unwrap_err();
    assert_eq!(err, ValidationError::Missing(Field::Address));
    assert_eq!(err.to_string(), "missing field: address");
}

#[test]
fn null_counts_as_missing() {
    let err = validate(&raw_with(Field::HoaFees, Value::Null)).unwrap_err();
    assert_eq!(err.field(), Field::HoaFees);
    assert_eq!(err.rule(), ValidationRule::Missing);
}

#[test]
fn blank_address_counts_as_missing() {
    let err = validate(&raw_with(Field::Address, json!("   "))).unwrap_err();
    assert_eq!(err, ValidationError::Missing(Field::Address));
}

#[test]
fn presence_is_checked_before_types() {
    // 앞 필드는 잘못된 타입, 뒤 필드는 누락: 누락이 먼저 보고된다.
    let mut raw = raw_with(Field::PurchasePrice, json!("lots"));
    raw.remove(Field::MortgageRate);
    let err = validate(&raw).unwrap_err();
    assert_eq!(err, ValidationError::Missing(Field::MortgageRate));
}

#[test]
fn non_numeric_value_is_wrong_type() {
    let err = validate(&raw_with(Field::PurchasePrice, json!("200000"))).unwrap_err();
    assert_eq!(err, ValidationError::WrongType(Field::PurchasePrice));
    assert_eq!(err.to_string(), "purchasePrice must be a valid number");

    let err = validate(&raw_with(Field::Garbage, json!(true))).unwrap_err();
    assert_eq!(err, ValidationError::WrongType(Field::Garbage));
}

#[test]
fn numeric_address_is_wrong_type() {
    let err = validate(&raw_with(Field::Address, json!(12))).unwrap_err();
    assert_eq!(err, ValidationError::WrongType(Field::Address));
}

#[test]
fn fractional_unit_count_is_wrong_type() {
    let err = validate(&raw_with(Field::NumberOfUnits, json!(2.5))).unwrap_err();
    assert_eq!(err, ValidationError::WrongType(Field::NumberOfUnits));
    assert_eq!(err.rule(), ValidationRule::WrongType);
}

#[test]
fn negative_value_is_rejected() {
    let err = validate(&raw_with(Field::WaterAndSewer, json!(-1))).unwrap_err();
    assert_eq!(err, ValidationError::Negative(Field::WaterAndSewer));
    assert_eq!(err.to_string(), "waterAndSewer cannot be negative");
}

#[test]
fn negative_rate_reports_negative_not_out_of_range() {
    let err = validate(&raw_with(Field::VacancyRate, json!(-0.1))).unwrap_err();
    assert_eq!(err.rule(), ValidationRule::Negative);
}

#[test]
fn negative_is_checked_before_rate_bounds() {
    let mut raw = raw_with(Field::PropertyTaxRate, json!(1.5));
    raw.set(Field::PestControl, json!(-3));
    let err = validate(&raw).unwrap_err();
    assert_eq!(err, ValidationError::Negative(Field::PestControl));
}

#[test]
fn rate_above_one_is_out_of_range() {
    let err = validate(&raw_with(Field::MortgageRate, json!(6.5))).unwrap_err();
    assert_eq!(err, ValidationError::OutOfRange(Field::MortgageRate));
    assert_eq!(err.to_string(), "mortgageRate must be between 0 and 1");
}

#[test]
fn rate_bounds_are_inclusive() {
    for field in Field::RATES {
        assert!(validate(&raw_with(field, json!(0))).is_ok(), "{field} = 0");
        assert!(validate(&raw_with(field, json!(1))).is_ok(), "{field} = 1");
    }
}

#[test]
fn large_currency_values_are_not_rate_limited() {
    assert!(validate(&raw_with(Field::HoaFees, json!(5000))).is_ok());
}

#[test]
fn zero_units_is_below_minimum_and_one_is_accepted() {
    let err = validate(&raw_with(Field::NumberOfUnits, json!(0))).unwrap_err();
    assert_eq!(err, ValidationError::BelowMinimum(Field::NumberOfUnits));
    assert_eq!(err.to_string(), "numberOfUnits must be at least 1");

    let ok = validate(&raw_with(Field::NumberOfUnits, json!(1))).expect("one unit");
    assert_eq!(ok.number_of_units, 1);
}

#[test]
fn zero_year_mortgage_is_below_minimum() {
    let err = validate(&raw_with(Field::LengthOfMortgage, json!(0))).unwrap_err();
    assert_eq!(err, ValidationError::BelowMinimum(Field::LengthOfMortgage));
}

#[test]
fn out_of_range_is_checked_before_minimums() {
    let mut raw = raw_with(Field::NumberOfUnits, json!(0));
    raw.set(Field::DesiredCapRate, json!(2));
    let err = validate(&raw).unwrap_err();
    assert_eq!(err, ValidationError::OutOfRange(Field::DesiredCapRate));
}

#[test]
fn unknown_keys_are_ignored() {
    let raw = raw_with(Field::Address, json!("9 Oak Ave"));
    let mut value = serde_json::to_value(&raw).unwrap();
    value["_id"] = json!("abc");
    let raw: rental_property_analyzer::property::RawPropertyInput =
        serde_json::from_value(value).unwrap();
    assert!(validate(&raw).is_ok());
}

#[test]
fn typed_input_with_nan_is_wrong_type() {
    let mut input = sample_input();
    input.square_feet = f64::NAN;
    let err = ValidatedInput::try_from(input).unwrap_err();
    assert_eq!(err, ValidationError::WrongType(Field::SquareFeet));
}

#[test]
fn typed_input_with_infinite_price_is_wrong_type() {
    let mut input = sample_input();
    input.purchase_price = f64::INFINITY;
    let err = ValidatedInput::try_from(input).unwrap_err();
    assert_eq!(err, ValidationError::WrongType(Field::PurchasePrice));
}

#[test]
fn typed_input_with_zero_units_is_rejected() {
    let mut input = sample_input();
    input.number_of_units = 0;
    let err = ValidatedInput::try_from(input).unwrap_err();
    assert_eq!(err, ValidationError::BelowMinimum(Field::NumberOfUnits));
}

#[test]
fn error_serializes_for_transport() {
    let err = ValidationError::Missing(Field::Address);
    let value = serde_json::to_value(err).unwrap();
    assert_eq!(
        value,
        json!({"error": "missing field: address", "field": "address", "rule": "missing"})
    );
    let value = serde_json::to_value(ValidationError::OutOfRange(Field::VacancyRate)).unwrap();
    assert_eq!(value["rule"], "out-of-range");
    assert_eq!(value["field"], "vacancyRate");
}

#[test]
fn top_level_array_is_not_an_input() {
    assert!(rental_property_analyzer::property::RawPropertyInput::from_json_str("[1,2]").is_err());
}
