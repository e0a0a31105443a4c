#![allow(dead_code)]

use rental_property_analyzer::property::{
    validate, Field, PropertyInput, RawPropertyInput, ValidatedInput,
};
use serde_json::{json, Value};

/// 2세대, 20만 달러 매물 예시.
pub fn sample_json() -> Value {
    json!({
        "address": "12 Elm Street",
        "purchasePrice": 200000,
        "squareFeet": 1000,
        "monthlyRentPerUnit": 1500,
        "numberOfUnits": 2,
        "propertyTaxRate": 0.02,
        "vacancyRate": 0.05,
        "propertyManagementRate": 0.1,
        "maintenanceReserveRate": 0.05,
        "landlordInsurance": 100,
        "hoaFees": 0,
        "waterAndSewer": 50,
        "gasAndElectricity": 50,
        "garbage": 20,
        "snowRemoval": 0,
        "cablePhoneInternet": 0,
        "pestControl": 0,
        "accountingAdvertisingLegal": 0,
        "desiredCapRate": 0.06,
        "downPaymentPercentage": 0.2,
        "lengthOfMortgage": 30,
        "mortgageRate": 0.065
    })
}

pub fn sample_raw() -> RawPropertyInput {
    serde_json::from_value(sample_json()).expect("sample is an object")
}

pub fn raw_with(field: Field, value: Value) -> RawPropertyInput {
    let mut raw = sample_raw();
    raw.set(field, value);
    raw
}

pub fn sample_validated() -> ValidatedInput {
    validate(&sample_raw()).expect("sample is valid")
}

pub fn sample_input() -> PropertyInput {
    sample_validated().into_inner()
}

pub fn validated(input: PropertyInput) -> ValidatedInput {
    ValidatedInput::try_from(input).expect("input is valid")
}
