//! 매물 입력 검증기. 계산 전에 필수값, 숫자 형식, 음수, 비율 범위, 최소값을 순서대로 확인한다.
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use super::fields::{Field, FieldKind};
use super::input::{FieldSource, FieldValue, PropertyInput, RawPropertyInput, ValidatedInput};

/// 위반한 규칙의 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationRule {
    Missing,
    WrongType,
    Negative,
    OutOfRange,
    BelowMinimum,
}

/// 첫 번째로 실패한 필드와 규칙을 담는 검증 오류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing field: {0}")]
    Missing(Field),
    #[error("{0} must be {}", expected_type(.0))]
    WrongType(Field),
    #[error("{0} cannot be negative")]
    Negative(Field),
    #[error("{0} must be between 0 and 1")]
    OutOfRange(Field),
    #[error("{0} must be at least 1")]
    BelowMinimum(Field),
}

fn expected_type(field: &Field) -> &'static str {
    match field.kind() {
        FieldKind::Text => "text",
        FieldKind::Count | FieldKind::Years => "a whole number",
        _ => "a valid number",
    }
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match *self {
            ValidationError::Missing(f)
            | ValidationError::WrongType(f)
            | ValidationError::Negative(f)
            | ValidationError::OutOfRange(f)
            | ValidationError::BelowMinimum(f) => f,
        }
    }

    pub fn rule(&self) -> ValidationRule {
        match self {
            ValidationError::Missing(_) => ValidationRule::Missing,
            ValidationError::WrongType(_) => ValidationRule::WrongType,
            ValidationError::Negative(_) => ValidationRule::Negative,
            ValidationError::OutOfRange(_) => ValidationRule::OutOfRange,
            ValidationError::BelowMinimum(_) => ValidationRule::BelowMinimum,
        }
    }
}

/// 전송 계층용 응답 형태: `{"error", "field", "rule"}`.
impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ValidationError", 3)?;
        s.serialize_field("error", &self.to_string())?;
        s.serialize_field("field", &self.field())?;
        s.serialize_field("rule", &self.rule())?;
        s.end()
    }
}

/// 원본 입력을 검증하고 통과하면 타입이 보장된 입력으로 변환한다.
pub fn validate(raw: &RawPropertyInput) -> Result<ValidatedInput, ValidationError> {
    check(raw)?;
    Ok(ValidatedInput::new_unchecked(build(raw)))
}

impl TryFrom<PropertyInput> for ValidatedInput {
    type Error = ValidationError;

    fn try_from(input: PropertyInput) -> Result<Self, Self::Error> {
        check(&input)?;
        Ok(ValidatedInput::new_unchecked(input))
    }
}

/// 규칙 단계마다 전체 필드를 순회한다. 가장 앞 단계에서 가장 앞 필드의 실패가 보고된다.
fn check(source: &impl FieldSource) -> Result<(), ValidationError> {
    for field in Field::ALL {
        match source.value_of(field) {
            FieldValue::Missing => return Err(ValidationError::Missing(field)),
            FieldValue::Text(s) if field == Field::Address && s.trim().is_empty() => {
                return Err(ValidationError::Missing(field))
            }
            _ => {}
        }
    }

    for field in Field::ALL {
        let well_formed = match source.value_of(field) {
            FieldValue::Text(_) => !field.is_numeric(),
            FieldValue::Number(n) if field.is_numeric() => {
                n.is_finite() && (!field.is_integer() || is_u32_integral(n))
            }
            _ => false,
        };
        if !well_formed {
            return Err(ValidationError::WrongType(field));
        }
    }

    let numbers: Vec<(Field, f64)> = Field::ALL
        .iter()
        .filter_map(|&f| match source.value_of(f) {
            FieldValue::Number(n) => Some((f, n)),
            _ => None,
        })
        .collect();

    if let Some(&(field, _)) = numbers.iter().find(|(_, n)| *n < 0.0) {
        return Err(ValidationError::Negative(field));
    }

    if let Some(&(field, _)) = numbers
        .iter()
        .find(|(f, n)| f.kind() == FieldKind::Rate && *n > 1.0)
    {
        return Err(ValidationError::OutOfRange(field));
    }

    if let Some(&(field, _)) = numbers
        .iter()
        .find(|(f, n)| f.minimum().is_some_and(|min| *n < min))
    {
        return Err(ValidationError::BelowMinimum(field));
    }

    Ok(())
}

// 음수 정수는 여기서 통과시키고 음수 단계에서 걸러낸다.
fn is_u32_integral(n: f64) -> bool {
    n.fract() == 0.0 && n <= f64::from(u32::MAX)
}

/// check()를 통과한 입력원에서 타입 레코드를 만든다.
fn build(source: &impl FieldSource) -> PropertyInput {
    let num = |field: Field| match source.value_of(field) {
        FieldValue::Number(n) => n,
        _ => 0.0,
    };
    let address = match source.value_of(Field::Address) {
        FieldValue::Text(s) => s.to_string(),
        _ => String::new(),
    };
    PropertyInput {
        address,
        purchase_price: num(Field::PurchasePrice),
        square_feet: num(Field::SquareFeet),
        monthly_rent_per_unit: num(Field::MonthlyRentPerUnit),
        number_of_units: num(Field::NumberOfUnits) as u32,
        property_tax_rate: num(Field::PropertyTaxRate),
        vacancy_rate: num(Field::VacancyRate),
        property_management_rate: num(Field::PropertyManagementRate),
        maintenance_reserve_rate: num(Field::MaintenanceReserveRate),
        landlord_insurance: num(Field::LandlordInsurance),
        hoa_fees: num(Field::HoaFees),
        water_and_sewer: num(Field::WaterAndSewer),
        gas_and_electricity: num(Field::GasAndElectricity),
        garbage: num(Field::Garbage),
        snow_removal: num(Field::SnowRemoval),
        cable_phone_internet: num(Field::CablePhoneInternet),
        pest_control: num(Field::PestControl),
        accounting_advertising_legal: num(Field::AccountingAdvertisingLegal),
        desired_cap_rate: num(Field::DesiredCapRate),
        down_payment_percentage: num(Field::DownPaymentPercentage),
        length_of_mortgage: num(Field::LengthOfMortgage) as u32,
        mortgage_rate: num(Field::MortgageRate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_check_accepts_whole_numbers_only() {
        assert!(is_u32_integral(30.0));
        assert!(is_u32_integral(-1.0));
        assert!(!is_u32_integral(2.5));
        assert!(!is_u32_integral(f64::from(u32::MAX) + 1.0));
    }

    #[test]
    fn wrong_type_message_depends_on_field_kind() {
        assert_eq!(
            ValidationError::WrongType(Field::Address).to_string(),
            "address must be text"
        );
        assert_eq!(
            ValidationError::WrongType(Field::NumberOfUnits).to_string(),
            "numberOfUnits must be a whole number"
        );
        assert_eq!(
            ValidationError::WrongType(Field::VacancyRate).to_string(),
            "vacancyRate must be a valid number"
        );
    }
}
