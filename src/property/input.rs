use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::fields::Field;

/// 검증 전 원본 입력. 요청 본문(JSON 객체)을 그대로 담는다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawPropertyInput {
    fields: Map<String, Value>,
}

impl RawPropertyInput {
    /// JSON 문자열을 파싱한다. 최상위가 객체가 아니면 오류.
    pub fn from_json_str(src: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(src)
    }

    /// 키를 설정한다. 테스트와 대화형 폼에서 사용한다.
    pub fn set(&mut self, field: Field, value: Value) {
        self.fields.insert(field.name().to_string(), value);
    }

    /// 키를 제거한다.
    pub fn remove(&mut self, field: Field) -> Option<Value> {
        self.fields.remove(field.name())
    }

    pub fn get(&self, field: Field) -> Option<&Value> {
        self.fields.get(field.name())
    }
}

/// 검증기가 보는 필드 값의 형태.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// 키 없음 또는 null
    Missing,
    Text(&'a str),
    Number(f64),
    /// 문자열/숫자가 아닌 값 (bool, 배열, 객체)
    Other,
}

/// 필드 이름으로 값을 조회할 수 있는 입력원.
pub trait FieldSource {
    fn value_of(&self, field: Field) -> FieldValue<'_>;
}

impl FieldSource for RawPropertyInput {
    fn value_of(&self, field: Field) -> FieldValue<'_> {
        match self.get(field) {
            None | Some(Value::Null) => FieldValue::Missing,
            Some(Value::String(s)) => FieldValue::Text(s),
            Some(Value::Number(n)) => n.as_f64().map_or(FieldValue::Other, FieldValue::Number),
            Some(_) => FieldValue::Other,
        }
    }
}

/// 매물 입력값. 요청/저장 레코드의 필드 형태 그대로이다.
///
/// 비율 필드는 모두 소수(0.065 = 6.5%)로 표현한다. 계산기에 넘기려면
/// 먼저 [`ValidatedInput`]으로 검증해야 한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyInput {
    /// 매물 주소
    pub address: String,
    /// 매입가 [$]
    pub purchase_price: f64,
    /// 연면적 [sqft]
    pub square_feet: f64,
    /// 세대당 월 임대료 [$]
    pub monthly_rent_per_unit: f64,
    /// 세대 수 (>= 1)
    pub number_of_units: u32,
    /// 연 재산세율 (매입가 대비)
    pub property_tax_rate: f64,
    /// 공실률
    pub vacancy_rate: f64,
    /// 관리 수수료율 (월 임대수입 대비)
    pub property_management_rate: f64,
    /// 유지보수 적립률 (월 임대수입 대비)
    pub maintenance_reserve_rate: f64,
    pub landlord_insurance: f64,
    pub hoa_fees: f64,
    pub water_and_sewer: f64,
    pub gas_and_electricity: f64,
    pub garbage: f64,
    pub snow_removal: f64,
    pub cable_phone_internet: f64,
    pub pest_control: f64,
    pub accounting_advertising_legal: f64,
    /// 목표 Cap rate. 가치평가의 분모.
    pub desired_cap_rate: f64,
    /// 계약금 비율
    pub down_payment_percentage: f64,
    /// 대출 기간 [년] (>= 1)
    pub length_of_mortgage: u32,
    /// 연 대출 금리
    pub mortgage_rate: f64,
}

impl PropertyInput {
    /// 월 고정비 9개의 합계.
    pub fn fixed_monthly_costs(&self) -> f64 {
        Field::FIXED_MONTHLY_COSTS
            .iter()
            .map(|&f| match self.value_of(f) {
                FieldValue::Number(n) => n,
                _ => 0.0,
            })
            .sum()
    }
}

impl FieldSource for PropertyInput {
    fn value_of(&self, field: Field) -> FieldValue<'_> {
        let n = match field {
            Field::Address => return FieldValue::Text(&self.address),
            Field::PurchasePrice => self.purchase_price,
            Field::SquareFeet => self.square_feet,
            Field::MonthlyRentPerUnit => self.monthly_rent_per_unit,
            Field::NumberOfUnits => f64::from(self.number_of_units),
            Field::PropertyTaxRate => self.property_tax_rate,
            Field::VacancyRate => self.vacancy_rate,
            Field::PropertyManagementRate => self.property_management_rate,
            Field::MaintenanceReserveRate => self.maintenance_reserve_rate,
            Field::LandlordInsurance => self.landlord_insurance,
            Field::HoaFees => self.hoa_fees,
            Field::WaterAndSewer => self.water_and_sewer,
            Field::GasAndElectricity => self.gas_and_electricity,
            Field::Garbage => self.garbage,
            Field::SnowRemoval => self.snow_removal,
            Field::CablePhoneInternet => self.cable_phone_internet,
            Field::PestControl => self.pest_control,
            Field::AccountingAdvertisingLegal => self.accounting_advertising_legal,
            Field::DesiredCapRate => self.desired_cap_rate,
            Field::DownPaymentPercentage => self.down_payment_percentage,
            Field::LengthOfMortgage => f64::from(self.length_of_mortgage),
            Field::MortgageRate => self.mortgage_rate,
        };
        FieldValue::Number(n)
    }
}

/// 검증을 통과한 입력. [`crate::property::validate`] 또는 `TryFrom`으로만 만든다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidatedInput(PropertyInput);

impl ValidatedInput {
    /// 검증기 내부에서만 호출한다.
    pub(super) fn new_unchecked(input: PropertyInput) -> Self {
        Self(input)
    }

    pub fn into_inner(self) -> PropertyInput {
        self.0
    }
}

impl std::ops::Deref for ValidatedInput {
    type Target = PropertyInput;

    fn deref(&self) -> &PropertyInput {
        &self.0
    }
}
