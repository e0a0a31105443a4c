use serde::Serialize;

/// 필드 값의 성격을 나타낸다. 검증 규칙 선택에 사용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 문자열 (주소)
    Text,
    /// 금액 [$]
    Currency,
    /// 면적 [sqft]
    Area,
    /// 비율 (0~1)
    Rate,
    /// 정수 개수 (>= 1)
    Count,
    /// 정수 년수 (>= 1)
    Years,
}

/// 매물 입력 레코드의 필드 목록.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Address,
    PurchasePrice,
    SquareFeet,
    MonthlyRentPerUnit,
    NumberOfUnits,
    PropertyTaxRate,
    VacancyRate,
    PropertyManagementRate,
    MaintenanceReserveRate,
    LandlordInsurance,
    HoaFees,
    WaterAndSewer,
    GasAndElectricity,
    Garbage,
    SnowRemoval,
    CablePhoneInternet,
    PestControl,
    AccountingAdvertisingLegal,
    DesiredCapRate,
    DownPaymentPercentage,
    LengthOfMortgage,
    MortgageRate,
}

impl Field {
    /// 검증 순서대로 나열한 전체 필수 필드.
    pub const ALL: [Field; 22] = [
        Field::Address,
        Field::PurchasePrice,
        Field::SquareFeet,
        Field::MonthlyRentPerUnit,
        Field::NumberOfUnits,
        Field::PropertyTaxRate,
        Field::VacancyRate,
        Field::PropertyManagementRate,
        Field::MaintenanceReserveRate,
        Field::LandlordInsurance,
        Field::HoaFees,
        Field::WaterAndSewer,
        Field::GasAndElectricity,
        Field::Garbage,
        Field::SnowRemoval,
        Field::CablePhoneInternet,
        Field::PestControl,
        Field::AccountingAdvertisingLegal,
        Field::DesiredCapRate,
        Field::DownPaymentPercentage,
        Field::LengthOfMortgage,
        Field::MortgageRate,
    ];

    /// [0, 1] 구간이어야 하는 비율 필드.
    pub const RATES: [Field; 7] = [
        Field::PropertyTaxRate,
        Field::VacancyRate,
        Field::PropertyManagementRate,
        Field::MaintenanceReserveRate,
        Field::DesiredCapRate,
        Field::DownPaymentPercentage,
        Field::MortgageRate,
    ];

    /// 월 고정비 필드. 운영비 합계에 그대로 더해진다.
    pub const FIXED_MONTHLY_COSTS: [Field; 9] = [
        Field::LandlordInsurance,
        Field::HoaFees,
        Field::WaterAndSewer,
        Field::GasAndElectricity,
        Field::Garbage,
        Field::SnowRemoval,
        Field::CablePhoneInternet,
        Field::PestControl,
        Field::AccountingAdvertisingLegal,
    ];

    /// JSON 키 이름(camelCase).
    pub fn name(self) -> &'static str {
        match self {
            Field::Address => "address",
            Field::PurchasePrice => "purchasePrice",
            Field::SquareFeet => "squareFeet",
            Field::MonthlyRentPerUnit => "monthlyRentPerUnit",
            Field::NumberOfUnits => "numberOfUnits",
            Field::PropertyTaxRate => "propertyTaxRate",
            Field::VacancyRate => "vacancyRate",
            Field::PropertyManagementRate => "propertyManagementRate",
            Field::MaintenanceReserveRate => "maintenanceReserveRate",
            Field::LandlordInsurance => "landlordInsurance",
            Field::HoaFees => "hoaFees",
            Field::WaterAndSewer => "waterAndSewer",
            Field::GasAndElectricity => "gasAndElectricity",
            Field::Garbage => "garbage",
            Field::SnowRemoval => "snowRemoval",
            Field::CablePhoneInternet => "cablePhoneInternet",
            Field::PestControl => "pestControl",
            Field::AccountingAdvertisingLegal => "accountingAdvertisingLegal",
            Field::DesiredCapRate => "desiredCapRate",
            Field::DownPaymentPercentage => "downPaymentPercentage",
            Field::LengthOfMortgage => "lengthOfMortgage",
            Field::MortgageRate => "mortgageRate",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Address => FieldKind::Text,
            Field::SquareFeet => FieldKind::Area,
            Field::NumberOfUnits => FieldKind::Count,
            Field::LengthOfMortgage => FieldKind::Years,
            f if Field::RATES.contains(&f) => FieldKind::Rate,
            _ => FieldKind::Currency,
        }
    }

    /// 숫자형 필드 여부 (주소 외 전부).
    pub fn is_numeric(self) -> bool {
        self.kind() != FieldKind::Text
    }

    /// 정수로만 표현되는 필드 여부.
    pub fn is_integer(self) -> bool {
        matches!(self.kind(), FieldKind::Count | FieldKind::Years)
    }

    /// 하한이 1인 필드의 최소값. 그 외에는 None.
    pub fn minimum(self) -> Option<f64> {
        match self.kind() {
            FieldKind::Count | FieldKind::Years => Some(1.0),
            _ => None,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
