use serde::{Deserialize, Serialize};

use super::mortgage::{monthly_payment, MortgageInput};
use super::ratio::Ratio;
use crate::property::ValidatedInput;

/// 한 번의 계산으로 얻는 투자 지표. 생성 후 변경하지 않는다.
///
/// 비율 지표 5개는 분모가 0이면 [`Ratio::Undefined`]이다.
/// - `cap_rate`: purchasePrice = 0
/// - `property_valuation`: desiredCapRate = 0
/// - `cash_on_cash_return`: downPayment = 0
/// - `dollar_per_square_foot`: squareFeet = 0
/// - `gross_rent_multiplier`: 월 임대수입 = 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedMetrics {
    pub monthly_rental_income: f64,
    pub vacancy_loss: f64,
    pub monthly_gross_income: f64,
    pub property_management_fees: f64,
    pub property_tax: f64,
    pub maintenance_reserve: f64,
    pub monthly_operating_expenses: f64,
    pub annual_operating_income: f64,
    pub annual_operating_expenses: f64,
    pub annual_net_operating_income: f64,
    pub down_payment: f64,
    pub loan_amount: f64,
    pub monthly_mortgage_payment: f64,
    pub monthly_cash_flow: f64,
    pub annual_cash_flow: f64,
    pub cap_rate: Ratio,
    pub property_valuation: Ratio,
    pub cash_on_cash_return: Ratio,
    pub dollar_per_square_foot: Ratio,
    pub gross_rent_multiplier: Ratio,
}

/// 분모가 0이 될 수 있는 비율 지표.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RatioMetric {
    CapRate,
    PropertyValuation,
    CashOnCashReturn,
    DollarPerSquareFoot,
    GrossRentMultiplier,
}

impl RatioMetric {
    pub const ALL: [RatioMetric; 5] = [
        RatioMetric::CapRate,
        RatioMetric::PropertyValuation,
        RatioMetric::CashOnCashReturn,
        RatioMetric::DollarPerSquareFoot,
        RatioMetric::GrossRentMultiplier,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RatioMetric::CapRate => "capRate",
            RatioMetric::PropertyValuation => "propertyValuation",
            RatioMetric::CashOnCashReturn => "cashOnCashReturn",
            RatioMetric::DollarPerSquareFoot => "dollarPerSquareFoot",
            RatioMetric::GrossRentMultiplier => "grossRentMultiplier",
        }
    }

    /// 이 지표의 분모가 되는 값의 이름.
    pub fn denominator(self) -> &'static str {
        match self {
            RatioMetric::CapRate => "purchasePrice",
            RatioMetric::PropertyValuation => "desiredCapRate",
            RatioMetric::CashOnCashReturn => "downPayment",
            RatioMetric::DollarPerSquareFoot => "squareFeet",
            RatioMetric::GrossRentMultiplier => "annualRentalIncome",
        }
    }
}

/// 분모가 0이어서 정의되지 않은 비율 지표.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DegenerateRatio {
    pub metric: RatioMetric,
    pub denominator: &'static str,
}

impl std::fmt::Display for DegenerateRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} is undefined ({} is zero)", self.metric.name(), self.denominator)
    }
}

impl CalculatedMetrics {
    pub fn ratio(&self, metric: RatioMetric) -> Ratio {
        match metric {
            RatioMetric::CapRate => self.cap_rate,
            RatioMetric::PropertyValuation => self.property_valuation,
            RatioMetric::CashOnCashReturn => self.cash_on_cash_return,
            RatioMetric::DollarPerSquareFoot => self.dollar_per_square_foot,
            RatioMetric::GrossRentMultiplier => self.gross_rent_multiplier,
        }
    }

    /// 유한하지 않은 첫 번째 금액 지표의 이름. 입력값이 너무 커서 넘친 경우에만 생긴다.
    pub fn first_non_finite(&self) -> Option<&'static str> {
        [
            ("monthlyRentalIncome", self.monthly_rental_income),
            ("vacancyLoss", self.vacancy_loss),
            ("monthlyGrossIncome", self.monthly_gross_income),
            ("propertyManagementFees", self.property_management_fees),
            ("propertyTax", self.property_tax),
            ("maintenanceReserve", self.maintenance_reserve),
            ("monthlyOperatingExpenses", self.monthly_operating_expenses),
            ("annualOperatingIncome", self.annual_operating_income),
            ("annualOperatingExpenses", self.annual_operating_expenses),
            ("annualNetOperatingIncome", self.annual_net_operating_income),
            ("downPayment", self.down_payment),
            ("loanAmount", self.loan_amount),
            ("monthlyMortgagePayment", self.monthly_mortgage_payment),
            ("monthlyCashFlow", self.monthly_cash_flow),
            ("annualCashFlow", self.annual_cash_flow),
        ]
        .into_iter()
        .find(|(_, v)| !v.is_finite())
        .map(|(name, _)| name)
    }

    /// 정의되지 않은 비율 지표 목록. 비어 있으면 모든 비율이 정의된다.
    pub fn undefined_fields(&self) -> Vec<DegenerateRatio> {
        RatioMetric::ALL
            .iter()
            .filter(|&&m| self.ratio(m).is_undefined())
            .map(|&metric| DegenerateRatio {
                metric,
                denominator: metric.denominator(),
            })
            .collect()
    }
}

/// 검증된 입력으로 투자 지표를 계산한다. 부수효과가 없는 순수 함수이다.
pub fn calculate(input: &ValidatedInput) -> CalculatedMetrics {
    // 수입
    let monthly_rental_income = input.monthly_rent_per_unit * f64::from(input.number_of_units);
    let vacancy_loss = monthly_rental_income * input.vacancy_rate;
    let monthly_gross_income = monthly_rental_income - vacancy_loss;

    // 변동 비용
    let property_management_fees = monthly_rental_income * input.property_management_rate;
    let property_tax = input.property_tax_rate * input.purchase_price / 12.0;
    let maintenance_reserve = monthly_rental_income * input.maintenance_reserve_rate;
    let monthly_operating_expenses = property_management_fees
        + property_tax
        + maintenance_reserve
        + input.fixed_monthly_costs();

    let annual_operating_income = monthly_gross_income * 12.0;
    let annual_operating_expenses = monthly_operating_expenses * 12.0;
    let annual_net_operating_income = annual_operating_income - annual_operating_expenses;

    // 금융
    let down_payment = input.purchase_price * input.down_payment_percentage;
    let loan_amount = input.purchase_price - down_payment;
    let mortgage = monthly_payment(MortgageInput {
        loan_amount,
        annual_rate: input.mortgage_rate,
        years: input.length_of_mortgage,
    });
    let monthly_mortgage_payment = mortgage.monthly_payment;

    let monthly_cash_flow =
        monthly_gross_income - monthly_operating_expenses - monthly_mortgage_payment;
    let annual_cash_flow = monthly_cash_flow * 12.0;

    CalculatedMetrics {
        monthly_rental_income,
        vacancy_loss,
        monthly_gross_income,
        property_management_fees,
        property_tax,
        maintenance_reserve,
        monthly_operating_expenses,
        annual_operating_income,
        annual_operating_expenses,
        annual_net_operating_income,
        down_payment,
        loan_amount,
        monthly_mortgage_payment,
        monthly_cash_flow,
        annual_cash_flow,
        cap_rate: Ratio::of(annual_net_operating_income, input.purchase_price),
        property_valuation: Ratio::of(annual_net_operating_income, input.desired_cap_rate),
        cash_on_cash_return: Ratio::of(annual_cash_flow, down_payment),
        dollar_per_square_foot: Ratio::of(input.purchase_price, input.square_feet),
        gross_rent_multiplier: Ratio::of(input.purchase_price, monthly_rental_income * 12.0),
    }
}
