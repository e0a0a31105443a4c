//! 지표 계산의 항등식을 임의 입력으로 확인한다.

use approx::relative_eq;
use proptest::prelude::*;
use rental_property_analyzer::analysis::calculate;
use rental_property_analyzer::property::{PropertyInput, ValidatedInput};

fn arb_rate() -> impl Strategy<Value = f64> {
    0.0f64..=1.0
}

fn arb_money() -> impl Strategy<Value = f64> {
    0.0f64..5_000.0
}

/// 검증을 통과하는 임의 매물 입력.
fn arb_input() -> impl Strategy<Value = PropertyInput> {
    let deal = (
        0.0f64..2_000_000.0, // purchasePrice
        0.0f64..10_000.0,    // squareFeet
        0.0f64..8_000.0,     // monthlyRentPerUnit
        1u32..50,            // numberOfUnits
        1u32..=40,           // lengthOfMortgage
    );
    let rates = (
        arb_rate(),
        arb_rate(),
        arb_rate(),
        arb_rate(),
        arb_rate(),
        arb_rate(),
        arb_rate(),
    );
    let fixed = proptest::collection::vec(arb_money(), 9);
    (deal, rates, fixed).prop_map(|(deal, rates, fixed)| {
        let (price, sqft, rent, units, years) = deal;
        let (tax, vacancy, management, maintenance, cap, down, mortgage) = rates;
        PropertyInput {
            address: "1 Test Road".to_string(),
            purchase_price: price,
            square_feet: sqft,
            monthly_rent_per_unit: rent,
            number_of_units: units,
            property_tax_rate: tax,
            vacancy_rate: vacancy,
            property_management_rate: management,
            maintenance_reserve_rate: maintenance,
            landlord_insurance: fixed[0],
            hoa_fees: fixed[1],
            water_and_sewer: fixed[2],
            gas_and_electricity: fixed[3],
            garbage: fixed[4],
            snow_removal: fixed[5],
            cable_phone_internet: fixed[6],
            pest_control: fixed[7],
            accounting_advertising_legal: fixed[8],
            desired_cap_rate: cap,
            down_payment_percentage: down,
            length_of_mortgage: years,
            mortgage_rate: mortgage,
        }
    })
}

fn close(a: f64, b: f64) -> bool {
    relative_eq!(a, b, epsilon = 1e-6, max_relative = 1e-9)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// 생성된 입력은 모두 검증을 통과한다.
    #[test]
    fn prop_generated_inputs_validate(input in arb_input()) {
        prop_assert!(ValidatedInput::try_from(input).is_ok());
    }

    #[test]
    fn prop_annual_cash_flow_is_twelve_months(input in arb_input()) {
        let m = calculate(&ValidatedInput::try_from(input).unwrap());
        prop_assert!(close(m.annual_cash_flow, m.monthly_cash_flow * 12.0));
    }

    #[test]
    fn prop_noi_is_income_minus_expenses(input in arb_input()) {
        let m = calculate(&ValidatedInput::try_from(input).unwrap());
        prop_assert!(close(
            m.annual_net_operating_income,
            m.annual_operating_income - m.annual_operating_expenses
        ));
        prop_assert!(close(m.monthly_gross_income, m.monthly_rental_income - m.vacancy_loss));
    }

    #[test]
    fn prop_down_payment_plus_loan_is_price(input in arb_input()) {
        let price = input.purchase_price;
        let m = calculate(&ValidatedInput::try_from(input).unwrap());
        prop_assert!(close(m.down_payment + m.loan_amount, price));
        prop_assert!(m.loan_amount >= 0.0);
    }

    /// 상환액은 언제나 유한하고 음수가 아니다 (금리 0 포함).
    #[test]
    fn prop_mortgage_payment_is_finite(input in arb_input()) {
        let m = calculate(&ValidatedInput::try_from(input).unwrap());
        prop_assert!(m.monthly_mortgage_payment.is_finite());
        prop_assert!(m.monthly_mortgage_payment >= 0.0);
        prop_assert!(m.monthly_cash_flow.is_finite());
    }

    /// 정의된 비율은 유한하고, 정의되지 않은 비율은 분모가 0인 경우뿐이다.
    #[test]
    fn prop_ratios_are_finite_or_degenerate(input in arb_input()) {
        let m = calculate(&ValidatedInput::try_from(input.clone()).unwrap());
        for degenerate in m.undefined_fields() {
            let zero = match degenerate.denominator {
                "purchasePrice" => input.purchase_price == 0.0,
                "desiredCapRate" => input.desired_cap_rate == 0.0,
                "downPayment" => m.down_payment == 0.0,
                "squareFeet" => input.square_feet == 0.0,
                "annualRentalIncome" => m.monthly_rental_income == 0.0,
                _ => false,
            };
            prop_assert!(zero, "{}", degenerate);
        }
        for value in [m.cap_rate, m.property_valuation, m.cash_on_cash_return,
                      m.dollar_per_square_foot, m.gross_rent_multiplier]
            .into_iter()
            .filter_map(|r| r.value())
        {
            prop_assert!(value.is_finite());
        }
    }
}
