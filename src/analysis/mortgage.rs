/// 고정금리 원리금균등상환 대출 입력.
#[derive(Debug, Clone, Copy)]
pub struct MortgageInput {
    /// 대출 원금 [$]
    pub loan_amount: f64,
    /// 연 금리 (0.065 = 6.5%)
    pub annual_rate: f64,
    /// 상환 기간 [년]
    pub years: u32,
}

/// 대출 상환 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MortgageResult {
    /// 월 상환액 [$]
    pub monthly_payment: f64,
    /// 총 상환 횟수 [월]
    pub periods: f64,
    /// 전체 기간 총 이자 [$]
    pub total_interest: f64,
}

/// 월복리 기준 원리금균등 월 상환액을 계산한다.
///
/// P = L·r·(1+r)^n / ((1+r)^n − 1), r = 연금리/12, n = 년수·12.
/// 금리가 0이거나 (1+r)^n − 1 이 0으로 사라질 만큼 작으면 L/n, 원금이 0 이하이면 0을 돌려준다.
pub fn monthly_payment(input: MortgageInput) -> MortgageResult {
    let periods = f64::from(input.years) * 12.0;
    if input.loan_amount.is_nan() || input.loan_amount <= 0.0 || input.years == 0 {
        return MortgageResult {
            monthly_payment: 0.0,
            periods,
            total_interest: 0.0,
        };
    }
    let r = input.annual_rate / 12.0;
    let straight_line = input.loan_amount / periods;
    // (1+r)^n − 1. 1+r 가 1로 반올림되는 아주 작은 금리도 ln_1p/exp_m1로 구한다.
    let growth_m1 = (periods * r.ln_1p()).exp_m1();
    let payment = if r == 0.0 || growth_m1.is_nan() || growth_m1 <= 0.0 {
        straight_line
    } else if growth_m1.is_infinite() {
        // n → ∞ 극한: 이자만 상환
        input.loan_amount * r
    } else {
        input.loan_amount * r * (1.0 + 1.0 / growth_m1)
    };
    let payment = if payment.is_finite() { payment } else { straight_line };
    MortgageResult {
        monthly_payment: payment,
        periods,
        total_interest: payment * periods - input.loan_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loan(annual_rate: f64) -> MortgageResult {
        monthly_payment(MortgageInput {
            loan_amount: 160_000.0,
            annual_rate,
            years: 30,
        })
    }

    #[test]
    fn standard_amortization() {
        assert!((loan(0.065).monthly_payment - 1011.3088).abs() < 1e-3);
    }

    #[test]
    fn vanishing_rate_is_straight_line() {
        // 1 + r 가 1.0으로 반올림되는 금리
        for rate in [1e-17, 1e-20, 5e-324] {
            let res = loan(rate);
            assert!(res.monthly_payment.is_finite(), "rate={rate}");
            assert!((res.monthly_payment - 160_000.0 / 360.0).abs() < 1e-6, "rate={rate}");
        }
    }

    #[test]
    fn small_rate_stays_close_to_straight_line() {
        let res = loan(1e-9);
        assert!(res.monthly_payment >= 160_000.0 / 360.0);
        assert!(res.monthly_payment - 160_000.0 / 360.0 < 1e-3);
    }
}
