//! 분석 결과를 사람이 읽는 텍스트로 만든다. 금액은 소수 둘째 자리, 비율은 백분율로 표시한다.
use std::fmt::Write;

use crate::analysis::{monthly_payment, CalculatedMetrics, MortgageInput, Ratio};
use crate::i18n::{keys, Translator};
use crate::property::PropertyInput;
use crate::store::PropertyRecord;

/// 금액을 `$1,234.56` 형식으로 만든다.
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round();
    let sign = if value < 0.0 && cents > 0.0 { "-" } else { "" };
    let whole = (cents / 100.0).trunc();
    let frac = cents - whole * 100.0;
    format!("{sign}${}.{:02}", group_thousands(whole), frac as u64)
}

fn group_thousands(whole: f64) -> String {
    let digits = format!("{whole:.0}");
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// 비율을 `12.34%` 형식으로 만든다. 정의되지 않으면 n/a.
pub fn format_percent(ratio: Ratio, tr: &Translator) -> String {
    match ratio {
        Ratio::Defined(v) => format!("{:.2}%", v * 100.0),
        Ratio::Undefined => tr.t(keys::NOT_AVAILABLE).to_string(),
    }
}

fn format_ratio_currency(ratio: Ratio, tr: &Translator) -> String {
    match ratio {
        Ratio::Defined(v) => format_currency(v),
        Ratio::Undefined => tr.t(keys::NOT_AVAILABLE).to_string(),
    }
}

fn format_multiple(ratio: Ratio, tr: &Translator) -> String {
    match ratio {
        Ratio::Defined(v) => format!("{v:.2}"),
        Ratio::Undefined => tr.t(keys::NOT_AVAILABLE).to_string(),
    }
}

/// 상세 보기 텍스트.
pub fn detail(input: &PropertyInput, metrics: &CalculatedMetrics, tr: &Translator) -> String {
    let mortgage = monthly_payment(MortgageInput {
        loan_amount: metrics.loan_amount,
        annual_rate: input.mortgage_rate,
        years: input.length_of_mortgage,
    });
    let rows: Vec<(&str, String)> = vec![
        (tr.metric("purchasePrice"), format_currency(input.purchase_price)),
        (tr.metric("monthlyRentalIncome"), format_currency(metrics.monthly_rental_income)),
        (tr.metric("monthlyGrossIncome"), format_currency(metrics.monthly_gross_income)),
        (
            tr.metric("monthlyOperatingExpenses"),
            format_currency(metrics.monthly_operating_expenses),
        ),
        (
            tr.metric("annualNetOperatingIncome"),
            format_currency(metrics.annual_net_operating_income),
        ),
        (tr.metric("monthlyCashFlow"), format_currency(metrics.monthly_cash_flow)),
        (tr.metric("annualCashFlow"), format_currency(metrics.annual_cash_flow)),
        (tr.metric("capRate"), format_percent(metrics.cap_rate, tr)),
        (tr.metric("cashOnCashReturn"), format_percent(metrics.cash_on_cash_return, tr)),
        (
            tr.metric("propertyValuation"),
            format_ratio_currency(metrics.property_valuation, tr),
        ),
        (tr.metric("loanAmount"), format_currency(metrics.loan_amount)),
        (
            tr.metric("monthlyMortgagePayment"),
            format_currency(metrics.monthly_mortgage_payment),
        ),
        (tr.t(keys::TOTAL_INTEREST), format_currency(mortgage.total_interest)),
        (
            tr.metric("propertyManagementFees"),
            format_currency(metrics.property_management_fees),
        ),
        (tr.metric("propertyTax"), format_currency(metrics.property_tax)),
        (tr.metric("maintenanceReserve"), format_currency(metrics.maintenance_reserve)),
        (
            tr.metric("dollarPerSquareFoot"),
            format_ratio_currency(metrics.dollar_per_square_foot, tr),
        ),
        (
            tr.metric("grossRentMultiplier"),
            format_multiple(metrics.gross_rent_multiplier, tr),
        ),
    ];

    let width = rows.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    let _ = writeln!(out, "{}", input.address);
    for (label, value) in rows {
        let pad = width - label.chars().count();
        let _ = writeln!(out, "  {label}{} : {value}", " ".repeat(pad));
    }
    if !metrics.undefined_fields().is_empty() {
        let _ = writeln!(out, "  * {}", tr.t(keys::UNDEFINED_NOTE));
    }
    out
}

/// 목록 한 줄: 짧은 ID, 주소, 월 현금흐름, Cap rate.
pub fn list_line(record: &PropertyRecord, tr: &Translator) -> String {
    let id = record.id.simple().to_string();
    format!(
        "{}  {} - {}: {}, {}: {}",
        &id[..8],
        record.input.address,
        tr.metric("monthlyCashFlow"),
        format_currency(record.calculated_metrics.monthly_cash_flow),
        tr.metric("capRate"),
        format_percent(record.calculated_metrics.cap_rate, tr),
    )
}

/// 저장 목록 전체 텍스트.
pub fn list(records: &[PropertyRecord], tr: &Translator) -> String {
    if records.is_empty() {
        return format!("{}\n", tr.t(keys::SAVED_EMPTY));
    }
    let mut out = String::new();
    for record in records {
        let _ = writeln!(out, "{}", list_line(record, tr));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_currency(999.5), "$999.50");
        assert_eq!(format_currency(-1011.306), "-$1,011.31");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(-0.001), "$0.00");
    }
}
