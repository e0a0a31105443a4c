use std::io::{self, Write};

use serde_json::Value;

use crate::app::AppError;
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::property::{Field, FieldKind, FieldSource, FieldValue, RawPropertyInput};
use crate::report;
use crate::service::{PropertyService, ServiceError};
use crate::store::PropertyStore;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Analyze,
    Saved,
    Details,
    Delete,
    Settings,
    Exit,
}

/// 폼 구역과 그 안의 필드. 화면에는 이 순서대로 묻는다.
const FORM_SECTIONS: [(&str, &[Field]); 4] = [
    (
        keys::FORM_SECTION_BASIC,
        &[Field::Address, Field::PurchasePrice, Field::SquareFeet],
    ),
    (
        keys::FORM_SECTION_RENTAL,
        &[
            Field::MonthlyRentPerUnit,
            Field::NumberOfUnits,
            Field::VacancyRate,
            Field::PropertyManagementRate,
            Field::MaintenanceReserveRate,
            Field::PropertyTaxRate,
        ],
    ),
    (keys::FORM_SECTION_EXPENSES, &Field::FIXED_MONTHLY_COSTS),
    (
        keys::FORM_SECTION_FINANCING,
        &[
            Field::DesiredCapRate,
            Field::DownPaymentPercentage,
            Field::LengthOfMortgage,
            Field::MortgageRate,
        ],
    ),
];

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_ANALYZE,
        keys::MAIN_MENU_SAVED,
        keys::MAIN_MENU_DETAILS,
        keys::MAIN_MENU_DELETE,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Analyze),
            "2" => return Ok(MenuChoice::Saved),
            "3" => return Ok(MenuChoice::Details),
            "4" => return Ok(MenuChoice::Delete),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 매물 분석 폼을 처리한다. 검증 실패 시 사유를 보여주고 메뉴로 돌아간다.
pub fn handle_analyze<S: PropertyStore>(
    tr: &Translator,
    cfg: &Config,
    service: &mut PropertyService<S>,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::FORM_HEADING));
    println!("{}", tr.t(keys::FORM_HINT));
    let mut raw = RawPropertyInput::default();
    for (section, fields) in FORM_SECTIONS {
        println!("{}", tr.t(section));
        for &field in fields {
            let value = prompt_field(tr, field, &cfg.defaults)?;
            raw.set(field, value);
        }
    }

    let (input, metrics) = match service.preview(&raw) {
        Ok(result) => result,
        Err(err @ (ServiceError::Validation(_) | ServiceError::Overflow(_))) => {
            println!("{} {err}", tr.t(keys::FORM_REJECTED));
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    println!();
    print!("{}", report::detail(&input, &metrics, tr));

    let answer = read_line(tr.t(keys::PROMPT_SAVE))?;
    if matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
        let record = service.create(&raw)?;
        println!("{} {}", tr.t(keys::RESULT_SAVED), record.id);
    }
    Ok(())
}

/// 저장된 분석 목록을 표시한다.
pub fn handle_saved<S: PropertyStore>(
    tr: &Translator,
    service: &PropertyService<S>,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SAVED_HEADING));
    print!("{}", report::list(&service.list()?, tr));
    Ok(())
}

/// ID(앞자리)로 분석 하나를 찾아 상세 정보를 표시한다.
pub fn handle_details<S: PropertyStore>(
    tr: &Translator,
    service: &PropertyService<S>,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::DETAILS_HEADING));
    let prefix = read_line(tr.t(keys::PROMPT_RECORD_ID))?;
    match service.find_by_prefix(prefix.trim())? {
        Some(record) => print!(
            "{}",
            report::detail(&record.input, &record.calculated_metrics, tr)
        ),
        None => println!("{}", tr.t(keys::ERROR_INVALID_ID)),
    }
    Ok(())
}

/// ID(앞자리)로 분석 하나를 삭제한다.
pub fn handle_delete<S: PropertyStore>(
    tr: &Translator,
    service: &mut PropertyService<S>,
) -> Result<(), AppError> {
    let prefix = read_line(tr.t(keys::PROMPT_RECORD_ID))?;
    match service.find_by_prefix(prefix.trim())? {
        Some(record) => {
            service.delete(record.id)?;
            println!("{} {}", tr.t(keys::RESULT_DELETED), record.input.address);
        }
        None => println!("{}", tr.t(keys::ERROR_INVALID_ID)),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다. 언어가 바뀌면 true.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let language = match sel.trim() {
        "" => return Ok(false),
        "1" => "ko",
        "2" => "en",
        "3" => "auto",
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(false);
        }
    };
    cfg.language = language.to_string();
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    Ok(true)
}

/// 폼 한 칸의 입력 문자열을 JSON 값으로 바꾼다.
///
/// 빈 입력은 기본값을 쓴다. 비율 필드는 `6.5%` 형식도 받는다.
/// 숫자로 읽을 수 없으면 None.
pub fn parse_field_entry(field: Field, text: &str, default: &Value) -> Option<Value> {
    let text = text.trim();
    if text.is_empty() {
        return Some(default.clone());
    }
    if field.kind() == FieldKind::Text {
        return Some(Value::String(text.to_string()));
    }
    let (number, scale) = match text.strip_suffix('%') {
        Some(n) if field.kind() == FieldKind::Rate => (n.trim(), 100.0),
        _ => (text, 1.0),
    };
    let cleaned = number.trim_start_matches('$').replace(',', "");
    let value = cleaned.parse::<f64>().ok()? / scale;
    serde_json::Number::from_f64(value).map(Value::Number)
}

fn default_value(field: Field, defaults: &impl FieldSource) -> Value {
    match defaults.value_of(field) {
        FieldValue::Text(s) => Value::String(s.to_string()),
        FieldValue::Number(n) if field.is_integer() => Value::from(n as u64),
        FieldValue::Number(n) => serde_json::Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        FieldValue::Missing | FieldValue::Other => Value::Null,
    }
}

fn prompt_field(
    tr: &Translator,
    field: Field,
    defaults: &impl FieldSource,
) -> Result<Value, AppError> {
    let default = default_value(field, defaults);
    let shown = match &default {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    loop {
        let entry = read_line(&format!("{} [{shown}]: ", tr.field(field)))?;
        match parse_field_entry(field, &entry, &default) {
            Some(value) => return Ok(value),
            None => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input").into());
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_suffix_is_only_for_rates() {
        let d = Value::Null;
        assert_eq!(
            parse_field_entry(Field::MortgageRate, "6.5%", &d),
            serde_json::Number::from_f64(0.065).map(Value::Number)
        );
        assert_eq!(parse_field_entry(Field::PurchasePrice, "5%", &d), None);
        assert_eq!(
            parse_field_entry(Field::PurchasePrice, "$200,000", &d),
            Some(Value::from(200000.0))
        );
    }

    #[test]
    fn blank_entry_keeps_default() {
        let d = Value::from(30);
        assert_eq!(parse_field_entry(Field::LengthOfMortgage, "  ", &d), Some(d.clone()));
    }

    #[test]
    fn every_field_appears_in_exactly_one_form_section() {
        for field in Field::ALL {
            let count = FORM_SECTIONS
                .iter()
                .filter(|(_, fields)| fields.contains(&field))
                .count();
            assert_eq!(count, 1, "{field}");
        }
    }
}
