use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

use crate::property::Field;

/// 문자열 키를 모아두는 네임스페이스.
///
/// 필드 라벨은 `field.<camelCase 이름>`, 지표 라벨은 `metric.<camelCase 이름>` 키를 쓴다.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const NOT_AVAILABLE: &str = "general.not_available";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_ANALYZE: &str = "main_menu.analyze";
    pub const MAIN_MENU_SAVED: &str = "main_menu.saved";
    pub const MAIN_MENU_DETAILS: &str = "main_menu.details";
    pub const MAIN_MENU_DELETE: &str = "main_menu.delete";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const FORM_HEADING: &str = "form.heading";
    pub const FORM_HINT: &str = "form.hint";
    pub const FORM_SECTION_BASIC: &str = "form.section_basic";
    pub const FORM_SECTION_RENTAL: &str = "form.section_rental";
    pub const FORM_SECTION_EXPENSES: &str = "form.section_expenses";
    pub const FORM_SECTION_FINANCING: &str = "form.section_financing";
    pub const FORM_REJECTED: &str = "form.rejected";
    pub const PROMPT_SAVE: &str = "prompt.save";
    pub const RESULT_SAVED: &str = "result.saved";
    pub const RESULT_DELETED: &str = "result.deleted";

    pub const SAVED_HEADING: &str = "saved.heading";
    pub const SAVED_EMPTY: &str = "saved.empty";
    pub const DETAILS_HEADING: &str = "details.heading";
    pub const PROMPT_RECORD_ID: &str = "prompt.record_id";
    pub const ERROR_INVALID_ID: &str = "error.invalid_id";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const UNDEFINED_NOTE: &str = "details.undefined_note";
    pub const TOTAL_INTEREST: &str = "details.total_interest";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    /// 번역을 가져온다. 언어팩 → 현재 언어 → 영어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)).unwrap_or("[missing translation]"),
            Language::En => en(key).unwrap_or("[missing translation]"),
        }
    }

    /// 입력 필드의 표시 라벨.
    pub fn field(&self, field: Field) -> &str {
        self.t(&format!("field.{}", field.name()))
    }

    /// 지표의 표시 라벨.
    pub fn metric(&self, name: &str) -> &str {
        self.t(&format!("metric.{name}"))
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: 섹션/키 = "value" (중첩 테이블은 점으로 연결).
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let path = dir.join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        NOT_AVAILABLE => "n/a",
        MAIN_MENU_TITLE => "\n=== 임대 부동산 분석기 ===",
        MAIN_MENU_ANALYZE => "1) 매물 분석",
        MAIN_MENU_SAVED => "2) 저장된 분석 목록",
        MAIN_MENU_DETAILS => "3) 상세 보기",
        MAIN_MENU_DELETE => "4) 삭제",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        FORM_HEADING => "\n-- 매물 분석 --",
        FORM_HINT => "엔터 = 기본값 유지. 비율은 0.065 또는 6.5% 형식으로 입력합니다.",
        FORM_SECTION_BASIC => "[기본 정보]",
        FORM_SECTION_RENTAL => "[임대 정보]",
        FORM_SECTION_EXPENSES => "[월 운영비]",
        FORM_SECTION_FINANCING => "[금융 조건]",
        FORM_REJECTED => "입력이 거부되었습니다:",
        PROMPT_SAVE => "분석 결과를 저장할까요? (y/N): ",
        RESULT_SAVED => "저장되었습니다. ID:",
        RESULT_DELETED => "삭제되었습니다:",
        SAVED_HEADING => "\n-- 저장된 분석 --",
        SAVED_EMPTY => "저장된 분석이 없습니다.",
        DETAILS_HEADING => "\n-- 상세 정보 --",
        PROMPT_RECORD_ID => "분석 ID (앞자리만 입력 가능): ",
        ERROR_INVALID_ID => "해당 ID의 분석을 찾을 수 없습니다.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        UNDEFINED_NOTE => "n/a 항목은 분모가 0이라 계산할 수 없습니다.",
        TOTAL_INTEREST => "대출 기간 총 이자",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_OPTIONS => "1) 한국어  2) English  3) 자동",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "언어 설정이 변경되었습니다:",

        "field.address" => "주소",
        "field.purchasePrice" => "매입가 ($)",
        "field.squareFeet" => "면적 (sqft)",
        "field.monthlyRentPerUnit" => "세대당 월 임대료 ($)",
        "field.numberOfUnits" => "세대 수",
        "field.propertyTaxRate" => "재산세율",
        "field.vacancyRate" => "공실률",
        "field.propertyManagementRate" => "관리 수수료율",
        "field.maintenanceReserveRate" => "유지보수 적립률",
        "field.landlordInsurance" => "임대인 보험 ($)",
        "field.hoaFees" => "HOA 관리비 ($)",
        "field.waterAndSewer" => "상하수도 ($)",
        "field.gasAndElectricity" => "가스/전기 ($)",
        "field.garbage" => "쓰레기 처리 ($)",
        "field.snowRemoval" => "제설 ($)",
        "field.cablePhoneInternet" => "케이블/전화/인터넷 ($)",
        "field.pestControl" => "방역 ($)",
        "field.accountingAdvertisingLegal" => "회계/광고/법무 ($)",
        "field.desiredCapRate" => "목표 Cap rate",
        "field.downPaymentPercentage" => "계약금 비율",
        "field.lengthOfMortgage" => "대출 기간 (년)",
        "field.mortgageRate" => "대출 금리",

        "metric.purchasePrice" => "매입가",
        "metric.monthlyRentalIncome" => "월 임대수입",
        "metric.monthlyGrossIncome" => "월 유효수입",
        "metric.monthlyOperatingExpenses" => "월 운영비",
        "metric.annualNetOperatingIncome" => "연 순영업소득 (NOI)",
        "metric.monthlyCashFlow" => "월 현금흐름",
        "metric.annualCashFlow" => "연 현금흐름",
        "metric.capRate" => "Cap rate",
        "metric.cashOnCashReturn" => "현금 수익률",
        "metric.propertyValuation" => "가치평가",
        "metric.loanAmount" => "대출 원금",
        "metric.monthlyMortgagePayment" => "월 상환액",
        "metric.propertyManagementFees" => "관리 수수료",
        "metric.propertyTax" => "재산세",
        "metric.maintenanceReserve" => "유지보수 적립금",
        "metric.dollarPerSquareFoot" => "평방피트당 가격",
        "metric.grossRentMultiplier" => "총임대수익승수 (GRM)",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        NOT_AVAILABLE => "n/a",
        MAIN_MENU_TITLE => "\n=== Rental Property Analyzer ===",
        MAIN_MENU_ANALYZE => "1) Analyze property",
        MAIN_MENU_SAVED => "2) Saved analyses",
        MAIN_MENU_DETAILS => "3) Analysis details",
        MAIN_MENU_DELETE => "4) Delete analysis",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        FORM_HEADING => "\n-- Analyze Property --",
        FORM_HINT => "Enter keeps the default. Rates accept 0.065 or 6.5%.",
        FORM_SECTION_BASIC => "[Basic information]",
        FORM_SECTION_RENTAL => "[Rental information]",
        FORM_SECTION_EXPENSES => "[Monthly operating expenses]",
        FORM_SECTION_FINANCING => "[Financing]",
        FORM_REJECTED => "Input rejected:",
        PROMPT_SAVE => "Save this analysis? (y/N): ",
        RESULT_SAVED => "Saved. ID:",
        RESULT_DELETED => "Deleted:",
        SAVED_HEADING => "\n-- Saved Analyses --",
        SAVED_EMPTY => "No saved properties yet.",
        DETAILS_HEADING => "\n-- Analysis Details --",
        PROMPT_RECORD_ID => "Analysis ID (prefix is enough): ",
        ERROR_INVALID_ID => "No analysis found for that ID.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        UNDEFINED_NOTE => "n/a values have a zero denominator and cannot be computed.",
        TOTAL_INTEREST => "Total interest over term",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) 한국어  2) English  3) Auto",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language changed to:",

        "field.address" => "Property address",
        "field.purchasePrice" => "Purchase price ($)",
        "field.squareFeet" => "Square feet",
        "field.monthlyRentPerUnit" => "Monthly rent per unit ($)",
        "field.numberOfUnits" => "Number of units",
        "field.propertyTaxRate" => "Property tax rate",
        "field.vacancyRate" => "Vacancy rate",
        "field.propertyManagementRate" => "Property management rate",
        "field.maintenanceReserveRate" => "Maintenance reserve rate",
        "field.landlordInsurance" => "Landlord insurance ($)",
        "field.hoaFees" => "HOA fees ($)",
        "field.waterAndSewer" => "Water & sewer ($)",
        "field.gasAndElectricity" => "Gas & electricity ($)",
        "field.garbage" => "Garbage ($)",
        "field.snowRemoval" => "Snow removal ($)",
        "field.cablePhoneInternet" => "Cable/phone/internet ($)",
        "field.pestControl" => "Pest control ($)",
        "field.accountingAdvertisingLegal" => "Accounting/advertising/legal ($)",
        "field.desiredCapRate" => "Desired cap rate",
        "field.downPaymentPercentage" => "Down payment percentage",
        "field.lengthOfMortgage" => "Length of mortgage (years)",
        "field.mortgageRate" => "Mortgage rate",

        "metric.purchasePrice" => "Purchase price",
        "metric.monthlyRentalIncome" => "Monthly rental income",
        "metric.monthlyGrossIncome" => "Monthly gross income",
        "metric.monthlyOperatingExpenses" => "Monthly operating expenses",
        "metric.annualNetOperatingIncome" => "Annual net operating income",
        "metric.monthlyCashFlow" => "Monthly cash flow",
        "metric.annualCashFlow" => "Annual cash flow",
        "metric.capRate" => "Cap rate",
        "metric.cashOnCashReturn" => "Cash on cash return",
        "metric.propertyValuation" => "Property valuation",
        "metric.loanAmount" => "Loan amount",
        "metric.monthlyMortgagePayment" => "Monthly mortgage payment",
        "metric.propertyManagementFees" => "Property management fees",
        "metric.propertyTax" => "Property tax",
        "metric.maintenanceReserve" => "Maintenance reserve",
        "metric.dollarPerSquareFoot" => "Price per square foot",
        "metric.grossRentMultiplier" => "Gross rent multiplier",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_has_a_label_in_both_languages() {
        for field in Field::ALL {
            let key = format!("field.{}", field.name());
            assert!(ko(&key).is_some(), "ko missing {key}");
            assert!(en(&key).is_some(), "en missing {key}");
        }
    }

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language(Some("ko-KR"), Some("en")), "ko");
        assert_eq!(resolve_language(Some("auto"), Some("en-us")), "en");
    }

    #[test]
    fn nested_toml_pack_flattens_to_dotted_keys() {
        let map = parse_toml_to_map("[main_menu]\ntitle = \"Hi\"\n").unwrap();
        assert_eq!(map.get("main_menu.title").map(String::as_str), Some("Hi"));
    }
}
