use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::property::PropertyInput;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 기본 저장 파일 경로.
pub const DEFAULT_STORE_PATH: &str = "properties.json";

/// 입력 폼의 기본값. 주소는 비워 두고 금액은 0으로 시작한다.
pub fn default_form() -> PropertyInput {
    PropertyInput {
        address: String::new(),
        purchase_price: 0.0,
        square_feet: 0.0,
        monthly_rent_per_unit: 0.0,
        number_of_units: 1,
        property_tax_rate: 0.02,
        vacancy_rate: 0.05,
        property_management_rate: 0.1,
        maintenance_reserve_rate: 0.05,
        landlord_insurance: 0.0,
        hoa_fees: 0.0,
        water_and_sewer: 0.0,
        gas_and_electricity: 0.0,
        garbage: 0.0,
        snow_removal: 0.0,
        cable_phone_internet: 0.0,
        pest_control: 0.0,
        accounting_advertising_legal: 0.0,
        desired_cap_rate: 0.06,
        down_payment_percentage: 0.2,
        length_of_mortgage: 30,
        mortgage_rate: 0.065,
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto / ko / en)
    pub language: String,
    /// 분석 레코드 저장 파일
    pub store_path: PathBuf,
    /// TOML 언어팩 디렉터리 (`<dir>/<lang>.toml`). 없으면 내장 문자열만 쓴다.
    pub locales_dir: Option<PathBuf>,
    /// 입력 폼 기본값
    pub defaults: PropertyInput,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            locales_dir: None,
            defaults: default_form(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
