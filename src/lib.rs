//! 임대 부동산 투자 지표 계산기.
//!
//! 핵심은 입력 검증기([`property::validate`])와 지표 계산기([`analysis::calculate`])이다.
//! 저장소, 보고서, CLI는 그 바깥에서 이 두 연산을 호출한다.

pub mod analysis;
pub mod app;
pub mod config;
pub mod i18n;
pub mod property;
pub mod report;
pub mod service;
pub mod store;
pub mod telemetry;
pub mod ui_cli;
