//! 투자 지표 계산 모듈 모음.
//! 수입/비용 집계, 원리금균등 상환액, 분모 0 처리가 들어간 비율 지표로 구성한다.

pub mod metrics;
pub mod mortgage;
pub mod ratio;

pub use metrics::{calculate, CalculatedMetrics, DegenerateRatio, RatioMetric};
pub use mortgage::{monthly_payment, MortgageInput, MortgageResult};
pub use ratio::Ratio;
