//! 입력 검증 → 지표 계산 → 저장을 잇는 분석 서비스.
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::analysis::{calculate, CalculatedMetrics};
use crate::property::{validate, RawPropertyInput, ValidatedInput, ValidationError};
use crate::store::{PropertyRecord, PropertyStore, StoreError};

/// 서비스 계층 오류. 검증 오류와 저장소 오류를 구분해 그대로 전달한다.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("{0} is not a finite number; input values are too large")]
    Overflow(&'static str),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// 요청자가 입력을 고쳐야 하는 오류인지 여부.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ServiceError::Validation(_)
                | ServiceError::Overflow(_)
                | ServiceError::Store(StoreError::NotFound(_))
        )
    }
}

/// 저장소를 감싸 매물 분석 CRUD 흐름을 제공한다.
pub struct PropertyService<S: PropertyStore> {
    store: S,
}

impl<S: PropertyStore> PropertyService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 저장 없이 검증과 계산만 수행한다.
    pub fn preview(&self, raw: &RawPropertyInput) -> Result<(ValidatedInput, CalculatedMetrics), ServiceError> {
        let input = checked(raw)?;
        let metrics = analyze(&input)?;
        Ok((input, metrics))
    }

    pub fn create(&mut self, raw: &RawPropertyInput) -> Result<PropertyRecord, ServiceError> {
        let input = checked(raw)?;
        let metrics = analyze(&input)?;
        let record = self.store.create(input.into_inner(), metrics)?;
        info!(id = %record.id, address = %record.input.address, "property analysis created");
        Ok(record)
    }

    pub fn get(&self, id: Uuid) -> Result<PropertyRecord, ServiceError> {
        debug!(%id, "fetching property analysis");
        Ok(self.store.get(id)?)
    }

    /// 전체 ID 또는 유일하게 일치하는 ID 앞자리로 레코드를 찾는다.
    pub fn find_by_prefix(&self, prefix: &str) -> Result<Option<PropertyRecord>, ServiceError> {
        if let Ok(id) = Uuid::parse_str(prefix) {
            return match self.store.get(id) {
                Ok(record) => Ok(Some(record)),
                Err(StoreError::NotFound(_)) => Ok(None),
                Err(err) => Err(err.into()),
            };
        }
        let needle = prefix.trim().to_lowercase().replace('-', "");
        if needle.is_empty() {
            return Ok(None);
        }
        let mut matches = self
            .store
            .list()?
            .into_iter()
            .filter(|r| r.id.simple().to_string().starts_with(&needle));
        match (matches.next(), matches.next()) {
            (Some(record), None) => Ok(Some(record)),
            _ => Ok(None),
        }
    }

    pub fn list(&self) -> Result<Vec<PropertyRecord>, ServiceError> {
        let records = self.store.list()?;
        debug!(count = records.len(), "listing property analyses");
        Ok(records)
    }

    /// 입력을 다시 검증하고 지표를 새로 계산해 기존 레코드를 교체한다.
    pub fn update(&mut self, id: Uuid, raw: &RawPropertyInput) -> Result<PropertyRecord, ServiceError> {
        let input = checked(raw)?;
        let metrics = analyze(&input)?;
        let record = self.store.update(id, input.into_inner(), metrics)?;
        info!(%id, "property analysis updated");
        Ok(record)
    }

    pub fn delete(&mut self, id: Uuid) -> Result<(), ServiceError> {
        self.store.delete(id)?;
        info!(%id, "property analysis deleted");
        Ok(())
    }
}

fn checked(raw: &RawPropertyInput) -> Result<ValidatedInput, ValidationError> {
    validate(raw).inspect_err(|err| {
        warn!(field = %err.field(), rule = ?err.rule(), "rejected property input: {err}");
    })
}

/// 지표를 계산한다. 금액 지표가 넘치면 저장하지 않고 거부한다.
fn analyze(input: &ValidatedInput) -> Result<CalculatedMetrics, ServiceError> {
    let metrics = calculate(input);
    if let Some(metric) = metrics.first_non_finite() {
        warn!(address = %input.address, metric, "metric overflowed, input rejected");
        return Err(ServiceError::Overflow(metric));
    }
    for degenerate in metrics.undefined_fields() {
        warn!(address = %input.address, "{degenerate}");
    }
    Ok(metrics)
}
