//! 분석 결과 저장소. 식별자와 생성/수정 시각은 저장소가 부여한다.

pub mod json_file;
pub mod memory;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::analysis::CalculatedMetrics;
use crate::property::PropertyInput;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// 저장된 분석 레코드. 입력 필드 + `calculatedMetrics` + 식별자/시각.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub id: Uuid,
    #[serde(flatten)]
    pub input: PropertyInput,
    pub calculated_metrics: CalculatedMetrics,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 저장소 계층 오류. 서비스는 해석하지 않고 그대로 전달한다.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("property {0} not found")]
    NotFound(Uuid),
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store data error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// 분석 레코드 CRUD 저장소.
pub trait PropertyStore {
    /// 새 레코드를 만든다. 식별자와 시각을 부여한다.
    fn create(
        &mut self,
        input: PropertyInput,
        metrics: CalculatedMetrics,
    ) -> Result<PropertyRecord, StoreError>;

    fn get(&self, id: Uuid) -> Result<PropertyRecord, StoreError>;

    /// 최근 생성 순으로 정렬된 전체 레코드.
    fn list(&self) -> Result<Vec<PropertyRecord>, StoreError>;

    /// 입력과 지표를 통째로 교체한다. `id`/`createdAt`은 유지하고 `updatedAt`을 갱신한다.
    fn update(
        &mut self,
        id: Uuid,
        input: PropertyInput,
        metrics: CalculatedMetrics,
    ) -> Result<PropertyRecord, StoreError>;

    fn delete(&mut self, id: Uuid) -> Result<(), StoreError>;
}

/// 삽입 순서대로 레코드를 보관하는 공용 컨테이너.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct RecordSet {
    records: Vec<PropertyRecord>,
}

impl RecordSet {
    pub(crate) fn create(
        &mut self,
        input: PropertyInput,
        calculated_metrics: CalculatedMetrics,
    ) -> PropertyRecord {
        let now = Utc::now();
        let record = PropertyRecord {
            id: Uuid::new_v4(),
            input,
            calculated_metrics,
            created_at: now,
            updated_at: now,
        };
        self.records.push(record.clone());
        record
    }

    pub(crate) fn get(&self, id: Uuid) -> Result<PropertyRecord, StoreError> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    // 같은 시각에 만들어진 레코드는 나중에 넣은 것이 앞에 온다.
    pub(crate) fn list(&self) -> Vec<PropertyRecord> {
        let mut out: Vec<PropertyRecord> = self.records.iter().rev().cloned().collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        out
    }

    pub(crate) fn update(
        &mut self,
        id: Uuid,
        input: PropertyInput,
        calculated_metrics: CalculatedMetrics,
    ) -> Result<PropertyRecord, StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        record.input = input;
        record.calculated_metrics = calculated_metrics;
        record.updated_at = Utc::now().max(record.created_at);
        Ok(record.clone())
    }

    pub(crate) fn delete(&mut self, id: Uuid) -> Result<(), StoreError> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() == before {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }
}
