use uuid::Uuid;

use super::{PropertyRecord, PropertyStore, RecordSet, StoreError};
use crate::analysis::CalculatedMetrics;
use crate::property::PropertyInput;

/// 프로세스 메모리에만 보관하는 저장소. 테스트와 일회성 실행용.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RecordSet,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PropertyStore for MemoryStore {
    fn create(
        &mut self,
        input: PropertyInput,
        metrics: CalculatedMetrics,
    ) -> Result<PropertyRecord, StoreError> {
        Ok(self.records.create(input, metrics))
    }

    fn get(&self, id: Uuid) -> Result<PropertyRecord, StoreError> {
        self.records.get(id)
    }

    fn list(&self) -> Result<Vec<PropertyRecord>, StoreError> {
        Ok(self.records.list())
    }

    fn update(
        &mut self,
        id: Uuid,
        input: PropertyInput,
        metrics: CalculatedMetrics,
    ) -> Result<PropertyRecord, StoreError> {
        self.records.update(id, input, metrics)
    }

    fn delete(&mut self, id: Uuid) -> Result<(), StoreError> {
        self.records.delete(id)
    }
}
