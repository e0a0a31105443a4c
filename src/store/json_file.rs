use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use uuid::Uuid;

use super::{PropertyRecord, PropertyStore, RecordSet, StoreError};
use crate::analysis::CalculatedMetrics;
use crate::property::PropertyInput;

/// 전체 레코드를 JSON 배열 하나로 보관하는 파일 저장소.
///
/// 매 연산마다 파일을 읽고, 변경 시 임시 파일에 쓴 뒤 이름을 바꿔 교체한다.
/// 파일이 없으면 빈 저장소로 본다.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<RecordSet, StoreError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "store file absent, starting empty");
            return Ok(RecordSet::default());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(RecordSet::default());
        }
        let records: RecordSet = serde_json::from_str(&content)?;
        debug!(path = %self.path.display(), count = records.len(), "store file loaded");
        Ok(records)
    }

    fn save(&self, records: &RecordSet) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(records)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl PropertyStore for JsonFileStore {
    fn create(
        &mut self,
        input: PropertyInput,
        metrics: CalculatedMetrics,
    ) -> Result<PropertyRecord, StoreError> {
        let mut records = self.load()?;
        let record = records.create(input, metrics);
        self.save(&records)?;
        Ok(record)
    }

    fn get(&self, id: Uuid) -> Result<PropertyRecord, StoreError> {
        self.load()?.get(id)
    }

    fn list(&self) -> Result<Vec<PropertyRecord>, StoreError> {
        Ok(self.load()?.list())
    }

    fn update(
        &mut self,
        id: Uuid,
        input: PropertyInput,
        metrics: CalculatedMetrics,
    ) -> Result<PropertyRecord, StoreError> {
        let mut records = self.load()?;
        let record = records.update(id, input, metrics)?;
        self.save(&records)?;
        Ok(record)
    }

    fn delete(&mut self, id: Uuid) -> Result<(), StoreError> {
        let mut records = self.load()?;
        records.delete(id)?;
        self.save(&records)
    }
}
