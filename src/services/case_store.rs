// services/case_store.rs
use std::sync::Mutex;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::models::case::CaseRecord;

#[derive(Debug, Error)]
pub enum CaseStoreError {
    #[error("case store rejected record: {0}")]
    Rejected(String),
}

/// Where confirmed cases go. The production default only logs; tests swap in
/// [`InMemoryCaseStore`] to assert on what was recorded instead of scraping
/// log output.
#[async_trait]
pub trait CaseStore: Send + Sync {
    async fn save(&self, record: &CaseRecord) -> Result<(), CaseStoreError>;
}

/// Emits each case as a log line, the only persistence this service
/// performs. Intake staff and downstream tooling consume these out of band.
pub struct LogCaseStore;

#[async_trait]
impl CaseStore for LogCaseStore {
    async fn save(&self, record: &CaseRecord) -> Result<(), CaseStoreError> {
        info!("Case created: {:?}", record);
        Ok(())
    }
}

/// Test double retaining every saved case.
#[derive(Default)]
pub struct InMemoryCaseStore {
    records: Mutex<Vec<CaseRecord>>,
}

impl InMemoryCaseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved(&self) -> Vec<CaseRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl CaseStore for InMemoryCaseStore {
    async fn save(&self, record: &CaseRecord) -> Result<(), CaseStoreError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}
