use crate::types::report::AnalysisResult;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// One completed analysis, keyed into the store by content digest.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRecord {
    pub source: String,
    pub content_sha256: String,
    pub analysis: AnalysisResult,
    pub analyzed_at: DateTime<Utc>,
}

/// Explicit key-value store for analysis results, scoped to a single run.
/// Passed into the batch driver rather than living as ambient global state;
/// nothing here is persisted across invocations.
#[derive(Debug, Default)]
pub struct AnalysisStore {
    records: BTreeMap<String, AnalysisRecord>,
}

impl AnalysisStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store key for a document's raw bytes. Identical content maps to the
    /// same key, so duplicate documents are scored once per run.
    pub fn key_for(content: &[u8]) -> String {
        let digest = Sha256::digest(content);
        format!("analysis_{:x}", digest)
    }

    pub fn insert(&mut self, key: String, record: AnalysisRecord) {
        self.records.insert(key, record);
    }

    pub fn get(&self, key: &str) -> Option<&AnalysisRecord> {
        self.records.get(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &AnalysisRecord> {
        self.records.values()
    }
}
