use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::errors::StoreError;
use crate::models::status::StatusCount;
use crate::models::user::{UserRecord, VoiceStatusRow};
use crate::repositories::user_repository::UserStore;

/// `UserStore` kept in process memory, with the same row semantics as the
/// SQL table: no uniqueness on `username`, keyed updates touch every match.
#[derive(Default)]
pub struct InMemoryUserStore {
    rows: RwLock<Vec<UserRecord>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store, e.g. with status columns this service never writes.
    pub fn with_records(records: Vec<UserRecord>) -> Self {
        Self {
            rows: RwLock::new(records),
        }
    }

    pub fn records(&self) -> Vec<UserRecord> {
        self.rows.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn update_where<F>(&self, username: &str, mut apply: F) -> u64
    where
        F: FnMut(&mut UserRecord),
    {
        let mut rows = self.rows.write().unwrap_or_else(|e| e.into_inner());
        let mut affected = 0;
        for row in rows.iter_mut().filter(|row| row.username == username) {
            apply(row);
            affected += 1;
        }
        affected
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert_user(&self, username: &str, email: &str) -> Result<(), StoreError> {
        self.rows
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(UserRecord::registered(username.to_string(), email.to_string()));
        Ok(())
    }

    async fn count_matching_users(
        &self,
        username: &str,
        email: &str,
    ) -> Result<i64, StoreError> {
        let rows = self.rows.read().unwrap_or_else(|e| e.into_inner());
        let count = rows
            .iter()
            .filter(|row| row.username == username && row.email == email)
            .count();
        Ok(count as i64)
    }

    async fn update_typing_score(&self, username: &str, score: f64) -> Result<u64, StoreError> {
        Ok(self.update_where(username, |row| row.typing_test_score = Some(score)))
    }

    async fn update_audio_file(
        &self,
        username: &str,
        file_path: &str,
    ) -> Result<u64, StoreError> {
        Ok(self.update_where(username, |row| {
            row.audio_file_data = Some(file_path.to_string())
        }))
    }

    async fn fetch_all_users(&self) -> Result<Vec<UserRecord>, StoreError> {
        Ok(self.records())
    }

    async fn typing_status_counts(&self) -> Result<Vec<StatusCount>, StoreError> {
        let rows = self.rows.read().unwrap_or_else(|e| e.into_inner());
        let mut counts: HashMap<&str, i64> = HashMap::new();
        for status in rows.iter().filter_map(|row| row.typing_test_status.as_deref()) {
            *counts.entry(status).or_insert(0) += 1;
        }

        Ok(counts
            .into_iter()
            .map(|(status, count)| StatusCount {
                status: status.to_string(),
                count,
            })
            .collect())
    }

    async fn voice_status_rows(&self) -> Result<Vec<VoiceStatusRow>, StoreError> {
        let rows = self.rows.read().unwrap_or_else(|e| e.into_inner());
        Ok(rows
            .iter()
            .map(|row| VoiceStatusRow {
                voice_test_1_status: row.voice_test_1_status.clone(),
                voice_test_2_status: row.voice_test_2_status.clone(),
            })
            .collect())
    }
}
