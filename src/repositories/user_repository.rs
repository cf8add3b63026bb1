use async_trait::async_trait;
use sqlx::PgPool;

use crate::constants::USER_TABLE;
use crate::errors::StoreError;
use crate::models::status::StatusCount;
use crate::models::user::{UserRecord, VoiceStatusRow};

/// Data access for the `userdata` table.
///
/// Every method issues exactly one statement. Update methods report the number
/// of rows they touched so callers can tell a missing user from a success.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert_user(&self, username: &str, email: &str) -> Result<(), StoreError>;

    /// Number of rows matching both `username` and `email` exactly.
    async fn count_matching_users(&self, username: &str, email: &str)
        -> Result<i64, StoreError>;

    async fn update_typing_score(&self, username: &str, score: f64) -> Result<u64, StoreError>;

    async fn update_audio_file(&self, username: &str, file_path: &str)
        -> Result<u64, StoreError>;

    async fn fetch_all_users(&self) -> Result<Vec<UserRecord>, StoreError>;

    /// One entry per distinct non-null `typing_test_status`.
    async fn typing_status_counts(&self) -> Result<Vec<StatusCount>, StoreError>;

    async fn voice_status_rows(&self) -> Result<Vec<VoiceStatusRow>, StoreError>;
}

pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert_user(&self, username: &str, email: &str) -> Result<(), StoreError> {
        let sql = format!("INSERT INTO {} (username, email) VALUES ($1, $2)", USER_TABLE);
        sqlx::query(&sql)
            .bind(username)
            .bind(email)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn count_matching_users(
        &self,
        username: &str,
        email: &str,
    ) -> Result<i64, StoreError> {
        let sql = format!(
            "SELECT COUNT(*) FROM {} WHERE username = $1 AND email = $2",
            USER_TABLE
        );
        let count: i64 = sqlx::query_scalar(&sql)
            .bind(username)
            .bind(email)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn update_typing_score(&self, username: &str, score: f64) -> Result<u64, StoreError> {
        let sql = format!(
            "UPDATE {} SET typing_test_score = $1 WHERE username = $2",
            USER_TABLE
        );
        let result = sqlx::query(&sql)
            .bind(score)
            .bind(username)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn update_audio_file(
        &self,
        username: &str,
        file_path: &str,
    ) -> Result<u64, StoreError> {
        let sql = format!(
            "UPDATE {} SET audio_file_data = $1 WHERE username = $2",
            USER_TABLE
        );
        let result = sqlx::query(&sql)
            .bind(file_path)
            .bind(username)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn fetch_all_users(&self) -> Result<Vec<UserRecord>, StoreError> {
        let sql = format!(
            "SELECT username, email, typing_test_score, audio_file_data, typing_test_status, \
             voice_test_1_status, voice_test_2_status FROM {}",
            USER_TABLE
        );
        let users = sqlx::query_as::<_, UserRecord>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn typing_status_counts(&self) -> Result<Vec<StatusCount>, StoreError> {
        let sql = format!(
            "SELECT typing_test_status AS status, COUNT(*) AS count FROM {} \
             WHERE typing_test_status IS NOT NULL GROUP BY typing_test_status",
            USER_TABLE
        );
        let counts = sqlx::query_as::<_, StatusCount>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(counts)
    }

    async fn voice_status_rows(&self) -> Result<Vec<VoiceStatusRow>, StoreError> {
        let sql = format!(
            "SELECT voice_test_1_status, voice_test_2_status FROM {}",
            USER_TABLE
        );
        let rows = sqlx::query_as::<_, VoiceStatusRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
