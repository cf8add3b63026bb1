use crate::errors::AppError;
use crate::models::status::{StatusCount, StatusTally};
use crate::models::user::{UserRecord, VoiceStatusRow};
use crate::repositories::UserStore;

pub async fn fetch_user_data(store: &dyn UserStore) -> Result<Vec<UserRecord>, AppError> {
    let users = store
        .fetch_all_users()
        .await
        .map_err(AppError::store("Failed to fetch user data"))?;

    if users.is_empty() {
        return Err(AppError::NoData("user data"));
    }
    Ok(users)
}

pub async fn fetch_typing_test_status_data(
    store: &dyn UserStore,
) -> Result<Vec<StatusCount>, AppError> {
    let counts = store
        .typing_status_counts()
        .await
        .map_err(AppError::store("Failed to fetch typing test status data"))?;

    if counts.is_empty() {
        return Err(AppError::NoData("typing test status data"));
    }
    Ok(counts)
}

pub async fn fetch_voice_test_status_data(store: &dyn UserStore) -> Result<StatusTally, AppError> {
    let rows = store
        .voice_status_rows()
        .await
        .map_err(AppError::store("Failed to fetch voice test status data"))?;

    let tally = tally_voice_statuses(&rows);
    if tally.is_empty() {
        return Err(AppError::NoData("voice test status data"));
    }
    Ok(tally)
}

/// Folds both voice status columns of every row into one frequency map.
///
/// Each row contributes up to two increments; null columns are skipped. Keys
/// appear in the order they are first met while scanning rows in order,
/// column 1 before column 2.
pub fn tally_voice_statuses(rows: &[VoiceStatusRow]) -> StatusTally {
    let mut tally = StatusTally::new();
    for row in rows {
        for status in [&row.voice_test_1_status, &row.voice_test_2_status]
            .into_iter()
            .flatten()
        {
            tally.increment(status);
        }
    }
    tally
}
