use serde::Serialize;

use crate::models::status::{StatusCount, StatusTally};
use crate::models::user::UserRecord;

#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDataResponse {
    pub success: bool,
    pub user_data: Vec<UserRecord>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypingTestStatusResponse {
    pub success: bool,
    pub typing_test_status_data: Vec<StatusCount>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceTestStatusResponse {
    pub success: bool,
    pub voice_test_status_data: StatusTally,
}

pub fn create_api_response(success: bool, message: &str) -> ApiResponse {
    ApiResponse {
        success,
        message: message.to_string(),
    }
}

pub fn success_response(message: &str) -> ApiResponse {
    create_api_response(true, message)
}

pub fn error_response(message: &str) -> ApiResponse {
    create_api_response(false, message)
}
