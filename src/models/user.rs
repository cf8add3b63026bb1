use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `userdata` table.
///
/// The three status columns are maintained outside this service and are only
/// ever read here.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub typing_test_score: Option<f64>,
    #[serde(default)]
    pub audio_file_data: Option<String>,
    #[serde(default)]
    pub typing_test_status: Option<String>,
    #[serde(default)]
    #[serde(rename = "voiceTest1Status")]
    pub voice_test_1_status: Option<String>,
    #[serde(default)]
    #[serde(rename = "voiceTest2Status")]
    pub voice_test_2_status: Option<String>,
}

impl UserRecord {
    pub fn registered(username: String, email: String) -> Self {
        UserRecord {
            username,
            email,
            typing_test_score: None,
            audio_file_data: None,
            typing_test_status: None,
            voice_test_1_status: None,
            voice_test_2_status: None,
        }
    }
}

/// The two voice status columns of a row, as fetched for aggregation.
#[derive(Clone, Debug, PartialEq, FromRow)]
pub struct VoiceStatusRow {
    pub voice_test_1_status: Option<String>,
    pub voice_test_2_status: Option<String>,
}
