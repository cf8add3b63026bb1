use serde::{Deserialize, Serialize};

/// Body shared by `/login` and `/register`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}
