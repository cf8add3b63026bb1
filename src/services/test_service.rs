use tracing::{info, warn};

use crate::config::settings::UploadSettings;
use crate::errors::AppError;
use crate::repositories::UserStore;
use crate::structs::typing_test::TypingTestRequest;
use crate::structs::voice_test::VoiceTestForm;
use crate::utils::helpers::require_field;
use crate::utils::uploads::{discard_upload, store_upload};

pub async fn submit_typing_test(
    store: &dyn UserStore,
    request: &TypingTestRequest,
) -> Result<(), AppError> {
    let username = require_field("username", &request.username)?;
    let score = request
        .typing_test_score
        .as_ref()
        .ok_or_else(|| AppError::InvalidInput("Missing required field 'typingTestScore'".into()))?
        .parse()
        .ok_or_else(|| AppError::InvalidInput("typingTestScore must be numeric".into()))?;

    let updated = store
        .update_typing_score(username, score)
        .await
        .map_err(AppError::store("Failed to submit typing test score"))?;

    if updated == 0 {
        warn!("Typing test submitted for unknown user '{}'", username);
        return Err(AppError::UserNotFound(username.to_string()));
    }

    info!("Stored typing test score {} for '{}'", score, username);
    Ok(())
}

/// Saves the recording to disk and points the user's row at it.
///
/// A missing file is reported before any other field is looked at.
pub async fn submit_voice_test(
    store: &dyn UserStore,
    uploads: &UploadSettings,
    form: VoiceTestForm,
) -> Result<(), AppError> {
    let upload = form.file.ok_or(AppError::MissingFile)?;
    let username = require_field("username", form.username.as_deref().unwrap_or_default())?;

    let path = store_upload(&uploads.dir, &upload)
        .await
        .map_err(AppError::io("Failed to store voice recording"))?;
    let path_str = path.to_string_lossy();

    let updated = match store.update_audio_file(username, &path_str).await {
        Ok(updated) => updated,
        Err(err) => {
            discard_upload(&path).await;
            return Err(AppError::store("Failed to submit voice test")(err));
        }
    };

    if updated == 0 {
        warn!("Voice test submitted for unknown user '{}'", username);
        discard_upload(&path).await;
        return Err(AppError::UserNotFound(username.to_string()));
    }

    info!(
        "Stored voice test for '{}' at {} ({} bytes, original name {:?})",
        username,
        path_str,
        upload.bytes.len(),
        upload.file_name
    );
    Ok(())
}
