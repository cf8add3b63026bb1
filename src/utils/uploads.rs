use std::path::{Path, PathBuf};

use actix_multipart::{Field, Multipart};
use actix_web::web::BytesMut;
use futures_util::TryStreamExt;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::constants::{MAX_USERNAME_BYTES, USERNAME_FIELD, VOICE_FILE_FIELD};
use crate::errors::AppError;
use crate::structs::voice_test::{VoiceTestForm, VoiceUpload};

/// Drains a multipart body into a `VoiceTestForm`.
///
/// Only a `file` part carrying a filename counts as the upload; it is buffered
/// up to `max_bytes`. `username` is capped at `MAX_USERNAME_BYTES`. Every other
/// part is read and dropped without being kept in memory.
pub async fn read_voice_test_form(
    mut payload: Multipart,
    max_bytes: usize,
) -> Result<VoiceTestForm, AppError> {
    let mut form = VoiceTestForm::default();

    while let Some(mut field) = payload.try_next().await? {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);

        match (name.as_str(), file_name) {
            (VOICE_FILE_FIELD, Some(file_name)) => {
                let bytes = read_capped(&mut field, max_bytes)
                    .await?
                    .ok_or(AppError::UploadTooLarge { limit: max_bytes })?;
                form.file = Some(VoiceUpload {
                    file_name: Some(file_name),
                    bytes: bytes.freeze(),
                });
            }
            (USERNAME_FIELD, None) => {
                let bytes = read_capped(&mut field, MAX_USERNAME_BYTES)
                    .await?
                    .ok_or_else(|| {
                        AppError::InvalidInput(format!(
                            "Field 'username' exceeds {} bytes",
                            MAX_USERNAME_BYTES
                        ))
                    })?;
                form.username = Some(String::from_utf8_lossy(&bytes).into_owned());
            }
            (other, _) => {
                debug!("Ignoring multipart field '{}'", other);
                while field.try_next().await?.is_some() {}
            }
        }
    }

    Ok(form)
}

/// Buffers a part, or returns `None` as soon as it grows past `limit`.
async fn read_capped(field: &mut Field, limit: usize) -> Result<Option<BytesMut>, AppError> {
    let mut buffer = BytesMut::new();
    while let Some(chunk) = field.try_next().await? {
        if buffer.len() + chunk.len() > limit {
            return Ok(None);
        }
        buffer.extend_from_slice(&chunk);
    }
    Ok(Some(buffer))
}

/// Writes the upload under a random name inside `dir` and returns its path.
pub async fn store_upload(dir: &Path, upload: &VoiceUpload) -> std::io::Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;

    let path = dir.join(Uuid::new_v4().simple().to_string());
    let mut file = tokio::fs::File::create(&path).await?;
    file.write_all(&upload.bytes).await?;
    file.flush().await?;

    Ok(path)
}

pub async fn discard_upload(path: &Path) {
    if let Err(err) = tokio::fs::remove_file(path).await {
        warn!("Failed to remove upload {}: {}", path.display(), err);
    }
}
