use actix_web::web::Bytes;

/// Uploaded voice recording collected from the `file` multipart part.
#[derive(Debug)]
pub struct VoiceUpload {
    pub file_name: Option<String>,
    pub bytes: Bytes,
}

/// Fields gathered from a `/submit-voice-test` multipart body.
#[derive(Debug, Default)]
pub struct VoiceTestForm {
    pub username: Option<String>,
    pub file: Option<VoiceUpload>,
}
