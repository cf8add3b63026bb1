use actix_multipart::MultipartError;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;
use tracing::error;

use crate::structs::api_response::error_response;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("No file uploaded")]
    MissingFile,

    #[error("Uploaded file exceeds the {limit} byte limit")]
    UploadTooLarge { limit: usize },

    #[error("Invalid credentials or user not registered")]
    InvalidCredentials,

    #[error("User '{0}' not found")]
    UserNotFound(String),

    #[error("No {0} found")]
    NoData(&'static str),

    #[error("{context}")]
    Store {
        context: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("{context}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    pub fn store(context: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Store { context, source }
    }

    pub fn io(context: &'static str) -> impl FnOnce(std::io::Error) -> AppError {
        move |source| AppError::Io { context, source }
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::InvalidInput(format!("Malformed multipart payload: {}", err))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) | AppError::MissingFile => StatusCode::BAD_REQUEST,
            AppError::UploadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::UserNotFound(_) | AppError::NoData(_) => StatusCode::NOT_FOUND,
            AppError::Store { .. } | AppError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Store { context, source } => error!("{}: {}", context, source),
            AppError::Io { context, source } => error!("{}: {}", context, source),
            _ => {}
        }

        HttpResponse::build(self.status_code()).json(error_response(&self.to_string()))
    }
}
