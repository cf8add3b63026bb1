use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};

use crate::config::settings::UploadSettings;
use crate::errors::AppError;
use crate::repositories::UserStore;
use crate::services::test_service::{submit_typing_test, submit_voice_test};
use crate::structs::api_response::success_response;
use crate::structs::typing_test::TypingTestRequest;
use crate::utils::uploads::read_voice_test_form;

pub async fn typing_test(
    store: web::Data<dyn UserStore>,
    form: web::Json<TypingTestRequest>,
) -> Result<HttpResponse, AppError> {
    submit_typing_test(store.get_ref(), &form.into_inner()).await?;

    Ok(HttpResponse::Ok().json(success_response(
        "Typing test score submitted successfully",
    )))
}

pub async fn voice_test(
    store: web::Data<dyn UserStore>,
    uploads: web::Data<UploadSettings>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let form = read_voice_test_form(payload, uploads.max_bytes).await?;
    submit_voice_test(store.get_ref(), uploads.get_ref(), form).await?;

    Ok(HttpResponse::Ok().json(success_response("Voice test submitted successfully")))
}
