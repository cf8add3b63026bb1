use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::repositories::UserStore;
use crate::services::stats_service::{
    fetch_typing_test_status_data, fetch_user_data, fetch_voice_test_status_data,
};
use crate::structs::api_response::{
    TypingTestStatusResponse, UserDataResponse, VoiceTestStatusResponse,
};

pub async fn get_user_data(store: web::Data<dyn UserStore>) -> Result<HttpResponse, AppError> {
    let user_data = fetch_user_data(store.get_ref()).await?;

    Ok(HttpResponse::Ok().json(UserDataResponse {
        success: true,
        user_data,
    }))
}

pub async fn get_typing_test_status_data(
    store: web::Data<dyn UserStore>,
) -> Result<HttpResponse, AppError> {
    let typing_test_status_data = fetch_typing_test_status_data(store.get_ref()).await?;

    Ok(HttpResponse::Ok().json(TypingTestStatusResponse {
        success: true,
        typing_test_status_data,
    }))
}

pub async fn get_voice_test_status_data(
    store: web::Data<dyn UserStore>,
) -> Result<HttpResponse, AppError> {
    let voice_test_status_data = fetch_voice_test_status_data(store.get_ref()).await?;

    Ok(HttpResponse::Ok().json(VoiceTestStatusResponse {
        success: true,
        voice_test_status_data,
    }))
}
