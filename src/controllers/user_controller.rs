use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::repositories::UserStore;
use crate::services::user_service::{register_user, verify_login};
use crate::structs::api_response::success_response;
use crate::structs::login::CredentialsRequest;

pub async fn register(
    store: web::Data<dyn UserStore>,
    form: web::Json<CredentialsRequest>,
) -> Result<HttpResponse, AppError> {
    register_user(store.get_ref(), &form.into_inner()).await?;

    Ok(HttpResponse::Ok().json(success_response("User registered successfully")))
}

pub async fn login(
    store: web::Data<dyn UserStore>,
    form: web::Json<CredentialsRequest>,
) -> Result<HttpResponse, AppError> {
    verify_login(store.get_ref(), &form.into_inner()).await?;

    Ok(HttpResponse::Ok().json(success_response("Login successful")))
}
