use tracing::info;

use crate::errors::AppError;
use crate::repositories::UserStore;
use crate::structs::login::CredentialsRequest;
use crate::utils::helpers::require_field;

pub async fn register_user(
    store: &dyn UserStore,
    request: &CredentialsRequest,
) -> Result<(), AppError> {
    let username = require_field("username", &request.username)?;
    let email = require_field("email", &request.email)?;

    store
        .insert_user(username, email)
        .await
        .map_err(AppError::store("Failed to register user"))?;

    info!("Registered user '{}'", username);
    Ok(())
}

/// Succeeds only when exactly one row carries both the username and email.
pub async fn verify_login(
    store: &dyn UserStore,
    request: &CredentialsRequest,
) -> Result<(), AppError> {
    let username = require_field("username", &request.username)?;
    let email = require_field("email", &request.email)?;

    let matches = store
        .count_matching_users(username, email)
        .await
        .map_err(AppError::store("Failed to log in"))?;

    if matches != 1 {
        info!("Login rejected for '{}' ({} matching rows)", username, matches);
        return Err(AppError::InvalidCredentials);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryUserStore;

    fn credentials(username: &str, email: &str) -> CredentialsRequest {
        CredentialsRequest {
            username: username.to_string(),
            email: email.to_string(),
        }
    }

    #[actix_web::test]
    async fn duplicate_registrations_break_login() {
        let store = InMemoryUserStore::new();
        let request = credentials("ada", "ada@example.com");

        register_user(&store, &request).await.unwrap();
        assert!(verify_login(&store, &request).await.is_ok());

        register_user(&store, &request).await.unwrap();
        assert!(matches!(
            verify_login(&store, &request).await,
            Err(AppError::InvalidCredentials)
        ));
    }

    #[actix_web::test]
    async fn login_is_case_sensitive() {
        let store = InMemoryUserStore::new();
        register_user(&store, &credentials("ada", "ada@example.com"))
            .await
            .unwrap();

        let result = verify_login(&store, &credentials("Ada", "ada@example.com")).await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[actix_web::test]
    async fn blank_email_is_rejected_before_the_store() {
        let store = InMemoryUserStore::new();
        let result = register_user(&store, &credentials("ada", "")).await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
        assert!(store.records().is_empty());
    }
}
