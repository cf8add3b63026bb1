use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use assessment_backend::config::cors::configure_cors;
use assessment_backend::config::database::{check_connection, connect_to_postgres};
use assessment_backend::config::routes::configure_routes;
use assessment_backend::config::settings::Settings;
use assessment_backend::repositories::{PgUserStore, UserStore};
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_env().map_err(|err| {
        error!("Invalid configuration: {}", err);
        std::io::Error::other(err)
    })?;

    std::fs::create_dir_all(&settings.upload.dir)?;

    let pool = connect_to_postgres(&settings.database);
    check_connection(&pool).await;

    let store: Arc<dyn UserStore> = Arc::new(PgUserStore::new(pool.clone()));
    let store = web::Data::from(store);
    let uploads = web::Data::new(settings.upload.clone());
    let cors_origin = settings.cors_allowed_origin.clone();
    let address = settings.server_address();

    info!("Server is running on http://{}", address);

    HttpServer::new(move || {
        App::new()
            .wrap(configure_cors(cors_origin.as_deref()))
            .wrap(Logger::default())
            .app_data(store.clone())
            .app_data(uploads.clone())
            .configure(configure_routes)
    })
    .bind(address)?
    .run()
    .await?;

    info!("Server stopped, closing database pool");
    pool.close().await;

    Ok(())
}
