use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::{error, info};

use crate::config::settings::DatabaseSettings;

/// Builds the shared pool. Connections are opened on first use.
pub fn connect_to_postgres(settings: &DatabaseSettings) -> PgPool {
    let options = PgConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .username(&settings.user)
        .password(&settings.password)
        .database(&settings.name);

    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy_with(options)
}

/// Acquires and releases one connection to report reachability at startup.
pub async fn check_connection(pool: &PgPool) {
    match pool.acquire().await {
        Ok(_conn) => info!("Connected to database"),
        Err(err) => error!("Error acquiring database connection: {}", err),
    }
}
