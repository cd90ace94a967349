// src/main.rs

use std::{sync::Arc, time::Duration};

use dotenvy::dotenv;
use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use weekly_test::{
    config::Config,
    questions::FileQuestionSource,
    routes,
    state::{AdminAccount, AppState},
    store::{EnquiryStore, MemoryStore, PgStore, ResultStore},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file (if present)
    dotenv().ok();

    let config = Config::from_env()?;

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    let (results, enquiries): (Arc<dyn ResultStore>, Arc<dyn EnquiryStore>) =
        match &config.database_url {
            Some(url) => {
                let store = Arc::new(PgStore::new(connect_with_retry(url).await?));
                tracing::info!("Running migrations...");
                store.run_migrations().await?;
                tracing::info!("Migrations applied successfully.");
                let results: Arc<dyn ResultStore> = store.clone();
                let enquiries: Arc<dyn EnquiryStore> = store;
                (results, enquiries)
            }
            None => {
                tracing::warn!("DATABASE_URL not set; results are kept in memory only");
                let store = Arc::new(MemoryStore::new());
                let results: Arc<dyn ResultStore> = store.clone();
                let enquiries: Arc<dyn EnquiryStore> = store;
                (results, enquiries)
            }
        };

    let admin = match (&config.admin_username, &config.admin_password) {
        (Some(username), Some(password)) => {
            tracing::info!("Admin account configured: {}", username);
            Some(AdminAccount::new(username, password)?)
        }
        _ => {
            tracing::warn!("ADMIN_USERNAME/ADMIN_PASSWORD not set; admin routes are unreachable");
            None
        }
    };

    let questions = Arc::new(FileQuestionSource::new(&config.questions_path));
    tracing::info!(
        "Questions from {}, {}s per test",
        config.questions_path,
        config.test_duration_secs
    );

    let bind_address = config.bind_address.clone();
    let state = AppState::new(config, results, enquiries, questions, admin);
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Listening on {}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn connect_with_retry(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let mut retry_count = 0;
    loop {
        match PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(database_url)
            .await
        {
            Ok(pool) => {
                tracing::info!("Database connected...");
                return Ok(pool);
            }
            Err(e) => {
                retry_count += 1;
                if retry_count > 5 {
                    tracing::error!("Failed to connect to database after 5 retries");
                    return Err(e);
                }
                tracing::warn!("Database not ready, retrying in 2s... (Attempt {})", retry_count);
                tokio::time::sleep(Duration::from_secs(2)).await;
            }
        }
    }
}
