pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;
pub mod sweep;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::owner_id::OwnerId,
    habits::{
        create_habit_request::CreateHabitRequest,
        habit_dto::HabitDto,
        habit_list_response::HabitListResponse,
        habit_response::HabitResponse,
        habits::{claim_habit, create_habit, delete_habit, get_habit, list_habits},
    },
    settings::{
        save_settings_request::SaveSettingsRequest,
        settings::{get_settings, save_settings},
        settings_dto::SettingsDto,
        settings_response::SettingsResponse,
    },
    tasks::tasks::run_expiry_sweep,
};

pub use crate::routes::build_router;

use crate::state::AppState;
use crate::sweep::ExpirySweep;

use habits_core::{Clock, SystemClock};

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = habits_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    let log_file = logger::log_file_path(&config)?;
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    info!("Starting habits-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../crates/habits-db/migrations")
        .run(&pool)
        .await?;
    info!("Migrations complete");

    // Build application state
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let app_state = AppState {
        pool: pool.clone(),
        clock: clock.clone(),
        sweep: config.sweep.clone(),
    };

    // Scheduled sweeps (interval 0 = an external cron drives the endpoint)
    if config.sweep.interval_hours > 0 {
        let interval = std::time::Duration::from_secs(config.sweep.interval_hours * 3600);
        let sweep = ExpirySweep::new(pool.clone(), clock.clone(), config.sweep.concurrency);

        info!(
            "Expiry sweep scheduler enabled: every {}h",
            config.sweep.interval_hours
        );

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick completes immediately; skip it so the sweep
            // starts one full interval after boot
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if let Err(e) = sweep.run().await {
                    error!("Scheduled expiry sweep failed: {}", e);
                }
            }
        });
    }

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
