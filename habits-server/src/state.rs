use habits_config::SweepConfig;
use habits_core::Clock;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler.
///
/// The clock is injected here so request handling and the expiry sweep
/// agree on the time source, and tests can pin it.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub clock: Arc<dyn Clock>,
    pub sweep: SweepConfig,
}
