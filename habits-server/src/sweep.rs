//! Streak expiry sweep
//!
//! Walks every owner with a stored time zone and zeroes the streak of any
//! habit whose last claim is at least two civil days stale. Triggered from
//! the maintenance endpoint or the optional in-process scheduler.

use habits_core::{Clock, UserSettings, streak};
use habits_db::{HabitRepository, Result as DbErrorResult, UserSettingsRepository};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;
use tokio::sync::Semaphore;

/// Counters reported by a completed sweep run
#[derive(Debug, Default, Clone, Serialize)]
pub struct SweepSummary {
    /// Owners with stored settings that the sweep examined
    pub users: u64,
    /// Habits whose streak was written to zero
    pub reset: u64,
    /// Habits left untouched (never claimed or still inside the grace window)
    pub skipped: u64,
    /// Habits or owners that could not be processed
    pub failed: u64,
}

impl SweepSummary {
    fn merge(&mut self, other: &SweepSummary) {
        self.users += other.users;
        self.reset += other.reset;
        self.skipped += other.skipped;
        self.failed += other.failed;
    }
}

/// Batch streak-expiry runner.
///
/// Owners are processed concurrently under a semaphore; every spawned
/// task is awaited so a run's summary accounts for all of them.
pub struct ExpirySweep {
    pool: SqlitePool,
    clock: Arc<dyn Clock>,
    concurrency: usize,
}

impl ExpirySweep {
    pub fn new(pool: SqlitePool, clock: Arc<dyn Clock>, concurrency: usize) -> Self {
        Self {
            pool,
            clock,
            concurrency,
        }
    }

    /// Run one sweep over every owner with stored settings.
    ///
    /// Failing to enumerate the settings table aborts the run; any later
    /// failure is counted per owner or per habit and the run continues.
    pub async fn run(&self) -> DbErrorResult<SweepSummary> {
        // Every owner is evaluated against the same instant
        let now = self.clock.now();

        let settings_repo = UserSettingsRepository::new(self.pool.clone());
        let all_settings = settings_repo.find_all().await?;

        let semaphore = Arc::new(Semaphore::new(self.concurrency.max(1)));
        let mut handles = Vec::with_capacity(all_settings.len());

        for settings in all_settings {
            let sem = semaphore.clone();
            let pool = self.pool.clone();

            handles.push(tokio::spawn(async move {
                let _permit = match sem.acquire().await {
                    Ok(p) => p,
                    Err(_) => {
                        return SweepSummary {
                            users: 1,
                            failed: 1,
                            ..SweepSummary::default()
                        };
                    }
                };
                sweep_owner(&pool, settings, now).await
            }));
        }

        let mut summary = SweepSummary::default();
        for handle in handles {
            match handle.await {
                Ok(partial) => summary.merge(&partial),
                Err(e) => {
                    log::error!("Sweep task failed to complete: {}", e);
                    summary.failed += 1;
                }
            }
        }

        log::info!(
            "Expiry sweep complete: {} users, {} reset, {} skipped, {} failed",
            summary.users,
            summary.reset,
            summary.skipped,
            summary.failed
        );

        Ok(summary)
    }
}

/// Sweep one owner's habits; every enumerated habit lands in exactly one
/// of the reset/skipped/failed counters.
async fn sweep_owner(pool: &SqlitePool, settings: UserSettings, now: DateTime<Utc>) -> SweepSummary {
    let mut summary = SweepSummary {
        users: 1,
        ..SweepSummary::default()
    };

    let tz = match streak::parse_time_zone(&settings.time_zone) {
        Ok(tz) => tz,
        Err(e) => {
            log::error!("Skipping owner {}: {}", settings.owner_id, e);
            summary.failed += 1;
            return summary;
        }
    };

    let habits = match HabitRepository::find_by_owner(pool, settings.owner_id).await {
        Ok(habits) => habits,
        Err(e) => {
            log::error!(
                "Failed to load habits for owner {}: {}",
                settings.owner_id,
                e
            );
            summary.failed += 1;
            return summary;
        }
    };

    for habit in habits {
        if !streak::should_reset(habit.last_claimed_at, tz, now) {
            summary.skipped += 1;
            continue;
        }

        match HabitRepository::reset_streak(pool, habit.id, now).await {
            Ok(_) => {
                log::info!(
                    "Reset streak for habit {} (owner {})",
                    habit.id,
                    settings.owner_id
                );
                summary.reset += 1;
            }
            Err(e) => {
                log::error!("Failed to reset habit {}: {}", habit.id, e);
                summary.failed += 1;
            }
        }
    }

    summary
}
