//! Habit entity - a named activity claimed once per civil day.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A habit belongs to exactly one user and carries a streak counter.
/// `streak` and `last_claimed_at` are only touched by the claim and reset
/// operations; `last_claimed_at` never moves backward across claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    /// Consecutive-day counter, never negative.
    pub streak: i64,
    /// None until the first successful claim.
    pub last_claimed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Habit {
    /// Create a new habit with an empty streak
    pub fn new(owner_id: Uuid, name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name,
            streak: 0,
            last_claimed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the habit has never been claimed
    pub fn never_claimed(&self) -> bool {
        self.last_claimed_at.is_none()
    }

    /// Check if the habit is owned by the given user
    pub fn is_owned_by(&self, owner_id: Uuid) -> bool {
        self.owner_id == owner_id
    }
}
