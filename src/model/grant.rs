//! Temporary role grant models.
//!
//! A grant records that a member was given a role for a bounded number of days. Grants
//! are held only in memory by `data::grant::GrantStore` and are lost on restart.

use chrono::{DateTime, Duration, Utc};
use serenity::all::{GuildId, RoleId, UserId};

use crate::error::validation::ValidationError;

/// Shortest accepted grant duration in days.
pub const MIN_GRANT_DAYS: i64 = 1;
/// Longest accepted grant duration in days.
pub const MAX_GRANT_DAYS: i64 = 365;
/// Reason recorded when the granting actor does not supply one.
pub const DEFAULT_GRANT_REASON: &str = "No reason provided";
/// Fixed reporting window for the "expiring soon" statistic.
pub const EXPIRING_SOON_WINDOW_HOURS: i64 = 24;

/// One temporary role assignment with an expiry time.
///
/// At most one grant exists per `(guild_id, user_id, role_id)` triple. Grants are never
/// updated in place; granting the same role again replaces the previous grant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grant {
    /// Guild the role belongs to.
    pub guild_id: GuildId,
    /// Member holding the role.
    pub user_id: UserId,
    /// The granted role.
    pub role_id: RoleId,
    /// When the grant was created.
    pub granted_at: DateTime<Utc>,
    /// When the role must be revoked. Always later than `granted_at`.
    pub expires_at: DateTime<Utc>,
    /// Actor who issued the grant.
    pub granted_by: UserId,
    /// Free-text reason, `DEFAULT_GRANT_REASON` if none was supplied.
    pub reason: String,
}

impl Grant {
    /// Returns `true` once `now` has reached the expiry time.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Time left until expiry, or `None` if the grant has already expired.
    pub fn remaining_at(&self, now: DateTime<Utc>) -> Option<Duration> {
        if self.is_expired_at(now) {
            None
        } else {
            Some(self.expires_at - now)
        }
    }
}

/// Parameters for creating a new grant.
#[derive(Debug, Clone)]
pub struct CreateGrantParams {
    pub guild_id: GuildId,
    pub user_id: UserId,
    pub role_id: RoleId,
    /// Requested duration, must lie within `[MIN_GRANT_DAYS, MAX_GRANT_DAYS]`.
    pub duration_days: i64,
    pub granted_by: UserId,
    pub reason: Option<String>,
}

impl CreateGrantParams {
    /// Checks the requested duration against the accepted range.
    ///
    /// # Returns
    /// - `Ok(Duration)` - The grant duration
    /// - `Err(ValidationError::DurationOutOfRange)` - Duration below 1 or above 365 days
    pub fn validated_duration(&self) -> Result<Duration, ValidationError> {
        if !(MIN_GRANT_DAYS..=MAX_GRANT_DAYS).contains(&self.duration_days) {
            return Err(ValidationError::DurationOutOfRange {
                days: self.duration_days,
            });
        }

        Ok(Duration::days(self.duration_days))
    }

    /// Returns the supplied reason, or the default one if it is missing or blank.
    pub fn reason_or_default(&self) -> String {
        match self.reason.as_deref().map(str::trim) {
            Some(reason) if !reason.is_empty() => reason.to_string(),
            _ => DEFAULT_GRANT_REASON.to_string(),
        }
    }
}

/// Aggregate counts for one guild, shown by the stats command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GrantStats {
    /// Every tracked grant, including expired ones not yet swept.
    pub total_grants: usize,
    /// Grants whose expiry is still in the future.
    pub active_grants: usize,
    /// Active grants expiring within `EXPIRING_SOON_WINDOW_HOURS`.
    pub expiring_soon: usize,
    /// Members with at least one tracked grant.
    pub tracked_subjects: usize,
}

/// An active grant paired with the time left at the moment it was listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveGrant {
    pub grant: Grant,
    pub remaining: Duration,
}
