//! Expiry store for temporary role grants.
//!
//! Grants are grouped first by guild, then by member, then keyed by role, which makes
//! the "one grant per (guild, member, role)" invariant structural. Empty member and
//! guild containers are removed as soon as their last grant goes.

use chrono::{DateTime, Duration, Utc};
use serenity::all::{GuildId, RoleId, UserId};
use std::collections::HashMap;

use crate::{
    error::validation::ValidationError,
    model::grant::{CreateGrantParams, Grant, GrantStats, EXPIRING_SOON_WINDOW_HOURS},
};

type SubjectGrants = HashMap<RoleId, Grant>;
type ScopeGrants = HashMap<UserId, SubjectGrants>;

/// In-memory mapping of temporary role grants to their expiry times.
#[derive(Debug, Default)]
pub struct GrantStore {
    scopes: HashMap<GuildId, ScopeGrants>,
}

impl GrantStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates and stores a grant starting at `now`.
    ///
    /// Replaces any existing grant for the same guild, member and role, so granting a
    /// role twice resets its expiry instead of tracking it twice.
    ///
    /// # Arguments
    /// - `params` - Grant target, duration in days, actor and optional reason
    /// - `now` - Grant creation time
    ///
    /// # Returns
    /// - `Ok(Grant)` - The stored grant
    /// - `Err(ValidationError::DurationOutOfRange)` - Duration outside 1..=365 days; the
    ///   store is left unchanged
    pub fn put(
        &mut self,
        params: CreateGrantParams,
        now: DateTime<Utc>,
    ) -> Result<Grant, ValidationError> {
        let duration = params.validated_duration()?;

        let grant = Grant {
            guild_id: params.guild_id,
            user_id: params.user_id,
            role_id: params.role_id,
            granted_at: now,
            expires_at: now + duration,
            granted_by: params.granted_by,
            reason: params.reason_or_default(),
        };

        self.scopes
            .entry(grant.guild_id)
            .or_default()
            .entry(grant.user_id)
            .or_default()
            .insert(grant.role_id, grant.clone());

        Ok(grant)
    }

    /// Removes the grant for a specific guild, member and role.
    ///
    /// # Returns
    /// - `true` - A grant existed and was removed
    /// - `false` - No grant was tracked for the triple
    pub fn remove_one(&mut self, guild_id: GuildId, user_id: UserId, role_id: RoleId) -> bool {
        self.remove_where(guild_id, user_id, role_id, |_| true)
    }

    /// Removes a swept grant only if the store still holds that exact grant.
    ///
    /// The sweep revokes roles without holding the store lock. If an administrator
    /// re-grants the same role meanwhile, the new grant has a different expiry and must
    /// survive the sweep's cleanup.
    ///
    /// # Returns
    /// - `true` - The grant was still tracked unchanged and has been removed
    /// - `false` - The grant is gone or was replaced
    pub fn remove_if_unchanged(&mut self, grant: &Grant) -> bool {
        self.remove_where(grant.guild_id, grant.user_id, grant.role_id, |stored| {
            same_issue(stored, grant)
        })
    }

    /// Whether the store still tracks exactly this grant, not a replacement or nothing.
    pub fn is_current(&self, grant: &Grant) -> bool {
        self.find(grant.guild_id, grant.user_id, grant.role_id)
            .is_some_and(|stored| same_issue(stored, grant))
    }

    /// Looks up the grant for a specific guild, member and role.
    pub fn find(&self, guild_id: GuildId, user_id: UserId, role_id: RoleId) -> Option<&Grant> {
        self.scopes
            .get(&guild_id)
            .and_then(|subjects| subjects.get(&user_id))
            .and_then(|grants| grants.get(&role_id))
    }

    /// Snapshot of every grant held by a member in a guild, in no particular order.
    pub fn list_for_subject(&self, guild_id: GuildId, user_id: UserId) -> Vec<Grant> {
        self.scopes
            .get(&guild_id)
            .and_then(|subjects| subjects.get(&user_id))
            .map(|grants| grants.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Every grant across all guilds whose expiry is at or before `as_of`.
    pub fn list_expired_as_of(&self, as_of: DateTime<Utc>) -> Vec<Grant> {
        self.grants()
            .filter(|grant| grant.is_expired_at(as_of))
            .cloned()
            .collect()
    }

    /// Aggregate counts for a guild at `now`.
    ///
    /// A grant is active while its expiry lies in the future. The expiring-soon count
    /// uses a fixed window of `EXPIRING_SOON_WINDOW_HOURS`.
    pub fn stats(&self, guild_id: GuildId, now: DateTime<Utc>) -> GrantStats {
        let Some(subjects) = self.scopes.get(&guild_id) else {
            return GrantStats::default();
        };

        let window_end = now + Duration::hours(EXPIRING_SOON_WINDOW_HOURS);
        let mut stats = GrantStats {
            tracked_subjects: subjects.len(),
            ..GrantStats::default()
        };

        for grant in subjects.values().flat_map(HashMap::values) {
            stats.total_grants += 1;
            if !grant.is_expired_at(now) {
                stats.active_grants += 1;
                if grant.expires_at <= window_end {
                    stats.expiring_soon += 1;
                }
            }
        }

        stats
    }

    /// Total number of tracked grants across all guilds.
    pub fn len(&self) -> usize {
        self.grants().count()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    fn grants(&self) -> impl Iterator<Item = &Grant> {
        self.scopes
            .values()
            .flat_map(HashMap::values)
            .flat_map(HashMap::values)
    }

    fn remove_where(
        &mut self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
        matches: impl FnOnce(&Grant) -> bool,
    ) -> bool {
        let Some(subjects) = self.scopes.get_mut(&guild_id) else {
            return false;
        };
        let Some(grants) = subjects.get_mut(&user_id) else {
            return false;
        };
        if !grants.get(&role_id).is_some_and(matches) {
            return false;
        }

        grants.remove(&role_id);
        if grants.is_empty() {
            subjects.remove(&user_id);
        }
        if subjects.is_empty() {
            self.scopes.remove(&guild_id);
        }

        true
    }
}

fn same_issue(stored: &Grant, grant: &Grant) -> bool {
    stored.granted_at == grant.granted_at && stored.expires_at == grant.expires_at
}
