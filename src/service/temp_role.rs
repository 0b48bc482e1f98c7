//! Temporary role command service.
//!
//! Backs the temp role slash commands. Authorization is checked by the bot layer before
//! any of these methods is called.

use chrono::Duration;
use serenity::all::{GuildId, RoleId, UserId};
use tokio::sync::RwLock;

use crate::{
    data::GrantStore,
    error::AppError,
    model::{
        grant::{ActiveGrant, CreateGrantParams, Grant, GrantStats},
        notification::DirectMessage,
    },
    service::{
        notifier::{notify_best_effort, Notifier},
        role_authority::RoleAuthority,
    },
    util::clock::Clock,
};

pub struct TempRoleService<'a> {
    grants: &'a RwLock<GrantStore>,
    authority: &'a dyn RoleAuthority,
    notifier: &'a dyn Notifier,
    clock: &'a dyn Clock,
}

impl<'a> TempRoleService<'a> {
    pub fn new(
        grants: &'a RwLock<GrantStore>,
        authority: &'a dyn RoleAuthority,
        notifier: &'a dyn Notifier,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            grants,
            authority,
            notifier,
            clock,
        }
    }

    /// Gives a member a role until the requested number of days has passed.
    ///
    /// The duration is validated before Discord is contacted. The grant is only stored
    /// once Discord has accepted the role assignment, so a failed assignment leaves no
    /// trace. Re-granting a tracked role replaces the previous grant.
    ///
    /// # Arguments
    /// - `params` - Target member and role, duration in days, actor and reason
    ///
    /// # Returns
    /// - `Ok(Grant)` - Role assigned and grant stored
    /// - `Err(AppError::ValidationErr)` - Duration outside 1..=365 days
    /// - `Err(AppError::NotFound)` - The member is not in the guild
    /// - `Err(AppError::ExternalErr)` - Discord rejected or did not answer the assignment
    pub async fn grant(&self, params: CreateGrantParams) -> Result<Grant, AppError> {
        params.validated_duration()?;

        let member = self
            .authority
            .fetch_member(params.guild_id, params.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("That member is not in this server.".to_string()))?;

        if !self.authority.member_has_role(&member, params.role_id) {
            self.authority.add_role(&member, params.role_id).await?;
        }

        let now = self.clock.now();
        let grant = self.grants.write().await.put(params, now)?;

        tracing::info!(
            "User {} granted role {} to user {} in guild {} until {}",
            grant.granted_by,
            grant.role_id,
            grant.user_id,
            grant.guild_id,
            grant.expires_at
        );

        notify_best_effort(
            self.notifier,
            grant.user_id,
            DirectMessage::role_granted(grant.role_id, grant.expires_at, &grant.reason),
        )
        .await;

        Ok(grant)
    }

    /// Active grants of a member, soonest expiry first.
    ///
    /// Expired grants waiting for the next sweep are left out.
    pub async fn list_for_subject(&self, guild_id: GuildId, user_id: UserId) -> Vec<ActiveGrant> {
        let now = self.clock.now();
        let mut active: Vec<ActiveGrant> = self
            .grants
            .read()
            .await
            .list_for_subject(guild_id, user_id)
            .into_iter()
            .filter_map(|grant| {
                grant
                    .remaining_at(now)
                    .map(|remaining| ActiveGrant { grant, remaining })
            })
            .collect();

        active.sort_by_key(|active| active.grant.expires_at);
        active
    }

    /// Time left on a member's temporary role.
    ///
    /// # Returns
    /// - `Some(Duration)` - The role is tracked and has not expired
    /// - `None` - No active grant for the member and role
    pub async fn time_remaining(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Option<Duration> {
        let now = self.clock.now();
        self.grants
            .read()
            .await
            .find(guild_id, user_id, role_id)
            .and_then(|grant| grant.remaining_at(now))
    }

    /// Removes a temporary role before it expires.
    ///
    /// The role is taken off the member first; a member who left or a deleted role is
    /// fine. If Discord fails for another reason the grant stays tracked so the sweep
    /// can still revoke it later.
    ///
    /// # Returns
    /// - `Ok(true)` - The grant was tracked and has been removed
    /// - `Ok(false)` - No grant was tracked for the member and role
    /// - `Err(AppError::ExternalErr)` - Discord did not confirm the removal
    pub async fn remove(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<bool, AppError> {
        if self
            .grants
            .read()
            .await
            .find(guild_id, user_id, role_id)
            .is_none()
        {
            return Ok(false);
        }

        let member = match self.authority.fetch_member(guild_id, user_id).await {
            Ok(member) => member,
            Err(e) if e.is_not_found() => None,
            Err(e) => return Err(e.into()),
        };

        if let Some(member) = member.as_ref() {
            if self.authority.member_has_role(member, role_id) {
                match self.authority.remove_role(member, role_id).await {
                    Ok(()) => {}
                    Err(e) if e.is_not_found() => {}
                    Err(e) => return Err(e.into()),
                }
            }
        }

        let removed = self
            .grants
            .write()
            .await
            .remove_one(guild_id, user_id, role_id);

        if removed {
            tracing::info!(
                "Removed temporary role {} from user {} in guild {}",
                role_id,
                user_id,
                guild_id
            );

            if member.is_some() {
                notify_best_effort(self.notifier, user_id, DirectMessage::role_removed(role_id))
                    .await;
            }
        }

        Ok(removed)
    }

    pub async fn stats(&self, guild_id: GuildId) -> GrantStats {
        let now = self.clock.now();
        self.grants.read().await.stats(guild_id, now)
    }
}
