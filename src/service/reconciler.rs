//! Temporary role expiry reconciliation.
//!
//! Turns "a grant has expired" into "Discord no longer shows the role and the store
//! agrees". Members can drift out of band (role removed by hand, role deleted, member
//! left), so every expired grant is checked against the live member before revoking.
//!
//! Grants are processed independently: a failure on one never stops the others. A grant
//! whose revocation could not be confirmed stays in the store and is retried on the next
//! sweep.

use tokio::sync::RwLock;

use crate::{
    data::GrantStore,
    error::external::ExternalError,
    model::{grant::Grant, notification::DirectMessage},
    service::{
        notifier::{notify_best_effort, Notifier},
        role_authority::RoleAuthority,
    },
    util::clock::Clock,
};

/// How an expired grant was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Revocation {
    /// The role was removed from the member.
    Revoked,
    /// The member no longer held the role.
    RoleAlreadyAbsent,
    /// The member left the guild.
    MemberGone,
    /// Discord reported the member or role as deleted during removal.
    RoleGone,
    /// The grant was re-issued or removed while the sweep was running.
    Superseded,
}

/// Counts for one sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Roles actually removed from members.
    pub revoked: usize,
    /// Grants cleaned up without a removal because the role, member or assignment was gone.
    pub already_gone: usize,
    /// Grants kept for retry after an unconfirmed revocation.
    pub retained: usize,
    /// Grants left alone because an administrator changed them mid-sweep.
    pub superseded: usize,
}

impl SweepReport {
    /// Number of grants examined.
    pub fn processed(&self) -> usize {
        self.revoked + self.already_gone + self.retained + self.superseded
    }

    fn record(&mut self, revocation: Revocation) {
        match revocation {
            Revocation::Revoked => self.revoked += 1,
            Revocation::RoleAlreadyAbsent | Revocation::MemberGone | Revocation::RoleGone => {
                self.already_gone += 1
            }
            Revocation::Superseded => self.superseded += 1,
        }
    }
}

pub struct RoleReconciler<'a> {
    grants: &'a RwLock<GrantStore>,
    authority: &'a dyn RoleAuthority,
    notifier: &'a dyn Notifier,
    clock: &'a dyn Clock,
}

impl<'a> RoleReconciler<'a> {
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

    /// Runs one sweep over every grant expired as of now.
    ///
    /// For each expired grant, in isolation:
    /// 1. Resolve the live member; a member who left needs no revocation
    /// 2. If the member still holds the role and the store still tracks this exact
    ///    grant, remove it; a "not found" answer counts as removed, any other failure
    ///    keeps the grant for the next sweep
    /// 3. Remove the grant from the store
    /// 4. Tell the member by direct message, ignoring delivery failures
    ///
    /// A grant re-issued while Discord was being called wins: its role is put back if
    /// the sweep already took it, and no expiry message is sent.
    ///
    /// Never fails; problems are logged and reflected in the report. Running it again
    /// without new grants finds nothing to do.
    ///
    /// # Returns
    /// - `SweepReport` - How the expired grants were resolved
    pub async fn sweep(&self) -> SweepReport {
        let now = self.clock.now();
        let mut report = SweepReport::default();

        let expired = {
            let grants = self.grants.read().await;
            if grants.is_empty() {
                return report;
            }
            grants.list_expired_as_of(now)
        };

        for grant in expired {
            match self.revoke(&grant).await {
                Ok(revocation) => {
                    let removed = self.grants.write().await.remove_if_unchanged(&grant);
                    if !removed {
                        if revocation == Revocation::Revoked {
                            self.restore(&grant).await;
                        }
                        report.record(Revocation::Superseded);

                        tracing::info!(
                            "Temporary role {} for user {} in guild {} changed during the sweep, keeping the current grant",
                            grant.role_id,
                            grant.user_id,
                            grant.guild_id
                        );
                        continue;
                    }
                    report.record(revocation);

                    tracing::info!(
                        "Temporary role {} expired for user {} in guild {} ({:?})",
                        grant.role_id,
                        grant.user_id,
                        grant.guild_id,
                        revocation
                    );

                    notify_best_effort(
                        self.notifier,
                        grant.user_id,
                        DirectMessage::role_expired(grant.role_id),
                    )
                    .await;
                }
                Err(e) => {
                    report.retained += 1;
                    tracing::warn!(
                        "Could not revoke temporary role {} from user {} in guild {}, retrying next sweep: {}",
                        grant.role_id,
                        grant.user_id,
                        grant.guild_id,
                        e
                    );
                }
            }
        }

        if report.processed() > 0 {
            tracing::debug!(
                "Role expiry sweep finished: {:?}, {} grants still tracked",
                report,
                self.grants.read().await.len()
            );
        }

        report
    }

    /// Makes sure the member no longer holds the grant's role.
    ///
    /// # Returns
    /// - `Ok(Revocation)` - The role is confirmed gone from the member
    /// - `Err(ExternalError)` - Revocation could not be confirmed
    async fn revoke(&self, grant: &Grant) -> Result<Revocation, ExternalError> {
        let member = match self
            .authority
            .fetch_member(grant.guild_id, grant.user_id)
            .await
        {
            Ok(Some(member)) => member,
            Ok(None) => return Ok(Revocation::MemberGone),
            Err(e) if e.is_not_found() => return Ok(Revocation::MemberGone),
            Err(e) => return Err(e),
        };

        if !self.authority.member_has_role(&member, grant.role_id) {
            return Ok(Revocation::RoleAlreadyAbsent);
        }

        if !self.grants.read().await.is_current(grant) {
            return Ok(Revocation::Superseded);
        }

        match self.authority.remove_role(&member, grant.role_id).await {
            Ok(()) => Ok(Revocation::Revoked),
            Err(e) if e.is_not_found() => Ok(Revocation::RoleGone),
            Err(e) => Err(e),
        }
    }

    /// Gives the role back after a revocation raced with a re-grant.
    ///
    /// Only applies while the store tracks a grant for the triple; a grant removed early
    /// by an administrator stays revoked.
    async fn restore(&self, grant: &Grant) {
        let tracked = self
            .grants
            .read()
            .await
            .find(grant.guild_id, grant.user_id, grant.role_id)
            .is_some();
        if !tracked {
            return;
        }

        let result = match self
            .authority
            .fetch_member(grant.guild_id, grant.user_id)
            .await
        {
            Ok(Some(member)) if !self.authority.member_has_role(&member, grant.role_id) => {
                self.authority.add_role(&member, grant.role_id).await
            }
            Ok(_) => Ok(()),
            Err(e) => Err(e),
        };

        if let Err(e) = result {
            tracing::warn!(
                "Could not restore re-granted role {} to user {} in guild {}: {}",
                grant.role_id,
                grant.user_id,
                grant.guild_id,
                e
            );
        }
    }
}
