use serenity::all::{GuildId, RoleId, UserId};
use serenity::async_trait;
use serenity::http::Http;
use std::{sync::Arc, time::Duration};

use super::bounded;
use crate::{
    error::external::ExternalError, model::member::MemberSnapshot,
    service::role_authority::RoleAuthority,
};

/// Audit log reason attached to role changes made by the bot.
const AUDIT_LOG_REASON: &str = "Temporary role";

/// Role authority backed by the Discord REST API.
pub struct DiscordRoleAuthority {
    http: Arc<Http>,
    timeout: Duration,
}

impl DiscordRoleAuthority {
    pub fn new(http: Arc<Http>, timeout: Duration) -> Self {
        Self { http, timeout }
    }
}

#[async_trait]
impl RoleAuthority for DiscordRoleAuthority {
    async fn fetch_member(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Option<MemberSnapshot>, ExternalError> {
        let result = bounded(
            "fetch_member",
            "member",
            self.timeout,
            self.http.get_member(guild_id, user_id),
        )
        .await;

        match result {
            Ok(member) => Ok(Some(MemberSnapshot::from(&member))),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn add_role(
        &self,
        member: &MemberSnapshot,
        role_id: RoleId,
    ) -> Result<(), ExternalError> {
        bounded(
            "add_role",
            "role",
            self.timeout,
            self.http.add_member_role(
                member.guild_id,
                member.user_id,
                role_id,
                Some(AUDIT_LOG_REASON),
            ),
        )
        .await
    }

    async fn remove_role(
        &self,
        member: &MemberSnapshot,
        role_id: RoleId,
    ) -> Result<(), ExternalError> {
        bounded(
            "remove_role",
            "role",
            self.timeout,
            self.http.remove_member_role(
                member.guild_id,
                member.user_id,
                role_id,
                Some(AUDIT_LOG_REASON),
            ),
        )
        .await
    }
}
