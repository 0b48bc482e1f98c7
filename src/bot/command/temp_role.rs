//! Temporary role slash commands.
//!
//! Thin wrappers that read options, call `TempRoleService` and render the reply text.
//! Authorization has already been checked by the dispatcher.

use serenity::all::{GuildId, ResolvedOption, UserId};

use crate::{
    bot::command::options,
    error::AppError,
    model::grant::{ActiveGrant, CreateGrantParams, GrantStats},
    service::{discord::DiscordAdapters, temp_role::TempRoleService},
    state::BotState,
    util::format::format_remaining,
};

/// Grants live in memory only.
const NOT_PERSISTED_NOTICE: &str =
    "Temporary roles are kept in memory and are forgotten if the bot restarts.";

/// Builds the service over the shared stores and the Discord adapters.
pub fn service<'a>(state: &'a BotState, adapters: &'a DiscordAdapters) -> TempRoleService<'a> {
    TempRoleService::new(
        &state.grants,
        &adapters.roles,
        &adapters.notifier,
        state.clock.as_ref(),
    )
}

/// `/temprole user role days [reason]`
pub async fn grant(
    service: &TempRoleService<'_>,
    guild_id: GuildId,
    invoker: UserId,
    options: &[ResolvedOption<'_>],
) -> Result<String, AppError> {
    let params = CreateGrantParams {
        guild_id,
        user_id: options::user(options, "user")?,
        role_id: options::role(options, "role")?,
        duration_days: options::integer(options, "days")?,
        granted_by: invoker,
        reason: options::optional_string(options, "reason"),
    };

    let grant = service.grant(params).await?;
    let expires = grant.expires_at.timestamp();

    Ok(format!(
        "Gave <@&{}> to <@{}> until <t:{}:F> (<t:{}:R>).",
        grant.role_id, grant.user_id, expires, expires
    ))
}

/// `/myroles`
pub async fn my_roles(service: &TempRoleService<'_>, guild_id: GuildId, invoker: UserId) -> String {
    let active = service.list_for_subject(guild_id, invoker).await;
    format_grant_list(&active)
}

/// `/roletime user role`
pub async fn role_time(
    service: &TempRoleService<'_>,
    guild_id: GuildId,
    options: &[ResolvedOption<'_>],
) -> Result<String, AppError> {
    let user_id = options::user(options, "user")?;
    let role_id = options::role(options, "role")?;

    let reply = match service.time_remaining(guild_id, user_id, role_id).await {
        Some(remaining) => format!(
            "<@{}> keeps <@&{}> for another {}.",
            user_id,
            role_id,
            format_remaining(remaining)
        ),
        None => format!("<@{}> has no active temporary grant of <@&{}>.", user_id, role_id),
    };

    Ok(reply)
}

/// `/removetemprole user role`
pub async fn remove(
    service: &TempRoleService<'_>,
    guild_id: GuildId,
    options: &[ResolvedOption<'_>],
) -> Result<String, AppError> {
    let user_id = options::user(options, "user")?;
    let role_id = options::role(options, "role")?;

    let reply = if service.remove(guild_id, user_id, role_id).await? {
        format!("Removed temporary role <@&{}> from <@{}>.", role_id, user_id)
    } else {
        format!("<@{}> has no temporary grant of <@&{}>.", user_id, role_id)
    };

    Ok(reply)
}

/// `/rolestats`
pub async fn stats(service: &TempRoleService<'_>, guild_id: GuildId) -> String {
    format_stats(&service.stats(guild_id).await)
}

/// Renders a member's active grants, one per line.
pub fn format_grant_list(active: &[ActiveGrant]) -> String {
    if active.is_empty() {
        return "You have no temporary roles.".to_string();
    }

    let lines: Vec<String> = active
        .iter()
        .map(|active| {
            format!(
                "- <@&{}> expires in {} (<t:{}:F>)",
                active.grant.role_id,
                format_remaining(active.remaining),
                active.grant.expires_at.timestamp()
            )
        })
        .collect();

    format!("Your temporary roles:\n{}", lines.join("\n"))
}

pub fn format_stats(stats: &GrantStats) -> String {
    format!(
        "**Temporary roles**\nTracked grants: {}\nActive: {}\nExpiring within 24h: {}\nMembers with grants: {}\n\n{}",
        stats.total_grants,
        stats.active_grants,
        stats.expiring_soon,
        stats.tracked_subjects,
        NOT_PERSISTED_NOTICE
    )
}
