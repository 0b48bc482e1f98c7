//! Guild event handler rebuilding the ticket registry.
//!
//! The ticket registry lives in memory only. When the guild hosting the ticket
//! categories becomes available, which happens on every startup and reconnect, its
//! channels are scanned and the registry is rebuilt from the ticket channels found
//! there. Guilds without the configured categories are ignored so that a second guild
//! cannot wipe the registry.

use std::collections::HashMap;

use serenity::all::{ChannelId, Context, Guild, GuildChannel};

use crate::{
    config::TicketConfig,
    service::{discord::DiscordAdapters, ticket::TicketService},
    state::BotState,
};

/// Handles the guild_create event when a guild becomes available or the bot joins a new guild.
///
/// # Arguments
/// - `state` - Shared bot state holding the ticket registry
/// - `ctx` - Discord context
/// - `guild` - Guild data from Discord including its channels
/// - `_is_new` - Whether this is a new guild join (unused, required by event handler signature)
pub async fn handle_guild_create(
    state: &BotState,
    ctx: Context,
    guild: Guild,
    _is_new: Option<bool>,
) {
    tracing::debug!(
        "Guild create event: {} ({}) - channels: {}",
        guild.name,
        guild.id,
        guild.channels.len()
    );

    if !hosts_ticket_categories(&state.config.tickets, &guild.channels) {
        return;
    }

    let adapters = DiscordAdapters::new(ctx.http.clone(), &state.config);
    let tickets = TicketService::new(&state.tickets, &adapters.channels, &adapters.notifier);

    let count = tickets
        .rebuild_from_channels(&state.config.tickets, guild.channels.values())
        .await;

    tracing::info!(
        "Rebuilt ticket registry for guild {} with {} open tickets",
        guild.id,
        count
    );
}

/// Returns `true` if either configured ticket category is among the guild's channels.
pub fn hosts_ticket_categories(
    config: &TicketConfig,
    channels: &HashMap<ChannelId, GuildChannel>,
) -> bool {
    channels.contains_key(&config.application_category_id)
        || channels.contains_key(&config.help_category_id)
}
