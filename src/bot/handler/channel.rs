//! Channel event handler keeping the ticket registry in line with Discord.

use serenity::all::{Context, GuildChannel, Message};

use crate::{
    service::{discord::DiscordAdapters, ticket::TicketService},
    state::BotState,
};

/// Handles the channel_delete event when a channel is deleted from a guild.
///
/// Evicts the ticket held in the channel, if any, so its owner can open a new one
/// straight away. Channels deleted by the close button are already evicted, in which
/// case this does nothing.
///
/// # Arguments
/// - `state` - Shared bot state holding the ticket registry
/// - `ctx` - Discord context
/// - `channel` - The deleted guild channel from Discord
/// - `_messages` - Messages that were in the channel if available (unused)
pub async fn handle_channel_delete(
    state: &BotState,
    ctx: Context,
    channel: GuildChannel,
    _messages: Option<Vec<Message>>,
) {
    let adapters = DiscordAdapters::new(ctx.http.clone(), &state.config);
    let tickets = TicketService::new(&state.tickets, &adapters.channels, &adapters.notifier);

    if let Some(owner) = tickets.evict_channel(channel.id).await {
        tracing::info!(
            "Ticket channel {} of user {} deleted in guild {}",
            channel.id,
            owner,
            channel.guild_id
        );
    }
}
