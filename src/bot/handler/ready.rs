//! Ready event handler for bot initialization.
//!
//! Fires once per gateway connection after authentication. The handler:
//! - Logs connection information and sets the bot's activity
//! - Registers the global slash commands
//! - Posts the ticket panels to their configured channels, on the first ready only
//!
//! Failures here are logged and never stop the bot; the sweep and existing commands
//! keep working without a fresh panel or command registration.

use serenity::all::{ActivityData, Context, Ready};

use crate::{
    bot::{command, component::ticket},
    state::BotState,
};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Shared bot state, for the panel channel configuration
/// - `ctx` - Discord context for setting activity and calling the API
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::watching(format!(
        "over {}",
        state.config.community_name
    ))));

    if let Err(e) = command::register_commands(&ctx).await {
        tracing::error!("Failed to register slash commands: {}", e);
    }

    ticket::post_panels(state, &ctx).await;
}
