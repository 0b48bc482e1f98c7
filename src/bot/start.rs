use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;
use std::sync::Arc;

use crate::{bot::handler::Handler, error::AppError, state::BotState};

/// Builds the Discord client without connecting to the gateway.
///
/// The client's HTTP handle is returned alongside it so the expiry scheduler can call
/// Discord without waiting for the gateway connection.
///
/// # Arguments
/// - `state` - Shared bot state handed to the event handler
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to start and its HTTP handle
/// - `Err(AppError::DiscordErr)` - The client could not be built
pub async fn init_bot(state: &BotState) -> Result<(Client, Arc<Http>), AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler::new(state.clone());

    let client = Client::builder(&state.config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Connects to the gateway and processes events until shutdown.
///
/// Fails if the token is rejected, which is the only fatal runtime error.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
