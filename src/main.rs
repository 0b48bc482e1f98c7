mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use std::sync::Arc;

use crate::{
    bot::start::{init_bot, start_bot},
    config::Config,
    error::AppError,
    scheduler::role_expiry,
    state::BotState,
    util::clock::SystemClock,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let state = BotState::new(config, Arc::new(SystemClock));

    tracing::info!("Starting {} bot", state.config.community_name);

    // Initialize Discord bot and extract HTTP client
    let (bot_client, discord_http) = init_bot(&state).await?;

    // Start role expiry scheduler
    role_expiry::start_scheduler(state.clone(), discord_http).await?;

    // Runs until the gateway connection ends; a rejected token ends the process
    if let Err(e) = start_bot(bot_client).await {
        tracing::error!("Discord bot error: {}", e);
        return Err(e);
    }

    Ok(())
}
