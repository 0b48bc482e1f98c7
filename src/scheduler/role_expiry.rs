use serenity::http::Http;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    service::{
        discord::DiscordAdapters,
        reconciler::{RoleReconciler, SweepReport},
    },
    state::BotState,
};

/// Starts the temporary role expiry scheduler
///
/// Runs a sweep every `ROLE_SWEEP_INTERVAL_SECS`. A tick that fires while the previous
/// sweep is still running is skipped, so two sweeps never work on the same grants.
///
/// # Arguments
/// - `state`: Shared bot state holding the grant store
/// - `discord_http`: Discord HTTP client for role removal and direct messages
pub async fn start_scheduler(state: BotState, discord_http: Arc<Http>) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;
    let interval = state.config.role_sweep_interval;

    let running = Arc::new(Mutex::new(()));

    let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let state = state.clone();
        let http = discord_http.clone();
        let running = running.clone();

        Box::pin(async move {
            let Ok(_guard) = running.try_lock() else {
                tracing::warn!("Previous role expiry sweep still running, skipping tick");
                return;
            };

            run_sweep(&state, http).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Role expiry scheduler started (every {}s)",
        interval.as_secs()
    );

    Ok(())
}

/// Runs one expiry sweep against Discord.
async fn run_sweep(state: &BotState, discord_http: Arc<Http>) -> SweepReport {
    let adapters = DiscordAdapters::new(discord_http, &state.config);
    let reconciler = RoleReconciler::new(
        &state.grants,
        &adapters.roles,
        &adapters.notifier,
        state.clock.as_ref(),
    );

    let report = reconciler.sweep().await;

    if report.retained > 0 {
        tracing::warn!(
            "{} expired temporary roles could not be revoked and will be retried",
            report.retained
        );
    }

    report
}
