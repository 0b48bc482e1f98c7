//! Serenity-backed implementations of the service collaborator traits.
//!
//! Every Discord call goes through `bounded`, which applies the configured timeout and
//! classifies failures into `ExternalError`. A call that hangs therefore only delays the
//! grant or ticket it belongs to, and is retried like any other transient failure.

pub mod notifier;
pub mod role_authority;
pub mod ticket_channels;

pub use notifier::DiscordNotifier;
pub use role_authority::DiscordRoleAuthority;
pub use ticket_channels::DiscordTicketChannels;

use serenity::http::Http;
use std::{future::Future, sync::Arc, time::Duration};

use crate::{config::Config, error::external::ExternalError};

/// The three Serenity adapters, built together from one HTTP client.
pub struct DiscordAdapters {
    pub roles: DiscordRoleAuthority,
    pub notifier: DiscordNotifier,
    pub channels: DiscordTicketChannels,
}

impl DiscordAdapters {
    /// Builds the adapters with the configured call timeout and embed footer.
    ///
    /// # Arguments
    /// - `http` - Serenity HTTP client, shared with the gateway client
    /// - `config` - Bot configuration
    pub fn new(http: Arc<Http>, config: &Config) -> Self {
        let timeout = config.external_call_timeout;
        let footer = format!("{} Support", config.community_name);

        Self {
            roles: DiscordRoleAuthority::new(http.clone(), timeout),
            notifier: DiscordNotifier::new(http.clone(), timeout, footer.clone()),
            channels: DiscordTicketChannels::new(http, timeout, config.tickets.clone(), footer),
        }
    }
}

/// Awaits a Serenity call with a time limit.
///
/// # Arguments
/// - `operation` - Name reported if the call times out
/// - `what` - Resource kind reported if Discord says it does not exist
/// - `limit` - Maximum time to wait
/// - `call` - The Serenity future
///
/// # Returns
/// - `Ok(T)` - The call succeeded in time
/// - `Err(ExternalError::Timeout)` - The limit elapsed first
/// - `Err(ExternalError::NotFound | Transient)` - The call failed
pub(crate) async fn bounded<T, F>(
    operation: &'static str,
    what: &'static str,
    limit: Duration,
    call: F,
) -> Result<T, ExternalError>
where
    F: Future<Output = Result<T, serenity::Error>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(ExternalError::from_discord(&e, what)),
        Err(_) => Err(ExternalError::Timeout { operation }),
    }
}
