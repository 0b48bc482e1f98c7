use serenity::all::UserId;
use serenity::async_trait;

use crate::{error::external::ExternalError, model::notification::DirectMessage};

/// Sends direct messages to members.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_direct_message(
        &self,
        user_id: UserId,
        message: DirectMessage,
    ) -> Result<(), ExternalError>;
}

/// Sends a direct message and discards the outcome.
///
/// Members may have DMs disabled, so delivery failure is only logged and never reaches
/// the caller.
pub async fn notify_best_effort(
    notifier: &dyn Notifier,
    user_id: UserId,
    message: DirectMessage,
) {
    if let Err(e) = notifier.send_direct_message(user_id, message).await {
        tracing::warn!("Failed to send direct message to user {}: {}", user_id, e);
    }
}
