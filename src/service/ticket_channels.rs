use serenity::all::ChannelId;
use serenity::async_trait;

use crate::{error::external::ExternalError, model::ticket::TicketChannelRequest};

/// Channel operations needed by the ticket workflow.
///
/// Channel naming, permission overwrites and the intro embed are the implementation's
/// concern; the workflow only decides when to call them.
#[async_trait]
pub trait TicketChannels: Send + Sync {
    /// Returns `false` if the channel has been deleted.
    async fn channel_exists(&self, channel_id: ChannelId) -> Result<bool, ExternalError>;

    /// Creates the private ticket channel for a requester.
    async fn create_ticket_channel(
        &self,
        request: &TicketChannelRequest,
    ) -> Result<ChannelId, ExternalError>;

    /// Posts the intro message with the close button into a new ticket channel.
    async fn post_ticket_intro(
        &self,
        channel_id: ChannelId,
        request: &TicketChannelRequest,
    ) -> Result<(), ExternalError>;

    /// Reads the channel topic, which holds the requester's user ID.
    async fn channel_topic(&self, channel_id: ChannelId) -> Result<Option<String>, ExternalError>;

    async fn delete_channel(&self, channel_id: ChannelId) -> Result<(), ExternalError>;
}
