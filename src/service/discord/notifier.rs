use serenity::all::{CreateEmbed, CreateEmbedFooter, CreateMessage, Timestamp, UserId};
use serenity::async_trait;
use serenity::http::Http;
use std::{sync::Arc, time::Duration};

use super::bounded;
use crate::{
    error::external::ExternalError, model::notification::DirectMessage,
    service::notifier::Notifier,
};

/// Notifier that delivers direct messages as embeds through a DM channel.
pub struct DiscordNotifier {
    http: Arc<Http>,
    timeout: Duration,
    footer: String,
}

impl DiscordNotifier {
    /// # Arguments
    /// - `http` - Discord HTTP client
    /// - `timeout` - Bound for each Discord call
    /// - `footer` - Embed footer text, typically the community name
    pub fn new(http: Arc<Http>, timeout: Duration, footer: String) -> Self {
        Self {
            http,
            timeout,
            footer,
        }
    }
}

#[async_trait]
impl Notifier for DiscordNotifier {
    async fn send_direct_message(
        &self,
        user_id: UserId,
        message: DirectMessage,
    ) -> Result<(), ExternalError> {
        let dm_channel = bounded(
            "create_dm_channel",
            "user",
            self.timeout,
            user_id.create_dm_channel(&self.http),
        )
        .await?;

        let embed = CreateEmbed::new()
            .title(message.title)
            .description(message.description)
            .color(message.color)
            .timestamp(Timestamp::now())
            .footer(CreateEmbedFooter::new(&self.footer));

        bounded(
            "send_direct_message",
            "channel",
            self.timeout,
            dm_channel
                .id
                .send_message(&self.http, CreateMessage::new().embed(embed)),
        )
        .await?;

        Ok(())
    }
}
