use serenity::all::{
    ButtonStyle, ChannelId, ChannelType, CreateActionRow, CreateButton, CreateChannel,
    CreateEmbed, CreateEmbedFooter, CreateMessage, PermissionOverwrite, PermissionOverwriteType,
    Permissions, RoleId, Timestamp,
};
use serenity::async_trait;
use serenity::http::Http;
use std::{sync::Arc, time::Duration};

use super::bounded;
use crate::{
    config::TicketConfig,
    error::external::ExternalError,
    model::ticket::{TicketChannelRequest, CLOSE_TICKET_CUSTOM_ID},
    service::ticket_channels::TicketChannels,
};

/// Embed colour of the ticket intro message.
const TICKET_EMBED_COLOR: u32 = 0x0099ff;

/// Ticket channels created as private text channels under the configured categories.
pub struct DiscordTicketChannels {
    http: Arc<Http>,
    timeout: Duration,
    config: TicketConfig,
    footer: String,
}

impl DiscordTicketChannels {
    pub fn new(http: Arc<Http>, timeout: Duration, config: TicketConfig, footer: String) -> Self {
        Self {
            http,
            timeout,
            config,
            footer,
        }
    }

    /// Hides the channel from everyone except the requester and ticket staff.
    fn permission_overwrites(&self, request: &TicketChannelRequest) -> Vec<PermissionOverwrite> {
        let participant = Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES;

        vec![
            PermissionOverwrite {
                allow: Permissions::empty(),
                deny: Permissions::VIEW_CHANNEL,
                kind: PermissionOverwriteType::Role(RoleId::new(request.guild_id.get())),
            },
            PermissionOverwrite {
                allow: participant,
                deny: Permissions::empty(),
                kind: PermissionOverwriteType::Member(request.user_id),
            },
            PermissionOverwrite {
                allow: participant,
                deny: Permissions::empty(),
                kind: PermissionOverwriteType::Role(self.config.staff_role_id),
            },
        ]
    }
}

#[async_trait]
impl TicketChannels for DiscordTicketChannels {
    async fn channel_exists(&self, channel_id: ChannelId) -> Result<bool, ExternalError> {
        match bounded(
            "get_channel",
            "channel",
            self.timeout,
            self.http.get_channel(channel_id),
        )
        .await
        {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn create_ticket_channel(
        &self,
        request: &TicketChannelRequest,
    ) -> Result<ChannelId, ExternalError> {
        let builder = CreateChannel::new(request.channel_name())
            .kind(ChannelType::Text)
            .category(self.config.category_for(request.kind))
            .topic(request.user_id.to_string())
            .permissions(self.permission_overwrites(request));

        let channel = bounded(
            "create_channel",
            "category",
            self.timeout,
            request.guild_id.create_channel(&self.http, builder),
        )
        .await?;

        Ok(channel.id)
    }

    async fn post_ticket_intro(
        &self,
        channel_id: ChannelId,
        request: &TicketChannelRequest,
    ) -> Result<(), ExternalError> {
        let embed = CreateEmbed::new()
            .title(request.kind.ticket_title(&request.username))
            .description(request.kind.ticket_description())
            .color(TICKET_EMBED_COLOR)
            .timestamp(Timestamp::now())
            .footer(CreateEmbedFooter::new(&self.footer));

        let close_button = CreateButton::new(CLOSE_TICKET_CUSTOM_ID)
            .label("Close Ticket")
            .style(ButtonStyle::Danger);

        let message = CreateMessage::new()
            .content(format!(
                "<@{}> <@&{}>",
                request.user_id, self.config.staff_role_id
            ))
            .embed(embed)
            .components(vec![CreateActionRow::Buttons(vec![close_button])]);

        bounded(
            "send_message",
            "channel",
            self.timeout,
            channel_id.send_message(&self.http, message),
        )
        .await?;

        Ok(())
    }

    async fn channel_topic(&self, channel_id: ChannelId) -> Result<Option<String>, ExternalError> {
        let channel = bounded(
            "get_channel",
            "channel",
            self.timeout,
            self.http.get_channel(channel_id),
        )
        .await?;

        Ok(channel.guild().and_then(|channel| channel.topic))
    }

    async fn delete_channel(&self, channel_id: ChannelId) -> Result<(), ExternalError> {
        bounded(
            "delete_channel",
            "channel",
            self.timeout,
            channel_id.delete(&self.http),
        )
        .await?;

        Ok(())
    }
}
