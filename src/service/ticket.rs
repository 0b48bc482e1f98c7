//! Support ticket workflow.
//!
//! Enforces one open ticket per requester on top of `TicketRegistry`. Entries whose
//! channel was deleted behind the bot's back are evicted lazily, the next time the
//! requester asks for a ticket.

use serenity::all::{ChannelId, GuildChannel, UserId};
use tokio::sync::RwLock;

use crate::{
    config::TicketConfig,
    data::{ticket::Reservation, TicketRegistry},
    error::AppError,
    model::{
        notification::DirectMessage,
        ticket::{TicketChannelRequest, TicketOutcome},
    },
    service::{
        notifier::{notify_best_effort, Notifier},
        ticket_channels::TicketChannels,
    },
    util::parse::parse_snowflake,
};

pub struct TicketService<'a> {
    tickets: &'a RwLock<TicketRegistry>,
    channels: &'a dyn TicketChannels,
    notifier: &'a dyn Notifier,
}

impl<'a> TicketService<'a> {
    pub fn new(
        tickets: &'a RwLock<TicketRegistry>,
        channels: &'a dyn TicketChannels,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            tickets,
            channels,
            notifier,
        }
    }

    /// Opens a ticket for a requester unless one is already open.
    ///
    /// A recorded channel is checked against Discord first and evicted if it no longer
    /// exists. The requester's slot is then reserved before the channel is created, so
    /// two clicks racing each other cannot both create a channel. The reservation is
    /// released if creation fails.
    ///
    /// # Returns
    /// - `Ok(TicketOutcome::Created)` - New channel created and recorded
    /// - `Ok(TicketOutcome::AlreadyOpen)` - The requester's existing ticket is still live
    /// - `Ok(TicketOutcome::CreationInProgress)` - Another request is creating the channel
    /// - `Err(AppError::ExternalErr)` - Discord failed while checking or creating
    pub async fn open_ticket(
        &self,
        request: &TicketChannelRequest,
    ) -> Result<TicketOutcome, AppError> {
        let user_id = request.user_id;

        let existing = self.tickets.read().await.lookup(user_id);
        if let Some(channel_id) = existing {
            if self.channels.channel_exists(channel_id).await? {
                return Ok(TicketOutcome::AlreadyOpen(channel_id));
            }

            tracing::debug!(
                "Evicting stale ticket channel {} for user {}",
                channel_id,
                user_id
            );
            self.tickets.write().await.close_by_channel(channel_id);
        }

        match self.tickets.write().await.reserve(user_id) {
            Reservation::Reserved => {}
            Reservation::AlreadyOpen(channel_id) => {
                return Ok(TicketOutcome::AlreadyOpen(channel_id))
            }
            Reservation::Pending => return Ok(TicketOutcome::CreationInProgress),
        }

        let channel_id = match self.channels.create_ticket_channel(request).await {
            Ok(channel_id) => channel_id,
            Err(e) => {
                self.tickets.write().await.release(user_id);
                return Err(e.into());
            }
        };

        self.tickets.write().await.open(user_id, channel_id);

        tracing::info!(
            "Opened {:?} ticket {} for user {} in guild {}",
            request.kind,
            channel_id,
            user_id,
            request.guild_id
        );

        if let Err(e) = self.channels.post_ticket_intro(channel_id, request).await {
            tracing::warn!(
                "Failed to post intro message in ticket {}: {}",
                channel_id,
                e
            );
        }

        Ok(TicketOutcome::Created(channel_id))
    }

    /// Closes the ticket held in `channel_id`.
    ///
    /// The owner is resolved from the registry, falling back to the channel topic for
    /// tickets opened before a restart. The owner is told by direct message, the channel
    /// is deleted and the registry entry removed. Staff authorization is checked by the
    /// caller.
    ///
    /// # Returns
    /// - `Ok(Some(UserId))` - Ticket closed, owner known
    /// - `Ok(None)` - Channel deleted but no owner could be resolved
    /// - `Err(AppError::ExternalErr)` - Discord failed to delete the channel
    pub async fn close_ticket(
        &self,
        channel_id: ChannelId,
        closed_by: UserId,
    ) -> Result<Option<UserId>, AppError> {
        let recorded = self.tickets.read().await.subject_for_channel(channel_id);
        let owner = match recorded {
            Some(user_id) => Some(user_id),
            None => self.owner_from_topic(channel_id).await,
        };

        if let Some(owner) = owner {
            let message = DirectMessage::ticket_closed(closed_by);
            notify_best_effort(self.notifier, owner, message).await;
        }

        match self.channels.delete_channel(channel_id).await {
            Ok(()) => {}
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e.into()),
        }

        self.evict_channel(channel_id).await;

        tracing::info!(
            "User {} closed ticket {} (owner: {:?})",
            closed_by,
            channel_id,
            owner
        );

        Ok(owner)
    }

    /// Forgets a ticket whose channel was deleted.
    pub async fn evict_channel(&self, channel_id: ChannelId) -> Option<UserId> {
        self.tickets.write().await.close_by_channel(channel_id)
    }

    /// Replaces the registry with tickets found by scanning a guild's channels.
    ///
    /// # Returns
    /// - `usize` - Number of tickets recorded
    pub async fn rebuild_from_channels<'c>(
        &self,
        config: &TicketConfig,
        channels: impl IntoIterator<Item = &'c GuildChannel>,
    ) -> usize {
        let entries = scan_ticket_channels(config, channels);
        let mut tickets = self.tickets.write().await;
        tickets.rebuild(entries);
        tickets.len()
    }

    async fn owner_from_topic(&self, channel_id: ChannelId) -> Option<UserId> {
        match self.channels.channel_topic(channel_id).await {
            Ok(topic) => topic
                .as_deref()
                .and_then(parse_snowflake)
                .map(UserId::new),
            Err(e) => {
                tracing::warn!("Failed to read topic of ticket {}: {}", channel_id, e);
                None
            }
        }
    }
}

/// Finds ticket channels among a guild's channels.
///
/// A ticket channel sits in one of the ticket categories and has the owner's user ID as
/// its topic. If an owner somehow has several, the last one scanned wins.
pub fn scan_ticket_channels<'c>(
    config: &TicketConfig,
    channels: impl IntoIterator<Item = &'c GuildChannel>,
) -> Vec<(UserId, ChannelId)> {
    channels
        .into_iter()
        .filter(|channel| {
            channel
                .parent_id
                .is_some_and(|parent| config.is_ticket_category(parent))
        })
        .filter_map(|channel| {
            let owner = channel.topic.as_deref().and_then(parse_snowflake)?;
            Some((UserId::new(owner), channel.id))
        })
        .collect()
}
