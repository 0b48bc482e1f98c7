use serenity::all::{
    Context, EventHandler, Guild, GuildChannel, GuildId, Interaction, Member, Message, Ready,
    User,
};
use serenity::async_trait;

use crate::state::BotState;

pub mod channel;
pub mod guild;
pub mod interaction;
pub mod member;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: BotState,
}

impl Handler {
    pub fn new(state: BotState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.state, ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.state, ctx, guild, is_new).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.state, ctx, new_member).await;
    }

    /// Called when a member leaves a guild
    async fn guild_member_removal(
        &self,
        ctx: Context,
        guild_id: GuildId,
        user: User,
        member_data_if_available: Option<Member>,
    ) {
        member::handle_guild_member_removal(
            &self.state,
            ctx,
            guild_id,
            user,
            member_data_if_available,
        )
        .await;
    }

    /// Called when a channel is deleted from a guild
    async fn channel_delete(
        &self,
        ctx: Context,
        channel: GuildChannel,
        messages: Option<Vec<Message>>,
    ) {
        channel::handle_channel_delete(&self.state, ctx, channel, messages).await;
    }

    /// Called for slash commands and button clicks
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.state, ctx, interaction).await;
    }
}
