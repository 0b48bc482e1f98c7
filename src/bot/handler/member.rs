//! Member join and leave greetings.
//!
//! Both messages are best effort: a missing channel or a failed send is logged and
//! otherwise ignored. Either greeting is skipped when its channel is not configured.

use serenity::all::{
    ChannelId, Context, CreateEmbed, CreateEmbedFooter, CreateMessage, GuildId, Member, Timestamp,
    User,
};

use crate::{service::discord::bounded, state::BotState};

const WELCOME_COLOR: u32 = 0x00ff00;

/// Handles the guild_member_addition event when a member joins a guild
pub async fn handle_guild_member_addition(state: &BotState, ctx: Context, new_member: Member) {
    tracing::info!(
        "User {} joined guild {}",
        new_member.user.id,
        new_member.guild_id
    );

    let Some(channel_id) = state.config.welcome_channel_id else {
        return;
    };

    let community = &state.config.community_name;
    let embed = CreateEmbed::new()
        .title(format!("👋 Welcome to {}!", community))
        .description(format!(
            "Hi <@{}>, it's nice to see you on our server!",
            new_member.user.id
        ))
        .color(WELCOME_COLOR)
        .thumbnail(new_member.user.face())
        .timestamp(Timestamp::now())
        .footer(CreateEmbedFooter::new(format!("{} Community", community)));

    send_greeting(
        state,
        &ctx,
        channel_id,
        CreateMessage::new().embed(embed),
        "welcome",
    )
    .await;
}

/// Handles the guild_member_removal event when a member leaves a guild
pub async fn handle_guild_member_removal(
    state: &BotState,
    ctx: Context,
    guild_id: GuildId,
    user: User,
    _member_data_if_available: Option<Member>,
) {
    tracing::info!("User {} left guild {}", user.id, guild_id);

    let Some(channel_id) = state.config.farewell_channel_id else {
        return;
    };

    let content = format!("**{}** has left the server. Goodbye!", user.name);

    send_greeting(
        state,
        &ctx,
        channel_id,
        CreateMessage::new().content(content),
        "farewell",
    )
    .await;
}

async fn send_greeting(
    state: &BotState,
    ctx: &Context,
    channel_id: ChannelId,
    message: CreateMessage,
    kind: &'static str,
) {
    let result = bounded(
        "send_greeting",
        "channel",
        state.config.external_call_timeout,
        channel_id.send_message(&ctx.http, message),
    )
    .await;

    if let Err(e) = result {
        tracing::warn!(
            "Failed to post {} message in channel {}: {}",
            kind,
            channel_id,
            e
        );
    }
}
