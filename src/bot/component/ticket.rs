//! Ticket panel buttons and the close button.

use serenity::all::{
    ButtonStyle, ComponentInteraction, Context, CreateActionRow, CreateButton, CreateEmbed,
    CreateEmbedFooter, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, CreateMessage, EditInteractionResponse, Timestamp,
};

use crate::{
    bot::guard::require_ticket_staff,
    error::{auth::AuthError, AppError},
    model::ticket::{TicketChannelRequest, TicketKind, TicketOutcome},
    service::{
        discord::{bounded, DiscordAdapters},
        ticket::TicketService,
    },
    state::BotState,
};

const PANEL_EMBED_COLOR: u32 = 0x0099ff;

/// Posts the panel message for each ticket kind whose panel channel is configured.
///
/// Runs at most once per process; later ready events after a reconnect find the panels
/// already posted. Failures are logged per panel and not retried.
pub async fn post_panels(state: &BotState, ctx: &Context) {
    if !state.claim_panel_post() {
        tracing::debug!("Ticket panels already posted, skipping");
        return;
    }

    for kind in [TicketKind::Application, TicketKind::Help] {
        let Some(channel_id) = state.config.tickets.panel_channel_for(kind) else {
            continue;
        };

        let (title, description) = kind.panel_text();
        let embed = CreateEmbed::new()
            .title(title)
            .description(description)
            .color(PANEL_EMBED_COLOR)
            .timestamp(Timestamp::now())
            .footer(CreateEmbedFooter::new(format!(
                "{} Support",
                state.config.community_name
            )));
        let button = CreateButton::new(kind.custom_id())
            .label("Create ticket")
            .style(ButtonStyle::Primary);
        let message = CreateMessage::new()
            .embed(embed)
            .components(vec![CreateActionRow::Buttons(vec![button])]);

        let result = bounded(
            "post_panel",
            "channel",
            state.config.external_call_timeout,
            channel_id.send_message(&ctx.http, message),
        )
        .await;

        match result {
            Ok(_) => tracing::info!("Posted {:?} ticket panel in channel {}", kind, channel_id),
            Err(e) => tracing::warn!(
                "Failed to post {:?} ticket panel in channel {}: {}",
                kind,
                channel_id,
                e
            ),
        }
    }
}

/// Handles a click on one of the panel buttons.
pub async fn handle_open_ticket(
    state: &BotState,
    ctx: &Context,
    component: &ComponentInteraction,
    kind: TicketKind,
) {
    if let Err(e) = component.defer_ephemeral(&ctx.http).await {
        tracing::warn!("Failed to defer ticket button: {}", e);
        return;
    }

    let reply = match open_ticket(state, ctx, component, kind).await {
        Ok(outcome) => open_ticket_reply(outcome),
        Err(e) => e.user_message(),
    };

    if let Err(e) = component
        .edit_response(&ctx.http, EditInteractionResponse::new().content(reply))
        .await
    {
        tracing::warn!("Failed to reply to ticket button: {}", e);
    }
}

async fn open_ticket(
    state: &BotState,
    ctx: &Context,
    component: &ComponentInteraction,
    kind: TicketKind,
) -> Result<TicketOutcome, AppError> {
    let guild_id = component.guild_id.ok_or(AuthError::NotInGuild)?;

    let request = TicketChannelRequest {
        guild_id,
        user_id: component.user.id,
        username: component.user.name.clone(),
        kind,
    };

    let adapters = DiscordAdapters::new(ctx.http.clone(), &state.config);
    let tickets = TicketService::new(&state.tickets, &adapters.channels, &adapters.notifier);

    tickets.open_ticket(&request).await
}

/// Reply shown to the member after clicking a panel button.
pub fn open_ticket_reply(outcome: TicketOutcome) -> String {
    match outcome {
        TicketOutcome::Created(channel_id) => {
            format!("Your ticket has been created in: <#{}>", channel_id)
        }
        TicketOutcome::AlreadyOpen(channel_id) => {
            format!("You have already opened a ticket: <#{}>", channel_id)
        }
        TicketOutcome::CreationInProgress => {
            "Your ticket is being created, please wait a moment.".to_string()
        }
    }
}

/// Handles a click on the close button inside a ticket channel.
///
/// Non-staff get an ephemeral refusal. For staff the click is acknowledged before the
/// channel is deleted, since there is nothing left to reply in afterwards; a failure
/// is reported with an ephemeral follow-up.
pub async fn handle_close_ticket(state: &BotState, ctx: &Context, component: &ComponentInteraction) {
    if let Err(e) = require_ticket_staff(
        component.member.as_ref(),
        state.config.tickets.staff_role_id,
    ) {
        let refusal = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(AppError::from(e).user_message())
                .ephemeral(true),
        );
        if let Err(e) = component.create_response(&ctx.http, refusal).await {
            tracing::warn!("Failed to refuse ticket close: {}", e);
        }
        return;
    }

    if let Err(e) = component
        .create_response(&ctx.http, CreateInteractionResponse::Acknowledge)
        .await
    {
        tracing::warn!("Failed to acknowledge ticket close: {}", e);
        return;
    }

    let adapters = DiscordAdapters::new(ctx.http.clone(), &state.config);
    let tickets = TicketService::new(&state.tickets, &adapters.channels, &adapters.notifier);

    if let Err(e) = tickets
        .close_ticket(component.channel_id, component.user.id)
        .await
    {
        let followup = CreateInteractionResponseFollowup::new()
            .content(e.user_message())
            .ephemeral(true);
        if let Err(e) = component.create_followup(&ctx.http, followup).await {
            tracing::warn!("Failed to report ticket close failure: {}", e);
        }
    }
}
