//! Message component (button) dispatch.

pub mod ticket;

use serenity::all::{ComponentInteraction, Context};

use crate::{
    model::ticket::{TicketKind, CLOSE_TICKET_CUSTOM_ID},
    state::BotState,
};

/// Routes a button click by its custom ID. Unknown IDs are ignored.
pub async fn handle_component(state: &BotState, ctx: &Context, component: &ComponentInteraction) {
    let custom_id = component.data.custom_id.as_str();

    if custom_id == CLOSE_TICKET_CUSTOM_ID {
        ticket::handle_close_ticket(state, ctx, component).await;
    } else if let Some(kind) = TicketKind::from_custom_id(custom_id) {
        ticket::handle_open_ticket(state, ctx, component, kind).await;
    } else {
        tracing::debug!("Ignoring unknown component {}", custom_id);
    }
}
