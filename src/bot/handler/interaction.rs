use serenity::all::{Context, Interaction};

use crate::{
    bot::{command, component},
    state::BotState,
};

/// Handles the interaction_create event for slash commands and button clicks.
///
/// Other interaction kinds (autocomplete, modals) are not used by the bot and are
/// ignored.
pub async fn handle_interaction_create(state: &BotState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => command::handle_command(state, &ctx, &command).await,
        Interaction::Component(component) => {
            component::handle_component(state, &ctx, &component).await
        }
        _ => {}
    }
}
