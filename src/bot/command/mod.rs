//! Slash command registration and dispatch.
//!
//! Every command replies ephemerally. The reply is deferred first so that slow Discord
//! calls inside a command cannot run past the interaction deadline, then edited with
//! the command's result or the error's user-facing message.

pub mod options;
pub mod temp_role;

use serenity::all::{
    Command, CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    EditInteractionResponse, Permissions,
};

use crate::{
    bot::guard::require_administrator,
    error::{auth::AuthError, AppError},
    service::discord::DiscordAdapters,
    state::BotState,
};

pub const TEMPROLE: &str = "temprole";
pub const MYROLES: &str = "myroles";
pub const ROLETIME: &str = "roletime";
pub const REMOVETEMPROLE: &str = "removetemprole";
pub const ROLESTATS: &str = "rolestats";

/// Builds the global slash command definitions.
///
/// The administrator-only commands also carry default member permissions so Discord
/// hides them from other members; the guard in `handle_command` still applies.
pub fn command_definitions() -> Vec<CreateCommand> {
    let user_option = |description: &str| {
        CreateCommandOption::new(CommandOptionType::User, "user", description).required(true)
    };
    let role_option = |description: &str| {
        CreateCommandOption::new(CommandOptionType::Role, "role", description).required(true)
    };

    vec![
        CreateCommand::new(TEMPROLE)
            .description("Give a member a role for a limited number of days")
            .default_member_permissions(Permissions::ADMINISTRATOR)
            .add_option(user_option("Member to give the role to"))
            .add_option(role_option("Role to give"))
            .add_option(
                CreateCommandOption::new(CommandOptionType::Integer, "days", "Duration in days")
                    .required(true)
                    .min_int_value(1)
                    .max_int_value(365),
            )
            .add_option(CreateCommandOption::new(
                CommandOptionType::String,
                "reason",
                "Why the role is given",
            )),
        CreateCommand::new(MYROLES).description("List your temporary roles"),
        CreateCommand::new(ROLETIME)
            .description("Show how long a member keeps a temporary role")
            .add_option(user_option("Member to check"))
            .add_option(role_option("Temporary role")),
        CreateCommand::new(REMOVETEMPROLE)
            .description("Remove a temporary role before it expires")
            .default_member_permissions(Permissions::ADMINISTRATOR)
            .add_option(user_option("Member to remove the role from"))
            .add_option(role_option("Temporary role to remove")),
        CreateCommand::new(ROLESTATS)
            .description("Show temporary role statistics for this server")
            .default_member_permissions(Permissions::ADMINISTRATOR),
    ]
}

/// Registers the slash commands globally, replacing any previous set.
pub async fn register_commands(ctx: &Context) -> Result<(), AppError> {
    let commands = Command::set_global_commands(&ctx.http, command_definitions()).await?;

    tracing::info!("Registered {} slash commands", commands.len());

    Ok(())
}

/// Runs a slash command and replies with its result.
pub async fn handle_command(state: &BotState, ctx: &Context, command: &CommandInteraction) {
    if let Err(e) = command.defer_ephemeral(&ctx.http).await {
        tracing::warn!("Failed to defer /{}: {}", command.data.name, e);
        return;
    }

    let reply = match run_command(state, ctx, command).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::debug!(
                "/{} by user {} failed: {}",
                command.data.name,
                command.user.id,
                e
            );
            e.user_message()
        }
    };

    if let Err(e) = command
        .edit_response(&ctx.http, EditInteractionResponse::new().content(reply))
        .await
    {
        tracing::warn!("Failed to reply to /{}: {}", command.data.name, e);
    }
}

async fn run_command(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<String, AppError> {
    let guild_id = command.guild_id.ok_or(AuthError::NotInGuild)?;
    let member = command.member.as_deref();
    let name = command.data.name.as_str();

    if matches!(name, TEMPROLE | REMOVETEMPROLE | ROLESTATS) {
        require_administrator(member)?;
    }

    let adapters = DiscordAdapters::new(ctx.http.clone(), &state.config);
    let service = temp_role::service(state, &adapters);
    let options = command.data.options();

    match name {
        TEMPROLE => temp_role::grant(&service, guild_id, command.user.id, &options).await,
        MYROLES => Ok(temp_role::my_roles(&service, guild_id, command.user.id).await),
        ROLETIME => temp_role::role_time(&service, guild_id, &options).await,
        REMOVETEMPROLE => temp_role::remove(&service, guild_id, &options).await,
        ROLESTATS => Ok(temp_role::stats(&service, guild_id).await),
        other => Err(AppError::NotFound(format!("Unknown command /{}.", other))),
    }
}
