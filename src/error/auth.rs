use thiserror::Error;

/// Authorization failures for commands and ticket buttons.
///
/// The display text of each variant is shown to the invoking user as an
/// ephemeral reply, so it must not contain internal details.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// The member does not hold the Administrator permission.
    #[error("Only administrators can use this command.")]
    NotAdministrator,

    /// The member does not hold the ticket staff role.
    #[error("Only Administration can close tickets!")]
    NotTicketStaff,

    /// The interaction did not originate from a guild.
    #[error("This can only be used inside a server.")]
    NotInGuild,
}
