//! Service layer for the bot's stateful features.
//!
//! Services orchestrate between the in-memory stores (`data/`) and Discord. Discord is
//! reached only through the collaborator traits defined here, `RoleAuthority`,
//! `Notifier` and `TicketChannels`, whose Serenity-backed implementations live in
//! `service::discord`. This keeps the expiry sweep and the ticket workflow testable
//! without a gateway connection.
//!
//! Services are cheap structs borrowing their collaborators, constructed per event or
//! per scheduler tick.

pub mod discord;
pub mod notifier;
pub mod reconciler;
pub mod role_authority;
pub mod temp_role;
pub mod ticket;
pub mod ticket_channels;
