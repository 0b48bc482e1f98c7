//! Discord gateway integration.
//!
//! Owns the Serenity client and routes gateway events, slash commands and button
//! clicks into the services. Handlers never hold a store lock across a Discord call;
//! locking is left to the services.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild availability (ticket registry rebuild) and channel deletions
//! - `GUILD_MEMBERS` - Member join and leave events for greetings (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod component;
pub mod guard;
pub mod handler;
pub mod start;

#[cfg(test)]
mod test;
