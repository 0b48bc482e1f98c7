//! Domain models shared by the data, service and bot layers.
//!
//! Models use Serenity's strongly typed snowflake IDs (`GuildId`, `UserId`, `RoleId`,
//! `ChannelId`) rather than raw integers so that a role can never be passed where a
//! user was expected.

pub mod grant;
pub mod member;
pub mod notification;
pub mod ticket;
