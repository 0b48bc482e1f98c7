//! In-memory state layer.
//!
//! Holds the two process-local stores: the temporary role `GrantStore` and the
//! `TicketRegistry`. Neither performs I/O and neither is persisted; a restart is a full
//! reset. Both are plain synchronous structs, and `state::BotState` owns them behind
//! `tokio::sync::RwLock` because Serenity dispatches events on several worker threads.

pub mod grant;
pub mod ticket;

pub use grant::GrantStore;
pub use ticket::TicketRegistry;

#[cfg(test)]
mod test;
