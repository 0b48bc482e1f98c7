//! Bot state shared across event handlers and the expiry scheduler.
//!
//! `BotState` is constructed once at startup and cloned into the Serenity event handler
//! and the scheduler job. All fields are cheap to clone:
//! - the two stores sit behind `Arc<RwLock<..>>` and clones share them
//! - `Arc<Config>` and `Arc<dyn Clock>` are reference-counted pointers
//! - the panel flag is an `Arc<AtomicBool>` shared by every clone

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tokio::sync::RwLock;

use crate::{
    config::Config,
    data::{GrantStore, TicketRegistry},
    util::clock::Clock,
};

#[derive(Clone)]
pub struct BotState {
    /// Temporary role grants awaiting expiry.
    ///
    /// Mutated by the temp role commands and by the expiry sweep. The lock is never held
    /// across a Discord call.
    pub grants: Arc<RwLock<GrantStore>>,

    /// Requester to open ticket channel mapping.
    pub tickets: Arc<RwLock<TicketRegistry>>,

    pub config: Arc<Config>,

    /// Time source for grant creation and the expiry sweep.
    pub clock: Arc<dyn Clock>,

    /// Set once the ticket panels have been posted by this process.
    panels_posted: Arc<AtomicBool>,
}

impl BotState {
    /// Creates the state with empty stores.
    ///
    /// # Arguments
    /// - `config` - Loaded bot configuration
    /// - `clock` - Time source, `SystemClock` outside of tests
    pub fn new(config: Config, clock: Arc<dyn Clock>) -> Self {
        Self {
            grants: Arc::new(RwLock::new(GrantStore::new())),
            tickets: Arc::new(RwLock::new(TicketRegistry::new())),
            config: Arc::new(config),
            clock,
            panels_posted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Claims the one panel post allowed per process.
    ///
    /// Ready fires again after every gateway reconnect; only the first caller gets
    /// `true`.
    pub fn claim_panel_post(&self) -> bool {
        !self.panels_posted.swap(true, Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::clock::SystemClock;

    fn state() -> BotState {
        let config = Config::from_lookup(|name| match name {
            "DISCORD_BOT_TOKEN" => Some("token".to_string()),
            "TICKET_STAFF_ROLE_ID"
            | "TICKET_APPLICATION_CATEGORY_ID"
            | "TICKET_HELP_CATEGORY_ID" => Some("1467935721707802675".to_string()),
            _ => None,
        })
        .unwrap();
        BotState::new(config, Arc::new(SystemClock))
    }

    /// Tests that panels are claimed once per process.
    ///
    /// Verifies that a second ready event, seen through a cloned state as the event
    /// handler holds it, does not get to post the panels again.
    ///
    /// Expected: true on the first claim, false afterwards
    #[test]
    fn panel_post_is_claimed_once() {
        let state = state();
        let handler_state = state.clone();

        assert!(handler_state.claim_panel_post());
        assert!(!handler_state.claim_panel_post());
        assert!(!state.claim_panel_post());
    }
}
