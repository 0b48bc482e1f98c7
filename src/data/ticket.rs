//! Registry of open support tickets.
//!
//! Maps a requester to the channel of their single open ticket. The registry never talks
//! to Discord; callers that find a recorded channel has disappeared must `close` the
//! entry themselves before treating the slot as free.

use serenity::all::{ChannelId, UserId};
use std::collections::{HashMap, HashSet};

/// Outcome of trying to reserve a ticket slot for a requester.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reservation {
    /// The slot is now held by the caller until `open` or `release`.
    Reserved,
    /// The requester already has a recorded ticket channel.
    AlreadyOpen(ChannelId),
    /// Another caller holds the reservation.
    Pending,
}

#[derive(Debug, Default)]
pub struct TicketRegistry {
    open: HashMap<UserId, ChannelId>,
    reserved: HashSet<UserId>,
}

impl TicketRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `channel_id` as the requester's open ticket.
    ///
    /// Overwrites any previous entry for the requester and clears their reservation.
    pub fn open(&mut self, user_id: UserId, channel_id: ChannelId) {
        self.reserved.remove(&user_id);
        self.open.insert(user_id, channel_id);
    }

    /// Returns the requester's recorded ticket channel, if any.
    ///
    /// The channel may no longer exist; see the module docs.
    pub fn lookup(&self, user_id: UserId) -> Option<ChannelId> {
        self.open.get(&user_id).copied()
    }

    /// Removes the requester's entry unconditionally.
    ///
    /// # Returns
    /// - `Some(ChannelId)` - The channel that was recorded
    /// - `None` - Nothing was recorded
    pub fn close(&mut self, user_id: UserId) -> Option<ChannelId> {
        self.open.remove(&user_id)
    }

    /// Replaces the recorded tickets with `entries`, discarding prior entries.
    ///
    /// Used after scanning the guild's ticket channels, which happens again on every
    /// reconnect. A reservation survives unless the scan already found that
    /// requester's channel, since its channel may still be in creation.
    pub fn rebuild(&mut self, entries: impl IntoIterator<Item = (UserId, ChannelId)>) {
        self.open = entries.into_iter().collect();
        let open = &self.open;
        self.reserved.retain(|user_id| !open.contains_key(user_id));
    }

    /// Atomically claims the ticket slot for a requester before creating a channel.
    ///
    /// Closes the window between checking for an existing ticket and recording the new
    /// one, during which two clicks from the same requester could both create channels.
    pub fn reserve(&mut self, user_id: UserId) -> Reservation {
        if let Some(channel_id) = self.lookup(user_id) {
            return Reservation::AlreadyOpen(channel_id);
        }
        if !self.reserved.insert(user_id) {
            return Reservation::Pending;
        }

        Reservation::Reserved
    }

    /// Drops a reservation after channel creation failed.
    pub fn release(&mut self, user_id: UserId) {
        self.reserved.remove(&user_id);
    }

    /// Reverse lookup of the requester owning a ticket channel.
    pub fn subject_for_channel(&self, channel_id: ChannelId) -> Option<UserId> {
        self.open
            .iter()
            .find(|(_, channel)| **channel == channel_id)
            .map(|(user_id, _)| *user_id)
    }

    /// Removes the entry pointing at `channel_id`, if any.
    ///
    /// Leaves the requester's entry alone if it already points at a different channel.
    pub fn close_by_channel(&mut self, channel_id: ChannelId) -> Option<UserId> {
        let user_id = self.subject_for_channel(channel_id)?;
        self.close(user_id);
        Some(user_id)
    }

    /// Number of recorded open tickets.
    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}
