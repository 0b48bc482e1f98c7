//! Support ticket models.
//!
//! Tickets are private text channels, one per requester. The channel topic stores the
//! requester's user ID so the registry can be rebuilt by scanning channels after a
//! restart.

use serenity::all::{ChannelId, GuildId, UserId};

/// Custom ID of the button that closes a ticket.
pub const CLOSE_TICKET_CUSTOM_ID: &str = "close_ticket";

/// Prefix of every ticket channel name.
const TICKET_CHANNEL_PREFIX: &str = "ticket-";

/// The kinds of ticket a member can open from a panel button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketKind {
    /// Application to join the community.
    Application,
    /// General help request.
    Help,
}

impl TicketKind {
    /// Resolves a panel button custom ID to a ticket kind.
    pub fn from_custom_id(custom_id: &str) -> Option<Self> {
        match custom_id {
            "create_ticket" => Some(Self::Application),
            "create_ticket_help" => Some(Self::Help),
            _ => None,
        }
    }

    /// Custom ID of the panel button that opens this kind of ticket.
    pub fn custom_id(self) -> &'static str {
        match self {
            Self::Application => "create_ticket",
            Self::Help => "create_ticket_help",
        }
    }

    /// Title of the intro embed posted in a new ticket channel.
    pub fn ticket_title(self, username: &str) -> String {
        match self {
            Self::Application => format!("{}'s Application Ticket", username),
            Self::Help => format!("{}'s Help Ticket", username),
        }
    }

    /// Body of the intro embed posted in a new ticket channel.
    pub fn ticket_description(self) -> &'static str {
        match self {
            Self::Application => {
                "Please read the requirements and answer the questions in this ticket:\n\n1.\n2.\n3."
            }
            Self::Help => {
                "Welcome to the help ticket! Please describe your issue in detail and our support team will assist you shortly."
            }
        }
    }

    /// Title and body of the panel message carrying the open button.
    pub fn panel_text(self) -> (&'static str, &'static str) {
        match self {
            Self::Application => (
                "Want to join us?",
                "Click the button below to create a new ticket and contact the administration!",
            ),
            Self::Help => ("Do you need help?", "Click the button below to get help!"),
        }
    }
}

/// Everything needed to create a ticket channel for a requester.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketChannelRequest {
    pub guild_id: GuildId,
    pub user_id: UserId,
    pub username: String,
    pub kind: TicketKind,
}

impl TicketChannelRequest {
    /// Channel name for this ticket.
    pub fn channel_name(&self) -> String {
        ticket_channel_name(&self.username)
    }
}

/// Result of a request to open a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketOutcome {
    /// A new ticket channel was created.
    Created(ChannelId),
    /// The requester already has a live ticket channel.
    AlreadyOpen(ChannelId),
    /// Another request from the same requester is still creating its channel.
    CreationInProgress,
}

/// Builds a Discord-safe channel name for a requester.
///
/// Discord lowercases text channel names and replaces unsupported characters; doing it
/// here keeps the name predictable. Falls back to `ticket-user` for names with no usable
/// characters.
pub fn ticket_channel_name(username: &str) -> String {
    let slug: String = username
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '-' })
        .collect();
    let slug = slug.trim_matches('-');

    if slug.is_empty() {
        format!("{}user", TICKET_CHANNEL_PREFIX)
    } else {
        format!("{}{}", TICKET_CHANNEL_PREFIX, slug)
    }
}
