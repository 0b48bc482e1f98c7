//! Direct message payloads sent to members.

use chrono::{DateTime, Utc};
use serenity::all::{RoleId, UserId};

/// Embed colour for expiry and removal notices.
const COLOR_EXPIRED: u32 = 0xe67e22;
/// Embed colour for grant notices.
const COLOR_GRANTED: u32 = 0x2ecc71;
/// Embed colour for ticket closure notices.
const COLOR_TICKET_CLOSED: u32 = 0xff0000;

/// A direct message rendered as a single embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectMessage {
    pub title: String,
    pub description: String,
    pub color: u32,
}

impl DirectMessage {
    /// Notice that a temporary role has expired and was removed.
    pub fn role_expired(role_id: RoleId) -> Self {
        Self {
            title: "Temporary role expired".to_string(),
            description: format!("Your temporary role <@&{}> has expired.", role_id),
            color: COLOR_EXPIRED,
        }
    }

    /// Notice that a temporary role was removed early by an administrator.
    pub fn role_removed(role_id: RoleId) -> Self {
        Self {
            title: "Temporary role removed".to_string(),
            description: format!("Your temporary role <@&{}> was removed.", role_id),
            color: COLOR_EXPIRED,
        }
    }

    /// Notice that a temporary role was granted, with its expiry as a Discord timestamp.
    pub fn role_granted(role_id: RoleId, expires_at: DateTime<Utc>, reason: &str) -> Self {
        Self {
            title: "Temporary role granted".to_string(),
            description: format!(
                "You received <@&{}> until <t:{}:F>.\nReason: {}",
                role_id,
                expires_at.timestamp(),
                reason
            ),
            color: COLOR_GRANTED,
        }
    }

    /// Notice sent to a ticket owner when staff close the ticket.
    pub fn ticket_closed(closed_by: UserId) -> Self {
        Self {
            title: "Your ticket has been closed!".to_string(),
            description: format!("<@{}> closed your ticket", closed_by),
            color: COLOR_TICKET_CLOSED,
        }
    }
}
