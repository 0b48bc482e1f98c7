use chrono::{Duration, TimeZone, Utc};
use serenity::all::{GuildId, RoleId, UserId};

use crate::{
    bot::command::temp_role::{format_grant_list, format_stats},
    model::grant::{ActiveGrant, Grant, GrantStats},
};

fn active_grant(role_id: u64, remaining: Duration) -> ActiveGrant {
    let granted_at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    ActiveGrant {
        grant: Grant {
            guild_id: GuildId::new(100),
            user_id: UserId::new(10),
            role_id: RoleId::new(role_id),
            granted_at,
            expires_at: granted_at + Duration::days(7),
            granted_by: UserId::new(1),
            reason: "No reason provided".to_string(),
        },
        remaining,
    }
}

/// Tests the reply for a member without grants.
///
/// Expected: a plain notice instead of an empty list
#[test]
fn lists_no_grants() {
    assert_eq!(format_grant_list(&[]), "You have no temporary roles.");
}

/// Tests the reply listing active grants.
///
/// Expected: one line per grant with role mention and remaining time
#[test]
fn lists_active_grants() {
    let reply = format_grant_list(&[
        active_grant(50, Duration::hours(5)),
        active_grant(51, Duration::days(3)),
    ]);

    let lines: Vec<&str> = reply.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("- <@&50> expires in 5h 0m"));
    assert!(lines[2].starts_with("- <@&51> expires in 3d 0h 0m"));
}

/// Tests the statistics reply.
///
/// Expected: every counter shown
#[test]
fn renders_stats() {
    let reply = format_stats(&GrantStats {
        total_grants: 4,
        active_grants: 3,
        expiring_soon: 1,
        tracked_subjects: 2,
    });

    assert!(reply.contains("Tracked grants: 4"));
    assert!(reply.contains("Active: 3"));
    assert!(reply.contains("Expiring within 24h: 1"));
    assert!(reply.contains("Members with grants: 2"));
    assert!(reply.contains("forgotten if the bot restarts"));
}
