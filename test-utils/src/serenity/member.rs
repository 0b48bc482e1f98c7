//! Test factory for creating Serenity Member objects.

use serenity::all::Member;

/// Creates a test Serenity Member.
///
/// Members attached to an interaction carry their computed permissions in the
/// channel the interaction came from; pass `permissions` to simulate that. Gateway
/// members leave it as `None`.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `user_id` - Discord user ID (snowflake), also used to derive the username
/// - `role_ids` - Roles held by the member
/// - `permissions` - Computed permission bits, if any
///
/// # Returns
/// - `Member` - A valid Serenity Member struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(
    guild_id: u64,
    user_id: u64,
    role_ids: &[u64],
    permissions: Option<u64>,
) -> Member {
    let roles: Vec<String> = role_ids.iter().map(u64::to_string).collect();

    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "user": {
            "id": user_id.to_string(),
            "username": format!("user{}", user_id),
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
            "bot": false,
        },
        "nick": null,
        "avatar": null,
        "roles": roles,
        "joined_at": "2024-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "permissions": permissions.map(|bits| bits.to_string()),
        "communication_disabled_until": null,
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
