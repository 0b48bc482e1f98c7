//! Test factory for creating Serenity GuildChannel objects.

use serenity::all::GuildChannel;

/// Creates a test guild text channel.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Guild the channel belongs to
/// - `parent_id` - Category the channel sits in, if any
/// - `topic` - Channel topic, if any
///
/// # Returns
/// - `GuildChannel` - A valid Serenity GuildChannel struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::channel::create_test_text_channel;
///
/// // Ticket channel under category 700 owned by user 10
/// let channel = create_test_text_channel(800, 100, Some(700), Some("10"));
/// assert_eq!(channel.topic.as_deref(), Some("10"));
/// ```
pub fn create_test_text_channel(
    channel_id: u64,
    guild_id: u64,
    parent_id: Option<u64>,
    topic: Option<&str>,
) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "type": 0,
        "guild_id": guild_id.to_string(),
        "name": format!("channel-{}", channel_id),
        "position": 0,
        "permission_overwrites": [],
        "parent_id": parent_id.map(|id| id.to_string()),
        "topic": topic,
        "nsfw": false,
        "last_message_id": null,
        "rate_limit_per_user": 0,
        "flags": 0,
    }))
    .expect("Failed to create test channel - invalid JSON structure")
}
