//! Test factory for creating Serenity Role objects.

use serenity::all::Role;

/// Creates a test Serenity Role the way `GET /guilds/{id}/roles` would return it.
///
/// Everything besides id, name and color is a neutral default (not hoisted, not
/// managed, not mentionable, no permissions, position 1).
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `color` - Role color as a 24-bit RGB integer
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// let role = create_test_role(123456789, "VIP", 0xFF0000);
/// assert_eq!(role.colour.0, 0xFF0000);
/// ```
pub fn create_test_role(role_id: u64, name: &str, color: u32) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "guild_id": "1",
        "name": name,
        "color": color,
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": 1,
        "permissions": "0",
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}
