use serenity::all::User;

/// Small profile record resolved from `GET /users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscordProfile {
    pub user_id: u64,
    /// Global display name, falling back to the username.
    pub display_name: String,
    pub avatar_url: Option<String>,
}

impl From<&User> for DiscordProfile {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id.get(),
            display_name: user
                .global_name
                .clone()
                .unwrap_or_else(|| user.name.clone()),
            avatar_url: user.avatar_url(),
        }
    }
}
