//! User information-related models.

use std::fmt;

use super::id::UserId;
use super::utils::is_false;

/// Information about a user.
///
/// [Discord docs](https://discord.com/developers/docs/resources/user#user-object).
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct User {
    /// The unique Id of the user. Can be used to calculate the account's creation date.
    pub id: UserId,
    /// The account's username. Changing username will trigger a discriminator change if the
    /// username+discriminator pair becomes non-unique. Unless the account has migrated to a next
    /// generation username, which does not have a discriminant.
    #[serde(rename = "username")]
    pub name: String,
    /// The account's discriminator to differentiate the user from others with the same
    /// [`Self::name`]. `"0"` for accounts migrated to unique usernames.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<String>,
    /// The account's display name, if it is set. For bots this is the application name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_name: Option<String>,
    /// Optional avatar hash.
    pub avatar: Option<String>,
    /// Indicator of whether the user is a bot.
    #[serde(default, skip_serializing_if = "is_false")]
    pub bot: bool,
}

impl User {
    /// Returns the name Discord shows for this user: the display name if one is set, otherwise
    /// the username.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.global_name.as_deref().unwrap_or(&self.name)
    }

    /// Returns a formatted URL of the user's avatar, if one exists.
    #[must_use]
    pub fn avatar_url(&self) -> Option<String> {
        let hash = self.avatar.as_deref()?;
        let ext = if hash.starts_with("a_") { "gif" } else { "webp" };

        Some(format!("https://cdn.discordapp.com/avatars/{}/{hash}.{ext}?size=1024", self.id))
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl std::hash::Hash for User {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        self.id.hash(hasher);
    }
}

impl fmt::Display for User {
    /// Formats a string which will mention the user.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<@{}>", self.id)
    }
}

impl From<User> for UserId {
    /// Gets the Id of a [`User`].
    fn from(user: User) -> UserId {
        user.id
    }
}

impl<'a> From<&'a User> for UserId {
    /// Gets the Id of a [`User`].
    fn from(user: &User) -> UserId {
        user.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{from_value, json};

    #[test]
    fn display_name_falls_back_to_username() {
        let user: User = from_value(json!({
            "id": "210",
            "username": "alice",
            "discriminator": "0",
            "global_name": null,
            "avatar": "a_1234",
        }))
        .unwrap();

        assert_eq!(user.display_name(), "alice");
        assert_eq!(user.to_string(), "<@210>");
        assert_eq!(
            user.avatar_url().as_deref(),
            Some("https://cdn.discordapp.com/avatars/210/a_1234.gif?size=1024")
        );
        assert!(!user.bot);
    }
}
