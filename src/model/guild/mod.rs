//! Models relating to guilds and types that it owns.
//!
//! These are plain data containers: they carry what Discord sends and nothing more.

mod emoji;
mod guild_id;
mod integration;
mod member;
mod role;

pub use self::emoji::*;
pub use self::integration::*;
pub use self::member::*;
pub use self::role::*;
use super::id::{GuildId, UserId};
use super::user::User;

/// Information about a Discord guild, such as channels, emojis, etc.
///
/// [Discord docs](https://discord.com/developers/docs/resources/guild#guild-object).
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct Guild {
    /// The unique Id identifying the guild.
    ///
    /// This is equivalent to the Id of the default role (`@everyone`).
    pub id: GuildId,
    /// The name of the guild.
    pub name: String,
    /// The hash of the icon used by the guild.
    ///
    /// In the client, this appears on the guild list on the left-hand side.
    pub icon: Option<String>,
    /// The Id of the [`User`] who owns the guild.
    pub owner_id: UserId,
    /// A mapping of the guild's roles.
    #[serde(default)]
    pub roles: Vec<Role>,
    /// All of the guild's custom emojis.
    #[serde(default)]
    pub emojis: Vec<Emoji>,
    /// The guild features. More information available at [`discord documentation`].
    ///
    /// [`discord documentation`]: https://discord.com/developers/docs/resources/guild#guild-object-guild-features
    #[serde(default)]
    pub features: Vec<String>,
    /// The preferred locale of this guild only set if guild has the "DISCOVERABLE" feature,
    /// defaults to en-US.
    pub preferred_locale: String,
}

impl Guild {
    /// Finds a role by Id within the guild.
    #[must_use]
    pub fn role(&self, role_id: super::id::RoleId) -> Option<&Role> {
        self.roles.iter().find(|role| role.id == role_id)
    }
}

/// The status of a user.
///
/// [Discord docs](https://discord.com/developers/docs/topics/gateway-events#update-presence-status-types).
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OnlineStatus {
    #[serde(rename = "dnd")]
    DoNotDisturb,
    Idle,
    Invisible,
    Offline,
    #[default]
    Online,
}

impl OnlineStatus {
    /// The name Discord uses for this status on the wire.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::DoNotDisturb => "dnd",
            Self::Idle => "idle",
            Self::Invisible => "invisible",
            Self::Offline => "offline",
            Self::Online => "online",
        }
    }
}

/// The Id of the user a [`Presence`] belongs to.
///
/// Presence updates only carry a partial user object.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, Eq, PartialEq)]
#[non_exhaustive]
pub struct PresenceUser {
    pub id: UserId,
}

/// Information detailing the current online status of a [`User`].
///
/// [Discord docs](https://discord.com/developers/docs/topics/gateway-events#presence-update-presence-update-event-fields).
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct Presence {
    /// The user this presence relates to.
    pub user: PresenceUser,
    /// The Id of the guild the presence was received in.
    pub guild_id: Option<GuildId>,
    /// The current status.
    #[serde(default)]
    pub status: OnlineStatus,
}

/// A banned user in a guild.
///
/// [Discord docs](https://discord.com/developers/docs/resources/guild#ban-object).
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct Ban {
    /// The reason given for this ban.
    pub reason: Option<String>,
    /// The user that was banned.
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{from_value, json, to_value};

    #[test]
    fn presence_status() {
        let presence: Presence = from_value(json!({
            "user": {"id": "80351110224678912"},
            "guild_id": "81384788765712384",
            "status": "dnd",
        }))
        .unwrap();

        assert_eq!(presence.status, OnlineStatus::DoNotDisturb);
        assert_eq!(to_value(presence.status).unwrap(), json!("dnd"));

        let missing: Presence = from_value(json!({"user": {"id": "1"}, "guild_id": null})).unwrap();
        assert_eq!(missing.status, OnlineStatus::Online);
    }

    #[test]
    fn ban_without_reason() {
        let ban: Ban = from_value(json!({
            "reason": null,
            "user": {"id": "53908232506183680", "username": "Mason", "avatar": null},
        }))
        .unwrap();

        assert!(ban.reason.is_none());
        assert_eq!(ban.user.name, "Mason");
    }
}
