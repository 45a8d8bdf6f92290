use std::ops::{Deref, DerefMut};

use crate::model::id::{GuildId, RoleId, UserId};
use crate::model::permissions::Permissions;
use crate::model::timestamp::Timestamp;
use crate::model::user::User;
use crate::model::utils::is_false;

/// Information about a member of a guild.
///
/// [Discord docs](https://discord.com/developers/docs/resources/guild#guild-member-object).
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct Member {
    /// Attached User struct.
    pub user: User,
    /// The member's nickname, if present.
    ///
    /// Can't be longer than 32 characters.
    #[serde(default)]
    pub nick: Option<String>,
    /// The guild avatar hash
    #[serde(default)]
    pub avatar: Option<String>,
    /// Vector of Ids of [`Role`]s given to the member.
    ///
    /// [`Role`]: super::Role
    #[serde(default)]
    pub roles: Vec<RoleId>,
    /// Timestamp representing the date when the member joined.
    #[serde(default)]
    pub joined_at: Option<Timestamp>,
    /// Indicator of whether the member can hear in voice channels.
    #[serde(default, skip_serializing_if = "is_false")]
    pub deaf: bool,
    /// Indicator of whether the member can speak in voice channels.
    #[serde(default, skip_serializing_if = "is_false")]
    pub mute: bool,
    /// The unique Id of the guild that the member is a part of.
    ///
    /// Discord leaves this out of most payloads; interactions fill it in from their own
    /// `guild_id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<GuildId>,
}

impl Member {
    /// Calculates the member's display name.
    ///
    /// The nickname takes priority over the member's display name, which takes priority over
    /// their username.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.nick.as_deref().unwrap_or_else(|| self.user.display_name())
    }

    /// Returns whether the member was given the role.
    #[must_use]
    pub fn has_role(&self, role_id: RoleId) -> bool {
        self.roles.contains(&role_id)
    }
}

impl From<Member> for UserId {
    /// Gets the Id of a [`Member`].
    fn from(member: Member) -> UserId {
        member.user.id
    }
}

impl<'a> From<&'a Member> for UserId {
    /// Gets the Id of a [`Member`].
    fn from(member: &Member) -> UserId {
        member.user.id
    }
}

/// A [`Member`] as sent with an interaction.
///
/// Compared to a plain member, it carries the member's resolved permissions in the channel the
/// interaction was triggered from, overwrites included.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-object-interaction-structure).
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct InteractionMember {
    #[serde(flatten)]
    pub member: Member,
    /// Total permissions of the member in the channel, including overwrites.
    pub permissions: Permissions,
}

impl Deref for InteractionMember {
    type Target = Member;

    fn deref(&self) -> &Self::Target {
        &self.member
    }
}

impl DerefMut for InteractionMember {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.member
    }
}

impl From<InteractionMember> for Member {
    fn from(member: InteractionMember) -> Member {
        member.member
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{from_value, json, to_value};

    fn interaction_member() -> InteractionMember {
        from_value(json!({
            "user": {"id": "53908232506183680", "username": "mason", "avatar": null},
            "nick": null,
            "roles": ["41771983423143936"],
            "joined_at": "2015-04-26T06:26:56.936000+00:00",
            "deaf": false,
            "mute": false,
            "permissions": "2048",
        }))
        .unwrap()
    }

    #[test]
    fn flattened_permissions() {
        let member = interaction_member();

        assert!(member.permissions.send_messages());
        assert!(member.has_role(RoleId::new(41771983423143936)));
        assert_eq!(member.display_name(), "mason");
        assert!(member.guild_id.is_none());

        let value = to_value(&member).unwrap();
        assert_eq!(value["permissions"], json!("2048"));
        assert_eq!(value["user"]["username"], json!("mason"));
        assert!(value.get("deaf").is_none());
    }
}
