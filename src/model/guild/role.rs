use std::cmp::Ordering;

use crate::model::id::RoleId;
use crate::model::permissions::Permissions;
use crate::model::utils::is_false;

/// Information about a role within a guild.
///
/// A role represents a set of permissions, and can be attached to one or multiple users. A role
/// has various miscellaneous configurations, such as being assigned a colour. Roles are unique per
/// guild and do not cross over to other guilds in any way, and can have channel-specific
/// permission overrides in addition to guild-level permissions.
///
/// [Discord docs](https://discord.com/developers/docs/topics/permissions#role-object).
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct Role {
    /// The Id of the role. Can be used to calculate the role's creation date.
    pub id: RoleId,
    /// The name of the role.
    pub name: String,
    /// The colour of the role, as an integer representation of its RGB value.
    #[serde(rename = "color", default)]
    pub colour: u32,
    /// Indicator of whether the role is pinned above lesser roles.
    ///
    /// In the client, this causes [`Member`]s in the role to be seen above those in roles with a
    /// lower [`Self::position`].
    ///
    /// [`Member`]: super::Member
    #[serde(default, skip_serializing_if = "is_false")]
    pub hoist: bool,
    /// Indicator of whether the role is managed by an integration service.
    #[serde(default, skip_serializing_if = "is_false")]
    pub managed: bool,
    /// Indicator of whether the role can be mentioned, similar to mentioning a specific member or
    /// `@everyone`.
    #[serde(default, skip_serializing_if = "is_false")]
    pub mentionable: bool,
    /// The set of permissions that the role has.
    pub permissions: Permissions,
    /// The role's position in the position list. Roles are considered higher in hierarchy if
    /// their position is higher.
    #[serde(default)]
    pub position: u16,
}

impl Eq for Role {}

impl PartialEq for Role {
    fn eq(&self, other: &Role) -> bool {
        self.id == other.id
    }
}

impl Ord for Role {
    fn cmp(&self, other: &Role) -> Ordering {
        if self.position == other.position {
            self.id.cmp(&other.id)
        } else {
            self.position.cmp(&other.position)
        }
    }
}

impl PartialOrd for Role {
    fn partial_cmp(&self, other: &Role) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
