//! A set of permissions for a role or user.
//!
//! Interactions triggered inside a guild carry the invoking member's resolved permissions in the
//! channel the interaction came from, see [`InteractionMember::permissions`]. The application's
//! own permissions in that channel are available on the interaction as `app_permissions`.
//!
//! Discord sends permissions as a stringified integer, which is how they are (de)serialized here
//! as well.
//!
//! [`InteractionMember::permissions`]: crate::model::guild::InteractionMember::permissions

bitflags::bitflags! {
    /// A set of permissions that can be assigned to [`User`]s and [`Role`]s via
    /// [`PermissionOverwrite`]s, roles globally in a [`Guild`], and to [`GuildChannel`]s.
    ///
    /// [Discord docs](https://discord.com/developers/docs/topics/permissions#permissions-bitwise-permission-flags).
    ///
    /// [`Guild`]: super::guild::Guild
    /// [`Role`]: super::guild::Role
    /// [`User`]: super::user::User
    /// [`PermissionOverwrite`]: https://discord.com/developers/docs/resources/channel#overwrite-object
    /// [`GuildChannel`]: https://discord.com/developers/docs/resources/channel#channel-object
    #[derive(Copy, Clone, Default, Debug, Eq, Hash, PartialEq)]
    pub struct Permissions: u64 {
        /// Allows for the creation of [`RichInvite`]s.
        ///
        /// [`RichInvite`]: https://discord.com/developers/docs/resources/invite#invite-object
        const CREATE_INSTANT_INVITE = 1 << 0;
        /// Allows for the kicking of guild [member]s.
        ///
        /// [member]: super::guild::Member
        const KICK_MEMBERS = 1 << 1;
        /// Allows the banning of guild [member]s.
        ///
        /// [member]: super::guild::Member
        const BAN_MEMBERS = 1 << 2;
        /// Allows all permissions, bypassing channel [permission overwrite]s.
        ///
        /// [permission overwrite]: https://discord.com/developers/docs/resources/channel#overwrite-object
        const ADMINISTRATOR = 1 << 3;
        /// Allows management and editing of guild channels.
        const MANAGE_CHANNELS = 1 << 4;
        /// Allows management and editing of the [guild].
        ///
        /// [guild]: super::guild::Guild
        const MANAGE_GUILD = 1 << 5;
        /// Allows reading messages in a guild channel. If a user does not have this permission,
        /// then they will not be able to see the channel.
        const VIEW_CHANNEL = 1 << 10;
        /// Allows sending messages in a guild channel.
        const SEND_MESSAGES = 1 << 11;
        /// Allows the deletion of other messages.
        const MANAGE_MESSAGES = 1 << 13;
        /// Allows links from this user - or users of this role - to be embedded, with potential
        /// data such as a thumbnail, description, and page name.
        const EMBED_LINKS = 1 << 14;
        /// Allows uploading of files.
        const ATTACH_FILES = 1 << 15;
        /// Allows the usage of the `@everyone` mention, which will notify all users in a channel.
        /// The `@here` mention will also be available, and can be used to mention all non-offline
        /// users.
        const MENTION_EVERYONE = 1 << 17;
        /// Allows the usage of custom emojis from other guilds.
        const USE_EXTERNAL_EMOJIS = 1 << 18;
        /// Allows management and editing of roles below their own.
        const MANAGE_ROLES = 1 << 28;
        /// Allows management of webhooks.
        const MANAGE_WEBHOOKS = 1 << 29;
        /// Allows management of emojis and stickers created without the use of an
        /// [`Integration`].
        ///
        /// [`Integration`]: super::guild::Integration
        const MANAGE_GUILD_EXPRESSIONS = 1 << 30;
        /// Allows using slash commands and other application interactions.
        const USE_APPLICATION_COMMANDS = 1 << 31;
        /// Allows for timing out users.
        const MODERATE_MEMBERS = 1 << 40;
        /// Allows creating emojis and stickers, and editing or deleting those created by the
        /// current user.
        const CREATE_GUILD_EXPRESSIONS = 1 << 43;
    }
}

bitflags_serde!(Permissions: u64, as_string);

impl Permissions {
    /// Shorthand for checking that the set of permissions contains the [Administrator]
    /// permission.
    ///
    /// [Administrator]: Self::ADMINISTRATOR
    #[must_use]
    pub const fn administrator(self) -> bool {
        self.contains(Self::ADMINISTRATOR)
    }

    /// Shorthand for checking that the set of permissions contains the [Send Messages]
    /// permission.
    ///
    /// [Send Messages]: Self::SEND_MESSAGES
    #[must_use]
    pub const fn send_messages(self) -> bool {
        self.contains(Self::SEND_MESSAGES)
    }

    /// Shorthand for checking that the set of permissions contains the [Manage Guild
    /// Expressions] permission, required to create emojis.
    ///
    /// [Manage Guild Expressions]: Self::MANAGE_GUILD_EXPRESSIONS
    #[must_use]
    pub const fn manage_guild_expressions(self) -> bool {
        self.contains(Self::MANAGE_GUILD_EXPRESSIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::Permissions;
    use crate::json::{assert_json, from_value, json};

    #[test]
    fn permissions_as_string() {
        let permissions = Permissions::SEND_MESSAGES | Permissions::EMBED_LINKS;
        assert_json(&permissions, json!("18432"));
    }

    #[test]
    fn unknown_bits_are_kept() {
        let permissions: Permissions = from_value(json!("1099511627775")).unwrap();
        assert!(permissions.administrator());
        assert_eq!(permissions.bits(), 1099511627775);
    }
}
