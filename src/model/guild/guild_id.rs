#[cfg(feature = "http")]
use crate::http::Http;
#[cfg(feature = "http")]
use crate::internal::prelude::*;
#[cfg(feature = "http")]
use crate::model::prelude::*;

#[cfg(feature = "http")]
impl GuildId {
    /// Creates an emoji in the guild from a name and raw image bytes.
    ///
    /// The name of the emoji must be at least 2 characters long and can only contain alphanumeric
    /// characters and underscores. An empty `roles` list leaves the emoji usable by everyone.
    ///
    /// **Note**: Requires the [Create Guild Expressions] permission.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Model`] if the name is shorter than 2 or longer than 32 characters, or
    /// [`Error::Http`] if the current user lacks permission.
    ///
    /// [Create Guild Expressions]: Permissions::CREATE_GUILD_EXPRESSIONS
    pub async fn create_emoji(
        self,
        http: &Http,
        name: &str,
        image: &[u8],
        roles: &[RoleId],
        audit_log_reason: Option<&str>,
    ) -> Result<Emoji> {
        http.create_guild_emoji(self, name, image, roles, audit_log_reason).await
    }

    /// Gets the guild from the REST API.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Http`] if the current user is not in the guild.
    pub async fn to_guild(self, http: &Http) -> Result<Guild> {
        http.get_guild(self).await
    }

    /// Gets a user's [`Member`] for the guild by Id.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Http`] if the user is not in the guild.
    pub async fn member(self, http: &Http, user_id: impl Into<UserId>) -> Result<Member> {
        let mut member = http.get_member(self, user_id.into()).await?;
        member.guild_id = Some(self);
        Ok(member)
    }

    /// Gets a list of the guild's bans.
    ///
    /// **Note**: Requires the [Ban Members] permission.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Http`] if the current user lacks permission.
    ///
    /// [Ban Members]: Permissions::BAN_MEMBERS
    pub async fn bans(self, http: &Http) -> Result<Vec<Ban>> {
        http.get_bans(self).await
    }
}
